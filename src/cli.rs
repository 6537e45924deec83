//! Command-line interface for the tic-tac-toe window.

use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::engine::OpponentPolicy;
use crate::ui::GameConfig;

/// Tic-tac-toe against a minimax opponent that plays a random move half the time
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Seed for the opponent's random source (OS entropy when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// How the opponent picks its moves
    #[arg(long, value_enum, default_value_t = PolicyArg::Mixed)]
    pub policy: PolicyArg,

    /// Delay before the opponent moves, in milliseconds
    #[arg(long, default_value = "420")]
    pub think_ms: u64,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log: String,
}

/// Opponent policy as spelled on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Random move half the time, minimax otherwise
    Mixed,
    /// Minimax every move
    Optimal,
}

impl From<PolicyArg> for OpponentPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Mixed => OpponentPolicy::Mixed,
            PolicyArg::Optimal => OpponentPolicy::Optimal,
        }
    }
}

impl Cli {
    /// Game settings carried by the flags
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            seed: self.seed,
            policy: self.policy.into(),
            think_delay: Duration::from_millis(self.think_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["tictactoe"]).unwrap();
        assert_eq!(cli.seed, None);
        assert_eq!(cli.policy, PolicyArg::Mixed);
        assert_eq!(cli.log, "info");

        let config = cli.game_config();
        assert_eq!(config.policy, OpponentPolicy::Mixed);
        assert_eq!(config.think_delay, Duration::from_millis(420));
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "tictactoe",
            "--seed",
            "12",
            "--policy",
            "optimal",
            "--think-ms",
            "0",
            "--log",
            "debug",
        ])
        .unwrap();
        let config = cli.game_config();
        assert_eq!(config.seed, Some(12));
        assert_eq!(config.policy, OpponentPolicy::Optimal);
        assert_eq!(config.think_delay, Duration::ZERO);
        assert_eq!(cli.log, "debug");
    }

    #[test]
    fn test_rejects_unknown_policy() {
        assert!(Cli::try_parse_from(["tictactoe", "--policy", "perfect"]).is_err());
    }
}
