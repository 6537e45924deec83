//! Main application for the tic-tac-toe GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use crate::MoveSource;

use super::board_view::BoardView;
use super::game_state::{GameConfig, GameState, Status};
use super::theme::*;

/// Main tic-tac-toe application
pub struct TicTacToeApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl Default for TicTacToeApp {
    fn default() -> Self {
        Self::with_config(GameConfig::default())
    }
}

impl TicTacToeApp {
    /// Create a new app with the given settings
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GameConfig) -> Self {
        Self::with_config(config)
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self {
            state: GameState::new(config),
            board_view: BoardView::default(),
            show_debug: false,
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.state.reset();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("Opponent: {:?}", self.state.config().policy));
                });
            });
        });
    }

    /// Render the side panel with legend, history and debug info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(200.0)
            .max_width(240.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(12.0))
            .show(ctx, |ui| {
                self.render_legend_card(ui);
                ui.add_space(10.0);

                self.render_history_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_legend_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("You:").size(12.0).color(TEXT_SECONDARY));
                ui.label(RichText::new("X").size(18.0).strong().color(GRID_LINE));
                ui.add_space(12.0);
                ui.label(RichText::new("Opponent:").size(12.0).color(TEXT_SECONDARY));
                ui.label(RichText::new("O").size(18.0).strong().color(GRID_LINE));
            });
        });
    }

    /// History list: one button per move, the active step highlighted
    fn render_history_card(&mut self, ui: &mut egui::Ui) {
        let mut jump = None;

        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("HISTORY").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            egui::ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
                for step in 1..self.state.history().len() {
                    let active = step == self.state.step();
                    let (fill, text) = if active {
                        (HISTORY_ACTIVE, MARK_OUTLINE)
                    } else {
                        (HISTORY_IDLE, TEXT_PRIMARY)
                    };
                    let button = egui::Button::new(
                        RichText::new(format!("Move {step}")).size(12.0).color(text),
                    )
                    .fill(fill)
                    .min_size(egui::vec2(ui.available_width(), 26.0));

                    if ui.add(button).clicked() {
                        jump = Some(step);
                    }
                }
            });
        });

        if let Some(step) = jump {
            self.state.jump_to(step);
        }
    }

    /// Render debug card
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("OPPONENT").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                ui.label(
                    RichText::new(format!("Thinking {:.2}s", elapsed.as_secs_f32()))
                        .size(12.0)
                        .color(TIMER_WARNING),
                );
            }

            let Some(result) = &self.state.last_ai_result else {
                ui.label(RichText::new("No move yet").size(10.0).color(TEXT_MUTED));
                return;
            };

            let source = match result.source {
                MoveSource::Random => "Random",
                MoveSource::Minimax => "Minimax",
                MoveSource::None => "No move",
            };
            ui.label(RichText::new(source).size(12.0).strong().color(TIMER_NORMAL));
            if let Some(score) = result.score {
                ui.label(RichText::new(format!("Score: {score}")).size(10.0).color(TEXT_SECONDARY));
            }
            ui.label(
                RichText::new(format!(
                    "{} nodes, {}µs",
                    result.nodes,
                    result.elapsed.as_micros()
                ))
                .size(10.0)
                .color(TEXT_SECONDARY),
            );
            if let Some(mv) = result.best_move {
                ui.label(RichText::new(format!("→ cell {mv}")).size(12.0).strong().color(TEXT_PRIMARY));
            }
        });
    }

    /// Status pill, coloured by outcome
    fn render_status(&self, ui: &mut egui::Ui) {
        let status = self.state.status();
        let (fill, text) = match status {
            Status::HumanWon => (STATUS_WIN, TEXT_PRIMARY),
            Status::OpponentWon => (STATUS_LOSS, TEXT_PRIMARY),
            Status::Draw => (STATUS_DRAW, MARK_OUTLINE),
            Status::YourTurn | Status::OpponentTurn | Status::History => {
                (STATUS_NEUTRAL, TEXT_PRIMARY)
            }
        };

        Frame::new()
            .fill(fill)
            .corner_radius(CornerRadius::same(12))
            .inner_margin(egui::Margin::symmetric(16, 8))
            .show(ui, |ui| {
                ui.label(RichText::new(status.label()).size(16.0).strong().color(text));
            });
    }

    /// Render the main board with status above and reset below
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                self.render_status(ui);
                ui.add_space(12.0);

                let interactive = self.state.is_human_turn();
                let clicked = self.board_view.show(
                    ui,
                    self.state.board(),
                    self.state.winning_line(),
                    interactive,
                );

                if let Some(idx) = clicked {
                    if let Err(err) = self.state.try_human_move(idx) {
                        self.state.message = Some(err.to_string());
                    }
                }

                ui.add_space(12.0);
                if ui.button(RichText::new("Reset").size(14.0)).clicked() {
                    self.state.reset();
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(8.0);
                    ui.label(RichText::new(msg).size(11.0).color(TIMER_WARNING));
                }
            });
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // D - Toggle debug panel
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }

            // N - New game
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }

            if i.key_pressed(egui::Key::ArrowLeft) {
                self.state.step_back();
            }
            if i.key_pressed(egui::Key::ArrowRight) {
                self.state.step_forward();
            }
        });
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();

        if self.state.is_ai_turn() && !self.state.is_ai_thinking() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
