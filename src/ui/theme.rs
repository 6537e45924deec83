//! Theme constants for the tic-tac-toe GUI

use egui::Color32;

// Board colors - amber board, cream grid
pub const BOARD_BG: Color32 = Color32::from_rgb(247, 181, 0);
pub const GRID_LINE: Color32 = Color32::from_rgb(255, 243, 201);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgba_premultiplied(70, 50, 0, 90);

// Marks: navy outline, cream fill
pub const MARK_OUTLINE: Color32 = Color32::from_rgb(13, 27, 42);
pub const MARK_FILL: Color32 = GRID_LINE;

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 255, 255, 40)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_NEUTRAL: Color32 = Color32::from_rgb(30, 41, 59);
pub const STATUS_WIN: Color32 = Color32::from_rgb(22, 163, 74);
pub const STATUS_LOSS: Color32 = Color32::from_rgb(220, 38, 38);
pub const STATUS_DRAW: Color32 = Color32::from_rgb(250, 204, 21);

// History list
pub const HISTORY_ACTIVE: Color32 = Color32::from_rgb(253, 230, 138);
pub const HISTORY_IDLE: Color32 = Color32::from_rgb(50, 53, 58);

// Timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 16.0;
pub const GRID_LINE_WIDTH: f32 = 10.0;
pub const MARK_RATIO: f32 = 0.33;
pub const X_OUTLINE_WIDTH: f32 = 18.0;
pub const X_FILL_WIDTH: f32 = 12.0;
pub const MAX_BOARD_SIZE: f32 = 420.0;
