//! Board rendering for the tic-tac-toe GUI

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::{row_col, Board, Line, Mark, Move, BOARD_SIZE};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 100.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell if any.
    ///
    /// Clicks are reported only when `interactive` is set and the cell is
    /// empty; the caller still validates the move.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        winning_line: Option<Line>,
        interactive: bool,
    ) -> Option<Move> {
        let available_size = ui.available_size();
        let board_size = (available_size.x.min(available_size.y) - 20.0).clamp(120.0, MAX_BOARD_SIZE);
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(24), BOARD_BG);

        if let Some(line) = winning_line {
            self.draw_winning_cells(&painter, &line);
        }

        self.draw_grid(&painter);
        self.draw_marks(&painter, board);

        let mut clicked = None;
        if interactive {
            if let Some(idx) = response.hover_pos().and_then(|p| self.screen_to_cell(p)) {
                if board.is_empty(idx) {
                    painter.rect_filled(self.cell_rect(idx).shrink(6.0), CornerRadius::same(8), hover_valid());
                    if response.clicked() {
                        clicked = Some(idx);
                    }
                }
            }
        }

        clicked
    }

    /// Draw the two inner lines each way
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let inner = self.inner_rect();

        for i in 1..BOARD_SIZE {
            let offset = i as f32 * self.cell_size;

            painter.line_segment(
                [
                    Pos2::new(inner.min.x + offset, inner.min.y),
                    Pos2::new(inner.min.x + offset, inner.max.y),
                ],
                stroke,
            );
            painter.line_segment(
                [
                    Pos2::new(inner.min.x, inner.min.y + offset),
                    Pos2::new(inner.max.x, inner.min.y + offset),
                ],
                stroke,
            );
        }
    }

    fn draw_winning_cells(&self, painter: &Painter, line: &Line) {
        for &idx in line {
            painter.rect_filled(self.cell_rect(idx), CornerRadius::ZERO, WIN_HIGHLIGHT);
        }
    }

    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for (idx, mark) in board.cells().iter().enumerate() {
            let center = self.cell_rect(idx).center();
            match mark {
                Mark::Human => self.draw_x(painter, center),
                Mark::Opponent => self.draw_o(painter, center),
                Mark::Empty => {}
            }
        }
    }

    /// Crossed strokes: navy outline under a cream core
    fn draw_x(&self, painter: &Painter, center: Pos2) {
        let half = self.cell_size * 0.25;
        let strokes = [
            [center + Vec2::new(-half, -half), center + Vec2::new(half, half)],
            [center + Vec2::new(half, -half), center + Vec2::new(-half, half)],
        ];
        let scale = self.cell_size / 100.0;

        for segment in strokes {
            painter.line_segment(segment, Stroke::new(X_OUTLINE_WIDTH * scale, MARK_OUTLINE));
        }
        for segment in strokes {
            painter.line_segment(segment, Stroke::new(X_FILL_WIDTH * scale, MARK_FILL));
        }
    }

    /// Navy disc with a cream hole
    fn draw_o(&self, painter: &Painter, center: Pos2) {
        let radius = self.cell_size * MARK_RATIO;
        painter.circle_filled(center, radius, MARK_OUTLINE);
        painter.circle_filled(center, radius * 0.55, MARK_FILL);
    }

    fn inner_rect(&self) -> Rect {
        self.board_rect.shrink(BOARD_MARGIN)
    }

    fn cell_rect(&self, idx: usize) -> Rect {
        let (row, col) = row_col(idx);
        let min = self.inner_rect().min
            + Vec2::new(col as f32 * self.cell_size, row as f32 * self.cell_size);
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to a cell index
    pub fn screen_to_cell(&self, screen_pos: Pos2) -> Option<Move> {
        let relative = screen_pos - self.inner_rect().min;
        if relative.x < 0.0 || relative.y < 0.0 {
            return None;
        }

        let col = (relative.x / self.cell_size).floor() as usize;
        let row = (relative.y / self.cell_size).floor() as usize;
        if col < BOARD_SIZE && row < BOARD_SIZE {
            Some(row * BOARD_SIZE + col)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> BoardView {
        BoardView {
            cell_size: 100.0,
            board_rect: Rect::from_min_size(Pos2::ZERO, Vec2::splat(300.0 + 2.0 * BOARD_MARGIN)),
        }
    }

    #[test]
    fn test_screen_to_cell_corners() {
        let view = view();
        let m = BOARD_MARGIN;
        assert_eq!(view.screen_to_cell(Pos2::new(m + 1.0, m + 1.0)), Some(0));
        assert_eq!(view.screen_to_cell(Pos2::new(m + 250.0, m + 50.0)), Some(2));
        assert_eq!(view.screen_to_cell(Pos2::new(m + 150.0, m + 150.0)), Some(4));
        assert_eq!(view.screen_to_cell(Pos2::new(m + 299.0, m + 299.0)), Some(8));
    }

    #[test]
    fn test_screen_to_cell_outside() {
        let view = view();
        assert_eq!(view.screen_to_cell(Pos2::new(1.0, 1.0)), None);
        assert_eq!(view.screen_to_cell(Pos2::new(BOARD_MARGIN + 301.0, 50.0)), None);
    }
}
