//! GameView: maps a `GameSnapshot` into a terminal frame.
//!
//! Pure (no I/O), so it can be unit-tested against rendered frames.

use crate::core::GameSnapshot;
use crate::term::frame::{Frame, Style};
use crate::types::{CellStatus, Rgb, BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Renders the board, the stats panel, and the pause/game-over overlays.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell compensates for terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

const PLAYFIELD_BG: Rgb = Rgb::new(20, 20, 28);

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self { cell_w }
    }

    /// Render a snapshot into a fresh frame for the given viewport.
    pub fn render(&self, snapshot: &GameSnapshot, viewport: Viewport) -> Frame {
        let mut frame = Frame::new(viewport.width, viewport.height);

        let board_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_h = BOARD_HEIGHT as u16;
        let frame_w = board_w + 2;
        let frame_h = board_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w + PANEL_W) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(&mut frame, start_x, start_y, frame_w, frame_h);

        for (y, row) in snapshot.grid.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let px = start_x + 1 + (x as u16) * self.cell_w;
                let py = start_y + 1 + y as u16;

                let (ch, style) = match cell.kind {
                    Some(kind) => (
                        '█',
                        Style {
                            fg: kind.color(),
                            bg: PLAYFIELD_BG,
                            bold: cell.status == CellStatus::Merged,
                        },
                    ),
                    None => (
                        '·',
                        Style {
                            fg: Rgb::new(70, 70, 85),
                            bg: PLAYFIELD_BG,
                            bold: false,
                        },
                    ),
                };
                frame.fill_rect(px, py, self.cell_w, 1, ch, style);
            }
        }

        self.draw_panel(&mut frame, snapshot, start_x + frame_w + 2, start_y);

        if snapshot.game_over {
            self.draw_overlay(&mut frame, start_x, start_y, frame_w, frame_h, "GAME OVER");
        } else if snapshot.paused {
            self.draw_overlay(&mut frame, start_x, start_y, frame_w, frame_h, "PAUSED");
        }

        frame
    }

    fn draw_border(&self, frame: &mut Frame, x: u16, y: u16, w: u16, h: u16) {
        let style = Style {
            fg: Rgb::new(190, 190, 190),
            ..Style::default()
        };

        frame.put_char(x, y, '┌', style);
        frame.put_char(x + w - 1, y, '┐', style);
        frame.put_char(x, y + h - 1, '└', style);
        frame.put_char(x + w - 1, y + h - 1, '┘', style);
        for dx in 1..w - 1 {
            frame.put_char(x + dx, y, '─', style);
            frame.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            frame.put_char(x, y + dy, '│', style);
            frame.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_panel(&self, frame: &mut Frame, snapshot: &GameSnapshot, x: u16, y: u16) {
        let label = Style {
            bold: true,
            ..Style::default()
        };
        let value = Style::default();

        let stats = [
            ("SCORE", snapshot.score),
            ("BEST", snapshot.best_score),
            ("LEVEL", snapshot.level),
            ("ROWS", snapshot.rows_cleared),
        ];

        let mut line = y;
        for (name, amount) in stats {
            frame.put_str(x, line, name, label);
            frame.put_str(x, line + 1, &amount.to_string(), value);
            line += 3;
        }

        let dim = Style {
            fg: Rgb::new(130, 130, 130),
            ..Style::default()
        };
        let controls = [
            "← → move",
            "↑ rotate",
            "↓ drop",
            "space pause",
            "n new game",
            "q quit",
        ];
        for text in controls {
            frame.put_str(x, line, text, dim);
            line += 1;
        }
    }

    fn draw_overlay(&self, frame: &mut Frame, x: u16, y: u16, w: u16, h: u16, text: &str) {
        let style = Style {
            fg: Rgb::new(255, 255, 255),
            bold: true,
            ..Style::default()
        };
        let text_w = text.chars().count() as u16;
        let ox = x.saturating_add(w.saturating_sub(text_w) / 2);
        let oy = y.saturating_add(h / 2);
        frame.put_str(ox, oy, text, style);
    }
}

/// Columns reserved for the stats panel to the right of the board.
const PANEL_W: u16 = 14;
