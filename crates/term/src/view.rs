//! Snapshot-to-frame layout: board, preview, counters, banners.

use blockfall_core::Snapshot;
use blockfall_types::{Rgb, BOARD_HEIGHT, BOARD_WIDTH};

use crate::frame::{Frame, FrameCell};

const BORDER: Rgb = Rgb::new(120, 120, 120);
const TEXT: Rgb = Rgb::new(220, 220, 220);
const DIM_TEXT: Rgb = Rgb::new(140, 140, 140);
const BANNER: Rgb = Rgb::new(230, 120, 120);

/// Board cells render two characters wide to look roughly square.
const CELL_W: u16 = 2;
/// Left/top margin of the board interior inside the frame (1 for border).
const BOARD_X: u16 = 1;
const BOARD_Y: u16 = 1;
/// Column where the sidebar (preview, counters, help) starts.
const SIDEBAR_X: u16 = BOARD_X + BOARD_WIDTH as u16 * CELL_W + 3;

/// Renders snapshots into frames. Stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    /// Frame size the view needs.
    pub fn frame_size(&self) -> (u16, u16) {
        (SIDEBAR_X + 22, BOARD_HEIGHT as u16 + 2)
    }

    pub fn render(&self, snapshot: &Snapshot) -> Frame {
        let (width, height) = self.frame_size();
        let mut frame = Frame::new(width, height);

        self.draw_border(&mut frame);
        self.draw_grid(&mut frame, snapshot);
        self.draw_active(&mut frame, snapshot);
        self.draw_sidebar(&mut frame, snapshot);
        self.draw_banner(&mut frame, snapshot);

        frame
    }

    fn draw_border(&self, frame: &mut Frame) {
        let right = BOARD_X + BOARD_WIDTH as u16 * CELL_W;
        let bottom = BOARD_Y + BOARD_HEIGHT as u16;

        for x in (BOARD_X - 1)..=right {
            frame.put_str(x, BOARD_Y - 1, "─", BORDER);
            frame.put_str(x, bottom, "─", BORDER);
        }
        for y in (BOARD_Y - 1)..=bottom {
            frame.put_str(BOARD_X - 1, y, "│", BORDER);
            frame.put_str(right, y, "│", BORDER);
        }
        frame.put_str(BOARD_X - 1, BOARD_Y - 1, "┌", BORDER);
        frame.put_str(right, BOARD_Y - 1, "┐", BORDER);
        frame.put_str(BOARD_X - 1, bottom, "└", BORDER);
        frame.put_str(right, bottom, "┘", BORDER);
    }

    fn draw_grid(&self, frame: &mut Frame, snapshot: &Snapshot) {
        for (y, row) in snapshot.grid.rows().iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                if let Some(kind) = cell {
                    frame.put_block(
                        BOARD_X + x as u16 * CELL_W,
                        BOARD_Y + y as u16,
                        kind.color(),
                    );
                }
            }
        }
    }

    fn draw_active(&self, frame: &mut Frame, snapshot: &Snapshot) {
        let Some(active) = &snapshot.active else {
            return;
        };
        let color = active.kind.color();
        for (row, col) in active.shape.cells() {
            let x = active.x + col as i8;
            let y = active.y + row as i8;
            if x >= 0 && y >= 0 {
                frame.put_block(
                    BOARD_X + x as u16 * CELL_W,
                    BOARD_Y + y as u16,
                    color,
                );
            }
        }
    }

    fn draw_sidebar(&self, frame: &mut Frame, snapshot: &Snapshot) {
        frame.put_str(SIDEBAR_X, 1, "next", DIM_TEXT);
        if let Some(next) = &snapshot.next {
            let color = next.kind.color();
            for (row, col) in next.shape.cells() {
                frame.put_block(
                    SIDEBAR_X + col as u16 * CELL_W,
                    3 + row as u16,
                    color,
                );
            }
        }

        frame.put_str(SIDEBAR_X, 8, &format!("lines  {}", snapshot.cleared_lines), TEXT);
        frame.put_str(SIDEBAR_X, 9, &format!("level  {}", snapshot.level), TEXT);

        frame.put_str(SIDEBAR_X, 12, "←→↓ move  ↑ rotate", DIM_TEXT);
        frame.put_str(SIDEBAR_X, 13, "p pause   r reset", DIM_TEXT);
        frame.put_str(SIDEBAR_X, 14, "enter start  q quit", DIM_TEXT);
    }

    fn draw_banner(&self, frame: &mut Frame, snapshot: &Snapshot) {
        let banner = if snapshot.game_over {
            Some(" GAME OVER ")
        } else if snapshot.paused {
            Some("  PAUSED  ")
        } else if !snapshot.running {
            Some(" PRESS ENTER ")
        } else {
            None
        };
        let Some(text) = banner else {
            return;
        };

        let board_w = BOARD_WIDTH as u16 * CELL_W;
        let x = BOARD_X + board_w.saturating_sub(text.len() as u16) / 2;
        let y = BOARD_Y + BOARD_HEIGHT as u16 / 2;
        for (i, ch) in text.chars().enumerate() {
            frame.put(
                x + i as u16,
                y,
                FrameCell {
                    ch,
                    fg: BANNER,
                    bg: Some(Rgb::new(30, 30, 30)),
                },
            );
        }
    }
}
