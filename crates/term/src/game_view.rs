//! GameView: draws a [`GameSnapshot`] into a framebuffer.
//!
//! Pure, no I/O. Layout is a bordered 10x20 well with a status panel to the
//! right of it.

use crate::core::{ActiveSnapshot, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH, EMPTY};

const PANEL_GAP: u16 = 2;

const WELL: CellStyle = CellStyle::new(Rgb::new(70, 70, 80), Rgb::new(28, 28, 36));
const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const LOCKED: CellStyle = CellStyle::new(Rgb::new(150, 150, 160), Rgb::new(28, 28, 36));
const LABEL: CellStyle = CellStyle::new(Rgb::new(150, 150, 150), Rgb::new(0, 0, 0));
const VALUE: CellStyle = CellStyle::new(Rgb::new(240, 240, 240), Rgb::new(0, 0, 0)).bold();

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Well geometry resolved against a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

pub struct GameView {
    /// Terminal columns per board cell.
    cell_w: u16,
    /// Terminal rows per board cell.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps blocks roughly square.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let frame = self.frame(viewport);
        fb.fill_rect(
            frame.x + 1,
            frame.y + 1,
            frame.w - 2,
            frame.h - 2,
            ' ',
            WELL,
        );
        draw_border(fb, frame);

        for (y, row) in snap.board.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                if cell == EMPTY {
                    self.draw_dot(fb, frame, x as u16, y as u16);
                } else {
                    self.fill_cell(fb, frame, x as u16, y as u16, '█', LOCKED);
                }
            }
        }

        if let Some(active) = snap.active.as_ref() {
            self.draw_active(fb, frame, active);
        }

        self.draw_panel(fb, snap, frame);

        if snap.game_over() {
            draw_overlay(fb, frame, "GAME OVER", "R: restart");
        }
    }

    /// Allocating convenience wrapper around [`GameView::render_into`].
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Terminal position of board cell (0, 0) for this viewport.
    pub fn board_origin(&self, viewport: Viewport) -> (u16, u16) {
        let frame = self.frame(viewport);
        (frame.x + 1, frame.y + 1)
    }

    fn frame(&self, viewport: Viewport) -> Frame {
        let w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let h = BOARD_HEIGHT as u16 * self.cell_h + 2;
        let x = viewport.width.saturating_sub(w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        Frame { x, y, w, h }
    }

    fn draw_active(&self, fb: &mut FrameBuffer, frame: Frame, active: &ActiveSnapshot) {
        let style = CellStyle::new(piece_color(active.kind), WELL.bg).bold();
        for (x, y) in active.cells() {
            if (0..BOARD_WIDTH as i32).contains(&x) && (0..BOARD_HEIGHT as i32).contains(&y) {
                self.fill_cell(fb, frame, x as u16, y as u16, '█', style);
            }
        }
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16, ch: char, style: CellStyle) {
        let px = frame.x + 1 + x * self.cell_w;
        let py = frame.y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_dot(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16) {
        let px = frame.x + 1 + x * self.cell_w + self.cell_w / 2;
        let py = frame.y + 1 + y * self.cell_h + self.cell_h / 2;
        fb.put_char(px, py, '·', WELL.dim());
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, frame: Frame) {
        let x = frame.x + frame.w + PANEL_GAP;
        if x >= fb.width() {
            return;
        }
        let mut y = frame.y + 1;

        fb.put_str(x, y, "STATUS", LABEL);
        fb.put_str(x, y + 1, snap.status.as_str(), VALUE);
        y += 3;

        for (label, value) in [
            ("LINES", snap.lines_cleared),
            ("PIECES", snap.pieces_spawned),
            ("SEED", snap.seed),
        ] {
            fb.put_str(x, y, label, LABEL);
            fb.put_u32(x, y + 1, value, VALUE);
            y += 3;
        }

        if let Some(active) = snap.active.as_ref() {
            fb.put_str(x, y, "PIECE", LABEL);
            fb.put_str(x, y + 1, active.kind.as_str(), VALUE);
            y += 3;
        }

        let help: &[&str] = if snap.playable() {
            &["←→ move", "↑ rotate", "↓ down", "q quit"]
        } else {
            &["r restart", "q quit"]
        };
        for line in help {
            fb.put_str(x, y, line, LABEL.dim());
            y += 1;
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, frame: Frame) {
    let Frame { x, y, w, h } = frame;
    let right = x + w - 1;
    let bottom = y + h - 1;
    for cx in x + 1..right {
        fb.put_char(cx, y, '─', BORDER);
        fb.put_char(cx, bottom, '─', BORDER);
    }
    for cy in y + 1..bottom {
        fb.put_char(x, cy, '│', BORDER);
        fb.put_char(right, cy, '│', BORDER);
    }
    fb.put_char(x, y, '┌', BORDER);
    fb.put_char(right, y, '┐', BORDER);
    fb.put_char(x, bottom, '└', BORDER);
    fb.put_char(right, bottom, '┘', BORDER);
}

fn draw_overlay(fb: &mut FrameBuffer, frame: Frame, title: &str, hint: &str) {
    let mid = frame.y + frame.h / 2;
    for (dy, text, style) in [(0, title, VALUE), (1, hint, LABEL)] {
        let len = text.chars().count() as u16;
        let tx = frame.x + frame.w.saturating_sub(len) / 2;
        fb.put_str(tx, mid + dy, text, style);
    }
}

fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::O => Rgb::new(240, 240, 0),
        PieceKind::I => Rgb::new(0, 240, 240),
        PieceKind::Z => Rgb::new(240, 0, 0),
        PieceKind::S => Rgb::new(0, 240, 0),
        PieceKind::T => Rgb::new(160, 0, 240),
        PieceKind::J => Rgb::new(0, 0, 240),
        PieceKind::L => Rgb::new(240, 160, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ScriptedSource, Session};
    use crate::types::GameStatus;

    fn running_snapshot() -> GameSnapshot {
        let mut session = Session::new(ScriptedSource::new([PieceKind::I])).unwrap();
        session.start(5).unwrap();
        session.snapshot()
    }

    #[test]
    fn renders_border_corners() {
        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let fb = view.render(&GameSnapshot::default(), Viewport::new(60, 24));
        let (ox, oy) = view.board_origin(Viewport::new(60, 24));
        assert_eq!(fb.get(ox - 1, oy - 1).unwrap().ch, '┌');
        assert_eq!(fb.get(ox + 20, oy + 20).unwrap().ch, '┘');
    }

    #[test]
    fn renders_active_piece_at_spawn() {
        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let viewport = Viewport::new(60, 24);
        let fb = view.render(&running_snapshot(), viewport);
        let (ox, oy) = view.board_origin(viewport);

        // I spawns across columns 3..7 of row 0, two terminal columns each.
        for x in 3..7u16 {
            assert_eq!(fb.get(ox + x * 2, oy).unwrap().ch, '█');
            assert_eq!(fb.get(ox + x * 2 + 1, oy).unwrap().ch, '█');
        }
        assert_ne!(fb.get(ox + 2 * 2, oy).unwrap().ch, '█');
    }

    #[test]
    fn renders_locked_cells() {
        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let viewport = Viewport::new(60, 24);
        let mut snap = GameSnapshot::default();
        snap.board[19][0] = 1;
        let fb = view.render(&snap, viewport);
        let (ox, oy) = view.board_origin(viewport);
        assert_eq!(fb.get(ox, oy + 19).unwrap().ch, '█');
        assert_eq!(fb.get(ox, oy + 19).unwrap().style, LOCKED);
    }

    #[test]
    fn panel_shows_status_and_counters() {
        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let fb = view.render(&running_snapshot(), Viewport::new(60, 24));
        let text: String = (0..fb.height()).map(|y| fb.row_text(y) + "\n").collect();
        assert!(text.contains("running"));
        assert!(text.contains("PIECES"));
        assert!(text.contains("SEED"));
    }

    #[test]
    fn help_matches_session_state() {
        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let viewport = Viewport::new(60, 24);

        let fb = view.render(&running_snapshot(), viewport);
        let text: String = (0..fb.height()).map(|y| fb.row_text(y) + "\n").collect();
        assert!(text.contains("↓ down"));
        assert!(!text.contains("drop"));
        assert!(!text.contains("r restart"));

        let fb = view.render(&GameSnapshot::default(), viewport);
        let text: String = (0..fb.height()).map(|y| fb.row_text(y) + "\n").collect();
        assert!(!text.contains("READY"));
        assert!(!text.contains("GAME OVER"));
        assert!(text.contains("r restart"));
    }

    #[test]
    fn game_over_overlay() {
        let view = GameView::default();
        let snap = GameSnapshot {
            status: GameStatus::GameOver,
            ..GameSnapshot::default()
        };
        let fb = view.render(&snap, Viewport::new(60, 24));
        let text: String = (0..fb.height()).map(|y| fb.row_text(y)).collect();
        assert!(text.contains("GAME OVER"));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let view = GameView::default();
        let fb = view.render(&running_snapshot(), Viewport::new(5, 3));
        assert_eq!((fb.width(), fb.height()), (5, 3));
    }
}
