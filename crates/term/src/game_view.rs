//! GameView: draws a published `GameSnapshot` into a framebuffer.
//!
//! Pure (no I/O), so every layout rule is unit-testable.

use crate::core::{GameSnapshot, PiecePreview};
use crate::fb::{CellStyle, FrameBuffer, Glyph, Rgb};
use crate::types::{Phase, BOARD_HEIGHT, BOARD_WIDTH, LINE_SCORES};

const WELL_BG: Rgb = Rgb::new(24, 24, 32);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);
const PANEL_MIN_WIDTH: u16 = 14;

/// Terminal size in columns and rows.
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

/// Host-side values shown next to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hud {
    pub best_score: u32,
    pub muted: bool,
}

pub struct GameView {
    /// Terminal columns per board cell
    cell_w: u16,
    show_grid: bool,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps blocks roughly square.
        Self {
            cell_w: 2,
            show_grid: true,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            ..Self::default()
        }
    }

    pub fn with_grid(mut self, show_grid: bool) -> Self {
        self.show_grid = show_grid;
        self
    }

    /// Render into a reused framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, hud: Hud, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Glyph::default());

        let well_w = BOARD_WIDTH as u16 * self.cell_w;
        let well_h = BOARD_HEIGHT as u16;
        let frame_w = well_w + 2;
        let frame_h = well_h + 2;

        let panel_room = PANEL_MIN_WIDTH + 2;
        let origin_x = viewport.width.saturating_sub(frame_w + panel_room) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h) / 2;

        fb.fill_rect(
            origin_x + 1,
            origin_y + 1,
            well_w,
            well_h,
            ' ',
            CellStyle::new(WELL_BG, WELL_BG),
        );
        draw_frame(fb, origin_x, origin_y, frame_w, frame_h);

        for (y, row) in snap.grid.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                match cell {
                    Some(block) => {
                        let style = CellStyle::new(block.color, WELL_BG).bold();
                        self.paint_cell(fb, origin_x, origin_y, x as u16, y as u16, '█', style);
                    }
                    None if self.show_grid => {
                        let style = CellStyle::new(Rgb::new(70, 70, 84), WELL_BG).dim();
                        self.paint_cell(fb, origin_x, origin_y, x as u16, y as u16, '·', style);
                    }
                    None => {}
                }
            }
        }

        // Ghost only shows through empty cells.
        if let Some(active) = snap.active {
            let style = CellStyle::new(active.color, WELL_BG).dim();
            for (x, y) in snap.ghost_cells() {
                if snap.grid[y as usize][x as usize].is_none() {
                    self.paint_cell(fb, origin_x, origin_y, x as u16, y as u16, '░', style);
                }
            }
        }

        self.draw_panel(fb, snap, hud, viewport, origin_x + frame_w + 2, origin_y);

        let banner = match snap.phase {
            Phase::Ready => Some(("READY", "ENTER TO START")),
            Phase::Paused => Some(("PAUSED", "P TO RESUME")),
            Phase::GameOver => Some(("GAME OVER", "R TO RESTART")),
            Phase::Playing => None,
        };
        if let Some((title, hint)) = banner {
            let mid = origin_y + frame_h / 2;
            put_centered(fb, origin_x, frame_w, mid.saturating_sub(1), title, banner_style().bold());
            put_centered(fb, origin_x, frame_w, mid + 1, hint, banner_style());
        }
    }

    /// Allocating convenience wrapper around [`GameView::render_into`].
    pub fn render(&self, snap: &GameSnapshot, hud: Hud, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    #[allow(clippy::too_many_arguments)]
    fn paint_cell(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        x: u16,
        y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = origin_x + 1 + x * self.cell_w;
        fb.fill_rect(px, origin_y + 1 + y, self.cell_w, 1, ch, style);
    }

    fn draw_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        hud: Hud,
        viewport: Viewport,
        x: u16,
        top: u16,
    ) {
        if viewport.width.saturating_sub(x) < PANEL_MIN_WIDTH {
            return;
        }
        let label = CellStyle::new(Rgb::new(230, 230, 230), SCREEN_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
        let faint = value.dim();

        let mut y = top;
        for (name, number) in [
            ("SCORE", snap.score),
            ("BEST", hud.best_score.max(snap.score)),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
        ] {
            fb.put_str(x, y, name, label);
            fb.put_u32(x + 6, y, number, value);
            y += 1;
        }

        y += 1;
        fb.put_str(x, y, "NEXT", label);
        y += 1;
        self.draw_preview(fb, x, y, &snap.next, false);
        y += 3;

        fb.put_str(x, y, "HOLD", label);
        if !snap.can_hold {
            fb.put_str(x + 5, y, "(used)", faint);
        }
        y += 1;
        match snap.hold {
            Some(preview) => self.draw_preview(fb, x, y, &preview, !snap.can_hold),
            None => fb.put_str(x, y, "-", faint),
        }
        y += 3;

        fb.put_str(x, y, "LINES  PTS", label);
        y += 1;
        for (count, points) in LINE_SCORES.iter().enumerate().skip(1) {
            fb.put_u32(x, y, count as u32, faint);
            fb.put_u32(x + 7, y, *points, faint);
            y += 1;
        }

        if hud.muted {
            y += 1;
            fb.put_str(x, y, "MUTED", faint);
        }
    }

    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, preview: &PiecePreview, dim: bool) {
        let mut style = CellStyle::new(preview.color, SCREEN_BG);
        if dim {
            style = style.dim();
        }
        for (dx, dy) in preview.shape.cells() {
            let px = x + dx as u16 * self.cell_w;
            fb.fill_rect(px, y + dy as u16, self.cell_w, 1, '█', style);
        }
    }
}

fn banner_style() -> CellStyle {
    CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG)
}

fn put_centered(fb: &mut FrameBuffer, x: u16, width: u16, y: u16, text: &str, style: CellStyle) {
    let len = text.chars().count() as u16;
    fb.put_str(x + width.saturating_sub(len) / 2, y, text, style);
}

fn draw_frame(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }
    let style = CellStyle::new(Rgb::new(180, 180, 190), SCREEN_BG);
    let (right, bottom) = (x + w - 1, y + h - 1);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, bottom, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(right, y + dy, '│', style);
    }
    fb.put_char(x, y, '┌', style);
    fb.put_char(right, y, '┐', style);
    fb.put_char(x, bottom, '└', style);
    fb.put_char(right, bottom, '┘', style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameState, Piece};
    use crate::types::PieceKind;

    fn find_row(fb: &FrameBuffer, needle: &str) -> Option<u16> {
        (0..fb.height()).find(|&y| fb.row_text(y).contains(needle))
    }

    fn snapshot(started: bool) -> GameSnapshot {
        let mut state = GameState::new(3)
            .with_pieces(Piece::new(PieceKind::I, 1), Piece::new(PieceKind::T, 1));
        if started {
            state.start();
        }
        state.snapshot()
    }

    #[test]
    fn test_ready_banner_and_frame() {
        let fb = GameView::default().render(&snapshot(false), Hud::default(), Viewport::new(60, 26));
        assert!(find_row(&fb, "READY").is_some());
        assert!(find_row(&fb, "ENTER TO START").is_some());
        assert!(find_row(&fb, "┌").is_some());
    }

    #[test]
    fn test_playing_has_no_banner() {
        let fb = GameView::default().render(&snapshot(true), Hud::default(), Viewport::new(60, 26));
        assert!(find_row(&fb, "READY").is_none());
        assert!(find_row(&fb, "PAUSED").is_none());
    }

    #[test]
    fn test_panel_shows_best_score() {
        let hud = Hud {
            best_score: 1234,
            muted: true,
        };
        let fb = GameView::default().render(&snapshot(true), hud, Viewport::new(60, 26));
        let row = find_row(&fb, "BEST").expect("best row");
        assert!(fb.row_text(row).contains("1234"));
        assert!(find_row(&fb, "MUTED").is_some());
    }

    #[test]
    fn test_ghost_drawn_on_floor() {
        let fb = GameView::default().render(&snapshot(true), Hud::default(), Viewport::new(60, 26));
        let ghost_rows = (0..fb.height())
            .filter(|&y| fb.row_text(y).contains('░'))
            .count();
        assert_eq!(ghost_rows, 1);
    }

    #[test]
    fn test_narrow_viewport_skips_panel() {
        let fb = GameView::default().render(&snapshot(true), Hud::default(), Viewport::new(22, 22));
        assert!(find_row(&fb, "SCORE").is_none());
    }
}
