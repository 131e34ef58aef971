//! Terminal output: raw-mode lifecycle and diffed frame flushing.

use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Flushes framebuffers to a terminal, writing only what changed.
pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    previous: Option<FrameBuffer>,
    scratch: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            previous: None,
            scratch: Vec::with_capacity(32 * 1024),
        }
    }

    /// Raw mode plus alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("enable raw mode")?;
        self.scratch.clear();
        self.scratch.queue(terminal::EnterAlternateScreen)?;
        self.scratch.queue(cursor::Hide)?;
        self.scratch.queue(terminal::DisableLineWrap)?;
        self.flush_scratch()
    }

    /// Undo [`TerminalRenderer::enter`]. Safe to call more than once.
    pub fn exit(&mut self) -> Result<()> {
        self.scratch.clear();
        self.scratch.queue(ResetColor)?;
        self.scratch.queue(SetAttribute(Attribute::Reset))?;
        self.scratch.queue(terminal::EnableLineWrap)?;
        self.scratch.queue(cursor::Show)?;
        self.scratch.queue(terminal::LeaveAlternateScreen)?;
        self.flush_scratch()?;
        terminal::disable_raw_mode().context("disable raw mode")?;
        Ok(())
    }

    /// Next draw repaints everything (after a resize).
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    /// Draw `frame`, then swap it with the retained previous frame.
    ///
    /// On return `frame` holds stale contents the caller may overwrite.
    pub fn present(&mut self, frame: &mut FrameBuffer) -> Result<()> {
        self.scratch.clear();
        let mut previous = match self.previous.take() {
            Some(prev) if prev.width() == frame.width() && prev.height() == frame.height() => {
                encode_diff_into(&prev, frame, &mut self.scratch)?;
                prev
            }
            _ => {
                encode_full_into(frame, &mut self.scratch)?;
                FrameBuffer::new(frame.width(), frame.height())
            }
        };
        self.flush_scratch()?;

        std::mem::swap(&mut previous, frame);
        self.previous = Some(previous);
        Ok(())
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    fn flush_scratch(&mut self) -> Result<()> {
        self.out
            .write_all(&self.scratch)
            .context("write frame to terminal")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Clear the screen and encode every glyph of `fb`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut style = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        encode_run(fb, 0, y, fb.width(), &mut style, out)?;
    }
    finish(out)
}

/// Encode only the runs of glyphs that differ between `prev` and `next`.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut style = None;
    for (x, y, len) in changed_runs(prev, next) {
        out.queue(cursor::MoveTo(x, y))?;
        encode_run(next, x, y, len, &mut style, out)?;
    }
    finish(out)
}

fn encode_run(
    fb: &FrameBuffer,
    x: u16,
    y: u16,
    len: u16,
    current: &mut Option<CellStyle>,
    out: &mut Vec<u8>,
) -> Result<()> {
    for dx in 0..len {
        let glyph = fb.get(x + dx, y).unwrap_or_default();
        if *current != Some(glyph.style) {
            queue_style(out, glyph.style)?;
            *current = Some(glyph.style);
        }
        out.queue(Print(glyph.ch))?;
    }
    Ok(())
}

fn finish(out: &mut Vec<u8>) -> Result<()> {
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn queue_style(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(to_color(style.fg)))?;
    out.queue(SetBackgroundColor(to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// `(x, y, len)` runs of changed glyphs, row by row. Frames must share a size.
fn changed_runs<'a>(
    prev: &'a FrameBuffer,
    next: &'a FrameBuffer,
) -> impl Iterator<Item = (u16, u16, u16)> + 'a {
    let width = next.width();
    (0..next.height()).flat_map(move |y| {
        let differs = move |x: u16| prev.get(x, y) != next.get(x, y);
        let mut x = 0;
        std::iter::from_fn(move || {
            while x < width && !differs(x) {
                x += 1;
            }
            if x >= width {
                return None;
            }
            let start = x;
            while x < width && differs(x) {
                x += 1;
            }
            Some((start, y, x - start))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_changed_runs_coalesce() {
        let style = CellStyle::default();
        let a = FrameBuffer::new(6, 2);
        let mut b = a.clone();
        b.put_str(1, 0, "XYZ", style);
        b.put_char(5, 1, '#', style);

        let runs: Vec<_> = changed_runs(&a, &b).collect();
        assert_eq!(runs, vec![(1, 0, 3), (5, 1, 1)]);
    }

    #[test]
    fn test_identical_frames_produce_no_runs() {
        let a = FrameBuffer::new(4, 4);
        assert_eq!(changed_runs(&a, &a.clone()).count(), 0);
    }

    #[test]
    fn test_present_full_then_diff() {
        let mut renderer = TerminalRenderer::new(Vec::new());
        let mut frame = FrameBuffer::new(4, 1);
        frame.put_str(0, 0, "ab", CellStyle::default());
        renderer.present(&mut frame).unwrap();
        let full_len = renderer.writer().len();
        assert!(full_len > 0);

        // Same content again: only the trailing resets are written.
        let mut same = FrameBuffer::new(4, 1);
        same.put_str(0, 0, "ab", CellStyle::default());
        renderer.present(&mut same).unwrap();
        let diff_len = renderer.writer().len() - full_len;
        assert!(diff_len < full_len);
    }
}
