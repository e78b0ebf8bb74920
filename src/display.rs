//! Presentation layer — all terminal I/O lives here.
//!
//! The canvas is shown with upper-half-block glyphs: each terminal cell
//! covers two sampled canvas rows, foreground = upper pixel, background =
//! lower pixel.  Canvas row `height - 1` is the top of the picture.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Colors, Print},
    terminal,
    QueueableCommand,
};
use pixel_invaders::canvas::{Color as Pixel, RasterCanvas};

const C_HINT: Color = Color::DarkGrey;
const HINT: &str = "← → / A D : Move   SPACE : Shoot   Q : Quit";

fn term_color(p: Pixel) -> Color {
    Color::Rgb { r: p.r(), g: p.g(), b: p.b() }
}

/// Terminal cells needed to show `canvas` at `scale` (columns, rows).
pub fn footprint(canvas: &RasterCanvas, scale: usize) -> (usize, usize) {
    let scale = scale.max(1);
    let cols = canvas.width().div_ceil(scale);
    let rows = canvas.height().div_ceil(scale);
    (cols, rows.div_ceil(2))
}

/// Sample the canvas at display position `(col, line)` where `line` counts
/// sampled rows from the top.
fn sample(canvas: &RasterCanvas, scale: usize, col: usize, line: usize) -> Option<Pixel> {
    let y_from_top = line * scale;
    if y_from_top >= canvas.height() {
        return None;
    }
    canvas.pixel(col * scale, canvas.height() - 1 - y_from_top)
}

/// Present one complete frame, clipped to the terminal.
pub fn present<W: Write>(out: &mut W, canvas: &RasterCanvas, scale: usize) -> std::io::Result<()> {
    let scale = scale.max(1);
    let (term_w, term_h) = terminal::size()?;
    let (cols, rows) = footprint(canvas, scale);
    let cols = cols.min(term_w as usize);
    // Keep the last terminal row for the controls hint.
    let rows = rows.min((term_h as usize).saturating_sub(1));

    let mut last: Option<(Color, Color)> = None;
    for row in 0..rows {
        out.queue(cursor::MoveTo(0, row as u16))?;
        for col in 0..cols {
            let upper = sample(canvas, scale, col, row * 2);
            let lower = sample(canvas, scale, col, row * 2 + 1);
            let fg = upper.map_or(Color::Reset, term_color);
            let bg = lower.map_or(Color::Reset, term_color);
            if last != Some((fg, bg)) {
                out.queue(style::SetColors(Colors::new(fg, bg)))?;
                last = Some((fg, bg));
            }
            out.queue(Print('▀'))?;
        }
    }

    draw_controls_hint(out, rows as u16)?;

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}

fn draw_controls_hint<W: Write>(out: &mut W, row: u16) -> std::io::Result<()> {
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(1, row))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(HINT))?;
    Ok(())
}
