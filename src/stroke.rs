//! Thick-line tessellation for the WebGL path.
//!
//! WebGL clamps `lineWidth` to 1 on most platforms, so each dash is drawn as
//! two triangles. Vertex layout is `x, y, r, g, b, a` as `f32`, positions in
//! pixels.

use crate::scene::ScreenLine;

pub const FLOATS_PER_VERTEX: usize = 6;
pub const VERTICES_PER_LINE: usize = 6;

/// Appends a quad of `width` pixels for every drawable line and returns the
/// number of vertices written. Zero-length and non-finite lines are skipped.
pub fn tessellate<I>(lines: I, width: f32, out: &mut Vec<f32>) -> usize
where
    I: IntoIterator<Item = ScreenLine>,
{
    let half = width / 2.0;
    let mut written = 0;
    for line in lines {
        if !line.start.is_finite() || !line.end.is_finite() {
            continue;
        }
        let dx = line.end.x - line.start.x;
        let dy = line.end.y - line.start.y;
        let len = (dx * dx + dy * dy).sqrt();
        if len <= f32::EPSILON {
            continue;
        }
        let nx = -dy / len * half;
        let ny = dx / len * half;
        let [r, g, b, a] = line.color.to_f32();

        let corners = [
            (line.start.x + nx, line.start.y + ny),
            (line.start.x - nx, line.start.y - ny),
            (line.end.x + nx, line.end.y + ny),
            (line.end.x + nx, line.end.y + ny),
            (line.start.x - nx, line.start.y - ny),
            (line.end.x - nx, line.end.y - ny),
        ];
        for (x, y) in corners {
            out.extend_from_slice(&[x, y, r, g, b, a]);
        }
        written += VERTICES_PER_LINE;
    }
    written
}
