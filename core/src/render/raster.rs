//! Translation of vector shapes into discrete pixels in the framebuffer.
//!
//! Rasterization proceeds by turning a triangle into a sequence of
//! *scanlines*, each corresponding to a horizontal span of pixels covered by
//! the triangle on a given line. Each covered pixel becomes a *fragment*
//! carrying the vertex attributes interpolated to the pixel center.

use core::ops::Range;

use crate::math::{Lerp, Vec3, ZDiv};

/// A vertex in screen space.
///
/// `pos.x()` and `pos.y()` are pixel coordinates, `pos.z()` is the
/// reciprocal of the clip-space `w`. The attributes in `var` must already
/// be divided by `w` so that they interpolate linearly in screen space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScreenVert<V> {
    pub pos: Vec3,
    pub var: V,
}

/// A fragment, or a single "pixel" in a rasterized primitive.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Frag<V> {
    pub x: u32,
    pub y: u32,
    /// The perspective-correct attributes at the pixel center.
    pub var: V,
}

impl<V: Lerp> Lerp for ScreenVert<V> {
    #[inline]
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            pos: self.pos.lerp(&other.pos, t),
            var: self.var.lerp(&other.var, t),
        }
    }
}

/// Rasterizes a filled triangle defined by three vertices.
///
/// Invokes `frag_fn` for each pixel whose center lies inside the triangle
/// and inside the `width` × `height` bounds. A pixel whose center lies
/// exactly on the top or left edge is covered, one on the bottom or right
/// edge is not, so triangles that share an edge never leave gaps or draw
/// a pixel twice.
pub fn tri_fill<V, F>(
    mut verts: [ScreenVert<V>; 3],
    (width, height): (u32, u32),
    mut frag_fn: F,
) where
    V: Lerp + ZDiv,
    F: FnMut(Frag<V>),
{
    // Sort by y coordinate, start from the top
    verts.sort_by(|a, b| a.pos.y().total_cmp(&b.pos.y()));
    let [top, mid, bot] = &verts;
    let [top_y, mid_y, bot_y] = [top.pos.y(), mid.pos.y(), bot.pos.y()];

    //                       X <--top
    //                     ***
    //                   ******
    //                 ********
    //               ** upper **
    //       mid--> X**********X <--long edge
    //                ** lower **
    //                   ********
    //                      ******
    //                         ***
    //                            X <--bot

    for y in covered(top_y..bot_y, height) {
        let yc = y as f32 + 0.5;

        // `covered` guarantees top_y <= yc < bot_y, so no divisions by zero
        let long = top.lerp(bot, (yc - top_y) / (bot_y - top_y));
        let short = if yc < mid_y {
            top.lerp(mid, (yc - top_y) / (mid_y - top_y))
        } else {
            mid.lerp(bot, (yc - mid_y) / (bot_y - mid_y))
        };
        let (left, right) = if long.pos.x() < short.pos.x() {
            (long, short)
        } else {
            (short, long)
        };

        let (x0, x1) = (left.pos.x(), right.pos.x());
        for x in covered(x0..x1, width) {
            let xc = x as f32 + 0.5;
            let v = left.lerp(&right, (xc - x0) / (x1 - x0));
            // Perspective correction
            let var = v.var.z_div(v.pos.z());
            frag_fn(Frag { x, y, var });
        }
    }
}

/// Returns the range of pixel indices whose centers lie in `span`,
/// clamped to `0..max`.
#[inline]
fn covered(span: Range<f32>, max: u32) -> Range<u32> {
    let max = max as f32;
    let px = |x: f32| pixel_ceil(x).clamp(0.0, max) as u32;
    px(span.start)..px(span.end)
}

/// Returns the index of the first pixel whose center is at or after `x`.
#[inline]
fn pixel_ceil(x: f32) -> f32 {
    use crate::math::float::f32;
    f32::ceil(x - 0.5)
}
