//! Clipping geometric shapes against planes.
//!
//! Clipping means converting a shape into another, such that only the points
//! inside a volume enclosed by one or more planes remain; "inside" is defined
//! as the half-space that the plane's normal vector points away from.
//!
//! Triangles are clipped against the six planes of the [view frustum]
//! [view_frustum] in homogeneous clip space, before the perspective divide.
//! This keeps geometry behind the camera from wrapping around through
//! infinity, and guarantees that every rasterized vertex lies within the
//! viewport.

use alloc::vec::Vec;
use core::{iter::once, mem::swap};

use crate::math::{Lerp, Vec4, vec4};

/// A vertex in clip space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ClipVert<A> {
    pub pos: Vec4,
    pub attrib: A,
}

/// Visibility of a shape in the view frustum.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Status {
    /// Entirely inside view frustum
    Visible,
    /// Either outside or partly inside, needs clipping
    Clipped,
    /// Entirely outside view frustum
    Hidden,
}

/// A plane in clip space.
#[derive(Debug, Copy, Clone)]
pub struct ClipPlane(Vec4);

impl ClipPlane {
    /// Creates a clip plane given the coefficients of its equation.
    const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self(vec4(x, y, z, w))
    }

    /// Returns the signed distance between `pt` and `self`.
    ///
    /// The return value is positive if `pt` is "outside" the plane,
    /// defined as the half-space in the direction of the normal vector,
    /// negative if `pt` is in the other half-space, and zero if `pt`
    /// is exactly coincident with the plane.
    #[inline]
    pub fn signed_dist(&self, pt: &Vec4) -> f32 {
        self.0.dot(pt)
    }

    /// Returns whether `pt` is inside or exactly on `self`.
    #[inline]
    pub fn is_inside(&self, pt: &Vec4) -> bool {
        self.signed_dist(pt) <= 0.0
    }

    /// Clips a convex polygon against `self`.
    ///
    /// Returns the resulting vertices in the out parameter `verts_out`.
    ///
    /// In the diagram below, clipping triangle ABC results in quad ABPQ,
    /// where P and Q are new vertices generated by interpolating between
    /// A and C, and B and C, respectively.
    ///
    /// ```text
    ///
    ///     n
    ///     ^            C
    ///     |           / \         outside
    ///     |         /    \
    /// ----+-------Q-------P--------self-----
    ///           /          \
    ///         A--___        \     inside
    ///               `---__   \
    ///                     `---B
    /// ```
    pub fn clip_simple_polygon<A: Lerp + Clone>(
        &self,
        verts_in: &[ClipVert<A>],
        verts_out: &mut Vec<ClipVert<A>>,
    ) {
        let Some(first) = verts_in.first() else {
            return;
        };
        let verts = verts_in.iter().skip(1).chain(once(first));
        let mut v0 = first;
        let mut d0 = self.signed_dist(&v0.pos);

        for v1 in verts {
            let d1 = self.signed_dist(&v1.pos);
            if d0 <= 0.0 {
                verts_out.push(v0.clone());
            }
            if d0 * d1 < 0.0 {
                // The edge crosses the plane. `t` is the fractional distance
                // from v0 to the intersection; d0 - d1 is nonzero here.
                let t = d0 / (d0 - d1);
                verts_out.push(ClipVert {
                    pos: v0.pos.lerp(&v1.pos, t),
                    attrib: v0.attrib.lerp(&v1.attrib, t),
                });
            }
            (v0, d0) = (v1, d1);
        }
    }
}

/// A view frustum is a truncated, sideways pyramid representing the volume of
/// space that is visible in a viewport with perspective projection. In clip
/// space it is the box `-w <= x, y, z <= w`.
pub mod view_frustum {
    use super::*;

    /// The left, right, bottom, top, near, and far planes.
    pub const PLANES: [ClipPlane; 6] = [
        ClipPlane::new(-1.0, 0.0, 0.0, -1.0), // Left
        ClipPlane::new(1.0, 0.0, 0.0, -1.0),  // Right
        ClipPlane::new(0.0, -1.0, 0.0, -1.0), // Bottom
        ClipPlane::new(0.0, 1.0, 0.0, -1.0),  // Top
        ClipPlane::new(0.0, 0.0, -1.0, -1.0), // Near
        ClipPlane::new(0.0, 0.0, 1.0, -1.0),  // Far
    ];

    /// Returns the visibility status of the convex polygon `verts`.
    pub fn status<A>(verts: &[ClipVert<A>]) -> Status {
        let mut all_inside = true;
        for p in &PLANES {
            let inside = verts.iter().filter(|v| p.is_inside(&v.pos)).count();
            if inside == 0 {
                return Status::Hidden;
            }
            all_inside &= inside == verts.len();
        }
        if all_inside {
            Status::Visible
        } else {
            Status::Clipped
        }
    }
}

/// Clips a triangle against the view frustum.
///
/// Appends zero or more triangles covering the visible part of `tri` to
/// `out`. A triangle entirely inside the frustum is emitted as is.
pub fn clip_tri<A: Lerp + Clone>(
    tri: [ClipVert<A>; 3],
    out: &mut Vec<[ClipVert<A>; 3]>,
) {
    match view_frustum::status(&tri) {
        Status::Visible => return out.push(tri),
        Status::Hidden => return,
        Status::Clipped => {}
    }
    let mut verts = Vec::from(tri);
    let mut tmp = Vec::with_capacity(8);
    for p in &view_frustum::PLANES {
        p.clip_simple_polygon(&verts, &mut tmp);
        swap(&mut verts, &mut tmp);
        tmp.clear();
    }
    // The result is convex; triangulate it as a fan around the first vertex
    if let Some((v0, rest)) = verts.split_first() {
        for pair in rest.windows(2) {
            out.push([v0.clone(), pair[0].clone(), pair[1].clone()]);
        }
    }
}
