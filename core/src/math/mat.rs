//! Matrices and linear transforms.
//!
//! Matrices are stored in row-major order and transform column vectors,
//! that is, `M.apply(v)` computes the product `Mv`. The transforms follow
//! the OpenGL conventions: view space is right-handed with the camera
//! looking towards negative z, and the clip volume is `-w <= x, y, z <= w`.

use core::fmt::{self, Debug, Formatter};
use core::ops::Range;

use super::vec::{Vec3, Vec4, vec4};

/// A 4x4 matrix of `f32` elements.
#[derive(Copy, Clone, PartialEq)]
#[repr(transparent)]
pub struct Mat4x4(pub [[f32; 4]; 4]);

impl Mat4x4 {
    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    #[inline]
    pub fn row_vec(&self, i: usize) -> Vec4 {
        self.0[i].into()
    }
    #[inline]
    pub fn col_vec(&self, i: usize) -> Vec4 {
        vec4(self.0[0][i], self.0[1][i], self.0[2][i], self.0[3][i])
    }

    /// Returns the matrix product `self * other`.
    ///
    /// The resulting transform applies `other` first, then `self`.
    pub fn compose(&self, other: &Self) -> Self {
        let mut els = [[0.0; 4]; 4];
        for (i, row) in els.iter_mut().enumerate() {
            for (j, el) in row.iter_mut().enumerate() {
                *el = self.row_vec(i).dot(&other.col_vec(j));
            }
        }
        Self(els)
    }

    /// Returns the transform that applies `self` first, then `other`.
    pub fn then(&self, other: &Self) -> Self {
        other.compose(self)
    }

    /// Transforms the point `v`, treating it as having `w = 1`.
    ///
    /// The bottom row is ignored, so this is only meaningful for affine
    /// transforms. Use [`apply4`][Self::apply4] for projections.
    #[inline]
    pub fn apply(&self, v: &Vec3) -> Vec3 {
        let v = v.to_vec4(1.0);
        [0, 1, 2].map(|i| self.row_vec(i).dot(&v)).into()
    }

    /// Transforms the homogeneous vector `v`.
    #[inline]
    pub fn apply4(&self, v: &Vec4) -> Vec4 {
        [0, 1, 2, 3].map(|i| self.row_vec(i).dot(v)).into()
    }
}

impl Default for Mat4x4 {
    /// Returns the identity matrix.
    fn default() -> Self {
        Self::identity()
    }
}

impl Debug for Mat4x4 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mat4x4[")?;
        for row in &self.0 {
            writeln!(f, "    {row:6.2?}")?;
        }
        write!(f, "]")
    }
}

/// Returns a matrix that translates points by `t`.
pub const fn translate(t: Vec3) -> Mat4x4 {
    let [x, y, z] = t.0;
    Mat4x4([
        [1.0, 0.0, 0.0, x],
        [0.0, 1.0, 0.0, y],
        [0.0, 0.0, 1.0, z],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Returns a perspective projection matrix.
///
/// `fov_y` is the vertical field of view in radians, `aspect` the ratio of
/// width to height, and `near_far` the distances to the near and far clip
/// planes, both positive.
///
/// # Panics
/// If debug assertions are enabled and `near_far` is empty or its start
/// is not positive.
pub fn perspective(fov_y: f32, aspect: f32, near_far: Range<f32>) -> Mat4x4 {
    use super::float::f32;
    let Range { start: n, end: f } = near_far;
    debug_assert!(0.0 < n && n < f, "invalid near/far range {n}..{f}");

    let cot = f32::tan(fov_y / 2.0).recip();
    let depth = (n - f).recip();
    Mat4x4([
        [cot / aspect, 0.0, 0.0, 0.0],
        [0.0, cot, 0.0, 0.0],
        [0.0, 0.0, (f + n) * depth, 2.0 * f * n * depth],
        [0.0, 0.0, -1.0, 0.0],
    ])
}

/// Returns a matrix that maps normalized device coordinates to pixel
/// coordinates of a `width` by `height` viewport.
///
/// NDC `(-1, 1)` maps to the top left corner `(0, 0)` and `(1, -1)` to the
/// bottom right corner `(width, height)`. The z coordinate is unchanged.
pub fn viewport(width: u32, height: u32) -> Mat4x4 {
    let h = width as f32 / 2.0;
    let v = height as f32 / 2.0;
    Mat4x4([
        [h, 0.0, 0.0, h],
        [0.0, -v, 0.0, v],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use crate::assert_approx_eq;
    use crate::math::vec::vec3;

    use super::*;

    #[test]
    fn translation_then_translation() {
        let m = translate(vec3(1.0, 0.0, 0.0))
            .then(&translate(vec3(0.0, 0.0, -5.0)));
        assert_eq!(m.apply(&vec3(0.0, 2.0, 0.0)), vec3(1.0, 2.0, -5.0));
    }

    #[test]
    fn compose_applies_right_operand_first() {
        let t = translate(vec3(0.0, 0.0, 1.0));
        let p = perspective(1.0, 1.0, 0.5..10.0);
        let v = vec4(0.0, 0.0, -2.0, 1.0);
        assert_approx_eq!(p.compose(&t).apply4(&v), p.apply4(&t.apply4(&v)));
    }

    #[test]
    fn perspective_maps_near_and_far_to_unit_depth() {
        let m = perspective(45f32.to_radians(), 1.0, 0.25..25.0);

        let near = m.apply4(&vec4(0.0, 0.0, -0.25, 1.0));
        assert_approx_eq!(near.project_to_real().z(), -1.0);
        assert_approx_eq!(near.w(), 0.25);

        let far = m.apply4(&vec4(0.0, 0.0, -25.0, 1.0));
        assert_approx_eq!(far.project_to_real().z(), 1.0, eps = 1e-5);
    }

    #[test]
    fn perspective_aspect_ratio_scales_x() {
        let wide = perspective(45f32.to_radians(), 2.0, 0.25..25.0);
        let square = perspective(45f32.to_radians(), 1.0, 0.25..25.0);
        assert_approx_eq!(wide.0[0][0] * 2.0, square.0[0][0]);
        assert_approx_eq!(wide.0[1][1], square.0[1][1]);
    }

    #[test]
    fn viewport_maps_ndc_corners() {
        let m = viewport(500, 400);
        assert_eq!(m.apply(&vec3(-1.0, 1.0, 0.0)), vec3(0.0, 0.0, 0.0));
        assert_eq!(m.apply(&vec3(1.0, -1.0, 0.5)), vec3(500.0, 400.0, 0.5));
    }

    #[test]
    fn matrix_debug() {
        let s = format!("{:?}", Mat4x4::identity());
        assert!(s.starts_with("Mat4x4[\n"), "{s}");
        assert_eq!(s.lines().count(), 6);
    }
}
