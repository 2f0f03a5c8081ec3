//! Linear algebra and colors.

pub mod approx;
pub mod color;
pub mod float;
pub mod mat;
pub mod vec;

pub use color::{Color4f, rgb, rgba};
pub use mat::Mat4x4;
pub use vec::{Point3, Vec3, Vec4, vec3, vec4};

/// Trait for types that can be linearly interpolated.
pub trait Lerp: Sized {
    /// Returns the value `t` of the way from `self` to `other`.
    ///
    /// `t = 0` yields `self` and `t = 1` yields `other`; values outside
    /// the unit interval extrapolate.
    fn lerp(&self, other: &Self, t: f32) -> Self;
}

/// Trait for attributes that are interpolated perspective-correctly.
///
/// Before rasterization each attribute is divided by the `w` coordinate of
/// its vertex; after interpolation it is divided by the interpolated `1/w`
/// to recover the true value at the fragment.
pub trait ZDiv: Sized {
    /// Returns `self` divided by `z`.
    fn z_div(self, z: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + t * (other - self)
    }
}

impl ZDiv for f32 {
    #[inline]
    fn z_div(self, z: f32) -> Self {
        self / z
    }
}

impl<A: Lerp, B: Lerp> Lerp for (A, B) {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        (self.0.lerp(&other.0, t), self.1.lerp(&other.1, t))
    }
}

/// Linearly interpolates between `from` and `to`.
#[inline]
pub fn lerp<T: Lerp>(t: f32, from: T, to: T) -> T {
    from.lerp(&to, t)
}
