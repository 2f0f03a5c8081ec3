//! Real vectors.

use core::array;
use core::fmt::{self, Debug, Formatter};
use core::ops::{Add, Index, Mul, Neg, Sub};

use super::{Lerp, ZDiv};

/// A vector of `N` `f32` components.
#[derive(Copy, Clone, PartialEq)]
#[repr(transparent)]
pub struct Vector<const N: usize>(pub [f32; N]);

/// A 3-vector, used for positions and directions in 3D space.
pub type Vec3 = Vector<3>;

/// A 4-vector, used for homogeneous coordinates in clip space.
pub type Vec4 = Vector<4>;

/// A point in 3D space.
pub type Point3 = Vec3;

/// Returns a 3-vector with components `x`, `y`, and `z`.
#[inline]
pub const fn vec3(x: f32, y: f32, z: f32) -> Vec3 {
    Vector([x, y, z])
}

/// Returns a 4-vector with components `x`, `y`, `z`, and `w`.
#[inline]
pub const fn vec4(x: f32, y: f32, z: f32, w: f32) -> Vec4 {
    Vector([x, y, z, w])
}

impl<const N: usize> Vector<N> {
    /// Returns the zero vector.
    #[inline]
    pub const fn zero() -> Self {
        Self([0.0; N])
    }

    /// Returns the dot product of `self` and `other`.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.0.iter().zip(&other.0).map(|(a, b)| a * b).sum()
    }

    /// Returns `self` with `f` applied to each component.
    #[inline]
    pub fn map(self, f: impl FnMut(f32) -> f32) -> Self {
        Self(self.0.map(f))
    }

    /// Returns the component-wise combination of `self` and `other`.
    #[inline]
    pub fn zip_map(self, other: Self, mut f: impl FnMut(f32, f32) -> f32) -> Self {
        Self(array::from_fn(|i| f(self.0[i], other.0[i])))
    }
}

impl Vec3 {
    #[inline]
    pub const fn x(&self) -> f32 {
        self.0[0]
    }
    #[inline]
    pub const fn y(&self) -> f32 {
        self.0[1]
    }
    #[inline]
    pub const fn z(&self) -> f32 {
        self.0[2]
    }

    /// Returns the homogeneous 4-vector `(x, y, z, w)`.
    #[inline]
    pub const fn to_vec4(self, w: f32) -> Vec4 {
        let [x, y, z] = self.0;
        vec4(x, y, z, w)
    }
}

impl Vec4 {
    #[inline]
    pub const fn x(&self) -> f32 {
        self.0[0]
    }
    #[inline]
    pub const fn y(&self) -> f32 {
        self.0[1]
    }
    #[inline]
    pub const fn z(&self) -> f32 {
        self.0[2]
    }
    #[inline]
    pub const fn w(&self) -> f32 {
        self.0[3]
    }

    /// Divides `x`, `y`, and `z` by `w`, returning the real 3-vector.
    ///
    /// The result is unspecified if `w` is zero.
    #[inline]
    pub fn project_to_real(self) -> Vec3 {
        let [x, y, z, w] = self.0;
        let rw = w.recip();
        vec3(x * rw, y * rw, z * rw)
    }
}

impl<const N: usize> Default for Vector<N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize> Debug for Vector<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Vec{N}")?;
        Debug::fmt(&self.0, f)
    }
}

impl<const N: usize> Index<usize> for Vector<N> {
    type Output = f32;
    #[inline]
    fn index(&self, i: usize) -> &f32 {
        &self.0[i]
    }
}

impl<const N: usize> Add for Vector<N> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.zip_map(rhs, |a, b| a + b)
    }
}

impl<const N: usize> Sub for Vector<N> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.zip_map(rhs, |a, b| a - b)
    }
}

impl<const N: usize> Mul<f32> for Vector<N> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        self.map(|a| a * rhs)
    }
}

impl<const N: usize> Neg for Vector<N> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.map(|a| -a)
    }
}

impl<const N: usize> Lerp for Vector<N> {
    #[inline]
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self.zip_map(*other, |a, b| a.lerp(&b, t))
    }
}

impl<const N: usize> ZDiv for Vector<N> {
    #[inline]
    fn z_div(self, z: f32) -> Self {
        self * z.recip()
    }
}

impl<const N: usize> From<[f32; N]> for Vector<N> {
    #[inline]
    fn from(els: [f32; N]) -> Self {
        Self(els)
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use crate::assert_approx_eq;

    use super::*;

    #[test]
    fn vector_arithmetic() {
        let v = vec3(1.0, -2.0, 3.0);
        let u = vec3(0.5, 0.5, 0.5);
        assert_eq!(v + u, vec3(1.5, -1.5, 3.5));
        assert_eq!(v - u, vec3(0.5, -2.5, 2.5));
        assert_eq!(v * 2.0, vec3(2.0, -4.0, 6.0));
        assert_eq!(-v, vec3(-1.0, 2.0, -3.0));
        assert_eq!(v.dot(&u), 1.0);
    }

    #[test]
    fn vector_lerp() {
        let v = vec4(0.0, 2.0, -4.0, 1.0);
        let u = vec4(1.0, 4.0, 4.0, 1.0);
        assert_eq!(v.lerp(&u, 0.0), v);
        assert_eq!(v.lerp(&u, 1.0), u);
        assert_approx_eq!(v.lerp(&u, 0.25), vec4(0.25, 2.5, -2.0, 1.0));
    }

    #[test]
    fn project_to_real_divides_by_w() {
        let v = vec4(2.0, -4.0, 1.0, 2.0);
        assert_eq!(v.project_to_real(), vec3(1.0, -2.0, 0.5));
    }

    #[test]
    fn vector_debug() {
        assert_eq!(format!("{:?}", vec3(1.0, 2.0, 3.0)), "Vec3[1.0, 2.0, 3.0]");
    }
}
