//! Colors and color spaces.

use core::array;

use super::Lerp;
use super::ZDiv;

/// An RGBA color with `f32` components, nominally in the range `0.0..=1.0`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[repr(transparent)]
pub struct Color4f(pub [f32; 4]);

/// Returns a new RGBA color with the given components.
#[inline]
pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Color4f {
    Color4f([r, g, b, a])
}

/// Returns a new opaque RGB color with the given components.
#[inline]
pub const fn rgb(r: f32, g: f32, b: f32) -> Color4f {
    rgba(r, g, b, 1.0)
}

impl Color4f {
    /// Opaque black.
    pub const BLACK: Self = rgb(0.0, 0.0, 0.0);
    /// Opaque white.
    pub const WHITE: Self = rgb(1.0, 1.0, 1.0);

    #[inline]
    pub const fn r(&self) -> f32 {
        self.0[0]
    }
    #[inline]
    pub const fn g(&self) -> f32 {
        self.0[1]
    }
    #[inline]
    pub const fn b(&self) -> f32 {
        self.0[2]
    }
    #[inline]
    pub const fn a(&self) -> f32 {
        self.0[3]
    }

    /// Returns the components of `self` mapped to `u8` with
    /// `(c.clamp(0.0, 1.0) * 255.0) as u8`.
    #[inline]
    pub fn to_u8(self) -> [u8; 4] {
        self.0.map(|c| (c.clamp(0.0, 1.0) * 255.0) as u8)
    }

    /// Returns a `u32` containing the component bytes of `self`
    /// in `0xAA_RR_GG_BB` order.
    #[inline]
    pub fn to_argb_u32(self) -> u32 {
        let [r, g, b, a] = self.to_u8();
        u32::from_be_bytes([a, r, g, b])
    }

    /// Returns `self` with the RGB components linearly interpolated towards
    /// `other` by `t`. The alpha component is unchanged.
    #[inline]
    pub fn mix_rgb(self, other: Self, t: f32) -> Self {
        let [r, g, b, _] = self.lerp(&other, t).0;
        rgba(r, g, b, self.a())
    }
}

impl Lerp for Color4f {
    #[inline]
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Self(array::from_fn(|i| self.0[i].lerp(&other.0[i], t)))
    }
}

impl ZDiv for Color4f {
    #[inline]
    fn z_div(self, z: f32) -> Self {
        let rz = z.recip();
        Self(self.0.map(|c| c * rz))
    }
}

impl From<[f32; 4]> for Color4f {
    #[inline]
    fn from(els: [f32; 4]) -> Self {
        Self(els)
    }
}
