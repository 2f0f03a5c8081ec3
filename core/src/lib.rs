//! Core functionality of the `fogcoord` project.
//!
//! Includes a small math library with vectors, matrices, and colors, and
//! a software renderer modeled after a fixed-function graphics pipeline:
//! geometry is submitted vertex by vertex between `begin` and `end` calls,
//! transformed, clipped, rasterized, and fogged either by an explicit
//! per-vertex fog coordinate or by the fragment's eye-space depth.
//!
//! # Crate features
//!
//! * `std`:
//!   Uses the floating-point functions of the standard library. Enabled
//!   by default.
//!
//! * `libm`:
//!   Provides software implementations of floating-point functions via the
//!   [libm](https://crates.io/crates/libm) crate, for `no_std` builds.
//!
//! One of the two must be enabled; without `std` the crate only depends
//! on `alloc`.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

#[cfg(not(feature = "fp"))]
compile_error!("either the `std` or the `libm` feature must be enabled");

pub mod math;
pub mod render;
pub mod util;

pub mod prelude {
    pub use crate::math::{
        color::{Color4f, rgb, rgba},
        mat::{Mat4x4, perspective, translate, viewport},
        vec::{Point3, Vec3, Vec4, vec3, vec4},
        Lerp,
    };

    pub use crate::render::{
        Backend, Topology,
        fog::{Fog, FogMode, FogSource, Hint},
        immediate::Immediate,
    };

    pub use crate::util::buf::Buf2;
}
