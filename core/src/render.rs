//! Turning 3D geometry into raster images.
//!
//! This module defines [`Backend`], an immediate-mode rendering interface
//! in the style of a classic fixed-function graphics pipeline, and
//! [`Immediate`][immediate::Immediate], a software implementation of it.
//! The pipeline stages live in their own modules: [clipping][clip],
//! [rasterizing][raster], and [fog][fog] computation.

use core::ops::Range;

use crate::math::{Color4f, Point3, Vec3};

use fog::{FogMode, FogSource, Hint};

pub mod clip;
pub mod fog;
pub mod immediate;
pub mod raster;
pub mod stats;

pub use stats::Stats;

/// How the vertices submitted between [`Backend::begin`] and
/// [`Backend::end`] are assembled into primitives.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Topology {
    /// Every three consecutive vertices form an independent triangle.
    /// Any leftover vertices are ignored.
    Triangles,
}

/// An immediate-mode 3D rendering state machine.
///
/// State set through this interface, such as the fog parameters, the
/// current color and fog coordinate, and the transforms, persists until
/// changed again. Vertices pick up the *current* color and fog coordinate
/// at the time they are submitted.
pub trait Backend {
    /// Enables or disables fog.
    fn set_fog_enabled(&mut self, enabled: bool);
    /// Sets the fog falloff equation.
    fn set_fog_mode(&mut self, mode: FogMode);
    /// Sets the color that fully fogged fragments take.
    fn set_fog_color(&mut self, color: Color4f);
    /// Sets the density coefficient of the exponential fog modes.
    fn set_fog_density(&mut self, density: f32);
    /// Sets the fog quality hint.
    fn set_fog_hint(&mut self, hint: Hint);
    /// Selects whether fog is driven by the explicit per-vertex fog
    /// coordinate or by the fragment depth.
    fn set_fog_source(&mut self, source: FogSource);

    /// Sets the color used by [`clear`][Self::clear].
    fn set_clear_color(&mut self, color: Color4f);
    /// Fills the color buffer with the clear color.
    fn clear(&mut self);

    /// Sets the current color.
    fn set_color(&mut self, color: Color4f);
    /// Sets the current fog coordinate.
    fn fog_coord(&mut self, coord: f32);
    /// Starts a batch of primitives of the given topology.
    fn begin(&mut self, topology: Topology);
    /// Submits a vertex with the current color and fog coordinate.
    fn vertex(&mut self, pos: Point3);
    /// Ends the current batch, drawing its primitives.
    fn end(&mut self);

    /// Sets the size of the viewport in pixels.
    fn viewport(&mut self, width: u32, height: u32);
    /// Replaces the projection with a perspective frustum.
    ///
    /// `fov_y` is the vertical field of view in radians.
    fn perspective(&mut self, fov_y: f32, aspect: f32, near_far: Range<f32>);
    /// Resets the view transform to identity.
    fn load_identity(&mut self);
    /// Composes a translation by `t` into the view transform.
    fn translate(&mut self, t: Vec3);

    /// Makes the finished back buffer the displayed front buffer.
    fn swap_buffers(&mut self);
}
