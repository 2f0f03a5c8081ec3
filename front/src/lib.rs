//! Frontends for running interactive applications with `fogcoord`.
//!
//! The [`event`] module is independent of any windowing library: it
//! defines the [`App`] interface and a [`Dispatcher`] that feeds events to
//! it. The windowing frontends, currently [`minifb`](crate::minifb)
//! behind the feature of the same name, translate platform input into
//! [`Event`]s and present the rendered frames.

pub mod event;

#[cfg(feature = "minifb")]
pub mod minifb;

pub use event::{App, Dispatcher, Event, Key, Reply};

/// Window and surface dimensions.
pub mod dims {
    /// Width and height in pixels.
    pub type Dims = (u32, u32);

    pub const SQUARE_500: Dims = (500, 500);
}
