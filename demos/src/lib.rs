//! The fog coordinate demo: a single triangle fogged either by explicit
//! per-vertex fog coordinates or by its depth, with interactive controls.
//!
//! [`scene`] holds the controller state and decides what to draw;
//! [`cmd`] turns those decisions into calls to a rendering backend.

pub mod cmd;
pub mod scene;

pub use cmd::{Command, execute};
pub use scene::Scene;
