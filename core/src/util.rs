//! Various helper types and functions.

pub mod buf;
