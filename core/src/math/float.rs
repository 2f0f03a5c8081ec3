//! Floating-point compatibility API.
//!
//! Transcendental functions are unavailable in `no_std`. This module
//! provides the handful the renderer needs, using either the standard
//! library or the `libm` crate depending on which feature is enabled.
//! Call them as `f32::exp(x)` after importing `float::f32`.

#[cfg(feature = "libm")]
pub mod libm {
    pub use libm::ceilf as ceil;
    pub use libm::expf as exp;
    pub use libm::floorf as floor;
    pub use libm::tanf as tan;
}

#[cfg(feature = "std")]
#[allow(non_camel_case_types)]
pub type f32 = core::primitive::f32;

#[cfg(all(feature = "libm", not(feature = "std")))]
pub use libm as f32;

#[cfg(test)]
mod tests {
    use core::f32::consts::{E, FRAC_PI_4};

    use crate::assert_approx_eq;

    #[allow(unused_imports)]
    use super::*;

    #[cfg(feature = "libm")]
    #[test]
    fn libm_functions() {
        assert_eq!(libm::floor(1.5), 1.0);
        assert_eq!(libm::floor(-1.1), -2.0);
        assert_eq!(libm::ceil(1.1), 2.0);
        assert_eq!(libm::ceil(-1.5), -1.0);
        assert_eq!(libm::exp(0.0), 1.0);
        assert_approx_eq!(libm::exp(1.0), E);
        assert_approx_eq!(libm::tan(FRAC_PI_4), 1.0);
    }

    #[test]
    fn selected_functions() {
        assert_eq!(f32::floor(-0.5), -1.0);
        assert_eq!(f32::ceil(0.25), 1.0);
        assert_approx_eq!(f32::exp(-1.0), E.recip());
        assert_approx_eq!(f32::tan(FRAC_PI_4), 1.0);
    }
}
