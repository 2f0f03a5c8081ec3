//! Testing and asserting approximate equality.

use core::iter::zip;

use super::{Color4f, vec::Vector};

/// Approximate equality of floating-point values and aggregates of them.
///
/// Two scalars are approximately equal if they differ by at most `eps`
/// times the larger of 1.0 and the magnitude of the left operand. Below
/// magnitude 1.0 the tolerance is thus absolute, above it relative.
pub trait ApproxEq<Other: ?Sized = Self, Epsilon = Self> {
    /// Compares using the default [`relative_epsilon`][Self::relative_epsilon].
    fn approx_eq(&self, other: &Other) -> bool {
        self.approx_eq_eps(other, &Self::relative_epsilon())
    }

    /// Compares using the tolerance `rel_eps`.
    fn approx_eq_eps(&self, other: &Other, rel_eps: &Epsilon) -> bool;

    /// The tolerance used by [`approx_eq`][Self::approx_eq].
    fn relative_epsilon() -> Epsilon;
}

impl ApproxEq for f32 {
    fn approx_eq_eps(&self, other: &Self, rel_eps: &Self) -> bool {
        let diff = if self > other { self - other } else { other - self };
        let mag = if *self < 0.0 { -self } else { *self };
        diff <= *rel_eps * mag.max(1.0)
    }

    fn relative_epsilon() -> Self {
        1e-6
    }
}

impl<E, T: Sized + ApproxEq<T, E>> ApproxEq<Self, E> for [T] {
    fn approx_eq_eps(&self, other: &Self, rel_eps: &E) -> bool {
        self.len() == other.len()
            && zip(self, other).all(|(s, o)| s.approx_eq_eps(o, rel_eps))
    }
    fn relative_epsilon() -> E {
        T::relative_epsilon()
    }
}

impl<E, T: Sized + ApproxEq<T, E>, const N: usize> ApproxEq<Self, E>
    for [T; N]
{
    fn approx_eq_eps(&self, other: &Self, rel_eps: &E) -> bool {
        self.as_slice().approx_eq_eps(other, rel_eps)
    }
    fn relative_epsilon() -> E {
        T::relative_epsilon()
    }
}

impl<const N: usize> ApproxEq<Self, f32> for Vector<N> {
    fn approx_eq_eps(&self, other: &Self, rel_eps: &f32) -> bool {
        self.0.approx_eq_eps(&other.0, rel_eps)
    }
    fn relative_epsilon() -> f32 {
        f32::relative_epsilon()
    }
}

impl ApproxEq<Self, f32> for Color4f {
    fn approx_eq_eps(&self, other: &Self, rel_eps: &f32) -> bool {
        self.0.approx_eq_eps(&other.0, rel_eps)
    }
    fn relative_epsilon() -> f32 {
        f32::relative_epsilon()
    }
}

/// Like `assert_eq!`, but compares with [`ApproxEq`].
///
/// Both operands must be `Debug` unless a message is given.
///
/// # Examples
/// ```
/// # use fogcoord_core::assert_approx_eq;
/// assert_ne!(0.1 + 0.2, 0.3);
/// assert_approx_eq!(0.1 + 0.2, 0.3);
/// ```
/// With an explicit tolerance:
/// ```
/// # use fogcoord_core::assert_approx_eq;
/// assert_approx_eq!(100.0, 101.0, eps = 0.01);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr) => {
        match (&$a, &$b) {
            (a, b) => $crate::assert_approx_eq!(
                *a, *b,
                "assertion failed: `{a:?} ≅ {b:?}`"
            )
        }
    };
    ($a:expr, $b:expr, eps = $eps:literal) => {
        match (&$a, &$b) {
            (a, b) => $crate::assert_approx_eq!(
                *a, *b, eps = $eps,
                "assertion failed: `{a:?} ≅ {b:?}`"
            )
        }
    };
    ($a:expr, $b:expr, $fmt:literal $(, $args:expr)*) => {{
        use $crate::math::approx::ApproxEq;
        match (&$a, &$b) {
            (a, b) => assert!(ApproxEq::approx_eq(a, b), $fmt $(, $args)*)
        }
    }};
    ($a:expr, $b:expr, eps = $eps:literal, $fmt:literal $(, $args:expr)*) => {{
        use $crate::math::approx::ApproxEq;
        match (&$a, &$b) {
            (a, b) => assert!(
                ApproxEq::approx_eq_eps(a, b, &$eps),
                $fmt $(, $args)*
            )
        }
    }};
}

#[cfg(test)]
mod tests {
    use crate::math::{rgba, vec3};

    #[test]
    fn approx_eq_floats() {
        assert_approx_eq!(0.0, -0.0);
        assert_approx_eq!(0.9999999, 1.0);
        assert_approx_eq!(1.0e10, 1.0000001e10);
        assert_approx_eq!(100.0, 99.9, eps = 0.01);
    }

    #[test]
    fn approx_eq_vectors_and_colors() {
        assert_approx_eq!(vec3(0.1 + 0.2, 1.0, 0.0), vec3(0.3, 1.0, 0.0));
        assert_approx_eq!(
            rgba(0.1 + 0.2, 0.0, 0.0, 1.0),
            rgba(0.3, 0.0, 0.0, 1.0)
        );
    }

    #[test]
    #[should_panic]
    fn one_not_approx_eq_to_1_00001() {
        assert_approx_eq!(1.0, 1.00001);
    }

    #[test]
    #[should_panic]
    fn nan_not_approx_eq_to_nan() {
        assert_approx_eq!(f32::NAN, f32::NAN);
    }
}
