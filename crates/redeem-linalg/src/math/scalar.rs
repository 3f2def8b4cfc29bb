//! Element types a [`Matrix`](super::Matrix) may hold.
//!
//! `Scalar` is sealed and implemented for the built-in integer and
//! floating-point types only, so a matrix over anything else is rejected by
//! the compiler.
use std::fmt::{Debug, Display};
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

use num_traits::{Num, NumCast};

mod private {
    pub trait Sealed {}
}

pub trait Scalar:
    private::Sealed
    + Num
    + NumCast
    + Copy
    + PartialOrd
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Debug
    + Display
    + Send
    + Sync
    + 'static
{
    /// `true` for `f32`/`f64`.
    const IS_FLOAT: bool;

    /// Numerical equality.
    ///
    /// Floats compare with a tolerance scaled by the larger magnitude:
    /// `|a - b| <= max(|a|, |b|) * EPSILON`. Integers compare exactly.
    fn approx_eq(self, other: Self) -> bool;

    /// Exact comparison against `0`, independent of `approx_eq`.
    #[inline]
    fn is_exact_zero(self) -> bool {
        self == Self::zero()
    }
}

macro_rules! impl_int_scalar {
    ($($t:ty),*) => {
        $(
            impl private::Sealed for $t {}

            impl Scalar for $t {
                const IS_FLOAT: bool = false;

                #[inline]
                fn approx_eq(self, other: Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

macro_rules! impl_float_scalar {
    ($($t:ident),*) => {
        $(
            impl private::Sealed for $t {}

            impl Scalar for $t {
                const IS_FLOAT: bool = true;

                #[inline]
                fn approx_eq(self, other: Self) -> bool {
                    (self - other).abs() <= self.abs().max(other.abs()) * $t::EPSILON
                }
            }
        )*
    };
}

impl_int_scalar!(i8, i16, i32, i64, i128, isize);
impl_int_scalar!(u8, u16, u32, u64, u128, usize);
impl_float_scalar!(f32, f64);

/// Free-function form of [`Scalar::approx_eq`].
#[inline]
pub fn are_equal<T: Scalar>(lhs: T, rhs: T) -> bool {
    lhs.approx_eq(rhs)
}
