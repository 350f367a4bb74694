//! Absolute distance between two values of the same type.
//!
//! Nearest-element search needs `|a - b|` without overflowing at the
//! extremes of fixed-width integers. Signed integers measure into their
//! unsigned counterpart through `abs_diff`, so `i8::MIN` and `i8::MAX` are
//! 255 apart rather than wrapping.

use num_bigint::{BigInt, BigUint};
use num_traits::Signed;

/// Absolute difference measured in an ordered output type.
pub trait Distance {
    type Output: Ord;

    fn distance(&self, other: &Self) -> Self::Output;
}

macro_rules! impl_distance_via_abs_diff {
    ($($value:ty => $output:ty),* $(,)?) => {
        $(
            impl Distance for $value {
                type Output = $output;

                #[inline]
                fn distance(&self, other: &Self) -> $output {
                    self.abs_diff(*other)
                }
            }
        )*
    };
}

impl_distance_via_abs_diff!(
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    i128 => u128,
    isize => usize,
    u8 => u8,
    u16 => u16,
    u32 => u32,
    u64 => u64,
    u128 => u128,
    usize => usize,
);

impl Distance for BigInt {
    type Output = BigInt;

    fn distance(&self, other: &Self) -> BigInt {
        (self - other).abs()
    }
}

impl Distance for BigUint {
    type Output = BigUint;

    fn distance(&self, other: &Self) -> BigUint {
        if self >= other {
            self - other
        } else {
            other - self
        }
    }
}

impl Distance for char {
    type Output = u32;

    fn distance(&self, other: &Self) -> u32 {
        u32::from(*self).abs_diff(u32::from(*other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_extremes_do_not_overflow() {
        assert_eq!(i8::MIN.distance(&i8::MAX), 255u8);
        assert_eq!(i64::MIN.distance(&i64::MAX), u64::MAX);
    }

    #[test]
    fn distance_is_symmetric() {
        assert_eq!(3i32.distance(&10), 7);
        assert_eq!(10i32.distance(&3), 7);
        assert_eq!(3u32.distance(&10), 7);
        assert_eq!(10u32.distance(&3), 7);
    }

    #[test]
    fn big_integers() {
        let a = BigInt::from(-5);
        let b = BigInt::from(12);
        assert_eq!(a.distance(&b), BigInt::from(17));
        assert_eq!(b.distance(&a), BigInt::from(17));

        let c = BigUint::from(4u32);
        let d = BigUint::from(9u32);
        assert_eq!(c.distance(&d), BigUint::from(5u32));
        assert_eq!(d.distance(&c), BigUint::from(5u32));
    }

    #[test]
    fn characters_measure_code_points() {
        assert_eq!('a'.distance(&'e'), 4);
        assert_eq!('z'.distance(&'a'), 25);
    }
}
