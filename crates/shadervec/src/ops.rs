//! Componentwise arithmetic and comparison for the vector types.

use crate::boolean::{Bool2, Bool3, Bool4};
use crate::vector::{Float2, Float3, Float4};
use core::ops;

/// Generate arithmetic operators for a vector type: vector∘vector, vector∘scalar and
/// scalar∘vector forms, and their compound assignments.
macro_rules! impl_float_ops {
    ($vec:ident, $mask:ident, $($field:ident),+) => {
        impl_float_ops!(@binary $vec, Add, add, AddAssign, add_assign, +, $($field),+);
        impl_float_ops!(@binary $vec, Sub, sub, SubAssign, sub_assign, -, $($field),+);
        impl_float_ops!(@binary $vec, Mul, mul, MulAssign, mul_assign, *, $($field),+);
        impl_float_ops!(@binary $vec, Div, div, DivAssign, div_assign, /, $($field),+);
        // Truncated remainder, the same as HLSL `fmod`.
        impl_float_ops!(@binary $vec, Rem, rem, RemAssign, rem_assign, %, $($field),+);

        impl ops::Neg for $vec {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                $vec { $($field: -self.$field),+ }
            }
        }

        impl $vec {
            /// Componentwise `==`.
            #[inline]
            pub fn cmpeq(self, rhs: Self) -> $mask {
                self.zip_mask(rhs, |a, b| a == b)
            }

            /// Componentwise `!=`. `NaN` compares unequal to everything.
            #[inline]
            pub fn cmpne(self, rhs: Self) -> $mask {
                self.zip_mask(rhs, |a, b| a != b)
            }

            /// Componentwise `<`.
            #[inline]
            pub fn cmplt(self, rhs: Self) -> $mask {
                self.zip_mask(rhs, |a, b| a < b)
            }

            /// Componentwise `<=`.
            #[inline]
            pub fn cmple(self, rhs: Self) -> $mask {
                self.zip_mask(rhs, |a, b| a <= b)
            }

            /// Componentwise `>`.
            #[inline]
            pub fn cmpgt(self, rhs: Self) -> $mask {
                self.zip_mask(rhs, |a, b| a > b)
            }

            /// Componentwise `>=`.
            #[inline]
            pub fn cmpge(self, rhs: Self) -> $mask {
                self.zip_mask(rhs, |a, b| a >= b)
            }

            /// Componentwise minimum.
            #[inline]
            pub fn min(self, rhs: Self) -> Self {
                self.zip_map(rhs, f32::min)
            }

            /// Componentwise maximum.
            #[inline]
            pub fn max(self, rhs: Self) -> Self {
                self.zip_map(rhs, f32::max)
            }

            /// Componentwise absolute value.
            #[inline]
            pub fn abs(self) -> Self {
                self.map(f32::abs)
            }
        }

        impl num_traits::Zero for $vec {
            #[inline]
            fn zero() -> Self {
                Self::ZERO
            }

            #[inline]
            fn is_zero(&self) -> bool {
                $(self.$field == 0.0)&&+
            }
        }

        impl num_traits::One for $vec {
            #[inline]
            fn one() -> Self {
                Self::ONE
            }
        }
    };

    (@binary $vec:ident, $op:ident, $method:ident, $assign:ident, $assign_method:ident, $sym:tt, $($field:ident),+) => {
        impl ops::$op for $vec {
            type Output = Self;
            #[inline]
            fn $method(self, rhs: Self) -> Self {
                $vec { $($field: self.$field $sym rhs.$field),+ }
            }
        }

        impl ops::$op<f32> for $vec {
            type Output = Self;
            #[inline]
            fn $method(self, rhs: f32) -> Self {
                $vec { $($field: self.$field $sym rhs),+ }
            }
        }

        impl ops::$op<$vec> for f32 {
            type Output = $vec;
            #[inline]
            fn $method(self, rhs: $vec) -> $vec {
                $vec { $($field: self $sym rhs.$field),+ }
            }
        }

        impl ops::$assign for $vec {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                $(self.$field = self.$field $sym rhs.$field;)+
            }
        }

        impl ops::$assign<f32> for $vec {
            #[inline]
            fn $assign_method(&mut self, rhs: f32) {
                $(self.$field = self.$field $sym rhs;)+
            }
        }
    };
}

impl_float_ops!(Float2, Bool2, x, y);
impl_float_ops!(Float3, Bool3, x, y, z);
impl_float_ops!(Float4, Bool4, x, y, z, w);
