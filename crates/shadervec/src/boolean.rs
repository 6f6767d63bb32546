//! Boolean vectors, the result of componentwise comparisons.

use crate::vector::{Float2, Float3, Float4};
use core::fmt;
use core::ops::{BitAnd, BitOr, BitXor, Index, IndexMut, Not};

/// Result of a componentwise comparison of two [`Float2`]s.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Bool2 {
    pub x: bool,
    pub y: bool,
}

/// Result of a componentwise comparison of two [`Float3`]s.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Bool3 {
    pub x: bool,
    pub y: bool,
    pub z: bool,
}

/// Result of a componentwise comparison of two [`Float4`]s.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Bool4 {
    pub x: bool,
    pub y: bool,
    pub z: bool,
    pub w: bool,
}

macro_rules! impl_bool {
    ($mask:ident, $vec:ident, $glam:ty, $dim:literal, $($field:ident => $bit:literal),+) => {
        impl $mask {
            /// Every component `false`.
            pub const FALSE: Self = Self::splat(false);
            /// Every component `true`.
            pub const TRUE: Self = Self::splat(true);

            #[inline]
            pub const fn new($($field: bool),+) -> Self {
                Self { $($field),+ }
            }

            #[inline]
            pub const fn splat(value: bool) -> Self {
                Self { $($field: value),+ }
            }

            #[inline]
            pub const fn from_array(components: [bool; $dim]) -> Self {
                let [$($field),+] = components;
                Self { $($field),+ }
            }

            #[inline]
            pub const fn to_array(self) -> [bool; $dim] {
                [$(self.$field),+]
            }

            /// `true` if every component is `true`.
            #[inline]
            pub const fn all(self) -> bool {
                true $(&& self.$field)+
            }

            /// `true` if any component is `true`.
            #[inline]
            pub const fn any(self) -> bool {
                false $(|| self.$field)+
            }

            /// One bit per component, `x` in the lowest bit.
            #[inline]
            pub const fn bitmask(self) -> u32 {
                0 $(| ((self.$field as u32) << $bit))+
            }

            /// Picks each component from `if_true` where `self` is `true` and from `if_false`
            /// elsewhere.
            #[inline]
            pub fn select(self, if_true: $vec, if_false: $vec) -> $vec {
                $vec {
                    $($field: if self.$field { if_true.$field } else { if_false.$field }),+
                }
            }
        }

        impl From<[bool; $dim]> for $mask {
            #[inline]
            fn from(components: [bool; $dim]) -> Self {
                Self::from_array(components)
            }
        }

        impl Index<usize> for $mask {
            type Output = bool;

            fn index(&self, index: usize) -> &bool {
                match index {
                    $($bit => &self.$field,)+
                    _ => panic!(
                        concat!("index out of bounds: ", stringify!($mask), " has ", $dim, " components but the index is {}"),
                        index
                    ),
                }
            }
        }

        impl IndexMut<usize> for $mask {
            fn index_mut(&mut self, index: usize) -> &mut bool {
                match index {
                    $($bit => &mut self.$field,)+
                    _ => panic!(
                        concat!("index out of bounds: ", stringify!($mask), " has ", $dim, " components but the index is {}"),
                        index
                    ),
                }
            }
        }

        impl fmt::Display for $mask {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("<")?;
                for (i, component) in self.to_array().into_iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{component}")?;
                }
                f.write_str(">")
            }
        }

        impl From<$mask> for [bool; $dim] {
            #[inline]
            fn from(mask: $mask) -> Self {
                mask.to_array()
            }
        }

        impl From<$glam> for $mask {
            #[inline]
            fn from(mask: $glam) -> Self {
                Self { $($field: mask.$field),+ }
            }
        }

        impl From<$mask> for $glam {
            #[inline]
            fn from(mask: $mask) -> Self {
                <$glam>::new($(mask.$field),+)
            }
        }

        impl Not for $mask {
            type Output = Self;
            #[inline]
            fn not(self) -> Self {
                Self { $($field: !self.$field),+ }
            }
        }

        impl BitAnd for $mask {
            type Output = Self;
            #[inline]
            fn bitand(self, rhs: Self) -> Self {
                Self { $($field: self.$field & rhs.$field),+ }
            }
        }

        impl BitOr for $mask {
            type Output = Self;
            #[inline]
            fn bitor(self, rhs: Self) -> Self {
                Self { $($field: self.$field | rhs.$field),+ }
            }
        }

        impl BitXor for $mask {
            type Output = Self;
            #[inline]
            fn bitxor(self, rhs: Self) -> Self {
                Self { $($field: self.$field ^ rhs.$field),+ }
            }
        }
    };
}

impl_bool!(Bool2, Float2, glam::BVec2, 2, x => 0, y => 1);
impl_bool!(Bool3, Float3, glam::BVec3, 3, x => 0, y => 1, z => 2);
impl_bool!(Bool4, Float4, glam::BVec4, 4, x => 0, y => 1, z => 2, w => 3);
