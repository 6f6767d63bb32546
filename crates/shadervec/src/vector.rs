//! The fixed-width `f32` vector types.
//!
//! Each vector is a `#[repr(C)]` struct of consecutive `f32` fields named `x`, `y`, `z`, `w`.
//! Those fields are the only storage: the color (`r g b a`) and matrix-style (`X Y Z W`) names
//! generated in [`crate::swizzle`] are accessors over them, and [`Float3::as_array`] and friends
//! view the same memory by index.

use crate::boolean::{Bool2, Bool3, Bool4};
use core::fmt::Debug;
use core::ops::{Index, IndexMut};

/// Abstract trait representing one of the `N`-component `f32` vector types.
///
/// This is the shape other types see when a vector is used as an operand, e.g. matrices contract
/// over [`Vector::dot`]. Sealed: only [`Float2`], [`Float3`] and [`Float4`] implement it.
pub trait Vector<const N: usize>:
    Copy + Default + PartialEq + Debug + Send + Sync + 'static + crate::sealed::Sealed
{
    /// The same-width boolean vector produced by componentwise comparisons.
    type Mask: Copy + Debug + PartialEq;

    /// Creates a vector from its components, in index order.
    fn from_array(components: [f32; N]) -> Self;

    /// The components, in index order.
    fn to_array(self) -> [f32; N];

    /// Sum of the componentwise products.
    fn dot(self, rhs: Self) -> f32 {
        self.to_array()
            .into_iter()
            .zip(rhs.to_array())
            .map(|(a, b)| a * b)
            .sum()
    }

    /// Componentwise `==`.
    fn cmpeq(self, rhs: Self) -> Self::Mask;
    /// Componentwise `!=`.
    fn cmpne(self, rhs: Self) -> Self::Mask;
    /// Componentwise `<`.
    fn cmplt(self, rhs: Self) -> Self::Mask;
    /// Componentwise `<=`.
    fn cmple(self, rhs: Self) -> Self::Mask;
    /// Componentwise `>`.
    fn cmpgt(self, rhs: Self) -> Self::Mask;
    /// Componentwise `>=`.
    fn cmpge(self, rhs: Self) -> Self::Mask;
}

/// A 2-component `f32` vector: 8 bytes, two packed floats.
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Float2 {
    pub x: f32,
    pub y: f32,
}

/// A 3-component `f32` vector: 12 bytes, three packed floats.
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Float3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// A 4-component `f32` vector: 16 bytes, four packed floats.
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Float4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

macro_rules! impl_vector {
    ($vec:ident, $mask:ident, $dim:literal, [$($glam:ty),+], $($field:ident),+) => {
        impl $vec {
            /// All components `0.0`.
            pub const ZERO: Self = Self::splat(0.0);
            /// All components `1.0`.
            pub const ONE: Self = Self::splat(1.0);
            /// All components `-1.0`.
            pub const NEG_ONE: Self = Self::splat(-1.0);

            /// Creates a vector from its components.
            #[inline]
            pub const fn new($($field: f32),+) -> Self {
                Self { $($field),+ }
            }

            /// Creates a vector with every component set to `value`.
            #[inline]
            pub const fn splat(value: f32) -> Self {
                Self { $($field: value),+ }
            }

            /// Creates a vector from its components, in index order.
            #[inline]
            pub const fn from_array(components: [f32; $dim]) -> Self {
                let [$($field),+] = components;
                Self { $($field),+ }
            }

            /// The components, in index order.
            #[inline]
            pub const fn to_array(self) -> [f32; $dim] {
                [$(self.$field),+]
            }

            /// Views the components as an array, in index order.
            #[inline]
            pub fn as_array(&self) -> &[f32; $dim] {
                bytemuck::cast_ref(self)
            }

            /// Views the components as a mutable array, in index order.
            #[inline]
            pub fn as_mut_array(&mut self) -> &mut [f32; $dim] {
                bytemuck::cast_mut(self)
            }

            /// The component at `index`, or `None` if it is out of bounds.
            #[inline]
            pub fn get(&self, index: usize) -> Option<f32> {
                self.as_array().get(index).copied()
            }

            /// A mutable reference to the component at `index`, or `None` if it is out of bounds.
            #[inline]
            pub fn get_mut(&mut self, index: usize) -> Option<&mut f32> {
                self.as_mut_array().get_mut(index)
            }

            /// Applies `f` to every component.
            #[inline]
            pub fn map(self, mut f: impl FnMut(f32) -> f32) -> Self {
                Self { $($field: f(self.$field)),+ }
            }

            /// Combines the components of `self` and `rhs` pairwise.
            #[inline]
            pub(crate) fn zip_map(self, rhs: Self, mut f: impl FnMut(f32, f32) -> f32) -> Self {
                Self { $($field: f(self.$field, rhs.$field)),+ }
            }

            /// Compares the components of `self` and `rhs` pairwise.
            #[inline]
            pub(crate) fn zip_mask(self, rhs: Self, mut f: impl FnMut(f32, f32) -> bool) -> $mask {
                $mask { $($field: f(self.$field, rhs.$field)),+ }
            }

            /// Sum of the componentwise products.
            #[inline]
            pub fn dot(self, rhs: Self) -> f32 {
                [$(self.$field * rhs.$field),+].into_iter().sum()
            }

            /// Sum of the components.
            #[inline]
            pub fn element_sum(self) -> f32 {
                [$(self.$field),+].into_iter().sum()
            }
        }

        impl Vector<$dim> for $vec {
            type Mask = $mask;

            #[inline]
            fn from_array(components: [f32; $dim]) -> Self {
                $vec::from_array(components)
            }

            #[inline]
            fn to_array(self) -> [f32; $dim] {
                $vec::to_array(self)
            }

            #[inline]
            fn dot(self, rhs: Self) -> f32 {
                $vec::dot(self, rhs)
            }

            #[inline]
            fn cmpeq(self, rhs: Self) -> $mask {
                $vec::cmpeq(self, rhs)
            }

            #[inline]
            fn cmpne(self, rhs: Self) -> $mask {
                $vec::cmpne(self, rhs)
            }

            #[inline]
            fn cmplt(self, rhs: Self) -> $mask {
                $vec::cmplt(self, rhs)
            }

            #[inline]
            fn cmple(self, rhs: Self) -> $mask {
                $vec::cmple(self, rhs)
            }

            #[inline]
            fn cmpgt(self, rhs: Self) -> $mask {
                $vec::cmpgt(self, rhs)
            }

            #[inline]
            fn cmpge(self, rhs: Self) -> $mask {
                $vec::cmpge(self, rhs)
            }
        }

        impl Index<usize> for $vec {
            type Output = f32;

            fn index(&self, index: usize) -> &f32 {
                match self.as_array().get(index) {
                    Some(component) => component,
                    None => panic!(
                        concat!("index out of bounds: ", stringify!($vec), " has ", $dim, " components but the index is {}"),
                        index
                    ),
                }
            }
        }

        impl IndexMut<usize> for $vec {
            fn index_mut(&mut self, index: usize) -> &mut f32 {
                match self.as_mut_array().get_mut(index) {
                    Some(component) => component,
                    None => panic!(
                        concat!("index out of bounds: ", stringify!($vec), " has ", $dim, " components but the index is {}"),
                        index
                    ),
                }
            }
        }

        /// Broadcasts a scalar to every component.
        impl From<f32> for $vec {
            #[inline]
            fn from(value: f32) -> Self {
                Self::splat(value)
            }
        }

        impl From<[f32; $dim]> for $vec {
            #[inline]
            fn from(components: [f32; $dim]) -> Self {
                Self::from_array(components)
            }
        }

        impl From<$vec> for [f32; $dim] {
            #[inline]
            fn from(v: $vec) -> Self {
                v.to_array()
            }
        }

        $(
            impl From<$glam> for $vec {
                #[inline]
                fn from(v: $glam) -> Self {
                    Self::from_array(v.to_array())
                }
            }

            impl From<$vec> for $glam {
                #[inline]
                fn from(v: $vec) -> Self {
                    <$glam>::from_array(v.to_array())
                }
            }
        )+
    };
}

impl_vector!(Float2, Bool2, 2, [glam::Vec2], x, y);
impl_vector!(Float3, Bool3, 3, [glam::Vec3, glam::Vec3A], x, y, z);
impl_vector!(Float4, Bool4, 4, [glam::Vec4], x, y, z, w);

impl Float2 {
    /// `(1, 0)`
    pub const UNIT_X: Self = Self::new(1.0, 0.0);
    /// `(0, 1)`
    pub const UNIT_Y: Self = Self::new(0.0, 1.0);

    /// Widens to a [`Float3`] with the given `z`.
    #[inline]
    pub const fn extend(self, z: f32) -> Float3 {
        Float3::new(self.x, self.y, z)
    }
}

impl Float3 {
    /// `(1, 0, 0)`
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);
    /// `(0, 1, 0)`
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);
    /// `(0, 0, 1)`
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Widens to a [`Float4`] with the given `w`.
    #[inline]
    pub const fn extend(self, w: f32) -> Float4 {
        Float4::new(self.x, self.y, self.z, w)
    }

    /// Drops `z`.
    #[inline]
    pub const fn truncate(self) -> Float2 {
        Float2::new(self.x, self.y)
    }
}

impl Float4 {
    /// `(1, 0, 0, 0)`
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0, 0.0);
    /// `(0, 1, 0, 0)`
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    /// `(0, 0, 1, 0)`
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0, 0.0);
    /// `(0, 0, 0, 1)`
    pub const UNIT_W: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Drops `w`.
    #[inline]
    pub const fn truncate(self) -> Float3 {
        Float3::new(self.x, self.y, self.z)
    }
}

/// Trait that implements slicing of a vector into a scalar or vector of lower dimensions, by
/// ignoring the higher dimensions
pub trait VectorTruncateInto<T> {
    /// Slices the vector into a lower dimensional type by ignoring the higher components
    fn truncate_into(self) -> T;
}

macro_rules! vec_trunc_impl {
    ($a:ty, $b:ty, $self:ident $(.$($e:tt)*)?) => {
        impl VectorTruncateInto<$a> for $b {
            fn truncate_into($self) -> $a {
                $self $(. $($e)*)?
            }
        }
    };
}

vec_trunc_impl! {f32, f32, self}
vec_trunc_impl! {f32, Float2, self.x}
vec_trunc_impl! {f32, Float3, self.x}
vec_trunc_impl! {f32, Float4, self.x}

vec_trunc_impl! {Float2, Float2, self}
vec_trunc_impl! {Float2, Float3, self.truncate()}
vec_trunc_impl! {Float2, Float4, self.truncate().truncate()}

vec_trunc_impl! {Float3, Float3, self}
vec_trunc_impl! {Float3, Float4, self.truncate()}

vec_trunc_impl! {Float4, Float4, self}
