//! Swizzle accessors.
//!
//! For every vector width and [`NamingScheme`](crate::NamingScheme), `swizzle!` generates:
//!
//! * a getter for every selection of 1 to 4 components, repetition allowed: `v.zyx()`,
//!   `v.rrgg()`, `v.XYZW()`;
//! * for selections that do not repeat a component, a setter (`v.set_zyx(..)`) and a borrowing
//!   proxy (`v.zyx_mut()`, see [`SwizzleMut`]).
//!
//! Assigning through a repeating selection does not compile:
//!
//! ```compile_fail
//! let mut v = shadervec::Float3::ZERO;
//! v.set_xx(shadervec::Float2::ONE);
//! ```
//!
//! ```compile_fail
//! let mut v = shadervec::Float4::ZERO;
//! let _ = v.rra_mut();
//! ```
//!
//! Selections held as strings resolve through [`Float3::swizzle`] and [`Float3::set_swizzle`],
//! which apply the same rules and report violations as [`SwizzleError`].

use crate::vector::{Float2, Float3, Float4, Vector};
use core::marker::PhantomData;
use core::ops::{self, Index, IndexMut};
use shadervec_types::{SwizzleError, SwizzlePattern};

shadervec_macros::swizzle!(Float2, 2, [f32, Float2, Float3, Float4]);
shadervec_macros::swizzle!(Float3, 3, [f32, Float2, Float3, Float4]);
shadervec_macros::swizzle!(Float4, 4, [f32, Float2, Float3, Float4]);

/// `K` disjoint mutable borrows into the fields of a vector, in swizzle order.
///
/// Returned by the `*_mut` swizzle accessors. Reading it yields a `V`, writing a `V` stores the
/// i-th component into the field named by the i-th letter:
///
/// ```
/// use shadervec::{Float2, Float3};
///
/// let mut v = Float3::new(1.0, 2.0, 3.0);
/// let mut zx = v.zx_mut();
/// assert_eq!(zx.get(), Float2::new(3.0, 1.0));
/// zx += Float2::new(10.0, 20.0);
/// zx[1] = 0.5;
/// assert_eq!(v, Float3::new(0.5, 2.0, 13.0));
/// ```
#[derive(Debug)]
pub struct SwizzleMut<'a, V, const K: usize> {
    components: [&'a mut f32; K],
    _vector: PhantomData<V>,
}

impl<'a, V, const K: usize> SwizzleMut<'a, V, K> {
    pub(crate) fn new(components: [&'a mut f32; K]) -> Self {
        Self {
            components,
            _vector: PhantomData,
        }
    }
}

impl<V: Vector<K>, const K: usize> SwizzleMut<'_, V, K> {
    /// Reads the selected components.
    #[inline]
    pub fn get(&self) -> V {
        V::from_array(core::array::from_fn(|i| *self.components[i]))
    }

    /// Writes `value` through the selection.
    #[inline]
    pub fn set(&mut self, value: V) {
        for (slot, component) in self.components.iter_mut().zip(value.to_array()) {
            **slot = component;
        }
    }

    /// Replaces the selected components with `f` applied to them.
    #[inline]
    pub fn update(&mut self, f: impl FnOnce(V) -> V) {
        let value = f(self.get());
        self.set(value);
    }
}

impl<V, const K: usize> Index<usize> for SwizzleMut<'_, V, K> {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &*self.components[index]
    }
}

impl<V, const K: usize> IndexMut<usize> for SwizzleMut<'_, V, K> {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut *self.components[index]
    }
}

macro_rules! impl_swizzle_assign {
    ($($assign:ident, $method:ident, $op:ident, $sym:tt;)+) => {
        $(
            impl<V: Vector<K> + ops::$op<Output = V>, const K: usize> ops::$assign<V>
                for SwizzleMut<'_, V, K>
            {
                #[inline]
                fn $method(&mut self, rhs: V) {
                    self.update(|v| v $sym rhs);
                }
            }

            impl<V, const K: usize> ops::$assign<f32> for SwizzleMut<'_, V, K> {
                #[inline]
                fn $method(&mut self, rhs: f32) {
                    for component in &mut self.components {
                        **component = **component $sym rhs;
                    }
                }
            }
        )+
    };
}

impl_swizzle_assign! {
    AddAssign, add_assign, Add, +;
    SubAssign, sub_assign, Sub, -;
    MulAssign, mul_assign, Mul, *;
    DivAssign, div_assign, Div, /;
}

/// The result of a swizzle resolved at runtime: a scalar or a 2 to 4 component vector.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Swizzled {
    Scalar(f32),
    Float2(Float2),
    Float3(Float3),
    Float4(Float4),
}

impl Swizzled {
    /// Wraps 1 to 4 components, `None` for any other count.
    pub fn from_slice(components: &[f32]) -> Option<Self> {
        Some(match *components {
            [x] => Self::Scalar(x),
            [x, y] => Self::Float2(Float2::new(x, y)),
            [x, y, z] => Self::Float3(Float3::new(x, y, z)),
            [x, y, z, w] => Self::Float4(Float4::new(x, y, z, w)),
            _ => return None,
        })
    }

    /// The components, in swizzle order.
    pub fn as_slice(&self) -> &[f32] {
        match self {
            Self::Scalar(x) => core::slice::from_ref(x),
            Self::Float2(v) => v.as_array(),
            Self::Float3(v) => v.as_array(),
            Self::Float4(v) => v.as_array(),
        }
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Always `false`.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl From<f32> for Swizzled {
    fn from(x: f32) -> Self {
        Self::Scalar(x)
    }
}

impl From<Float2> for Swizzled {
    fn from(v: Float2) -> Self {
        Self::Float2(v)
    }
}

impl From<Float3> for Swizzled {
    fn from(v: Float3) -> Self {
        Self::Float3(v)
    }
}

impl From<Float4> for Swizzled {
    fn from(v: Float4) -> Self {
        Self::Float4(v)
    }
}

macro_rules! impl_dynamic_swizzle {
    ($vec:ident, $dim:literal) => {
        impl $vec {
            /// Reads the components named by `name`, e.g. `"zyx"` or `"rg"`.
            pub fn swizzle(&self, name: &str) -> Result<Swizzled, SwizzleError> {
                let pattern = SwizzlePattern::parse(name, $dim)?;
                tracing::trace!(name, indices = ?pattern.indices(), "resolved swizzle");
                self.swizzle_pattern(&pattern)
            }

            /// Reads the components selected by `pattern`.
            pub fn swizzle_pattern(&self, pattern: &SwizzlePattern) -> Result<Swizzled, SwizzleError> {
                let components = self.as_array();
                let mut selected = [0.0; shadervec_types::MAX_COMPONENTS];
                for (slot, &index) in selected.iter_mut().zip(pattern.indices()) {
                    *slot = *components
                        .get(index)
                        .ok_or(SwizzleError::IndexOutOfRange { index, width: $dim })?;
                }
                Swizzled::from_slice(&selected[..pattern.len()]).ok_or(SwizzleError::Empty)
            }

            /// Writes `value` through the components named by `name`.
            ///
            /// `value` must have as many components as `name` selects, and `name` must not repeat
            /// a component. Nothing is written on error.
            pub fn set_swizzle(
                &mut self,
                name: &str,
                value: impl Into<Swizzled>,
            ) -> Result<(), SwizzleError> {
                let pattern = SwizzlePattern::parse(name, $dim)?;
                tracing::trace!(name, indices = ?pattern.indices(), "resolved swizzle for writing");
                self.write_pattern(&pattern, name, value.into())
            }

            /// Writes `value` through the components selected by `pattern`.
            pub fn set_swizzle_pattern(
                &mut self,
                pattern: &SwizzlePattern,
                value: impl Into<Swizzled>,
            ) -> Result<(), SwizzleError> {
                self.write_pattern(pattern, &pattern.to_string(), value.into())
            }

            fn write_pattern(
                &mut self,
                pattern: &SwizzlePattern,
                name: &str,
                value: Swizzled,
            ) -> Result<(), SwizzleError> {
                if !pattern.is_writable() {
                    tracing::debug!(name, "rejected write through a repeating swizzle");
                    return Err(SwizzleError::NotWritable {
                        name: name.to_owned(),
                    });
                }
                if value.len() != pattern.len() {
                    tracing::debug!(name, expected = pattern.len(), actual = value.len(), "rejected swizzle write");
                    return Err(SwizzleError::ArityMismatch {
                        name: name.to_owned(),
                        expected: pattern.len(),
                        actual: value.len(),
                    });
                }
                if let Some(&index) = pattern.indices().iter().find(|&&index| index >= $dim) {
                    return Err(SwizzleError::IndexOutOfRange { index, width: $dim });
                }

                let components = self.as_mut_array();
                for (&index, &component) in pattern.indices().iter().zip(value.as_slice()) {
                    components[index] = component;
                }
                Ok(())
            }
        }
    };
}

impl_dynamic_swizzle!(Float2, 2);
impl_dynamic_swizzle!(Float3, 3);
impl_dynamic_swizzle!(Float4, 4);
