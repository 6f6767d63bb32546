//! Row-major `f32` matrices, the operands that change a vector's width.
//!
//! `FloatRxC` has `R` rows of `FloatC`. Multiplying by a column vector, `M * v`, contracts a
//! `FloatC` into a `FloatR`. Multiplying a row vector, `v * M`, contracts a `FloatR` into a
//! `FloatC`.

use crate::vector::{Float2, Float3, Float4, Vector};
use core::ops::{Index, IndexMut, Mul};

/// `rows · v`, one dot product per row.
fn contract_rows<V: Vector<C>, const C: usize, const R: usize>(rows: &[V; R], v: V) -> [f32; R] {
    core::array::from_fn(|i| rows[i].dot(v))
}

/// `weights · rows`, the sum of each row scaled by its weight.
fn combine_rows<V: Vector<C>, const C: usize, const R: usize>(
    rows: &[V; R],
    weights: [f32; R],
) -> [f32; C] {
    let mut out = [0.0; C];
    for (row, weight) in rows.iter().zip(weights) {
        for (acc, component) in out.iter_mut().zip(row.to_array()) {
            *acc += component * weight;
        }
    }
    out
}

macro_rules! impl_matrix {
    ($($mat:ident: $r:literal x $c:literal, rows $row:ident, cols $col:ident, transpose $transposed:ident;)+) => {
        $(
            #[doc = concat!("A ", $r, "×", $c, " matrix, stored as ", $r, " rows of [`", stringify!($row), "`].")]
            #[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
            #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
            #[repr(C)]
            pub struct $mat {
                pub rows: [$row; $r],
            }

            impl $mat {
                /// All elements `0.0`.
                pub const ZERO: Self = Self { rows: [$row::ZERO; $r] };

                #[inline]
                pub const fn from_rows(rows: [$row; $r]) -> Self {
                    Self { rows }
                }

                #[inline]
                pub fn from_cols(cols: [$col; $c]) -> Self {
                    Self {
                        rows: core::array::from_fn(|i| {
                            $row::from_array(core::array::from_fn(|j| cols[j][i]))
                        }),
                    }
                }

                /// Row `index`.
                ///
                /// # Panics
                ///
                #[doc = concat!("If `index >= ", $r, "`.")]
                #[inline]
                pub fn row(&self, index: usize) -> $row {
                    self.rows[index]
                }

                /// Column `index`.
                ///
                /// # Panics
                ///
                #[doc = concat!("If `index >= ", $c, "`.")]
                #[inline]
                pub fn col(&self, index: usize) -> $col {
                    $col::from_array(core::array::from_fn(|i| self.rows[i][index]))
                }

                #[inline]
                pub fn transpose(&self) -> $transposed {
                    $transposed::from_cols(self.rows)
                }
            }

            impl Index<usize> for $mat {
                type Output = $row;

                fn index(&self, index: usize) -> &$row {
                    &self.rows[index]
                }
            }

            impl IndexMut<usize> for $mat {
                fn index_mut(&mut self, index: usize) -> &mut $row {
                    &mut self.rows[index]
                }
            }

            /// The matrix applied to a column vector.
            impl Mul<$row> for $mat {
                type Output = $col;

                #[inline]
                fn mul(self, rhs: $row) -> $col {
                    $col::from_array(contract_rows::<$row, $c, $r>(&self.rows, rhs))
                }
            }

            /// A row vector applied to the matrix.
            impl Mul<$mat> for $col {
                type Output = $row;

                #[inline]
                fn mul(self, rhs: $mat) -> $row {
                    $row::from_array(combine_rows::<$row, $c, $r>(&rhs.rows, self.to_array()))
                }
            }
        )+
    };
}

impl_matrix! {
    Float2x2: 2 x 2, rows Float2, cols Float2, transpose Float2x2;
    Float2x3: 2 x 3, rows Float3, cols Float2, transpose Float3x2;
    Float2x4: 2 x 4, rows Float4, cols Float2, transpose Float4x2;
    Float3x2: 3 x 2, rows Float2, cols Float3, transpose Float2x3;
    Float3x3: 3 x 3, rows Float3, cols Float3, transpose Float3x3;
    Float3x4: 3 x 4, rows Float4, cols Float3, transpose Float4x3;
    Float4x2: 4 x 2, rows Float2, cols Float4, transpose Float2x4;
    Float4x3: 4 x 3, rows Float3, cols Float4, transpose Float3x4;
    Float4x4: 4 x 4, rows Float4, cols Float4, transpose Float4x4;
}

macro_rules! impl_square {
    ($mat:ident, $vec:ident, $glam:ty, [$($unit:ident),+]) => {
        impl $mat {
            /// Ones on the diagonal.
            pub const IDENTITY: Self = Self { rows: [$($vec::$unit),+] };
        }

        /// glam matrices are column-major.
        impl From<$glam> for $mat {
            fn from(m: $glam) -> Self {
                Self::from_cols(m.to_cols_array_2d().map($vec::from_array))
            }
        }

        impl From<$mat> for $glam {
            fn from(m: $mat) -> Self {
                <$glam>::from_cols_array_2d(&m.transpose().rows.map($vec::to_array))
            }
        }
    };
}

impl_square!(Float2x2, Float2, glam::Mat2, [UNIT_X, UNIT_Y]);
impl_square!(Float3x3, Float3, glam::Mat3, [UNIT_X, UNIT_Y, UNIT_Z]);
impl_square!(
    Float4x4,
    Float4,
    glam::Mat4,
    [UNIT_X, UNIT_Y, UNIT_Z, UNIT_W]
);
