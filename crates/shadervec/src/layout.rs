//! Memory layout guarantees and `u32` word-buffer encoding.
//!
//! `FloatN` occupies exactly `4 * N` bytes: `N` packed `f32`s with 4-byte alignment, matching a
//! shading language's `floatN`. Matrices are `R * C` packed `f32`s, row by row. These sizes are
//! checked at compile time below.

use crate::matrix::{
    Float2x2, Float2x3, Float2x4, Float3x2, Float3x3, Float3x4, Float4x2, Float4x3, Float4x4,
};
use crate::vector::{Float2, Float3, Float4};
use core::mem::{align_of, offset_of, size_of};
use thiserror::Error;

const _: () = {
    assert!(size_of::<Float2>() == 8);
    assert!(size_of::<Float3>() == 12);
    assert!(size_of::<Float4>() == 16);

    assert!(align_of::<Float2>() == 4);
    assert!(align_of::<Float3>() == 4);
    assert!(align_of::<Float4>() == 4);

    assert!(offset_of!(Float2, y) == 4);
    assert!(offset_of!(Float3, z) == 8);
    assert!(offset_of!(Float4, x) == 0);
    assert!(offset_of!(Float4, y) == 4);
    assert!(offset_of!(Float4, z) == 8);
    assert!(offset_of!(Float4, w) == 12);

    assert!(size_of::<Float2x3>() == 4 * 2 * 3);
    assert!(size_of::<Float3x3>() == 4 * 3 * 3);
    assert!(size_of::<Float4x2>() == 4 * 4 * 2);
    assert!(size_of::<Float4x4>() == 4 * 4 * 4);
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LayoutError {
    #[error("{words} words at offset {offset} do not fit in a buffer of {len} words")]
    OutOfBounds {
        offset: usize,
        words: usize,
        len: usize,
    },
}

/// A type with a fixed layout of whole 32-bit words, which may be written to or read from a
/// `u32` buffer such as a storage buffer or push constants.
///
/// All `f32` vector and matrix types implement it. Their words are the `f32` bit patterns in
/// index order, rows first for matrices.
///
/// ```
/// use shadervec::{BufferLayout, Float2, Float3};
///
/// let mut buffer = [0u32; 5];
/// Float3::new(1.0, 2.0, 3.0).write(&mut buffer, 0).unwrap();
/// Float2::new(4.0, 5.0).write(&mut buffer, Float3::WORDS).unwrap();
/// assert_eq!(buffer[4], 5.0f32.to_bits());
/// assert_eq!(Float2::read(&buffer, 2), Ok(Float2::new(3.0, 4.0)));
/// ```
pub trait BufferLayout: bytemuck::Pod {
    /// Size in 32-bit words.
    const WORDS: usize = size_of::<Self>() / 4;

    /// Encodes `self` into `slice[offset..offset + WORDS]`.
    fn write(self, slice: &mut [u32], offset: usize) -> Result<(), LayoutError> {
        let words = words_range(slice.len(), offset, Self::WORDS)?;
        let bytes = bytemuck::cast_slice_mut::<u32, u8>(&mut slice[words]);
        bytes.copy_from_slice(bytemuck::bytes_of(&self));
        Ok(())
    }

    /// Decodes a value from `slice[offset..offset + WORDS]`.
    fn read(slice: &[u32], offset: usize) -> Result<Self, LayoutError> {
        let words = words_range(slice.len(), offset, Self::WORDS)?;
        let bytes = bytemuck::cast_slice(&slice[words]);
        Ok(bytemuck::pod_read_unaligned(bytes))
    }
}

fn words_range(
    len: usize,
    offset: usize,
    words: usize,
) -> Result<core::ops::Range<usize>, LayoutError> {
    match offset.checked_add(words) {
        Some(end) if end <= len => Ok(offset..end),
        _ => {
            tracing::debug!(offset, words, len, "buffer access out of bounds");
            Err(LayoutError::OutOfBounds { offset, words, len })
        }
    }
}

macro_rules! impl_buffer_layout {
    ($($ty:ty),+ $(,)?) => {
        $(impl BufferLayout for $ty {})+
    };
}

impl_buffer_layout!(f32, u32, Float2, Float3, Float4);
impl_buffer_layout!(
    Float2x2, Float2x3, Float2x4, Float3x2, Float3x3, Float3x4, Float4x2, Float4x3, Float4x4,
);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn word_counts() {
        assert_eq!(f32::WORDS, 1);
        assert_eq!(Float2::WORDS, 2);
        assert_eq!(Float3::WORDS, 3);
        assert_eq!(Float4::WORDS, 4);
        assert_eq!(Float3x4::WORDS, 12);
        assert_eq!(Float4x4::WORDS, 16);
    }

    #[test]
    fn vectors_encode_components_in_order() {
        let mut buffer = [0u32; 6];
        let v = Float4::new(1.0, -2.0, 0.5, 8.0);
        v.write(&mut buffer, 1).unwrap();
        assert_eq!(
            buffer,
            [
                0,
                1.0f32.to_bits(),
                (-2.0f32).to_bits(),
                0.5f32.to_bits(),
                8.0f32.to_bits(),
                0,
            ]
        );
        assert_eq!(Float4::read(&buffer, 1), Ok(v));
        assert_eq!(f32::read(&buffer, 2), Ok(-2.0));
    }

    #[test]
    fn matrices_encode_rows_first() {
        let m = Float2x3::from_rows([Float3::new(1.0, 2.0, 3.0), Float3::new(4.0, 5.0, 6.0)]);
        let mut buffer = [0u32; 6];
        m.write(&mut buffer, 0).unwrap();
        assert_eq!(Float3::read(&buffer, 3), Ok(Float3::new(4.0, 5.0, 6.0)));
        assert_eq!(Float2x3::read(&buffer, 0), Ok(m));
    }

    #[test]
    fn out_of_bounds_is_an_error() {
        let mut buffer = [7u32; 3];
        assert_eq!(
            Float4::ONE.write(&mut buffer, 0),
            Err(LayoutError::OutOfBounds {
                offset: 0,
                words: 4,
                len: 3
            })
        );
        assert_eq!(buffer, [7; 3]);
        assert_eq!(
            Float2::read(&buffer, 2),
            Err(LayoutError::OutOfBounds {
                offset: 2,
                words: 2,
                len: 3
            })
        );
        assert!(Float2::read(&buffer, usize::MAX).is_err());
    }
}
