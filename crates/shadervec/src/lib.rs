#![doc = include_str!("../README.md")]
#![warn(
    clippy::all,
    clippy::checked_conversions,
    clippy::explicit_into_iter_loop,
    clippy::map_unwrap_or,
    clippy::match_same_arms,
    clippy::needless_borrow,
    clippy::unnested_or_patterns
)]

pub mod boolean;
pub mod format;
pub mod layout;
pub mod locale;
pub mod matrix;
mod ops;
mod sealed;
pub mod swizzle;
pub mod vector;

#[cfg(test)]
mod tests;

pub use boolean::{Bool2, Bool3, Bool4};
pub use format::{FormatError, Formatted, NumberFormat, VectorFormat};
pub use layout::{BufferLayout, LayoutError};
pub use locale::Locale;
pub use matrix::{
    Float2x2, Float2x3, Float2x4, Float3x2, Float3x3, Float3x4, Float4x2, Float4x3, Float4x4,
};
pub use shadervec_types::{NamingScheme, SwizzleError, SwizzlePattern};
pub use swizzle::{SwizzleMut, Swizzled};
pub use vector::{Float2, Float3, Float4, Vector, VectorTruncateInto};

pub use glam;
