#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![warn(
    clippy::all,
    clippy::doc_markdown,
    clippy::explicit_into_iter_loop,
    clippy::implicit_clone,
    clippy::map_unwrap_or,
    clippy::match_same_arms,
    clippy::needless_borrow,
    clippy::semicolon_if_nothing_returned,
    clippy::unnested_or_patterns,
    future_incompatible,
    nonstandard_style,
    rust_2018_idioms
)]

mod swizzle;

use proc_macro::TokenStream;

/// Generates the component and swizzle accessors of a fixed-width `f32` vector.
///
/// ```rust,ignore
/// swizzle!(Float3, 3, [f32, Float2, Float3, Float4]);
/// ```
///
/// The first argument is the vector type, the second its width, and the list names the result
/// type of a 1-, 2-, 3- and 4-component selection. For every selection `abc` in each naming
/// scheme, an `impl` block on the vector gains:
///
/// - `fn abc(self) -> Out`, for every selection;
/// - `fn set_abc(&mut self, value: Out)` and `fn abc_mut(&mut self)`, only when no component
///   repeats. The latter returns `&mut f32` for a single component, otherwise a
///   `crate::SwizzleMut` over the selected fields.
///
/// The vector type must have public `x`, `y`, ... fields and an associated `new` constructor per
/// result type, and the invoking crate must export `SwizzleMut` at its root.
#[proc_macro]
pub fn swizzle(input: TokenStream) -> TokenStream {
    swizzle::swizzle(input)
}
