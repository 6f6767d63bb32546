//! Swizzle patterns: ordered selections of component indices.

use crate::component::{MAX_COMPONENTS, NamingScheme};
use core::fmt;
use thiserror::Error;

/// An ordered selection of 1 to [`MAX_COMPONENTS`] component indices, repetition allowed.
///
/// The pattern of `zyx` on a 3-component vector is `[2, 1, 0]`, and that of `rrg` is `[0, 0, 1]`.
/// A pattern can be written through only if no index repeats, see [`Self::is_writable`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SwizzlePattern {
    indices: [usize; MAX_COMPONENTS],
    len: usize,
}

impl SwizzlePattern {
    /// Builds a pattern from raw indices, checking each against the vector `width`.
    pub fn new(indices: &[usize], width: usize) -> Result<Self, SwizzleError> {
        check_width(width)?;
        match indices.len() {
            0 => return Err(SwizzleError::Empty),
            len if len > MAX_COMPONENTS => {
                return Err(SwizzleError::TooLong {
                    name: format!("{indices:?}"),
                    len,
                });
            }
            _ => {}
        }

        let mut out = [0; MAX_COMPONENTS];
        for (slot, &index) in out.iter_mut().zip(indices) {
            if index >= width {
                return Err(SwizzleError::IndexOutOfRange { index, width });
            }
            *slot = index;
        }
        Ok(Self {
            indices: out,
            len: indices.len(),
        })
    }

    /// Parses a swizzle name such as `"zyx"` or `"rgba"` for a vector of `width` components.
    pub fn parse(name: &str, width: usize) -> Result<Self, SwizzleError> {
        Self::parse_with_scheme(name, width).map(|(_, pattern)| pattern)
    }

    /// Like [`Self::parse`], also returning the naming scheme the name is written in.
    pub fn parse_with_scheme(
        name: &str,
        width: usize,
    ) -> Result<(NamingScheme, Self), SwizzleError> {
        check_width(width)?;
        let len = name.chars().count();
        if len == 0 {
            return Err(SwizzleError::Empty);
        }
        if len > MAX_COMPONENTS {
            return Err(SwizzleError::TooLong {
                name: name.to_owned(),
                len,
            });
        }

        let mut scheme = None;
        let mut indices = [0; MAX_COMPONENTS];
        for (slot, letter) in indices.iter_mut().zip(name.chars()) {
            let Some((letter_scheme, index)) = NamingScheme::classify(letter) else {
                return Err(SwizzleError::UnknownComponent { letter });
            };
            match scheme {
                None => scheme = Some(letter_scheme),
                Some(first) if first != letter_scheme => {
                    return Err(SwizzleError::MixedSchemes {
                        name: name.to_owned(),
                        first,
                        second: letter_scheme,
                    });
                }
                Some(_) => {}
            }
            if index >= width {
                return Err(SwizzleError::OutOfRange { letter, width });
            }
            *slot = index;
        }

        let scheme = scheme.ok_or(SwizzleError::Empty)?;
        Ok((scheme, Self { indices, len }))
    }

    /// Number of selected components, the arity of the swizzle.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false` for a constructed pattern.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The selected component indices, in swizzle order.
    pub fn indices(&self) -> &[usize] {
        &self.indices[..self.len]
    }

    /// Whether the indices are pairwise distinct.
    ///
    /// Only such patterns may be assigned to: with a repeated index it would be ambiguous which of
    /// the written values ends up in the repeated component.
    pub fn is_writable(&self) -> bool {
        let indices = self.indices();
        indices
            .iter()
            .enumerate()
            .all(|(i, index)| !indices[..i].contains(index))
    }

    /// Spells the pattern in the given naming scheme.
    pub fn name(&self, scheme: NamingScheme) -> String {
        let letters = scheme.letters();
        self.indices().iter().map(|&index| letters[index]).collect()
    }

    /// Every pattern of `arity` components over a `width`-component vector, `width.pow(arity)`
    /// in total, in lexicographic order (`xx`, `xy`, `yx`, `yy` for width 2).
    ///
    /// Yields nothing if either argument is outside `1..=MAX_COMPONENTS`.
    pub fn enumerate(width: usize, arity: usize) -> impl Iterator<Item = Self> {
        let valid = (1..=MAX_COMPONENTS).contains(&width) && (1..=MAX_COMPONENTS).contains(&arity);
        let count = if valid { width.pow(arity as u32) } else { 0 };
        (0..count).map(move |n| {
            let mut indices = [0; MAX_COMPONENTS];
            let mut rest = n;
            for slot in indices[..arity].iter_mut().rev() {
                *slot = rest % width;
                rest /= width;
            }
            Self {
                indices,
                len: arity,
            }
        })
    }

    /// Every pattern of every arity over a `width`-component vector.
    pub fn all(width: usize) -> impl Iterator<Item = Self> {
        (1..=MAX_COMPONENTS).flat_map(move |arity| Self::enumerate(width, arity))
    }
}

impl fmt::Display for SwizzlePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name(NamingScheme::Positional))
    }
}

fn check_width(width: usize) -> Result<(), SwizzleError> {
    if (1..=MAX_COMPONENTS).contains(&width) {
        Ok(())
    } else {
        Err(SwizzleError::UnsupportedWidth { width })
    }
}

/// Reasons a swizzle cannot be resolved or written.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SwizzleError {
    #[error("a swizzle must select at least one component")]
    Empty,
    #[error("swizzle `{name}` selects {len} components, at most {MAX_COMPONENTS} are allowed")]
    TooLong { name: String, len: usize },
    #[error("`{letter}` does not name a vector component")]
    UnknownComponent { letter: char },
    #[error("swizzle `{name}` mixes the {first} and {second} naming schemes")]
    MixedSchemes {
        name: String,
        first: NamingScheme,
        second: NamingScheme,
    },
    #[error("component `{letter}` does not exist on a {width}-component vector")]
    OutOfRange { letter: char, width: usize },
    #[error("component index {index} does not exist on a {width}-component vector")]
    IndexOutOfRange { index: usize, width: usize },
    #[error("vectors have 1 to {MAX_COMPONENTS} components, not {width}")]
    UnsupportedWidth { width: usize },
    #[error("swizzle `{name}` repeats a component and cannot be assigned to")]
    NotWritable { name: String },
    #[error("swizzle `{name}` selects {expected} components but {actual} were given")]
    ArityMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },
}
