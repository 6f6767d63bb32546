//! Component naming schemes.
//!
//! Every vector component has exactly one storage field, but shader code may
//! refer to it with one of three alphabets. These tables are the single source
//! of truth for which letter means which index.

use core::fmt;

/// The maximum number of components of a vector, and the maximum arity of a swizzle.
pub const MAX_COMPONENTS: usize = 4;

/// Names of the storage fields, indexed by component.
pub const FIELD_NAMES: [&str; MAX_COMPONENTS] = ["x", "y", "z", "w"];

/// One of the three alphabets that can be used to name vector components.
///
/// Swizzles may not mix alphabets: `xyz` and `rgb` are valid, `xgb` is not.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NamingScheme {
    /// `x`, `y`, `z`, `w`
    Positional,
    /// `r`, `g`, `b`, `a`
    Color,
    /// `X`, `Y`, `Z`, `W`
    Matrix,
}

impl NamingScheme {
    /// All schemes, in the order the swizzle generator emits them.
    pub const ALL: [Self; 3] = [Self::Positional, Self::Color, Self::Matrix];

    /// The letters of this scheme, indexed by component.
    pub const fn letters(self) -> [char; MAX_COMPONENTS] {
        match self {
            Self::Positional => ['x', 'y', 'z', 'w'],
            Self::Color => ['r', 'g', 'b', 'a'],
            Self::Matrix => ['X', 'Y', 'Z', 'W'],
        }
    }

    /// The letter naming component `index`, if `index < MAX_COMPONENTS`.
    pub fn letter(self, index: usize) -> Option<char> {
        self.letters().get(index).copied()
    }

    /// The component index named by `letter` in this scheme.
    pub fn index_of(self, letter: char) -> Option<usize> {
        self.letters().iter().position(|&c| c == letter)
    }

    /// Finds the scheme `letter` belongs to, and the component it names.
    pub fn classify(letter: char) -> Option<(Self, usize)> {
        Self::ALL
            .into_iter()
            .find_map(|scheme| scheme.index_of(letter).map(|index| (scheme, index)))
    }

    /// Whether generated method names for this scheme need `non_snake_case`.
    pub const fn is_uppercase(self) -> bool {
        matches!(self, Self::Matrix)
    }
}

impl fmt::Display for NamingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Positional => "positional (xyzw)",
            Self::Color => "color (rgba)",
            Self::Matrix => "matrix (XYZW)",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_letter_classifies_to_its_own_index() {
        for scheme in NamingScheme::ALL {
            for (index, letter) in scheme.letters().into_iter().enumerate() {
                assert_eq!(NamingScheme::classify(letter), Some((scheme, index)));
                assert_eq!(scheme.letter(index), Some(letter));
            }
        }
    }

    #[test]
    fn schemes_do_not_share_letters() {
        for a in NamingScheme::ALL {
            for b in NamingScheme::ALL.into_iter().filter(|&b| b != a) {
                for letter in a.letters() {
                    assert_eq!(b.index_of(letter), None, "{letter} is in both {a} and {b}");
                }
            }
        }
    }

    #[test]
    fn unknown_letters_are_rejected() {
        assert_eq!(NamingScheme::classify('q'), None);
        assert_eq!(NamingScheme::classify('R'), None);
        assert_eq!(NamingScheme::Color.letter(4), None);
    }
}
