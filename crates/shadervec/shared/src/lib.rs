#![doc = include_str!("../README.md")]

pub mod component;
pub mod pattern;

pub use component::{MAX_COMPONENTS, NamingScheme};
pub use pattern::{SwizzleError, SwizzlePattern};
