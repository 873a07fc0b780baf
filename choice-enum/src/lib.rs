//! DRY, encapsulated choice options for single-select fields.
//!
//! A choice enumeration is a fixed set of [`ChoiceOption`]s, each a stored value with a
//! human-readable label. Declaring one derives, exactly once, four read-only collections:
//! the values in declaration order, the `(value, display)` pairs, a value to display mapping,
//! and the default value if one option is marked default.

pub mod declare;
pub mod error;
pub mod group;
pub mod option;
pub mod set;

pub use declare::{ChoiceEnum, Declared};
pub use error::Error;
pub use group::{make_group, ChoiceGroup, Member};
pub use option::ChoiceOption;
pub use set::{ChoiceSet, RESERVED_NAMES};

#[cfg(feature = "derive")]
pub use choice_enum_derive::*;

#[doc(hidden)]
pub extern crate once_cell;
