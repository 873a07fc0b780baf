//! Choice enumerations declared as Rust types.

use std::ops::Deref;

use indexmap::IndexMap;

use crate::{error::Error, option::ChoiceOption, set::ChoiceSet};

/// Implemented by types whose fields declare a choice enumeration.
///
/// Usually derived:
/// ```
/// use choice_enum::{ChoiceEnum, ChoiceOption};
///
/// #[derive(ChoiceEnum)]
/// struct Format {
///     #[choice(value = "text", display = "Plain Text")]
///     text: ChoiceOption,
///     #[choice(value = "mkdn", display = "Markdown", default)]
///     markdown: ChoiceOption,
/// }
///
/// let format = Format::declared();
/// assert_eq!(format.all_options(), ["text", "mkdn"]);
/// assert_eq!(format.markdown, "mkdn");
/// assert_eq!(format.default(), Some("mkdn"));
/// ```
///
/// Member names are the field names in SCREAMING_SNAKE_CASE. The derive rejects declarations
/// that could never be derived.
///
/// A member named after a derived collection:
/// ```compile_fail
/// use choice_enum::{ChoiceEnum, ChoiceOption};
///
/// #[derive(ChoiceEnum)]
/// struct Format {
///     #[choice(value = "text", display = "Plain Text")]
///     text: ChoiceOption,
///     choices: ChoiceOption,
/// }
/// ```
///
/// ```compile_fail
/// use choice_enum::{ChoiceEnum, ChoiceOption};
///
/// #[derive(ChoiceEnum)]
/// struct Format {
///     #[choice(value = "text", display = "Plain Text")]
///     default: ChoiceOption,
/// }
/// ```
///
/// More than one default option:
/// ```compile_fail
/// use choice_enum::{ChoiceEnum, ChoiceOption};
///
/// #[derive(ChoiceEnum)]
/// struct Format {
///     #[choice(value = "text", display = "Plain Text", default)]
///     text: ChoiceOption,
///     #[choice(value = "mkdn", display = "Markdown", default)]
///     markdown: ChoiceOption,
/// }
/// ```
///
/// Two fields with the same member name:
/// ```compile_fail
/// use choice_enum::{ChoiceEnum, ChoiceOption};
///
/// #[allow(non_snake_case)]
/// #[derive(ChoiceEnum)]
/// struct Collide {
///     #[choice(value = "a", display = "A")]
///     foo_bar: ChoiceOption,
///     #[choice(value = "b", display = "B")]
///     fooBar: ChoiceOption,
/// }
/// ```
///
/// Targets other than non-generic structs with named fields:
/// ```compile_fail
/// use choice_enum::{ChoiceEnum, ChoiceOption};
///
/// #[derive(ChoiceEnum)]
/// struct Format(ChoiceOption);
/// ```
///
/// ```compile_fail
/// use choice_enum::ChoiceEnum;
///
/// #[derive(ChoiceEnum)]
/// enum Format {
///     Text,
/// }
/// ```
///
/// ```compile_fail
/// use choice_enum::{ChoiceEnum, ChoiceOption};
///
/// #[derive(ChoiceEnum)]
/// struct Format<T> {
///     #[choice(value = "text", display = "Plain Text")]
///     text: ChoiceOption,
///     extra: T,
/// }
/// ```
pub trait ChoiceEnum: Sized {
    /// Name of the enumeration, used in errors.
    const NAME: &'static str;

    /// Creates the declaration's options, in declaration order.
    fn declare() -> Self;

    /// Every member of the declaration by name; `None` for members that are not options.
    fn members(&self) -> Vec<(&'static str, Option<&ChoiceOption>)>;
}

/// A declaration together with the collections derived from it.
///
/// Dereferences to the declaration, so options are reachable as fields.
#[derive(Debug)]
pub struct Declared<T> {
    declaration: T,
    set: ChoiceSet,
}

impl<T> Declared<T>
where
    T: ChoiceEnum,
{
    pub fn new() -> Result<Self, Error> {
        let declaration = T::declare();
        let set = ChoiceSet::derive(T::NAME, declaration.members())?;
        Ok(Self { declaration, set })
    }

    /// Like [`Declared::new`], but a declaration that cannot be derived is a fatal error.
    ///
    /// Used by `#[derive(ChoiceEnum)]`, which rejects invalid declarations at compile time.
    #[doc(hidden)]
    pub fn load() -> Self {
        match Self::new() {
            Ok(declared) => declared,
            Err(error) => panic!("cannot declare choice enumeration: {error}"),
        }
    }

    /// Looks up an option by its member name.
    pub fn option(&self, name: &str) -> Option<&ChoiceOption> {
        self.declaration
            .members()
            .into_iter()
            .find(|&(member, _)| member == name)
            .and_then(|(_, option)| option)
    }

    /// Options keyed by member name, in declaration order.
    pub fn options(&self) -> IndexMap<&'static str, &ChoiceOption> {
        let mut options: Vec<_> = self
            .declaration
            .members()
            .into_iter()
            .filter_map(|(name, option)| option.map(|option| (name, option)))
            .collect();
        options.sort_by_key(|(_, option)| option.rank());
        options.into_iter().collect()
    }
}

impl<T> Declared<T> {
    pub fn declaration(&self) -> &T {
        &self.declaration
    }

    pub fn set(&self) -> &ChoiceSet {
        &self.set
    }

    pub fn all_options(&self) -> &[String] {
        self.set.all_options()
    }

    pub fn choices(&self) -> &[(String, String)] {
        self.set.choices()
    }

    pub fn choices_dict(&self) -> &IndexMap<String, String> {
        self.set.choices_dict()
    }

    pub fn default(&self) -> Option<&str> {
        self.set.default()
    }
}

impl<T> Deref for Declared<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.declaration
    }
}
