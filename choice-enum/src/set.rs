//! The collections derived from a group of declared options.

use indexmap::IndexMap;
use tracing::debug;

use crate::{error::Error, option::ChoiceOption};

/// Member names taken by the derived collections. A group may not declare members with these
/// names.
pub const RESERVED_NAMES: [&str; 4] = ["ALL_OPTIONS", "CHOICES", "CHOICES_DICT", "DEFAULT"];

/// The read-only views over a group's options, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceSet {
    all_options: Vec<String>,
    choices: Vec<(String, String)>,
    choices_dict: IndexMap<String, String>,
    default: Option<String>,
}

impl ChoiceSet {
    /// Derives the collections from a group's members.
    ///
    /// Members that are not options are given as `None`; they only take part in the reserved name
    /// check. Member order does not matter, options are ordered by their rank.
    pub fn derive<'a>(
        group: &str,
        members: impl IntoIterator<Item = (&'a str, Option<&'a ChoiceOption>)>,
    ) -> Result<Self, Error> {
        let members: Vec<_> = members.into_iter().collect();

        if let Some(&(name, _)) = members
            .iter()
            .find(|(name, _)| RESERVED_NAMES.contains(name))
        {
            return Err(Error::ReservedName {
                group: group.to_owned(),
                name: name.to_owned(),
            });
        }

        let mut options = vec![];
        let mut default: Option<&ChoiceOption> = None;
        for option in members.iter().filter_map(|&(_, option)| option) {
            if option.is_default() {
                if let Some(first) = default {
                    let (first, second) = if first.rank() < option.rank() {
                        (first, option)
                    } else {
                        (option, first)
                    };
                    return Err(Error::MultipleDefaults {
                        group: group.to_owned(),
                        first: first.to_value(),
                        second: second.to_value(),
                    });
                }
                default = Some(option);
            }
            options.push(option);
        }
        options.sort_by_key(|option| option.rank());

        let all_options: Vec<String> = options.iter().map(|option| option.to_value()).collect();
        let choices: Vec<(String, String)> = options
            .iter()
            .map(|option| (option.to_value(), option.display().to_owned()))
            .collect();
        let choices_dict = choices.iter().cloned().collect();
        let default = default.map(ChoiceOption::to_value);

        debug!(group, options = all_options.len(), ?default, "derived choice set");

        Ok(Self {
            all_options,
            choices,
            choices_dict,
            default,
        })
    }

    /// Option values, in declaration order.
    pub fn all_options(&self) -> &[String] {
        &self.all_options
    }

    /// `(value, display)` pairs, in declaration order.
    pub fn choices(&self) -> &[(String, String)] {
        &self.choices
    }

    /// Maps each value to its display label.
    pub fn choices_dict(&self) -> &IndexMap<String, String> {
        &self.choices_dict
    }

    /// The value of the option marked default, if any.
    pub fn default(&self) -> Option<&str> {
        self.default.as_deref()
    }

    pub fn display_for(&self, value: &str) -> Option<&str> {
        self.choices_dict.get(value).map(String::as_str)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.choices_dict.contains_key(value)
    }

    pub fn len(&self) -> usize {
        self.all_options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_options.is_empty()
    }

    /// Length in characters of the longest value, which is the smallest width a fixed-size
    /// character column storing these values can have.
    pub fn max_value_len(&self) -> usize {
        self.all_options
            .iter()
            .map(|value| value.chars().count())
            .max()
            .unwrap_or(0)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ChoiceSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        struct Dict<'a>(&'a IndexMap<String, String>);

        impl serde::Serialize for Dict<'_> {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.collect_map(self.0)
            }
        }

        let mut state = serializer.serialize_struct("ChoiceSet", 4)?;
        state.serialize_field("ALL_OPTIONS", &self.all_options)?;
        state.serialize_field("CHOICES", &self.choices)?;
        state.serialize_field("CHOICES_DICT", &Dict(&self.choices_dict))?;
        state.serialize_field("DEFAULT", &self.default)?;
        state.end()
    }
}
