//! Choice enumerations assembled at runtime from named members.

use std::ops::Deref;

use indexmap::IndexMap;

use crate::{error::Error, option::ChoiceOption, set::ChoiceSet};

/// A named member of a [`ChoiceGroup`].
#[derive(Debug)]
pub enum Member {
    Choice(ChoiceOption),
    /// Any other attribute of the group. Passed through untouched.
    Value(String),
}

impl Member {
    pub fn as_choice(&self) -> Option<&ChoiceOption> {
        match self {
            Member::Choice(option) => Some(option),
            Member::Value(_) => None,
        }
    }
}

impl From<ChoiceOption> for Member {
    fn from(option: ChoiceOption) -> Self {
        Self::Choice(option)
    }
}

impl From<String> for Member {
    fn from(value: String) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for Member {
    fn from(value: &str) -> Self {
        Self::Value(value.to_owned())
    }
}

/// A finished choice enumeration: its members plus the collections derived from them.
///
/// Dereferences to the derived [`ChoiceSet`].
#[derive(Debug)]
pub struct ChoiceGroup {
    name: String,
    members: IndexMap<String, Member>,
    set: ChoiceSet,
}

impl ChoiceGroup {
    /// Builds a group from its members. A member whose name was already given replaces the
    /// earlier one.
    pub fn derive<N, K, I>(name: N, members: I) -> Result<Self, Error>
    where
        N: Into<String>,
        K: Into<String>,
        I: IntoIterator<Item = (K, Member)>,
    {
        let name = name.into();
        let members: IndexMap<String, Member> = members
            .into_iter()
            .map(|(key, member)| (key.into(), member))
            .collect();
        let set = ChoiceSet::derive(
            &name,
            members
                .iter()
                .map(|(key, member)| (key.as_str(), member.as_choice())),
        )?;
        Ok(Self { name, members, set })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn member(&self, name: &str) -> Option<&Member> {
        self.members.get(name)
    }

    /// Looks up an option by its member name.
    pub fn option(&self, name: &str) -> Option<&ChoiceOption> {
        self.member(name).and_then(Member::as_choice)
    }

    pub fn members(&self) -> impl Iterator<Item = (&str, &Member)> {
        self.members.iter().map(|(key, member)| (key.as_str(), member))
    }

    pub fn set(&self) -> &ChoiceSet {
        &self.set
    }
}

impl Deref for ChoiceGroup {
    type Target = ChoiceSet;

    fn deref(&self) -> &Self::Target {
        &self.set
    }
}

/// Builds a group whose only members are the given options.
pub fn make_group<N, K, I>(name: N, options: I) -> Result<ChoiceGroup, Error>
where
    N: Into<String>,
    K: Into<String>,
    I: IntoIterator<Item = (K, ChoiceOption)>,
{
    ChoiceGroup::derive(
        name,
        options
            .into_iter()
            .map(|(key, option)| (key, Member::Choice(option))),
    )
}

/// Builds a group from `NAME = option` pairs, returning `Result<ChoiceGroup, Error>`.
///
/// ```
/// use choice_enum::{make_group, ChoiceOption};
///
/// let severity = make_group!(
///     "Severity",
///     LOW = ChoiceOption::new("low", "Low", false),
///     HIGH = ChoiceOption::new("high", "High", true),
/// )
/// .unwrap();
/// assert_eq!(severity.default(), Some("high"));
/// ```
#[macro_export]
macro_rules! make_group {
    ($name:expr $(, $member:ident = $option:expr)* $(,)?) => {{
        let options: ::std::vec::Vec<(&'static str, $crate::ChoiceOption)> =
            ::std::vec![$((::std::stringify!($member), $option)),*];
        $crate::make_group($name, options)
    }};
}

#[cfg(test)]
mod tests {
    use crate::{error::Error, option::ChoiceOption};

    use super::{make_group, ChoiceGroup, Member};

    #[test]
    fn order_follows_option_creation_not_arguments() {
        let low = ChoiceOption::new("low", "Low", false);
        let high = ChoiceOption::new("high", "High", true);

        let severity =
            make_group("Severity", [("HIGH", high), ("LOW", low)]).expect("group should derive");

        assert_eq!(severity.name(), "Severity");
        assert_eq!(severity.default(), Some("high"));
        assert_eq!(severity.all_options(), ["low", "high"]);
        assert_eq!(severity.option("LOW").map(ChoiceOption::display), Some("Low"));
    }

    #[test]
    fn keeps_non_option_members() {
        let format = ChoiceGroup::derive(
            "Format",
            [
                ("TEXT", Member::from(ChoiceOption::new("text", "Plain Text", false))),
                ("DESCRIPTION", Member::from("Markup formats")),
                ("MARKDOWN", ChoiceOption::new("mkdn", "Markdown", true).into()),
            ],
        )
        .expect("group should derive");

        assert_eq!(format.all_options(), ["text", "mkdn"]);
        assert!(matches!(
            format.member("DESCRIPTION"),
            Some(Member::Value(description)) if description == "Markup formats"
        ));
        assert!(format.option("DESCRIPTION").is_none());
        assert_eq!(format.option("MARKDOWN").map(|option| option.as_str()), Some("mkdn"));
        assert_eq!(format.members().count(), 3);
        assert_eq!(format.set().default(), Some("mkdn"));
    }

    #[test]
    fn reserved_member_names_fail() {
        let error = ChoiceGroup::derive(
            "Format",
            [
                ("TEXT", Member::from(ChoiceOption::new("text", "Plain Text", false))),
                ("DEFAULT", Member::from("text")),
            ],
        )
        .expect_err("DEFAULT is reserved");
        assert_eq!(
            error,
            Error::ReservedName {
                group: "Format".into(),
                name: "DEFAULT".into(),
            }
        );
    }

    #[test]
    fn two_defaults_fail() {
        let error = make_group(
            "Severity",
            [
                ("LOW", ChoiceOption::new("low", "Low", true)),
                ("HIGH", ChoiceOption::new("high", "High", true)),
            ],
        )
        .expect_err("only one default is allowed");
        assert!(matches!(error, Error::MultipleDefaults { .. }));
    }

    #[test]
    fn later_member_with_same_name_replaces_earlier() {
        let group = make_group(
            "Replaced",
            [
                ("A", ChoiceOption::new("first", "First", false)),
                ("A", ChoiceOption::new("second", "Second", false)),
            ],
        )
        .expect("group should derive");
        assert_eq!(group.all_options(), ["second"]);
    }

    #[test]
    fn macro_takes_named_options() {
        let severity = make_group!(
            "Severity",
            LOW = ChoiceOption::new("low", "Low", false),
            HIGH = ChoiceOption::new("high", "High", true),
        )
        .expect("group should derive");
        assert_eq!(severity.all_options(), ["low", "high"]);
        assert_eq!(severity.option("HIGH").map(ChoiceOption::is_default), Some(true));

        let empty = make_group!("Empty").expect("group should derive");
        assert!(empty.is_empty());
    }
}
