use std::{
    borrow::Borrow,
    cmp::Ordering,
    fmt::{self, Display},
    hash::{Hash, Hasher},
    ops::Deref,
    sync::atomic::{self, AtomicU64},
};

use tracing::trace;

/// A single enumerated choice: a stored value plus the label shown to humans.
///
/// Identity is the value alone. Two options with the same value compare equal and hash the same,
/// and an option compares equal to a plain string holding its value.
///
/// Options are not `Clone`. Copying one for storage goes through [`ChoiceOption::to_value`] (or
/// `String::from`), which yields the bare value; the display label, default flag and rank belong
/// to the declaration only.
#[derive(Debug)]
pub struct ChoiceOption {
    value: String,
    display: String,
    default: bool,
    rank: u64,
}

impl ChoiceOption {
    pub fn new(value: impl Into<String>, display: impl Into<String>, default: bool) -> Self {
        let option = Self {
            value: value.into(),
            display: display.into(),
            default,
            rank: next_rank(),
        };
        trace!(rank = option.rank, value = %option.value, "created choice option");
        option
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn is_default(&self) -> bool {
        self.default
    }

    /// Position of this option among all options created by the process so far.
    pub fn rank(&self) -> u64 {
        self.rank
    }

    pub fn to_value(&self) -> String {
        self.value.clone()
    }

    pub fn into_value(self) -> String {
        self.value
    }
}

fn next_rank() -> u64 {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    COUNTER.fetch_add(1, atomic::Ordering::Relaxed)
}

impl Display for ChoiceOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value, f)
    }
}

impl Deref for ChoiceOption {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl AsRef<str> for ChoiceOption {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl Borrow<str> for ChoiceOption {
    fn borrow(&self) -> &str {
        &self.value
    }
}

impl PartialEq for ChoiceOption {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for ChoiceOption {}

impl Hash for ChoiceOption {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state)
    }
}

impl PartialOrd for ChoiceOption {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ChoiceOption {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

macro_rules! eq_with_string_type {
    ($T:ty) => {
        impl PartialEq<$T> for ChoiceOption {
            fn eq(&self, other: &$T) -> bool {
                self.value.as_str() == AsRef::<str>::as_ref(other)
            }
        }

        impl PartialEq<ChoiceOption> for $T {
            fn eq(&self, other: &ChoiceOption) -> bool {
                AsRef::<str>::as_ref(self) == other.value.as_str()
            }
        }
    };
}

eq_with_string_type!(str);
eq_with_string_type!(&str);
eq_with_string_type!(String);

impl From<ChoiceOption> for String {
    fn from(option: ChoiceOption) -> Self {
        option.value
    }
}

impl From<&ChoiceOption> for String {
    fn from(option: &ChoiceOption) -> Self {
        option.to_value()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ChoiceOption {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::{HashMap, HashSet},
        thread,
    };

    use super::ChoiceOption;

    #[test]
    fn behaves_like_its_value() {
        let option = ChoiceOption::new("mkdn", "Markdown", true);

        assert_eq!(option, "mkdn");
        assert_eq!("mkdn", option);
        assert_eq!(option, String::from("mkdn"));
        assert_eq!(option.to_string(), "mkdn");
        assert_eq!(option.len(), 4);
        assert!(option.starts_with("mk"));
        assert_eq!(option.display(), "Markdown");
        assert!(option.is_default());
    }

    #[test]
    fn identity_ignores_metadata() {
        let a = ChoiceOption::new("foo", "Foo", false);
        let b = ChoiceOption::new("foo", "Something else entirely", true);
        assert_eq!(a, b);
        assert_ne!(a.rank(), b.rank());

        let mut labels = HashMap::new();
        labels.insert(a, "first");
        labels.insert(b, "second");
        assert_eq!(labels.len(), 1);
        assert_eq!(labels.get("foo"), Some(&"second"));
    }

    #[test]
    fn storage_copy_is_bare_value() {
        let option = ChoiceOption::new("text", "Plain Text", false);
        let copy: String = String::from(&option);
        assert_eq!(copy, "text");
        assert_eq!(option.to_value(), "text");
        assert_eq!(option.into_value(), "text");
    }

    #[test]
    fn empty_strings_are_accepted() {
        let option = ChoiceOption::new("", "", false);
        assert_eq!(option, "");
        assert_eq!(option.display(), "");
    }

    #[test]
    fn ranks_increase_in_creation_order() {
        let first = ChoiceOption::new("a", "A", false);
        let second = ChoiceOption::new("b", "B", false);
        let third = ChoiceOption::new("c", "C", false);
        assert!(first.rank() < second.rank());
        assert!(second.rank() < third.rank());
    }

    #[test]
    fn concurrent_creation_never_reuses_a_rank() {
        let handles: Vec<_> = (0..8)
            .map(|thread_index| {
                thread::spawn(move || {
                    (0..500)
                        .map(|i| {
                            ChoiceOption::new(format!("{thread_index}-{i}"), "label", false).rank()
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ranks = HashSet::new();
        for handle in handles {
            let thread_ranks = handle.join().expect("thread should not panic");
            assert!(thread_ranks.windows(2).all(|pair| pair[0] < pair[1]));
            ranks.extend(thread_ranks);
        }
        assert_eq!(ranks.len(), 8 * 500);
    }
}
