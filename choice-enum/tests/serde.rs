use choice_enum::{make_group, ChoiceOption};
use indoc::indoc;

#[test]
fn option_serializes_as_its_value() {
    let option = ChoiceOption::new("mkdn", "Markdown", true);
    assert_eq!(
        serde_json::to_string(&option).expect("option should serialize"),
        r#""mkdn""#
    );
}

#[test]
fn set_serializes_derived_collections() {
    let group = make_group!(
        "Example",
        FOO = ChoiceOption::new("foo", "Foo Choice", true),
        BAR = ChoiceOption::new("bar", "Bar Option", false),
    )
    .expect("group should derive");

    let json = serde_json::to_string_pretty(group.set()).expect("set should serialize");
    assert_eq!(
        json,
        indoc! {r#"
            {
              "ALL_OPTIONS": [
                "foo",
                "bar"
              ],
              "CHOICES": [
                [
                  "foo",
                  "Foo Choice"
                ],
                [
                  "bar",
                  "Bar Option"
                ]
              ],
              "CHOICES_DICT": {
                "foo": "Foo Choice",
                "bar": "Bar Option"
              },
              "DEFAULT": "foo"
            }"#}
    );
}

#[test]
fn missing_default_serializes_as_null() {
    let group = make_group!("Severity", LOW = ChoiceOption::new("low", "Low", false))
        .expect("group should derive");
    let value = serde_json::to_value(group.set()).expect("set should serialize");
    assert!(value["DEFAULT"].is_null());
    assert_eq!(value["CHOICES_DICT"]["low"], "Low");
}
