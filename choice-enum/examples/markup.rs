// Declares the formats a markup record can be stored in, then builds a second enumeration at
// runtime and prints what was derived for both.

use anyhow::Context;
use choice_enum::{make_group, ChoiceEnum, ChoiceOption};
use tracing::{error, info, metadata::LevelFilter};
use tracing_subscriber::{prelude::*, EnvFilter};

#[derive(Debug, ChoiceEnum)]
struct Format {
    #[choice(value = "text", display = "Plain Text")]
    text: ChoiceOption,
    #[choice(value = "basc", display = "Basic")]
    basic: ChoiceOption,
    #[choice(value = "mkdn", display = "Markdown", default)]
    markdown: ChoiceOption,
    #[choice(value = "rest", display = "reStructured")]
    rst: ChoiceOption,
    #[choice(value = "html", display = "HTML")]
    html: ChoiceOption,
}

/// What a database row would hold.
struct Markup {
    format: String,
    text: String,
}

fn fallible_main() -> anyhow::Result<()> {
    let formats = Format::declared();
    info!(all_options = ?formats.all_options());
    info!(choices = ?formats.choices());
    info!(default = ?formats.default());

    let markup = Markup {
        format: formats.markdown.to_value(),
        text: "Hello\n=====\n\nFoo!".into(),
    };
    let label = formats
        .set()
        .display_for(&markup.format)
        .context("stored format is not one of the declared choices")?;
    info!(
        format = %markup.format,
        display = label,
        text_len = markup.text.len(),
        is_markdown = formats.markdown == markup.format
    );
    info!(
        max_length = formats.set().max_value_len(),
        "format column width"
    );

    let severity = make_group!(
        "Severity",
        LOW = ChoiceOption::new("low", "Low", false),
        HIGH = ChoiceOption::new("high", "High", true),
    )?;
    info!(name = severity.name(), choices = ?severity.choices(), default = ?severity.default());

    let rejected = make_group!(
        "Broken",
        A = ChoiceOption::new("a", "A", true),
        B = ChoiceOption::new("b", "B", true),
    );
    if let Err(err) = rejected {
        info!("rejected as expected: {err}");
    }

    Ok(())
}

fn main() {
    let subscriber = tracing_subscriber::registry()
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::DEBUG.into())
                .from_env_lossy(),
        )
        .with(tracing_subscriber::fmt::layer().without_time());
    tracing::subscriber::set_global_default(subscriber)
        .expect("cannot set default tracing subscriber");

    info!("choice-enum version {}", env!("CARGO_PKG_VERSION"));

    match fallible_main() {
        Ok(_) => (),
        Err(err) => {
            error!("in fallible_main: {err:?}");
        }
    }
}
