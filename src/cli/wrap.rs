//! `topkarten wrap`: inspect line breaking when tuning templates.

use anyhow::Result;
use clap::Args;
use topkarten::{Hyphenator, Locale, wrap};

/// Args for `topkarten wrap`.
#[derive(Args, Debug)]
pub struct WrapArgs {
    /// Text to wrap.
    pub text: String,
    /// Printable width in characters.
    #[arg(long, default_value_t = 35)]
    pub width: usize,
    /// Maximum number of display lines.
    #[arg(long = "max-lines", default_value_t = 7)]
    pub max_lines: usize,
}

pub fn handle(args: WrapArgs) -> Result<()> {
    let hyphenator = Hyphenator::new(Locale::German)?;
    for line in wrap(&hyphenator, &args.text, args.width, args.max_lines) {
        println!("|{line}|");
    }
    Ok(())
}
