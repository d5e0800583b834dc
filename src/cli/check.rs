//! `topkarten check`: eager validation of the template assets.

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Args;
use topkarten::required_templates;

/// Args for `topkarten check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Directory holding the background templates.
    #[arg(long, default_value = "res/templates")]
    pub templates: PathBuf,
}

pub fn handle(args: CheckArgs) -> Result<()> {
    let mut missing = 0usize;
    for path in required_templates(&args.templates) {
        match image::open(&path) {
            Ok(img) => {
                let rgba = img.to_rgba8();
                println!(
                    "ok      {} ({}x{})",
                    path.display(),
                    rgba.width(),
                    rgba.height()
                );
            }
            Err(err) => {
                println!("missing {} ({err})", path.display());
                missing += 1;
            }
        }
    }
    if missing > 0 {
        return Err(anyhow!("{missing} template asset(s) missing or unreadable"));
    }
    Ok(())
}
