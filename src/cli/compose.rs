//! `topkarten compose`: oracle JSON in, card images out.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use topkarten::{Composer, NoticeRecord, RenderConfig};

use crate::cli::utils::read_input_arg;

/// Args for `topkarten compose`.
#[derive(Args, Debug)]
pub struct ComposeArgs {
    /// Source link of the notice PDF; keys the run's output directory.
    #[arg(long)]
    pub link: String,
    /// Oracle JSON payload (`-` or omitted for stdin).
    pub notice: Option<PathBuf>,
    /// Directory holding the background templates.
    #[arg(long, default_value = "res/templates")]
    pub templates: PathBuf,
    /// Root directory for rendered runs.
    #[arg(short = 'o', long = "output", default_value = ".temp")]
    pub output: PathBuf,
}

pub fn handle(args: ComposeArgs) -> Result<()> {
    let raw = read_input_arg(args.notice)?;
    let Some(record) = NoticeRecord::from_json(&raw)? else {
        println!("notice is not applicable; nothing to render");
        return Ok(());
    };

    let config = RenderConfig {
        template_dir: args.templates,
        output_root: args.output,
        ..RenderConfig::default()
    };
    let composer = Composer::new(config)?;
    let files = composer.compose(&args.link, &record.meeting, &record.items)?;

    if files.is_empty() {
        println!("no cards rendered (stale meeting or empty agenda)");
        return Ok(());
    }
    for file in &files {
        println!("{}", file.display());
    }
    Ok(())
}
