//! `topkarten caption`: print the carousel caption for a notice.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use topkarten::NoticeRecord;

use crate::cli::utils::read_input_arg;

/// Args for `topkarten caption`.
#[derive(Args, Debug)]
pub struct CaptionArgs {
    /// Oracle JSON payload (`-` or omitted for stdin).
    pub notice: Option<PathBuf>,
}

pub fn handle(args: CaptionArgs) -> Result<()> {
    let raw = read_input_arg(args.notice)?;
    match NoticeRecord::from_json(&raw)? {
        Some(record) => println!("{}", record.meeting.caption()),
        None => println!("notice is not applicable; no caption"),
    }
    Ok(())
}
