//! `update-font` implementation

use crate::cli::UpdateFontArgs;
use crate::error::Result;
use crate::font::{FontLayout, FontUpdateRequest, update_font};
use crate::prompt::TerminalConfirmer;
use crate::ui::Reporter;

pub fn run(args: UpdateFontArgs, reporter: &dyn Reporter) -> Result<()> {
    let request = FontUpdateRequest::new(args.source, args.destination)?;
    let mut confirmer = TerminalConfirmer;

    let summary = update_font(&request, &FontLayout::default(), &mut confirmer, reporter)?;
    if !summary.declined.is_empty() {
        reporter.info(&format!(
            "Kept {} existing file(s) without overwriting",
            summary.declined.len()
        ));
    }
    Ok(())
}
