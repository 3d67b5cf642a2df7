//! Handler for the `export` command

use super::common::HandlerContext;
use crate::cli::output::OutputFormatter;
use crate::error::Result;
use crate::export::ExportFormat;
use std::fs;
use std::path::Path;

/// Handle the `export` command
///
/// Writes the rendered collection to `--output` when given, otherwise to
/// stdout.
pub fn handle_export_command(
    format: ExportFormat,
    destination: Option<&Path>,
    file: Option<&Path>,
    output: &OutputFormatter,
) -> Result<()> {
    let context = HandlerContext::open(file)?;
    let rendered = format.export(context.tickets())?;

    match destination {
        Some(path) => {
            fs::write(path, &rendered)?;
            if output.is_json() {
                output.print_json(&serde_json::json!({
                    "status": "success",
                    "format": format.extension(),
                    "path": path,
                    "tickets": context.tickets().len(),
                }))?;
            } else {
                output.success(&format!(
                    "Exported {} tickets to {}",
                    context.tickets().len(),
                    path.display()
                ));
            }
        },
        None => {
            // Raw document on stdout; shell redirection does the rest
            print!("{rendered}");
            if !rendered.ends_with('\n') {
                println!();
            }
        },
    }

    Ok(())
}
