//! Handler for the `comment` command

use super::common::{HandlerContext, ticket_json};
use crate::cli::output::OutputFormatter;
use crate::error::Result;
use std::path::Path;

/// Handle the `comment` command
///
/// The author comes from `--author`, falling back to the configured default
/// author; the repository rejects the comment when neither is present.
pub fn handle_comment_command(
    id: &str,
    author: Option<String>,
    message: &str,
    file: Option<&Path>,
    output: &OutputFormatter,
) -> Result<()> {
    let mut context = HandlerContext::open(file)?;
    let author = author
        .or_else(|| context.config.default_author.clone())
        .unwrap_or_default();
    let ticket = context.repository.add_comment(id, &author, message)?;

    if output.is_json() {
        output.print_json(&serde_json::json!({
            "status": "success",
            "ticket": ticket_json(ticket),
        }))?;
    } else {
        output.success(&format!(
            "Added comment to {} ({} total)",
            ticket.id,
            ticket.comments.len()
        ));
    }

    Ok(())
}
