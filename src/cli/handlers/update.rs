//! Handler for the `update` command

use super::common::{HandlerContext, ticket_json};
use crate::cli::output::OutputFormatter;
use crate::core::Status;
use crate::error::Result;
use std::path::Path;

/// Handle the `update` command
///
/// Sets the status, replaces the assignment when `--assign` is given (an
/// empty value clears it), and refreshes `updated_at`.
pub fn handle_update_command(
    id: &str,
    status: Status,
    assign: Option<String>,
    file: Option<&Path>,
    output: &OutputFormatter,
) -> Result<()> {
    let mut context = HandlerContext::open(file)?;
    // No --assign keeps the current assignee; --assign "" clears it
    let assign = match assign {
        Some(assignee) => Some(assignee),
        None => crate::query::find_by_id(context.tickets(), id)
            .and_then(|t| t.assigned_to.clone()),
    };
    let ticket = context.repository.update_status(id, status, assign)?;

    if output.is_json() {
        output.print_json(&serde_json::json!({
            "status": "success",
            "ticket": ticket_json(ticket),
        }))?;
    } else {
        output.success(&format!("Updated {}", ticket.id));
        output.info(&format!("  Status: {}", ticket.status));
        output.info(&format!(
            "  Assigned to: {}",
            ticket.assigned_to.as_deref().unwrap_or("-")
        ));
    }

    Ok(())
}
