//! Handler for the `show` command

use super::common::{HandlerContext, ticket_json};
use crate::cli::output::OutputFormatter;
use crate::core::{TIMESTAMP_FORMAT, Ticket};
use crate::error::{Result, SupportTicketError};
use crate::query::find_by_id;
use std::path::Path;

/// Handle the `show` command
pub fn handle_show_command(
    id: &str,
    file: Option<&Path>,
    output: &OutputFormatter,
) -> Result<()> {
    let context = HandlerContext::open(file)?;
    let ticket = find_by_id(context.tickets(), id)
        .ok_or_else(|| SupportTicketError::TicketNotFound { id: id.to_string() })?;

    if output.is_json() {
        output.print_json(&ticket_json(ticket))?;
    } else {
        display_ticket(ticket, output);
    }

    Ok(())
}

fn display_ticket(ticket: &Ticket, output: &OutputFormatter) {
    output.info(&format!("{} - {}", ticket.id, ticket.subject));
    output.info("");
    output.info(&format!("  Name: {}", ticket.name));
    output.info(&format!("  Email: {}", ticket.email));
    if !ticket.phone.is_empty() {
        output.info(&format!("  Phone: {}", ticket.phone));
    }
    output.info(&format!("  Category: {}", ticket.category));
    output.info(&format!("  Priority: {}", ticket.priority));
    output.info(&format!("  Department: {}", ticket.department));
    output.info(&format!("  Status: {}", ticket.status));
    output.info(&format!(
        "  Assigned to: {}",
        ticket.assigned_to.as_deref().unwrap_or("-")
    ));
    output.info(&format!(
        "  Created: {}",
        ticket.created_at.format(TIMESTAMP_FORMAT)
    ));
    output.info(&format!(
        "  Updated: {}",
        ticket.updated_at.format(TIMESTAMP_FORMAT)
    ));
    output.info("");
    output.info("  Description:");
    for line in ticket.description.lines() {
        output.info(&format!("    {line}"));
    }

    if !ticket.comments.is_empty() {
        output.info("");
        output.info(&format!("  Comments ({}):", ticket.comments.len()));
        for comment in &ticket.comments {
            output.info(&format!(
                "    [{}] {}: {}",
                comment.timestamp.format(TIMESTAMP_FORMAT),
                comment.author,
                comment.text
            ));
        }
    }
}
