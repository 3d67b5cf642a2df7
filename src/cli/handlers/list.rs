//! Handler for the `list` command

use super::common::{HandlerContext, ticket_json, ticket_line};
use crate::cli::output::OutputFormatter;
use crate::core::{Category, Priority, Status};
use crate::error::Result;
use crate::query::{TicketFilter, recent_first};
use std::path::Path;

/// Handle the `list` command
///
/// An absent filter flag means "all values" for that dimension; the engine
/// itself still treats an explicitly empty set as matching nothing.
pub fn handle_list_command(
    statuses: Vec<Status>,
    priorities: Vec<Priority>,
    categories: Vec<Category>,
    limit: Option<usize>,
    file: Option<&Path>,
    output: &OutputFormatter,
) -> Result<()> {
    let context = HandlerContext::open(file)?;
    let filter = TicketFilter {
        statuses: if statuses.is_empty() {
            Status::ALL.to_vec()
        } else {
            statuses
        },
        priorities: if priorities.is_empty() {
            Priority::ALL.to_vec()
        } else {
            priorities
        },
        categories: if categories.is_empty() {
            Category::ALL.to_vec()
        } else {
            categories
        },
    };

    let total = context.tickets().len();
    let matched = filter.apply(context.tickets());
    let mut listed = recent_first(&matched);
    if let Some(limit) = limit {
        listed.truncate(limit);
    }

    if output.is_json() {
        output.print_json(&serde_json::json!({
            "tickets": listed.iter().map(|t| ticket_json(t)).collect::<Vec<_>>(),
            "shown": listed.len(),
            "matched": matched.len(),
            "total": total,
        }))?;
        return Ok(());
    }

    if total == 0 {
        output.info("No tickets yet. Create one with 'support-ticket new'.");
        return Ok(());
    }

    output.info(&format!("Showing {} of {} tickets", listed.len(), total));
    output.info("");
    for ticket in listed {
        output.info(&ticket_line(ticket));
    }

    Ok(())
}
