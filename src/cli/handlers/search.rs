//! Handler for the `search` command
//!
//! Exactly one probe per invocation: exact id, email substring, or keyword
//! substring over subject and description. All matches are
//! case-insensitive. No result is reported, not an error; the caller asked
//! a question and got an answer.

use super::common::{HandlerContext, ticket_json, ticket_line};
use crate::cli::output::OutputFormatter;
use crate::core::Ticket;
use crate::error::Result;
use crate::query::{find_by_email, find_by_id, find_by_keyword};
use std::path::Path;

/// Which field the search probes
#[derive(Debug)]
pub enum SearchQuery {
    Id(String),
    Email(String),
    Keyword(String),
}

/// Handle the `search` command
pub fn handle_search_command(
    query: SearchQuery,
    file: Option<&Path>,
    output: &OutputFormatter,
) -> Result<()> {
    let context = HandlerContext::open(file)?;
    let tickets = context.tickets();

    let results: Vec<&Ticket> = match &query {
        SearchQuery::Id(id) => find_by_id(tickets, id).into_iter().collect(),
        SearchQuery::Email(email) => find_by_email(tickets, email),
        SearchQuery::Keyword(keyword) => find_by_keyword(tickets, keyword),
    };

    if output.is_json() {
        output.print_json(&serde_json::json!({
            "results": results.iter().map(|t| ticket_json(t)).collect::<Vec<_>>(),
            "count": results.len(),
        }))?;
        return Ok(());
    }

    if results.is_empty() {
        output.info("No matching tickets");
        return Ok(());
    }

    output.info(&format!(
        "Found {} ticket{}",
        results.len(),
        if results.len() == 1 { "" } else { "s" }
    ));
    output.info("");
    for ticket in results {
        output.info(&ticket_line(ticket));
    }

    Ok(())
}
