//! Shared handler context
//!
//! Resolves configuration and the data-file path, then opens the repository
//! that every handler operates on.

use crate::config::Config;
use crate::core::Ticket;
use crate::error::Result;
use crate::storage::{TicketRepository, TicketStore};
use std::path::Path;

/// Common context for all handler operations
pub struct HandlerContext {
    pub config: Config,
    pub repository: TicketRepository,
}

impl HandlerContext {
    /// Load configuration and open the repository
    ///
    /// A `--file` override wins over the configured data-file path.
    pub fn open(file_override: Option<&Path>) -> Result<Self> {
        let config = Config::load_or_default()?;
        let path = file_override.map_or_else(|| config.tickets_file.clone(), Path::to_path_buf);
        let repository = TicketRepository::open(TicketStore::new(path))?;
        Ok(Self { config, repository })
    }

    /// Read view of the collection
    #[must_use]
    pub fn tickets(&self) -> &[Ticket] {
        self.repository.tickets()
    }
}

/// One-line summary used by list and search output
#[must_use]
pub fn ticket_line(ticket: &Ticket) -> String {
    let assignee = ticket
        .assigned_to
        .as_deref()
        .map_or_else(String::new, |a| format!(" → {a}"));
    format!(
        "{} [{}] {} - {} ({}){}",
        ticket.id, ticket.status, ticket.subject, ticket.name, ticket.priority, assignee
    )
}

/// JSON value for a single ticket, as emitted by `--json` outputs
pub fn ticket_json(ticket: &Ticket) -> serde_json::Value {
    serde_json::json!({
        "id": ticket.id.to_string(),
        "name": ticket.name,
        "email": ticket.email,
        "phone": ticket.phone,
        "category": ticket.category.to_string(),
        "priority": ticket.priority.to_string(),
        "department": ticket.department.to_string(),
        "subject": ticket.subject,
        "description": ticket.description,
        "status": ticket.status.to_string(),
        "created_at": ticket.created_at.format(crate::core::TIMESTAMP_FORMAT).to_string(),
        "updated_at": ticket.updated_at.format(crate::core::TIMESTAMP_FORMAT).to_string(),
        "comments": ticket.comments,
        "assigned_to": ticket.assigned_to,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Status;
    use crate::test_utils::sample_ticket;

    #[test]
    fn test_ticket_line_includes_assignee_when_set() {
        let mut ticket = sample_ticket(1);
        assert!(!ticket_line(&ticket).contains('→'));

        ticket.status = Status::InProgress;
        ticket.assigned_to = Some("agent.siti".to_string());
        let line = ticket_line(&ticket);
        assert!(line.contains("TKT-001"));
        assert!(line.contains("In Progress"));
        assert!(line.contains("→ agent.siti"));
    }

    #[test]
    fn test_ticket_json_shape() {
        let value = ticket_json(&sample_ticket(3));
        assert_eq!(value["id"], "TKT-003");
        assert_eq!(value["status"], "Open");
        assert!(value["assigned_to"].is_null());
    }
}
