//! In-memory ticket repository
//!
//! Owns the collection for the lifetime of the process: constructed from the
//! store at startup, it applies create/update/comment operations in memory
//! and re-persists the whole collection after every mutation. All writes are
//! whole-collection read-modify-write; O(n) per write is acceptable at this
//! system's scale.

use super::TicketStore;
use crate::core::{Comment, Status, Ticket, TicketDraft, next_id};
use crate::error::{Result, SupportTicketError};
use tracing::debug;

/// The ticket collection plus its backing store
pub struct TicketRepository {
    store: TicketStore,
    tickets: Vec<Ticket>,
}

impl TicketRepository {
    /// Load the collection from the store
    pub fn open(store: TicketStore) -> Result<Self> {
        let tickets = store.load_all()?;
        Ok(Self { store, tickets })
    }

    /// Read view of the collection, in insertion order
    #[must_use]
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    /// Validate a draft, allocate the next id, append, and persist
    ///
    /// Fails with `MissingFields` before anything is mutated, so a rejected
    /// draft leaves both the collection and the data file untouched.
    pub fn create(&mut self, draft: TicketDraft) -> Result<&Ticket> {
        let missing = draft.missing_fields();
        if !missing.is_empty() {
            return Err(SupportTicketError::MissingFields { fields: missing });
        }

        let id = next_id(&self.tickets)?;
        debug!(id = %id, "creating ticket");
        let ticket = Ticket::new(id, draft);
        self.tickets.push(ticket);
        self.persist()?;
        let index = self.tickets.len() - 1;
        Ok(&self.tickets[index])
    }

    /// Set a ticket's status and assignment, refresh `updated_at`, persist
    ///
    /// An empty assignee string is normalized to unassigned.
    pub fn update_status(
        &mut self,
        id: &str,
        status: Status,
        assigned_to: Option<String>,
    ) -> Result<&Ticket> {
        let index = self.find_index(id)?;
        let ticket = &mut self.tickets[index];
        ticket.status = status;
        ticket.assigned_to = assigned_to.filter(|a| !a.trim().is_empty());
        ticket.touch();
        debug!(id = %ticket.id, status = %ticket.status, "updated ticket");
        self.persist()?;
        Ok(&self.tickets[index])
    }

    /// Append a comment, refresh `updated_at`, persist
    ///
    /// Both author and text are required; the thread is append-only.
    pub fn add_comment(&mut self, id: &str, author: &str, text: &str) -> Result<&Ticket> {
        let mut missing = Vec::new();
        if author.trim().is_empty() {
            missing.push("author".to_string());
        }
        if text.trim().is_empty() {
            missing.push("text".to_string());
        }
        if !missing.is_empty() {
            return Err(SupportTicketError::MissingFields { fields: missing });
        }

        let index = self.find_index(id)?;
        let ticket = &mut self.tickets[index];
        ticket.comments.push(Comment::new(author, text));
        ticket.touch();
        debug!(id = %ticket.id, comments = ticket.comments.len(), "comment added");
        self.persist()?;
        Ok(&self.tickets[index])
    }

    fn find_index(&self, id: &str) -> Result<usize> {
        self.tickets
            .iter()
            .position(|t| t.id.matches(id))
            .ok_or_else(|| SupportTicketError::TicketNotFound { id: id.to_string() })
    }

    fn persist(&self) -> Result<()> {
        self.store.save_all(&self.tickets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Category, Department, Priority};
    use crate::test_utils::TestProject;

    fn draft(name: &str) -> TicketDraft {
        TicketDraft {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: "+62 812-0000".to_string(),
            category: Category::Teknis,
            priority: Priority::Medium,
            department: Department::ItSupport,
            subject: "Printer jammed".to_string(),
            description: "Paper stuck in tray 2".to_string(),
        }
    }

    #[test]
    fn test_create_allocates_sequential_ids() {
        let project = TestProject::new();
        let mut repo = project.repository();

        let first = repo.create(draft("Ana")).unwrap().id.clone();
        let second = repo.create(draft("Ben")).unwrap().id.clone();
        assert_eq!(first.as_str(), "TKT-001");
        assert_eq!(second.as_str(), "TKT-002");
    }

    #[test]
    fn test_create_persists_to_store() {
        let project = TestProject::new();
        let mut repo = project.repository();
        repo.create(draft("Ana")).unwrap();

        let reloaded = project.store().load_all().unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded[0].name, "Ana");
    }

    #[test]
    fn test_create_with_missing_fields_changes_nothing() {
        let project = TestProject::new();
        let mut repo = project.repository();

        let mut bad = draft("Ana");
        bad.email = String::new();
        bad.subject = "  ".to_string();

        let err = repo.create(bad).unwrap_err();
        match err {
            SupportTicketError::MissingFields { fields } => {
                assert_eq!(fields, vec!["email", "subject"]);
            },
            other => panic!("unexpected error: {other}"),
        }
        assert!(repo.tickets().is_empty());
        assert!(project.store().load_all().unwrap().is_empty());
    }

    #[test]
    fn test_update_status_and_assignment() {
        let project = TestProject::new();
        let mut repo = project.repository();
        repo.create(draft("Ana")).unwrap();

        let ticket = repo
            .update_status("TKT-001", Status::InProgress, Some("agent.siti".to_string()))
            .unwrap();
        assert_eq!(ticket.status, Status::InProgress);
        assert_eq!(ticket.assigned_to.as_deref(), Some("agent.siti"));
        assert!(ticket.updated_at >= ticket.created_at);
    }

    #[test]
    fn test_empty_assignee_normalizes_to_none() {
        let project = TestProject::new();
        let mut repo = project.repository();
        repo.create(draft("Ana")).unwrap();
        repo.update_status("TKT-001", Status::InProgress, Some("agent".to_string()))
            .unwrap();

        let ticket = repo
            .update_status("TKT-001", Status::Open, Some(String::new()))
            .unwrap();
        assert!(ticket.assigned_to.is_none());
    }

    #[test]
    fn test_update_unknown_id_leaves_collection_unchanged() {
        let project = TestProject::new();
        let mut repo = project.repository();
        repo.create(draft("Ana")).unwrap();
        let before = repo.tickets().to_vec();

        let err = repo
            .update_status("TKT-042", Status::Closed, None)
            .unwrap_err();
        assert!(matches!(err, SupportTicketError::TicketNotFound { .. }));
        assert_eq!(repo.tickets(), &before[..]);
    }

    #[test]
    fn test_add_comment_appends_in_order() {
        let project = TestProject::new();
        let mut repo = project.repository();
        repo.create(draft("Ana")).unwrap();

        repo.add_comment("TKT-001", "agent", "first look").unwrap();
        let previous_updated = repo.tickets()[0].updated_at;
        let ticket = repo.add_comment("tkt-001", "Ana", "any news?").unwrap();

        assert_eq!(ticket.comments.len(), 2);
        assert_eq!(ticket.comments[0].text, "first look");
        assert_eq!(ticket.comments[1].author, "Ana");
        assert!(ticket.updated_at >= previous_updated);
    }

    #[test]
    fn test_add_comment_requires_author_and_text() {
        let project = TestProject::new();
        let mut repo = project.repository();
        repo.create(draft("Ana")).unwrap();

        let err = repo.add_comment("TKT-001", "", "").unwrap_err();
        match err {
            SupportTicketError::MissingFields { fields } => {
                assert_eq!(fields, vec!["author", "text"]);
            },
            other => panic!("unexpected error: {other}"),
        }
        assert!(repo.tickets()[0].comments.is_empty());
    }

    #[test]
    fn test_add_comment_unknown_id() {
        let project = TestProject::new();
        let mut repo = project.repository();
        let err = repo.add_comment("TKT-001", "agent", "hello").unwrap_err();
        assert!(matches!(err, SupportTicketError::TicketNotFound { .. }));
    }

    #[test]
    fn test_collection_survives_reopen() {
        let project = TestProject::new();
        {
            let mut repo = project.repository();
            repo.create(draft("Ana")).unwrap();
            repo.update_status("TKT-001", Status::Resolved, None).unwrap();
        }

        let repo = project.repository();
        assert_eq!(repo.tickets().len(), 1);
        assert_eq!(repo.tickets()[0].status, Status::Resolved);
    }
}
