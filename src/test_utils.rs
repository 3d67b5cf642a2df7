//! Test fixtures shared across unit tests

#![cfg(test)]

use crate::core::{Category, Department, Priority, Status, Ticket, TicketDraft, TicketId};
use crate::storage::{TicketRepository, TicketStore};
use tempfile::TempDir;

/// A temporary directory with a data file path for storage-backed tests
pub struct TestProject {
    pub temp_dir: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    pub fn store(&self) -> TicketStore {
        TicketStore::new(self.temp_dir.path().join("tickets_data.json"))
    }

    pub fn repository(&self) -> TicketRepository {
        TicketRepository::open(self.store()).expect("failed to open repository")
    }
}

/// A ticket with the given id suffix and plausible defaults
pub fn sample_ticket(suffix: u32) -> Ticket {
    let mut ticket = Ticket::new(
        TicketId::from_suffix(suffix),
        TicketDraft {
            name: format!("Requester {suffix}"),
            email: format!("requester{suffix}@example.com"),
            phone: String::new(),
            category: Category::Teknis,
            priority: Priority::Medium,
            department: Department::ItSupport,
            subject: format!("Issue number {suffix}"),
            description: "Something stopped working".to_string(),
        },
    );
    ticket.status = Status::Open;
    ticket
}
