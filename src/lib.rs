//! support-ticket - a flat-file support ticket tracker
//!
//! This crate provides a small helpdesk ticket system backed by a single
//! JSON document:
//! - Sequential `TKT-%03d` id allocation
//! - Status, assignment, and append-only comment threads per ticket
//! - Linear filtering and case-insensitive search
//! - Descriptive analytics (counts, per-day series, resolution times)
//! - CSV and JSON export of the whole collection
//!
//! The collection is loaded once per process and fully rewritten on every
//! mutation. There is no locking: single-writer access is a stated
//! assumption, not an oversight.
//!
//! # Example
//!
//! ```rust,ignore
//! use support_ticket::storage::{TicketRepository, TicketStore};
//! use support_ticket::core::TicketDraft;
//!
//! let store = TicketStore::new("tickets_data.json");
//! let mut repository = TicketRepository::open(store)?;
//!
//! let draft = TicketDraft { name: "Ana".into(), /* ... */ ..Default::default() };
//! let ticket = repository.create(draft)?;
//! println!("created {}", ticket.id);
//! ```

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod analytics;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod export;
pub mod query;
pub mod storage;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use error::{Result, SupportTicketError};
