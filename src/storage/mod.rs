//! Persistence: the flat-file store and the in-memory repository over it

mod file;
mod repository;

pub use file::{DEFAULT_TICKETS_FILE, TicketStore};
pub use repository::TicketRepository;
