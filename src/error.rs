//! Error types for the support-ticket crate
//!
//! All fallible operations return [`Result`]. The variants mirror the four
//! failure classes of the system: storage (corrupt or unreadable data file),
//! validation (missing or empty required input), lookup (unknown ticket id),
//! and id-format (a persisted id that does not match the `TKT-<digits>`
//! shape).

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, SupportTicketError>;

/// Primary error type for all support-ticket operations
#[derive(Error, Debug)]
pub enum SupportTicketError {
    /// The data file exists but could not be parsed as a ticket collection
    #[error("Ticket data file is corrupt: {}", path.display())]
    CorruptData {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A required field was missing or empty
    #[error("Missing required fields: {}", fields.join(", "))]
    MissingFields { fields: Vec<String> },

    /// No ticket with the given id exists in the collection
    #[error("Ticket not found: {id}")]
    TicketNotFound { id: String },

    /// A persisted id does not match the `TKT-<digits>` shape
    #[error("Malformed ticket id: {id}")]
    InvalidIdFormat { id: String },

    /// An unrecognized status value was supplied
    #[error("Invalid status: {value}. Must be one of: open, in-progress, resolved, closed")]
    InvalidStatus { value: String },

    /// An unrecognized priority value was supplied
    #[error("Invalid priority: {value}. Must be one of: low, medium, high")]
    InvalidPriority { value: String },

    /// An unrecognized category value was supplied
    #[error("Invalid category: {value}. Must be one of: teknis, billing, produk, akun, lainnya")]
    InvalidCategory { value: String },

    /// An unrecognized department value was supplied
    #[error(
        "Invalid department: {value}. Must be one of: it-support, customer-service, billing, technical, sales"
    )]
    InvalidDepartment { value: String },

    /// An unrecognized export format was supplied
    #[error("Invalid export format: {value}. Must be one of: csv, json")]
    InvalidExportFormat { value: String },

    /// The configuration file exists but could not be parsed
    #[error("Failed to load configuration: {reason}")]
    Config { reason: String },

    /// File system I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error while writing the collection
    #[error("Failed to serialize tickets: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Interactive prompt error
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl SupportTicketError {
    /// User-facing message without the internal error chain
    #[must_use]
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// Suggestions shown under the error message
    #[must_use]
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::CorruptData { path, .. } => vec![
                format!("Inspect {} for manual edits", path.display()),
                "Restore the file from a backup or start over with an empty collection"
                    .to_string(),
            ],
            Self::MissingFields { .. } => {
                vec!["Provide every required field and try again".to_string()]
            },
            Self::TicketNotFound { .. } => vec![
                "Run 'support-ticket list' to see existing tickets".to_string(),
            ],
            Self::InvalidIdFormat { id } => vec![format!(
                "Fix the id '{id}' in the data file; ids must look like TKT-001"
            )],
            Self::Config { .. } => {
                vec!["Check support-ticket.yaml for syntax errors".to_string()]
            },
            _ => vec![],
        }
    }

    /// Whether the caller can recover by correcting its input
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::MissingFields { .. }
                | Self::TicketNotFound { .. }
                | Self::InvalidStatus { .. }
                | Self::InvalidPriority { .. }
                | Self::InvalidCategory { .. }
                | Self::InvalidDepartment { .. }
                | Self::InvalidExportFormat { .. }
        )
    }
}
