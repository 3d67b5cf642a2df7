//! The ticket entity and its comment thread
//!
//! Field names and order match the persisted JSON document. Timestamps are
//! local wall-clock values at second precision, stored as
//! `"%Y-%m-%d %H:%M:%S"` strings.

use super::{Category, Department, Priority, Status, TicketId};
use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Persisted timestamp format
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time, truncated to whole seconds
#[must_use]
pub fn now() -> NaiveDateTime {
    let dt = Local::now().naive_local();
    dt.with_nanosecond(0).unwrap_or(dt)
}

/// Serde adapter for the second-precision timestamp strings
pub mod timestamp {
    use super::{NaiveDateTime, TIMESTAMP_FORMAT};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(dt: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&dt.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDateTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}

/// A single entry in a ticket's append-only comment thread
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub author: String,
    pub text: String,
    #[serde(with = "timestamp")]
    pub timestamp: NaiveDateTime,
}

impl Comment {
    /// Create a comment stamped with the current time
    #[must_use]
    pub fn new(author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
            timestamp: now(),
        }
    }
}

/// A support ticket
///
/// Created only through [`crate::storage::TicketRepository::create`]; the
/// public fields exist for the read-only query, analytics, and export layers
/// and for test construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub category: Category,
    pub priority: Priority,
    pub department: Department,
    pub subject: String,
    pub description: String,
    pub status: Status,
    #[serde(with = "timestamp")]
    pub created_at: NaiveDateTime,
    #[serde(with = "timestamp")]
    pub updated_at: NaiveDateTime,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub assigned_to: Option<String>,
}

impl Ticket {
    /// Materialize a draft into a fresh ticket
    ///
    /// Status starts at Open, both timestamps are set from one clock read,
    /// the comment thread is empty, and nobody is assigned.
    #[must_use]
    pub fn new(id: TicketId, draft: TicketDraft) -> Self {
        let created_at = now();
        Self {
            id,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            category: draft.category,
            priority: draft.priority,
            department: draft.department,
            subject: draft.subject,
            description: draft.description,
            status: Status::Open,
            created_at,
            updated_at: created_at,
            comments: Vec::new(),
            assigned_to: None,
        }
    }

    /// Refresh `updated_at` after a mutation
    pub fn touch(&mut self) {
        self.updated_at = now();
    }
}

/// Validated field values crossing the presentation boundary into `create`
#[derive(Debug, Clone, Default)]
pub struct TicketDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub category: Category,
    pub priority: Priority,
    pub department: Department,
    pub subject: String,
    pub description: String,
}

impl TicketDraft {
    /// Names of required fields that are empty after trimming
    #[must_use]
    pub fn missing_fields(&self) -> Vec<String> {
        let required = [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("description", &self.description),
        ];
        required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| (*field).to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn draft() -> TicketDraft {
        TicketDraft {
            name: "Budi Santoso".to_string(),
            email: "budi@example.com".to_string(),
            phone: String::new(),
            category: Category::Teknis,
            priority: Priority::High,
            department: Department::ItSupport,
            subject: "Cannot log in".to_string(),
            description: "Login fails with a timeout".to_string(),
        }
    }

    #[test]
    fn test_new_ticket_initial_state() {
        let ticket = Ticket::new(TicketId::from_suffix(1), draft());
        assert_eq!(ticket.status, Status::Open);
        assert!(ticket.comments.is_empty());
        assert!(ticket.assigned_to.is_none());
        assert_eq!(ticket.created_at, ticket.updated_at);
    }

    #[test]
    fn test_missing_fields_lists_every_empty_required_field() {
        let mut d = draft();
        d.name = "   ".to_string();
        d.description = String::new();
        assert_eq!(d.missing_fields(), vec!["name", "description"]);
        assert!(draft().missing_fields().is_empty());
    }

    #[test]
    fn test_phone_is_not_required() {
        let mut d = draft();
        d.phone = String::new();
        assert!(d.missing_fields().is_empty());
    }

    #[test]
    fn test_timestamp_round_trip_at_second_precision() {
        let dt = NaiveDate::from_ymd_opt(2026, 3, 14)
            .unwrap()
            .and_hms_opt(9, 26, 53)
            .unwrap();
        let mut ticket = Ticket::new(TicketId::from_suffix(1), draft());
        ticket.created_at = dt;
        ticket.updated_at = dt;

        let json = serde_json::to_string(&ticket).unwrap();
        assert!(json.contains("\"created_at\":\"2026-03-14 09:26:53\""));
        let back: Ticket = serde_json::from_str(&json).unwrap();
        assert_eq!(back.created_at, dt);
    }

    #[test]
    fn test_ticket_json_field_names_are_stable() {
        let ticket = Ticket::new(TicketId::from_suffix(7), draft());
        let value = serde_json::to_value(&ticket).unwrap();
        for key in [
            "id",
            "name",
            "email",
            "phone",
            "category",
            "priority",
            "department",
            "subject",
            "description",
            "status",
            "created_at",
            "updated_at",
            "comments",
            "assigned_to",
        ] {
            assert!(value.get(key).is_some(), "missing field {key}");
        }
        assert_eq!(value["id"], "TKT-007");
        assert_eq!(value["assigned_to"], serde_json::Value::Null);
    }

    #[test]
    fn test_comment_carries_timestamp() {
        let comment = Comment::new("agent", "looking into it");
        assert_eq!(comment.timestamp.and_utc().timestamp_subsec_nanos(), 0);
    }
}
