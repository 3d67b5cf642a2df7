//! Full-collection export
//!
//! CSV flattens the scalar ticket fields into one row per ticket (header row
//! first); the comment thread is carried as an inline JSON array in its own
//! column. JSON export is the identical pretty document used for
//! persistence.

use crate::core::{TIMESTAMP_FORMAT, Ticket};
use crate::error::{Result, SupportTicketError};
use std::str::FromStr;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// File extension for the format
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    /// Render the collection in this format
    pub fn export(self, tickets: &[Ticket]) -> Result<String> {
        match self {
            Self::Csv => export_csv(tickets),
            Self::Json => export_json(tickets),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = SupportTicketError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(SupportTicketError::InvalidExportFormat {
                value: s.to_string(),
            }),
        }
    }
}

/// Export as CSV with a header row
pub fn export_csv(tickets: &[Ticket]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);

    writer
        .write_record([
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
        ])
        .map_err(csv_error)?;

    for ticket in tickets {
        writer
            .write_record([
                ticket.id.to_string(),
                ticket.name.clone(),
                ticket.email.clone(),
                ticket.phone.clone(),
                ticket.category.to_string(),
                ticket.priority.to_string(),
                ticket.department.to_string(),
                ticket.subject.clone(),
                ticket.description.clone(),
                ticket.status.to_string(),
                ticket.created_at.format(TIMESTAMP_FORMAT).to_string(),
                ticket.updated_at.format(TIMESTAMP_FORMAT).to_string(),
                serde_json::to_string(&ticket.comments)?,
                ticket.assigned_to.clone().unwrap_or_default(),
            ])
            .map_err(csv_error)?;
    }

    writer.flush().map_err(SupportTicketError::Io)?;
    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))
        .map_err(SupportTicketError::Io)?;
    String::from_utf8(bytes)
        .map_err(|e| SupportTicketError::Io(std::io::Error::other(e.to_string())))
}

/// Export as the persisted JSON document
pub fn export_json(tickets: &[Ticket]) -> Result<String> {
    Ok(serde_json::to_string_pretty(tickets)?)
}

fn csv_error(e: csv::Error) -> SupportTicketError {
    SupportTicketError::Io(std::io::Error::other(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Status;
    use crate::test_utils::sample_ticket;

    #[test]
    fn test_format_parse() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert!("xlsx".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_csv_has_header_and_one_row_per_ticket() {
        let tickets = vec![sample_ticket(1), sample_ticket(2)];
        let csv = export_csv(&tickets).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("id,name,email,phone,category"));
        assert!(lines[1].starts_with("TKT-001,"));
        assert!(lines[2].starts_with("TKT-002,"));
    }

    #[test]
    fn test_csv_flattens_enums_to_display_names() {
        let mut ticket = sample_ticket(1);
        ticket.status = Status::InProgress;
        ticket.assigned_to = Some("agent.siti".to_string());

        let csv = export_csv(&[ticket]).unwrap();
        assert!(csv.contains("In Progress"));
        assert!(csv.contains("agent.siti"));
    }

    #[test]
    fn test_json_export_matches_persisted_document() {
        let tickets = vec![sample_ticket(1)];
        let exported = export_json(&tickets).unwrap();
        let reparsed: Vec<Ticket> = serde_json::from_str(&exported).unwrap();
        assert_eq!(reparsed, tickets);
        assert_eq!(exported, serde_json::to_string_pretty(&tickets).unwrap());
    }

    #[test]
    fn test_empty_collection_exports() {
        assert_eq!(export_json(&[]).unwrap(), "[]");
        let csv = export_csv(&[]).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }
}
