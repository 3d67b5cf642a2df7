//! Handler for the `new` command
//!
//! Everything can come in as flags; whatever required field is missing is
//! gathered through guided prompts. JSON mode never prompts and validates
//! what was given instead.

use super::common::{HandlerContext, ticket_json};
use crate::cli::output::OutputFormatter;
use crate::core::{Category, Department, Priority, TicketDraft};
use crate::error::Result;
use dialoguer::{Input, Select, theme::ColorfulTheme};
use std::path::Path;

/// Field values collected from command-line flags
#[derive(Debug, Default)]
pub struct NewTicketArgs {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub category: Option<Category>,
    pub priority: Option<Priority>,
    pub department: Option<Department>,
    pub subject: Option<String>,
    pub description: Option<String>,
}

impl NewTicketArgs {
    /// Whether every required field came in as a flag
    fn is_complete(&self) -> bool {
        self.name.is_some()
            && self.email.is_some()
            && self.subject.is_some()
            && self.description.is_some()
    }

    /// Build a draft from the flags alone, empty where nothing was given
    fn into_draft(self) -> TicketDraft {
        TicketDraft {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            priority: self.priority.unwrap_or_default(),
            department: self.department.unwrap_or_default(),
            subject: self.subject.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
        }
    }
}

/// Handle the `new` command
pub fn handle_new_command(
    args: NewTicketArgs,
    file: Option<&Path>,
    output: &OutputFormatter,
) -> Result<()> {
    let draft = if args.is_complete() || output.is_json() {
        args.into_draft()
    } else {
        prompt_for_draft(args)?
    };

    let mut context = HandlerContext::open(file)?;
    let ticket = context.repository.create(draft)?;

    if output.is_json() {
        output.print_json(&serde_json::json!({
            "status": "success",
            "ticket": ticket_json(ticket),
        }))?;
    } else {
        output.success(&format!("Created ticket {}", ticket.id));
        output.info(&format!("  Subject: {}", ticket.subject));
        output.info(&format!(
            "  Category: {} | Priority: {} | Department: {}",
            ticket.category, ticket.priority, ticket.department
        ));
    }

    Ok(())
}

/// Gather missing fields through guided prompts
fn prompt_for_draft(args: NewTicketArgs) -> Result<TicketDraft> {
    let theme = ColorfulTheme::default();

    let name = match args.name {
        Some(n) => n,
        None => Input::<String>::with_theme(&theme)
            .with_prompt("Your name")
            .interact_text()?,
    };

    let email = match args.email {
        Some(e) => e,
        None => Input::<String>::with_theme(&theme)
            .with_prompt("Email")
            .interact_text()?,
    };

    let phone = match args.phone {
        Some(p) => p,
        None => Input::<String>::with_theme(&theme)
            .with_prompt("Phone (optional)")
            .allow_empty(true)
            .interact_text()?,
    };

    let category = match args.category {
        Some(c) => c,
        None => select_one(&theme, "Category", &Category::ALL)?,
    };

    let priority = match args.priority {
        Some(p) => p,
        None => select_one(&theme, "Priority", &Priority::ALL)?,
    };

    let department = match args.department {
        Some(d) => d,
        None => select_one(&theme, "Department", &Department::ALL)?,
    };

    let subject = match args.subject {
        Some(s) => s,
        None => Input::<String>::with_theme(&theme)
            .with_prompt("Subject")
            .interact_text()?,
    };

    let description = match args.description {
        Some(d) => d,
        None => Input::<String>::with_theme(&theme)
            .with_prompt("Description")
            .interact_text()?,
    };

    Ok(TicketDraft {
        name,
        email,
        phone,
        category,
        priority,
        department,
        subject,
        description,
    })
}

fn select_one<T: Copy + ToString>(
    theme: &ColorfulTheme,
    prompt: &str,
    options: &[T],
) -> Result<T> {
    let labels: Vec<String> = options.iter().map(ToString::to_string).collect();
    let index = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(options[index])
}
