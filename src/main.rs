//! support-ticket - flat-file support ticket tracker
//!
//! Main entry point: parses command-line arguments and dispatches to the
//! matching command handler. One repository operation per invocation.

use clap::Parser;
use std::process;
use support_ticket::cli::handlers::{
    NewTicketArgs, SearchQuery, handle_comment_command, handle_export_command,
    handle_list_command, handle_new_command, handle_search_command, handle_show_command,
    handle_stats_command, handle_update_command,
};
use support_ticket::cli::{Cli, Commands, OutputFormatter};
use support_ticket::error::Result;

fn main() {
    let cli = Cli::parse();
    let formatter = OutputFormatter::new(cli.json, cli.no_color);

    if let Err(e) = run(cli, &formatter) {
        handle_error(&e, &formatter);
        process::exit(1);
    }
}

/// Dispatch the parsed command
fn run(cli: Cli, formatter: &OutputFormatter) -> Result<()> {
    if cli.verbose {
        tracing_subscriber::fmt().with_env_filter("debug").init();
    }

    let file = cli.file.as_deref();

    match cli.command {
        Commands::New {
            name,
            email,
            phone,
            category,
            priority,
            department,
            subject,
            description,
        } => handle_new_command(
            NewTicketArgs {
                name,
                email,
                phone,
                category,
                priority,
                department,
                subject,
                description,
            },
            file,
            formatter,
        ),
        Commands::List {
            statuses,
            priorities,
            categories,
            limit,
        } => handle_list_command(statuses, priorities, categories, limit, file, formatter),
        Commands::Show { id } => handle_show_command(&id, file, formatter),
        Commands::Update { id, status, assign } => {
            handle_update_command(&id, status, assign, file, formatter)
        },
        Commands::Comment {
            id,
            author,
            message,
        } => handle_comment_command(&id, author, &message, file, formatter),
        Commands::Search { id, email, keyword } => {
            // clap guarantees exactly one of the three is present
            let query = id.map(SearchQuery::Id).or_else(|| {
                email
                    .map(SearchQuery::Email)
                    .or_else(|| keyword.map(SearchQuery::Keyword))
            });
            match query {
                Some(query) => handle_search_command(query, file, formatter),
                None => unreachable!("search argument group is required"),
            }
        },
        Commands::Stats => handle_stats_command(file, formatter),
        Commands::Export { format, output } => {
            handle_export_command(format, output.as_deref(), file, formatter)
        },
    }
}

/// Display an error with suggestions, matching the tool's output modes
fn handle_error(error: &support_ticket::SupportTicketError, formatter: &OutputFormatter) {
    formatter.error(&error.user_message());

    let suggestions = error.suggestions();
    if !suggestions.is_empty() {
        formatter.info("\nSuggestions:");
        for suggestion in &suggestions {
            formatter.info(&format!("  • {suggestion}"));
        }
    }

    if formatter.is_json() {
        let _ = formatter.print_json(&serde_json::json!({
            "status": "error",
            "error": error.to_string(),
            "suggestions": suggestions,
            "recoverable": error.is_recoverable(),
        }));
    }
}
