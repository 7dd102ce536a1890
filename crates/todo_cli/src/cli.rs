//! Command-line surface.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use todo_core::{parse_due_date, TaskId};

#[derive(Debug, Parser)]
#[command(name = "todo")]
#[command(version = todo_core::core_version())]
#[command(about = "Local task tracker backed by SQLite")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Directory holding the task database and logs
    #[arg(long, global = true, env = "TODO_DATA", default_value = "data")]
    pub data_dir: PathBuf,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long, global = true, env = "TODO_LOG")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Commands {
    /// Add a task
    Add {
        /// Task title
        title: String,
        /// Free-form description
        #[arg(long = "desc", default_value = "")]
        description: String,
        /// Due date (YYYY-MM-DD)
        #[arg(long, value_parser = due_date_arg)]
        due: Option<NaiveDate>,
    },
    /// List tasks (pending only unless --all)
    List {
        /// Include completed tasks
        #[arg(long)]
        all: bool,
        /// Print tasks as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Mark a task as done
    Done {
        /// Task id
        id: TaskId,
    },
    /// Delete a task
    Delete {
        /// Task id
        id: TaskId,
    },
    /// Delete all completed tasks
    ClearDone,
}

fn due_date_arg(value: &str) -> Result<NaiveDate, String> {
    parse_due_date(value).map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::{Cli, Commands};
    use chrono::NaiveDate;
    use clap::Parser;

    #[test]
    fn add_parses_description_and_due_date() {
        let cli = Cli::try_parse_from([
            "todo",
            "add",
            "Task1",
            "--desc",
            "Desc",
            "--due",
            "2024-12-31",
        ])
        .unwrap();

        assert_eq!(
            cli.command,
            Commands::Add {
                title: "Task1".to_string(),
                description: "Desc".to_string(),
                due: NaiveDate::from_ymd_opt(2024, 12, 31),
            }
        );
    }

    #[test]
    fn add_defaults_to_empty_description_and_no_due_date() {
        let cli = Cli::try_parse_from(["todo", "add", "Task2"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Add {
                title: "Task2".to_string(),
                description: String::new(),
                due: None,
            }
        );
    }

    #[test]
    fn add_rejects_malformed_due_date() {
        let err = Cli::try_parse_from(["todo", "add", "x", "--due", "31.12.2024"]).unwrap_err();
        assert!(err.to_string().contains("expected YYYY-MM-DD"));
    }

    #[test]
    fn list_and_id_commands_parse() {
        let cli = Cli::try_parse_from(["todo", "list", "--all"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::List {
                all: true,
                json: false
            }
        );

        let cli = Cli::try_parse_from(["todo", "done", "3"]).unwrap();
        assert_eq!(cli.command, Commands::Done { id: 3 });

        let cli = Cli::try_parse_from(["todo", "delete", "4"]).unwrap();
        assert_eq!(cli.command, Commands::Delete { id: 4 });

        let cli = Cli::try_parse_from(["todo", "clear-done", "--data-dir", "/tmp/x"]).unwrap();
        assert_eq!(cli.command, Commands::ClearDone);
        assert_eq!(cli.data_dir, std::path::PathBuf::from("/tmp/x"));
    }

    #[test]
    fn non_numeric_id_is_rejected() {
        assert!(Cli::try_parse_from(["todo", "done", "abc"]).is_err());
    }

    #[test]
    fn no_arguments_shows_help() {
        assert!(Cli::try_parse_from(["todo"]).is_err());
    }
}
