//! Command handlers: call into the store and render results.
//!
//! Handlers write to any `io::Write` so output can be checked in tests.

use crate::cli::Commands;
use anyhow::{Context, Result};
use std::io::Write;
use todo_core::{Task, TaskStore};

pub fn execute(store: &TaskStore, command: &Commands, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Add {
            title,
            description,
            due,
        } => {
            let task = store.add(title, description, *due)?;
            writeln!(out, "Added task #{}: {}", task.id(), task.title())?;
        }
        Commands::List { all, json } => {
            let tasks = store.list(*all)?;
            if *json {
                let body = serde_json::to_string_pretty(&tasks).context("serialize tasks")?;
                writeln!(out, "{body}")?;
            } else {
                render_list(&tasks, out)?;
            }
        }
        Commands::Done { id } => {
            if store.mark_done(*id)? {
                writeln!(out, "Task #{id} marked as done.")?;
            } else {
                writeln!(out, "Task #{id} not found.")?;
            }
        }
        Commands::Delete { id } => {
            if store.delete(*id)? {
                writeln!(out, "Task #{id} deleted.")?;
            } else {
                writeln!(out, "Task #{id} not found.")?;
            }
        }
        Commands::ClearDone => {
            let removed = store.clear_done()?;
            writeln!(out, "Removed {removed} completed task(s).")?;
        }
    }
    Ok(())
}

fn render_list(tasks: &[Task], out: &mut impl Write) -> std::io::Result<()> {
    if tasks.is_empty() {
        return writeln!(out, "No tasks.");
    }
    for task in tasks {
        writeln!(out, "{}", task_line(task))?;
        if !task.description().trim().is_empty() {
            writeln!(out, "    {}", task.description())?;
        }
    }
    Ok(())
}

fn task_line(task: &Task) -> String {
    let status = if task.is_done() { "[x]" } else { "[ ]" };
    let due = task
        .due_date()
        .map(|date| format!(" (due {date})"))
        .unwrap_or_default();
    format!("{status} #{} {}{due}", task.id(), task.title())
}
