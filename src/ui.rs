use std::fmt;

use anyhow::{Context, Result};
use console::style;
use crossterm::terminal;
use inquire::Select;
use serde::Serialize;

use crate::files::LabeledPath;

#[derive(Debug, Clone)]
struct UiOption<T> {
    value: T,
    line: String,
}

impl<T> fmt::Display for UiOption<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.line)
    }
}

pub fn pick_file(items: &[LabeledPath]) -> Result<LabeledPath> {
    let width = terminal_width().saturating_sub(4);
    let options = items
        .iter()
        .cloned()
        .map(|item| UiOption {
            line: truncate_to_width(item.to_string(), width),
            value: item,
        })
        .collect::<Vec<_>>();
    let picked = Select::new("Pick a file:", options)
        .with_help_message("↑↓ to move, enter to select, type to filter (label/path)")
        .with_page_size(20.min(items.len().max(1)))
        .prompt()?;
    Ok(picked.value)
}

pub fn print_info(msg: &str) {
    eprintln!("{} {}", style("info").dim(), msg);
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let s = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{s}");
    Ok(())
}

pub fn print_labels(items: &[LabeledPath], with_paths: bool, json: bool) -> Result<()> {
    if json {
        return print_json(items);
    }
    for item in items {
        if with_paths {
            println!("{item}");
        } else {
            println!("{}", item.label);
        }
    }
    Ok(())
}

fn terminal_width() -> usize {
    terminal::size()
        .map(|(w, _)| w as usize)
        .unwrap_or(120)
        .clamp(60, 240)
}

fn truncate_to_width(s: String, max_chars: usize) -> String {
    let s = s.replace(['\n', '\r'], " ");
    if s.chars().count() <= max_chars {
        return s;
    }
    let mut out = s
        .chars()
        .take(max_chars.saturating_sub(1))
        .collect::<String>();
    out.push('…');
    out
}
