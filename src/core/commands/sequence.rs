use serde_json::Value;

use crate::core::display::join_items;
use crate::core::sequence::{
    chunk_seq, contains, even_split, find_last_index, flatten, ordered_unique,
};
use crate::core::types::{Nested, OutputFormat};
use crate::utils::error::{Error, Result};

use super::emit;

/// One group per line, items separated by spaces
fn render_groups(groups: &[Vec<String>]) -> String {
    groups
        .iter()
        .map(|group| join_items(group))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Split items into chunks of `size`
pub fn chunk(items: &[String], size: usize, format: OutputFormat) -> Result<()> {
    let chunks = chunk_seq(items, size)?;

    emit(format, &chunks, || render_groups(&chunks))
}

/// Split items into `parts` balanced groups
pub fn split(items: &[String], parts: usize, format: OutputFormat) -> Result<()> {
    let groups = even_split(items, parts)?;

    emit(format, &groups, || render_groups(&groups))
}

/// Drop repeated items, keeping first occurrences
pub fn unique(items: &[String], format: OutputFormat) -> Result<()> {
    let distinct = ordered_unique(items.iter().cloned());

    emit(format, &distinct, || join_items(&distinct))
}

/// Report whether any query item appears among the items
pub fn contains_any(items: &[String], query: &[String], format: OutputFormat) -> Result<()> {
    let found = contains(items, query);

    emit(format, &found, || found.to_string())
}

/// Report the last position of `target`, or nothing when absent
pub fn last_index(items: &[String], target: &str, format: OutputFormat) -> Result<()> {
    let index = find_last_index(items, &target.to_string());

    emit(format, &index, || {
        index.map(|i| i.to_string()).unwrap_or_else(|| "none".to_string())
    })
}

/// Flatten a JSON document of nested arrays
pub fn flatten_json(document: &str, format: OutputFormat) -> Result<()> {
    let value: Value = serde_json::from_str(document)?;

    let leaves = match to_nested(value) {
        Nested::List(items) => flatten(items),
        Nested::Item(_) => return Err(Error::new("expected a JSON array")),
    };

    emit(format, &leaves, || {
        leaves
            .iter()
            .map(display_leaf)
            .collect::<Vec<_>>()
            .join(" ")
    })
}

fn to_nested(value: Value) -> Nested<Value> {
    match value {
        Value::Array(items) => Nested::List(items.into_iter().map(to_nested).collect()),
        other => Nested::Item(other),
    }
}

/// Strings print bare, everything else as JSON
fn display_leaf(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
