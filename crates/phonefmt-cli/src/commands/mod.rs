use anyhow::Result;
use phonefmt_config::AppConfig;
use serde::Serialize;
use std::io::{self, BufRead, Write};

use crate::error::invalid_input;

pub mod completions;
pub mod convert;
pub mod countries;

pub struct Context<'a> {
    pub json: bool,
    pub config: &'a AppConfig,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

/// Expands a lone `-` into one value per non-blank stdin line.
pub fn read_values(values: Vec<String>) -> Result<Vec<String>> {
    if values.len() != 1 || values[0] != "-" {
        return Ok(values);
    }

    let mut out = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            out.push(trimmed.to_string());
        }
    }
    if out.is_empty() {
        return Err(invalid_input("no phone numbers on stdin"));
    }
    Ok(out)
}
