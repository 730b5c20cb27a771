/*!
 * Process Table Parsing
 * Line-oriented and JSON process table input
 */

use super::types::Process;
use crate::core::errors::ParseError;
use crate::core::limits::MAX_INPUT_PROCESSES;
use crate::core::types::Ticks;

/// Parse either a JSON array or a line-oriented table, detected by the first
/// significant character
pub fn parse_input(input: &str) -> Result<Vec<Process>, ParseError> {
    if input.trim_start().starts_with('[') {
        parse_json(input)
    } else {
        parse_table(input)
    }
}

/// Parse a JSON array of process objects
pub fn parse_json(input: &str) -> Result<Vec<Process>, ParseError> {
    let processes: Vec<Process> = serde_json::from_str(input)?;
    check_count(processes.len())?;
    Ok(processes)
}

/// Parse one process per line: `<id> <arrival> <burst> [priority]`
///
/// Fields are separated by whitespace and/or commas. Blank lines and `#`
/// comments are ignored; a `#` only opens a comment at the start of a field,
/// so ids such as `P#1` are kept whole. The first significant line is treated as a header
/// when its arrival column is not a number.
pub fn parse_table(input: &str) -> Result<Vec<Process>, ParseError> {
    let mut processes = Vec::new();
    let mut first_significant = true;

    for (index, raw) in input.lines().enumerate() {
        let line = index + 1;
        let content = strip_comment(raw).trim();
        if content.is_empty() {
            continue;
        }

        let fields: Vec<&str> = content
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|field| !field.is_empty())
            .collect();

        if std::mem::take(&mut first_significant) && is_header(&fields) {
            continue;
        }

        if !(3..=4).contains(&fields.len()) {
            return Err(ParseError::FieldCount {
                line,
                found: fields.len(),
            });
        }

        let mut process = Process::new(
            fields[0],
            parse_number(line, "arrival", fields[1])?,
            parse_number(line, "burst", fields[2])?,
        );
        if let Some(priority) = fields.get(3) {
            process = process.with_priority(parse_number(line, "priority", priority)?);
        }

        processes.push(process);
        check_count(processes.len())?;
    }

    Ok(processes)
}

/// Cut the line at the first `#` that begins a field
fn strip_comment(line: &str) -> &str {
    let mut at_field_start = true;
    for (offset, c) in line.char_indices() {
        if c == '#' && at_field_start {
            return &line[..offset];
        }
        at_field_start = c == ',' || c.is_whitespace();
    }
    line
}

fn is_header(fields: &[&str]) -> bool {
    fields.len() >= 2 && fields[1].parse::<Ticks>().is_err()
}

fn parse_number(line: usize, field: &'static str, value: &str) -> Result<Ticks, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidNumber {
        line,
        field,
        value: value.into(),
    })
}

fn check_count(count: usize) -> Result<(), ParseError> {
    if count > MAX_INPUT_PROCESSES {
        return Err(ParseError::TooManyProcesses {
            count,
            limit: MAX_INPUT_PROCESSES,
        });
    }
    Ok(())
}
