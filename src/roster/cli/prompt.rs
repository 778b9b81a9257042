//! Line-oriented prompting with local re-prompt recovery.
//!
//! Every helper reads whole lines, so a rejected line is already consumed
//! when the prompt is re-asked. End-of-input cannot be recovered by
//! re-prompting and surfaces as an `UnexpectedEof` I/O error.

use std::io::{self, BufRead, Write};

use crate::error::Result;
use crate::model;

/// One round's menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Delete,
    Search,
    Display,
    Exit,
}

fn read_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input stream closed").into());
    }
    Ok(line.trim().to_string())
}

/// Reads a single menu selection attempt. An unparseable or out-of-range
/// line is rejected with a message and `None` is returned, so the caller
/// re-renders the menu before the next attempt.
pub fn read_menu_choice<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Option<MenuChoice>> {
    let line = read_line(input, output, "Enter your choice: ")?;
    let Ok(number) = line.parse::<i64>() else {
        writeln!(output, "Invalid input. Please enter a valid number.")?;
        return Ok(None);
    };
    let choice = match number {
        1 => MenuChoice::Add,
        2 => MenuChoice::Delete,
        3 => MenuChoice::Search,
        4 => MenuChoice::Display,
        5 => MenuChoice::Exit,
        _ => {
            writeln!(output, "Invalid choice. Please enter a number between 1 and 5.")?;
            return Ok(None);
        }
    };
    Ok(Some(choice))
}

/// Prompts until the user supplies a non-empty value within the accepted
/// length. `field` names the value in the rejection message ("name",
/// "position").
pub fn prompt_text_field<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    field: &str,
) -> Result<String> {
    loop {
        let value = read_line(input, output, prompt)?;
        if model::valid_text_field(&value) {
            return Ok(value);
        }
        writeln!(output, "Invalid {}. Please enter a valid {}.", field, field)?;
    }
}

/// Prompts until a positive integer id is supplied.
pub fn prompt_employee_id<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<u32> {
    loop {
        let line = read_line(input, output, "Employee ID: ")?;
        match line.parse::<u32>() {
            Ok(id) if id > 0 => return Ok(id),
            _ => writeln!(output, "Invalid employee ID. Please enter a positive integer.")?,
        }
    }
}

/// Prompts until a non-negative, finite salary is supplied.
pub fn prompt_salary<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<f64> {
    loop {
        let line = read_line(input, output, "Salary: $")?;
        match line.parse::<f64>() {
            Ok(salary) if salary >= 0.0 && salary.is_finite() => return Ok(salary),
            _ => writeln!(output, "Invalid salary. Please enter a non-negative number.")?,
        }
    }
}
