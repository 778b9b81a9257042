use std::io::Write;

use colored::Colorize;

use crate::commands::{CmdMessage, MessageLevel};
use crate::error::Result;
use crate::model::Employee;

use super::styles::{FIELD_LABEL, SEPARATOR};

const SEPARATOR_WIDTH: usize = 30;

pub fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub fn print_employee<W: Write>(out: &mut W, employee: &Employee) -> Result<()> {
    writeln!(out, "{} {}", FIELD_LABEL.apply_to("Name:"), employee.name)?;
    writeln!(
        out,
        "{} {}",
        FIELD_LABEL.apply_to("Employee ID:"),
        employee.employee_id
    )?;
    writeln!(
        out,
        "{} {}",
        FIELD_LABEL.apply_to("Position:"),
        employee.position
    )?;
    writeln!(
        out,
        "{} ${:.2}",
        FIELD_LABEL.apply_to("Salary:"),
        employee.salary
    )?;
    Ok(())
}

pub fn print_roster<W: Write>(out: &mut W, employees: &[Employee]) -> Result<()> {
    if employees.is_empty() {
        writeln!(out, "No employees in the list.")?;
        return Ok(());
    }
    for employee in employees {
        print_employee(out, employee)?;
        writeln!(out, "{}", SEPARATOR.apply_to("-".repeat(SEPARATOR_WIDTH)))?;
    }
    Ok(())
}
