//! The interactive menu loop.
//!
//! The loop is generic over its input and output streams; `main.rs` wires
//! it to locked stdin and stdout, tests drive it with in-memory buffers.
//! Only I/O failures break the loop — every user-level outcome is printed
//! and the menu comes back around.

use std::io::{BufRead, Write};

use crate::api::RosterApi;
use crate::error::Result;
use crate::model::Employee;

use super::print::{print_employee, print_messages, print_roster};
use super::prompt::{self, MenuChoice};
use super::styles::MENU_HEADER;

pub struct Menu<R, W> {
    api: RosterApi,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(api: RosterApi, input: R, output: W) -> Self {
        Self { api, input, output }
    }

    /// Runs the menu until the user picks Exit.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.render_menu()?;
            let Some(choice) = prompt::read_menu_choice(&mut self.input, &mut self.output)? else {
                continue;
            };
            match choice {
                MenuChoice::Add => self.handle_add()?,
                MenuChoice::Delete => self.handle_delete()?,
                MenuChoice::Search => self.handle_search()?,
                MenuChoice::Display => self.handle_display()?,
                MenuChoice::Exit => {
                    writeln!(self.output, "Exiting the program.")?;
                    return Ok(());
                }
            }
        }
    }

    fn render_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(
            self.output,
            "{}",
            MENU_HEADER.apply_to("Employee Management System")
        )?;
        writeln!(self.output, "1. Add Employee")?;
        writeln!(self.output, "2. Delete Employee")?;
        writeln!(self.output, "3. Search Employee")?;
        writeln!(self.output, "4. Display Employees")?;
        writeln!(self.output, "5. Exit")?;
        Ok(())
    }

    fn handle_add(&mut self) -> Result<()> {
        let name = prompt::prompt_text_field(&mut self.input, &mut self.output, "Name: ", "name")?;
        let employee_id = prompt::prompt_employee_id(&mut self.input, &mut self.output)?;
        let position =
            prompt::prompt_text_field(&mut self.input, &mut self.output, "Position: ", "position")?;
        let salary = prompt::prompt_salary(&mut self.input, &mut self.output)?;

        let result = self
            .api
            .add_employee(Employee::new(name, employee_id, position, salary))?;
        print_messages(&mut self.output, &result.messages)
    }

    fn handle_delete(&mut self) -> Result<()> {
        let name = prompt::prompt_text_field(
            &mut self.input,
            &mut self.output,
            "Enter the name of the employee to delete: ",
            "name",
        )?;
        let result = self.api.delete_employee(&name)?;
        print_messages(&mut self.output, &result.messages)
    }

    fn handle_search(&mut self) -> Result<()> {
        let name = prompt::prompt_text_field(
            &mut self.input,
            &mut self.output,
            "Enter the name of the employee to search: ",
            "name",
        )?;
        let result = self.api.search_employee(&name)?;
        for employee in &result.listed {
            print_employee(&mut self.output, employee)?;
        }
        print_messages(&mut self.output, &result.messages)
    }

    fn handle_display(&mut self) -> Result<()> {
        let result = self.api.list_employees()?;
        print_roster(&mut self.output, &result.listed)
    }
}
