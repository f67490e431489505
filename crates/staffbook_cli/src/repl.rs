//! Keyword-matching read-eval loop.
//!
//! # Responsibility
//! - Map free-text input lines onto record-store commands by substring
//!   keyword.
//! - Prompt for typed fields sequentially and abandon the in-progress
//!   command on a parse failure, leaving the table untouched.
//!
//! # Invariants
//! - One blocking command at a time; every mutation is persisted by the
//!   service before the next prompt is shown.
//! - The loop only terminates on `exit` or end of input.

use crate::greetings::Greetings;
use log::info;
use staffbook_core::{
    Employee, EmployeeService, EmployeeUpdate, ServiceError, TableStore,
};
use std::io::{self, BufRead, Write};
use std::str::FromStr;

const UNKNOWN_REPLY: &str =
    "I'm sorry, I can only help with employee information (add, update, delete, view).";

/// One recognized input line.
///
/// Multi-word command keywords are matched before the greeting words, so
/// an input containing both still acts on the record store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    AddEmployee,
    UpdateEmployee,
    DeleteEmployee,
    EmployeeDetails,
    Hi,
    Hello,
    Exit,
    Unknown,
}

impl Command {
    /// Keyword dispatch over the trimmed, lowercased input line.
    ///
    /// `exit` is an exact match; everything else is substring containment.
    pub fn parse(line: &str) -> Self {
        let line = line.trim().to_lowercase();
        if line == "exit" {
            Self::Exit
        } else if line.contains("add employee") {
            Self::AddEmployee
        } else if line.contains("update employee") {
            Self::UpdateEmployee
        } else if line.contains("delete employee") {
            Self::DeleteEmployee
        } else if line.contains("employee details") {
            Self::EmployeeDetails
        } else if line.contains("hi") {
            Self::Hi
        } else if line.contains("hello") {
            Self::Hello
        } else {
            Self::Unknown
        }
    }
}

/// Runs the blocking read-eval loop until `exit` or end of input.
pub fn run<S, R, W>(
    service: &mut EmployeeService<S>,
    greetings: &Greetings,
    mut input: R,
    mut output: W,
) -> io::Result<()>
where
    S: TableStore,
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "\nYou: ")?;
        output.flush()?;
        let Some(line) = read_line(&mut input)? else {
            break;
        };

        let command = Command::parse(&line);
        info!("event=dispatch module=cli status=ok command={command:?}");
        match command {
            Command::Exit => {
                writeln!(output, "Goodbye! Have a great day!")?;
                break;
            }
            Command::Hi => writeln!(output, "{}", greetings.hi())?,
            Command::Hello => writeln!(output, "{}", greetings.hello())?,
            Command::AddEmployee => add_employee(service, &mut input, &mut output)?,
            Command::UpdateEmployee => update_employee(service, &mut input, &mut output)?,
            Command::DeleteEmployee => delete_employee(service, &mut input, &mut output)?,
            Command::EmployeeDetails => employee_details(service, &mut input, &mut output)?,
            Command::Unknown => writeln!(output, "{UNKNOWN_REPLY}")?,
        }
    }
    Ok(())
}

fn add_employee<S: TableStore>(
    service: &mut EmployeeService<S>,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<()> {
    let Some(id) = prompt_parsed(input, output, "Enter Employee ID: ")? else {
        return Ok(());
    };
    let Some(name) = prompt_line(input, output, "Enter Name: ")? else {
        return Ok(());
    };
    let Some(position) = prompt_line(input, output, "Enter Position: ")? else {
        return Ok(());
    };
    let Some(salary) = prompt_parsed(input, output, "Enter Salary: ")? else {
        return Ok(());
    };

    match service.add_employee(Employee::new(id, name, position, salary)) {
        Ok(()) => writeln!(output, "Employee added successfully."),
        Err(err) => report(output, &err),
    }
}

fn update_employee<S: TableStore>(
    service: &mut EmployeeService<S>,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<()> {
    let Some(id) = prompt_parsed(input, output, "Enter Employee ID to update: ")? else {
        return Ok(());
    };
    let Some(name) = prompt_line(input, output, "Enter new Name (leave blank to skip): ")? else {
        return Ok(());
    };
    let Some(position) =
        prompt_line(input, output, "Enter new Position (leave blank to skip): ")?
    else {
        return Ok(());
    };
    let Some(salary_raw) =
        prompt_line(input, output, "Enter new Salary (leave blank to skip): ")?
    else {
        return Ok(());
    };

    // Blank means skip at the prompt level; the core patch keeps the
    // distinction explicit via Option fields.
    let salary = if salary_raw.is_empty() {
        None
    } else {
        match salary_raw.parse::<f64>() {
            Ok(value) => Some(value),
            Err(_) => {
                writeln!(output, "Invalid input. Please enter a numeric value.")?;
                return Ok(());
            }
        }
    };
    let patch = EmployeeUpdate {
        name: non_blank(name),
        position: non_blank(position),
        salary,
    };

    match service.update_employee(id, &patch) {
        Ok(()) => writeln!(output, "Employee updated successfully."),
        Err(err) => report(output, &err),
    }
}

fn delete_employee<S: TableStore>(
    service: &mut EmployeeService<S>,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<()> {
    let Some(id) = prompt_parsed(input, output, "Enter Employee ID to delete: ")? else {
        return Ok(());
    };

    match service.delete_employee(id) {
        Ok(()) => writeln!(output, "Employee deleted successfully."),
        Err(err) => report(output, &err),
    }
}

fn employee_details<S: TableStore>(
    service: &EmployeeService<S>,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<()> {
    let Some(id) = prompt_parsed(input, output, "Enter Employee ID: ")? else {
        return Ok(());
    };

    match service.employee_details(id) {
        Ok(employee) => {
            writeln!(output, "\n--- Employee Details ---")?;
            writeln!(output, "ID: {}", employee.id)?;
            writeln!(output, "Name: {}", employee.name)?;
            writeln!(output, "Position: {}", employee.position)?;
            writeln!(output, "Salary: {}", employee.salary)
        }
        Err(err) => report(output, &err),
    }
}

fn report(output: &mut impl Write, err: &ServiceError) -> io::Result<()> {
    match err {
        ServiceError::Table(err) => writeln!(output, "{err}."),
        ServiceError::Store(err) => writeln!(output, "Storage error: {err}."),
    }
}

/// Prompts for one line. `None` means end of input.
fn prompt_line(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{prompt}")?;
    output.flush()?;
    read_line(input)
}

/// Prompts for one line and parses it as `T`.
///
/// A parse failure reports invalid input and yields `None`, abandoning the
/// in-progress command.
fn prompt_parsed<T: FromStr>(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
) -> io::Result<Option<T>> {
    let Some(line) = prompt_line(input, output, prompt)? else {
        return Ok(None);
    };
    match line.parse::<T>() {
        Ok(value) => Ok(Some(value)),
        Err(_) => {
            writeln!(output, "Invalid input. Please enter a numeric value.")?;
            Ok(None)
        }
    }
}

fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn non_blank(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
