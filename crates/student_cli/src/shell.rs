//! Line-oriented student records shell.
//!
//! # Responsibility
//! - Turn typed commands into service calls and render the outcome.
//! - Re-render the record table after every successful mutation.
//!
//! # Invariants
//! - The shell holds no business rules; every check happens in the service.

use std::io::{self, BufRead, Write};
use student_core::{
    ServiceResult, Student, StudentForm, StudentRepository, StudentService, StudentServiceError,
};

const HELP: &str = "commands:
  add <id> <age> <names...>    create a student
  edit <id> <age> <names...>   replace names and age
  delete <id>                  remove a student
  show <id>                    print one student
  list                         print every student
  help                         show this message
  quit                         leave the shell";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(StudentForm),
    Edit(StudentForm),
    Delete(String),
    Show(String),
    List,
    Help,
    Quit,
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let mut parts = line.split_whitespace();
    let Some(verb) = parts.next() else {
        return Ok(None);
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "add" => Command::Add(parse_form(parts)),
        "edit" => Command::Edit(parse_form(parts)),
        "delete" | "rm" => Command::Delete(parts.next().unwrap_or_default().to_string()),
        "show" => Command::Show(parts.next().unwrap_or_default().to_string()),
        "list" | "ls" => Command::List,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command `{other}`; type `help`")),
    };
    Ok(Some(command))
}

fn parse_form<'a>(mut parts: impl Iterator<Item = &'a str>) -> StudentForm {
    let id = parts.next().unwrap_or_default();
    let age = parts.next().unwrap_or_default();
    let names = parts.collect::<Vec<_>>().join(" ");
    StudentForm::new(id, names, age)
}

/// Runs one command. Returns `false` when the shell should stop.
pub fn execute<R, W>(
    service: &mut StudentService<R>,
    command: Command,
    out: &mut W,
) -> io::Result<bool>
where
    R: StudentRepository,
    W: Write,
{
    match command {
        Command::Add(form) => {
            if let Some(student) = parse_or_report(&form, out)? {
                let outcome = service.add(Some(&student));
                report(service, outcome, "student saved", out)?;
            }
        }
        Command::Edit(form) => {
            if let Some(student) = parse_or_report(&form, out)? {
                let outcome = service.edit(Some(&student));
                report(service, outcome, "student updated", out)?;
            }
        }
        Command::Delete(id) => {
            let outcome = service.delete(&id);
            report(service, outcome, "student deleted", out)?;
        }
        Command::Show(id) => match service.get(id.trim()) {
            Some(student) => {
                let form = StudentForm::from_student(&student);
                writeln!(out, "id: {}\nnames: {}\nage: {}", form.id, form.names, form.age)?;
            }
            None => writeln!(out, "error: no student with that id")?,
        },
        Command::List => render_table(&service.list(), out)?,
        Command::Help => writeln!(out, "{HELP}")?,
        Command::Quit => return Ok(false),
    }
    Ok(true)
}

/// Reads commands until `quit` or end of input.
pub fn run<R, I, W>(service: &mut StudentService<R>, input: I, out: &mut W) -> io::Result<()>
where
    R: StudentRepository,
    I: BufRead,
    W: Write,
{
    render_table(&service.list(), out)?;
    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Ok(Some(command)) => {
                if !execute(service, command, out)? {
                    break;
                }
            }
            Ok(None) => {}
            Err(message) => writeln!(out, "error: {message}")?,
        }
        out.flush()?;
    }
    Ok(())
}

fn parse_or_report<W: Write>(form: &StudentForm, out: &mut W) -> io::Result<Option<Student>> {
    match form.parse() {
        Ok(student) => Ok(Some(student)),
        Err(err) => {
            writeln!(out, "error: {err}")?;
            Ok(None)
        }
    }
}

// An observer failure arrives after the change committed, so the table is
// still re-rendered.
fn report<R, W>(
    service: &StudentService<R>,
    outcome: ServiceResult<()>,
    success: &str,
    out: &mut W,
) -> io::Result<()>
where
    R: StudentRepository,
    W: Write,
{
    match outcome {
        Ok(()) => writeln!(out, "{success}")?,
        Err(StudentServiceError::ObserverFailed(err)) => {
            writeln!(out, "{success}, but notification failed: {err}")?
        }
        Err(err) => return writeln!(out, "error: {err}"),
    }
    render_table(&service.list(), out)
}

/// Renders records as an aligned `ID | NAMES | AGE` table.
pub fn render_table<W: Write>(students: &[Student], out: &mut W) -> io::Result<()> {
    let id_width = students
        .iter()
        .map(|student| student.id.chars().count())
        .chain(std::iter::once(2))
        .max()
        .unwrap_or(2);
    let names_width = students
        .iter()
        .map(|student| student.names.chars().count())
        .chain(std::iter::once(5))
        .max()
        .unwrap_or(5);

    writeln!(out, "{:<id_width$}  {:<names_width$}  AGE", "ID", "NAMES")?;
    for student in students {
        writeln!(
            out,
            "{:<id_width$}  {:<names_width$}  {}",
            student.id, student.names, student.age
        )?;
    }
    if students.is_empty() {
        writeln!(out, "(no students)")?;
    }
    Ok(())
}
