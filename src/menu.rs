//! The interactive menu that sits in front of a [`ContactTree`].
//!
//! Input and output are generic so the same loop drives a terminal or a scripted session.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::config::Limits;
use crate::contact::ContactRecord;
use crate::error::{InputError, InsertError, Result};
use crate::tree::ContactTree;

const MENU: &str = "\nMenu:\n\
                    1. Add contact\n\
                    2. Find contact\n\
                    3. Remove contact\n\
                    4. List contacts\n\
                    5. Exit\n\
                    Choose an option: ";

/// One entry of the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choice {
    /// Add a contact.
    Add,
    /// Look a contact up by name.
    Find,
    /// Remove a contact by name.
    Remove,
    /// Print every contact in name order.
    List,
    /// Leave the menu.
    Exit,
}

impl FromStr for Choice {
    type Err = InputError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let invalid = || InputError::InvalidChoice(s.trim().to_string());
        match s.trim().parse::<i64>().map_err(|_| invalid())? {
            1 => Ok(Self::Add),
            2 => Ok(Self::Find),
            3 => Ok(Self::Remove),
            4 => Ok(Self::List),
            5 => Ok(Self::Exit),
            _ => Err(invalid()),
        }
    }
}

enum Flow {
    Continue,
    Stop,
}

/// Runs the menu until the user picks [`Choice::Exit`] or `input` runs dry, then tears `tree`
/// down.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use contacts::config::Limits;
/// use contacts::menu::run;
/// use contacts::tree::ContactTree;
///
/// let mut tree = ContactTree::new();
/// let mut input = Cursor::new("1\nAna\n555\n4\n5\n");
/// let mut output = Vec::new();
///
/// run(&mut tree, &mut input, &mut output, &Limits::default()).unwrap();
///
/// let transcript = String::from_utf8(output).unwrap();
/// assert!(transcript.contains("Name: Ana, Celular: 555\n"));
/// assert!(tree.is_empty());
/// ```
pub fn run<R, W>(
    tree: &mut ContactTree,
    input: &mut R,
    output: &mut W,
    limits: &Limits,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    loop {
        let Some(line) = prompt(input, output, MENU)? else {
            break;
        };

        let choice = match line.parse::<Choice>() {
            Ok(choice) => choice,
            Err(e) => {
                tracing::debug!(error = %e, "rejected menu input");
                writeln!(output, "Invalid option! Try again.")?;
                continue;
            }
        };

        tracing::trace!(?choice, "menu choice");
        let flow = match choice {
            Choice::Add => add(tree, input, output, limits)?,
            Choice::Find => find(tree, input, output, limits)?,
            Choice::Remove => remove(tree, input, output, limits)?,
            Choice::List => list(tree, output)?,
            Choice::Exit => {
                writeln!(output, "Exiting...")?;
                Flow::Stop
            }
        };
        if let Flow::Stop = flow {
            break;
        }
    }

    tree.clear();
    output.flush()?;
    Ok(())
}

fn add<R: BufRead, W: Write>(
    tree: &mut ContactTree,
    input: &mut R,
    output: &mut W,
    limits: &Limits,
) -> Result<Flow> {
    let Some(name) = prompt(input, output, "Name: ")? else {
        return Ok(Flow::Stop);
    };
    let Some(phone) = prompt(input, output, "Phone: ")? else {
        return Ok(Flow::Stop);
    };

    let name = match validate_name(limits.bound_name(&name)) {
        Ok(name) => name,
        Err(e) => {
            tracing::debug!(error = %e, "rejected contact");
            writeln!(output, "Name must not be empty.")?;
            return Ok(Flow::Continue);
        }
    };
    let phone = limits.bound_phone(&phone);

    match ContactRecord::new(name, phone).and_then(|record| tree.insert(record)) {
        Ok(()) => {}
        Err(InsertError::DuplicateKey { .. }) => {
            writeln!(output, "Contact with this name already exists.")?;
        }
        Err(e @ InsertError::Allocation(_)) => writeln!(output, "Could not store contact: {e}")?,
    }
    Ok(Flow::Continue)
}

/// Names reaching the tree must not be blank.
fn validate_name(name: &str) -> Result<&str> {
    if name.is_empty() {
        return Err(InputError::EmptyName);
    }
    Ok(name)
}

fn find<R: BufRead, W: Write>(
    tree: &ContactTree,
    input: &mut R,
    output: &mut W,
    limits: &Limits,
) -> Result<Flow> {
    let Some(name) = prompt(input, output, "Name to find: ")? else {
        return Ok(Flow::Stop);
    };

    match tree.find(limits.bound_name(&name)) {
        Some(found) => writeln!(
            output,
            "Contact found: {}, Celular: {}",
            found.name(),
            found.phone()
        )?,
        None => writeln!(output, "Contact not found.")?,
    }
    Ok(Flow::Continue)
}

fn remove<R: BufRead, W: Write>(
    tree: &mut ContactTree,
    input: &mut R,
    output: &mut W,
    limits: &Limits,
) -> Result<Flow> {
    let Some(name) = prompt(input, output, "Name to remove: ")? else {
        return Ok(Flow::Stop);
    };

    tree.remove(limits.bound_name(&name));
    Ok(Flow::Continue)
}

fn list<W: Write>(tree: &ContactTree, output: &mut W) -> Result<Flow> {
    writeln!(output, "Contacts:")?;
    for contact in tree {
        writeln!(output, "{contact}")?;
    }
    Ok(Flow::Continue)
}

/// Writes `text` and reads one line back without its line terminator. `None` means end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> Result<Option<String>> {
    write!(output, "{text}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        tracing::debug!("end of input");
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}
