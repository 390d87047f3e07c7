//! Interactive line-oriented front end driving the orchestrator.
//!
//! Blank lines are swallowed so that pressing Enter never submits the form.

use std::io::{BufRead, Write};

use anyhow::Result;
use shared::domain::{ItemId, ItemInput};
use storage::ItemPersistence;
use tracker_core::{Orchestrator, UiEvent};

use crate::terminal::TerminalSurface;

pub const HELP: &str = "\
commands:
  name <text>               set the item name field
  calories <number>         set the calories field
  add [<name> <number>]     add the item in the form
  edit <id>                 select an item for editing (id or item-<id>)
  update [<name> <number>]  save the item being edited
  delete                    delete the item being edited
  back                      leave edit mode
  clear                     delete every item
  list                      show the list
  dump                      print the full state as JSON
  help                      show this help
  quit                      exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Name(String),
    Calories(String),
    Add(Option<ItemInput>),
    Edit(String),
    Update(Option<ItemInput>),
    Delete,
    Back,
    Clear,
    List,
    Dump,
    Help,
    Quit,
}

/// Parses one input line. `Ok(None)` means there is nothing to do.
pub fn parse_command(line: &str) -> Result<Option<ShellCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "name" => ShellCommand::Name(rest.to_string()),
        "calories" | "cal" => ShellCommand::Calories(rest.to_string()),
        "add" => ShellCommand::Add(inline_input(rest)?),
        "edit" => {
            if rest.is_empty() {
                return Err("usage: edit <id>".into());
            }
            ShellCommand::Edit(element_id_for(rest))
        }
        "update" | "save" => ShellCommand::Update(inline_input(rest)?),
        "delete" | "del" => ShellCommand::Delete,
        "back" | "cancel" => ShellCommand::Back,
        "clear" => ShellCommand::Clear,
        "list" | "ls" => ShellCommand::List,
        "dump" => ShellCommand::Dump,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => return Err(format!("unknown command '{other}'; type 'help'")),
    };
    Ok(Some(command))
}

/// `<name words...> <calories>` typed after a verb.
fn inline_input(rest: &str) -> Result<Option<ItemInput>, String> {
    if rest.is_empty() {
        return Ok(None);
    }
    match rest.rsplit_once(char::is_whitespace) {
        Some((name, calories)) => Ok(Some(ItemInput::new(name.trim(), calories))),
        None => Err("expected <name> <calories>".into()),
    }
}

fn element_id_for(token: &str) -> String {
    match token.parse::<i64>() {
        Ok(id) => ItemId(id).element_id(),
        Err(_) => token.to_string(),
    }
}

pub fn run_shell<P, R, W>(
    orchestrator: &mut Orchestrator<P, TerminalSurface>,
    mut input: R,
    mut output: W,
) -> Result<()>
where
    P: ItemPersistence,
    R: BufRead,
    W: Write,
{
    write!(output, "{}", orchestrator.surface().render())?;

    loop {
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                writeln!(output, "! {message}")?;
                continue;
            }
        };

        let event = match command {
            ShellCommand::Quit => break,
            ShellCommand::Help => {
                writeln!(output, "{HELP}")?;
                continue;
            }
            ShellCommand::List => {
                write!(output, "{}", orchestrator.surface().render())?;
                continue;
            }
            ShellCommand::Dump => {
                let snapshot = orchestrator.store().snapshot();
                writeln!(output, "{}", serde_json::to_string_pretty(&snapshot)?)?;
                continue;
            }
            ShellCommand::Name(name) => {
                orchestrator.surface_mut().set_form_name(name);
                continue;
            }
            ShellCommand::Calories(calories) => {
                orchestrator.surface_mut().set_form_calories(calories);
                continue;
            }
            ShellCommand::Add(inline) => {
                if let Some(input) = inline {
                    orchestrator.surface_mut().fill_form(input);
                }
                UiEvent::AddRequested
            }
            ShellCommand::Update(inline) => {
                if let Some(input) = inline {
                    orchestrator.surface_mut().fill_form(input);
                }
                UiEvent::CommitEditRequested
            }
            ShellCommand::Edit(element_id) => {
                if orchestrator
                    .dispatch(UiEvent::EditRequested {
                        element_id: element_id.clone(),
                    })
                    .is_ok()
                    && orchestrator.store().current().is_none()
                {
                    writeln!(output, "! no item matches '{element_id}'")?;
                }
                for notice in orchestrator.surface_mut().take_notices() {
                    writeln!(output, "! {}", notice.message)?;
                }
                write!(output, "{}", orchestrator.surface().render())?;
                continue;
            }
            ShellCommand::Delete => UiEvent::DeleteRequested,
            ShellCommand::Back => UiEvent::CancelEditRequested,
            ShellCommand::Clear => UiEvent::ClearAllRequested,
        };

        if orchestrator.dispatch(event).is_err() {
            for notice in orchestrator.surface_mut().take_notices() {
                writeln!(output, "! {}", notice.message)?;
            }
        }
        write!(output, "{}", orchestrator.surface().render())?;
    }

    Ok(())
}

#[cfg(test)]
#[path = "tests/shell_tests.rs"]
mod tests;
