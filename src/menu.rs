//! The interactive menu around a [`Deque`] of integers.
//!
//! Input is read as whitespace-separated tokens, so a selection and its value may share a line
//! (`1 42`) or come on separate ones. Every answer goes to the given writer; an empty deque is
//! reported there as well instead of ending the loop.

use std::io::{BufRead, Write};

use eyre::{Context, Result};
use tracing::{debug, warn};

use crate::Deque;

const MENU: &str = "
--- Deque Menu ---
1. Add to Front
2. Add to Back
3. Remove from Front
4. Remove from Back
5. Display Front
6. Display Back
7. Exit
Enter your choice: ";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    AddFront,
    AddBack,
    RemoveFront,
    RemoveBack,
    ShowFront,
    ShowBack,
    Exit,
}

impl Command {
    /// Maps the menu numbers 1 to 7 onto commands.
    pub fn from_selection(selection: i64) -> Option<Self> {
        let command = match selection {
            1 => Command::AddFront,
            2 => Command::AddBack,
            3 => Command::RemoveFront,
            4 => Command::RemoveBack,
            5 => Command::ShowFront,
            6 => Command::ShowBack,
            7 => Command::Exit,
            _ => return None,
        };
        Some(command)
    }
}

enum Flow {
    Continue,
    Exit,
}

/// Splits the input into tokens, refilling line by line.
struct Tokens<R> {
    input: R,
    pending: Deque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(input: R) -> Self {
        Self {
            input,
            pending: Deque::new(),
        }
    }

    /// `None` once the input is exhausted.
    fn next(&mut self) -> Result<Option<String>> {
        loop {
            if let Ok(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Cannot read menu input")?;
            if read == 0 {
                return Ok(None);
            }
            for token in line.split_whitespace() {
                self.pending.push_back(token.to_owned());
            }
        }
    }
}

/// Runs the menu until the exit option is chosen or the input ends.
pub fn run<R: BufRead, W: Write>(deque: &mut Deque<i32>, input: R, mut output: W) -> Result<()> {
    let mut tokens = Tokens::new(input);

    loop {
        output.write_all(MENU.as_bytes())?;
        output.flush()?;

        let Some(token) = tokens.next()? else {
            debug!("end of input");
            return Ok(());
        };

        let Some(command) = token.parse::<i64>().ok().and_then(Command::from_selection) else {
            warn!(%token, "invalid menu choice");
            writeln!(output, "Invalid choice. Please try again.")?;
            continue;
        };

        debug!(?command, len = deque.len(), "dispatching");
        if let Flow::Exit = execute(command, deque, &mut tokens, &mut output)? {
            return Ok(());
        }
    }
}

fn execute<R: BufRead, W: Write>(
    command: Command,
    deque: &mut Deque<i32>,
    tokens: &mut Tokens<R>,
    output: &mut W,
) -> Result<Flow> {
    let reply = match command {
        Command::AddFront | Command::AddBack => {
            let end = if command == Command::AddFront { "front" } else { "back" };
            write!(output, "Enter a value to add to the {end}: ")?;
            output.flush()?;

            let Some(token) = tokens.next()? else {
                debug!("end of input while waiting for a value");
                return Ok(Flow::Exit);
            };
            let Ok(value) = token.parse::<i32>() else {
                warn!(%token, "invalid value");
                writeln!(output, "Invalid value. Please enter an integer.")?;
                return Ok(Flow::Continue);
            };

            match command {
                Command::AddFront => deque.push_front(value),
                _ => deque.push_back(value),
            }
            Ok(format!("Value {value} added to the {end}."))
        }
        Command::RemoveFront => deque.pop_front().map(|_| "Front value removed.".to_owned()),
        Command::RemoveBack => deque.pop_back().map(|_| "Back value removed.".to_owned()),
        Command::ShowFront => deque.front().map(|value| format!("Front value: {value}")),
        Command::ShowBack => deque.back().map(|value| format!("Back value: {value}")),
        Command::Exit => {
            writeln!(output, "Exiting program.")?;
            return Ok(Flow::Exit);
        }
    };

    match reply {
        Ok(line) => writeln!(output, "{line}")?,
        Err(underflow) => writeln!(output, "Error: {underflow}")?,
    }
    Ok(Flow::Continue)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::{run, Command};
    use crate::Deque;

    fn transcript(deque: &mut Deque<i32>, input: &str) -> String {
        let mut output = Vec::new();
        run(deque, Cursor::new(input), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn selections_map_onto_commands() {
        assert_eq!(Command::from_selection(1), Some(Command::AddFront));
        assert_eq!(Command::from_selection(4), Some(Command::RemoveBack));
        assert_eq!(Command::from_selection(7), Some(Command::Exit));
        assert_eq!(Command::from_selection(0), None);
        assert_eq!(Command::from_selection(8), None);
        assert_eq!(Command::from_selection(-3), None);
    }

    #[test]
    fn build_up_and_look_at_both_ends() {
        let mut deque = Deque::new();
        let out = transcript(&mut deque, "2\n1\n2\n2\n1\n0\n5\n6\n7\n");

        assert!(out.contains("Enter a value to add to the back: Value 1 added to the back."));
        assert!(out.contains("Value 0 added to the front."));
        assert!(out.contains("Front value: 0\n"));
        assert!(out.contains("Back value: 2\n"));
        assert!(out.ends_with("Enter your choice: Exiting program.\n"));
        assert_eq!(deque.len(), 3);
    }

    #[test]
    fn empty_deque_is_reported_and_loop_goes_on() {
        let mut deque = Deque::new();
        let out = transcript(&mut deque, "3\n4\n5\n6\n7\n");

        assert_eq!(out.matches("Error: Deque is empty.\n").count(), 4);
        assert!(out.contains("Exiting program."));
        assert!(deque.is_empty());
    }

    #[test]
    fn removals_take_from_the_right_end() {
        let mut deque = Deque::new();
        let out = transcript(&mut deque, "2 10 2 20 2 30 3 4 5 6 7");

        assert!(out.contains("Front value removed."));
        assert!(out.contains("Back value removed."));
        assert!(out.contains("Front value: 20\n"));
        assert!(out.contains("Back value: 20\n"));
        assert_eq!(deque.len(), 1);
    }

    #[test]
    fn junk_is_rejected_without_touching_the_deque() {
        let mut deque = Deque::new();
        let out = transcript(&mut deque, "9\nabc\n1\nxyz\n2\n99999999999\n7\n");

        assert_eq!(out.matches("Invalid choice. Please try again.").count(), 2);
        assert_eq!(out.matches("Invalid value. Please enter an integer.").count(), 2);
        assert!(deque.is_empty());
    }

    #[test]
    fn end_of_input_stops_quietly() {
        let mut deque = Deque::new();
        let out = transcript(&mut deque, "1 5\n1");

        assert!(!out.contains("Exiting program."));
        assert!(out.ends_with("Enter a value to add to the front: "));
        assert_eq!(deque.front(), Ok(5));

        let out = transcript(&mut Deque::new(), "");
        assert!(out.ends_with("Enter your choice: "));
    }
}
