//! Interactive menu over the metro network.
//!
//! Reads menu choices and station names from a [`TokenReader`] and writes
//! plain-text results. Station-name errors are printed and the menu comes
//! back; only I/O failures end the session early.

mod render;

use std::io::{BufRead, Write};

use tracing::debug;

use crate::input::{InputError, TokenReader};
use crate::network::MetroGraph;

pub use render::{
    write_details, write_intersections, write_nearest, write_routes, write_terminals,
};

const MENU: &str = "\
1. Find Possible Routes
2. Station Details
3. Find Intersecting Stations
4. Find Terminals
5. Find Nearest Intersection
6. Exit";

/// A parsed menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Routes,
    Details,
    Intersections,
    Terminals,
    Nearest,
    Exit,
    /// Choices below 1 redisplay the menu
    Unknown,
}

impl Command {
    /// Map a menu number to a command. Anything from 6 up exits.
    pub fn from_choice(choice: i64) -> Self {
        match choice {
            1 => Command::Routes,
            2 => Command::Details,
            3 => Command::Intersections,
            4 => Command::Terminals,
            5 => Command::Nearest,
            c if c >= 6 => Command::Exit,
            _ => Command::Unknown,
        }
    }
}

/// Interactive session over one graph.
pub struct Shell<'a, R, W> {
    graph: &'a MetroGraph,
    tokens: &'a mut TokenReader<R>,
    out: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    /// Create a session reading from `tokens` and writing to `out`.
    pub fn new(graph: &'a MetroGraph, tokens: &'a mut TokenReader<R>, out: W) -> Self {
        Self { graph, tokens, out }
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self) -> Result<(), InputError> {
        loop {
            writeln!(self.out, "\n{MENU}")?;
            write!(self.out, "Enter your choice: ")?;
            self.out.flush()?;

            let Some(token) = self.tokens.next_token()? else {
                break;
            };

            let command = match token.parse::<i64>() {
                Ok(choice) => Command::from_choice(choice),
                Err(_) => {
                    writeln!(self.out, "\nInvalid choice: {token}")?;
                    continue;
                }
            };

            debug!(?command, "Shell command");

            if command == Command::Exit {
                break;
            }
            if !self.execute(command)? {
                break;
            }
        }

        self.out.flush()?;
        Ok(())
    }

    /// Run one command. Returns false if input ran out mid-command.
    fn execute(&mut self, command: Command) -> Result<bool, InputError> {
        match command {
            Command::Routes => {
                write!(
                    self.out,
                    "Enter the two stations you wish to find the possible routes between: "
                )?;
                self.out.flush()?;
                let Some(from) = self.tokens.next_token()? else {
                    return Ok(false);
                };
                let Some(to) = self.tokens.next_token()? else {
                    return Ok(false);
                };
                writeln!(self.out)?;
                write_routes(&mut self.out, &from, &to, self.graph.find_all_routes(&from, &to))?;
            }
            Command::Details => {
                write!(self.out, "\nEnter station name to get details: ")?;
                self.out.flush()?;
                let Some(name) = self.tokens.next_token()? else {
                    return Ok(false);
                };
                writeln!(self.out)?;
                write_details(&mut self.out, self.graph.station_details(&name))?;
            }
            Command::Intersections => {
                write_intersections(&mut self.out, &self.graph.find_intersections())?;
            }
            Command::Terminals => {
                write_terminals(&mut self.out, &self.graph.find_terminals())?;
            }
            Command::Nearest => {
                write!(
                    self.out,
                    "Enter the station to find the nearest intersection station from: "
                )?;
                self.out.flush()?;
                let Some(from) = self.tokens.next_token()? else {
                    return Ok(false);
                };
                writeln!(self.out)?;
                write_nearest(&mut self.out, &from, self.graph.nearest_intersection(&from))?;
            }
            Command::Exit | Command::Unknown => {}
        }

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::read_network;
    use std::io::Cursor;

    /// Feed network and commands through one stream, like standard input.
    fn session(input: &str) -> String {
        let mut tokens = TokenReader::new(Cursor::new(input.to_string()));
        let graph = read_network(&mut tokens).unwrap();

        let mut out = Vec::new();
        Shell::new(&graph, &mut tokens, &mut out).run().unwrap();
        String::from_utf8(out).unwrap()
    }

    const NETWORK: &str = "3\nA B 10\nB C 15\nA C 50\n2\nL1 3 A B C\nL2 1 C\n";

    #[test]
    fn command_from_choice() {
        assert_eq!(Command::from_choice(1), Command::Routes);
        assert_eq!(Command::from_choice(5), Command::Nearest);
        assert_eq!(Command::from_choice(6), Command::Exit);
        assert_eq!(Command::from_choice(99), Command::Exit);
        assert_eq!(Command::from_choice(0), Command::Unknown);
        assert_eq!(Command::from_choice(-3), Command::Unknown);
    }

    #[test]
    fn routes_command() {
        let out = session(&format!("{NETWORK}1 A C\n6\n"));
        assert!(out.contains("Following are all different paths from A to C:"));
        assert!(out.contains("A -> B -> C | Total Fare: 25"));
        assert!(out.contains("A -> C | Total Fare: 50"));
    }

    #[test]
    fn routes_command_without_routes_prints_header_only() {
        let out = session("2\nA B 1\nC D 1\n0\n1 A D\n6\n");
        assert!(out.contains("Following are all different paths from A to D:\n\n1. Find"));
        assert!(!out.contains("Total Fare"));
    }

    #[test]
    fn details_command() {
        let out = session(&format!("{NETWORK}2 C 6"));
        assert!(out.contains("Station Name: C"));
        assert!(out.contains("Lines: L1 L2"));
        assert!(out.contains("Connections: B (Fare: 15) A (Fare: 50)"));
    }

    #[test]
    fn report_commands() {
        let out = session(&format!("{NETWORK}3 4 6"));
        assert!(out.contains("C (Lines: 2)"));
        assert!(out.contains("Line L1: A (Start), C (End)"));
        assert!(out.contains("Line L2: C (Start), C (End)"));
    }

    #[test]
    fn nearest_command() {
        let out = session(&format!("{NETWORK}5 A 6"));
        assert!(out.contains("Nearest intersection station to A is C, at distance 1."));
    }

    #[test]
    fn unknown_station_keeps_session_alive() {
        let out = session(&format!("{NETWORK}2 Nowhere 3 6"));
        assert!(out.contains("station Nowhere not found in the network"));
        assert!(out.contains("C (Lines: 2)"));
    }

    #[test]
    fn bad_choice_redisplays_menu() {
        let out = session(&format!("{NETWORK}x 0 6"));
        assert!(out.contains("Invalid choice: x"));
        assert_eq!(out.matches("6. Exit").count(), 3);
    }

    #[test]
    fn end_of_input_exits() {
        let out = session(&format!("{NETWORK}1 A"));
        assert_eq!(out.matches("6. Exit").count(), 1);
        assert!(!out.contains("Following"));
    }
}
