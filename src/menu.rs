//! Interactive menu driving the query engine
//!
//! Generic over its input and output streams so sessions can be scripted.

use std::io::{BufRead, Write};

use crate::error::SearchError;
use crate::models::{RecordStore, SearchRequest};
use crate::query::QueryEngine;
use crate::Result;

/// Top-level menu choice
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuOption {
    FindPerson,
    PrintAll,
    Exit,
}

impl MenuOption {
    /// Parse a menu line; `None` for anything that isn't a known option
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().parse::<u32>().ok()? {
            1 => Some(MenuOption::FindPerson),
            2 => Some(MenuOption::PrintAll),
            0 => Some(MenuOption::Exit),
            _ => None,
        }
    }
}

pub struct Menu<'a, R, W> {
    records: &'a RecordStore,
    engine: &'a QueryEngine<'a>,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(records: &'a RecordStore, engine: &'a QueryEngine<'a>, input: R, output: W) -> Self {
        Self {
            records,
            engine,
            input,
            output,
        }
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let Some(line) = self.read_line()? else {
                return Ok(());
            };

            match MenuOption::parse(&line) {
                Some(MenuOption::FindPerson) => {
                    if !self.find_person()? {
                        return Ok(());
                    }
                }
                Some(MenuOption::PrintAll) => self.print_all()?,
                Some(MenuOption::Exit) => {
                    writeln!(self.output, "Bye!")?;
                    return Ok(());
                }
                None => writeln!(self.output, "Incorrect option! Try again.")?,
            }
        }
    }

    /// Consume the output writer
    pub fn into_output(self) -> W {
        self.output
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== Menu ===")?;
        writeln!(self.output, "1. Find a person")?;
        writeln!(self.output, "2. Print all people")?;
        writeln!(self.output, "0. Exit")?;
        write!(self.output, "> ")?;
        self.output.flush()?;
        Ok(())
    }

    /// Returns false if input ended mid-dialog
    fn find_person(&mut self) -> Result<bool> {
        writeln!(self.output, "Select a matching strategy: ALL, ANY, NONE")?;
        let Some(strategy) = self.read_line()? else {
            return Ok(false);
        };

        writeln!(
            self.output,
            "Enter a name or email to search all suitable people:"
        )?;
        let Some(query) = self.read_line()? else {
            return Ok(false);
        };

        let response = match self.engine.search(&SearchRequest::new(strategy, query)) {
            Ok(response) => response,
            Err(SearchError::UnknownStrategy(_)) => {
                writeln!(self.output, "Unknown strategy. Try again.")?;
                return Ok(true);
            }
            Err(e) => return Err(e),
        };

        if response.is_empty() {
            writeln!(self.output, "No matching people found.")?;
        } else {
            writeln!(self.output, "{} persons found:", response.total_hits())?;
            for id in response.record_ids {
                let record = self.records.require(id)?;
                writeln!(self.output, "{}", record.text)?;
            }
        }
        Ok(true)
    }

    fn print_all(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== List of people ===")?;
        for record in self.records {
            writeln!(self.output, "{}", record.text)?;
        }
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::build_index;
    use crate::tokenizer::Tokenizer;
    use std::io::Cursor;

    fn run_session(lines: &[&str], script: &str) -> String {
        let store = RecordStore::from_lines(lines.iter().copied());
        let index = build_index(&store, &Tokenizer::default());
        let engine = QueryEngine::new(&index);

        let mut menu = Menu::new(&store, &engine, Cursor::new(script.to_string()), Vec::new());
        menu.run().unwrap();
        String::from_utf8(menu.into_output()).unwrap()
    }

    #[test]
    fn test_menu_option_parse() {
        assert_eq!(MenuOption::parse("1"), Some(MenuOption::FindPerson));
        assert_eq!(MenuOption::parse(" 2 "), Some(MenuOption::PrintAll));
        assert_eq!(MenuOption::parse("0"), Some(MenuOption::Exit));
        assert_eq!(MenuOption::parse("3"), None);
        assert_eq!(MenuOption::parse("find"), None);
    }

    #[test]
    fn test_exit() {
        let out = run_session(&["a"], "0\n");
        assert!(out.contains("=== Menu ==="));
        assert!(out.ends_with("Bye!\n"));
    }

    #[test]
    fn test_find_any() {
        let out = run_session(&["Hello world", "World of Go", "Hello there"], "1\nany\nworld\n0\n");
        assert!(out.contains("2 persons found:\nHello world\nWorld of Go\n"));
    }

    #[test]
    fn test_no_matches() {
        let out = run_session(&["Hello world"], "1\nALL\nhello go\n0\n");
        assert!(out.contains("No matching people found."));
    }

    #[test]
    fn test_unknown_strategy_returns_to_menu() {
        let out = run_session(&["Hello world"], "1\nMAYBE\nhello\n0\n");
        assert!(out.contains("Unknown strategy. Try again."));
        assert!(!out.contains("persons found"));
        assert!(out.ends_with("Bye!\n"));
    }

    #[test]
    fn test_print_all() {
        let out = run_session(&["first", "second"], "2\n0\n");
        assert!(out.contains("=== List of people ===\nfirst\nsecond\n"));
    }

    #[test]
    fn test_incorrect_option() {
        let out = run_session(&["first"], "7\nabc\n0\n");
        assert_eq!(out.matches("Incorrect option! Try again.").count(), 2);
    }

    #[test]
    fn test_end_of_input() {
        let out = run_session(&["first"], "1\nALL\n");
        assert!(!out.contains("Bye!"));
    }
}
