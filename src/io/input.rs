//! Typed line input for the interactive shell.
//!
//! [`Prompter`] owns a `BufRead` source and a `Write` sink so the menu loop
//! is driven by locked stdin/stdout in production and by `Cursor` buffers
//! in tests. Each typed read loops until a line parses or input ends.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::ops::Operator;

/// Outcome of a prompt: a parsed value, or end of input.
#[derive(Debug, PartialEq)]
pub enum Prompted<T> {
    Value(T),
    /// Input source is exhausted (Ctrl-D); callers treat this as exit.
    Eof,
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write a full line to the output sink.
    pub fn say(&mut self, text: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Read one line, trimmed. `None` on EOF.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompt until the line parses as `T`, reporting each failure.
    fn read_parsed<T: FromStr>(
        &mut self,
        prompt: &str,
        expected: &str,
    ) -> io::Result<Prompted<T>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(Prompted::Eof);
            };
            match line.parse::<T>() {
                Ok(value) => return Ok(Prompted::Value(value)),
                Err(_) => self.say(format_args!("'{line}' is not {expected}, try again"))?,
            }
        }
    }

    pub fn read_integer(&mut self, label: &str) -> io::Result<Prompted<i64>> {
        self.read_parsed(&format!("{label}: "), "an integer")
    }

    pub fn read_number(&mut self, label: &str) -> io::Result<Prompted<f64>> {
        self.read_parsed(&format!("{label}: "), "a number")
    }

    /// A single character; `char::from_str` rejects longer input.
    pub fn read_letter(&mut self, label: &str) -> io::Result<Prompted<char>> {
        self.read_parsed(&format!("{label}: "), "a single character")
    }

    pub fn read_operator(&mut self, label: &str) -> io::Result<Prompted<Operator>> {
        self.read_parsed(&format!("{label} (+ - * /): "), "one of + - * /")
    }

    /// Menu selection in 0..=max.
    pub fn read_selection(&mut self, prompt: &str, max: usize) -> io::Result<Prompted<usize>> {
        loop {
            match self.read_parsed::<usize>(prompt, "a menu number")? {
                Prompted::Eof => return Ok(Prompted::Eof),
                Prompted::Value(n) if n <= max => return Ok(Prompted::Value(n)),
                Prompted::Value(n) => self.say(format_args!("{n} is not on the menu"))?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<&str>, Vec<u8>> {
        Prompter::new(Cursor::new(input), Vec::new())
    }

    #[test]
    fn read_integer_retries_until_valid() {
        let mut p = prompter("abc\n4.5\n-42\n");
        assert_eq!(p.read_integer("number").unwrap(), Prompted::Value(-42));
        let transcript = String::from_utf8(p.output).unwrap();
        assert!(transcript.contains("'abc' is not an integer"));
        assert!(transcript.contains("'4.5' is not an integer"));
    }

    #[test]
    fn read_number_accepts_floats_and_integers() {
        let mut p = prompter("2.5\n");
        assert_eq!(p.read_number("x").unwrap(), Prompted::Value(2.5));
        let mut p = prompter("7\n");
        assert_eq!(p.read_number("x").unwrap(), Prompted::Value(7.0));
    }

    #[test]
    fn read_letter_rejects_multi_character_lines() {
        let mut p = prompter("ab\nq\n");
        assert_eq!(p.read_letter("letter").unwrap(), Prompted::Value('q'));
        let transcript = String::from_utf8(p.output).unwrap();
        assert!(transcript.contains("'ab' is not a single character"));
    }

    #[test]
    fn read_operator_uses_library_parsing() {
        let mut p = prompter("%\n*\n");
        assert_eq!(
            p.read_operator("operator").unwrap(),
            Prompted::Value(Operator::Mul)
        );
    }

    #[test]
    fn read_selection_enforces_menu_bounds() {
        let mut p = prompter("99\n3\n");
        assert_eq!(p.read_selection("> ", 20).unwrap(), Prompted::Value(3));
        let transcript = String::from_utf8(p.output).unwrap();
        assert!(transcript.contains("99 is not on the menu"));
    }

    #[test]
    fn eof_is_surfaced_not_an_error() {
        let mut p = prompter("");
        assert_eq!(p.read_integer("n").unwrap(), Prompted::Eof);
        let mut p = prompter("garbage\n");
        // one failed parse, then the source runs dry
        assert_eq!(p.read_integer("n").unwrap(), Prompted::Eof);
    }
}
