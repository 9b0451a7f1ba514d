//! Line-oriented typed input over any `BufRead`/`Write` pair.
//!
//! Every `ask_*` method returns `Ok(None)` once input is exhausted so the
//! caller can wind down instead of failing.

use std::fmt::Display;
use std::io::{BufRead, Write};

use anyhow::Context;

pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Write one line of output.
    pub fn say(&mut self, line: impl Display) -> anyhow::Result<()> {
        writeln!(self.writer, "{line}").context("failed to write to output")
    }

    /// Read one line without its trailing newline. `None` at end of input.
    ///
    /// Bytes that are not UTF-8 become U+FFFD, so a garbled line reaches the
    /// typed parsers as an ordinary malformed answer.
    pub fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        let mut buf = Vec::new();
        let read = self
            .reader
            .read_until(b'\n', &mut buf)
            .context("failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    /// Print `prompt` (if any) and read a line of free text, trimmed of
    /// surrounding spaces.
    pub fn ask_text(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        if !prompt.is_empty() {
            self.say(prompt)?;
        }
        self.writer.flush().context("failed to flush output")?;
        Ok(self.read_line()?.map(|line| line.trim().to_string()))
    }

    pub fn ask_int(&mut self, prompt: &str) -> anyhow::Result<Option<i64>> {
        self.ask_parsed(prompt, parse_int, "Please enter a whole number.")
    }

    pub fn ask_bool(&mut self, prompt: &str) -> anyhow::Result<Option<bool>> {
        self.ask_parsed(prompt, parse_bool, "Please answer true or false.")
    }

    pub fn ask_measure(&mut self, prompt: &str) -> anyhow::Result<Option<f64>> {
        self.ask_parsed(prompt, parse_measure, "Please enter a non-negative number.")
    }

    /// Ask until `parse` accepts the answer or input runs out.
    fn ask_parsed<T>(
        &mut self,
        prompt: &str,
        parse: fn(&str) -> Option<T>,
        retry_hint: &str,
    ) -> anyhow::Result<Option<T>> {
        loop {
            let Some(answer) = self.ask_text(prompt)? else {
                return Ok(None);
            };
            match parse(&answer) {
                Some(value) => return Ok(Some(value)),
                None => self.say(retry_hint)?,
            }
        }
    }
}

pub fn parse_int(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Accepts `true/false`, `yes/no`, `y/n` in any case.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" => Some(true),
        "false" | "no" | "n" => Some(false),
        _ => None,
    }
}

/// A finite, non-negative decimal. Accepts a comma as decimal separator.
pub fn parse_measure(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().replace(',', ".").parse().ok()?;
    (value.is_finite() && value >= 0.0).then_some(value)
}
