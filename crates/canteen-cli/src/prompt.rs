//! Line-oriented prompts that re-ask until the input parses.
//!
//! Every prompt returns `Ok(None)` once the input is exhausted.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use canteen_core::config::is_valid_price;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print one line.
    pub fn say(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }

    /// Read one line without its trailing newline. Bytes that are not UTF-8
    /// become U+FFFD rather than failing the read.
    pub fn line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let text = String::from_utf8_lossy(&buf);
        Ok(Some(text.trim_end_matches(&['\n', '\r'][..]).to_string()))
    }

    pub fn int(&mut self, prompt: &str) -> io::Result<Option<i64>> {
        loop {
            let Some(text) = self.line(prompt)? else {
                return Ok(None);
            };
            match text.trim().parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => self.say("Invalid input. Please enter a valid integer.")?,
            }
        }
    }

    /// A finite, non-negative amount.
    pub fn price(&mut self, prompt: &str) -> io::Result<Option<f64>> {
        loop {
            let Some(text) = self.line(prompt)? else {
                return Ok(None);
            };
            match text.trim().parse::<f64>() {
                Ok(value) if is_valid_price(value) => return Ok(Some(value)),
                _ => self.say("Invalid input. Please enter a non-negative price.")?,
            }
        }
    }

    /// Only "yes" (any case) counts as yes.
    pub fn yes_no(&mut self, prompt: &str) -> io::Result<Option<bool>> {
        Ok(self
            .line(prompt)?
            .map(|text| text.trim().eq_ignore_ascii_case("yes")))
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
