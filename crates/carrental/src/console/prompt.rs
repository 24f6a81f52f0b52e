//! Line-oriented terminal input and output.

use std::io::{BufRead, Write};

use crate::error::{Error, Result};

/// Terminal reset sequence used to clear the screen.
const CLEAR_SCREEN: &str = "\x1bc";

/// Synchronous question-and-answer access to the user.
///
/// The session only talks to the terminal through this trait, so tests can
/// drive it with scripted input.
pub trait Prompter {
    /// Show `prompt` and read one line, without the line terminator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputClosed`] at end of input, or an I/O error.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Show one line of text.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the output cannot be written.
    fn say(&mut self, text: &str) -> Result<()>;

    /// Clear the screen, if the terminal supports and allows it.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the output cannot be written.
    fn clear(&mut self) -> Result<()> {
        Ok(())
    }

    /// Read a password. Input is echoed unless the implementation hides it.
    ///
    /// # Errors
    ///
    /// See [`read_line`](Self::read_line).
    fn read_secret(&mut self, prompt: &str) -> Result<String> {
        self.read_line(prompt)
    }

    /// Read a line that is not blank, asking again until one is given.
    ///
    /// # Errors
    ///
    /// See [`read_line`](Self::read_line).
    fn read_required(&mut self, prompt: &str) -> Result<String> {
        loop {
            let line = self.read_line(prompt)?;
            let line = line.trim();
            if !line.is_empty() {
                return Ok(line.to_string());
            }
            self.say("This field is required.")?;
        }
    }

    /// Read a number between 1 and `max`, asking again until one is given.
    ///
    /// # Errors
    ///
    /// See [`read_line`](Self::read_line).
    fn choose(&mut self, prompt: &str, max: usize) -> Result<usize> {
        loop {
            let line = self.read_line(prompt)?;
            match line.trim().parse::<usize>() {
                Ok(choice) if (1..=max).contains(&choice) => return Ok(choice),
                _ => self.say("Invalid choice. Please try again.")?,
            }
        }
    }

    /// Read a number between 1 and `max`, or 0 to back out.
    ///
    /// Returns `None` for 0.
    ///
    /// # Errors
    ///
    /// See [`read_line`](Self::read_line).
    fn choose_or_cancel(&mut self, prompt: &str, max: usize) -> Result<Option<usize>> {
        loop {
            let line = self.read_line(prompt)?;
            match line.trim().parse::<usize>() {
                Ok(0) => return Ok(None),
                Ok(choice) if choice <= max => return Ok(Some(choice)),
                _ => self.say("Invalid choice. Please try again.")?,
            }
        }
    }

    /// Ask a y/n question, asking again until one of them is given.
    ///
    /// # Errors
    ///
    /// See [`read_line`](Self::read_line).
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        loop {
            let line = self.read_line(prompt)?;
            match line.trim().to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.say("Please answer y or n.")?,
            }
        }
    }
}

/// A [`Prompter`] over any buffered reader and writer.
#[derive(Debug)]
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    /// Wrap `input` and `output`. `clear_screen` enables [`Prompter::clear`].
    #[must_use]
    pub fn new(input: R, output: W, clear_screen: bool) -> Self {
        Self {
            input,
            output,
            clear_screen,
        }
    }

    /// Take back the output, for inspecting what was written.
    #[must_use]
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        if self.clear_screen {
            write!(self.output, "{CLEAR_SCREEN}")?;
            self.output.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompter(input: &str) -> TerminalPrompter<&[u8], Vec<u8>> {
        TerminalPrompter::new(input.as_bytes(), Vec::new(), false)
    }

    fn output(p: TerminalPrompter<&[u8], Vec<u8>>) -> String {
        String::from_utf8(p.into_output()).unwrap()
    }

    #[test]
    fn test_read_line_strips_terminator() {
        let mut p = prompter("hello\r\nworld\n");
        assert_eq!(p.read_line("> ").unwrap(), "hello");
        assert_eq!(p.read_line("> ").unwrap(), "world");
        assert_eq!(output(p), "> > ");
    }

    #[test]
    fn test_read_line_at_eof() {
        let mut p = prompter("");
        assert!(matches!(p.read_line("> "), Err(Error::InputClosed)));
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut p = prompter("last");
        assert_eq!(p.read_line("").unwrap(), "last");
    }

    #[test]
    fn test_read_required_skips_blank() {
        let mut p = prompter("\n   \nvalue\n");
        assert_eq!(p.read_required("Name: ").unwrap(), "value");
        assert_eq!(output(p).matches("This field is required.").count(), 2);
    }

    #[test]
    fn test_choose_range() {
        let mut p = prompter("0\n5\nabc\n3\n");
        assert_eq!(p.choose("Pick: ", 4).unwrap(), 3);
        assert_eq!(output(p).matches("Invalid choice").count(), 3);
    }

    #[test]
    fn test_choose_or_cancel() {
        let mut p = prompter("7\n2\n0\n");
        assert_eq!(p.choose_or_cancel("Pick: ", 3).unwrap(), Some(2));
        assert_eq!(p.choose_or_cancel("Pick: ", 3).unwrap(), None);
        assert_eq!(output(p).matches("Invalid choice").count(), 1);
    }

    #[test]
    fn test_confirm() {
        let mut p = prompter("maybe\nY\nno\n");
        assert!(p.confirm("? ").unwrap());
        assert!(!p.confirm("? ").unwrap());
    }

    #[test]
    fn test_clear_respects_setting() {
        let mut p = prompter("");
        p.clear().unwrap();
        assert_eq!(output(p), "");

        let mut p = TerminalPrompter::new(&b""[..], Vec::new(), true);
        p.clear().unwrap();
        assert_eq!(String::from_utf8(p.into_output()).unwrap(), CLEAR_SCREEN);
    }
}
