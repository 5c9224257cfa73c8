use std::io::{self, BufRead, StdinLock, Stdout, Write};

use anyhow::{Context, Result, bail};
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};

use crate::game::Prompt;

/// Numbered-menu prompt over a line reader and a writer.
///
/// Options are shown starting at 1; the returned index starts at 0.
pub struct ConsolePrompt<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl ConsolePrompt<StdinLock<'static>, Stdout> {
    /// 标准输入输出，每屏之间清屏
    pub fn stdio() -> Self {
        Self {
            input: io::stdin().lock(),
            output: io::stdout(),
            clear_screen: true,
        }
    }
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            clear_screen: false,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn next_line(&mut self) -> Result<String> {
        write!(self.output, "> ")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            bail!("Input closed");
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl<R: BufRead, W: Write> Prompt for ConsolePrompt<R, W> {
    fn choose(&mut self, description: &str, options: &[&str]) -> Result<usize> {
        if options.is_empty() {
            bail!("No options offered for: {}", description);
        }

        loop {
            writeln!(self.output, "{}", description)?;
            for (i, option) in options.iter().enumerate() {
                writeln!(self.output, "{}. {}", i + 1, option)?;
            }

            let line = self.next_line()?;
            match line.trim().parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => return Ok(n - 1),
                _ => writeln!(self.output, "Invalid Input")?,
            }
        }
    }

    fn read_line(&mut self, description: &str) -> Result<String> {
        writeln!(self.output, "{}", description)?;
        self.next_line()
    }

    fn show(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        if !self.clear_screen {
            return Ok(());
        }
        writeln!(self.output, "Press Enter to continue...")?;
        self.next_line()?;
        execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompt(input: &str) -> ConsolePrompt<Cursor<Vec<u8>>, Vec<u8>> {
        ConsolePrompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn choices_are_one_based_on_screen() {
        let mut p = prompt("2\n");
        assert_eq!(p.choose("Play Again?", &["Yes", "No"]).unwrap(), 1);

        let out = String::from_utf8(p.into_output()).unwrap();
        assert!(out.contains("1. Yes\n2. No\n"));
    }

    #[test]
    fn invalid_input_asks_again() {
        let mut p = prompt("0\nthree\n3\n1\n");
        assert_eq!(p.choose("Pick", &["a", "b"]).unwrap(), 0);

        let out = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(out.matches("Invalid Input").count(), 3);
    }

    #[test]
    fn read_line_strips_the_newline() {
        let mut p = prompt("Sir Robin\r\n");
        assert_eq!(p.read_line("Name?").unwrap(), "Sir Robin");
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut p = prompt("");
        assert!(p.choose("Pick", &["a"]).is_err());
        assert!(p.read_line("Name?").is_err());
    }
}
