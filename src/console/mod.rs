//! Line-oriented terminal I/O.
//!
//! Every interactive flow talks to a [`Console`] instead of stdin/stdout
//! directly, so the same code runs against a real terminal or a scripted
//! buffer.

pub(crate) mod format;
pub(crate) mod theme;

use anyhow::Result;
use std::fmt::Display;
use std::io::{self, BufRead, Write};

pub(crate) const RULE_WIDTH: usize = 42;

pub(crate) struct Console<R, W> {
    reader: R,
    writer: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    pub(crate) fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub(crate) fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Read one trimmed line. `None` at end of input. Bytes that are not
    /// UTF-8 become U+FFFD, so the caller sees an unrecognized answer.
    pub(crate) fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }

    /// Print `message` without a newline, ready for the answer.
    pub(crate) fn ask(&mut self, message: &str) -> Result<()> {
        write!(self.writer, "{}", theme::prompt_style(message))?;
        self.writer.flush()?;
        Ok(())
    }

    /// [`ask`](Self::ask) and read the answer. End of input reads as an
    /// empty answer.
    pub(crate) fn prompt(&mut self, message: &str) -> Result<String> {
        self.ask(message)?;
        Ok(self.read_line()?.unwrap_or_default())
    }

    pub(crate) fn line(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.writer, "{}", theme::normal_style(text))?;
        Ok(())
    }

    pub(crate) fn blank(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        Ok(())
    }

    /// A title on its own line after a blank line, underlined with `rule`.
    pub(crate) fn heading(&mut self, title: &str, rule: char) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", theme::heading_style(title))?;
        writeln!(
            self.writer,
            "{}",
            theme::heading_style(rule.to_string().repeat(RULE_WIDTH))
        )?;
        Ok(())
    }

    /// A section title without an underline.
    pub(crate) fn title(&mut self, title: &str) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", theme::heading_style(title))?;
        Ok(())
    }

    /// Header of one group inside a listing.
    pub(crate) fn group(&mut self, title: impl Display) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", theme::group_style(title))?;
        Ok(())
    }

    pub(crate) fn success(&mut self, message: impl Display) -> Result<()> {
        writeln!(self.writer, "{}", theme::success_style(format!("✅ {message}")))?;
        Ok(())
    }

    pub(crate) fn error(&mut self, message: impl Display) -> Result<()> {
        writeln!(self.writer, "{}", theme::error_style(format!("❌ {message}")))?;
        Ok(())
    }

    /// Informational message, e.g. when there is nothing to show yet.
    pub(crate) fn notice(&mut self, message: impl Display) -> Result<()> {
        writeln!(self.writer, "{}", theme::notice_style(format!("⚠ {message}")))?;
        Ok(())
    }

    pub(crate) fn good(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.writer, "{}", theme::success_style(text))?;
        Ok(())
    }

    pub(crate) fn bad(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.writer, "{}", theme::error_style(text))?;
        Ok(())
    }
}

#[cfg(test)]
impl<R> Console<R, Vec<u8>> {
    pub(crate) fn output(&self) -> String {
        String::from_utf8_lossy(&self.writer).into_owned()
    }
}

#[cfg(test)]
pub(crate) fn scripted(lines: &[&str]) -> Console<io::Cursor<Vec<u8>>, Vec<u8>> {
    let mut input = lines.join("\n");
    input.push('\n');
    Console::new(io::Cursor::new(input.into_bytes()), Vec::new())
}
