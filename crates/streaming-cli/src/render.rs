//! Single-line terminal progress bar for countdowns.

use crossterm::{
    cursor, queue,
    style::{Print, Stylize},
    terminal::{Clear, ClearType},
};
use std::io::Write;
use std::time::{Duration, Instant};
use streaming_core::pacing::ProgressSink;
use streaming_core::Result;

const BAR_WIDTH: u64 = 20;
const INITIAL_LABEL: &str = "Booting...";
/// Keeps a shorter label from leaving remnants of a longer one.
const LABEL_PADDING: &str = "   ";

pub struct TerminalBar<W: Write> {
    out: W,
    title: String,
    total: u64,
    position: u64,
    label: String,
    started: Option<Instant>,
}

impl<W: Write> TerminalBar<W> {
    pub fn new(out: W, title: impl Into<String>) -> Self {
        Self {
            out,
            title: title.into(),
            total: 0,
            position: 0,
            label: INITIAL_LABEL.to_string(),
            started: None,
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }

    fn line(&self, elapsed: Option<Duration>) -> String {
        let total = self.total.max(1);
        let percent = self.position * 100 / total;
        let filled = (self.position * BAR_WIDTH / total).min(BAR_WIDTH);
        let bar = "█".repeat(filled as usize);
        let rest = " ".repeat((BAR_WIDTH - filled) as usize);

        let mut line = format!(
            "{percent:>3}% |{}{rest}| ({}/{})",
            bar.as_str().green(),
            self.position,
            self.total
        );
        if let Some(elapsed) = elapsed {
            line.push_str(&format!(" [{}]", format_elapsed(elapsed)));
        }
        line.push(' ');
        line.push_str(&self.label);
        line
    }

    fn draw(&mut self, elapsed: Option<Duration>) -> Result<()> {
        let line = self.line(elapsed);
        queue!(
            self.out,
            cursor::MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            Print(line)
        )?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> ProgressSink for TerminalBar<W> {
    fn begin(&mut self, total: u64) -> Result<()> {
        self.total = total;
        self.position = 0;
        self.started = Some(Instant::now());
        queue!(self.out, Print(format!("\n   {}\n\n", self.title)))?;
        self.draw(None)
    }

    fn advance(&mut self, delta: u64) -> Result<()> {
        self.position = (self.position + delta).min(self.total);
        self.draw(None)
    }

    fn set_label(&mut self, label: &str) -> Result<()> {
        self.label = format!("{label}{LABEL_PADDING}");
        self.draw(None)
    }

    fn finish(&mut self) -> Result<()> {
        let elapsed = self.started.map(|s| s.elapsed()).unwrap_or_default();
        self.draw(Some(elapsed))?;
        queue!(self.out, Print("\nDone!\n"))?;
        self.out.flush()?;
        Ok(())
    }
}

fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    if secs >= 60 {
        format!("{}m{:02}s", secs / 60, secs % 60)
    } else {
        format!("{secs}s")
    }
}
