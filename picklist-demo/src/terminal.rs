use std::io::{self, Write};

use crossterm::{
    cursor, event, execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal,
};

use crate::render::{Frame, SpanStyle};

/// Raw-mode terminal on the alternate screen with mouse capture.
/// Restores the terminal on drop.
pub struct Terminal {
    stdout: io::Stdout,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        Ok(Self { stdout })
    }

    pub fn draw(&mut self, frame: &Frame) -> io::Result<()> {
        queue!(self.stdout, terminal::Clear(terminal::ClearType::All))?;

        for (row, line) in frame.lines.iter().enumerate() {
            queue!(self.stdout, cursor::MoveTo(0, row as u16))?;
            for span in &line.spans {
                match span.style {
                    SpanStyle::Plain => {}
                    SpanStyle::Dim => queue!(self.stdout, SetAttribute(Attribute::Dim))?,
                    SpanStyle::Bold => queue!(self.stdout, SetAttribute(Attribute::Bold))?,
                    SpanStyle::Reverse => queue!(self.stdout, SetAttribute(Attribute::Reverse))?,
                    SpanStyle::Underline => {
                        queue!(self.stdout, SetAttribute(Attribute::Underlined))?
                    }
                }
                queue!(
                    self.stdout,
                    Print(&span.text),
                    SetAttribute(Attribute::Reset)
                )?;
            }
        }

        self.stdout.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
