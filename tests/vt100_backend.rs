//! Content-capture terminal backend for render tests.
//!
//! Wraps a `vt100::Parser` so the suite can assert against the text a real
//! terminal would show. The suite asserts on text only, so `draw` forwards
//! cursor movement and cell symbols and drops styling on the floor.

use std::io;

use ratatui::backend::Backend;
use ratatui::buffer::Cell;
use ratatui::layout::{Position, Size};

pub struct VT100Backend {
    parser: vt100::Parser,
    width: u16,
    height: u16,
}

impl VT100Backend {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            parser: vt100::Parser::new(height, width, 0),
            width,
            height,
        }
    }

    /// The screen text, rows joined with newlines.
    pub fn contents(&self) -> String {
        self.parser.screen().contents()
    }
}

impl Backend for VT100Backend {
    type Error = io::Error;

    fn draw<'a, I>(&mut self, content: I) -> io::Result<()>
    where
        I: Iterator<Item = (u16, u16, &'a Cell)>,
    {
        use crossterm::{Command, cursor};
        use std::fmt::Write as FmtWrite;

        let mut buf = String::new();
        let mut last_pos: Option<(u16, u16)> = None;
        for (x, y, cell) in content {
            if last_pos != Some((x, y)) {
                let _ = cursor::MoveTo(x, y).write_ansi(&mut buf);
            }
            let _ = write!(buf, "{}", cell.symbol());
            last_pos = Some((x + 1, y));
        }
        self.parser.process(buf.as_bytes());
        Ok(())
    }

    fn hide_cursor(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn show_cursor(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn get_cursor_position(&mut self) -> io::Result<Position> {
        let pos = self.parser.screen().cursor_position();
        Ok(Position::new(pos.1, pos.0))
    }

    fn set_cursor_position<P: Into<Position>>(&mut self, position: P) -> io::Result<()> {
        use crossterm::{Command, cursor};
        let pos = position.into();
        let mut buf = String::new();
        let _ = cursor::MoveTo(pos.x, pos.y).write_ansi(&mut buf);
        self.parser.process(buf.as_bytes());
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        use crossterm::{Command, terminal};
        let mut buf = String::new();
        let _ = terminal::Clear(terminal::ClearType::All).write_ansi(&mut buf);
        self.parser.process(buf.as_bytes());
        Ok(())
    }

    fn clear_region(&mut self, _clear_type: ratatui::backend::ClearType) -> io::Result<()> {
        // Content assertions never need partial clears.
        self.clear()
    }

    fn size(&self) -> io::Result<Size> {
        Ok(Size::new(self.width, self.height))
    }

    fn window_size(&mut self) -> io::Result<ratatui::backend::WindowSize> {
        Ok(ratatui::backend::WindowSize {
            columns_rows: Size::new(self.width, self.height),
            pixels: Size::new(self.width * 8, self.height * 16),
        })
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ratatui::Terminal;
    use ratatui::style::{Color, Modifier, Style};
    use ratatui::text::Span;
    use ratatui::widgets::Paragraph;

    #[test]
    fn captured_text_lands_where_it_was_drawn() {
        let mut terminal = Terminal::new(VT100Backend::new(25, 2)).unwrap();
        terminal
            .draw(|frame| {
                frame.render_widget(Paragraph::new("TERMINAL_ID: GHOST_01"), frame.area());
            })
            .unwrap();

        let contents = terminal.backend().contents();
        assert!(contents.starts_with("TERMINAL_ID: GHOST_01"), "{contents}");
    }

    #[test]
    fn styled_spans_capture_as_plain_text() {
        let mut terminal = Terminal::new(VT100Backend::new(20, 1)).unwrap();
        terminal
            .draw(|frame| {
                let span = Span::styled(
                    "AWAITING HANDLE...",
                    Style::default()
                        .fg(Color::Rgb(0, 240, 255))
                        .add_modifier(Modifier::BOLD),
                );
                frame.render_widget(Paragraph::new(span), frame.area());
            })
            .unwrap();

        assert_eq!(terminal.backend().contents(), "AWAITING HANDLE...");
    }
}
