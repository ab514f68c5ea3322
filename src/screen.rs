//! Presentation adapters.
//!
//! A [`Screen`] receives the calculator's [`View`] after every event that
//! changed something. Nothing else in the crate knows how it is drawn.

use crate::core::View;
use std::io::Write;
use tracing::warn;

pub trait Screen {
    fn render(&mut self, view: &View);
}

/// Headless screen that keeps every frame it was asked to draw.
#[derive(Debug, Default)]
pub struct MemoryScreen {
    frames: Vec<View>,
}

impl MemoryScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[View] {
        &self.frames
    }

    pub fn last(&self) -> Option<&View> {
        self.frames.last()
    }
}

impl Screen for MemoryScreen {
    fn render(&mut self, view: &View) {
        self.frames.push(view.clone());
    }
}

/// Text screen: the secondary line above the primary one, right-aligned.
pub struct WriterScreen<W: Write> {
    out: W,
    width: usize,
}

impl<W: Write> WriterScreen<W> {
    pub fn new(out: W, width: usize) -> Self {
        Self { out, width }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, view: &View) -> std::io::Result<()> {
        let width = self.width;
        writeln!(self.out, "{:>width$}", view.secondary)?;
        writeln!(self.out, "{:>width$}", view.primary)?;
        self.out.flush()
    }
}

impl<W: Write> Screen for WriterScreen<W> {
    fn render(&mut self, view: &View) {
        if let Err(e) = self.draw(view) {
            warn!(error = %e, "Failed to draw calculator display");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(primary: &str, secondary: &str) -> View {
        View {
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }

    #[test]
    fn memory_screen_records_frames_in_order() {
        let mut screen = MemoryScreen::new();
        screen.render(&view("1", ""));
        screen.render(&view("12", ""));

        assert_eq!(screen.frames().len(), 2);
        assert_eq!(screen.last(), Some(&view("12", "")));
    }

    #[test]
    fn writer_screen_right_aligns_both_lines() {
        let mut screen = WriterScreen::new(Vec::new(), 8);
        screen.render(&view("1,234", "56 ^"));

        let text = String::from_utf8(screen.into_inner()).unwrap();
        assert_eq!(text, "    56 ^\n   1,234\n");
    }

    #[test]
    fn writer_screen_blank_secondary_line() {
        let mut screen = WriterScreen::new(Vec::new(), 4);
        screen.render(&view("0", ""));

        let text = String::from_utf8(screen.into_inner()).unwrap();
        assert_eq!(text, "    \n   0\n");
    }
}
