//! Terminal rendering module for rich output
//!
//! Catalog listings and messages are markdown and go through termimad.
//! Itinerary blocks are printed as they are, indentation included, with
//! only the header line of each leg highlighted.

use roteiro_core::format::MARKER;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) {
        if self.rich_enabled {
            for line in markdown.lines() {
                if line.starts_with('#') {
                    println!("\x1b[34m{line}\x1b[0m");
                } else {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        } else {
            print!("{markdown}");
        }
    }

    /// Render itinerary text, keeping its layout
    pub fn render_itinerary(&self, text: &str) {
        if self.rich_enabled {
            for line in text.lines() {
                if line.contains(MARKER) {
                    println!("\x1b[1;36m{line}\x1b[0m");
                } else {
                    println!("{line}");
                }
            }
        } else {
            print!("{text}");
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
    }

    #[test]
    fn test_default_is_rich() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
    }
}
