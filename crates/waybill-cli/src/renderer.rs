//! Terminal output for follow-up listings and reports.
//!
//! Everything user-facing arrives as markdown from the core display
//! types; this renderer either styles it with termimad or passes it
//! through untouched for `--no-color` and piped output.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Renderer that switches between styled and plain text output.
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a renderer; with `rich_enabled` false the markdown is
    /// printed as-is.
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        // Item and step headings in blue; summary metadata (due dates,
        // pending markers) is bold and stands out in yellow.
        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            // Headers keep their hash symbols so listings stay scannable;
            // other lines go through inline markdown rendering.
            for line in markdown.lines() {
                if line.starts_with('#') {
                    print!("\x1b[34m{line}\x1b[0m");
                    println!();
                } else {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        } else {
            print!("{}", markdown);
        }
        Ok(())
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
    fn test_rich_renderer() {
        let renderer = TerminalRenderer::new(true);
        assert!(renderer.rich_enabled);
    }

    #[test]
    fn test_default_is_rich() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
    }
}
