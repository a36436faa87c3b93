//! Terminal output for agenda and idea markdown.
//!
//! Rich mode renders through termimad line by line; `--no-color` (or
//! piped output) falls back to the raw markdown. Lines are classified
//! before styling because the agenda output is full of hashtag lines
//! (`#JetChicken #LondrinaPR`) that must not be mistaken for headers.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Renderer switching between styled and plain markdown output.
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        // The agenda views lean on bold labels and bulleted post lines.
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.bullet.set_fg(Color::Cyan);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Renders markdown to stdout.
    ///
    /// Headers keep their hash prefix and get a color by depth, so week,
    /// section and per-post boundaries stay visible when scrolling.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }
        for line in markdown.lines() {
            match header_depth(line) {
                Some(depth) => println!("\x1b[{}m{line}\x1b[0m", header_style(depth)),
                None => {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Markdown header depth of a line, if it is one. Requires a space after
/// the hashes so hashtag lines never count.
fn header_depth(line: &str) -> Option<usize> {
    let hashes = line.bytes().take_while(|b| *b == b'#').count();
    (hashes > 0 && line.as_bytes().get(hashes) == Some(&b' ')).then_some(hashes)
}

/// ANSI SGR parameters per header depth: bold cyan for week headers,
/// cyan for sections, yellow for the per-post headers below them.
fn header_style(depth: usize) -> &'static str {
    match depth {
        1 => "1;36",
        2 => "36",
        _ => "33",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashtag_lines_are_not_headers() {
        assert_eq!(header_depth("#JetChicken #LondrinaPR #FrangoFrito"), None);
        assert_eq!(header_depth("#"), None);
        assert_eq!(header_depth("sem hashes"), None);
    }

    #[test]
    fn test_header_depth_by_hash_count() {
        assert_eq!(header_depth("# Semana 2024-W10"), Some(1));
        assert_eq!(header_depth("## Dicas da semana"), Some(2));
        assert_eq!(header_depth("### Ter 05/03 — Reel"), Some(3));
    }

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
