//! Markdown rendering of chunk declarations.

use super::Formatter;
use crate::model::{Chunk, OutputLine};

/// The built-in Markdown formatter.
///
/// Renders each chunk as a heading followed by its body: a fenced block
/// annotated with the syntax tag when one is in effect, or a 4-space
/// indented block otherwise. With `add_links`, a deterministic anchor
/// derived from the chunk name precedes the heading.
#[derive(Debug, Clone, Default)]
pub struct MarkdownFormatter {
    add_links: bool,
}

impl MarkdownFormatter {
    /// Creates a formatter; `add_links` controls anchor generation.
    pub fn new(add_links: bool) -> Self {
        Self { add_links }
    }
}

impl Formatter for MarkdownFormatter {
    fn render(&self, chunk: &Chunk, syntax: Option<&str>) -> Vec<OutputLine> {
        // Only named chunks are declared in the root flow.
        let Some(name) = chunk.name.as_ref() else {
            return Vec::new();
        };

        let at = |text: String| OutputLine::new(chunk.location.clone(), text);
        let mut out = Vec::new();

        if self.add_links {
            out.push(at(format!("<a id=\"{}\"></a>", name.slug())));
        }
        out.push(at(format!("## {}", name)));
        out.push(at(String::new()));

        match syntax {
            Some(tag) => {
                out.push(at(format!("```{}", tag)));
                for line in chunk.lines() {
                    out.push(OutputLine::new(line.location().clone(), line.source_text()));
                }
                out.push(at("```".to_string()));
            }
            None => {
                for line in chunk.lines() {
                    let text = line.source_text();
                    let rendered = if text.is_empty() {
                        String::new()
                    } else {
                        format!("    {}", text)
                    };
                    out.push(OutputLine::new(line.location().clone(), rendered));
                }
            }
        }

        out.push(at(String::new()));
        out
    }
}
