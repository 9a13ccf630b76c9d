//! Tangle algorithm: recursive, streaming expansion of chunk references.

use super::chunk::ChunkName;
use super::document::Document;
use super::line::{Line, OutputLine};
use crate::errors::{RavelError, Result};
use crate::text_location::TextLocation;

/// Starts tangling the named chunk.
///
/// Returns a lazy iterator over expanded output lines; nothing is expanded
/// until the iterator is pulled. Fails immediately with
/// [`RavelError::NoSuchTangleTarget`] if the chunk does not exist.
///
/// `max_depth` bounds the reference nesting; a chunk that transitively
/// references itself runs into the limit instead of recursing forever.
pub fn tangle<'a>(
    doc: &'a Document,
    name: &ChunkName,
    max_depth: usize,
) -> Result<Tangle<'a>> {
    let chunk = doc
        .get(name)
        .ok_or_else(|| RavelError::NoSuchTangleTarget(name.clone()))?;

    tracing::debug!(chunk = %name, max_depth, "tangling");

    Ok(Tangle {
        doc,
        max_depth,
        stack: vec![Frame {
            lines: chunk.lines.iter(),
            indent: String::new(),
        }],
        failed: false,
    })
}

/// One level of the expansion: the remaining lines of a chunk plus the
/// indentation accumulated on the way in.
#[derive(Debug)]
struct Frame<'a> {
    lines: std::slice::Iter<'a, Line>,
    indent: String,
}

/// Streaming tangle expansion.
///
/// Yields `Ok(OutputLine)` per expanded line, each carrying the 1-based
/// source position of the line it came from. On an undefined reference or an
/// exhausted depth budget it yields one `Err` and then fuses.
#[derive(Debug)]
pub struct Tangle<'a> {
    doc: &'a Document,
    max_depth: usize,
    stack: Vec<Frame<'a>>,
    failed: bool,
}

/// What the current frame asks the driver to do next.
enum Step<'a> {
    Pop,
    Skip,
    Emit(OutputLine),
    Enter {
        name: &'a ChunkName,
        indent: String,
        location: &'a TextLocation,
    },
}

impl<'a> Iterator for Tangle<'a> {
    type Item = Result<OutputLine>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            let step = {
                let frame = self.stack.last_mut()?;
                match frame.lines.next() {
                    None => Step::Pop,
                    Some(Line::Reference {
                        name,
                        indent,
                        location,
                    }) => Step::Enter {
                        name,
                        indent: format!("{}{}", frame.indent, indent),
                        location,
                    },
                    Some(Line::Code { text, location }) => {
                        // Blank lines stay unindented so the output carries
                        // no trailing whitespace.
                        let rendered = if text.is_empty() {
                            String::new()
                        } else {
                            format!("{}{}", frame.indent, text)
                        };
                        Step::Emit(OutputLine::new(location.clone(), rendered))
                    }
                    // Root-only kinds never appear in named chunks.
                    Some(_) => Step::Skip,
                }
            };

            match step {
                Step::Pop => {
                    self.stack.pop();
                }
                Step::Skip => {}
                Step::Emit(line) => return Some(Ok(line)),
                Step::Enter {
                    name,
                    indent,
                    location,
                } => {
                    let Some(chunk) = self.doc.get(name) else {
                        self.failed = true;
                        return Some(Err(RavelError::UndefinedChunk {
                            name: name.clone(),
                            location: location.clone(),
                        }));
                    };
                    if self.stack.len() >= self.max_depth {
                        self.failed = true;
                        return Some(Err(RavelError::ExpansionDepthExceeded {
                            name: name.clone(),
                            depth: self.max_depth,
                            location: location.clone(),
                        }));
                    }
                    self.stack.push(Frame {
                        lines: chunk.lines.iter(),
                        indent,
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{parse, tangle_to_string};
    use pretty_assertions::assert_eq;

    const MAX_DEPTH: usize = 64;

    #[test]
    fn test_tangle_simple() {
        let doc = parse("<<main>>=\nprint('hello')\nprint('world')\n@\n");
        let result = tangle_to_string(&doc, "main").unwrap();
        assert_eq!(result, "print('hello')\nprint('world')");
    }

    #[test]
    fn test_tangle_reference_indent() {
        let doc = parse("<<X>>=\nhello\n@\n<<Y>>=\n  <<X>>\n@\n");
        let result = tangle_to_string(&doc, "Y").unwrap();
        assert_eq!(result, "  hello");
    }

    #[test]
    fn test_tangle_indent_accumulates() {
        let doc = parse(concat!(
            "<<main>>=\n",
            "  <<inner>>\n",
            "@\n",
            "<<inner>>=\n",
            "    <<deepest>>\n",
            "@\n",
            "<<deepest>>=\n",
            "deep\n",
            "@\n",
        ));
        let result = tangle_to_string(&doc, "main").unwrap();
        // 2 + 4 spaces of reference-site indentation.
        assert_eq!(result, "      deep");
    }

    #[test]
    fn test_tangle_forward_reference() {
        let doc = parse("<<main>>=\n<<later>>\n@\n<<later>>=\ndefined afterwards\n@\n");
        let result = tangle_to_string(&doc, "main").unwrap();
        assert_eq!(result, "defined afterwards");
    }

    #[test]
    fn test_tangle_undefined_chunk_cites_line() {
        let doc = parse("<<A>>=\n<<B>>\n@\n");
        let err = tangle_to_string(&doc, "A").unwrap_err();
        match err {
            RavelError::UndefinedChunk { name, location } => {
                assert_eq!(name.as_str(), "B");
                assert_eq!(location.line, 2);
            }
            other => panic!("expected UndefinedChunk, got {:?}", other),
        }
    }

    #[test]
    fn test_tangle_no_such_target() {
        let doc = parse("<<main>>=\ncode\n@\n");
        let err = tangle(&doc, &ChunkName::new("nonexistent"), MAX_DEPTH).unwrap_err();
        assert!(matches!(err, RavelError::NoSuchTangleTarget(_)));
    }

    #[test]
    fn test_tangle_self_reference_hits_depth_limit() {
        let doc = parse("<<A>>=\n<<A>>\n@\n");
        let err = tangle_to_string(&doc, "A").unwrap_err();
        assert!(matches!(err, RavelError::ExpansionDepthExceeded { .. }));
    }

    #[test]
    fn test_tangle_mutual_recursion_hits_depth_limit() {
        let doc = parse("<<A>>=\n<<B>>\n@\n<<B>>=\n<<A>>\n@\n");
        let err = tangle_to_string(&doc, "A").unwrap_err();
        assert!(matches!(err, RavelError::ExpansionDepthExceeded { .. }));
    }

    #[test]
    fn test_tangle_fuses_after_error() {
        let doc = parse("<<A>>=\n<<B>>\nnever reached\n@\n");
        let mut iter = tangle(&doc, &ChunkName::new("A"), MAX_DEPTH).unwrap();
        assert!(iter.next().unwrap().is_err());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_tangle_blank_lines_unindented() {
        let doc = parse("<<main>>=\n  <<body>>\n@\n<<body>>=\nfirst\n\nsecond\n@\n");
        let result = tangle_to_string(&doc, "main").unwrap();
        assert_eq!(result, "  first\n\n  second");
    }

    #[test]
    fn test_tangle_escaped_at() {
        let doc = parse("<<main>>=\n@@foo\n@\n");
        let result = tangle_to_string(&doc, "main").unwrap();
        assert_eq!(result, "@foo");
    }

    #[test]
    fn test_tangle_line_positions() {
        let doc = parse("<<main>>=\nalpha\n<<body>>\n@\n<<body>>=\nbeta\n@\n");
        let lines: Vec<_> = tangle(&doc, &ChunkName::new("main"), MAX_DEPTH)
            .unwrap()
            .collect::<Result<Vec<_>>>()
            .unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "alpha");
        assert_eq!(lines[0].location.line, 2);
        assert_eq!(lines[1].text, "beta");
        assert_eq!(lines[1].location.line, 6);
    }

    #[test]
    fn test_tangle_is_deterministic() {
        let input = "<<main>>=\n  <<a>>\n<<b>>\n@\n<<a>>=\nalpha\n@\n<<b>>=\nbeta\n@\n";
        let doc = parse(input);
        let first = tangle_to_string(&doc, "main").unwrap();
        let second = tangle_to_string(&doc, "main").unwrap();
        assert_eq!(first, second);
        assert_eq!(first, "  alpha\nbeta");
    }

    #[test]
    fn test_tangle_is_lazy() {
        // The undefined reference comes after the first line, so pulling a
        // single line must succeed.
        let doc = parse("<<main>>=\nfirst\n<<missing>>\n@\n");
        let mut iter = tangle(&doc, &ChunkName::new("main"), MAX_DEPTH).unwrap();
        assert_eq!(iter.next().unwrap().unwrap().text, "first");
        assert!(iter.next().unwrap().is_err());
    }
}
