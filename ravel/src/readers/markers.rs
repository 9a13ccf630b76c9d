//! Marker patterns for the noweb-style input format.

use once_cell::sync::Lazy;
use regex::Regex;

/// Chunk definition marker: `<<name>>=` or `<<syntax:name>>=` at line start.
pub static CHUNK_DEF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^<<(?:(?P<syntax>[^>:]*):)?(?P<name>[^>]+)>>=").unwrap());

/// Chunk end marker: `@` alone, or `@` followed by trailing prose.
///
/// `@foo` with no separating whitespace is ordinary content.
pub static CHUNK_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@(?:\s(?P<trailing>.*))?$").unwrap());

/// Reference line: a lone chunk invocation surrounded only by whitespace.
/// The optional syntax prefix is ignored for invocation.
pub static CHUNK_REF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<indent>\s*)<<(?:(?P<syntax>[^>:]*):)?(?P<name>[^>]+)>>\s*$").unwrap()
});

/// First-line directive, e.g. `# -*- literate: syntax=python encoding=utf-8 -*-`.
static DIRECTIVE: Lazy<Regex> = Lazy::new(|| Regex::new(r"literate:(?P<opts>.*)$").unwrap());

/// `key=value` pairs inside a directive.
static DIRECTIVE_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?P<key>[A-Za-z_][A-Za-z0-9_]*)=(?P<value>\S+)").unwrap());

/// The escape prefix that protects a literal leading `@`.
pub const ESCAPE_PREFIX: &str = "@@";

/// Defaults declared by a first-line directive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directive {
    pub syntax: Option<String>,
    pub encoding: Option<String>,
}

/// Parses a first-line directive.
///
/// Best effort by design: returns `None` unless the line contains a
/// `literate:` marker with at least one recognized key, in which case the
/// caller treats the line as ordinary prose.
pub fn parse_directive(line: &str) -> Option<Directive> {
    let caps = DIRECTIVE.captures(line)?;
    let opts = &caps["opts"];

    let mut directive = Directive::default();
    let mut recognized = false;

    for pair in DIRECTIVE_KEY.captures_iter(opts) {
        let value = pair["value"].to_string();
        match &pair["key"] {
            "syntax" => {
                directive.syntax = Some(value);
                recognized = true;
            }
            "encoding" => {
                directive.encoding = Some(value);
                recognized = true;
            }
            _ => {}
        }
    }

    recognized.then_some(directive)
}
