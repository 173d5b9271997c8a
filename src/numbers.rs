//! Leading-number extraction for user-typed field values
//!
//! Numbers are read the way the browser's `parseFloat` / `parseInt` read
//! them: leading whitespace is skipped and the longest numeric prefix counts.
//! Text with no numeric prefix yields `None`.

use std::sync::OnceLock;

use regex::Regex;

static LEXER: OnceLock<Option<NumberLexer>> = OnceLock::new();

/// Compiled patterns, built once per page
struct NumberLexer {
    float_re: Regex,
    int_re: Regex,
    percent_re: Regex,
}

impl NumberLexer {
    fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            float_re: Regex::new(r"^\s*([+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?))")?,
            int_re: Regex::new(r"^\s*([+-]?[0-9]+)")?,
            percent_re: Regex::new(r"^\s*([+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+))\s*%?\s*$")?,
        })
    }
}

fn lexer() -> Option<&'static NumberLexer> {
    LEXER
        .get_or_init(|| match NumberLexer::new() {
            Ok(lexer) => Some(lexer),
            Err(e) => {
                crate::console_error!("[Numbers] pattern failed to compile: {}", e);
                None
            }
        })
        .as_ref()
}

fn capture<'a>(re: &Regex, raw: &'a str) -> Option<&'a str> {
    re.captures(raw).and_then(|caps| caps.get(1)).map(|m| m.as_str())
}

/// Longest decimal prefix (`"7.5 / 10"` -> 7.5, `"-Infinity"` -> -inf)
pub fn parse_float_prefix(raw: &str) -> Option<f64> {
    let number = capture(&lexer()?.float_re, raw)?;
    match number.strip_suffix("Infinity") {
        Some("-") => Some(f64::NEG_INFINITY),
        Some(_) => Some(f64::INFINITY),
        None => number.parse().ok(),
    }
}

/// Longest integer prefix (`"17.9"` -> 17)
pub fn parse_int_prefix(raw: &str) -> Option<f64> {
    capture(&lexer()?.int_re, raw)?.parse().ok()
}

/// A whole value of the form `75`, `75%` or ` 62.5 % `
pub fn parse_percent(raw: &str) -> Option<f64> {
    capture(&lexer()?.percent_re, raw)?.parse().ok()
}
