//! The format-pattern mini-language: site extraction, decomposition,
//! composition, and message validation.
//!
//! A message template contains exactly one `{...}` substitution site. The
//! text between the braces is the pattern: an optional `:`-prefixed
//! minimum width, an optional `.`-prefixed precision, and a trailing type
//! tag (`d` for integers, `f` for floats). `"count: {:4d}"` and
//! `"loss {:7.3f}"` are typical messages.

use std::ops::Range;

use crate::error::{Result, WriterError};

/// The numeric kind a pattern formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Integer rendering, space-padded to the minimum width.
    Int,
    /// Fixed-point float rendering.
    Float,
}

impl Kind {
    /// Maps a pattern type tag to its kind. Tags are matched literally,
    /// with no case folding: `F` is not a float.
    pub fn from_tag(tag: char) -> Option<Kind> {
        match tag {
            'd' => Some(Kind::Int),
            'f' => Some(Kind::Float),
            _ => None,
        }
    }

    /// The pattern type tag for this kind.
    pub fn tag(self) -> char {
        match self {
            Kind::Int => 'd',
            Kind::Float => 'f',
        }
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            Kind::Int => "integer",
            Kind::Float => "float",
        }
    }
}

/// A substitution site found in a message: the byte range of the whole
/// `{...}` site and the pattern text between the braces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Site<'a> {
    pub range: Range<usize>,
    pub pattern: &'a str,
}

/// A fully decomposed, type-checked single-site message.
pub(crate) struct Parsed<'a> {
    pub site: Site<'a>,
    pub kind: Kind,
    pub width: Option<usize>,
    pub precision: Option<usize>,
}

/// Scans a message for `{...}` substitution sites.
///
/// Sites never nest: a `{` inside an open site restarts the site at the
/// inner brace, so `"{a{b}"` yields the single site `b`.
pub(crate) fn find_sites(message: &str) -> Vec<Site<'_>> {
    let mut sites = Vec::new();
    let mut open: Option<usize> = None;
    for (i, c) in message.char_indices() {
        match c {
            '{' => open = Some(i),
            '}' => {
                if let Some(start) = open.take() {
                    sites.push(Site {
                        range: start..i + 1,
                        pattern: &message[start + 1..i],
                    });
                }
            }
            _ => {}
        }
    }
    sites
}

/// Splits a pattern into its `(tag, width, precision)` parts.
///
/// This is the reverse of [`compose`]. The decomposition is purely
/// syntactic: the tag is the trailing character whatever it may be, the
/// width is the first `:`-prefixed digit run, and the precision is the
/// first `.`-prefixed digit run. Type legality is checked by [`validate`],
/// not here.
///
/// # Example
///
/// ```rust
/// use tidyline::decompose;
///
/// assert_eq!(decompose(":7.2f"), (Some('f'), Some(7), Some(2)));
/// assert_eq!(decompose(":5d"), (Some('d'), Some(5), None));
/// assert_eq!(decompose(":f"), (Some('f'), None, None));
/// ```
pub fn decompose(pattern: &str) -> (Option<char>, Option<usize>, Option<usize>) {
    let tag = pattern.chars().last();
    let width = digit_run_after(pattern, b':');
    let precision = digit_run_after(pattern, b'.');
    (tag, width, precision)
}

/// Finds the first digit run directly following `marker`, if any.
fn digit_run_after(pattern: &str, marker: u8) -> Option<usize> {
    let bytes = pattern.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b != marker {
            continue;
        }
        let start = i + 1;
        let mut end = start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end > start {
            // an unrepresentable width (doesn't fit usize) counts as unset
            return pattern[start..end].parse().ok();
        }
    }
    None
}

/// Composes a pattern string from its parts.
///
/// The reverse of [`decompose`]. Absent parts are omitted; with every part
/// absent the result is the bare `"{:}"` placeholder.
///
/// # Example
///
/// ```rust
/// use tidyline::compose;
///
/// assert_eq!(compose(Some('f'), Some(7), Some(2)), "{:7.2f}");
/// assert_eq!(compose(Some('d'), Some(5), None), "{:5d}");
/// assert_eq!(compose(None, None, None), "{:}");
/// ```
pub fn compose(tag: Option<char>, width: Option<usize>, precision: Option<usize>) -> String {
    let tag = tag.map(String::from).unwrap_or_default();
    let width = width.map(|w| w.to_string()).unwrap_or_default();
    match precision {
        Some(precision) => format!("{{:{width}.{precision}{tag}}}"),
        None => format!("{{:{width}{tag}}}"),
    }
}

/// Parses and type-checks a message, returning its single site and the
/// decomposed pattern parts.
pub(crate) fn parse_message(message: &str) -> Result<Parsed<'_>> {
    let mut sites = find_sites(message);
    if sites.is_empty() {
        return Err(WriterError::NoPattern {
            message: message.to_string(),
        });
    }
    if sites.len() > 1 {
        let patterns = sites
            .iter()
            .map(|site| site.pattern)
            .collect::<Vec<_>>()
            .join(", ");
        return Err(WriterError::MultiplePatterns {
            message: message.to_string(),
            patterns,
        });
    }

    let site = sites.remove(0);
    let (tag, width, precision) = decompose(site.pattern);
    let Some(kind) = tag.and_then(Kind::from_tag) else {
        return Err(WriterError::UnsupportedType {
            tag: tag.map(String::from).unwrap_or_default(),
        });
    };
    if precision.is_some() && kind != Kind::Float {
        return Err(WriterError::PrecisionOnNonFloat {
            tag: kind.tag().to_string(),
        });
    }

    Ok(Parsed {
        site,
        kind,
        width,
        precision,
    })
}

/// Checks that a message is a valid single-value template.
///
/// A valid message contains exactly one `{...}` substitution site whose
/// pattern carries a supported type tag, with a precision only when the
/// tag is `f`.
///
/// # Example
///
/// ```rust
/// use tidyline::validate;
///
/// assert!(validate("count: {:4d}").is_ok());
/// assert!(validate("no pattern here").is_err());
/// assert!(validate("{:5.5d}").is_err()); // precision on an integer
/// ```
pub fn validate(message: &str) -> Result<()> {
    parse_message(message).map(|_| ())
}
