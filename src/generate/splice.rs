//! Named-slot splicing for hand-written pages.
//!
//! A page marks an editable region with a pair of comments:
//!
//! ```html
//! <h1 class="text-xl"><!-- slot:profile-name -->Old Name<!-- /slot:profile-name --></h1>
//! ```
//!
//! Filling a slot replaces only the text between the markers; the markers stay
//! so the page can be regenerated any number of times. A slot may appear
//! several times in one page, every occurrence is filled.

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpliceError {
    #[error("slot `{0}` not found")]
    Missing(String),

    #[error("slot `{0}` has no closing marker")]
    Unclosed(String),
}

fn open_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<!--[ \t\r\n]*slot:([A-Za-z0-9_-]+)[ \t\r\n]*-->").unwrap())
}

fn close_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<!--[ \t\r\n]*/slot:([A-Za-z0-9_-]+)[ \t\r\n]*-->").unwrap())
}

/// Replace the body of every `name` slot in `html` with `body`.
pub fn fill_slot(html: &str, name: &str, body: &str) -> Result<String, SpliceError> {
    let mut out = String::with_capacity(html.len() + body.len());
    let mut cursor = 0;
    let mut filled = 0;

    let opens = open_re()
        .captures_iter(html)
        .filter(|caps| &caps[1] == name)
        .filter_map(|caps| caps.get(0));

    for open in opens {
        // nested or already consumed by a previous occurrence
        if open.start() < cursor {
            continue;
        }
        let close = close_re()
            .captures_iter(&html[open.end()..])
            .find(|caps| &caps[1] == name)
            .and_then(|caps| caps.get(0))
            .ok_or_else(|| SpliceError::Unclosed(name.to_string()))?;

        out.push_str(&html[cursor..open.end()]);
        out.push_str(body);
        out.push_str(close.as_str());
        cursor = open.end() + close.end();
        filled += 1;
    }

    if filled == 0 {
        return Err(SpliceError::Missing(name.to_string()));
    }

    out.push_str(&html[cursor..]);
    Ok(out)
}

/// Names of all slots opened in `html`, in order, without duplicates.
pub fn slot_names(html: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in open_re().captures_iter(html) {
        let name = &caps[1];
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}
