//! Header text to identifier conversion
//!
//! Raw CONTUR labels such as `MACH NO.`, `X/YO` or `C(Y)` are mapped to
//! identifiers made of ASCII letters, digits and underscores that start with
//! a letter and never end in an underscore. Leading characters that are not
//! letters are dropped, so `(IN)` becomes `IN`. Blank labels and labels that
//! collide within one table are replaced by generated `UntitledN` names.

use crate::constants::{PHRASE_REPLACEMENTS, PUNCTUATION_WORDS, UNTITLED_PREFIX};
use std::collections::{HashMap, HashSet};

/// Source of `UntitledN` placeholder names, shared across a whole parse
#[derive(Debug, Default, Clone)]
pub struct UntitledNames {
    next: usize,
}

impl UntitledNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next placeholder name that is not in `taken`
    pub fn next_free(&mut self, taken: &HashSet<String>) -> String {
        loop {
            let name = format!("{}{}", UNTITLED_PREFIX, self.next);
            self.next += 1;
            if !taken.contains(&name) {
                return name;
            }
        }
    }
}

/// Convert one raw label to an identifier; may return an empty string
pub fn sanitize_identifier(raw: &str) -> String {
    let mut text = raw.to_string();
    for (phrase, replacement) in PHRASE_REPLACEMENTS {
        text = text.replace(phrase, replacement);
    }

    let mut chars = text.chars();
    let mut ident = String::with_capacity(text.len() + 8);
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => ident.push(c),
        Some(_) => ident.push('_'),
        None => return ident,
    }

    for c in chars {
        if c.is_ascii_alphanumeric() {
            ident.push(c);
        } else if let Some((_, word)) = PUNCTUATION_WORDS.iter().find(|(p, _)| *p == c) {
            ident.push_str(word);
        } else {
            ident.push('_');
        }
    }

    let trimmed = ident
        .trim_end_matches('_')
        .trim_start_matches(|c: char| !c.is_ascii_alphabetic());
    canonical_name(trimmed).unwrap_or(trimmed).to_string()
}

/// Renames for recurring columns whose labels CONTUR prints truncated
fn canonical_name(ident: &str) -> Option<&'static str> {
    let squeezed: String = ident.chars().filter(|&c| c != '_').collect();
    if ident == "POI" {
        Some("POINT")
    } else if squeezed == "NTX" {
        Some("X")
    } else if squeezed == "NTXoverYO" {
        Some("X_over_YO")
    } else {
        None
    }
}

/// Sanitize a full table header
pub fn sanitize_headers(raw: &[String], untitled: &mut UntitledNames) -> Vec<String> {
    let names = raw.iter().map(|h| sanitize_identifier(h)).collect();
    make_unique(names, untitled)
}

/// Replace blank and repeated names with distinct placeholders
///
/// A repeated name is dropped from every column that carries it, the first
/// occurrence included.
pub fn make_unique(names: Vec<String>, untitled: &mut UntitledNames) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for name in &names {
        *counts.entry(name.as_str()).or_default() += 1;
    }
    let keep: Vec<bool> = names
        .iter()
        .map(|name| !name.is_empty() && counts[name.as_str()] == 1)
        .collect();

    let mut taken: HashSet<String> = names
        .iter()
        .zip(&keep)
        .filter(|(_, kept)| **kept)
        .map(|(name, _)| name.clone())
        .collect();

    names
        .into_iter()
        .zip(keep)
        .map(|(name, kept)| {
            if kept {
                name
            } else {
                let placeholder = untitled.next_free(&taken);
                taken.insert(placeholder.clone());
                placeholder
            }
        })
        .collect()
}
