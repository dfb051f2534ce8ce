//! `{$name}` argument substitution.
//!
//! Substitution is a single pass: replacement values are never rescanned,
//! so an argument containing `{$other}` is inserted literally.

use regex::{Captures, Regex};
use std::sync::OnceLock;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

fn placeholder_regex() -> &'static Regex {
    PLACEHOLDER_REGEX
        .get_or_init(|| Regex::new(r"\{\$([A-Za-z_][A-Za-z0-9_-]*)\}").unwrap())
}

/// Replace each `{$name}` token with the matching argument.
///
/// Tokens with no matching argument are left as-is.
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    placeholder_regex()
        .replace_all(template, |caps: &Captures| {
            let name = &caps[1];
            args.iter()
                .find(|(arg, _)| *arg == name)
                .map(|(_, value)| (*value).to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Names of all placeholders in a template, sorted and deduplicated.
pub fn placeholders(template: &str) -> Vec<String> {
    let mut names: Vec<String> = placeholder_regex()
        .captures_iter(template)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
        .collect();
    names.sort();
    names.dedup();
    names
}
