//! URL pattern matching with wildcards and path parameters.

use crate::error::{Error, Result};
use regex::Regex;
use std::collections::HashMap;

/// A URL pattern compiled to an anchored regular expression.
///
/// Compilation happens once, at registration time; matching afterwards
/// is a single regex run. The pattern language:
///
/// * `**` matches any run of characters, `/` included
/// * `*` matches within one path segment
/// * `?` matches a single non-`/` character
/// * `{name}` matches one path segment and captures it as a parameter
///
/// Everything else is literal. Patterns match the full URL verbatim,
/// query string included; end a pattern with `**` to absorb whatever
/// query a request carries.
#[derive(Debug, Clone)]
pub struct UrlPattern {
    source: String,
    regex: Regex,
    param_names: Vec<String>,
}

impl UrlPattern {
    /// Compile `pattern`, rejecting malformed parameter segments.
    pub fn compile(pattern: &str) -> Result<Self> {
        let (regex_str, param_names) = translate(pattern)?;

        let regex = Regex::new(&format!("^{regex_str}$")).map_err(|err| Error::Pattern {
            pattern: pattern.to_string(),
            reason: err.to_string(),
        })?;

        Ok(Self {
            source: pattern.to_string(),
            regex,
            param_names,
        })
    }

    /// The pattern text as registered.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Match `url` against this pattern.
    ///
    /// Returns the captured path parameters on a match (empty when the
    /// pattern declares none), `None` otherwise.
    pub fn matches(&self, url: &str) -> Option<HashMap<String, String>> {
        let caps = self.regex.captures(url)?;

        let params = self
            .param_names
            .iter()
            .enumerate()
            .filter_map(|(i, name)| {
                caps.get(i + 1)
                    .map(|m| (name.clone(), m.as_str().to_owned()))
            })
            .collect();

        Some(params)
    }
}

fn translate(pattern: &str) -> Result<(String, Vec<String>)> {
    let mut param_names = Vec::new();
    let mut regex_str = String::new();
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '*' => {
                if chars.peek() == Some(&'*') {
                    chars.next();
                    regex_str.push_str(".*");
                } else {
                    regex_str.push_str("[^/]*");
                }
            }
            '?' => regex_str.push_str("[^/]"),
            '{' => {
                let name = take_param_name(pattern, &mut chars)?;
                param_names.push(name);
                regex_str.push_str("([^/]+)");
            }
            '.' | '+' | '^' | '$' | '(' | ')' | '[' | ']' | '|' | '\\' | '}' => {
                regex_str.push('\\');
                regex_str.push(c);
            }
            _ => regex_str.push(c),
        }
    }

    Ok((regex_str, param_names))
}

fn take_param_name(
    pattern: &str,
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
) -> Result<String> {
    let mut name = String::new();
    for c in chars.by_ref() {
        if c == '}' {
            if name.is_empty() {
                return Err(Error::Pattern {
                    pattern: pattern.to_string(),
                    reason: "empty `{}` parameter".to_string(),
                });
            }
            return Ok(name);
        }
        if !c.is_ascii_alphanumeric() && c != '_' {
            return Err(Error::Pattern {
                pattern: pattern.to_string(),
                reason: format!("invalid character `{c}` in parameter name"),
            });
        }
        name.push(c);
    }
    Err(Error::Pattern {
        pattern: pattern.to_string(),
        reason: "unclosed `{` parameter".to_string(),
    })
}
