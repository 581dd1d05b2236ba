//! Stub file parsing (YAML/JSON/JSONC).

use crate::config::error::ConfigError;
use crate::config::stub::StubSet;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Stub file type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StubFileType {
    Yaml,
    Json,
    Jsonc,
    Unknown,
}

/// Get stub file type from path extension
pub fn get_file_type(path: &str) -> StubFileType {
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "yaml" | "yml" => StubFileType::Yaml,
        "json" => StubFileType::Json,
        "jsonc" => StubFileType::Jsonc,
        _ => StubFileType::Unknown,
    }
}

/// Strip `//` and `/* */` comments from JSONC content.
///
/// String literals pass through untouched, escaped quotes included.
/// Line terminators after a `//` comment are kept so parse errors still
/// point at the right line.
pub fn strip_json_comments(content: &str) -> String {
    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    let mut in_string = false;
    let mut escaped = false;

    while let Some(c) = chars.next() {
        if in_string {
            result.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                result.push(c);
            }
            '/' if chars.peek() == Some(&'/') => {
                chars.next();
                for c in chars.by_ref() {
                    if c == '\n' || c == '\r' {
                        result.push(c);
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                for c in chars.by_ref() {
                    if prev == '*' && c == '/' {
                        break;
                    }
                    prev = c;
                }
            }
            _ => result.push(c),
        }
    }

    result
}

/// Parse JSON content
pub fn parse_json<T: DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    serde_json::from_str(content).map_err(ConfigError::from)
}

/// Parse JSONC content (JSON with comments)
pub fn parse_jsonc<T: DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let stripped = strip_json_comments(content);
    serde_json::from_str(&stripped).map_err(ConfigError::from)
}

/// Parse YAML content
pub fn parse_yaml<T: DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    serde_yaml::from_str(content).map_err(ConfigError::from)
}

fn parse_document<T: DeserializeOwned>(content: &str, path: &str) -> Result<T, ConfigError> {
    match get_file_type(path) {
        StubFileType::Yaml => parse_yaml(content),
        StubFileType::Json => parse_json(content),
        StubFileType::Jsonc => parse_jsonc(content),
        StubFileType::Unknown => Err(ConfigError::UnknownFileType(path.to_string())),
    }
}

/// Parse a stub set, choosing the format from the path extension.
///
/// Every stub is validated; a set with an ambiguous stub fails as a
/// whole.
pub fn parse_stub_set(content: &str, path: &str) -> Result<StubSet, ConfigError> {
    let set: StubSet = parse_document(content, path)?;
    for stub in &set.stubs {
        stub.validate()?;
    }
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("stubs.yaml", StubFileType::Yaml)]
    #[case("stubs.YAML", StubFileType::Yaml)]
    #[case("stubs.yml", StubFileType::Yaml)]
    #[case("stubs.json", StubFileType::Json)]
    #[case("stubs.JSON", StubFileType::Json)]
    #[case("stubs.jsonc", StubFileType::Jsonc)]
    #[case("stubs.txt", StubFileType::Unknown)]
    #[case("stubs", StubFileType::Unknown)]
    #[case("", StubFileType::Unknown)]
    fn test_get_file_type(#[case] path: &str, #[case] expected: StubFileType) {
        assert_eq!(get_file_type(path), expected);
    }

    #[rstest]
    #[case("{\"key\": \"value\"}", "{\"key\": \"value\"}")]
    #[case("{\"key\": 1} // trailing", "{\"key\": 1} ")]
    #[case("// leading\n{\"key\": 1}", "\n{\"key\": 1}")]
    #[case("{\"key\": /* inline */ 1}", "{\"key\":  1}")]
    #[case("{\"a\": 1, /* x */ \"b\": 2}", "{\"a\": 1,  \"b\": 2}")]
    #[case("{}/* unterminated", "{}")]
    #[case("{}// no newline", "{}")]
    fn test_strip_json_comments(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(strip_json_comments(input), expected);
    }

    #[test]
    fn test_strip_preserves_slashes_inside_strings() {
        let input = r#"{"url": "https://app.test // not a comment"}"#;
        assert_eq!(strip_json_comments(input), input);
    }

    #[test]
    fn test_strip_preserves_escaped_quotes() {
        let input = r#"{"key": "a \"quoted\" // word"}"#;
        assert_eq!(strip_json_comments(input), input);
    }

    #[test]
    fn test_strip_handles_escaped_backslash_before_quote() {
        let input = r#"{"path": "C:\\"} // comment"#;
        assert_eq!(strip_json_comments(input), r#"{"path": "C:\\"} "#);
    }

    #[test]
    fn test_parse_stub_set_yaml() {
        let content = r#"
stubs:
  - pattern: "**/api/users**"
    items:
      - { id: 1 }
      - { id: 2 }
  - pattern: "**/api/auth/login"
    method: POST
    body: { token: "abc" }
"#;
        let set = parse_stub_set(content, "stubs.yaml").unwrap();
        assert_eq!(set.stubs.len(), 2);
        assert_eq!(set.stubs[0].pattern, "**/api/users**");
        assert_eq!(set.stubs[0].items.as_ref().unwrap().len(), 2);
        assert!(set.stubs[1].method.is_some());
    }

    #[test]
    fn test_parse_stub_set_json() {
        let content = r#"{"stubs": [{"pattern": "**/api/ping", "body": {"ok": true}}]}"#;
        let set = parse_stub_set(content, "stubs.json").unwrap();
        assert_eq!(set.stubs.len(), 1);
    }

    #[test]
    fn test_parse_stub_set_jsonc() {
        let content = r#"
{
  // answered for every method
  "stubs": [
    { "pattern": "**/api/ping", "body": { "ok": true } } /* no delay */
  ]
}
"#;
        let set = parse_stub_set(content, "stubs.jsonc").unwrap();
        assert_eq!(set.stubs.len(), 1);
    }

    #[test]
    fn test_parse_stub_set_unknown_extension() {
        let result = parse_stub_set("stubs: []", "stubs.toml");
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::UnknownFileType(_)
        ));
    }

    #[test]
    fn test_parse_stub_set_rejects_ambiguous_stub() {
        let content = r#"
stubs:
  - pattern: "**/api/users**"
    body: { ok: true }
    error: "cannot have both"
"#;
        let result = parse_stub_set(content, "stubs.yaml");
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::AmbiguousReply { .. }
        ));
    }

    #[test]
    fn test_parse_stub_set_invalid_yaml() {
        let result = parse_stub_set("stubs: [", "stubs.yaml");
        assert!(matches!(result.unwrap_err(), ConfigError::Yaml(_)));
    }
}
