//! Rendering resolved entries into `.pre-commit-config.yaml` text

use crate::custom::CUSTOM_HOOKS_FILE;
use crate::error::Result;
use crate::options::BuildOptions;
use crate::resolve::Resolution;
use serde::Serialize;
use starter_catalog::ToolSourceEntry;

/// Project the generated header points back to.
pub const GENERATOR_URL: &str = "https://github.com/Jakub3628800/pre-commit-starter";

#[derive(Serialize)]
struct LanguageVersion<'a> {
    python: &'a str,
}

#[derive(Serialize)]
struct Document<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    default_language_version: Option<LanguageVersion<'a>>,
    repos: &'a [ToolSourceEntry],
}

/// Leading comment block, one `#` line per entry, each newline-terminated.
///
/// Line breaks inside labels are replaced with spaces so every header line
/// stays a comment.
pub fn render_header(labels: &[String], has_custom: bool) -> String {
    let mut header = String::new();
    header.push_str("# Pre-commit configuration generated by pre-commit-starter\n");
    header.push_str(&format!("# {GENERATOR_URL}\n"));
    header.push_str("#\n");
    if !labels.is_empty() {
        let labels: Vec<String> = labels.iter().map(|l| single_line(l)).collect();
        header.push_str(&format!("# Technologies detected: {}\n", labels.join(", ")));
    }
    if has_custom {
        header.push_str(&format!("# Includes custom hooks from {CUSTOM_HOOKS_FILE}\n"));
    }
    header
}

fn single_line(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}

/// Render a full document: header, blank line, YAML body.
pub fn render(resolution: &Resolution, options: &BuildOptions) -> Result<String> {
    let document = Document {
        default_language_version: options
            .python_version
            .as_deref()
            .map(|python| LanguageVersion { python }),
        repos: &resolution.entries,
    };
    let body = serde_yaml::to_string(&document)?;

    let mut output = render_header(&resolution.labels, resolution.has_custom());
    output.push('\n');
    output.push_str(&separate_entries(&body));
    Ok(output)
}

/// Insert one blank line before every top-level `- repo:` item after the first.
///
/// The indentation of the first `- repo:` line identifies the top-level list,
/// so nested sequences are never split.
pub(crate) fn separate_entries(body: &str) -> String {
    let indent = body
        .lines()
        .find(|line| line.trim_start().starts_with("- repo:"))
        .map(|line| line.len() - line.trim_start().len());

    let Some(indent) = indent else {
        return body.to_string();
    };

    let pad = " ".repeat(indent);
    let mut output = String::with_capacity(body.len() + 64);
    let mut seen_entry = false;
    for line in body.lines() {
        let is_entry = line
            .strip_prefix(pad.as_str())
            .is_some_and(|rest| rest.starts_with("- "));
        if is_entry {
            if seen_entry {
                output.push('\n');
            }
            seen_entry = true;
        }
        output.push_str(line);
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_without_labels() {
        let header = render_header(&[], false);
        assert!(header.contains(GENERATOR_URL));
        assert!(!header.contains("Technologies detected"));
        assert!(!header.contains("custom hooks"));
    }

    #[test]
    fn test_header_with_custom() {
        let header = render_header(&["go".to_string()], true);
        assert!(header.contains("# Technologies detected: go\n"));
        assert!(header.contains("# Includes custom hooks from .pre-commit-starter-hooks.yaml"));
    }

    #[test]
    fn test_header_label_line_breaks() {
        let header = render_header(&["a\r\nb".to_string(), "c\nd".to_string()], false);
        assert!(header.contains("# Technologies detected: a  b, c d\n"));
        assert!(header.lines().all(|line| line.starts_with('#')));
    }

    #[test]
    fn test_separate_entries_unindented() {
        let body = "repos:\n- repo: a\n  hooks:\n  - id: x\n  - id: y\n- repo: b\n  hooks:\n  - id: z\n";
        assert_eq!(
            separate_entries(body),
            "repos:\n- repo: a\n  hooks:\n  - id: x\n  - id: y\n\n- repo: b\n  hooks:\n  - id: z\n"
        );
    }

    #[test]
    fn test_separate_entries_indented() {
        let body = "repos:\n  - repo: a\n    hooks:\n      - id: x\n  - repo: b\n    hooks:\n      - id: y\n";
        assert_eq!(
            separate_entries(body),
            "repos:\n  - repo: a\n    hooks:\n      - id: x\n\n  - repo: b\n    hooks:\n      - id: y\n"
        );
    }

    #[test]
    fn test_separate_entries_without_repos() {
        assert_eq!(separate_entries("repos: []\n"), "repos: []\n");
    }
}
