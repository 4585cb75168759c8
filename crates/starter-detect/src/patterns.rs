//! Technology pattern table
//!
//! Each technology is recognised by file-name patterns (matched
//! case-insensitively against the path relative to the scanned root) and by
//! content patterns (multi-line mode) for files whose name says nothing.
//! Table order is significant: it decides which technology claims a file
//! during content scanning and the order of scan results.

use regex::{Regex, RegexBuilder};

/// Raw, uncompiled patterns for one technology.
#[derive(Debug, Clone, Copy)]
pub struct TechPatterns {
    pub name: &'static str,
    pub file_patterns: &'static [&'static str],
    pub content_patterns: &'static [&'static str],
    /// File names inspected for a version hint when they match.
    pub version_files: &'static [&'static str],
    pub exclude_patterns: &'static [&'static str],
}

pub const TECH_PATTERNS: &[TechPatterns] = &[
    TechPatterns {
        name: "python",
        file_patterns: &[
            r"\.py$",
            r"\.pyi$",
            r"\.pyx$",
            r"requirements\.txt$",
            r"setup\.py$",
            r"pyproject\.toml$",
        ],
        content_patterns: &[
            r"^import\s+[a-zA-Z_][a-zA-Z0-9_]*",
            r"^from\s+[a-zA-Z_][a-zA-Z0-9_.]+\s+import",
            r"def\s+[a-zA-Z_][a-zA-Z0-9_]*\s*\(",
            r"class\s+[a-zA-Z_][a-zA-Z0-9_]*\s*(?:\([^)]*\))?\s*:",
        ],
        version_files: &["requirements.txt", "setup.py", "pyproject.toml"],
        exclude_patterns: &[],
    },
    TechPatterns {
        name: "javascript",
        file_patterns: &[r"\.js$", r"\.jsx$", r"package\.json$", r"\.mjs$"],
        content_patterns: &[
            r"import\s+.*from",
            r"export\s+(default\s+)?(function|class|const)",
            r"require\(",
        ],
        version_files: &["package.json"],
        exclude_patterns: &[],
    },
    TechPatterns {
        name: "typescript",
        file_patterns: &[r"\.ts$", r"\.tsx$", r"tsconfig\.json$"],
        content_patterns: &[
            r"interface\s+\w+",
            r"type\s+\w+\s*=",
            r":\s*(string|number|boolean|any)\b",
        ],
        version_files: &["package.json"],
        exclude_patterns: &[],
    },
    TechPatterns {
        name: "react",
        file_patterns: &[r"\.jsx$", r"\.tsx$"],
        content_patterns: &[
            r"import\s+.*?React",
            r"React\.Component",
            r"<.*?>",
            r"useState|useEffect|useContext",
        ],
        version_files: &["package.json"],
        exclude_patterns: &[],
    },
    TechPatterns {
        name: "vue",
        file_patterns: &[r"\.vue$"],
        content_patterns: &[r"<template.*?>", r"<script.*?>", r"Vue\.component", r"createApp"],
        version_files: &["package.json"],
        exclude_patterns: &[],
    },
    TechPatterns {
        name: "svelte",
        file_patterns: &[r"\.svelte$"],
        content_patterns: &[r"<script.*?>", r"<style.*?>", r"\$:", r"on:.*?="],
        version_files: &["package.json"],
        exclude_patterns: &[],
    },
    TechPatterns {
        name: "terraform",
        file_patterns: &[r"\.tf$", r"\.tfvars$"],
        content_patterns: &[
            r#"resource\s+".*?""#,
            r#"provider\s+".*?""#,
            r#"variable\s+".*?""#,
        ],
        version_files: &[],
        exclude_patterns: &[],
    },
    TechPatterns {
        name: "docker",
        file_patterns: &[r"Dockerfile", r"\.dockerfile$", r"docker-compose\.ya?ml$"],
        content_patterns: &[r"FROM\s+\w+", r"RUN\s+.*", r"CMD\s+.*", r"ENTRYPOINT\s+.*"],
        version_files: &[],
        exclude_patterns: &[],
    },
    TechPatterns {
        name: "shell",
        file_patterns: &[r"\.sh$", r"\.bash$", r"\.zsh$"],
        content_patterns: &[r"#!/bin/(ba)?sh", r"if\s+\[\[.*\]\]", r"while\s+.*;\s*do"],
        version_files: &[],
        exclude_patterns: &[],
    },
    TechPatterns {
        name: "html",
        file_patterns: &[r"\.html$", r"\.htm$", r"\.xhtml$"],
        content_patterns: &[r"<!DOCTYPE\s+html>", r"<html.*?>", r"<head.*?>", r"<body.*?>"],
        version_files: &[],
        exclude_patterns: &[],
    },
    TechPatterns {
        name: "css",
        file_patterns: &[r"\.css$", r"\.scss$", r"\.sass$", r"\.less$"],
        content_patterns: &[r"@media", r"@import", r"\{[^}]*\}", r":\s*[^{};]+;"],
        version_files: &[],
        exclude_patterns: &[],
    },
    TechPatterns {
        name: "yaml",
        file_patterns: &[r"\.ya?ml$"],
        content_patterns: &[],
        version_files: &[],
        // Workflow files belong to github_actions.
        exclude_patterns: &[r"\.github/workflows/.*\.ya?ml$"],
    },
    TechPatterns {
        name: "json",
        file_patterns: &[r"\.json$"],
        content_patterns: &[],
        version_files: &[],
        exclude_patterns: &[],
    },
    TechPatterns {
        name: "markdown",
        file_patterns: &[r"\.md$", r"\.markdown$"],
        content_patterns: &[],
        version_files: &[],
        exclude_patterns: &[],
    },
    TechPatterns {
        name: "github_actions",
        file_patterns: &[r"\.github/workflows/.*\.ya?ml$"],
        content_patterns: &[
            r"^name:\s+.*$",
            r"^on:\s+.*$",
            r"^jobs:\s+.*$",
            r"uses:\s+.*@.*$",
            r"run:\s+.*$",
        ],
        version_files: &[],
        exclude_patterns: &[],
    },
    TechPatterns {
        name: "go",
        file_patterns: &[r"\.go$", r"go\.mod$", r"go\.sum$"],
        content_patterns: &[
            r"package\s+\w+",
            r"import\s+\(",
            r"func\s+\w+\s*\(",
            r"type\s+\w+\s+struct\s*\{",
        ],
        version_files: &["go.mod"],
        exclude_patterns: &[],
    },
    TechPatterns {
        name: "rust",
        file_patterns: &[r"\.rs$", r"Cargo\.toml$", r"Cargo\.lock$"],
        content_patterns: &[
            r"fn\s+\w+\s*\(",
            r"struct\s+\w+",
            r"impl\s+\w+",
            r"mod\s+\w+",
            r"use\s+\w+",
        ],
        version_files: &["Cargo.toml"],
        exclude_patterns: &[],
    },
];

/// Technologies whose presence implies another one.
///
/// `(implied, implied_by)`: when `implied` has no matching files but any
/// technology in `implied_by` does, it is reported with a count of one.
pub const IMPLIED_TECHNOLOGIES: &[(&str, &[&str])] = &[
    ("javascript", &["typescript", "react", "vue", "svelte"]),
    ("html", &["react", "vue", "svelte"]),
    ("css", &["react", "vue", "svelte"]),
];

/// Compiled form of [`TechPatterns`].
#[derive(Debug, Clone)]
pub(crate) struct TechRule {
    pub name: &'static str,
    pub files: Vec<Regex>,
    pub content: Vec<Regex>,
    pub version_files: &'static [&'static str],
    pub excludes: Vec<Regex>,
}

impl TechRule {
    pub(crate) fn compile(patterns: &TechPatterns) -> Self {
        Self {
            name: patterns.name,
            files: compile_all(patterns.name, patterns.file_patterns, true),
            content: compile_all(patterns.name, patterns.content_patterns, false),
            version_files: patterns.version_files,
            excludes: compile_all(patterns.name, patterns.exclude_patterns, true),
        }
    }

    /// True when `rel_path` matches a file pattern and no exclude pattern.
    pub(crate) fn matches_path(&self, rel_path: &str) -> bool {
        self.files.iter().any(|re| re.is_match(rel_path))
            && !self.excludes.iter().any(|re| re.is_match(rel_path))
    }

    pub(crate) fn matches_content(&self, content: &str) -> bool {
        self.content.iter().any(|re| re.is_match(content))
    }

    pub(crate) fn is_version_file(&self, file_name: &str) -> bool {
        self.version_files.contains(&file_name)
    }
}

fn compile_all(tech: &str, patterns: &[&str], path_pattern: bool) -> Vec<Regex> {
    patterns
        .iter()
        .filter_map(|pattern| {
            let compiled = if path_pattern {
                RegexBuilder::new(pattern).case_insensitive(true).build()
            } else {
                RegexBuilder::new(pattern).multi_line(true).build()
            };
            compiled
                .map_err(|e| tracing::warn!(tech, pattern, error = %e, "Skipping invalid pattern"))
                .ok()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn rule(name: &str) -> TechRule {
        let patterns = TECH_PATTERNS.iter().find(|p| p.name == name).unwrap();
        TechRule::compile(patterns)
    }

    #[test]
    fn test_all_patterns_compile() {
        for patterns in TECH_PATTERNS {
            let rule = TechRule::compile(patterns);
            assert_eq!(rule.files.len(), patterns.file_patterns.len(), "{}", patterns.name);
            assert_eq!(rule.content.len(), patterns.content_patterns.len(), "{}", patterns.name);
            assert_eq!(rule.excludes.len(), patterns.exclude_patterns.len(), "{}", patterns.name);
        }
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = TECH_PATTERNS.iter().map(|p| p.name).collect();
        assert_eq!(names.len(), TECH_PATTERNS.len());
    }

    #[test]
    fn test_path_match_is_case_insensitive() {
        assert!(rule("python").matches_path("src/APP.PY"));
        assert!(rule("docker").matches_path("deploy/Dockerfile.dev"));
        assert!(!rule("python").matches_path("notes.txt"));
    }

    #[test]
    fn test_workflow_excluded_from_yaml() {
        assert!(rule("yaml").matches_path("config/app.yml"));
        assert!(!rule("yaml").matches_path(".github/workflows/ci.yml"));
        assert!(rule("github_actions").matches_path(".github/workflows/ci.yaml"));
    }

    #[test]
    fn test_content_patterns_are_multiline() {
        let python = rule("python");
        assert!(python.matches_content("#!/usr/bin/env python3\nimport os\n"));
        assert!(!python.matches_content("  import os"));
        assert!(rule("shell").matches_content("#!/bin/bash\necho hi\n"));
    }

    #[test]
    fn test_implied_sources_exist_in_table() {
        let names: HashSet<_> = TECH_PATTERNS.iter().map(|p| p.name).collect();
        for (implied, by) in IMPLIED_TECHNOLOGIES {
            assert!(names.contains(implied));
            assert!(by.iter().all(|b| names.contains(b)));
        }
    }
}
