//! Built-in hook catalog content
//!
//! Every label, tool source and hook description the default catalog knows
//! about is defined here.

use crate::types::{ContributionRecord, HookDefinition};

/// Housekeeping hooks that every configuration carries.
pub const PRE_COMMIT_HOOKS_REPO: &str = "https://github.com/pre-commit/pre-commit-hooks";
pub const PRE_COMMIT_HOOKS_REV: &str = "v5.0.0";

/// Secret scanner that every configuration carries.
pub const GITLEAKS_REPO: &str = "https://github.com/gitleaks/gitleaks";
pub const GITLEAKS_REV: &str = "v8.24.3";

const RUFF_REPO: &str = "https://github.com/astral-sh/ruff-pre-commit";
const PYRIGHT_REPO: &str = "https://github.com/RobertCraigie/pyright-python";
const VALIDATE_PYPROJECT_REPO: &str = "https://github.com/abravalheri/validate-pyproject";
const PRETTIER_REPO: &str = "https://github.com/pre-commit/mirrors-prettier";
const PRETTIER_REV: &str = "v4.0.0-alpha.8";
const ESLINT_REPO: &str = "https://github.com/pre-commit/mirrors-eslint";
const ESLINT_REV: &str = "v9.0.0";
const CURLYLINT_REPO: &str = "https://github.com/thibaudcolas/curlylint";
const CSSLINT_REPO: &str = "https://github.com/pre-commit/mirrors-csslint";
const SHELLCHECK_REPO: &str = "https://github.com/shellcheck-py/shellcheck-py";
const GOLANGCI_REPO: &str = "https://github.com/golangci/golangci-lint";
const GOLANG_REPO: &str = "https://github.com/dnephin/pre-commit-golang";
const RUST_REPO: &str = "https://github.com/doublify/pre-commit-rust";
const TERRAFORM_REPO: &str = "https://github.com/antonbabenko/pre-commit-terraform";
const HADOLINT_REPO: &str = "https://github.com/hadolint/hadolint";
const ACTIONLINT_REPO: &str = "https://github.com/rhysd/actionlint";

/// Number of labels in the built-in catalog.
pub const BUILTIN_TECHNOLOGY_COUNT: usize = 15;

/// Human-readable hook descriptions, keyed by hook id.
pub const HOOK_DESCRIPTIONS: &[(&str, &str)] = &[
    // Housekeeping
    ("trailing-whitespace", "Remove trailing whitespace from files"),
    ("end-of-file-fixer", "Ensure files end with a newline"),
    ("check-yaml", "Check YAML files for syntax errors"),
    ("check-added-large-files", "Prevent committing large files"),
    ("check-merge-conflict", "Check for merge conflict strings"),
    ("detect-private-key", "Detect private keys in code"),
    ("check-case-conflict", "Check for files with names that differ only in case"),
    ("check-executables-have-shebangs", "Ensure executables have shebangs"),
    ("check-toml", "Check TOML files for syntax errors"),
    ("check-vcs-permalinks", "Check that VCS links are permalinks"),
    ("no-commit-to-branch", "Prevent commits to specific branches"),
    // Python
    ("ruff-format", "Format Python code using Ruff"),
    ("ruff", "Lint Python code using Ruff"),
    ("pyright", "Type check Python code using Pyright"),
    ("validate-pyproject", "Validate pyproject.toml file"),
    // Web
    ("prettier", "Format code (JS, TS, JSON, CSS, etc.) using Prettier"),
    ("eslint", "Lint JavaScript/TypeScript code using ESLint"),
    ("curlylint", "Lint HTML templates"),
    ("csslint", "Lint CSS files"),
    ("yamllint", "Lint YAML files"),
    ("markdownlint", "Lint Markdown files"),
    ("react", "Format React files"),
    // Infrastructure
    ("hadolint", "Lint Dockerfile files"),
    ("terraform_fmt", "Format Terraform files"),
    ("terraform_tflint", "Lint Terraform files using TFLint"),
    ("terraform_docs", "Generate Terraform documentation"),
    ("tflint", "Lint Terraform files"),
    ("shellcheck", "Lint shell scripts"),
    ("actionlint", "Lint GitHub Actions workflow files"),
    // Go
    ("golangci-lint", "Lint Go code using GolangCI"),
    ("go-fmt", "Format Go code"),
    ("go-imports", "Format Go imports"),
    ("go-vet", "Examine Go code with go vet"),
    ("go-critic", "Examine Go code with additional linters"),
    // Rust
    ("fmt", "Format Rust code"),
    ("cargo-check", "Check Rust code for errors"),
    ("clippy", "Lint Rust code using Clippy"),
    // Security
    ("gitleaks", "Detect hardcoded secrets in code"),
];

fn hook(id: &str, name: &str) -> HookDefinition {
    HookDefinition::new(id).with_name(name)
}

fn prettier(name: &str, types: &[&str]) -> ContributionRecord {
    ContributionRecord::new(
        PRETTIER_REPO,
        PRETTIER_REV,
        vec![hook("prettier", name).with_types(types.iter().copied())],
    )
}

fn eslint(name: &str) -> ContributionRecord {
    ContributionRecord::new(ESLINT_REPO, ESLINT_REV, vec![hook("eslint", name)])
}

/// Contributions present in every document: housekeeping first, secret
/// scanner second.
pub fn base_contributions() -> Vec<ContributionRecord> {
    vec![
        ContributionRecord::new(
            PRE_COMMIT_HOOKS_REPO,
            PRE_COMMIT_HOOKS_REV,
            vec![
                hook("trailing-whitespace", "Trim trailing whitespace"),
                hook("end-of-file-fixer", "Fix end of files"),
                hook("check-yaml", "Check YAML"),
                hook("check-added-large-files", "Check for added large files"),
                hook("check-merge-conflict", "Check for merge conflict strings"),
                hook("detect-private-key", "Detect private keys"),
            ],
        ),
        ContributionRecord::new(
            GITLEAKS_REPO,
            GITLEAKS_REV,
            vec![hook("gitleaks", "Detect hardcoded secrets")],
        ),
    ]
}

/// Branch protection on the housekeeping source, run at push time.
pub fn branch_protection<S: AsRef<str>>(branches: &[S]) -> ContributionRecord {
    let args = branches
        .iter()
        .flat_map(|b| ["--branch".to_string(), b.as_ref().to_string()]);
    ContributionRecord::new(
        PRE_COMMIT_HOOKS_REPO,
        PRE_COMMIT_HOOKS_REV,
        vec![
            HookDefinition::new("no-commit-to-branch")
                .with_args(args)
                .with_stages(["pre-push"]),
        ],
    )
}

/// Returns `(label, contributions)` for every built-in technology.
pub fn builtin_technologies() -> Vec<(&'static str, Vec<ContributionRecord>)> {
    vec![
        (
            "python",
            vec![
                ContributionRecord::new(
                    RUFF_REPO,
                    "v0.11.6",
                    vec![
                        hook("ruff-format", "Format Python code with Ruff"),
                        hook("ruff", "Run Ruff linter and formatter").with_args(["--fix"]),
                    ],
                ),
                ContributionRecord::new(
                    PYRIGHT_REPO,
                    "v1.1.399",
                    vec![hook("pyright", "Run Pyright type checker")],
                ),
                ContributionRecord::new(
                    VALIDATE_PYPROJECT_REPO,
                    "v0.15",
                    vec![hook("validate-pyproject", "Validate pyproject.toml")],
                ),
            ],
        ),
        (
            "javascript",
            vec![
                prettier("Format JavaScript files", &["javascript"]),
                eslint("Lint JavaScript files"),
            ],
        ),
        (
            "typescript",
            vec![
                prettier("Format TypeScript files", &["typescript"]),
                eslint("Lint TypeScript files"),
            ],
        ),
        (
            "html",
            vec![
                prettier("Format HTML files", &["html"]),
                ContributionRecord::new(
                    CURLYLINT_REPO,
                    "v0.13.1",
                    vec![hook("curlylint", "Lint HTML templates")],
                ),
            ],
        ),
        (
            "css",
            vec![
                prettier("Format CSS files", &["css"]),
                ContributionRecord::new(
                    CSSLINT_REPO,
                    "v1.0.5",
                    vec![hook("csslint", "Lint CSS files")],
                ),
            ],
        ),
        ("json", vec![prettier("Format JSON files", &["json"])]),
        ("markdown", vec![prettier("Format Markdown files", &["markdown"])]),
        (
            "react",
            vec![
                prettier("Format React files", &["jsx", "tsx"]),
                eslint("Lint React files"),
            ],
        ),
        ("yaml", vec![prettier("Format YAML files", &["yaml"])]),
        (
            "shell",
            vec![ContributionRecord::new(
                SHELLCHECK_REPO,
                "v0.9.0.6",
                vec![hook("shellcheck", "Lint shell scripts")],
            )],
        ),
        (
            "go",
            vec![
                ContributionRecord::new(
                    GOLANGCI_REPO,
                    "v1.56.2",
                    vec![hook("golangci-lint", "Run golangci-lint")],
                ),
                ContributionRecord::new(
                    GOLANG_REPO,
                    "v0.5.1",
                    vec![
                        hook("go-fmt", "Run go fmt"),
                        hook("go-imports", "Format Go imports"),
                        hook("go-vet", "Run go vet"),
                        hook("go-critic", "Run go-critic"),
                    ],
                ),
            ],
        ),
        (
            "rust",
            vec![ContributionRecord::new(
                RUST_REPO,
                "v1.0",
                vec![
                    hook("fmt", "Format Rust code"),
                    hook("cargo-check", "Check Rust code for errors"),
                    hook("clippy", "Lint Rust code"),
                ],
            )],
        ),
        (
            "terraform",
            vec![ContributionRecord::new(
                TERRAFORM_REPO,
                "v1.88.0",
                vec![
                    hook("terraform_fmt", "Format Terraform code"),
                    hook("terraform_tflint", "Lint Terraform code"),
                ],
            )],
        ),
        (
            "docker",
            vec![ContributionRecord::new(
                HADOLINT_REPO,
                "v2.12.0",
                vec![hook("hadolint", "Lint Dockerfiles")],
            )],
        ),
        (
            "github_actions",
            vec![ContributionRecord::new(
                ACTIONLINT_REPO,
                "v1.6.27",
                vec![hook("actionlint", "Lint GitHub Actions workflow files")],
            )],
        ),
    ]
}
