//! End-to-end tests: detect technologies in a project, then build its config
//!
//! Exercises the full flow the CLI runs in `--auto` mode, without the binary.

use pretty_assertions::assert_eq;
use rstest::rstest;
use starter_builder::{BuildOptions, ConfigBuilder, load_custom_hooks};
use starter_catalog::Catalog;
use starter_detect::{Detector, TechInfo};
use starter_test_utils::TestProject;
use std::sync::Arc;
use std::thread;

fn full_stack_project() -> TestProject {
    let project = TestProject::with_git();
    project.write_files(&[
        ("backend/app.py", "from flask import Flask\n"),
        ("backend/models.py", "class User:\n    pass\n"),
        ("requirements.txt", "flask\n"),
        (
            "package.json",
            r#"{"dependencies": {"react": "^18.2.0"}, "devDependencies": {"eslint": "9"}}"#,
        ),
        ("src/App.jsx", "export default function App() { return <main/>; }\n"),
        ("Dockerfile", "FROM python:3.12-slim\n"),
        (".github/workflows/ci.yml", "name: CI\non: push\n"),
    ]);
    project
}

fn labels(detected: &[TechInfo]) -> Vec<&str> {
    detected.iter().map(|t| t.name.as_str()).collect()
}

/// Tool sources in first-reference order: base, then each label in turn.
fn expected_sources<'a>(catalog: &'a Catalog, labels: &[&str]) -> Vec<&'a str> {
    let mut sources: Vec<&str> = Vec::new();
    let base = catalog.base_contributions().iter();
    let by_label = labels.iter().flat_map(|l| catalog.contributions_for(l));
    for record in base.chain(by_label) {
        if !sources.contains(&record.repo.as_str()) {
            sources.push(record.repo.as_str());
        }
    }
    sources
}

#[test]
fn test_full_stack_detection_order() {
    let project = full_stack_project();
    let detected = Detector::new().scan(project.root());
    assert_eq!(
        labels(&detected),
        vec![
            "python",
            "javascript",
            "react",
            "docker",
            "html",
            "css",
            "json",
            "github_actions"
        ]
    );
}

#[test]
fn test_full_stack_config() {
    let project = full_stack_project();
    let catalog = Catalog::builtin();
    let detected = Detector::new().scan(project.root());
    let labels = labels(&detected);

    let builder = ConfigBuilder::new(&catalog);
    let resolution = builder.resolve(&labels, &[]);
    assert_eq!(resolution.repo_ids(), expected_sources(&catalog, &labels));

    let config = builder.build(&labels, &[]).unwrap();
    assert!(config.contains(
        "# Technologies detected: python, javascript, react, docker, html, css, json, github_actions\n"
    ));

    let doc: serde_yaml::Value = serde_yaml::from_str(&config).unwrap();
    let repos = doc["repos"].as_sequence().unwrap();
    assert_eq!(repos.len(), resolution.entries.len());

    let starts = config.lines().filter(|l| l.starts_with("- repo:")).count();
    let blank_before_start = config
        .lines()
        .collect::<Vec<_>>()
        .windows(2)
        .filter(|w| w[0].is_empty() && w[1].starts_with("- repo:"))
        .count();
    assert_eq!(starts, repos.len());
    assert_eq!(blank_before_start, repos.len() - 1);
}

#[test]
fn test_labels_unknown_to_catalog_are_neutral() {
    let project = TestProject::with_git();
    project.write_file("src/App.vue", "<template><div/></template>\n");

    let catalog = Catalog::builtin();
    let detected = Detector::new().scan(project.root());
    let labels = labels(&detected);
    assert_eq!(labels, vec!["javascript", "vue", "html", "css"]);
    assert!(!catalog.contains("vue"));

    let builder = ConfigBuilder::new(&catalog);
    let with_vue = builder.resolve(&labels, &[]);
    let without_vue = builder.resolve(&["javascript", "html", "css"], &[]);
    assert_eq!(with_vue.entries, without_vue.entries);
}

#[test]
fn test_custom_hooks_from_project() {
    let project = TestProject::with_git();
    project.write_files(&[
        ("main.go", "package main\n"),
        (
            ".pre-commit-starter-hooks.yaml",
            "repos:\n  - repo: local\n    hooks:\n      - id: go-generate\n        name: go generate\n        entry: go generate ./...\n        language: system\n        pass_filenames: false\n",
        ),
    ]);

    let catalog = Catalog::builtin();
    let detected = Detector::new().scan(project.root());
    let custom = load_custom_hooks(project.root()).unwrap().unwrap();
    let config = ConfigBuilder::new(&catalog)
        .build(&labels(&detected), &custom)
        .unwrap();

    let doc: serde_yaml::Value = serde_yaml::from_str(&config).unwrap();
    let last = doc["repos"].as_sequence().unwrap().last().unwrap().clone();
    assert_eq!(last["repo"].as_str(), Some("local"));
    assert_eq!(last["hooks"][0]["pass_filenames"].as_bool(), Some(false));
    assert_eq!(last["hooks"][0]["language"].as_str(), Some("system"));
}

#[rstest]
#[case::python(&[("a.py", ""), ("b.py", "")], "https://github.com/astral-sh/ruff-pre-commit")]
#[case::go(&[("main.go", "")], "https://github.com/golangci/golangci-lint")]
#[case::rust(&[("src/main.rs", "")], "https://github.com/doublify/pre-commit-rust")]
#[case::terraform(&[("infra/main.tf", "")], "https://github.com/antonbabenko/pre-commit-terraform")]
#[case::shell(&[("deploy.sh", "")], "https://github.com/shellcheck-py/shellcheck-py")]
fn test_single_language_projects(#[case] files: &[(&str, &str)], #[case] source: &str) {
    let project = TestProject::with_git();
    project.write_files(files);

    let catalog = Catalog::builtin();
    let detected = Detector::new().scan(project.root());
    let resolution = ConfigBuilder::new(&catalog).resolve(&labels(&detected), &[]);
    assert!(resolution.entry(source).is_some(), "{source} missing");
}

#[test]
fn test_options_flow_through() {
    let project = TestProject::with_git();
    project.write_file("app.py", "");

    let catalog = Catalog::builtin();
    let options = BuildOptions::new()
        .with_python_version("python3.11")
        .unwrap()
        .with_protected_branches(["main", "release"]);
    let detected = Detector::new().scan(project.root());
    let config = ConfigBuilder::new(&catalog)
        .with_options(options)
        .build(&labels(&detected), &[])
        .unwrap();

    let doc: serde_yaml::Value = serde_yaml::from_str(&config).unwrap();
    assert_eq!(
        doc["default_language_version"]["python"].as_str(),
        Some("python3.11")
    );
    assert!(config.contains("no-commit-to-branch"));
}

#[test]
fn test_shared_catalog_across_threads() {
    let catalog = Arc::new(Catalog::builtin());
    let projects: Vec<TestProject> = (0..4)
        .map(|i| {
            let project = TestProject::with_git();
            project.write_file(&format!("mod_{i}.py"), "");
            project
        })
        .collect();

    let outputs: Vec<String> = thread::scope(|scope| {
        let handles: Vec<_> = projects
            .iter()
            .map(|project| {
                let catalog = Arc::clone(&catalog);
                scope.spawn(move || {
                    let detected = Detector::new().scan(project.root());
                    ConfigBuilder::new(&catalog)
                        .build(&labels(&detected), &[])
                        .unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(outputs.windows(2).all(|w| w[0] == w[1]));
}
