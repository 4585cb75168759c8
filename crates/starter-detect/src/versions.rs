//! Version hints read from well-known manifest files

use regex::Regex;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use toml::Table;

static GO_VERSION: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"go (\d+\.\d+(?:\.\d+)?)").ok());

/// Version hints keyed by technology name.
pub(crate) type Versions = HashMap<&'static str, String>;

/// Record whatever version hints `path` offers, keyed on its file name.
///
/// Read or parse failures leave `versions` untouched.
pub(crate) fn detect(path: &Path, file_name: &str, versions: &mut Versions) {
    match file_name {
        "package.json" => from_package_json(path, versions),
        "pyproject.toml" => from_pyproject(path, versions),
        "requirements.txt" => {
            versions.insert("python", "detected-via-requirements".to_string());
        }
        "go.mod" => from_go_mod(path, versions),
        "Cargo.toml" => from_cargo_toml(path, versions),
        _ => {}
    }
}

fn read(path: &Path) -> Option<String> {
    fs::read_to_string(path)
        .map_err(|e| tracing::debug!(path = %path.display(), error = %e, "Cannot read version file"))
        .ok()
}

fn from_package_json(path: &Path, versions: &mut Versions) {
    let Some(content) = read(path) else { return };
    let data: Value = match serde_json::from_str(&content) {
        Ok(data) => data,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Ignoring malformed package.json");
            return;
        }
    };

    let dependency = |section: &str, name: &str| -> Option<String> {
        data.get(section)?.get(name)?.as_str().map(str::to_string)
    };

    for framework in ["react", "vue"] {
        if let Some(version) = dependency("dependencies", framework) {
            versions.insert(framework, version);
            versions.insert("javascript", "detected-via-package.json".to_string());
        }
    }
    for tool in ["typescript", "svelte"] {
        let version =
            dependency("dependencies", tool).or_else(|| dependency("devDependencies", tool));
        if let Some(version) = version {
            versions.insert(tool, version);
        }
    }
}

fn read_toml(path: &Path) -> Option<Table> {
    let content = read(path)?;
    toml::from_str(&content)
        .map_err(|e| tracing::debug!(path = %path.display(), error = %e, "Ignoring malformed TOML"))
        .ok()
}

fn from_pyproject(path: &Path, versions: &mut Versions) {
    let Some(data) = read_toml(path) else { return };
    let requires = data
        .get("project")
        .and_then(|project| project.get("requires-python"))
        .and_then(toml::Value::as_str);
    let poetry = data
        .get("tool")
        .and_then(|tool| tool.get("poetry"))
        .is_some_and(toml::Value::is_table);

    if let Some(requirement) = requires {
        versions.insert("python", requirement.to_string());
    } else if poetry {
        versions.insert("python", "detected-via-poetry".to_string());
    }
}

fn from_go_mod(path: &Path, versions: &mut Versions) {
    let Some(content) = read(path) else { return };
    if let Some(caps) = GO_VERSION.as_ref().and_then(|re| re.captures(&content)) {
        versions.insert("go", caps[1].to_string());
    }
}

fn from_cargo_toml(path: &Path, versions: &mut Versions) {
    let Some(data) = read_toml(path) else { return };
    if data.get("package").is_some_and(toml::Value::is_table) {
        versions.insert("rust", "detected-via-cargo".to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn detect_in(file_name: &str, content: &str) -> Versions {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(file_name);
        fs::write(&path, content).unwrap();
        let mut versions = Versions::new();
        detect(&path, file_name, &mut versions);
        versions
    }

    #[test]
    fn test_package_json_frameworks() {
        let versions = detect_in(
            "package.json",
            r#"{"dependencies": {"react": "^18.2.0"}, "devDependencies": {"typescript": "5.4.0"}}"#,
        );
        assert_eq!(versions["react"], "^18.2.0");
        assert_eq!(versions["javascript"], "detected-via-package.json");
        assert_eq!(versions["typescript"], "5.4.0");
        assert!(!versions.contains_key("vue"));
    }

    #[test]
    fn test_dev_only_react_is_ignored() {
        let versions = detect_in("package.json", r#"{"devDependencies": {"react": "18"}}"#);
        assert!(versions.is_empty());
    }

    #[test]
    fn test_malformed_package_json() {
        assert!(detect_in("package.json", "{ not json").is_empty());
    }

    #[test]
    fn test_pyproject_requires_python() {
        let versions = detect_in("pyproject.toml", "[project]\nrequires-python = \">=3.11\"\n");
        assert_eq!(versions["python"], ">=3.11");
    }

    #[test]
    fn test_pyproject_single_quoted_requirement() {
        let versions = detect_in("pyproject.toml", "[project]\nrequires-python = '>=3.11'\n");
        assert_eq!(versions.get("python").map(String::as_str), Some(">=3.11"));
    }

    #[test]
    fn test_pyproject_requirement_outside_project_table() {
        let versions = detect_in("pyproject.toml", "[tool.other]\nrequires-python = \">=3.9\"\n");
        assert!(versions.is_empty());
    }

    #[test]
    fn test_malformed_pyproject() {
        assert!(detect_in("pyproject.toml", "[project\nrequires-python = \">=3.11\"\n").is_empty());
    }

    #[test]
    fn test_pyproject_poetry() {
        let versions = detect_in("pyproject.toml", "[tool.poetry]\nname = \"demo\"\n");
        assert_eq!(versions["python"], "detected-via-poetry");
    }

    #[test]
    fn test_requirements_txt() {
        let versions = detect_in("requirements.txt", "requests==2.31\n");
        assert_eq!(versions["python"], "detected-via-requirements");
    }

    #[test]
    fn test_go_mod() {
        let versions = detect_in("go.mod", "module example.com/demo\n\ngo 1.22.1\n");
        assert_eq!(versions["go"], "1.22.1");
    }

    #[test]
    fn test_cargo_toml() {
        assert_eq!(detect_in("Cargo.toml", "[package]\nname = \"x\"\n")["rust"], "detected-via-cargo");
        assert!(detect_in("Cargo.toml", "[workspace]\n").is_empty());
    }

    #[test]
    fn test_cargo_toml_package_in_comment() {
        let versions = detect_in("Cargo.toml", "# [package]\n[workspace]\nmembers = [\"a\"]\n");
        assert!(versions.is_empty());
    }

    #[test]
    fn test_cargo_toml_inline_package() {
        let versions = detect_in("Cargo.toml", "package = { name = \"x\", version = \"0.1.0\" }\n");
        assert_eq!(versions["rust"], "detected-via-cargo");
    }
}
