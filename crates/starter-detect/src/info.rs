use std::collections::BTreeSet;

/// A technology found by [`Detector::scan`](crate::Detector::scan).
#[derive(Debug, Clone, PartialEq)]
pub struct TechInfo {
    /// Catalog label, e.g. `python` or `github_actions`.
    pub name: String,
    /// Number of files attributed to the technology.
    pub count: usize,
    /// Version hint or how the technology was inferred
    /// (`detected-via-poetry`, `implied-by-react`, ...).
    pub version: Option<String>,
    /// Confidence in `0.0..=1.0`.
    pub confidence: f64,
    /// Paths (relative, `/`-separated) that were attributed to it.
    pub files: BTreeSet<String>,
}

impl TechInfo {
    /// Display form of the label: first letter upper-cased.
    pub fn display_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        let info = TechInfo {
            name: "python".to_string(),
            count: 1,
            version: None,
            confidence: 0.3,
            files: BTreeSet::new(),
        };
        assert_eq!(info.display_name(), "Python");
    }
}
