//! Recoveries recorded while evaluating a plant.
//!
//! Once a configuration has passed [`validate`](crate::validate), evaluation
//! always produces a number. A few derived quantities can still degenerate:
//! a deck too small for a single unit, a catalog cable too weak for one
//! turbine, a mooring diameter between standard sizes. Each of those is
//! replaced by a safe value and noted here so the note travels with the
//! result.
//!
//! ```
//! use wobos_core::diagnostics::{Category, Diagnostics};
//!
//! let mut diag = Diagnostics::new();
//! diag.record(Category::Clamp, "turbines_per_trip", "0 units per trip clamped to 1");
//!
//! assert_eq!(diag.count(Category::Clamp), 1);
//! assert_eq!(diag.summary(), "1 recovery (1 clamp)");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// What kind of recovery was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// A per-trip capacity below one was raised to one.
    Clamp,
    /// A cable candidate was left out of the catalog search.
    Optimizer,
    /// A requested mooring diameter was moved to a standard size.
    Mooring,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Clamp, Category::Optimizer, Category::Mooring];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Clamp => "clamp",
            Category::Optimizer => "optimizer",
            Category::Mooring => "mooring",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recovery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticIssue {
    pub category: Category,
    /// Derived quantity, input field or cable candidate the recovery applies to.
    pub entity: String,
    pub message: String,
}

impl fmt::Display for DiagnosticIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.category, self.entity, self.message)
    }
}

/// Every recovery made during one evaluation, in the order they occurred.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Diagnostics {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<DiagnosticIssue>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(
        &mut self,
        category: Category,
        entity: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.issues.push(DiagnosticIssue {
            category,
            entity: entity.into(),
            message: message.into(),
        });
    }

    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    pub fn issues_by_category(
        &self,
        category: Category,
    ) -> impl Iterator<Item = &DiagnosticIssue> + '_ {
        self.issues.iter().filter(move |i| i.category == category)
    }

    pub fn count(&self, category: Category) -> usize {
        self.issues_by_category(category).count()
    }

    /// One-line tally, e.g. `3 recoveries (2 clamp, 1 optimizer)`.
    pub fn summary(&self) -> String {
        if self.issues.is_empty() {
            return "No issues".to_string();
        }
        let n = self.issues.len();
        let parts: Vec<String> = Category::ALL
            .iter()
            .filter_map(|&c| match self.count(c) {
                0 => None,
                k => Some(format!("{k} {c}")),
            })
            .collect();
        let noun = if n == 1 { "recovery" } else { "recoveries" };
        format!("{n} {noun} ({})", parts.join(", "))
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Diagnostics: {}", self.summary())?;
        for issue in &self.issues {
            writeln!(f, "  {issue}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_tallies_by_category() {
        let mut diag = Diagnostics::new();
        assert_eq!(diag.summary(), "No issues");

        diag.record(Category::Optimizer, "catalogs.array[0]", "skipped");
        diag.record(Category::Clamp, "turbines_per_trip", "clamped");
        diag.record(Category::Clamp, "substructures_per_trip", "clamped");
        assert_eq!(diag.summary(), "3 recoveries (2 clamp, 1 optimizer)");
        assert_eq!(diag.count(Category::Mooring), 0);
    }

    #[test]
    fn test_display_lists_each_issue() {
        let mut diag = Diagnostics::new();
        diag.record(
            Category::Mooring,
            "substructure.mooring_diameter_m",
            "diameter 0.1 m snapped to standard size 0.12 m",
        );
        let text = diag.to_string();
        assert!(text.starts_with("Diagnostics: 1 recovery (1 mooring)\n"));
        assert!(text.contains("  [mooring] substructure.mooring_diameter_m: diameter 0.1 m"));
    }

    #[test]
    fn test_serialized_form() {
        assert_eq!(serde_json::to_string(&Diagnostics::new()).unwrap(), "{}");

        let mut diag = Diagnostics::new();
        diag.record(Category::Clamp, "cable1_sections_per_trip", "clamped");
        let value = serde_json::to_value(&diag).unwrap();
        assert_eq!(value["issues"][0]["category"], "clamp");
        let back: Diagnostics = serde_json::from_value(value).unwrap();
        assert_eq!(back, diag);
    }
}
