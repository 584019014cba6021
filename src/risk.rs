//! Risk categories and how they are ranked and styled.
//!
//! Categories come from an offline classifier and are not validated, so any
//! label is accepted. Only the three canonical labels get a rank and a fixed
//! colour, everything else sorts last.

use std::fmt::Display;

use serde::{Serialize, Serializer};

/// The label used by the classifier for the highest risk category.
pub const HIGH_RISK_LABEL: &str = "High Risk";
/// The label used by the classifier for the medium risk category.
pub const MEDIUM_RISK_LABEL: &str = "Medium Risk";
/// The label used by the classifier for the lowest risk category.
pub const LOW_RISK_LABEL: &str = "Low Risk";

/// The rank given to categories that are not one of the canonical labels.
pub const UNKNOWN_RISK_RANK: u8 = 99;

/// The risk classification attached to a restaurant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RiskCategory {
    /// "High Risk"
    High,
    /// "Medium Risk"
    Medium,
    /// "Low Risk"
    Low,
    /// Any other label, kept verbatim.
    Other(String),
}

impl RiskCategory {
    /// Map a CSV label onto a category.
    ///
    /// Matching is exact and case sensitive, e.g. "high risk" becomes
    /// [RiskCategory::Other].
    pub fn parse(label: &str) -> Self {
        match label {
            HIGH_RISK_LABEL => RiskCategory::High,
            MEDIUM_RISK_LABEL => RiskCategory::Medium,
            LOW_RISK_LABEL => RiskCategory::Low,
            other => RiskCategory::Other(other.to_owned()),
        }
    }

    /// The label as it appeared in the data.
    pub fn label(&self) -> &str {
        match self {
            RiskCategory::High => HIGH_RISK_LABEL,
            RiskCategory::Medium => MEDIUM_RISK_LABEL,
            RiskCategory::Low => LOW_RISK_LABEL,
            RiskCategory::Other(label) => label,
        }
    }

    /// The sort priority of the category, lower values are riskier.
    pub fn rank(&self) -> u8 {
        match self {
            RiskCategory::High => 1,
            RiskCategory::Medium => 2,
            RiskCategory::Low => 3,
            RiskCategory::Other(_) => UNKNOWN_RISK_RANK,
        }
    }

    /// The colour of this category's slice in the risk distribution chart.
    ///
    /// Returns `None` for non-canonical labels.
    pub fn pie_color(&self) -> Option<&'static str> {
        match self {
            RiskCategory::High => Some("red"),
            RiskCategory::Medium => Some("orange"),
            RiskCategory::Low => Some("green"),
            RiskCategory::Other(_) => None,
        }
    }

    /// The style of this category's cell in the ranked restaurant table.
    ///
    /// Canonical categories use the lookup table directly. Other labels fall
    /// back to a case-insensitive substring match on "high", "medium" and
    /// "low" (checked in that order) so that labels such as "high risk" or
    /// "LOW" are still coloured.
    pub fn table_style(&self) -> Option<&'static CategoryStyle> {
        match self {
            RiskCategory::High => Some(&HIGH_RISK_STYLE),
            RiskCategory::Medium => Some(&MEDIUM_RISK_STYLE),
            RiskCategory::Low => Some(&LOW_RISK_STYLE),
            RiskCategory::Other(label) => fallback_table_style(label),
        }
    }
}

impl Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for RiskCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Colours for a category cell in the ranked restaurant table.
#[derive(Debug, PartialEq, Eq)]
pub struct CategoryStyle {
    /// CSS background colour.
    pub background: &'static str,
    /// CSS text colour.
    pub text: &'static str,
}

impl CategoryStyle {
    /// The value for an inline `style` attribute.
    pub fn css(&self) -> String {
        format!(
            "background-color: {}; color: {}; font-weight: bold",
            self.background, self.text
        )
    }
}

const HIGH_RISK_STYLE: CategoryStyle = CategoryStyle {
    background: "#C62828",
    text: "white",
};

const MEDIUM_RISK_STYLE: CategoryStyle = CategoryStyle {
    background: "#FF9800",
    text: "black",
};

const LOW_RISK_STYLE: CategoryStyle = CategoryStyle {
    background: "#2E7D32",
    text: "white",
};

fn fallback_table_style(label: &str) -> Option<&'static CategoryStyle> {
    let label = label.to_lowercase();

    if label.contains("high") {
        Some(&HIGH_RISK_STYLE)
    } else if label.contains("medium") {
        Some(&MEDIUM_RISK_STYLE)
    } else if label.contains("low") {
        Some(&LOW_RISK_STYLE)
    } else {
        None
    }
}
