//! Lead routing priority derived from a projection.

use std::fmt;

use nurture_core::CalculatorResults;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadPriority {
    High,
    Medium,
    Low,
}

impl LeadPriority {
    /// High needs both a strong ROI and a strong lead; medium needs either
    /// a decent ROI or a decent lead.
    pub fn classify(roi: i64, lead_score: u32) -> Self {
        if roi > 200 && lead_score > 70 {
            Self::High
        } else if roi > 100 || lead_score > 60 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::High => "🔥",
            Self::Medium => "⚡",
            Self::Low => "📊",
        }
    }

    /// Accent color for chat attachments.
    pub fn color(&self) -> &'static str {
        match self {
            Self::High => "#FF0000",
            Self::Medium => "#FFA500",
            Self::Low => "#3AA3E3",
        }
    }
}

impl fmt::Display for LeadPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn calculate_lead_priority(results: &CalculatorResults) -> LeadPriority {
    LeadPriority::classify(results.roi, results.lead_score)
}
