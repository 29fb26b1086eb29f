//! Risk categories and target asset allocations keyed by composite score.
//!
//! Both lookups read the same ordered band table so the category and the
//! allocation for a given score can never disagree.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Percentage;

/// Ordinal risk tier, lowest risk first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskCategory {
    #[serde(rename = "Conservative")]
    Conservative,
    #[serde(rename = "Moderately Conservative")]
    ModeratelyConservative,
    #[serde(rename = "Moderate")]
    Moderate,
    #[serde(rename = "Moderately Aggressive")]
    ModeratelyAggressive,
    #[serde(rename = "Aggressive")]
    Aggressive,
}

impl RiskCategory {
    /// Returns the display label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            RiskCategory::Conservative => "Conservative",
            RiskCategory::ModeratelyConservative => "Moderately Conservative",
            RiskCategory::Moderate => "Moderate",
            RiskCategory::ModeratelyAggressive => "Moderately Aggressive",
            RiskCategory::Aggressive => "Aggressive",
        }
    }

    /// Maps a composite score to its category.
    pub fn from_score(score: u8) -> Self {
        RiskBand::for_score(score).category
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Target portfolio split across four asset classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetAllocation {
    pub equities: Percentage,
    pub fixed_income: Percentage,
    pub gold: Percentage,
    pub cash: Percentage,
}

impl AssetAllocation {
    const fn of(equities: u8, fixed_income: u8, gold: u8, cash: u8) -> Self {
        Self {
            equities: Percentage::new(equities),
            fixed_income: Percentage::new(fixed_income),
            gold: Percentage::new(gold),
            cash: Percentage::new(cash),
        }
    }

    /// Maps a composite score to its target allocation.
    pub fn from_score(score: u8) -> Self {
        RiskBand::for_score(score).allocation
    }

    /// Sum of all four buckets.
    pub fn total(&self) -> u16 {
        [self.equities, self.fixed_income, self.gold, self.cash]
            .iter()
            .map(|p| u16::from(p.value()))
            .sum()
    }
}

/// One row of the score partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskBand {
    /// Lowest composite score (inclusive) that selects this band.
    pub min_score: u8,
    pub category: RiskCategory,
    pub allocation: AssetAllocation,
}

/// Score bands, highest threshold first. The last row must have `min_score == 0`.
pub const RISK_BANDS: &[RiskBand] = &[
    RiskBand {
        min_score: 80,
        category: RiskCategory::Aggressive,
        allocation: AssetAllocation::of(70, 15, 10, 5),
    },
    RiskBand {
        min_score: 60,
        category: RiskCategory::ModeratelyAggressive,
        allocation: AssetAllocation::of(60, 25, 10, 5),
    },
    RiskBand {
        min_score: 40,
        category: RiskCategory::Moderate,
        allocation: AssetAllocation::of(50, 30, 15, 5),
    },
    RiskBand {
        min_score: 20,
        category: RiskCategory::ModeratelyConservative,
        allocation: AssetAllocation::of(30, 45, 15, 10),
    },
    RiskBand {
        min_score: 0,
        category: RiskCategory::Conservative,
        allocation: AssetAllocation::of(20, 50, 20, 10),
    },
];

impl RiskBand {
    /// First band whose `min_score <= score`.
    pub fn for_score(score: u8) -> &'static RiskBand {
        let last = &RISK_BANDS[RISK_BANDS.len() - 1];
        RISK_BANDS
            .iter()
            .find(|band| band.min_score <= score)
            .unwrap_or(last)
    }
}
