//! What-if scenarios: preset assumption sets and a caller-owned board of
//! saved projections for side-by-side comparison.

use chrono::{DateTime, Utc};
use nurture_core::{CalculatorInputs, CalculatorResults, RoiError, RoiResult};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculator::calculate;

/// Named partial overrides of the nurturing-impact and efficiency inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Best,
    Realistic,
    Worst,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Best, Preset::Realistic, Preset::Worst];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Best => "Best Case",
            Self::Realistic => "Realistic Case",
            Self::Worst => "Worst Case",
        }
    }

    /// `(conversion lift, cycle reduction, AOV increase, hours saved)`.
    fn overrides(&self) -> (f64, f64, f64, f64) {
        match self {
            Self::Best => (50.0, 30.0, 40.0, 60.0),
            Self::Realistic => (30.0, 20.0, 20.0, 40.0),
            Self::Worst => (15.0, 10.0, 10.0, 20.0),
        }
    }

    /// Copy of `base` with this preset's overrides applied.
    pub fn apply(&self, base: &CalculatorInputs) -> CalculatorInputs {
        let (lift, cycle, aov, hours) = self.overrides();
        CalculatorInputs {
            conversion_rate_lift: lift,
            sales_cycle_reduction: cycle,
            aov_increase: aov,
            hours_saved_per_month: hours,
            ..*base
        }
    }
}

impl std::str::FromStr for Preset {
    type Err = RoiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "best" => Ok(Self::Best),
            "realistic" => Ok(Self::Realistic),
            "worst" => Ok(Self::Worst),
            other => Err(RoiError::InvalidField {
                field: "preset".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedScenario {
    pub id: Uuid,
    pub name: String,
    pub inputs: CalculatorInputs,
    pub results: CalculatorResults,
    pub created_at: DateTime<Utc>,
}

/// One row of a side-by-side scenario comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioSummary {
    pub name: String,
    pub roi: i64,
    pub revenue_surplus: i64,
    pub payback_period_months: f64,
    pub lead_score: u32,
}

/// Saved scenarios owned by the caller. Capacity is fixed at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioBoard {
    capacity: usize,
    scenarios: Vec<SavedScenario>,
}

pub const DEFAULT_CAPACITY: usize = 3;

impl Default for ScenarioBoard {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl ScenarioBoard {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            scenarios: Vec::with_capacity(capacity),
        }
    }

    pub fn scenarios(&self) -> &[SavedScenario] {
        &self.scenarios
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.scenarios.len() >= self.capacity
    }

    /// Project `inputs` and keep the result under `name`.
    pub fn save(&mut self, name: &str, inputs: CalculatorInputs) -> RoiResult<&SavedScenario> {
        if self.is_full() {
            warn!(capacity = self.capacity, "Scenario board full");
            return Err(RoiError::ScenarioLimit(self.capacity));
        }

        let scenario = SavedScenario {
            id: Uuid::new_v4(),
            name: name.to_string(),
            results: calculate(&inputs),
            inputs,
            created_at: Utc::now(),
        };
        info!(
            scenario_id = %scenario.id,
            name = %scenario.name,
            roi = scenario.results.roi,
            "Scenario saved"
        );

        let id = scenario.id;
        self.scenarios.push(scenario);
        self.scenarios
            .last()
            .ok_or_else(|| RoiError::ScenarioNotFound(id.to_string()))
    }

    /// Save `preset` applied on top of `base`, named after the preset.
    pub fn load_preset(
        &mut self,
        preset: Preset,
        base: &CalculatorInputs,
    ) -> RoiResult<&SavedScenario> {
        self.save(preset.label(), preset.apply(base))
    }

    pub fn remove(&mut self, id: &Uuid) -> RoiResult<SavedScenario> {
        let index = self
            .scenarios
            .iter()
            .position(|s| &s.id == id)
            .ok_or_else(|| RoiError::ScenarioNotFound(id.to_string()))?;
        Ok(self.scenarios.remove(index))
    }

    pub fn get(&self, id: &Uuid) -> Option<&SavedScenario> {
        self.scenarios.iter().find(|s| &s.id == id)
    }

    /// Highest-ROI scenario; the earliest saved wins ties.
    pub fn best_by_roi(&self) -> Option<&SavedScenario> {
        self.scenarios
            .iter()
            .reduce(|best, s| if s.results.roi > best.results.roi { s } else { best })
    }

    pub fn comparison(&self) -> Vec<ScenarioSummary> {
        self.scenarios
            .iter()
            .map(|s| ScenarioSummary {
                name: s.name.clone(),
                roi: s.results.roi,
                revenue_surplus: s.results.revenue_surplus,
                payback_period_months: s.results.payback_period_months,
                lead_score: s.results.lead_score,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_apply_keeps_other_fields() {
        let base = CalculatorInputs {
            current_leads: 1_200.0,
            ..Default::default()
        };
        let best = Preset::Best.apply(&base);
        assert_eq!(best.conversion_rate_lift, 50.0);
        assert_eq!(best.sales_cycle_reduction, 30.0);
        assert_eq!(best.aov_increase, 40.0);
        assert_eq!(best.hours_saved_per_month, 60.0);
        assert_eq!(best.current_leads, 1_200.0);
        // base untouched
        assert_eq!(base.conversion_rate_lift, 40.0);
    }

    #[test]
    fn test_presets_order_by_roi() {
        let base = CalculatorInputs::default();
        let roi = |p: Preset| calculate(&p.apply(&base)).roi;
        assert!(roi(Preset::Best) > roi(Preset::Realistic));
        assert!(roi(Preset::Realistic) > roi(Preset::Worst));
    }

    #[test]
    fn test_preset_from_str() {
        assert_eq!("Best".parse::<Preset>().unwrap(), Preset::Best);
        assert_eq!("worst".parse::<Preset>().unwrap(), Preset::Worst);
        assert!("optimistic".parse::<Preset>().is_err());
        assert_eq!(Preset::Realistic.label(), "Realistic Case");
    }

    #[test]
    fn test_board_enforces_capacity() {
        let mut board = ScenarioBoard::default();
        let base = CalculatorInputs::default();
        for preset in Preset::ALL {
            board.load_preset(preset, &base).unwrap();
        }
        assert!(board.is_full());

        let err = board.save("Extra", base).unwrap_err();
        assert!(matches!(err, RoiError::ScenarioLimit(3)));
        assert_eq!(board.len(), 3);
    }

    #[test]
    fn test_board_remove_and_lookup() {
        let mut board = ScenarioBoard::new(2);
        let id = board.save("Current", CalculatorInputs::default()).unwrap().id;
        assert!(board.get(&id).is_some());

        let removed = board.remove(&id).unwrap();
        assert_eq!(removed.name, "Current");
        assert!(board.is_empty());
        assert!(matches!(
            board.remove(&id),
            Err(RoiError::ScenarioNotFound(_))
        ));
    }

    #[test]
    fn test_best_by_roi_and_comparison() {
        let mut board = ScenarioBoard::default();
        let base = CalculatorInputs::default();
        board.load_preset(Preset::Worst, &base).unwrap();
        board.load_preset(Preset::Best, &base).unwrap();
        board.load_preset(Preset::Realistic, &base).unwrap();

        assert_eq!(board.best_by_roi().unwrap().name, "Best Case");

        let rows = board.comparison();
        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Worst Case", "Best Case", "Realistic Case"]);
        assert_eq!(rows[1].roi, board.scenarios()[1].results.roi);
    }

    #[test]
    fn test_saved_results_match_direct_calculation() {
        let mut board = ScenarioBoard::default();
        let inputs = Preset::Realistic.apply(&CalculatorInputs::default());
        let saved = board.save("Realistic", inputs).unwrap();
        assert_eq!(saved.results, calculate(&inputs));
    }
}
