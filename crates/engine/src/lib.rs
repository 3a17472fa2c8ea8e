//! Lead nurturing ROI engine. Pure projection of program inputs into
//! revenue and payback estimates, with lead scoring, channel breakdowns,
//! recommendations and scenario comparison on top.

pub mod calculator;
pub mod channels;
pub mod insights;
pub mod scenarios;
pub mod scoring;

pub use calculator::calculate;
pub use insights::{generate_insights, FirstPass};
pub use scenarios::{Preset, SavedScenario, ScenarioBoard};
