//! Shared records, configuration, and errors for the lead nurturing ROI
//! calculator.

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{RoiError, RoiResult};
pub use types::{
    CalculatorInputs, CalculatorResults, ChannelEntry, MonthlyProjection, RoiShare,
};
