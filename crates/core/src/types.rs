use serde::{Deserialize, Serialize};

use crate::error::{RoiError, RoiResult};

// ─── Input Record ───────────────────────────────────────────────────────────

/// Business parameters describing a lead nurturing program.
///
/// Percent fields are whole percentages (`5.0` means 5%). Missing fields
/// deserialize to the documented default input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalculatorInputs {
    // Financial goals
    pub target_monthly_revenue: f64,
    pub average_deal_size: f64,
    pub current_leads: f64,
    pub standard_conversion_rate: f64,
    pub visitor_to_lead_rate: f64,

    // Nurturing impact
    pub conversion_rate_lift: f64,
    pub sales_cycle_reduction: f64,
    pub aov_increase: f64,

    // Efficiency gains
    pub hours_saved_per_month: f64,
    pub hourly_labor_rate: f64,

    // Costs (monthly unless noted)
    pub platform_fees: f64,
    pub content_creation_costs: f64,
    /// One-time.
    pub setup_costs: f64,
    pub training_hours: f64,
}

impl Default for CalculatorInputs {
    fn default() -> Self {
        Self {
            target_monthly_revenue: 100_000.0,
            average_deal_size: 5_000.0,
            current_leads: 500.0,
            standard_conversion_rate: 5.0,
            visitor_to_lead_rate: 3.0,
            conversion_rate_lift: 40.0,
            sales_cycle_reduction: 25.0,
            aov_increase: 20.0,
            hours_saved_per_month: 40.0,
            hourly_labor_rate: 50.0,
            platform_fees: 500.0,
            content_creation_costs: 2_000.0,
            setup_costs: 5_000.0,
            training_hours: 20.0,
        }
    }
}

impl CalculatorInputs {
    /// Every field paired with its wire name, in declaration order.
    pub fn fields(&self) -> [(&'static str, f64); 14] {
        [
            ("targetMonthlyRevenue", self.target_monthly_revenue),
            ("averageDealSize", self.average_deal_size),
            ("currentLeads", self.current_leads),
            ("standardConversionRate", self.standard_conversion_rate),
            ("visitorToLeadRate", self.visitor_to_lead_rate),
            ("conversionRateLift", self.conversion_rate_lift),
            ("salesCycleReduction", self.sales_cycle_reduction),
            ("aovIncrease", self.aov_increase),
            ("hoursSavedPerMonth", self.hours_saved_per_month),
            ("hourlyLaborRate", self.hourly_labor_rate),
            ("platformFees", self.platform_fees),
            ("contentCreationCosts", self.content_creation_costs),
            ("setupCosts", self.setup_costs),
            ("trainingHours", self.training_hours),
        ]
    }

    /// Combined monthly tooling spend.
    pub fn monthly_tooling_cost(&self) -> f64 {
        self.platform_fees + self.content_creation_costs
    }

    /// One-time training cost in labor dollars.
    pub fn training_cost(&self) -> f64 {
        self.training_hours * self.hourly_labor_rate
    }

    /// Reject NaN and infinite values before they reach the engine.
    ///
    /// Negative or otherwise unusual values are accepted; they propagate
    /// arithmetically.
    pub fn validate(&self) -> RoiResult<()> {
        for (name, value) in self.fields() {
            if !value.is_finite() {
                return Err(RoiError::Validation(format!(
                    "{} must be a finite number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

// ─── Result Record ──────────────────────────────────────────────────────────

/// Projected lead volume and return for one marketing channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelEntry {
    pub channel: String,
    /// Historical benchmark conversion rate, in percent.
    pub conversion_rate: f64,
    pub leads: i64,
    /// Annual revenue estimate.
    pub revenue: i64,
    pub roi: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyProjection {
    pub month: u32,
    pub baseline: i64,
    pub nurtured: i64,
}

/// One named percentage share of the total gain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoiShare {
    pub name: String,
    pub value: i64,
}

/// Everything the engine derives from a [`CalculatorInputs`].
///
/// Monetary and derived fields are rounded to whole numbers, except
/// `payback_period_months` which carries one decimal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorResults {
    pub roi: i64,
    pub baseline_revenue: i64,
    pub nurtured_revenue: i64,
    pub revenue_surplus: i64,
    pub annual_time_savings: i64,
    pub total_investment: i64,
    pub total_gain: i64,
    /// Dollars per day.
    pub sales_velocity: i64,
    pub sales_velocity_baseline: i64,
    pub customers_needed: i64,
    pub leads_required: i64,
    pub visitors_needed: i64,
    pub cac_reduction: i64,
    /// `99.0` when the program never pays back.
    pub payback_period_months: f64,
    pub monthly_projections: Vec<MonthlyProjection>,
    pub roi_breakdown: Vec<RoiShare>,
    pub lead_score: u32,
    pub confidence_score: u32,
    /// `99` when cumulative gain stays negative for 36 months.
    pub break_even_month: u32,
    pub lifetime_value: i64,
    pub three_year_projection: i64,
    pub channel_breakdown: Vec<ChannelEntry>,
    pub insights: Vec<String>,
}

impl CalculatorResults {
    /// First insight, used as the headline in notifications.
    pub fn top_insight(&self) -> Option<&str> {
        self.insights.first().map(String::as_str)
    }
}
