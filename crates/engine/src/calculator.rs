//! Core projection: maps program inputs to the full results record.
//!
//! Every division is guarded, so the projection is total over finite
//! inputs and never produces NaN or infinite values.

use nurture_core::{CalculatorInputs, CalculatorResults, MonthlyProjection, RoiShare};
use tracing::debug;

use crate::channels::channel_breakdown;
use crate::insights::{generate_insights, FirstPass};
use crate::scoring::{confidence_score, lead_quality_score};

/// Sales cycle length before nurturing, in days.
pub const BASE_CYCLE_DAYS: f64 = 45.0;
/// Months covered by the break-even search.
pub const BREAK_EVEN_HORIZON_MONTHS: u32 = 36;
/// Reported when the program does not pay back within the modeled horizon.
pub const NO_PAYBACK_MONTHS: f64 = 99.0;
pub const NO_BREAK_EVEN_MONTH: u32 = 99;

const RAMP_UP_MONTHS: f64 = 3.0;
const RETENTION_RATE: f64 = 0.85;
const EXPANSION_RATE: f64 = 1.15;
/// Share of the annual revenue gain attributed to lifetime-value uplift.
const LTV_UPLIFT: f64 = 0.3;

/// Linear ramp-up of program effectiveness: 1/3, 2/3, then full effect.
pub fn ramp(month: u32) -> f64 {
    (month as f64 / RAMP_UP_MONTHS).min(1.0)
}

fn whole(value: f64) -> i64 {
    value.round() as i64
}

fn ceil_count(value: f64) -> i64 {
    value.ceil() as i64
}

/// Run the full projection for one set of inputs.
pub fn calculate(inputs: &CalculatorInputs) -> CalculatorResults {
    let std_rate = inputs.standard_conversion_rate / 100.0;
    let nurtured_rate = std_rate * (1.0 + inputs.conversion_rate_lift / 100.0);
    let nurtured_aov = inputs.average_deal_size * (1.0 + inputs.aov_increase / 100.0);

    // Monthly revenue
    let baseline_revenue = inputs.current_leads * std_rate * inputs.average_deal_size;
    let nurtured_revenue = inputs.current_leads * nurtured_rate * nurtured_aov;
    let revenue_surplus = nurtured_revenue - baseline_revenue;

    let annual_time_savings = inputs.hours_saved_per_month * inputs.hourly_labor_rate * 12.0;

    // Total cost of ownership, first year
    let monthly_cost = inputs.monthly_tooling_cost();
    let training_cost = inputs.training_cost();
    let upfront_cost = inputs.setup_costs + training_cost;
    let total_investment = monthly_cost * 12.0 + upfront_cost;

    let total_gain = revenue_surplus * 12.0 + annual_time_savings;
    // Without a baseline conversion rate there is no revenue funnel to model.
    let roi = if total_investment > 0.0 && std_rate != 0.0 {
        (total_gain - total_investment) / total_investment * 100.0
    } else {
        0.0
    };

    // Sales velocity, $/day
    let nurtured_cycle_days = BASE_CYCLE_DAYS * (1.0 - inputs.sales_cycle_reduction / 100.0);
    let sales_velocity_baseline =
        inputs.current_leads * inputs.average_deal_size * std_rate / BASE_CYCLE_DAYS;
    let sales_velocity = if nurtured_cycle_days > 0.0 {
        inputs.current_leads * nurtured_aov * nurtured_rate / nurtured_cycle_days
    } else {
        0.0
    };

    // Reverse funnel from the revenue target
    let customers_needed = if inputs.average_deal_size > 0.0 {
        ceil_count(inputs.target_monthly_revenue / inputs.average_deal_size)
    } else {
        0
    };
    let leads_required = if nurtured_rate > 0.0 {
        ceil_count(customers_needed as f64 / nurtured_rate)
    } else {
        0
    };
    let visitor_rate = inputs.visitor_to_lead_rate / 100.0;
    let visitors_needed = if visitor_rate > 0.0 {
        ceil_count(leads_required as f64 / visitor_rate)
    } else {
        0
    };

    let cac_reduction = if inputs.conversion_rate_lift > 0.0 {
        inputs.conversion_rate_lift / (100.0 + inputs.conversion_rate_lift) * 100.0
    } else {
        0.0
    };

    let monthly_net_gain = revenue_surplus + annual_time_savings / 12.0;
    let payback_period_months = if monthly_net_gain > monthly_cost {
        let months = (upfront_cost / (monthly_net_gain - monthly_cost) * 10.0).round() / 10.0;
        // A vanishing net gain overflows the quotient.
        if months.is_finite() {
            months
        } else {
            NO_PAYBACK_MONTHS
        }
    } else {
        NO_PAYBACK_MONTHS
    };

    let break_even_month = break_even_month(
        revenue_surplus,
        annual_time_savings / 12.0,
        monthly_cost,
        upfront_cost,
    );

    let monthly_projections = (1..=12)
        .map(|month| MonthlyProjection {
            month,
            baseline: whole(baseline_revenue),
            nurtured: whole(baseline_revenue + revenue_surplus * ramp(month)),
        })
        .collect();

    let roi_breakdown = roi_breakdown(revenue_surplus * 12.0, annual_time_savings);

    // Three-year value with retention and expansion compounding
    let year1 = nurtured_revenue * 12.0;
    let year2 = year1 * RETENTION_RATE * EXPANSION_RATE;
    let year3 = year2 * RETENTION_RATE * EXPANSION_RATE;
    let three_year_projection = year1 + year2 + year3;
    let nurtured_customers = inputs.current_leads * nurtured_rate;
    let ltv_denominator = if nurtured_customers != 0.0 {
        nurtured_customers
    } else {
        1.0
    };
    let lifetime_value = three_year_projection / ltv_denominator;

    let first_pass = FirstPass {
        roi: whole(roi),
        payback_period_months,
    };
    let insights = generate_insights(inputs, first_pass);

    let baseline_rounded = whole(baseline_revenue);
    let nurtured_rounded = whole(nurtured_revenue);

    let results = CalculatorResults {
        roi: first_pass.roi,
        baseline_revenue: baseline_rounded,
        nurtured_revenue: nurtured_rounded,
        revenue_surplus: nurtured_rounded - baseline_rounded,
        annual_time_savings: whole(annual_time_savings),
        total_investment: whole(total_investment),
        total_gain: whole(total_gain),
        sales_velocity: whole(sales_velocity),
        sales_velocity_baseline: whole(sales_velocity_baseline),
        customers_needed,
        leads_required,
        visitors_needed,
        cac_reduction: whole(cac_reduction),
        payback_period_months: first_pass.payback_period_months,
        monthly_projections,
        roi_breakdown,
        lead_score: lead_quality_score(inputs),
        confidence_score: confidence_score(inputs),
        break_even_month,
        lifetime_value: whole(lifetime_value),
        three_year_projection: whole(three_year_projection),
        channel_breakdown: channel_breakdown(inputs, nurtured_aov),
        insights,
    };

    debug!(
        roi = results.roi,
        revenue_surplus = results.revenue_surplus,
        payback_months = results.payback_period_months,
        break_even_month = results.break_even_month,
        lead_score = results.lead_score,
        insights = results.insights.len(),
        "ROI projection calculated"
    );

    results
}

/// First month, within the horizon, at which cumulative net gain is
/// non-negative. Upfront costs land in month one.
fn break_even_month(
    revenue_surplus: f64,
    monthly_time_savings: f64,
    monthly_cost: f64,
    upfront_cost: f64,
) -> u32 {
    let mut cumulative_gain = 0.0;
    for month in 1..=BREAK_EVEN_HORIZON_MONTHS {
        let gain = revenue_surplus * ramp(month) + monthly_time_savings;
        let mut investment = monthly_cost;
        if month == 1 {
            investment += upfront_cost;
        }
        cumulative_gain += gain - investment;
        if cumulative_gain >= 0.0 {
            return month;
        }
    }
    NO_BREAK_EVEN_MONTH
}

fn roi_breakdown(revenue_gain: f64, cost_savings: f64) -> Vec<RoiShare> {
    let ltv_impact = revenue_gain * LTV_UPLIFT;
    let total = revenue_gain + cost_savings + ltv_impact;

    [
        ("Revenue Gain", revenue_gain, 40),
        ("Cost Savings", cost_savings, 30),
        ("LTV Impact", ltv_impact, 30),
    ]
    .into_iter()
    .map(|(name, share, fallback)| RoiShare {
        name: name.to_string(),
        value: if total > 0.0 {
            whole(share / total * 100.0)
        } else {
            fallback
        },
    })
    .collect()
}
