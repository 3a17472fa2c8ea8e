//! JSON and CSV export of a projection.

use chrono::{DateTime, Utc};
use nurture_core::{CalculatorInputs, CalculatorResults, RoiResult};
use serde::{Deserialize, Serialize};

use crate::format::currency;

/// Headline figures, pre-formatted for people reading the export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSummary {
    pub roi: String,
    pub monthly_revenue_surplus: String,
    pub payback_period: String,
    pub lead_score: u32,
    pub confidence_score: u32,
}

/// Self-contained export: inputs and results verbatim plus a summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub export_date: DateTime<Utc>,
    pub inputs: CalculatorInputs,
    pub results: CalculatorResults,
    pub summary: ExportSummary,
}

impl ExportDocument {
    pub fn new(
        inputs: &CalculatorInputs,
        results: &CalculatorResults,
        export_date: DateTime<Utc>,
    ) -> Self {
        Self {
            export_date,
            inputs: *inputs,
            results: results.clone(),
            summary: ExportSummary {
                roi: format!("{}%", results.roi),
                monthly_revenue_surplus: currency(results.revenue_surplus),
                payback_period: format!("{} months", results.payback_period_months),
                lead_score: results.lead_score,
                confidence_score: results.confidence_score,
            },
        }
    }
}

pub fn export_json(
    inputs: &CalculatorInputs,
    results: &CalculatorResults,
    export_date: DateTime<Utc>,
) -> RoiResult<String> {
    let document = ExportDocument::new(inputs, results, export_date);
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Quote a CSV field when it contains a delimiter, quote, or line break.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn csv_row(fields: &[String]) -> String {
    fields
        .iter()
        .map(|f| csv_field(f))
        .collect::<Vec<_>>()
        .join(",")
}

pub fn export_csv(inputs: &CalculatorInputs, results: &CalculatorResults) -> String {
    let metric = |name: &str, value: String| vec![name.to_string(), value];

    let mut rows: Vec<Vec<String>> = vec![
        metric("Metric", "Value".to_string()),
        metric("Projected ROI", format!("{}%", results.roi)),
        metric("Baseline Revenue (Monthly)", currency(results.baseline_revenue)),
        metric("Nurtured Revenue (Monthly)", currency(results.nurtured_revenue)),
        metric("Monthly Revenue Surplus", currency(results.revenue_surplus)),
        metric("Annual Time Savings", currency(results.annual_time_savings)),
        metric("Total Investment (Annual)", currency(results.total_investment)),
        metric(
            "Sales Velocity",
            format!("{}/day", currency(results.sales_velocity)),
        ),
        metric("Lead Quality Score", format!("{}/100", results.lead_score)),
        metric("Confidence Score", format!("{}%", results.confidence_score)),
        metric(
            "Payback Period",
            format!("{} months", results.payback_period_months),
        ),
        metric("Break-Even Month", results.break_even_month.to_string()),
        metric("Customer Lifetime Value", currency(results.lifetime_value)),
        metric("3-Year Projection", currency(results.three_year_projection)),
        Vec::new(),
        metric("INPUTS", String::new()),
    ];

    for (name, value) in inputs.fields() {
        rows.push(metric(name, value.to_string()));
    }

    rows.push(Vec::new());
    rows.push(metric("CHANNEL BREAKDOWN", String::new()));
    rows.push(
        ["Channel", "Conversion Rate", "Leads", "Revenue", "ROI"]
            .iter()
            .map(|h| h.to_string())
            .collect(),
    );
    for channel in &results.channel_breakdown {
        rows.push(vec![
            channel.channel.clone(),
            format!("{}%", channel.conversion_rate),
            channel.leads.to_string(),
            currency(channel.revenue),
            format!("{}%", channel.roi),
        ]);
    }

    rows.iter()
        .map(|row| csv_row(row))
        .collect::<Vec<_>>()
        .join("\n")
}
