//! Per-channel revenue and ROI estimates against historical benchmarks.

use nurture_core::{CalculatorInputs, ChannelEntry};

/// Historical conversion-rate benchmarks (percent), in display order.
pub const CHANNEL_BENCHMARKS: [(&str, f64); 6] = [
    ("Organic Search (SEO)", 51.0),
    ("Email Marketing", 46.0),
    ("Paid Search (PPC)", 26.0),
    ("Webinars", 23.0),
    ("Social Media", 12.0),
    ("Lead Lists", 2.5),
];

/// Distribute current lead volume across the benchmark channels.
///
/// Volume is split evenly (not by channel share); the floor division may
/// drop up to five leads. Tooling spend is split evenly as well.
pub fn channel_breakdown(inputs: &CalculatorInputs, deal_size: f64) -> Vec<ChannelEntry> {
    let channel_count = CHANNEL_BENCHMARKS.len() as f64;
    let leads_per_channel = (inputs.current_leads / channel_count).floor();
    let investment_per_channel = inputs.monthly_tooling_cost() * 12.0 / channel_count;

    CHANNEL_BENCHMARKS
        .iter()
        .map(|&(channel, rate)| {
            let revenue = leads_per_channel * (rate / 100.0) * deal_size * 12.0;
            let roi = if investment_per_channel > 0.0 {
                (revenue - investment_per_channel) / investment_per_channel * 100.0
            } else {
                0.0
            };

            ChannelEntry {
                channel: channel.to_string(),
                conversion_rate: rate,
                leads: leads_per_channel as i64,
                revenue: revenue.round() as i64,
                roi: roi.round() as i64,
            }
        })
        .collect()
}
