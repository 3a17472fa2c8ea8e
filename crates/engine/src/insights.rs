//! Threshold-driven recommendations shown alongside a projection.

use nurture_core::CalculatorInputs;

/// The results the insight rules read, computed before the full record
/// exists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FirstPass {
    pub roi: i64,
    pub payback_period_months: f64,
}

/// Evaluate the insight rules in order. The ROI tier always contributes
/// one entry; each later rule contributes at most one.
pub fn generate_insights(inputs: &CalculatorInputs, first_pass: FirstPass) -> Vec<String> {
    let mut insights = Vec::with_capacity(7);

    // ROI tier
    let roi = first_pass.roi;
    insights.push(match roi {
        r if r > 300 => format!(
            "🚀 Exceptional ROI of {}%! Lead nurturing would far outpace typical marketing returns.",
            r
        ),
        r if r > 150 => format!(
            "📈 Strong ROI of {}%. The program should pay for itself several times over.",
            r
        ),
        r if r > 50 => format!(
            "✅ Positive ROI of {}%. Nurturing adds measurable value on top of current results.",
            r
        ),
        r if r > 0 => format!(
            "📊 Low ROI of {}%. Consider trimming tooling costs or targeting a larger conversion lift.",
            r
        ),
        r => format!(
            "⚠️ Negative ROI of {}%. Current costs outweigh the projected gains; revisit your assumptions.",
            r
        ),
    });

    if inputs.standard_conversion_rate < 3.0 {
        insights.push(
            "📊 Your conversion rate is below the 3–5% industry average, so nurturing has extra room to lift results."
                .to_string(),
        );
    } else if inputs.standard_conversion_rate > 8.0 {
        insights.push(
            "🎉 Excellent conversion rate! Nurturing will compound an already strong funnel."
                .to_string(),
        );
    }

    if inputs.sales_cycle_reduction > 20.0 {
        insights.push(format!(
            "⚡ A {}% shorter sales cycle accelerates cash flow and frees reps to work more deals.",
            inputs.sales_cycle_reduction
        ));
    }

    if inputs.monthly_tooling_cost() > 5_000.0 {
        insights.push(
            "💰 Monthly platform and content costs exceed $5,000. Consolidating tools could lift ROI."
                .to_string(),
        );
    }

    if inputs.hours_saved_per_month > 40.0 {
        insights.push(format!(
            "⏰ Saving {} hours per month gives your team time back for high-value selling.",
            inputs.hours_saved_per_month
        ));
    }

    let payback = first_pass.payback_period_months;
    if payback < 3.0 {
        insights.push(format!(
            "🎉 Fast payback: the investment is recovered in {} months.",
            payback
        ));
    } else if payback > 12.0 {
        insights.push(format!(
            "⏰ Long payback period of {} months. Reducing setup costs would shorten it.",
            payback
        ));
    }

    insights
}
