//! Bounded 1–100 scores derived from program inputs.

use nurture_core::CalculatorInputs;

const MIN_SCORE: i32 = 1;
const MAX_SCORE: i32 = 100;

fn clamp_score(score: i32) -> u32 {
    score.clamp(MIN_SCORE, MAX_SCORE) as u32
}

/// How promising the lead pipeline looks, from conversion, deal size, and
/// expected nurturing impact.
pub fn lead_quality_score(inputs: &CalculatorInputs) -> u32 {
    let mut score = 50;

    score += match inputs.standard_conversion_rate {
        r if r > 5.0 => 15,
        r if r > 3.0 => 10,
        r if r < 2.0 => -10,
        _ => 0,
    };

    score += match inputs.average_deal_size {
        d if d > 10_000.0 => 15,
        d if d > 5_000.0 => 10,
        d if d < 2_000.0 => -10,
        _ => 0,
    };

    score += match inputs.conversion_rate_lift {
        l if l > 40.0 => 10,
        l if l > 25.0 => 5,
        _ => 0,
    };

    score += match inputs.sales_cycle_reduction {
        c if c > 25.0 => 10,
        c if c > 15.0 => 5,
        _ => 0,
    };

    clamp_score(score)
}

/// How believable the projection is. Assumptions far outside typical
/// benchmarks lower the score.
pub fn confidence_score(inputs: &CalculatorInputs) -> u32 {
    let mut score = 70;

    if (2.0..=10.0).contains(&inputs.standard_conversion_rate) {
        score += 10;
    } else {
        score -= 15;
    }

    if inputs.conversion_rate_lift <= 50.0 {
        score += 10;
    } else if inputs.conversion_rate_lift > 100.0 {
        score -= 20;
    }

    if inputs.aov_increase <= 50.0 {
        score += 5;
    } else {
        score -= 10;
    }

    if inputs.current_leads >= 100.0 {
        score += 5;
    } else if inputs.current_leads < 50.0 {
        score -= 10;
    }

    clamp_score(score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lead_score_for_default_inputs() {
        // 50 + 10 (rate > 3) + 0 (deal 5000) + 5 (lift > 25) + 5 (cycle > 15)
        assert_eq!(lead_quality_score(&CalculatorInputs::default()), 70);
    }

    #[test]
    fn test_lead_score_band_edges_are_exclusive() {
        let inputs = CalculatorInputs {
            standard_conversion_rate: 5.0,
            average_deal_size: 10_000.0,
            conversion_rate_lift: 40.0,
            sales_cycle_reduction: 25.0,
            ..Default::default()
        };
        // 50 + 10 + 10 + 5 + 5
        assert_eq!(lead_quality_score(&inputs), 80);
    }

    #[test]
    fn test_lead_score_maximum() {
        let inputs = CalculatorInputs {
            standard_conversion_rate: 8.0,
            average_deal_size: 25_000.0,
            conversion_rate_lift: 60.0,
            sales_cycle_reduction: 40.0,
            ..Default::default()
        };
        assert_eq!(lead_quality_score(&inputs), 100);
    }

    #[test]
    fn test_lead_score_penalties() {
        let inputs = CalculatorInputs {
            standard_conversion_rate: 1.0,
            average_deal_size: 500.0,
            conversion_rate_lift: 10.0,
            sales_cycle_reduction: 5.0,
            ..Default::default()
        };
        assert_eq!(lead_quality_score(&inputs), 30);
    }

    #[test]
    fn test_confidence_for_default_inputs_is_clamped() {
        // 70 + 10 + 10 + 5 + 5 = 100
        assert_eq!(confidence_score(&CalculatorInputs::default()), 100);
    }

    #[test]
    fn test_confidence_penalises_aggressive_assumptions() {
        let inputs = CalculatorInputs {
            standard_conversion_rate: 15.0,
            conversion_rate_lift: 150.0,
            aov_increase: 80.0,
            current_leads: 20.0,
            ..Default::default()
        };
        // 70 - 15 - 20 - 10 - 10
        assert_eq!(confidence_score(&inputs), 15);
    }

    #[test]
    fn test_confidence_middle_bands_are_neutral() {
        let inputs = CalculatorInputs {
            standard_conversion_rate: 2.0,
            conversion_rate_lift: 75.0,
            aov_increase: 50.0,
            current_leads: 75.0,
            ..Default::default()
        };
        // 70 + 10 + 0 + 5 + 0
        assert_eq!(confidence_score(&inputs), 85);
    }
}
