//! Share links and mail-to summaries.

use nurture_core::{CalculatorInputs, CalculatorResults, RoiError, RoiResult};
use tracing::debug;
use url::{form_urlencoded, Url};

use crate::format::currency;

fn shared_values(inputs: &CalculatorInputs) -> [(&'static str, f64); 5] {
    [
        ("revenue", inputs.target_monthly_revenue),
        ("dealSize", inputs.average_deal_size),
        ("leads", inputs.current_leads),
        ("convRate", inputs.standard_conversion_rate),
        ("lift", inputs.conversion_rate_lift),
    ]
}

fn share_field<'a>(inputs: &'a mut CalculatorInputs, key: &str) -> Option<&'a mut f64> {
    match key {
        "revenue" => Some(&mut inputs.target_monthly_revenue),
        "dealSize" => Some(&mut inputs.average_deal_size),
        "leads" => Some(&mut inputs.current_leads),
        "convRate" => Some(&mut inputs.standard_conversion_rate),
        "lift" => Some(&mut inputs.conversion_rate_lift),
        _ => None,
    }
}

/// Encode the headline inputs as a form-urlencoded query string.
pub fn share_query(inputs: &CalculatorInputs) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in shared_values(inputs) {
        serializer.append_pair(key, &value.to_string());
    }
    serializer.finish()
}

/// `base_url` with the share query attached, replacing any existing query.
pub fn share_url(base_url: &str, inputs: &CalculatorInputs) -> RoiResult<String> {
    let mut url = Url::parse(base_url)
        .map_err(|e| RoiError::Config(format!("invalid share base URL {}: {}", base_url, e)))?;
    url.set_query(Some(&share_query(inputs)));
    Ok(url.into())
}

/// Overlay the values in a share query onto `base`.
///
/// Unknown keys are ignored. A recognised key with an unparseable value is
/// an error, as is any non-finite result.
pub fn inputs_from_query(query: &str, base: &CalculatorInputs) -> RoiResult<CalculatorInputs> {
    let mut inputs = *base;
    let query = query.trim_start_matches('?');

    for (key, raw) in form_urlencoded::parse(query.as_bytes()) {
        let Some(slot) = share_field(&mut inputs, &key) else {
            debug!(key = %key, "Ignoring unknown share parameter");
            continue;
        };
        *slot = raw.trim().parse::<f64>().map_err(|_| RoiError::InvalidField {
            field: key.to_string(),
            value: raw.to_string(),
        })?;
    }

    inputs.validate()?;
    Ok(inputs)
}

/// `mailto:` link whose body summarises the projection.
pub fn mailto_link(results: &CalculatorResults, view_url: &str) -> String {
    let subject = "Lead Nurturing ROI Calculator Results";
    let body = format!(
        "My Lead Nurturing ROI Analysis:\n\n\
         📊 Projected ROI: {}%\n\
         💰 Monthly Revenue Surplus: {}\n\
         ⚡ Sales Velocity: {}/day\n\
         🎯 Lead Score: {}/100\n\
         📈 3-Year Projection: {}\n\n\
         View full details: {}",
        results.roi,
        currency(results.revenue_surplus),
        currency(results.sales_velocity),
        results.lead_score,
        currency(results.three_year_projection),
        view_url,
    );

    format!(
        "mailto:?subject={}&body={}",
        urlencoding::encode(subject),
        urlencoding::encode(&body)
    )
}
