//! SendFox contact payloads carrying projection results as custom fields.

use nurture_core::{CalculatorInputs, CalculatorResults, RoiError, RoiResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::format::currency;
use crate::priority::calculate_lead_priority;

pub const SENDFOX_API_BASE: &str = "https://api.sendfox.com";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactField {
    pub name: String,
    pub value: Value,
}

impl ContactField {
    fn new(name: &str, value: impl Into<Value>) -> Self {
        Self {
            name: name.to_string(),
            value: value.into(),
        }
    }
}

/// Body of a `POST /contacts` request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendFoxContact {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lists: Vec<u64>,
    pub contact_fields: Vec<ContactField>,
}

fn whole_number(value: f64) -> Value {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Value::from(value as i64)
    } else {
        Value::from(value)
    }
}

impl SendFoxContact {
    pub fn from_results(
        email: &str,
        first_name: Option<&str>,
        last_name: Option<&str>,
        inputs: &CalculatorInputs,
        results: &CalculatorResults,
        lists: &[u64],
    ) -> RoiResult<Self> {
        let email = email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(RoiError::Validation(format!(
                "invalid contact email: {:?}",
                email
            )));
        }

        let priority = calculate_lead_priority(results);
        let contact = Self {
            email: email.to_string(),
            first_name: first_name.map(str::to_string),
            last_name: last_name.map(str::to_string),
            lists: lists.to_vec(),
            contact_fields: vec![
                ContactField::new("Projected_ROI", format!("{}%", results.roi)),
                ContactField::new("Revenue_Surplus", currency(results.revenue_surplus)),
                ContactField::new("Lead_Score", results.lead_score),
                ContactField::new("Confidence_Score", results.confidence_score),
                ContactField::new(
                    "Payback_Period",
                    format!("{} months", results.payback_period_months),
                ),
                ContactField::new("Current_Leads", whole_number(inputs.current_leads)),
                ContactField::new("Avg_Deal_Size", format!("${}", inputs.average_deal_size)),
                ContactField::new("Priority", priority.as_str()),
                ContactField::new(
                    "Sales_Velocity",
                    format!("{}/day", currency(results.sales_velocity)),
                ),
                ContactField::new("LTV", currency(results.lifetime_value)),
            ],
        };

        info!(priority = %priority, lists = contact.lists.len(), "SendFox contact prepared");
        Ok(contact)
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.contact_fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| &f.value)
    }
}

/// Endpoint for creating contacts.
pub fn contacts_endpoint() -> String {
    format!("{}/contacts", SENDFOX_API_BASE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nurture_engine::calculate;

    fn field(contact: &SendFoxContact, name: &str) -> Value {
        contact.field(name).cloned().unwrap_or(Value::Null)
    }

    #[test]
    fn test_contact_fields_from_results() {
        let inputs = CalculatorInputs::default();
        let results = calculate(&inputs);
        let contact = SendFoxContact::from_results(
            "ada@example.com",
            Some("Ada"),
            None,
            &inputs,
            &results,
            &[42],
        )
        .unwrap();

        assert_eq!(contact.contact_fields.len(), 10);
        assert_eq!(field(&contact, "Projected_ROI"), "2800%");
        assert_eq!(field(&contact, "Revenue_Surplus"), "$85,000");
        assert_eq!(field(&contact, "Lead_Score"), 70);
        assert_eq!(field(&contact, "Current_Leads"), 500);
        assert_eq!(field(&contact, "Avg_Deal_Size"), "$5000");
        // ROI clears 200 but a lead score of 70 does not clear 70.
        assert_eq!(field(&contact, "Priority"), "medium");
        assert_eq!(contact.first_name.as_deref(), Some("Ada"));
        assert_eq!(contact.lists, vec![42]);
    }

    #[test]
    fn test_contact_serialization_omits_missing_names() {
        let inputs = CalculatorInputs::default();
        let results = calculate(&inputs);
        let contact =
            SendFoxContact::from_results("lead@example.com", None, None, &inputs, &results, &[])
                .unwrap();
        let value = serde_json::to_value(&contact).unwrap();

        assert_eq!(value["email"], "lead@example.com");
        assert!(value.get("first_name").is_none());
        assert!(value.get("lists").is_none());
        assert_eq!(value["contact_fields"][0]["name"], "Projected_ROI");
    }

    #[test]
    fn test_rejects_invalid_email() {
        let inputs = CalculatorInputs::default();
        let results = calculate(&inputs);
        let err = SendFoxContact::from_results("   ", None, None, &inputs, &results, &[]);
        assert!(matches!(err, Err(RoiError::Validation(_))));
    }

    #[test]
    fn test_contacts_endpoint() {
        assert_eq!(contacts_endpoint(), "https://api.sendfox.com/contacts");
    }
}
