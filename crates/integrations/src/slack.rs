//! Slack Block Kit messages announcing new calculator leads.

use nurture_core::{CalculatorInputs, CalculatorResults};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::format::{currency, group_thousands, quantity};
use crate::priority::{calculate_lead_priority, LeadPriority};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextKind {
    PlainText,
    Mrkdwn,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextObject {
    #[serde(rename = "type")]
    pub kind: TextKind,
    pub text: String,
}

impl TextObject {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            kind: TextKind::PlainText,
            text: text.into(),
        }
    }

    pub fn markdown(text: impl Into<String>) -> Self {
        Self {
            kind: TextKind::Mrkdwn,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ActionElement {
    Button {
        text: TextObject,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<String>,
        url: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    Header {
        text: TextObject,
    },
    Section {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<TextObject>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        fields: Vec<TextObject>,
    },
    Actions {
        elements: Vec<ActionElement>,
    },
}

/// Incoming-webhook payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlackMessage {
    /// Fallback text for notifications.
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blocks: Vec<Block>,
}

const NO_INSIGHT: &str = "No specific insights available";

impl SlackMessage {
    pub fn lead_notification(
        email: &str,
        results: &CalculatorResults,
        inputs: &CalculatorInputs,
        calculator_url: &str,
    ) -> Self {
        let priority = calculate_lead_priority(results);
        let field = |label: &str, value: String| TextObject::markdown(format!("*{}:*\n{}", label, value));

        let blocks = vec![
            Block::Header {
                text: TextObject::plain(format!(
                    "{} New Lead Alert - {} Priority",
                    priority.emoji(),
                    priority.as_str().to_uppercase()
                )),
            },
            Block::Section {
                text: None,
                fields: vec![
                    field("Email", email.to_string()),
                    field("Projected ROI", format!("{}%", results.roi)),
                    field(
                        "Revenue Potential",
                        format!("{}/mo", currency(results.revenue_surplus)),
                    ),
                    field("Lead Score", format!("{}/100", results.lead_score)),
                    field(
                        "Current Leads",
                        format!("{}/mo", quantity(inputs.current_leads)),
                    ),
                    field(
                        "Avg Deal Size",
                        format!("${}", quantity(inputs.average_deal_size)),
                    ),
                    field("Confidence", format!("{}%", results.confidence_score)),
                    field(
                        "Payback Period",
                        format!("{} months", results.payback_period_months),
                    ),
                ],
            },
            Block::Section {
                text: Some(TextObject::markdown(format!(
                    "*Top Insight:* {}",
                    results.top_insight().unwrap_or(NO_INSIGHT)
                ))),
                fields: Vec::new(),
            },
            Block::Actions {
                elements: vec![
                    ActionElement::Button {
                        text: TextObject::plain("👤 View Lead Details"),
                        style: (priority == LeadPriority::High).then(|| "primary".to_string()),
                        url: format!("mailto:{}", email),
                    },
                    ActionElement::Button {
                        text: TextObject::plain("📊 Open Calculator"),
                        style: None,
                        url: calculator_url.to_string(),
                    },
                ],
            },
        ];

        info!(
            priority = %priority,
            roi = results.roi,
            surplus = %group_thousands(results.revenue_surplus),
            "Slack lead notification prepared"
        );

        Self {
            text: format!("New High-Intent Lead: {}", email),
            blocks,
        }
    }

    /// Payload used to verify a webhook URL.
    pub fn connection_test() -> Self {
        Self {
            text: "✅ Test message from ROI Calculator - Integration is working!".to_string(),
            blocks: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nurture_engine::calculate;

    fn notification(results: &CalculatorResults) -> SlackMessage {
        SlackMessage::lead_notification(
            "ada@example.com",
            results,
            &CalculatorInputs::default(),
            "https://roi.example.com/calculator",
        )
    }

    #[test]
    fn test_lead_notification_structure() {
        let results = calculate(&CalculatorInputs::default());
        let message = notification(&results);

        assert_eq!(message.text, "New High-Intent Lead: ada@example.com");
        assert_eq!(message.blocks.len(), 4);
        match &message.blocks[0] {
            Block::Header { text } => {
                assert_eq!(text.text, "⚡ New Lead Alert - MEDIUM Priority");
            }
            other => panic!("expected header, got {:?}", other),
        }
        match &message.blocks[1] {
            Block::Section { fields, .. } => {
                assert_eq!(fields.len(), 8);
                assert_eq!(fields[2].text, "*Revenue Potential:*\n$85,000/mo");
                assert_eq!(fields[4].text, "*Current Leads:*\n500/mo");
            }
            other => panic!("expected section, got {:?}", other),
        }
    }

    #[test]
    fn test_wire_format() {
        let results = calculate(&CalculatorInputs::default());
        let value = serde_json::to_value(notification(&results)).unwrap();

        assert_eq!(value["blocks"][0]["type"], "header");
        assert_eq!(value["blocks"][0]["text"]["type"], "plain_text");
        assert_eq!(value["blocks"][1]["type"], "section");
        assert_eq!(value["blocks"][1]["fields"][0]["type"], "mrkdwn");
        assert!(value["blocks"][1].get("text").is_none());
        assert_eq!(value["blocks"][3]["elements"][0]["type"], "button");
        assert!(value["blocks"][3]["elements"][0].get("style").is_none());
        assert_eq!(
            value["blocks"][3]["elements"][1]["url"],
            "https://roi.example.com/calculator"
        );
    }

    #[test]
    fn test_high_priority_uses_primary_button() {
        let mut results = calculate(&CalculatorInputs::default());
        results.lead_score = 85;
        let message = notification(&results);
        match &message.blocks[3] {
            Block::Actions { elements } => {
                let ActionElement::Button { style, url, .. } = &elements[0];
                assert_eq!(style.as_deref(), Some("primary"));
                assert_eq!(url, "mailto:ada@example.com");
            }
            other => panic!("expected actions, got {:?}", other),
        }
    }

    #[test]
    fn test_top_insight_fallback() {
        let mut results = calculate(&CalculatorInputs::default());
        results.insights.clear();
        let message = notification(&results);
        match &message.blocks[2] {
            Block::Section { text: Some(text), .. } => {
                assert_eq!(text.text, "*Top Insight:* No specific insights available");
            }
            other => panic!("expected insight section, got {:?}", other),
        }
    }

    #[test]
    fn test_connection_test_payload() {
        let value = serde_json::to_value(SlackMessage::connection_test()).unwrap();
        assert!(value["text"].as_str().unwrap().contains("Integration is working"));
        assert!(value.get("blocks").is_none());
    }
}
