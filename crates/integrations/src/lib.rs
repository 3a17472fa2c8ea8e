//! Outbound surfaces for ROI projections: export documents, share links,
//! lead routing priority and notification payloads.

pub mod export;
pub mod format;
pub mod priority;
pub mod sendfox;
pub mod share;
pub mod slack;

pub use export::{export_csv, export_json, ExportDocument};
pub use priority::{calculate_lead_priority, LeadPriority};
pub use sendfox::{contacts_endpoint, SendFoxContact};
pub use share::{inputs_from_query, mailto_link, share_query, share_url};
pub use slack::SlackMessage;
