//! Spreadsheet sink.
//!
//! The legacy sink is a web-app endpoint that appends one row per
//! registration to a spreadsheet. This module holds its request handling;
//! the spreadsheet itself is reached through the [`Sheet`] trait.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::registration::OPERATIVE_SLOTS;

/// Header row written to an empty sheet.
pub const HEADER: [&str; 14] = [
    "Timestamp",
    "Team_ID",
    "Op1_Nickname",
    "Op1_Serial",
    "Op1_Email",
    "Op2_Nickname",
    "Op2_Serial",
    "Op2_Email",
    "Op3_Nickname",
    "Op3_Serial",
    "Op3_Email",
    "Op4_Nickname",
    "Op4_Serial",
    "Op4_Email",
];

/// A spreadsheet rows can be appended to.
pub trait Sheet {
    /// Error returned when appending fails.
    type Error: Display;

    /// Index of the last non-empty row, `0` for an empty sheet.
    fn last_row(&self) -> usize;

    /// Appends a row after the last one.
    fn append_row(&mut self, row: Vec<String>) -> Result<(), Self::Error>;
}

/// JSON reply of the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SheetResponse {
    /// Nothing to append.
    Status {
        /// Always `"ok"`.
        status: &'static str,
        /// Human-readable detail.
        message: &'static str,
    },
    /// An append was attempted.
    Outcome {
        /// Whether the row was appended.
        success: bool,
        /// Why it was not.
        #[serde(skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    },
}

impl SheetResponse {
    fn no_data() -> Self {
        Self::Status {
            status: "ok",
            message: "No data parameter",
        }
    }

    fn appended() -> Self {
        Self::Outcome {
            success: true,
            error: None,
        }
    }

    fn failed(error: impl Display) -> Self {
        Self::Outcome {
            success: false,
            error: Some(error.to_string()),
        }
    }

    /// Serializes the reply to JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| r#"{"success":false}"#.to_string())
    }
}

/// Operative as sent to the endpoint. Any field may be missing, `null` or
/// of any JSON type.
#[derive(Debug, Default, Deserialize)]
struct SheetOperative {
    #[serde(default)]
    nickname: Option<Value>,
    #[serde(default)]
    serial: Option<Value>,
    #[serde(default)]
    email: Option<Value>,
}

/// Registration as sent to the endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SheetPayload {
    #[serde(default)]
    team_id: Option<Value>,
    #[serde(default)]
    operatives: Option<Vec<Option<SheetOperative>>>,
}

impl SheetPayload {
    /// Builds the row for this payload, padded to every operative slot.
    fn row(&self, timestamp: &str) -> Vec<String> {
        let mut row = Vec::with_capacity(HEADER.len());
        row.push(timestamp.to_string());
        row.push(cell(self.team_id.as_ref()));

        let operatives = self.operatives.as_deref().unwrap_or_default();
        for slot in 0..OPERATIVE_SLOTS.len() {
            let operative = operatives.get(slot).and_then(Option::as_ref);
            let field = |pick: fn(&SheetOperative) -> &Option<Value>| {
                truthy_cell(operative.and_then(|operative| pick(operative).as_ref()))
            };
            row.push(field(|o| &o.nickname));
            row.push(field(|o| &o.serial));
            row.push(field(|o| &o.email));
        }
        row
    }
}

/// Text of a cell. Strings are written as is, other values as JSON, and a
/// missing or `null` value leaves the cell empty.
fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

/// Like [`cell`], but `false` and `0` leave the cell empty too.
fn truthy_cell(value: Option<&Value>) -> String {
    match value {
        Some(Value::Bool(false)) => String::new(),
        Some(Value::Number(number)) if number.as_f64() == Some(0.0) => String::new(),
        value => cell(value),
    }
}

/// Handles a `GET` request carrying the registration in its `data` query
/// parameter.
pub fn handle_get<S: Sheet>(sheet: &mut S, data: Option<&str>, timestamp: &str) -> SheetResponse {
    match data {
        Some(data) if !data.is_empty() => append(sheet, data, timestamp),
        _ => SheetResponse::no_data(),
    }
}

/// Handles a `POST` request carrying the registration as its JSON body.
pub fn handle_post<S: Sheet>(sheet: &mut S, body: &str, timestamp: &str) -> SheetResponse {
    append(sheet, body, timestamp)
}

fn append<S: Sheet>(sheet: &mut S, raw: &str, timestamp: &str) -> SheetResponse {
    let payload: SheetPayload = match serde_json::from_str(raw) {
        Ok(payload) => payload,
        Err(error) => return SheetResponse::failed(error),
    };

    if sheet.last_row() == 0 {
        let header = HEADER.iter().map(|title| title.to_string()).collect();
        if let Err(error) = sheet.append_row(header) {
            return SheetResponse::failed(error);
        }
    }

    match sheet.append_row(payload.row(timestamp)) {
        Ok(()) => SheetResponse::appended(),
        Err(error) => SheetResponse::failed(error),
    }
}
