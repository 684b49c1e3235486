use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A decimal quantity as it travels on the wire.
///
/// Amounts typed by the user are forwarded untouched as text; the service may
/// answer with a JSON number, a string or null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(serde_json::Number),
    Text(String),
    Null,
}

impl From<&str> for Amount {
    fn from(raw: &str) -> Self {
        Amount::Text(raw.to_string())
    }
}

impl From<String> for Amount {
    fn from(raw: String) -> Self {
        Amount::Text(raw)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Number(n) => match n.as_f64() {
                // whole floats print without a fraction: 500.0 -> 500, 1e3 -> 1000
                Some(x) if n.is_f64() && x.fract() == 0.0 && x.abs() < 1e21 => {
                    if x == 0.0 {
                        f.write_str("0")
                    } else {
                        write!(f, "{:.0}", x)
                    }
                }
                _ => write!(f, "{}", n),
            },
            Amount::Text(s) => f.write_str(s),
            Amount::Null => f.write_str("null"),
        }
    }
}

/// Body of `POST /finance/add_income`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncomeEntry {
    pub amount: Amount,
}

/// Body of `POST /finance/add_saving`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavingEntry {
    pub amount: Amount,
}

/// Body of `POST /finance/add_category`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCategory {
    pub name: String,
    pub monthly_goal: Amount,
}

/// One element of `GET /user/categories`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub monthly_goal: Amount,
}

/// Acknowledgement returned by the write endpoints.
///
/// Any JSON body decodes: `ok` is true only when the body is an object whose
/// `ok` member is truthy (not `false`, `null`, `0`, `""` or missing).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "serde_json::Value")]
pub struct WriteAck {
    pub ok: bool,
    /// Reason given by the service when `ok` is false. Logged, never shown.
    pub error: Option<String>,
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |x| x != 0.0 && !x.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

impl From<Value> for WriteAck {
    fn from(body: Value) -> Self {
        WriteAck {
            ok: body.get("ok").map_or(false, is_truthy),
            error: body.get("error").and_then(Value::as_str).map(str::to_string),
        }
    }
}

/// Result of the add-category write, made explicit so the caller can pick a
/// refresh policy.
#[derive(Debug, Clone, PartialEq)]
pub enum WriteOutcome {
    Accepted,
    Rejected { reason: Option<String> },
    /// The body was not JSON.
    Unconfirmed,
}

impl WriteOutcome {
    pub fn from_ack(ack: Option<WriteAck>) -> Self {
        match ack {
            Some(WriteAck { ok: true, .. }) => WriteOutcome::Accepted,
            Some(WriteAck { ok: false, error }) => WriteOutcome::Rejected { reason: error },
            None => WriteOutcome::Unconfirmed,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, WriteOutcome::Accepted)
    }
}

/// Text shown in the income/saving status indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMessage {
    IncomeSaved,
    SavingSaved,
    Failed,
}

impl StatusMessage {
    pub fn text(&self) -> &'static str {
        match self {
            StatusMessage::IncomeSaved => "Guardado",
            StatusMessage::SavingSaved => "Ahorro guardado",
            StatusMessage::Failed => "Error",
        }
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Display form of a single category in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCard {
    pub name: String,
    pub monthly_goal: String,
}

impl CategoryCard {
    pub fn goal_label(&self) -> String {
        format!("Meta mensual: {}", self.monthly_goal)
    }
}
