//! Prediction results and decoding of the service's response body.

use std::fmt;

use serde_json::Value as JsonValue;

use crate::error::PredictionError;

/// Outcome of one prediction request.
pub type PredictionOutcome = Result<Prediction, PredictionError>;

/// The headline value: the service may send either a formatted string or a
/// bare number.
///
/// Numbers display with Rust's `f64` formatting, which never switches to
/// exponent notation (`1e21` prints as `1000000000000000000000`).
#[derive(Debug, Clone, PartialEq)]
pub enum PredictedValue {
    Text(String),
    Number(f64),
}

impl fmt::Display for PredictedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictedValue::Text(s) => f.write_str(s),
            PredictedValue::Number(n) => write!(f, "{n}"),
        }
    }
}

/// A successful prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    prediction: PredictedValue,
    range: String,
    /// Unformatted estimate, when the service provides one.
    raw_prediction: Option<f64>,
}

impl Prediction {
    pub fn new(prediction: PredictedValue, range: impl Into<String>) -> Self {
        Self {
            prediction,
            range: range.into(),
            raw_prediction: None,
        }
    }

    pub fn with_raw_prediction(mut self, raw: f64) -> Self {
        self.raw_prediction = Some(raw);
        self
    }

    pub fn value(&self) -> &PredictedValue {
        &self.prediction
    }

    pub fn range(&self) -> &str {
        &self.range
    }

    pub fn raw_prediction(&self) -> Option<f64> {
        self.raw_prediction
    }
}

/// Decode a raw response body.
///
/// Bytes that are not JSON are a transport failure: the call did not produce a
/// readable answer.
pub fn decode_body(bytes: &[u8]) -> PredictionOutcome {
    let value: JsonValue = serde_json::from_slice(bytes)
        .map_err(|e| PredictionError::transport(format!("response is not JSON: {e}")))?;
    decode_response(&value)
}

/// Decode an already-parsed response.
///
/// Rules:
/// - an `error` key with a non-null value wins, its text surfaced verbatim
/// - otherwise `prediction` (string or number) and `range` (string) are required
pub fn decode_response(body: &JsonValue) -> PredictionOutcome {
    let Some(obj) = body.as_object() else {
        return Err(PredictionError::Contract("prediction"));
    };

    match obj.get("error") {
        None | Some(JsonValue::Null) => {}
        Some(JsonValue::String(msg)) => return Err(PredictionError::domain(msg.clone())),
        Some(other) => return Err(PredictionError::domain(other.to_string())),
    }

    let prediction = match obj.get("prediction") {
        Some(JsonValue::String(s)) => PredictedValue::Text(s.clone()),
        Some(JsonValue::Number(n)) => match n.as_f64() {
            Some(n) => PredictedValue::Number(n),
            None => return Err(PredictionError::Contract("prediction")),
        },
        _ => return Err(PredictionError::Contract("prediction")),
    };

    let range = match obj.get("range") {
        Some(JsonValue::String(s)) => s.clone(),
        _ => return Err(PredictionError::Contract("range")),
    };

    let mut out = Prediction::new(prediction, range);
    if let Some(raw) = obj.get("raw_prediction").and_then(JsonValue::as_f64) {
        out = out.with_raw_prediction(raw);
    }
    Ok(out)
}
