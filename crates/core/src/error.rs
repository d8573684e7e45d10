//! Error taxonomy shared by the controller and its hosts.

use thiserror::Error;

use crate::intake::Field;

/// Text shown in the error panel for failures that are not reported by the
/// prediction service itself.
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred. Please check the console.";

/// Prefix for messages the prediction service reports explicitly.
pub const DOMAIN_ERROR_PREFIX: &str = "Error: ";

/// Building a [`FormInputs`](crate::FormInputs) snapshot failed.
///
/// Native constraint validation runs before intake, so this only fires when the
/// page itself is malformed (a field is not part of the form at all).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IntakeError {
    #[error("form is missing the `{}` field", .0.as_str())]
    MissingField(Field),
}

/// A prediction request did not produce a usable prediction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PredictionError {
    /// The call could not complete, or its body was not JSON.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The service answered with an explicit `error` field.
    #[error("{0}")]
    Domain(String),

    /// The service answered without `error` but also without a required field.
    #[error("response is missing `{0}`")]
    Contract(&'static str),
}

impl PredictionError {
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn domain(msg: impl Into<String>) -> Self {
        Self::Domain(msg.into())
    }

    /// Human-readable text for the error panel.
    ///
    /// Only domain errors carry the service's own words; everything else maps to
    /// the generic message so a transport failure is never mistaken for one.
    pub fn panel_message(&self) -> String {
        match self {
            PredictionError::Domain(msg) => format!("{DOMAIN_ERROR_PREFIX}{msg}"),
            PredictionError::Transport(_) | PredictionError::Contract(_) => {
                GENERIC_ERROR_MESSAGE.to_string()
            }
        }
    }

    pub fn is_domain(&self) -> bool {
        matches!(self, PredictionError::Domain(_))
    }
}

/// A report was requested without the state it is derived from.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReportError {
    #[error("no inputs have been submitted yet")]
    MissingInputs,

    #[error("no successful prediction is available")]
    MissingPrediction,

    /// The controller is not showing a successful result.
    #[error("report is only available after a successful prediction")]
    NotReady,
}

/// Startup failed; the page is misconfigured.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InitError {
    #[error("required element `#{0}` not found")]
    MissingMount(String),

    #[error("element `#{id}` is not a {expected}")]
    WrongElement { id: String, expected: &'static str },

    #[error("chart dataset `{0}` was not provided")]
    MissingDataset(&'static str),

    #[error("chart dataset `{name}` is malformed: {reason}")]
    InvalidDataset { name: &'static str, reason: String },

    #[error("host environment unavailable: {0}")]
    Host(String),
}
