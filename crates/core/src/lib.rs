//! `salarycast-core` — pure model for the salary prediction page.
//!
//! This crate contains no IO: no network, no DOM, no clock. Hosts (the wasm
//! front end, the headless CLI) feed it events and read back view state.

pub mod chart;
pub mod controller;
pub mod error;
pub mod intake;
pub mod prediction;
pub mod report;
pub mod session;

pub use chart::{ChartDataset, ChartKind, ChartSeeds, ChartSpec};
pub use controller::{Controller, ResultPanel, Transition, UiEvent, UiState, ViewModel};
pub use error::{InitError, IntakeError, PredictionError, ReportError};
pub use intake::{Field, FormInputs};
pub use prediction::{PredictedValue, Prediction, PredictionOutcome};
pub use report::{ReportDocument, ReportRow, build_report};
pub use session::SessionState;
