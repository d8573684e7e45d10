//! Seam between the controller driver and the network.

use async_trait::async_trait;
use salarycast_core::{FormInputs, PredictionOutcome};

/// Issues one prediction request.
///
/// Implementations fold every failure into the returned outcome; nothing may
/// escape as a panic or an unhandled error. `?Send` because browser futures are
/// tied to the UI thread.
#[async_trait(?Send)]
pub trait PredictionTransport {
    async fn predict(&self, inputs: &FormInputs) -> PredictionOutcome;
}
