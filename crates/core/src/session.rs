//! Page-lifetime session state.

use crate::error::ReportError;
use crate::intake::FormInputs;
use crate::prediction::Prediction;
use crate::report::{ReportDocument, build_report};

/// Latest submitted inputs and latest successful prediction.
///
/// Owned by the [`Controller`](crate::Controller), which is the only writer:
/// inputs are replaced on every submit, the prediction only on success. An
/// error leaves the held prediction untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    inputs: Option<FormInputs>,
    prediction: Option<Prediction>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inputs(&self) -> Option<&FormInputs> {
        self.inputs.as_ref()
    }

    pub fn prediction(&self) -> Option<&Prediction> {
        self.prediction.as_ref()
    }

    pub(crate) fn record_inputs(&mut self, inputs: FormInputs) {
        self.inputs = Some(inputs);
    }

    pub(crate) fn record_prediction(&mut self, prediction: Prediction) {
        self.prediction = Some(prediction);
    }

    /// Build the report from the held state.
    ///
    /// `generated_on` is the host-formatted date stamp.
    pub fn report(&self, generated_on: &str) -> Result<ReportDocument, ReportError> {
        let inputs = self.inputs.as_ref().ok_or(ReportError::MissingInputs)?;
        let prediction = self.prediction.as_ref().ok_or(ReportError::MissingPrediction)?;
        Ok(build_report(inputs, prediction, generated_on))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prediction::PredictedValue;

    #[test]
    fn empty_session_cannot_report() {
        let session = SessionState::new();
        assert_eq!(session.report("1/2/2026"), Err(ReportError::MissingInputs));
    }

    #[test]
    fn inputs_without_prediction_cannot_report() {
        let mut session = SessionState::new();
        session.record_inputs(FormInputs::new("30", "Female", "Bachelors", "Analyst", "5"));
        assert_eq!(session.report("1/2/2026"), Err(ReportError::MissingPrediction));
    }

    #[test]
    fn report_uses_latest_inputs_and_prediction() {
        let mut session = SessionState::new();
        session.record_inputs(FormInputs::new("30", "Female", "Bachelors", "Analyst", "5"));
        session.record_prediction(Prediction::new(
            PredictedValue::Text("₹55,000".to_string()),
            "₹50,000–₹60,000",
        ));

        let doc = session.report("1/2/2026").unwrap();
        assert_eq!(doc.headline(), "₹55,000");
        assert_eq!(doc.generated_on(), "1/2/2026");
    }
}
