//! Request lifecycle state machine.
//!
//! ```text
//!  Idle ──Submit──▶ Submitting ──Settled(Ok)───▶ Success
//!                       ▲   └────Settled(Err)──▶ Error
//!                       └────── Submit ◀──── Success | Error
//! ```
//!
//! Every input goes through [`Controller::handle`]. Hosts act on the returned
//! [`Transition`] (issue the request on `Started`) and re-project the
//! [`ViewModel`] afterwards. The view is derived from state alone, so leaving
//! `Submitting` restores the submit control on every branch.

use crate::error::{PredictionError, ReportError};
use crate::intake::FormInputs;
use crate::prediction::PredictionOutcome;
use crate::report::ReportDocument;
use crate::session::SessionState;

pub const IDLE_LABEL: &str = "Predict Salary";
pub const BUSY_LABEL: &str = "Predicting...";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum UiState {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl UiState {
    pub fn as_str(&self) -> &'static str {
        match self {
            UiState::Idle => "idle",
            UiState::Submitting => "submitting",
            UiState::Success => "success",
            UiState::Error => "error",
        }
    }
}

/// Inputs to the state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// A submit that already passed native form validation.
    Submit(FormInputs),
    /// The in-flight request completed.
    Settled(PredictionOutcome),
}

/// What a call to [`Controller::handle`] did.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// Entered `Submitting`; the host must issue exactly one request for these inputs.
    Started(FormInputs),
    /// Left `Submitting` for the given terminal state.
    Settled(UiState),
    /// The event was not valid in the current state and changed nothing.
    Ignored,
}

/// Content of the result panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultPanel {
    pub prediction: String,
    pub range: String,
}

/// Everything the page needs to render the controller.
///
/// At most one of `result` / `error` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub submit_enabled: bool,
    pub submit_label: &'static str,
    pub spinner_visible: bool,
    pub result: Option<ResultPanel>,
    pub error: Option<String>,
    pub report_available: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Controller {
    state: UiState,
    session: SessionState,
    /// Error that produced the current `Error` state.
    error: Option<PredictionError>,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> UiState {
        self.state
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn last_error(&self) -> Option<&PredictionError> {
        self.error.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.state == UiState::Submitting
    }

    /// The single transition function.
    pub fn handle(&mut self, event: UiEvent) -> Transition {
        match (self.state, event) {
            (UiState::Submitting, UiEvent::Submit(_)) => {
                tracing::debug!("submit ignored; a prediction is already in flight");
                Transition::Ignored
            }
            (_, UiEvent::Submit(inputs)) => {
                tracing::debug!(from = self.state.as_str(), "submitting prediction request");
                self.session.record_inputs(inputs.clone());
                self.error = None;
                self.state = UiState::Submitting;
                Transition::Started(inputs)
            }
            (UiState::Submitting, UiEvent::Settled(Ok(prediction))) => {
                tracing::debug!(range = prediction.range(), "prediction succeeded");
                self.session.record_prediction(prediction);
                self.state = UiState::Success;
                Transition::Settled(UiState::Success)
            }
            (UiState::Submitting, UiEvent::Settled(Err(err))) => {
                if err.is_domain() {
                    tracing::info!(error = %err, "prediction rejected by service");
                } else {
                    tracing::error!(error = %err, "prediction request failed");
                }
                self.error = Some(err);
                self.state = UiState::Error;
                Transition::Settled(UiState::Error)
            }
            (state, UiEvent::Settled(_)) => {
                tracing::warn!(state = state.as_str(), "settle event with no request in flight");
                Transition::Ignored
            }
        }
    }

    pub fn view(&self) -> ViewModel {
        let busy = self.is_busy();

        let result = match self.state {
            UiState::Success => self.session.prediction().map(|p| ResultPanel {
                prediction: p.value().to_string(),
                range: p.range().to_string(),
            }),
            _ => None,
        };

        let error = match self.state {
            UiState::Error => self.error.as_ref().map(PredictionError::panel_message),
            _ => None,
        };

        ViewModel {
            submit_enabled: !busy,
            submit_label: if busy { BUSY_LABEL } else { IDLE_LABEL },
            spinner_visible: busy,
            report_available: result.is_some(),
            result,
            error,
        }
    }

    /// Build the report for the prediction currently on screen.
    pub fn report(&self, generated_on: &str) -> Result<ReportDocument, ReportError> {
        if self.state != UiState::Success {
            return Err(ReportError::NotReady);
        }
        self.session.report(generated_on)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GENERIC_ERROR_MESSAGE;
    use crate::prediction::{PredictedValue, Prediction};
    use proptest::prelude::*;

    fn analyst_inputs() -> FormInputs {
        FormInputs::new("30", "Female", "Bachelors", "Analyst", "5")
    }

    fn analyst_prediction() -> Prediction {
        Prediction::new(
            PredictedValue::Text("₹55,000".to_string()),
            "₹50,000–₹60,000",
        )
    }

    #[test]
    fn starts_idle_with_nothing_shown() {
        let c = Controller::new();
        let view = c.view();

        assert_eq!(c.state(), UiState::Idle);
        assert!(view.submit_enabled);
        assert_eq!(view.submit_label, IDLE_LABEL);
        assert!(!view.spinner_visible);
        assert!(view.result.is_none() && view.error.is_none());
        assert!(!view.report_available);
    }

    #[test]
    fn submit_disables_control_before_settlement() {
        let mut c = Controller::new();
        let t = c.handle(UiEvent::Submit(analyst_inputs()));

        assert_eq!(t, Transition::Started(analyst_inputs()));
        assert_eq!(c.state(), UiState::Submitting);
        assert_eq!(c.session().inputs(), Some(&analyst_inputs()));

        let view = c.view();
        assert!(!view.submit_enabled);
        assert_eq!(view.submit_label, BUSY_LABEL);
        assert!(view.spinner_visible);
        assert!(view.result.is_none() && view.error.is_none());
    }

    #[test]
    fn second_submit_while_submitting_is_ignored() {
        let mut c = Controller::new();
        c.handle(UiEvent::Submit(analyst_inputs()));
        let before = c.session().clone();

        let other = FormInputs::new("50", "Male", "PhD", "Director", "25");
        assert_eq!(c.handle(UiEvent::Submit(other)), Transition::Ignored);
        assert_eq!(c.state(), UiState::Submitting);
        assert_eq!(c.session(), &before);
    }

    #[test]
    fn success_populates_result_panel() {
        let mut c = Controller::new();
        c.handle(UiEvent::Submit(analyst_inputs()));
        let t = c.handle(UiEvent::Settled(Ok(analyst_prediction())));

        assert_eq!(t, Transition::Settled(UiState::Success));
        let view = c.view();
        assert_eq!(
            view.result,
            Some(ResultPanel {
                prediction: "₹55,000".to_string(),
                range: "₹50,000–₹60,000".to_string(),
            })
        );
        assert!(view.error.is_none());
        assert!(view.submit_enabled);
        assert_eq!(view.submit_label, IDLE_LABEL);
        assert!(!view.spinner_visible);
        assert!(view.report_available);
    }

    #[test]
    fn domain_error_shows_message_and_keeps_prior_prediction() {
        let mut c = Controller::new();
        c.handle(UiEvent::Submit(analyst_inputs()));
        c.handle(UiEvent::Settled(Ok(analyst_prediction())));

        c.handle(UiEvent::Submit(analyst_inputs()));
        c.handle(UiEvent::Settled(Err(PredictionError::domain(
            "invalid Education value",
        ))));

        let view = c.view();
        assert_eq!(c.state(), UiState::Error);
        assert_eq!(view.error.as_deref(), Some("Error: invalid Education value"));
        assert!(view.result.is_none());
        assert!(view.submit_enabled);
        assert_eq!(c.session().prediction(), Some(&analyst_prediction()));
    }

    #[test]
    fn transport_error_shows_generic_message() {
        let mut c = Controller::new();
        c.handle(UiEvent::Submit(analyst_inputs()));
        c.handle(UiEvent::Settled(Err(PredictionError::transport(
            "error sending request: connection refused",
        ))));

        let view = c.view();
        assert_eq!(view.error.as_deref(), Some(GENERIC_ERROR_MESSAGE));
        assert!(view.result.is_none());
        assert!(c.session().prediction().is_none());
    }

    #[test]
    fn settle_without_request_is_ignored() {
        let mut c = Controller::new();
        assert_eq!(
            c.handle(UiEvent::Settled(Ok(analyst_prediction()))),
            Transition::Ignored
        );
        assert_eq!(c.state(), UiState::Idle);
        assert!(c.session().prediction().is_none());
    }

    #[test]
    fn report_requires_success_state() {
        let mut c = Controller::new();
        assert_eq!(c.report("10/16/2026"), Err(ReportError::NotReady));

        c.handle(UiEvent::Submit(analyst_inputs()));
        assert_eq!(c.report("10/16/2026"), Err(ReportError::NotReady));

        c.handle(UiEvent::Settled(Ok(analyst_prediction())));
        let doc = c.report("10/16/2026").unwrap();
        assert_eq!(doc.headline(), "₹55,000");
        assert_eq!(
            doc.row(crate::intake::Field::Experience).unwrap().value,
            "5 years"
        );
        assert_eq!(
            c.report("10/16/2026").unwrap().to_html(),
            doc.to_html()
        );
    }

    #[test]
    fn error_blocks_report_until_next_success() {
        let mut c = Controller::new();
        c.handle(UiEvent::Submit(analyst_inputs()));
        c.handle(UiEvent::Settled(Ok(analyst_prediction())));
        assert!(c.view().report_available);

        let director = FormInputs::new("50", "Male", "PhD", "Director", "25");
        c.handle(UiEvent::Submit(director.clone()));
        c.handle(UiEvent::Settled(Err(PredictionError::domain("model unavailable"))));

        assert_eq!(c.state(), UiState::Error);
        assert!(!c.view().report_available);
        assert_eq!(c.report("10/16/2026"), Err(ReportError::NotReady));
        assert_eq!(c.session().prediction(), Some(&analyst_prediction()));

        let director_prediction = Prediction::new(
            PredictedValue::Text("₹1,80,000".to_string()),
            "₹1,60,000–₹2,00,000",
        );
        c.handle(UiEvent::Submit(director.clone()));
        c.handle(UiEvent::Settled(Ok(director_prediction)));

        assert!(c.view().report_available);
        let doc = c.report("10/16/2026").unwrap();
        assert_eq!(doc.headline(), "₹1,80,000");
        assert_eq!(doc.row(crate::intake::Field::JobTitle).unwrap().value, "Director");
        assert_eq!(doc.row(crate::intake::Field::Experience).unwrap().value, "25 years");
    }

    #[derive(Debug, Clone)]
    enum Step {
        Submit,
        Succeed,
        FailDomain,
        FailTransport,
    }

    fn step() -> impl Strategy<Value = Step> {
        prop_oneof![
            Just(Step::Submit),
            Just(Step::Succeed),
            Just(Step::FailDomain),
            Just(Step::FailTransport),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            .. ProptestConfig::default()
        })]

        #[test]
        fn view_invariants_hold_for_any_event_sequence(steps in proptest::collection::vec(step(), 0..40)) {
            let mut c = Controller::new();
            let mut expected_prediction: Option<Prediction> = None;

            for (i, s) in steps.into_iter().enumerate() {
                let was_busy = c.is_busy();
                let event = match s {
                    Step::Submit => UiEvent::Submit(FormInputs::new(i.to_string(), "Male", "Masters", "Engineer", "3")),
                    Step::Succeed => UiEvent::Settled(Ok(Prediction::new(PredictedValue::Number(i as f64), "r"))),
                    Step::FailDomain => UiEvent::Settled(Err(PredictionError::domain("bad"))),
                    Step::FailTransport => UiEvent::Settled(Err(PredictionError::transport("down"))),
                };
                let is_success = matches!(event, UiEvent::Settled(Ok(_)));
                let pending = match &event {
                    UiEvent::Settled(Ok(p)) => Some(p.clone()),
                    _ => None,
                };

                let t = c.handle(event);

                if was_busy && is_success {
                    expected_prediction = pending;
                }
                if !was_busy && is_success {
                    prop_assert_eq!(t.clone(), Transition::Ignored);
                }

                let view = c.view();
                prop_assert!(!(view.result.is_some() && view.error.is_some()));
                prop_assert_eq!(view.submit_enabled, !c.is_busy());
                prop_assert_eq!(view.spinner_visible, c.is_busy());
                prop_assert_eq!(view.report_available, c.state() == UiState::Success);
                prop_assert_eq!(c.report("d").is_ok(), c.state() == UiState::Success);
                if matches!(c.state(), UiState::Success | UiState::Error) {
                    prop_assert!(view.result.is_some() ^ view.error.is_some());
                }
                prop_assert_eq!(c.session().prediction(), expected_prediction.as_ref());
            }
        }
    }
}
