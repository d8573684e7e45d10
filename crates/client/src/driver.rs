//! One submit → request → settle cycle.

use salarycast_core::{Controller, FormInputs, Transition, UiEvent};

use crate::transport::PredictionTransport;

/// Feed a validated submit to `controller` and, if it starts a request, await
/// `transport` and settle the outcome.
///
/// Returns the final transition: `Settled(_)` after a request ran, `Ignored` if
/// the controller refused the submit (a request was already in flight).
pub async fn submit<T>(controller: &mut Controller, transport: &T, inputs: FormInputs) -> Transition
where
    T: PredictionTransport + ?Sized,
{
    let inputs = match controller.handle(UiEvent::Submit(inputs)) {
        Transition::Started(inputs) => inputs,
        other => return other,
    };

    let outcome = transport.predict(&inputs).await;
    controller.handle(UiEvent::Settled(outcome))
}
