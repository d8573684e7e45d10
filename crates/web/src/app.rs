//! Page wiring: startup, event listeners and the reactive view projection.

use std::rc::Rc;

use leptos::{
    RwSignal, SignalUpdate, SignalWith, SignalWithUntracked, create_effect, create_runtime,
    create_rw_signal,
};
use salarycast_client::{ClientConfig, PredictionClient, PredictionTransport};
use salarycast_core::{Controller, InitError, PredictionError, Transition, UiEvent};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, Window};

use crate::{charts, dom::PageElements, form, print};

/// Initialize the page. Any error here is fatal.
pub fn start() -> Result<(), InitError> {
    let window = web_sys::window().ok_or_else(|| InitError::Host("no window object".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| InitError::Host("no document object".to_string()))?;

    let page = Rc::new(PageElements::resolve(&document)?);

    let (salary, education) = charts::read_seeds(&window)?.into_specs()?;
    charts::bind(&window, &page.job_title_chart, &salary)?;
    charts::bind(&window, &page.education_chart, &education)?;

    let origin = window
        .location()
        .origin()
        .map_err(|e| InitError::Host(format!("failed to read page origin: {e:?}")))?;
    let config = ClientConfig::new(&origin).map_err(|e| InitError::Host(e.to_string()))?;
    let client = Rc::new(PredictionClient::new(config).map_err(|e| InitError::Host(e.to_string()))?);

    // The runtime lives as long as the page; it is never disposed.
    let _runtime = create_runtime();
    let controller = create_rw_signal(Controller::new());

    {
        let page = Rc::clone(&page);
        create_effect(move |_| controller.with(|c| page.apply(&c.view())));
    }

    listen(&page.form, "submit", on_submit(controller, Rc::clone(&page), client))?;
    listen(
        &page.download_report,
        "click",
        on_download(controller, Rc::clone(&page), window.clone()),
    )?;

    Ok(())
}

fn on_submit(
    controller: RwSignal<Controller>,
    page: Rc<PageElements>,
    client: Rc<PredictionClient>,
) -> impl FnMut(Event) + 'static {
    move |ev: Event| {
        // The controller governs navigation; the browser never submits the form.
        ev.prevent_default();

        if controller.with_untracked(Controller::is_busy) {
            return;
        }

        let Some(inputs) = form::read_validated(&page.form) else {
            return;
        };

        let started = controller.try_update(|c| c.handle(UiEvent::Submit(inputs)));
        let Some(Transition::Started(inputs)) = started else {
            return;
        };

        let client = Rc::clone(&client);
        spawn_local(async move {
            let outcome = client.predict(&inputs).await;
            if let Err(err @ (PredictionError::Transport(_) | PredictionError::Contract(_))) = &outcome {
                web_sys::console::error_1(&format!("prediction failed: {err}").into());
            }
            controller.update(|c| {
                c.handle(UiEvent::Settled(outcome));
            });
        });
    }
}

fn on_download(
    controller: RwSignal<Controller>,
    page: Rc<PageElements>,
    window: Window,
) -> impl FnMut(Event) + 'static {
    move |ev: Event| {
        ev.prevent_default();

        let generated_on = match print::locale_date() {
            Ok(date) => date,
            Err(e) => {
                web_sys::console::error_2(&"failed to format report date".into(), &e);
                return;
            }
        };

        match controller.with_untracked(|c| c.report(&generated_on)) {
            Ok(doc) => {
                if let Err(e) = print::print_report(&window, &page.printable_report, &doc) {
                    web_sys::console::error_2(&"failed to print report".into(), &e);
                }
            }
            Err(e) => web_sys::console::warn_1(&e.to_string().into()),
        }
    }
}

/// Attach a page-lifetime listener.
fn listen<F>(target: &web_sys::EventTarget, event: &str, handler: F) -> Result<(), InitError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| InitError::Host(format!("failed to attach `{event}` listener: {e:?}")))?;
    // Listeners stay attached for the page's lifetime.
    closure.forget();
    Ok(())
}
