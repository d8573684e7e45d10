//! Resolved page elements and projection of the controller view onto them.

use salarycast_core::{InitError, ViewModel};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlCanvasElement, HtmlFormElement};

use crate::contract::*;

/// Every element the controller touches, resolved once at startup.
#[derive(Debug, Clone)]
pub struct PageElements {
    pub form: HtmlFormElement,
    pub result_container: Element,
    pub error_alert: Element,
    pub predict_button: HtmlButtonElement,
    pub button_text: Element,
    pub button_spinner: Element,
    pub prediction_value: Element,
    pub range_value: Element,
    pub download_report: Element,
    pub printable_report: Element,
    pub job_title_chart: HtmlCanvasElement,
    pub education_chart: HtmlCanvasElement,
}

impl PageElements {
    pub fn resolve(document: &Document) -> Result<Self, InitError> {
        Ok(Self {
            form: typed(document, PREDICTION_FORM, "form")?,
            result_container: element(document, RESULT_CONTAINER)?,
            error_alert: element(document, ERROR_ALERT)?,
            predict_button: typed(document, PREDICT_BUTTON, "button")?,
            button_text: element(document, BUTTON_TEXT)?,
            button_spinner: element(document, BUTTON_SPINNER)?,
            prediction_value: element(document, PREDICTION_VALUE)?,
            range_value: element(document, RANGE_VALUE)?,
            download_report: element(document, DOWNLOAD_REPORT)?,
            printable_report: element(document, PRINTABLE_REPORT)?,
            job_title_chart: typed(document, JOB_TITLE_CHART, "canvas")?,
            education_chart: typed(document, EDUCATION_CHART, "canvas")?,
        })
    }

    /// Make the page match `view`.
    ///
    /// Idempotent: applying the same view twice leaves the page unchanged.
    pub fn apply(&self, view: &ViewModel) {
        self.button_text.set_text_content(Some(view.submit_label));
        self.predict_button.set_disabled(!view.submit_enabled);
        set_hidden(&self.button_spinner, !view.spinner_visible);

        match &view.result {
            Some(panel) => {
                self.prediction_value.set_text_content(Some(panel.prediction.as_str()));
                self.range_value.set_text_content(Some(panel.range.as_str()));
                set_hidden(&self.result_container, false);
            }
            None => set_hidden(&self.result_container, true),
        }

        match &view.error {
            Some(message) => {
                self.error_alert.set_text_content(Some(message.as_str()));
                set_hidden(&self.error_alert, false);
            }
            None => set_hidden(&self.error_alert, true),
        }

        let toggled = if view.report_available {
            self.download_report.remove_attribute("disabled")
        } else {
            self.download_report.set_attribute("disabled", "")
        };
        if let Err(e) = toggled {
            web_sys::console::error_2(&"failed to toggle report trigger".into(), &e);
        }
    }
}

fn element(document: &Document, id: &str) -> Result<Element, InitError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| InitError::MissingMount(id.to_string()))
}

fn typed<T: JsCast>(document: &Document, id: &str, expected: &'static str) -> Result<T, InitError> {
    element(document, id)?
        .dyn_into::<T>()
        .map_err(|_| InitError::WrongElement {
            id: id.to_string(),
            expected,
        })
}

fn set_hidden(el: &Element, hidden: bool) {
    let classes = el.class_list();
    let toggled = if hidden {
        classes.add_1(HIDDEN_CLASS)
    } else {
        classes.remove_1(HIDDEN_CLASS)
    };
    if let Err(e) = toggled {
        web_sys::console::error_2(&format!("failed to toggle `{HIDDEN_CLASS}` on #{}", el.id()).into(), &e);
    }
}
