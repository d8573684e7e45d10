//! Form intake through the browser's native constraint validation.

use salarycast_core::{Field, FormInputs};
use web_sys::{FormData, HtmlFormElement};

/// Snapshot the form if it passes native validation.
///
/// On failure the browser reports the problem in place and `None` is returned;
/// no state transition should follow.
pub fn read_validated(form: &HtmlFormElement) -> Option<FormInputs> {
    if !form.check_validity() {
        form.report_validity();
        return None;
    }

    let data = match FormData::new_with_form(form) {
        Ok(data) => data,
        Err(e) => {
            web_sys::console::error_2(&"failed to read form data".into(), &e);
            return None;
        }
    };

    let entries = Field::ALL
        .into_iter()
        .filter_map(|field| data.get(field.as_str()).as_string().map(|v| (field.as_str(), v)));

    match FormInputs::from_entries(entries) {
        Ok(inputs) => Some(inputs),
        Err(e) => {
            web_sys::console::error_1(&e.to_string().into());
            None
        }
    }
}
