//! Print surface.

use js_sys::{Date, Function, Reflect};
use salarycast_core::ReportDocument;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Window};

/// Today's date in the host locale (`Date.prototype.toLocaleDateString()`).
pub fn locale_date() -> Result<String, JsValue> {
    let now = Date::new_0();
    let to_locale: Function = Reflect::get(&now, &JsValue::from_str("toLocaleDateString"))?.dyn_into()?;
    to_locale
        .call0(&now)?
        .as_string()
        .ok_or_else(|| JsValue::from_str("toLocaleDateString returned a non-string"))
}

/// Materialize `doc` into the print-only mount and open the print dialog.
pub fn print_report(window: &Window, mount: &Element, doc: &ReportDocument) -> Result<(), JsValue> {
    mount.set_inner_html(&doc.to_html());
    window.print()
}
