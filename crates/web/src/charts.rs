//! Chart.js binding for the two static datasets.

use js_sys::{Array, Function, Reflect};
use salarycast_core::chart::{EDUCATION_DISTRIBUTION, SALARY_BY_JOB_TITLE};
use salarycast_core::{ChartSeeds, ChartSpec, InitError};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlCanvasElement, Window};

use crate::contract::CHART_CONSTRUCTOR;

/// Read both datasets from the page globals injected by the server.
pub fn read_seeds(window: &Window) -> Result<ChartSeeds, InitError> {
    Ok(ChartSeeds {
        salary_by_job_title: ChartSeeds::parse(
            SALARY_BY_JOB_TITLE,
            read_global(window, SALARY_BY_JOB_TITLE)?,
        )?,
        education_distribution: ChartSeeds::parse(
            EDUCATION_DISTRIBUTION,
            read_global(window, EDUCATION_DISTRIBUTION)?,
        )?,
    })
}

fn read_global(window: &Window, name: &'static str) -> Result<Option<serde_json::Value>, InitError> {
    let value = Reflect::get(window, &JsValue::from_str(name))
        .map_err(|e| InitError::Host(format!("failed to read `{name}`: {e:?}")))?;

    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }

    serde_wasm_bindgen::from_value(value)
        .map(Some)
        .map_err(|e| InitError::InvalidDataset {
            name,
            reason: e.to_string(),
        })
}

/// Construct a Chart.js chart on `canvas`. Called once per chart.
pub fn bind(window: &Window, canvas: &HtmlCanvasElement, spec: &ChartSpec) -> Result<JsValue, InitError> {
    let host = |e: JsValue| InitError::Host(format!("{e:?}"));

    let ctx = canvas
        .get_context("2d")
        .map_err(host)?
        .ok_or_else(|| InitError::Host(format!("canvas `#{}` has no 2d context", canvas.id())))?;

    let ctor: Function = Reflect::get(window, &JsValue::from_str(CHART_CONSTRUCTOR))
        .map_err(host)?
        .dyn_into()
        .map_err(|_| InitError::Host("Chart.js is not loaded".to_string()))?;

    // json_compatible: objects must arrive as plain JS objects, not `Map`s.
    let config = spec
        .to_chartjs_config()
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| InitError::Host(format!("failed to convert chart config: {e}")))?;

    Reflect::construct(&ctor, &Array::of2(&ctx, &config)).map_err(host)
}
