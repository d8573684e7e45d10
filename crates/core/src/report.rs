//! Printable report derived from the session.
//!
//! [`build_report`] is a pure transformation: the only value it does not take
//! verbatim from its inputs is the date stamp, which the host formats and
//! passes in. Rendering to markup is a separate step ([`ReportDocument::to_html`]).

use std::fmt::Write as _;

use crate::intake::{Field, FormInputs};
use crate::prediction::Prediction;

pub const REPORT_TITLE: &str = "Salary Prediction Report";
pub const INPUTS_HEADING: &str = "Input Details";
pub const RESULT_HEADING: &str = "Prediction Result";
pub const HEADLINE_CAPTION: &str = "Predicted Monthly Salary";

/// One `Feature | Value` row of the inputs table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub label: &'static str,
    pub value: String,
}

/// Typed report content, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDocument {
    generated_on: String,
    rows: Vec<ReportRow>,
    headline: String,
    range: String,
}

/// Combine inputs and a successful prediction into a report.
pub fn build_report(
    inputs: &FormInputs,
    prediction: &Prediction,
    generated_on: impl Into<String>,
) -> ReportDocument {
    let rows = Field::ALL
        .into_iter()
        .map(|field| ReportRow {
            label: field.as_str(),
            value: match field {
                Field::Experience => format!("{} years", inputs.experience()),
                other => inputs.get(other).to_string(),
            },
        })
        .collect();

    ReportDocument {
        generated_on: generated_on.into(),
        rows,
        headline: prediction.value().to_string(),
        range: prediction.range().to_string(),
    }
}

impl ReportDocument {
    pub fn generated_on(&self) -> &str {
        &self.generated_on
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn row(&self, field: Field) -> Option<&ReportRow> {
        self.rows.iter().find(|r| r.label == field.as_str())
    }

    pub fn headline(&self) -> &str {
        &self.headline
    }

    pub fn range(&self) -> &str {
        &self.range
    }

    /// Self-contained markup for the print surface.
    ///
    /// Styles are inline so the fragment prints the same regardless of the
    /// page stylesheet. All interpolated values are escaped.
    pub fn to_html(&self) -> String {
        const CELL: &str = "padding: 8px; border: 1px solid #ddd;";

        let mut out = String::with_capacity(2048);
        out.push_str(r#"<div style="font-family: Arial, sans-serif; padding: 2rem;">"#);
        let _ = write!(out, r#"<h1 style="color: #1e2a38;">{REPORT_TITLE}</h1>"#);
        let _ = write!(
            out,
            "<p><strong>Date:</strong> {}</p><hr>",
            escape_html(&self.generated_on)
        );

        let _ = write!(out, r#"<h3 style="color: #333;">{INPUTS_HEADING}</h3>"#);
        out.push_str(r#"<table style="width: 100%; border-collapse: collapse;">"#);
        let _ = write!(
            out,
            r#"<tr style="background-color: #f2f2f2;"><th style="{CELL} text-align: left;">Feature</th><th style="{CELL} text-align: left;">Value</th></tr>"#
        );
        for row in &self.rows {
            let _ = write!(
                out,
                r#"<tr><td style="{CELL}">{}</td><td style="{CELL}">{}</td></tr>"#,
                escape_html(row.label),
                escape_html(&row.value)
            );
        }
        out.push_str("</table><hr>");

        let _ = write!(out, r#"<h3 style="color: #333;">{RESULT_HEADING}</h3>"#);
        out.push_str(
            r#"<div style="background-color: #eef2ff; padding: 1rem; border-radius: 8px; text-align: center;">"#,
        );
        let _ = write!(
            out,
            r#"<p style="font-size: 1.2rem; margin: 0;">{HEADLINE_CAPTION}</p>"#
        );
        let _ = write!(
            out,
            r#"<p style="font-size: 2.5rem; font-weight: bold; color: #5e72e4; margin: 0;">{}</p>"#,
            escape_html(&self.headline)
        );
        let _ = write!(
            out,
            r#"<p style="font-size: 1rem; color: #6c757d; margin-top: 5px;">Range: {}</p>"#,
            escape_html(&self.range)
        );
        out.push_str("</div></div>");
        out
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
