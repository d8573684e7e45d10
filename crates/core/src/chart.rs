//! Static chart datasets and the chart configurations bound to them.

use serde::{Deserialize, Serialize};
use serde_json::{Value as JsonValue, json};

use crate::error::InitError;

/// Page global carrying the average-salary-by-job-title dataset.
pub const SALARY_BY_JOB_TITLE: &str = "chart1Data";
/// Page global carrying the education-level distribution dataset.
pub const EDUCATION_DISTRIBUTION: &str = "chart2Data";

const SALARY_SERIES_LABEL: &str = "Average Monthly Salary (₹)";
const SALARY_COLOR: &str = "#5e72e4";
const EDUCATION_SERIES_LABEL: &str = "Count";
const EDUCATION_PALETTE: [&str; 5] = ["#5e72e4", "#324cdd", "#8997ff", "#2c3e50", "#95a5a6"];

/// Positional label/value pairs supplied at page load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartDataset {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

impl ChartDataset {
    pub fn new(labels: Vec<String>, data: Vec<f64>) -> Self {
        Self { labels, data }
    }

    pub fn is_aligned(&self) -> bool {
        self.labels.len() == self.data.len()
    }

    /// Pairs `labels[i]` with `data[i]`, truncated to the shorter side.
    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.data.iter().copied())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ChartKind {
    HorizontalBar,
    Pie,
}

impl ChartKind {
    fn chartjs_type(&self) -> &'static str {
        match self {
            ChartKind::HorizontalBar => "bar",
            ChartKind::Pie => "pie",
        }
    }
}

/// Fully resolved chart: kind, series styling and aligned points.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    kind: ChartKind,
    series_label: &'static str,
    colors: Vec<&'static str>,
    labels: Vec<String>,
    data: Vec<f64>,
}

impl ChartSpec {
    pub fn salary_by_job_title(dataset: &ChartDataset) -> Self {
        Self::from_dataset(
            SALARY_BY_JOB_TITLE,
            ChartKind::HorizontalBar,
            SALARY_SERIES_LABEL,
            vec![SALARY_COLOR],
            dataset,
        )
    }

    pub fn education_distribution(dataset: &ChartDataset) -> Self {
        Self::from_dataset(
            EDUCATION_DISTRIBUTION,
            ChartKind::Pie,
            EDUCATION_SERIES_LABEL,
            EDUCATION_PALETTE.to_vec(),
            dataset,
        )
    }

    fn from_dataset(
        name: &'static str,
        kind: ChartKind,
        series_label: &'static str,
        colors: Vec<&'static str>,
        dataset: &ChartDataset,
    ) -> Self {
        if !dataset.is_aligned() {
            tracing::warn!(
                dataset = name,
                labels = dataset.labels.len(),
                values = dataset.data.len(),
                "chart dataset length mismatch; truncating to shorter side"
            );
        }

        let (labels, data) = dataset
            .points()
            .map(|(label, value)| (label.to_string(), value))
            .unzip();

        Self {
            kind,
            series_label,
            colors,
            labels,
            data,
        }
    }

    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Chart.js configuration object (`new Chart(ctx, config)`).
    pub fn to_chartjs_config(&self) -> JsonValue {
        // A single-colour series takes a plain string; a palette takes an array.
        let background = match self.colors.as_slice() {
            [single] => json!(single),
            many => json!(many),
        };

        let mut options = json!({ "responsive": true });
        if self.kind == ChartKind::HorizontalBar {
            options["indexAxis"] = json!("y");
        }

        json!({
            "type": self.kind.chartjs_type(),
            "data": {
                "labels": self.labels,
                "datasets": [{
                    "label": self.series_label,
                    "data": self.data,
                    "backgroundColor": background,
                }],
            },
            "options": options,
        })
    }
}

/// Both datasets as injected by the page, before validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeeds {
    pub salary_by_job_title: Option<ChartDataset>,
    pub education_distribution: Option<ChartDataset>,
}

impl ChartSeeds {
    /// Parse one injected global. `None` means the global was absent.
    pub fn parse(name: &'static str, raw: Option<JsonValue>) -> Result<Option<ChartDataset>, InitError> {
        raw.map(|value| {
            serde_json::from_value(value).map_err(|e| InitError::InvalidDataset {
                name,
                reason: e.to_string(),
            })
        })
        .transpose()
    }

    /// Resolve both chart specs; a missing dataset is fatal.
    pub fn into_specs(self) -> Result<(ChartSpec, ChartSpec), InitError> {
        let salary = self
            .salary_by_job_title
            .ok_or(InitError::MissingDataset(SALARY_BY_JOB_TITLE))?;
        let education = self
            .education_distribution
            .ok_or(InitError::MissingDataset(EDUCATION_DISTRIBUTION))?;

        Ok((
            ChartSpec::salary_by_job_title(&salary),
            ChartSpec::education_distribution(&education),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(labels: &[&str], data: &[f64]) -> ChartDataset {
        ChartDataset::new(labels.iter().map(|s| s.to_string()).collect(), data.to_vec())
    }

    #[test]
    fn salary_chart_is_horizontal_bar_with_single_colour() {
        let spec = ChartSpec::salary_by_job_title(&dataset(
            &["Data Scientist", "Analyst"],
            &[91000.5, 52000.0],
        ));
        let config = spec.to_chartjs_config();

        assert_eq!(config["type"], "bar");
        assert_eq!(config["options"]["indexAxis"], "y");
        assert_eq!(config["options"]["responsive"], true);
        assert_eq!(config["data"]["labels"], json!(["Data Scientist", "Analyst"]));
        assert_eq!(config["data"]["datasets"][0]["label"], "Average Monthly Salary (₹)");
        assert_eq!(config["data"]["datasets"][0]["backgroundColor"], "#5e72e4");
        assert_eq!(config["data"]["datasets"][0]["data"], json!([91000.5, 52000.0]));
    }

    #[test]
    fn education_chart_is_pie_with_palette() {
        let spec = ChartSpec::education_distribution(&dataset(
            &["Bachelors", "Masters", "PhD"],
            &[420.0, 310.0, 70.0],
        ));
        let config = spec.to_chartjs_config();

        assert_eq!(spec.kind(), ChartKind::Pie);
        assert_eq!(config["type"], "pie");
        assert!(config["options"].get("indexAxis").is_none());
        assert_eq!(config["data"]["datasets"][0]["label"], "Count");
        assert_eq!(
            config["data"]["datasets"][0]["backgroundColor"],
            json!(["#5e72e4", "#324cdd", "#8997ff", "#2c3e50", "#95a5a6"])
        );
    }

    #[test]
    fn mismatched_lengths_truncate_to_shorter_side() {
        let more_labels = dataset(&["A", "B", "C"], &[1.0, 2.0]);
        let spec = ChartSpec::salary_by_job_title(&more_labels);
        assert_eq!(spec.labels(), ["A", "B"]);
        assert_eq!(spec.data(), [1.0, 2.0]);

        let more_data = dataset(&["A"], &[1.0, 2.0, 3.0]);
        let spec = ChartSpec::education_distribution(&more_data);
        assert_eq!(spec.labels(), ["A"]);
        assert_eq!(spec.data(), [1.0]);
    }

    #[test]
    fn seeds_parse_and_require_both_datasets() {
        let salary = ChartSeeds::parse(
            SALARY_BY_JOB_TITLE,
            Some(json!({ "labels": ["Analyst"], "data": [52000.0] })),
        )
        .unwrap();
        assert_eq!(salary, Some(dataset(&["Analyst"], &[52000.0])));

        let seeds = ChartSeeds {
            salary_by_job_title: salary,
            education_distribution: None,
        };
        assert_eq!(
            seeds.into_specs().unwrap_err(),
            InitError::MissingDataset(EDUCATION_DISTRIBUTION)
        );
    }

    #[test]
    fn malformed_seed_is_an_init_error() {
        let err = ChartSeeds::parse(EDUCATION_DISTRIBUTION, Some(json!({}))).unwrap_err();
        assert!(matches!(err, InitError::InvalidDataset { name: "chart2Data", .. }));

        assert_eq!(ChartSeeds::parse(EDUCATION_DISTRIBUTION, None), Ok(None));
    }
}
