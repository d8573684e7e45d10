//! Element ids and classes the served page must provide.

pub const PREDICTION_FORM: &str = "prediction-form";
pub const RESULT_CONTAINER: &str = "result-container";
pub const ERROR_ALERT: &str = "error-alert";
pub const PREDICT_BUTTON: &str = "predict-button";
pub const BUTTON_TEXT: &str = "button-text";
pub const BUTTON_SPINNER: &str = "button-spinner";
pub const PREDICTION_VALUE: &str = "prediction-value";
pub const RANGE_VALUE: &str = "range-value";
pub const DOWNLOAD_REPORT: &str = "download-report";
pub const PRINTABLE_REPORT: &str = "printable-report";
pub const JOB_TITLE_CHART: &str = "jobTitleChart";
pub const EDUCATION_CHART: &str = "educationChart";

/// Every id resolved at startup.
pub const REQUIRED_IDS: [&str; 12] = [
    PREDICTION_FORM,
    RESULT_CONTAINER,
    ERROR_ALERT,
    PREDICT_BUTTON,
    BUTTON_TEXT,
    BUTTON_SPINNER,
    PREDICTION_VALUE,
    RANGE_VALUE,
    DOWNLOAD_REPORT,
    PRINTABLE_REPORT,
    JOB_TITLE_CHART,
    EDUCATION_CHART,
];

/// Class that hides an element (Bootstrap's `d-none`).
pub const HIDDEN_CLASS: &str = "d-none";

/// Page global holding the Chart.js constructor.
pub const CHART_CONSTRUCTOR: &str = "Chart";
