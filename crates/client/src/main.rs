//! Headless driver: run one prediction cycle and print the report.
//!
//! ```text
//! SALARYCAST_API_URL=http://localhost:5000 salarycast-cli inputs.json > report.html
//! ```

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use salarycast_client::{ClientConfig, PredictionClient, submit};
    use salarycast_core::{Controller, FormInputs};

    salarycast_observability::init();

    let path = std::env::args()
        .nth(1)
        .context("usage: salarycast-cli <inputs.json>")?;
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read inputs from {path}"))?;
    let inputs: FormInputs = serde_json::from_str(&raw)
        .with_context(|| format!("{path} is not a valid inputs object"))?;

    let config = ClientConfig::from_env()?;
    tracing::info!(url = %config.predict_url(), "requesting prediction");
    let client = PredictionClient::new(config)?;

    let mut controller = Controller::new();
    submit(&mut controller, &client, inputs).await;

    let view = controller.view();
    if let Some(message) = view.error {
        anyhow::bail!(message);
    }

    // Same shape as the browser's toLocaleDateString() in en-US.
    let today = chrono::Local::now().format("%-m/%-d/%Y").to_string();
    let report = controller.report(&today)?;

    eprintln!("Prediction: {}", report.headline());
    eprintln!("Range: {}", report.range());
    println!("{}", report.to_html());
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
