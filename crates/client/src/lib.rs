//! `salarycast-client`
//!
//! **Responsibility:** the single network call behind a prediction, and the
//! driver that runs one controller cycle around it.
//!
//! Builds for native targets and for `wasm32` (reqwest's fetch backend).

pub mod config;
pub mod driver;
pub mod http;
pub mod transport;

pub use config::{ClientConfig, ClientError};
pub use driver::submit;
pub use http::PredictionClient;
pub use transport::PredictionTransport;
