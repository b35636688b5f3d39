//! Era onboarding engine: quiz scoring, classification, and dynamic flow
//! composition, plus the HTTP seam the API service mounts.

pub mod config;
pub mod error;
pub mod onboarding;
pub mod telemetry;
