pub mod error;
pub mod g2p;
pub mod preprocess;
pub mod telemetry;
