pub mod metrics;
pub mod radar;
