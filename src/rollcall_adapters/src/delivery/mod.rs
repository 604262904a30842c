pub mod recording_code_delivery;
pub mod tracing_code_delivery;
