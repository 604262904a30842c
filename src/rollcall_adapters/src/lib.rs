pub mod delivery;
pub mod persistence;

// Re-export commonly used types for convenience
pub use delivery::{
    recording_code_delivery::RecordingCodeDelivery, tracing_code_delivery::TracingCodeDelivery,
};
pub use persistence::hashmap_account_store::HashMapAccountStore;
