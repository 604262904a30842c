use rollcall_core::{AccessCode, CodeDeliveryChannel, Phone};

/// Stand-in for an SMS gateway: logs the dispatch instead of sending it.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingCodeDelivery;

impl TracingCodeDelivery {
    pub fn new() -> Self {
        Self
    }
}

impl CodeDeliveryChannel for TracingCodeDelivery {
    fn deliver(&self, phone: &Phone, code: &AccessCode) {
        tracing::info!(%phone, %code, "sending access code");
    }
}
