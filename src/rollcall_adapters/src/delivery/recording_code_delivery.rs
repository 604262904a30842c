use std::cell::RefCell;
use std::rc::Rc;

use rollcall_core::{AccessCode, CodeDeliveryChannel, Phone};

/// Captures every delivery so tests can assert on issued codes without a
/// real transport. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct RecordingCodeDelivery {
    deliveries: Rc<RefCell<Vec<(Phone, AccessCode)>>>,
}

impl RecordingCodeDelivery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deliveries(&self) -> Vec<(Phone, AccessCode)> {
        self.deliveries.borrow().clone()
    }

    pub fn last_code(&self) -> Option<AccessCode> {
        self.deliveries
            .borrow()
            .last()
            .map(|(_, code)| code.clone())
    }
}

impl CodeDeliveryChannel for RecordingCodeDelivery {
    fn deliver(&self, phone: &Phone, code: &AccessCode) {
        self.deliveries.borrow_mut().push((phone.clone(), code.clone()));
    }
}
