use crate::domain::{access_code::AccessCode, phone::Phone};

/// Out-of-band notification of a freshly issued access code. Fire and
/// forget: implementations own their failure handling.
pub trait CodeDeliveryChannel {
    fn deliver(&self, phone: &Phone, code: &AccessCode);
}
