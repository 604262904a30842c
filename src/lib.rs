//! # Rollcall - Account Registration Library
//!
//! This is a facade crate that re-exports all public APIs from the rollcall
//! components. Use this crate to get access to the whole registration
//! machinery in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! rollcall = { path = "../rollcall" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Account`, `Login`, `Phone`, `AccessCode`, etc.
//! - **Ports**: `AccountStore`, `CodeDeliveryChannel`
//! - **Adapters**: `HashMapAccountStore`, `TracingCodeDelivery`,
//!   `RecordingCodeDelivery`
//! - **Registry**: `AccountRegistry` - the main entry point

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use rollcall_core::*;
}

// Re-export most commonly used core types at the root level
pub use rollcall_core::{
    AccessCode, Account, AccountError, AccountOrigin, Email, FullName, ImportRecord,
    ImportedCredential, Login, Password, PasswordHash, Phone, PhoneFormatError, Salt,
};

// ============================================================================
// Ports
// ============================================================================

/// Port trait definitions
pub mod ports {
    pub use rollcall_core::{AccountStore, AccountStoreError, CodeDeliveryChannel};
}

// Re-export port traits at root level
pub use rollcall_core::{AccountStore, AccountStoreError, CodeDeliveryChannel};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Persistence implementations
    pub mod persistence {
        pub use rollcall_adapters::persistence::*;
    }

    /// Code delivery implementations
    pub mod delivery {
        pub use rollcall_adapters::delivery::*;
    }
}

// Re-export commonly used adapters at root level
pub use rollcall_adapters::{HashMapAccountStore, RecordingCodeDelivery, TracingCodeDelivery};

// ============================================================================
// Account Registry (Main Entry Point)
// ============================================================================

/// Main account registry
pub use rollcall_registry::{AccountRegistry, InMemoryRegistry, RegistryError};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export rand for supplying custom randomness sources
pub use rand;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};
