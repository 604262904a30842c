pub mod registry;

pub use registry::{AccountRegistry, InMemoryRegistry, RegistryError};
