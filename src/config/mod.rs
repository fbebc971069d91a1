pub mod loader;
pub mod model;

pub use loader::{load, resolve, MAX_TIMEOUT_MS, MIN_TIMEOUT_MS};
pub use model::{EndpointEntry, YamlConfig};
