mod backend;
mod model;
mod paths;

pub use backend::{ConfigBackend, TomlConfigBackend};
pub use model::{StorageConfig, StoreBackend, ValidationConfig};
pub use paths::{ConfigError, HallyuPaths};

use once_cell::sync::Lazy;

// Singleton de paths (portable / system)
pub static PATHS: Lazy<HallyuPaths> =
  Lazy::new(|| HallyuPaths::detect().expect("failed to init HallyuPaths"));

// Singleton del backend de config
pub static CONFIG_BACKEND: Lazy<TomlConfigBackend> =
  Lazy::new(|| TomlConfigBackend::new(PATHS.clone()));
