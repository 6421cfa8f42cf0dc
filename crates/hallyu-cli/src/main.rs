mod console;
mod shell;

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use hallyu_config::{CONFIG_BACKEND, PATHS, StorageConfig, StoreBackend, ValidationConfig};
use hallyu_core::ports::console::Console;
use hallyu_core::ports::store::GroupStore;
use hallyu_core::services::CatalogService;
use hallyu_core::validation::ScorePolicy;
use hallyu_fs::TextGroupStore;
use hallyu_storage::SqliteGroupStore;

use crate::console::StdConsole;

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .init();

  let mut console = StdConsole;

  let storage_cfg: StorageConfig = match CONFIG_BACKEND.load_section_with_default("storage") {
    Ok(cfg) => cfg,
    Err(e) => {
      console.message(&format!("Failed to read config: {e}. Exiting..."));
      return;
    }
  };
  let validation_cfg: ValidationConfig =
    match CONFIG_BACKEND.load_section_with_default("validation") {
      Ok(cfg) => cfg,
      Err(e) => {
        console.message(&format!("Failed to read config: {e}. Exiting..."));
        return;
      }
    };
  let policy =
    if validation_cfg.strict_scores { ScorePolicy::Bounded } else { ScorePolicy::Any };

  // Primer argumento: ruta del archivo/base de datos, por encima de la config.
  let path_override = std::env::args().nth(1).map(PathBuf::from);

  let store: Box<dyn GroupStore> = match storage_cfg.backend {
    StoreBackend::File => {
      let path =
        path_override.unwrap_or_else(|| PATHS.data_dir.join(&storage_cfg.catalog_filename));
      Box::new(TextGroupStore::new(path))
    }
    StoreBackend::Sqlite => {
      let path = path_override.unwrap_or_else(|| PATHS.data_dir.join(&storage_cfg.db_filename));
      match SqliteGroupStore::new(&path.to_string_lossy()) {
        Ok(store) => Box::new(store),
        Err(e) => {
          console.message(&format!("Failed to connect: {e}. Exiting..."));
          return;
        }
      }
    }
  };

  let mut catalog = CatalogService::with_store(store);
  if let Err(e) = catalog.reload() {
    // Típicamente la primera ejecución: el archivo de catálogo aún no existe.
    console.message(&format!("Starting with an empty catalog ({e})"));
  }

  shell::run(&mut console, &mut catalog, policy);
}
