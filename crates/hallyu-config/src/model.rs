use serde::{Deserialize, Serialize};

/// Qué backend de persistencia usa el catálogo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
  /// Archivo de texto delimitado.
  #[default]
  File,
  /// Base de datos SQLite.
  Sqlite,
}

/// Sección `[storage]` del archivo de configuración.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
  pub backend: StoreBackend,
  /// Nombre del archivo de catálogo (backend `file`), dentro de data_dir.
  pub catalog_filename: String,
  /// Nombre del archivo SQLite (backend `sqlite`), dentro de data_dir.
  pub db_filename: String,
}

impl Default for StorageConfig {
  fn default() -> Self {
    Self {
      backend: StoreBackend::File,
      catalog_filename: "groups.txt".to_string(),
      db_filename: "hallyu.db".to_string(),
    }
  }
}

/// Sección `[validation]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
  /// Si es `true`, la puntuación de popularidad se restringe a 0..=100.
  pub strict_scores: bool,
}
