use crate::ports::store::StoreError;
use thiserror::Error;

/// Error del núcleo del catálogo.
///
/// Las capas de presentación (CLI, diálogos, etc.) deberían mapear este
/// error a mensajes de usuario; nunca debe tumbar el proceso.
#[derive(Debug, Error)]
pub enum CatalogError {
  #[error("a group named {0:?} already exists")]
  DuplicateName(String),

  #[error("no group named {0:?}")]
  NotFound(String),

  #[error("invalid {field}: {value:?}")]
  InvalidField { field: &'static str, value: String },

  #[error(transparent)]
  Store(#[from] StoreError),
}
