use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Estado de actividad de un grupo.
///
/// A diferencia de otros catálogos con valores abiertos, aquí el
/// conjunto es cerrado: solo existen estos tres estados y cualquier
/// otro valor es un error de entrada. Se almacena siempre en minúsculas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupStatus {
  /// El grupo sigue en activo.
  Active,
  /// El grupo se disolvió.
  Disbanded,
  /// El grupo está en pausa indefinida.
  Hiatus,
}

/// Error al parsear un estado desconocido.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status: {0:?} (expected active, disbanded or hiatus)")]
pub struct ParseStatusError(pub String);

impl FromStr for GroupStatus {
  type Err = ParseStatusError;

  /// Convierte una cadena en `GroupStatus`.
  ///
  /// La comparación normaliza (trim + minúsculas), así que `"Active"`,
  /// `" ACTIVE "` y `"active"` son equivalentes. **Parsear sí puede
  /// fallar**: un valor fuera del conjunto retorna `ParseStatusError`.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "active" => Ok(GroupStatus::Active),
      "disbanded" => Ok(GroupStatus::Disbanded),
      "hiatus" => Ok(GroupStatus::Hiatus),
      other => Err(ParseStatusError(other.to_string())),
    }
  }
}

impl fmt::Display for GroupStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let s = match self {
      GroupStatus::Active => "active",
      GroupStatus::Disbanded => "disbanded",
      GroupStatus::Hiatus => "hiatus",
    };
    f.write_str(s)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_case_insensitively() {
    assert_eq!("Active".parse::<GroupStatus>().unwrap(), GroupStatus::Active);
    assert_eq!(" DISBANDED ".parse::<GroupStatus>().unwrap(), GroupStatus::Disbanded);
    assert_eq!("hiatus".parse::<GroupStatus>().unwrap(), GroupStatus::Hiatus);
  }

  #[test]
  fn rejects_unknown_values() {
    assert!("retired".parse::<GroupStatus>().is_err());
    assert!("".parse::<GroupStatus>().is_err());
  }

  #[test]
  fn displays_lowercase() {
    assert_eq!(GroupStatus::Active.to_string(), "active");
    assert_eq!(GroupStatus::Hiatus.to_string(), "hiatus");
  }
}
