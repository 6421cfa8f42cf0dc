use crate::domain::status::GroupStatus;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Representa a un grupo de K-pop dentro del catálogo.
///
/// Es un objeto de valor plano: la identidad del grupo es su nombre
/// (único en el catálogo, sin distinguir mayúsculas/minúsculas), no un
/// id sintético. Una actualización lo reemplaza completo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
  /// Nombre canónico del grupo (clave única del catálogo).
  pub name: String,

  /// Fecha de debut en formato ISO `YYYY-MM-DD`.
  pub debut_date: String,

  /// Integrantes, en el orden en que fueron ingresados. Puede estar vacío.
  pub members: Vec<String>,

  /// Agencia / sello que gestiona al grupo.
  pub agency: String,

  /// Título del álbum más reciente.
  pub latest_album: String,

  /// Estado actual del grupo.
  pub status: GroupStatus,

  /// Puntuación de popularidad. El rango permitido depende de la
  /// política de validación activa (ver `validation::ScorePolicy`).
  pub popularity_score: i32,
}

impl fmt::Display for Group {
  /// Render multilínea pensado para consola, un campo por línea.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "Name: {}", self.name)?;
    writeln!(f, "Debut Date: {}", self.debut_date)?;
    writeln!(f, "Members: {}", self.members.join(", "))?;
    writeln!(f, "Agency: {}", self.agency)?;
    writeln!(f, "Latest Album: {}", self.latest_album)?;
    writeln!(f, "Status: {}", self.status)?;
    write!(f, "Popularity Score: {}", self.popularity_score)
  }
}
