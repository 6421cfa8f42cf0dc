use crate::domain::group::Group;

/// Puerto de presentación.
///
/// Cualquier front end (consola, diálogos gráficos) se reduce a estas
/// tres capacidades; el núcleo nunca habla con stdin/stdout ni con un
/// toolkit directamente.
pub trait Console {
  /// Pide al usuario un campo y retorna la línea ingresada (sin el
  /// salto de línea final).
  fn request_field(&mut self, prompt: &str) -> String;

  /// Muestra un mensaje informativo o de error.
  fn message(&mut self, text: &str);

  /// Muestra una lista de grupos.
  fn show_groups(&mut self, groups: &[Group]);
}
