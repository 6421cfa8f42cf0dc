use crate::domain::status::GroupStatus;
use chrono::NaiveDate;

/// Política para la puntuación de popularidad.
///
/// Algunos despliegues aceptan cualquier entero y otros exigen 0..=100,
/// así que el rango es una política configurable y no una regla fija.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScorePolicy {
  /// Cualquier `i32` es válido.
  #[default]
  Any,
  /// Solo se aceptan valores entre 0 y 100 inclusive.
  Bounded,
}

/// Valida una fecha en formato estricto `YYYY-MM-DD`.
///
/// Estricto significa:
/// - exactamente 10 caracteres, guiones en las posiciones 4 y 7;
/// - mes y día siempre a dos dígitos (`2023-2-28` es inválido);
/// - fecha real del calendario (`2023-02-30` es inválido);
/// - sin basura al final.
pub fn valid_date(s: &str) -> bool {
  let bytes = s.as_bytes();
  if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
    return false;
  }
  let digits_ok = bytes
    .iter()
    .enumerate()
    .all(|(i, b)| if i == 4 || i == 7 { true } else { b.is_ascii_digit() });
  if !digits_ok {
    return false;
  }
  // La forma ya es correcta; chrono decide si el día existe en el calendario.
  NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

/// Valida que `s` sea uno de los tres estados conocidos (sin distinguir
/// mayúsculas/minúsculas).
pub fn valid_status(s: &str) -> bool {
  s.parse::<GroupStatus>().is_ok()
}

/// Valida la puntuación según la política activa.
pub fn valid_score(score: i32, policy: ScorePolicy) -> bool {
  match policy {
    ScorePolicy::Any => true,
    ScorePolicy::Bounded => (0..=100).contains(&score),
  }
}

/// Valida un nombre de grupo: no vacío y ausente de `existing` sin
/// distinguir mayúsculas/minúsculas.
pub fn valid_name<'a, I>(name: &str, existing: I) -> bool
where
  I: IntoIterator<Item = &'a str>,
{
  if name.trim().is_empty() {
    return false;
  }
  !existing.into_iter().any(|n| n.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn valid_date_accepts_real_calendar_dates() {
    assert!(valid_date("2023-02-28"));
    assert!(valid_date("2020-11-17"));
    assert!(valid_date("2024-02-29")); // bisiesto
  }

  #[test]
  fn valid_date_rejects_impossible_days() {
    assert!(!valid_date("2023-02-30"));
    assert!(!valid_date("2023-13-01"));
    assert!(!valid_date("2023-00-10"));
    assert!(!valid_date("2023-02-29")); // no bisiesto
  }

  #[test]
  fn valid_date_requires_two_digit_components() {
    assert!(!valid_date("2023-2-28"));
    assert!(!valid_date("2023-02-8"));
    assert!(!valid_date("23-02-28"));
  }

  #[test]
  fn valid_date_rejects_garbage() {
    assert!(!valid_date(""));
    assert!(!valid_date("2023-02-28x"));
    assert!(!valid_date("2023/02/28"));
    assert!(!valid_date("20a3-02-28"));
  }

  #[test]
  fn valid_status_is_case_insensitive() {
    assert!(valid_status("active"));
    assert!(valid_status("Disbanded"));
    assert!(valid_status("HIATUS"));
    assert!(!valid_status("on tour"));
  }

  #[test]
  fn valid_score_honors_policy() {
    assert!(valid_score(-40, ScorePolicy::Any));
    assert!(valid_score(9999, ScorePolicy::Any));
    assert!(valid_score(0, ScorePolicy::Bounded));
    assert!(valid_score(100, ScorePolicy::Bounded));
    assert!(!valid_score(-1, ScorePolicy::Bounded));
    assert!(!valid_score(101, ScorePolicy::Bounded));
  }

  #[test]
  fn valid_name_checks_emptiness_and_uniqueness() {
    let existing = ["Aespa".to_string(), "IVE".to_string()];
    let names = || existing.iter().map(String::as_str);

    assert!(valid_name("NewJeans", names()));
    assert!(!valid_name("aespa", names()));
    assert!(!valid_name("", names()));
    assert!(!valid_name("   ", names()));
  }
}
