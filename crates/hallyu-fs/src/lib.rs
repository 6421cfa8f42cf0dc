pub mod io;

pub use io::atomic_write_str;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::warn;

use hallyu_core::domain::group::Group;
use hallyu_core::ports::store::{GroupStore, StoreError};

/// Store de texto plano: un grupo por línea, siete campos separados por
/// coma, integrantes unidos por `|` (el separador externo ya es la coma).
///
/// `name,debutDate,members|joined,agency,latestAlbum,status,score`
///
/// Sin cabecera y sin escape de delimitadores: un campo que contenga
/// coma o pipe corrompe su línea. Es una limitación heredada del
/// formato, no algo que este store intente arreglar.
pub struct TextGroupStore {
  path: PathBuf,
}

impl TextGroupStore {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Lee el archivo completo. Falla con `Unreachable` si no existe;
  /// las líneas malformadas se saltan una a una con un warning.
  pub fn read(&self) -> Result<Vec<Group>, StoreError> {
    let contents = std::fs::read_to_string(&self.path).map_err(|e| self.open_error(e))?;
    Ok(parse_contents(&contents))
  }

  /// Reescribe el archivo completo con el conjunto recibido.
  pub fn write(&self, groups: &[Group]) -> Result<(), StoreError> {
    let mut contents = String::new();
    for group in groups {
      contents.push_str(&to_line(group));
      contents.push('\n');
    }
    atomic_write_str(&self.path, &contents).map_err(|e| StoreError::Storage(e.to_string()))
  }

  fn read_or_empty(&self) -> Result<Vec<Group>, StoreError> {
    match self.read() {
      Ok(groups) => Ok(groups),
      Err(StoreError::Unreachable(_)) => Ok(Vec::new()),
      Err(e) => Err(e),
    }
  }

  fn open_error(&self, e: std::io::Error) -> StoreError {
    if e.kind() == ErrorKind::NotFound {
      StoreError::Unreachable(format!("{}: no such file", self.path.display()))
    } else {
      StoreError::Storage(e.to_string())
    }
  }
}

impl GroupStore for TextGroupStore {
  fn load_all(&self) -> Result<Vec<Group>, StoreError> {
    self.read()
  }

  fn insert(&self, group: &Group) -> Result<(), StoreError> {
    // Un archivo aún inexistente cuenta como catálogo vacío.
    let mut groups = self.read_or_empty()?;
    groups.push(group.clone());
    self.write(&groups)
  }

  fn update_by_name(&self, name: &str, group: &Group) -> Result<usize, StoreError> {
    let mut groups = self.read_or_empty()?;
    let Some(pos) = groups.iter().position(|g| g.name.eq_ignore_ascii_case(name)) else {
      return Ok(0);
    };
    groups[pos] = group.clone();
    self.write(&groups)?;
    Ok(1)
  }

  fn delete_by_name(&self, name: &str) -> Result<usize, StoreError> {
    let mut groups = self.read_or_empty()?;
    let Some(pos) = groups.iter().position(|g| g.name.eq_ignore_ascii_case(name)) else {
      return Ok(0);
    };
    groups.remove(pos);
    self.write(&groups)?;
    Ok(1)
  }
}

fn parse_contents(contents: &str) -> Vec<Group> {
  contents
    .lines()
    .filter(|line| !line.trim().is_empty())
    .filter_map(parse_line)
    .collect()
}

/// Parsea una línea; `None` significa "línea malformada, sáltala".
fn parse_line(line: &str) -> Option<Group> {
  let fields: Vec<&str> = line.split(',').collect();
  if fields.len() < 7 {
    warn!(line, fields = fields.len(), "skipping line with too few fields");
    return None;
  }

  let popularity_score: i32 = match fields[6].trim().parse() {
    Ok(n) => n,
    Err(_) => {
      warn!(line, score = fields[6], "skipping line with non-integer score");
      return None;
    }
  };
  let status = match fields[5].parse() {
    Ok(s) => s,
    Err(_) => {
      warn!(line, status = fields[5], "skipping line with unknown status");
      return None;
    }
  };

  Some(Group {
    name: fields[0].trim().to_string(),
    debut_date: fields[1].trim().to_string(),
    members: split_members(fields[2]),
    agency: fields[3].trim().to_string(),
    latest_album: fields[4].trim().to_string(),
    status,
    popularity_score,
  })
}

fn split_members(field: &str) -> Vec<String> {
  if field.trim().is_empty() {
    return Vec::new();
  }
  field.split('|').map(|m| m.trim().to_string()).collect()
}

fn to_line(group: &Group) -> String {
  format!(
    "{},{},{},{},{},{},{}",
    group.name,
    group.debut_date,
    group.members.join("|"),
    group.agency,
    group.latest_album,
    group.status,
    group.popularity_score
  )
}

#[cfg(test)]
mod tests {
  use super::*;
  use hallyu_core::domain::status::GroupStatus;
  use tempfile::tempdir;

  fn group(name: &str, members: &[&str], score: i32) -> Group {
    Group {
      name: name.to_string(),
      debut_date: "2020-11-17".to_string(),
      members: members.iter().map(|m| m.to_string()).collect(),
      agency: "SM".to_string(),
      latest_album: "Armageddon".to_string(),
      status: GroupStatus::Active,
      popularity_score: score,
    }
  }

  #[test]
  fn write_then_read_round_trips() {
    let dir = tempdir().unwrap();
    let store = TextGroupStore::new(dir.path().join("groups.txt"));
    let groups = vec![
      group("Aespa", &["Karina", "Winter", "Giselle", "Ningning"], 95),
      group("Solo Act", &[], 40),
    ];

    store.write(&groups).unwrap();

    assert_eq!(store.read().unwrap(), groups);
  }

  #[test]
  fn read_fails_for_missing_path() {
    let dir = tempdir().unwrap();
    let store = TextGroupStore::new(dir.path().join("nope.txt"));

    assert!(matches!(store.read(), Err(StoreError::Unreachable(_))));
  }

  #[test]
  fn malformed_lines_are_skipped_individually() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("groups.txt");
    let raw = "\
Aespa,2020-11-17,Karina|Winter,SM,Armageddon,active,95
too,few,fields
IVE,2021-12-01,Yujin|Wonyoung,Starship,Empathy,active,not-a-number
Itzy,2019-02-12,Yeji|Ryujin,JYP,Born to Be,touring,80
Twice,2015-10-20,Nayeon|Jeongyeon,JYP,With You-th,active,88
";
    std::fs::write(&path, raw).unwrap();

    let store = TextGroupStore::new(&path);
    let loaded = store.read().unwrap();
    let names: Vec<&str> = loaded.iter().map(|g| g.name.as_str()).collect();

    assert_eq!(names, vec!["Aespa", "Twice"]);
  }

  #[test]
  fn members_keep_order_and_empty_entries() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("groups.txt");
    std::fs::write(&path, "X,2020-01-01,A||B,Agency,Album,hiatus,10\n").unwrap();

    let store = TextGroupStore::new(&path);
    let loaded = store.read().unwrap();

    assert_eq!(loaded[0].members, vec!["A", "", "B"]);
    assert_eq!(loaded[0].status, GroupStatus::Hiatus);
  }

  #[test]
  fn trait_mutations_edit_the_file_in_place() {
    let dir = tempdir().unwrap();
    let store = TextGroupStore::new(dir.path().join("groups.txt"));

    // insert sobre archivo inexistente lo crea
    store.insert(&group("Aespa", &["Karina"], 95)).unwrap();
    store.insert(&group("IVE", &["Yujin"], 80)).unwrap();

    assert_eq!(store.update_by_name("ive", &group("IVE", &["Yujin"], 85)).unwrap(), 1);
    assert_eq!(store.update_by_name("Ghost", &group("Ghost", &[], 0)).unwrap(), 0);

    assert_eq!(store.delete_by_name("AESPA").unwrap(), 1);
    assert_eq!(store.delete_by_name("Aespa").unwrap(), 0);

    let remaining = store.read().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].popularity_score, 85);
  }
}
