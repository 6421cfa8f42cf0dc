use crate::domain::group::Group;
use crate::errors::CatalogError;
use crate::ports::store::GroupStore;
use crate::validation;

/// Servicio de catálogo: dueño del conjunto canónico de grupos.
///
/// Mantiene los registros en memoria (en orden de inserción) y, si hay
/// un store adjunto, replica cada mutación hacia él. No hay estado
/// global: el ciclo de vida del conjunto es el de esta instancia.
pub struct CatalogService<S: GroupStore> {
  groups: Vec<Group>,
  store: Option<S>,
}

impl<S: GroupStore> Default for CatalogService<S> {
  fn default() -> Self {
    Self::new()
  }
}

impl<S: GroupStore> CatalogService<S> {
  /// Catálogo solo en memoria, sin persistencia.
  pub fn new() -> Self {
    Self { groups: Vec::new(), store: None }
  }

  /// Catálogo respaldado por un store. El conjunto arranca vacío;
  /// llama a [`CatalogService::reload`] para poblarlo.
  pub fn with_store(store: S) -> Self {
    Self { groups: Vec::new(), store: Some(store) }
  }

  /// Reemplaza el conjunto canónico con lo que haya en el store.
  ///
  /// Los registros malformados ya vienen filtrados por el store (se
  /// saltan uno a uno); el error aquí solo ocurre si el store completo
  /// es inaccesible. Sin store adjunto no hace nada.
  pub fn reload(&mut self) -> Result<(), CatalogError> {
    if let Some(store) = &self.store {
      self.groups = store.load_all()?;
    }
    Ok(())
  }

  /// Agrega un grupo nuevo.
  ///
  /// Rechaza nombres vacíos y duplicados (sin distinguir
  /// mayúsculas/minúsculas). Si hay store, persiste antes de tocar el
  /// conjunto en memoria: un fallo de persistencia deja el catálogo
  /// como estaba.
  pub fn add(&mut self, group: Group) -> Result<(), CatalogError> {
    if group.name.trim().is_empty() {
      return Err(CatalogError::InvalidField { field: "name", value: group.name });
    }
    if !validation::valid_name(&group.name, self.groups.iter().map(|g| g.name.as_str())) {
      return Err(CatalogError::DuplicateName(group.name));
    }
    if let Some(store) = &self.store {
      store.insert(&group)?;
    }
    self.groups.push(group);
    Ok(())
  }

  /// Instantánea del catálogo en orden de inserción. El llamador recibe
  /// copias: mutar el catálogo después no afecta lo ya listado.
  pub fn list(&self) -> Vec<Group> {
    self.groups.clone()
  }

  /// Reemplaza completo el grupo llamado `name` por `group`.
  ///
  /// La búsqueda usa el nombre *anterior*; el reemplazo puede traer un
  /// nombre distinto (renombrar está permitido). La validación de
  /// campos es responsabilidad del llamador, antes de llegar aquí.
  pub fn update(&mut self, name: &str, group: Group) -> Result<(), CatalogError> {
    let Some(pos) = self.position_of(name) else {
      return Err(CatalogError::NotFound(name.to_string()));
    };
    if let Some(store) = &self.store {
      let affected = store.update_by_name(name, &group)?;
      if affected == 0 {
        return Err(CatalogError::NotFound(name.to_string()));
      }
    }
    self.groups[pos] = group;
    Ok(())
  }

  /// Elimina el grupo llamado `name`.
  pub fn delete(&mut self, name: &str) -> Result<(), CatalogError> {
    let Some(pos) = self.position_of(name) else {
      return Err(CatalogError::NotFound(name.to_string()));
    };
    if let Some(store) = &self.store {
      let affected = store.delete_by_name(name)?;
      if affected == 0 {
        return Err(CatalogError::NotFound(name.to_string()));
      }
    }
    self.groups.remove(pos);
    Ok(())
  }

  /// Grupos ordenados por popularidad descendente.
  ///
  /// El orden es estable: a igual puntuación se conserva el orden de
  /// inserción. El conjunto canónico no se reordena.
  pub fn rank(&self) -> Vec<Group> {
    let mut ranked = self.groups.clone();
    ranked.sort_by(|a, b| b.popularity_score.cmp(&a.popularity_score));
    ranked
  }

  fn position_of(&self, name: &str) -> Option<usize> {
    self.groups.iter().position(|g| g.name.eq_ignore_ascii_case(name))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::status::GroupStatus;
  use crate::ports::store::StoreError;
  use std::cell::RefCell;

  fn group(name: &str, score: i32) -> Group {
    Group {
      name: name.to_string(),
      debut_date: "2020-11-17".to_string(),
      members: vec!["Karina".to_string(), "Winter".to_string()],
      agency: "SM".to_string(),
      latest_album: "Armageddon".to_string(),
      status: GroupStatus::Active,
      popularity_score: score,
    }
  }

  /// Store en memoria que graba las mutaciones que recibe.
  #[derive(Default)]
  struct FakeStore {
    rows: RefCell<Vec<Group>>,
  }

  impl GroupStore for FakeStore {
    fn load_all(&self) -> Result<Vec<Group>, StoreError> {
      Ok(self.rows.borrow().clone())
    }

    fn insert(&self, group: &Group) -> Result<(), StoreError> {
      self.rows.borrow_mut().push(group.clone());
      Ok(())
    }

    fn update_by_name(&self, name: &str, group: &Group) -> Result<usize, StoreError> {
      let mut rows = self.rows.borrow_mut();
      match rows.iter().position(|g| g.name.eq_ignore_ascii_case(name)) {
        Some(pos) => {
          rows[pos] = group.clone();
          Ok(1)
        }
        None => Ok(0),
      }
    }

    fn delete_by_name(&self, name: &str) -> Result<usize, StoreError> {
      let mut rows = self.rows.borrow_mut();
      match rows.iter().position(|g| g.name.eq_ignore_ascii_case(name)) {
        Some(pos) => {
          rows.remove(pos);
          Ok(1)
        }
        None => Ok(0),
      }
    }
  }

  #[test]
  fn add_then_list_contains_exactly_that_group() {
    let mut catalog = CatalogService::<FakeStore>::new();
    let aespa = group("Aespa", 95);

    catalog.add(aespa.clone()).unwrap();

    assert_eq!(catalog.list(), vec![aespa]);
  }

  #[test]
  fn add_rejects_case_insensitive_duplicates() {
    let mut catalog = CatalogService::<FakeStore>::new();
    catalog.add(group("Aespa", 95)).unwrap();

    let err = catalog.add(group("aespa", 10)).unwrap_err();

    assert!(matches!(err, CatalogError::DuplicateName(n) if n == "aespa"));
    assert_eq!(catalog.list().len(), 1);
    assert_eq!(catalog.list()[0].popularity_score, 95);
  }

  #[test]
  fn add_rejects_empty_names() {
    let mut catalog = CatalogService::<FakeStore>::new();
    let err = catalog.add(group("   ", 1)).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidField { field: "name", .. }));
  }

  #[test]
  fn update_and_delete_fail_for_missing_names() {
    let mut catalog = CatalogService::<FakeStore>::new();
    catalog.add(group("IVE", 80)).unwrap();

    assert!(matches!(
      catalog.update("Itzy", group("Itzy", 70)),
      Err(CatalogError::NotFound(n)) if n == "Itzy"
    ));
    assert!(matches!(
      catalog.delete("Itzy"),
      Err(CatalogError::NotFound(n)) if n == "Itzy"
    ));
  }

  #[test]
  fn update_is_keyed_on_the_old_name_and_may_rename() {
    let mut catalog = CatalogService::<FakeStore>::new();
    catalog.add(group("GFriend", 60)).unwrap();

    catalog.update("gfriend", group("VIVIZ", 72)).unwrap();

    let listed = catalog.list();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "VIVIZ");
    assert_eq!(listed[0].popularity_score, 72);
  }

  #[test]
  fn delete_matches_case_insensitively() {
    let mut catalog = CatalogService::<FakeStore>::new();
    catalog.add(group("Blackpink", 97)).unwrap();

    catalog.delete("BLACKPINK").unwrap();

    assert!(catalog.list().is_empty());
  }

  #[test]
  fn rank_sorts_descending_and_is_stable_on_ties() {
    let mut catalog = CatalogService::<FakeStore>::new();
    catalog.add(group("Twice", 88)).unwrap();
    catalog.add(group("Aespa", 95)).unwrap();
    catalog.add(group("IVE", 88)).unwrap();

    let ranked = catalog.rank();
    let names: Vec<&str> = ranked.iter().map(|g| g.name.as_str()).collect();

    // Twice e IVE empatan: conservan su orden de inserción relativo.
    assert_eq!(names, vec!["Aespa", "Twice", "IVE"]);
    // El conjunto canónico no se reordena.
    let snapshot = catalog.list();
    let listed: Vec<&str> = snapshot.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(listed, vec!["Twice", "Aespa", "IVE"]);
  }

  #[test]
  fn list_returns_a_snapshot() {
    let mut catalog = CatalogService::<FakeStore>::new();
    catalog.add(group("Aespa", 95)).unwrap();

    let before = catalog.list();
    catalog.add(group("IVE", 80)).unwrap();

    assert_eq!(before.len(), 1);
  }

  #[test]
  fn mutations_reach_the_attached_store() {
    let mut catalog = CatalogService::with_store(FakeStore::default());
    catalog.add(group("Aespa", 95)).unwrap();
    catalog.add(group("IVE", 80)).unwrap();
    catalog.update("IVE", group("IVE", 85)).unwrap();
    catalog.delete("Aespa").unwrap();

    catalog.reload().unwrap();
    let listed = catalog.list();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].popularity_score, 85);
  }

  #[test]
  fn reload_replaces_the_canonical_set() {
    let store = FakeStore::default();
    store.insert(&group("Seeded", 50)).unwrap();

    let mut catalog = CatalogService::with_store(store);
    catalog.reload().unwrap();

    assert_eq!(catalog.list().len(), 1);
    assert_eq!(catalog.list()[0].name, "Seeded");
  }
}
