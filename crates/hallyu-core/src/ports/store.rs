use crate::domain::group::Group;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
  /// No se pudo abrir el archivo / conectar con la base de datos.
  #[error("store unreachable: {0}")]
  Unreachable(String),
  /// Fallo de lectura/escritura una vez abierto el store.
  #[error("storage error: {0}")]
  Storage(String),
}

/// Puerto de persistencia del catálogo.
///
/// Un `GroupStore` es el respaldo durable del conjunto canónico: archivo
/// de texto delimitado o tabla SQLite. Todas las operaciones son
/// síncronas (disco local o motor embebido, sin red de por medio).
pub trait GroupStore {
  /// Carga todos los registros. Las filas/líneas malformadas se saltan
  /// individualmente (con un warning), nunca abortan la carga completa.
  fn load_all(&self) -> Result<Vec<Group>, StoreError>;

  /// Persiste un registro nuevo.
  fn insert(&self, group: &Group) -> Result<(), StoreError>;

  /// Reemplaza el registro cuyo nombre coincide (sin distinguir
  /// mayúsculas/minúsculas) y retorna cuántos registros fueron
  /// afectados. Cero significa "no encontrado".
  fn update_by_name(&self, name: &str, group: &Group) -> Result<usize, StoreError>;

  /// Elimina por nombre; retorna cuántos registros fueron afectados.
  fn delete_by_name(&self, name: &str) -> Result<usize, StoreError>;
}

impl<T: GroupStore + ?Sized> GroupStore for Box<T> {
  fn load_all(&self) -> Result<Vec<Group>, StoreError> {
    (**self).load_all()
  }

  fn insert(&self, group: &Group) -> Result<(), StoreError> {
    (**self).insert(group)
  }

  fn update_by_name(&self, name: &str, group: &Group) -> Result<usize, StoreError> {
    (**self).update_by_name(name, group)
  }

  fn delete_by_name(&self, name: &str) -> Result<usize, StoreError> {
    (**self).delete_by_name(name)
  }
}
