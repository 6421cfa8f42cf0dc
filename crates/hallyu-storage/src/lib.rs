pub mod models;
pub mod schema;

use std::cell::RefCell;

use diesel::define_sql_function;
use diesel::prelude::*;
use diesel::sql_types::Text;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::warn;

use hallyu_core::domain::group::Group;
use hallyu_core::ports::store::{GroupStore, StoreError};

use crate::models::{GroupRow, NewGroupRow};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

define_sql_function! {
  /// `lower()` de SQLite, para comparar nombres sin distinguir
  /// mayúsculas/minúsculas igual que el catálogo en memoria.
  fn lower(x: Text) -> Text;
}

/// Store SQLite del catálogo: una sola tabla `groups` con el nombre como
/// clave primaria. Los integrantes se guardan unidos por coma (el
/// formato de archivo plano usa pipe; cada backend conserva su propia
/// convención).
pub struct SqliteGroupStore {
  conn: RefCell<SqliteConnection>,
}

impl SqliteGroupStore {
  /// Conecta (creando el archivo si hace falta) y corre las migraciones
  /// pendientes para garantizar que la tabla exista.
  pub fn new(database_url: &str) -> Result<Self, StoreError> {
    let mut conn = SqliteConnection::establish(database_url)
      .map_err(|e| StoreError::Unreachable(e.to_string()))?;
    conn.run_pending_migrations(MIGRATIONS).map_err(|e| StoreError::Storage(e.to_string()))?;
    Ok(Self { conn: RefCell::new(conn) })
  }

  /// Grupos ordenados por popularidad descendente, directo en SQL.
  ///
  /// SQLite no garantiza estabilidad en los empates; el servicio de
  /// catálogo reordena en memoria cuando la estabilidad importa.
  pub fn select_ranked(&self) -> Result<Vec<Group>, StoreError> {
    use crate::schema::groups::dsl::*;

    let mut conn = self.conn.borrow_mut();
    let rows = groups
      .order(popularity_score.desc())
      .load::<GroupRow>(&mut *conn)
      .map_err(|e| StoreError::Storage(e.to_string()))?;

    Ok(rows.into_iter().filter_map(row_to_group).collect())
  }
}

fn group_to_new_row(group: &Group) -> NewGroupRow {
  NewGroupRow {
    name: group.name.clone(),
    debut_date: group.debut_date.clone(),
    members: group.members.join(","),
    agency: group.agency.clone(),
    latest_album: group.latest_album.clone(),
    status: group.status.to_string(),
    popularity_score: group.popularity_score,
  }
}

/// `None` significa "fila malformada, sáltala" (por ejemplo un estado
/// desconocido escrito por otra herramienta).
fn row_to_group(row: GroupRow) -> Option<Group> {
  let status = match row.status.parse() {
    Ok(s) => s,
    Err(_) => {
      warn!(name = %row.name, status = %row.status, "skipping row with unknown status");
      return None;
    }
  };

  Some(Group {
    name: row.name,
    debut_date: row.debut_date,
    members: split_members(&row.members),
    agency: row.agency,
    latest_album: row.latest_album,
    status,
    popularity_score: row.popularity_score,
  })
}

fn split_members(field: &str) -> Vec<String> {
  if field.trim().is_empty() {
    return Vec::new();
  }
  field.split(',').map(|m| m.trim().to_string()).collect()
}

impl GroupStore for SqliteGroupStore {
  fn load_all(&self) -> Result<Vec<Group>, StoreError> {
    use crate::schema::groups::dsl::*;

    let mut conn = self.conn.borrow_mut();
    let rows =
      groups.load::<GroupRow>(&mut *conn).map_err(|e| StoreError::Storage(e.to_string()))?;

    Ok(rows.into_iter().filter_map(row_to_group).collect())
  }

  fn insert(&self, group: &Group) -> Result<(), StoreError> {
    use crate::schema::groups::dsl::*;

    let new_row = group_to_new_row(group);
    let mut conn = self.conn.borrow_mut();

    diesel::insert_into(groups)
      .values(&new_row)
      .execute(&mut *conn)
      .map_err(|e| StoreError::Storage(e.to_string()))?;

    Ok(())
  }

  fn update_by_name(&self, target: &str, group: &Group) -> Result<usize, StoreError> {
    use crate::schema::groups::dsl::*;

    let mut conn = self.conn.borrow_mut();

    // Columnas explícitas (el derive de AsChangeset omitiría `name`,
    // que aquí es clave primaria y puede cambiar en un rename).
    diesel::update(groups.filter(lower(name).eq(target.to_lowercase())))
      .set((
        name.eq(&group.name),
        debut_date.eq(&group.debut_date),
        members.eq(group.members.join(",")),
        agency.eq(&group.agency),
        latest_album.eq(&group.latest_album),
        status.eq(group.status.to_string()),
        popularity_score.eq(group.popularity_score),
      ))
      .execute(&mut *conn)
      .map_err(|e| StoreError::Storage(e.to_string()))
  }

  fn delete_by_name(&self, target: &str) -> Result<usize, StoreError> {
    use crate::schema::groups::dsl::*;

    let mut conn = self.conn.borrow_mut();

    diesel::delete(groups.filter(lower(name).eq(target.to_lowercase())))
      .execute(&mut *conn)
      .map_err(|e| StoreError::Storage(e.to_string()))
  }
}
