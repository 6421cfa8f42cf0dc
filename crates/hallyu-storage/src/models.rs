use crate::schema::groups;

use diesel::prelude::*;

#[derive(Debug, Queryable)]
#[diesel(table_name = groups)]
pub struct GroupRow {
  pub name: String,
  pub debut_date: String,
  pub members: String,
  pub agency: String,
  pub latest_album: String,
  pub status: String,
  pub popularity_score: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = groups)]
pub struct NewGroupRow {
  pub name: String,
  pub debut_date: String,
  pub members: String,
  pub agency: String,
  pub latest_album: String,
  pub status: String,
  pub popularity_score: i32,
}
