use hallyu_core::domain::group::Group;
use hallyu_core::domain::status::GroupStatus;
use hallyu_core::ports::store::GroupStore;
use hallyu_storage::SqliteGroupStore;

fn main() {
  // exporta DATABASE_URL si quieres otro archivo
  let url = std::env::var("DATABASE_URL").unwrap_or_else(|_| "hallyu.db".to_string());
  let store = SqliteGroupStore::new(&url).expect("failed to connect");

  let aespa = Group {
    name: "Aespa".to_string(),
    debut_date: "2020-11-17".to_string(),
    members: vec![
      "Karina".to_string(),
      "Winter".to_string(),
      "Giselle".to_string(),
      "Ningning".to_string(),
    ],
    agency: "SM".to_string(),
    latest_album: "Armageddon".to_string(),
    status: GroupStatus::Active,
    popularity_score: 95,
  };

  println!("Inserting group {}", aespa.name);
  store.insert(&aespa).expect("failed to insert group");

  let loaded = store.load_all().expect("failed to load groups");
  println!("Loaded from DB: {loaded:?}");

  let ranked = store.select_ranked().expect("failed to rank groups");
  for (i, group) in ranked.iter().enumerate() {
    println!("{}. {} - Popularity Score: {}", i + 1, group.name, group.popularity_score);
  }

  store.delete_by_name(&aespa.name).expect("failed to delete group");
}
