use hallyu_core::domain::group::Group;
use hallyu_core::domain::status::GroupStatus;
use hallyu_core::ports::console::Console;
use hallyu_core::ports::store::GroupStore;
use hallyu_core::services::CatalogService;
use hallyu_core::validation::{self, ScorePolicy};

/// Bucle principal del menú. Toda la interacción pasa por el puerto
/// `Console`; el catálogo solo recibe registros ya validados.
pub fn run<C, S>(console: &mut C, catalog: &mut CatalogService<S>, policy: ScorePolicy)
where
  C: Console,
  S: GroupStore,
{
  loop {
    console.message("\nK-Pop Data Management System");
    console.message("1. Add Group");
    console.message("2. View Groups");
    console.message("3. Update Group");
    console.message("4. Rank Groups");
    console.message("5. Delete Group");
    console.message("6. Exit");

    match request_int(console, "Choose an option: ") {
      1 => {
        let group = request_group(console, policy);
        match catalog.add(group) {
          Ok(()) => console.message("Group added successfully!"),
          Err(e) => console.message(&format!("Error: {e}")),
        }
      }
      2 => {
        let groups = catalog.list();
        if groups.is_empty() {
          console.message("No groups available.");
        } else {
          console.show_groups(&groups);
        }
      }
      3 => {
        let name = console.request_field("Enter group name to update: ");
        let group = request_group(console, policy);
        match catalog.update(&name, group) {
          Ok(()) => console.message("Updated successfully!"),
          Err(e) => console.message(&format!("Error: {e}")),
        }
      }
      4 => {
        let ranked = catalog.rank();
        if ranked.is_empty() {
          console.message("No groups available to rank.");
        } else {
          console.message("\nTop K-Pop Groups by Popularity:");
          for (i, group) in ranked.iter().enumerate() {
            console.message(&format!(
              "{}. {} - Popularity Score: {}",
              i + 1,
              group.name,
              group.popularity_score
            ));
          }
        }
      }
      5 => {
        let name = console.request_field("Enter group name to delete: ");
        match catalog.delete(&name) {
          Ok(()) => console.message("Group deleted successfully!"),
          Err(e) => console.message(&format!("Error: {e}")),
        }
      }
      6 => {
        console.message("Exiting...");
        return;
      }
      _ => console.message("Invalid choice! Try again."),
    }
  }
}

/// Pide campo por campo un grupo completo, insistiendo hasta que fecha,
/// estado y puntuación pasen la validación. El catálogo nunca ve un
/// valor crudo inválido.
pub fn request_group<C: Console>(console: &mut C, policy: ScorePolicy) -> Group {
  let name = console.request_field("Enter group name: ").trim().to_string();

  let debut_date = loop {
    let raw = console.request_field("Enter debut date (YYYY-MM-DD): ");
    let raw = raw.trim();
    if validation::valid_date(raw) {
      break raw.to_string();
    }
    console.message("Invalid date format! Please use YYYY-MM-DD.");
  };

  let members = split_members(&console.request_field("Enter members (comma-separated): "));
  let agency = console.request_field("Enter agency: ").trim().to_string();
  let latest_album = console.request_field("Enter latest album: ").trim().to_string();

  let status: GroupStatus = loop {
    let raw = console.request_field("Enter status (active/disbanded/hiatus): ");
    match raw.parse() {
      Ok(status) => break status,
      Err(_) => console.message("Invalid status! Must be: active, disbanded, or hiatus."),
    }
  };

  let popularity_score = loop {
    let n = request_int(console, "Enter popularity score (number): ");
    if validation::valid_score(n, policy) {
      break n;
    }
    console.message("Score must be between 0 and 100.");
  };

  Group { name, debut_date, members, agency, latest_album, status, popularity_score }
}

fn request_int<C: Console>(console: &mut C, prompt: &str) -> i32 {
  loop {
    match console.request_field(prompt).trim().parse() {
      Ok(n) => break n,
      Err(_) => console.message("Invalid input! Enter a valid number."),
    }
  }
}

fn split_members(raw: &str) -> Vec<String> {
  if raw.trim().is_empty() {
    return Vec::new();
  }
  raw.split(',').map(|m| m.trim().to_string()).collect()
}
