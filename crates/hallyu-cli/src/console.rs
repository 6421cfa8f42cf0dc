use std::io::{self, BufRead, Write};

use hallyu_core::domain::group::Group;
use hallyu_core::ports::console::Console;

/// Adaptador de consola sobre stdin/stdout.
pub struct StdConsole;

impl Console for StdConsole {
  fn request_field(&mut self, prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    let _ = io::stdin().lock().read_line(&mut line);
    line.trim_end_matches(['\r', '\n']).to_string()
  }

  fn message(&mut self, text: &str) {
    println!("{text}");
  }

  fn show_groups(&mut self, groups: &[Group]) {
    for group in groups {
      println!("{group}");
      println!("------------------------");
    }
  }
}
