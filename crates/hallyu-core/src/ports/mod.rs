pub mod console;
pub mod store;

pub use console::Console;
pub use store::{GroupStore, StoreError};
