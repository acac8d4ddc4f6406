pub mod config;
pub mod distance;
pub mod machine;
pub mod script;
pub mod serialization;
pub mod trace;

pub use config::{Config, Strategy};
pub use distance::{distance, distance_str, Table};
pub use machine::{run, run_str, ReplayError};
pub use script::{generate, generate_str, generate_tabulated, Edit, EditScript};
