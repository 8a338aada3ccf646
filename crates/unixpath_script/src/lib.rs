pub mod config;
pub mod script;

pub use config::{DEFAULT_SCRIPT_FILE, load_script, parse_script};
pub use script::{Script, Step};
