pub mod check;
pub mod config;
pub mod context;
pub mod init;

pub use check::{run_check, run_check_impl};
pub use config::{format_config_text, run_config, run_config_show_impl, run_config_validate_impl};
pub use context::{color_choice_to_mode, load_config, resolve_project_root};
pub use init::{generate_config_template, run_init, run_init_impl};
