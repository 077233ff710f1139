mod loader;
mod model;
mod validation;

pub use loader::{
    ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, LoadResult, RealFileSystem,
};
pub use model::{Config, ForbiddenConfig, ProjectConfig, ScriptCheckMode, ScriptsConfig};
pub use validation::validate_config_semantics;
