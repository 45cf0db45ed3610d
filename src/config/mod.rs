mod types;
mod loader;
mod defaults;
mod validation;

pub use types::*;
pub use defaults::DEFAULT_TEMPLATE;
pub use loader::load_config;
pub use validation::validate_config;
