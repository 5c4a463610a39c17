pub mod bundle;
pub mod dev;
pub mod error;
pub mod inputs;
pub mod layout;
pub mod mode;
pub mod resolve;
pub mod validation;

// Re-export main types
pub use bundle::*;
pub use dev::*;
pub use error::*;
pub use inputs::{Argv, DevServerEnv, ResolveInputs};
pub use layout::ProjectLayout;
pub use mode::BuildMode;
pub use resolve::{assemble, is_production, resolve_config};

pub use validation::{ConfigValidator, FsValidator, SchemaValidator, validate_fs, validate_schema};
