//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::SpendviewPaths;
pub use settings::Settings;
