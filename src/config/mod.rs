//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::SplitpalPaths;
pub use settings::Settings;
