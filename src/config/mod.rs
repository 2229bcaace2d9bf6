pub mod defaults;
mod options;
mod settings;

pub use options::RunOptions;
pub use settings::Settings;
