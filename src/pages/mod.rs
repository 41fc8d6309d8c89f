pub mod analytics;
pub mod overview;
pub mod profiles;
pub mod progress;
pub mod settings;
