pub mod settings;
pub mod tournaments;

pub use settings::AppConfig;
pub use tournaments::load_tournaments;
