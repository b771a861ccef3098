// src/api/handlers/mod.rs
mod compile;
mod health;
mod languages;

pub use compile::compile;
pub use health::health_check;
pub use languages::list_languages;
