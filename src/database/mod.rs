pub mod connection;
pub mod error;
pub mod manager;
pub mod models;
pub mod storage;

pub use manager::ScoreStore;
pub use models::{GameType, Scores};
pub use storage::open_backend;
