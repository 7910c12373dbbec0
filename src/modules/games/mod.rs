pub mod controller;
pub mod hub;
pub mod model;
pub mod router;
pub mod service;

pub use hub::NotificationHub;
pub use model::*;
pub use router::init_games_router;
