pub mod adapters;
pub mod app_state;
pub mod config;
pub mod cors;
pub mod domain;
pub mod router;
mod routes;

pub use app_state::AppState;
