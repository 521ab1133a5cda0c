pub mod models;
pub mod ports;

pub use ports::outbound::CatalogError;
