mod client;
mod config;
pub mod domain;
mod graphql;

pub use client::*;
pub use config::*;
pub use domain::*;
