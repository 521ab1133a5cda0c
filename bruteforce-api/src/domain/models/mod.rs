mod problem;

pub use problem::*;
