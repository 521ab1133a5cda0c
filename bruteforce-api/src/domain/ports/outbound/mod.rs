mod problem_catalog;

pub use problem_catalog::*;
