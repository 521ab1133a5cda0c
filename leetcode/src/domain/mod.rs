mod filters;
mod problem;
mod question;

pub use filters::*;
pub use problem::*;
pub use question::*;
