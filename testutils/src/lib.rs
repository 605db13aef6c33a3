mod constants;
mod fake;
mod tasks;

pub use constants::*;
pub use fake::*;
pub use tasks::*;
