pub mod rules;
pub mod types;

pub use rules::classify;
pub use types::*;
