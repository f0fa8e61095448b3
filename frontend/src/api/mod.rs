mod gateway;
pub mod types;

pub use gateway::*;
pub use types::*;
