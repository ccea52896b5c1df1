pub use config::*;
pub use raffle::*;
pub use randomness::*;
pub use vault::*;

pub mod config;
pub mod raffle;
pub mod randomness;
pub mod vault;
