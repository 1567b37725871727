pub mod config;
pub mod error;
pub mod job;
pub mod record;
pub mod result;

pub use config::Config;
pub use error::*;
pub use job::*;
pub use record::*;
pub use result::*;
