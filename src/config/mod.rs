pub mod args;
mod r#impl;
mod structs;

pub use args::Args;
pub use r#impl::init_config;
pub use structs::*;
