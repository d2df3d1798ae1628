#![allow(dead_code)]

pub mod engine;
pub mod repl;

pub mod utils {
    pub mod prelude {
        pub use anyhow::{anyhow, Context, Error};
        pub type Result<T> = anyhow::Result<T, Error>;
    }
}

pub mod prelude {
    pub use super::engine::exports::*;
    pub use super::repl::options::ReplOptions;
    pub use super::repl::Repl;
    pub use super::utils::prelude::*;
}
