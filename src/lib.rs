//! recipe-finder-rust
//!
//! CLI本体。読み込みと照合のロジックは recipe-finder-common 側にある。

pub mod cli;
pub mod config;
pub mod error;
