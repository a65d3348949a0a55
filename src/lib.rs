pub mod config;
pub mod diagnostics;
pub mod loader;
pub mod parser;
pub mod patterns;
pub mod temporal;
pub mod sequence;
pub mod report;
pub mod pipeline;
