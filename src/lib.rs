#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod ir;
pub mod label_dump;
pub mod layout;
pub mod parser;
pub mod writer;

#[cfg(feature = "cli")]
pub use cli::run;
