//! Turns compact argument declarations such as `-c,--count,int` into the
//! variable declarations, option table and `main` skeleton expected by a
//! table-driven C option parser.

pub mod args;
pub mod commands;
pub mod emit;
pub mod error;
pub mod logging;
pub mod output;
pub mod scan;
pub mod settings;
pub mod types;
pub mod visuals;
pub mod writer;
