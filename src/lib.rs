pub mod cli;
pub mod error;
pub mod filtering;
pub mod io;
pub mod pipelines;
pub mod stats;
pub mod tagging;
