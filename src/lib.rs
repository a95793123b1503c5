pub mod aggregate;
pub mod cli;
pub mod config;
pub mod count;
pub mod error;
pub mod git;
pub mod github;
pub mod languages;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod sync;
pub mod util;
