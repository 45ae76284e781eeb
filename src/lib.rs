pub mod error;
pub mod validation;
pub mod model;
pub mod book;
pub mod storage;
pub mod queries;
pub mod config;
pub mod cli;
