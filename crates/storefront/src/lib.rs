pub mod abstract_trait;
pub mod cache;
pub mod cli;
pub mod client;
pub mod config;
pub mod di;
pub mod domain;
pub mod service;
pub mod state;
