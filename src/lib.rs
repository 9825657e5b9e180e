// Library exports for Pinshelf
// This allows integration tests and external code to use Pinshelf modules

pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod seed;
pub mod store;
pub mod view;
