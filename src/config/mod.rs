// src/config/mod.rs
// DOCUMENTATION: Environment settings and database bootstrap
// PURPOSE: Re-export Config and pool initialization for main.rs

pub mod db;
pub mod env;

pub use db::init_db_pool;
pub use env::Config;
