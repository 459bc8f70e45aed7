// src/db/mod.rs
// DOCUMENTATION: Database module organization
// PURPOSE: One repository per table group, all SQL lives here

pub mod album_repository;
pub mod photo_repository;
pub mod profile_repository;
pub mod user_repository;

pub use album_repository::*;
pub use photo_repository::*;
pub use profile_repository::*;
pub use user_repository::*;
