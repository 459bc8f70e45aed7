// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Business rules between handlers and repositories

pub mod access;
pub mod account_service;
pub mod album_form;
pub mod album_service;
pub mod library_service;
pub mod pagination;
pub mod password;
pub mod photo_service;
pub mod tags;

pub use account_service::*;
pub use album_service::*;
pub use library_service::*;
pub use photo_service::*;
