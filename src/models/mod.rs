// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Rows, forms and view DTOs for users, profiles, photos and albums

pub mod album;
pub mod form;
pub mod photo;
pub mod profile;
pub mod publication;
pub mod user;

pub use album::*;
pub use form::*;
pub use photo::*;
pub use profile::*;
pub use publication::*;
pub use user::*;
