//! Domain models

pub mod admin;
pub mod auth;
pub mod member;
