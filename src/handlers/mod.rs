//! HTTP handlers

pub mod auth;
pub mod card;
pub mod health;
pub mod member;
