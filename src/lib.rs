//! Membership card service
//! Credential issuance and verification for members and
//! administrators, plus membership validity evaluation.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod membership;
pub mod middleware;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;
pub mod telemetry;
