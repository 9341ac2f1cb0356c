//! Business logic services

pub mod auth_service;
pub mod card_service;
pub mod member_service;

pub use auth_service::AuthService;
pub use card_service::CardService;
pub use member_service::MemberService;
