//! Data access layer

pub mod admin_repo;
pub mod member_repo;

pub use admin_repo::AdminRepository;
pub use member_repo::MemberRepository;
