// Repository modules
pub mod child_repository;
pub mod parent_repository;
pub mod position_repository;
pub mod session_repository;
pub mod zone_repository;

// Re-export repository types
pub use child_repository::ChildRepository;
pub use parent_repository::ParentRepository;
pub use position_repository::PositionRepository;
pub use session_repository::SessionRepository;
pub use zone_repository::ZoneRepository;
