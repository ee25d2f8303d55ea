pub mod auth_mapper;
pub mod child_mapper;
pub mod position_mapper;
pub mod zone_mapper;

pub use auth_mapper::AuthMapper;
pub use child_mapper::ChildMapper;
pub use position_mapper::PositionMapper;
pub use zone_mapper::ZoneMapper;
