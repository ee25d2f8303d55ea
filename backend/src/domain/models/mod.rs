pub mod child;
pub mod parent;
pub mod position;
pub mod zone;

pub use child::Child;
pub use parent::{Identity, Parent, Session};
pub use position::{parse_captured_at, Position, PositionLookup};
pub use zone::{Zone, DEFAULT_ZONE_RADIUS_M};
