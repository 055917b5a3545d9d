mod error;
mod path;
mod terrain;

pub use error::{SolveError, TerrainError};
pub use path::{Path, Solution};
pub(crate) use path::{are_disjoint, collect_claimed_paths};
pub use terrain::{Corridor, Room, RoomId, Terrain};
