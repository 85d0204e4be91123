//! Scene model for the Stardrift tunnel: paint colors, the scene-object sum
//! type, the probability-weighted spawner, the static cylindrical track, and
//! the per-frame world state.

mod color;
mod object;
mod spawner;
mod track;
mod world;

pub use color::{Color, PALETTE, STAR_COLOR, TRACK_COLOR};
pub use object::{SceneObject, Shape};
pub use spawner::{SpawnCategory, SpawnParams, Spawner, categorize};
pub use track::Track;
pub use world::{World, WorldParams};
