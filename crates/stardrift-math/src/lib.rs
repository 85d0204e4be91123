//! f64 vector/matrix types, the spherical coordinate isomorphism, and value
//! remapping for the Stardrift renderer.

mod matrix;
mod remap;
mod spherical;
mod vector;

pub use matrix::Mat4;
pub use remap::{lerp, remap};
pub use spherical::Spherical;
pub use vector::Vec3;
