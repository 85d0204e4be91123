//! Software rendering for the Stardrift tunnel: the orthographic camera
//! projector, the depth fade, a CPU raster canvas implementing the 2D
//! drawing-primitive surface, and the painter's-algorithm renderer.

mod camera;
mod canvas;
mod fade;
mod renderer;

pub use camera::{Camera, ScreenPoint};
pub use canvas::{Canvas, ExportError, Surface};
pub use fade::fade_opacity;
pub use renderer::Renderer;
