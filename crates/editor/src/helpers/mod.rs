//! Helper overlay managers: grid, axes and the view-orientation cube.
//!
//! Each manager owns its configuration, applies patches arriving on its hub
//! channel, and exposes the geometry (or state) the viewport draws from.

mod axes;
mod grid;
mod view_cube;

pub use axes::{AxesConfig, AxesHelper};
pub use grid::{GridConfig, GridHelper};
pub use view_cube::{ViewCube, ViewDirection};
