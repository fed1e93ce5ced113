pub mod affordance;
pub mod color;
pub mod constants;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod input;
pub mod painter;
pub mod random;
pub mod runner;
pub mod scene;
pub mod state;

pub use affordance::*;
pub use color::*;
pub use constants::*;
pub use error::*;
pub use geometry::*;
pub use input::*;
pub use painter::*;
pub use runner::*;
pub use scene::*;
pub use state::*;
