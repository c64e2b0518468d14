mod drag;
mod geometry;
mod orientation;
mod region;
mod settings;
mod state;

pub use drag::*;
pub use geometry::*;
pub use orientation::*;
pub use region::*;
pub use settings::*;
pub use state::*;
