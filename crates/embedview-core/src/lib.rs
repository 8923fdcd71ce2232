pub mod bounds;
pub mod camera;
pub mod cluster;
pub mod constants;
pub mod dataset;
pub mod error;
pub mod layout;
pub mod normalize;
pub mod params;
pub mod state;
pub mod transition;

pub use bounds::*;
pub use camera::*;
pub use cluster::*;
pub use constants::*;
pub use dataset::*;
pub use error::*;
pub use layout::*;
pub use normalize::*;
pub use params::*;
pub use state::*;
pub use transition::*;
