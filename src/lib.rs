pub mod constants;
pub mod ground_cover;
pub mod latitude;
pub mod math_utils;
pub mod planet_model;
pub mod recorder;
pub mod report;
pub mod scenario;
pub mod sweep;
pub mod temp_utils;

pub use ground_cover::{DaisyColor, GroundCover};
pub use planet_model::{growth_potential, PlanetModel, PlanetProps, Topology};
