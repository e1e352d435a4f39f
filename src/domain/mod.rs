pub mod params;
pub mod presets;
pub mod results;
pub mod trial;
