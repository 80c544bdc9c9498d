pub mod flame;
pub mod rainbow;
pub mod root_shading;
pub mod spectrum;
