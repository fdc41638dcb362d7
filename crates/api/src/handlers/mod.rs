pub mod assets;
pub mod placements;
