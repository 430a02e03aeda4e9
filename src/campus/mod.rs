pub mod building;
pub mod direction;
pub mod loader;
pub mod map;
pub mod records;
