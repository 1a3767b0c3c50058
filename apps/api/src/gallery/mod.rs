// Gallery layout engine
// Sizes a single rectangular room for an artwork list and places every artwork on a wall
// or, when the walls are full, on a center pedestal. Pure and synchronous; safe to call
// from any task without coordination.

pub mod cache;
pub mod dimensions;
pub mod engine;
pub mod frame;
pub mod handlers;
pub mod models;
pub mod params;
pub mod pedestals;
pub mod walls;

