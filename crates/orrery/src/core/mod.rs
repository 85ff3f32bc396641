pub mod bodies;
pub mod motion;
pub mod time;
pub mod world;
