pub mod captions;
pub mod sdf_render;
pub mod starfield;
#[cfg(feature = "vectors")]
pub mod overlay;
