//! Scene data: cube geometry, its motion and GPU textures.
//!
//! - `mesh` holds the vertex format, the cube tables and their GPU buffers
//! - `spin` turns elapsed time into a model matrix
//! - `texture` wraps depth attachments and colour textures

pub mod mesh;
pub mod spin;
pub mod texture;
