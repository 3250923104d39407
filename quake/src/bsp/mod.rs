pub mod bounds;
pub mod consts;
pub mod document;
pub mod edges;
pub mod error;
pub mod face;
pub mod header;
pub mod leaf;
pub mod lump;
pub mod model;
pub mod node;
pub mod plane;
pub mod vert;
pub mod winding;

#[cfg(any(test, feature = "test-map"))]
pub mod test_map;

pub use consts::LumpType;
pub use lump::Lump;

// The Quake BSP (version 29) file starts with a directory of fifteen lumps. Each lump is a table
// of fixed size little-endian records, except the entity lump which is text and the texture,
// visibility and lighting lumps which hold variable length data that is not decoded here.
//
// Geometry is indexed in three steps: a face names a run of surfedges, each surfedge names an
// edge with its sign giving the direction, and each edge names two vertices. Walking a face's
// surfedges in order traces its outline.
//
// Models split the face table between the world (model 0) and the brush entities. Nodes and
// leaves form the BSP tree used for visibility and collision.
