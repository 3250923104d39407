use std::mem;

use glam::Vec3;
use num_derive::FromPrimitive;

use super::{
    edges::{BSPEdge, BSPSurfEdge},
    face::BSPFace,
    leaf::BSPLeaf,
    model::BSPModel,
    node::BSPNode,
    plane::BSPPlane,
};

pub const BSP_VERSION: u32 = 29;
pub const HEADER_LUMPS: usize = 15;
/// `u32` version followed by an `(offset, size)` pair per lump.
pub const HEADER_SIZE: usize = 4 + HEADER_LUMPS * 8;

// upper design bounds
pub const MAX_MAP_MODELS: usize = 256;
pub const MAX_MAP_PLANES: usize = 8192;
pub const MAX_MAP_NODES: usize = 32767;
pub const MAX_MAP_LEAFS: usize = 32767;
pub const MAX_MAP_VERTS: usize = 65535;
pub const MAX_MAP_FACES: usize = 65535;
pub const MAX_MAP_EDGES: usize = 256000;
pub const MAX_MAP_SURFEDGES: usize = 512000;
pub const MAX_MAP_ENTSTRING: usize = 65536;

/// Position of each lump in the header directory. The order is fixed by the format.
#[derive(Copy, Clone, PartialEq, Eq, Hash, FromPrimitive, Debug)]
pub enum LumpType {
    Entities = 0,
    Planes = 1,
    MipTex = 2,
    Vertexes = 3,
    VisList = 4,
    Nodes = 5,
    TexInfo = 6,
    Faces = 7,
    Lightmaps = 8,
    ClipNodes = 9,
    Leafs = 10,
    LeafFaces = 11,
    Edges = 12,
    SurfEdges = 13,
    Models = 14,
}

impl LumpType {
    pub const ALL: [LumpType; HEADER_LUMPS] = [
        LumpType::Entities,
        LumpType::Planes,
        LumpType::MipTex,
        LumpType::Vertexes,
        LumpType::VisList,
        LumpType::Nodes,
        LumpType::TexInfo,
        LumpType::Faces,
        LumpType::Lightmaps,
        LumpType::ClipNodes,
        LumpType::Leafs,
        LumpType::LeafFaces,
        LumpType::Edges,
        LumpType::SurfEdges,
        LumpType::Models,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LumpType::Entities => "entities",
            LumpType::Planes => "planes",
            LumpType::MipTex => "miptex",
            LumpType::Vertexes => "vertices",
            LumpType::VisList => "vislist",
            LumpType::Nodes => "nodes",
            LumpType::TexInfo => "texinfo",
            LumpType::Faces => "faces",
            LumpType::Lightmaps => "lightmaps",
            LumpType::ClipNodes => "clipnodes",
            LumpType::Leafs => "leaves",
            LumpType::LeafFaces => "lface",
            LumpType::Edges => "edges",
            LumpType::SurfEdges => "surfedges",
            LumpType::Models => "models",
        }
    }

    /// Size of one record for the lumps decoded as tables.
    pub fn record_size(self) -> Option<usize> {
        match self {
            LumpType::Planes => Some(mem::size_of::<BSPPlane>()),
            LumpType::Vertexes => Some(mem::size_of::<Vec3>()),
            LumpType::Nodes => Some(mem::size_of::<BSPNode>()),
            LumpType::Faces => Some(mem::size_of::<BSPFace>()),
            LumpType::Leafs => Some(mem::size_of::<BSPLeaf>()),
            LumpType::Edges => Some(mem::size_of::<BSPEdge>()),
            LumpType::SurfEdges => Some(mem::size_of::<BSPSurfEdge>()),
            LumpType::Models => Some(mem::size_of::<BSPModel>()),
            _ => None,
        }
    }
}

impl std::fmt::Display for LumpType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Leaf contents. Stored as a negative integer in the leaf record.
#[derive(Copy, Clone, PartialEq, Eq, FromPrimitive, Debug)]
pub enum LeafContents {
    Empty = -1,
    Solid = -2,
    Water = -3,
    Slime = -4,
    Lava = -5,
    Sky = -6,
}

/// The axis a plane is facing.
///
/// 0, 1 and 2 are planes perpendicular to X, Y and Z. 3, 4 and 5 are used when the plane is not
/// along an axis, with each number corresponding to the axis it is closest to.
#[derive(Copy, Clone, PartialEq, Eq, FromPrimitive, Debug)]
pub enum PlaneAxis {
    X = 0,
    Y = 1,
    Z = 2,
    AnyX = 3,
    AnyY = 4,
    AnyZ = 5,
}
