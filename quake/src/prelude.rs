pub use crate::bsp::{
    bounds::{Bounds, BoundsSeed},
    consts::{LeafContents, LumpType, PlaneAxis},
    document::{BspDocument, LoadOptions},
    edges::{BSPEdge, BSPSurfEdge},
    error::{BspError, FormatError},
    face::BSPFace,
    header::BSPHeader,
    leaf::BSPLeaf,
    lump::BSPLump,
    model::BSPModel,
    node::{BSPNode, NodeChild},
    plane::BSPPlane,
    winding::{RenderFace, Winding, WindingPolicy},
};
