use std::mem;

use super::{
    consts::{LumpType, MAX_MAP_EDGES, MAX_MAP_SURFEDGES},
    error::{lookup, FormatError},
    Lump,
};

///Edge
///
///The edge lump (Lump 12) is an array of `BSPEdge` structures.
///Each edge is simply a pair of vertex indices (which index into the vertex lump array). The edge is defined as the straight line between the two vertices.
///The edge array is referenced through the Surfedge array (see below). Edge 0 is never referenced, since a surfedge of 0 has no sign.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BSPEdge {
    pub v0: u16, // vertex indices
    pub v1: u16, // vertex indices
}

const _: () = assert!(mem::size_of::<BSPEdge>() == 4);

impl Lump for BSPEdge {
    fn max() -> usize {
        MAX_MAP_EDGES
    }
    fn lump_type() -> LumpType {
        LumpType::Edges
    }
}

///Surfedge
///
///The Surfedge lump (Lump 13), also called the ledge lump, is an array of (signed) integers. The absolute value of each number is an index into the edge array:
/// if positive, the edge is traced from the first to the second vertex; otherwise from the second to the first vertex.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BSPSurfEdge {
    pub index: i32,
}

const _: () = assert!(mem::size_of::<BSPSurfEdge>() == 4);

impl Lump for BSPSurfEdge {
    fn max() -> usize {
        MAX_MAP_SURFEDGES
    }
    fn lump_type() -> LumpType {
        LumpType::SurfEdges
    }
}

impl BSPSurfEdge {
    pub fn new(index: i32) -> Self {
        Self { index }
    }

    pub fn edge_index(&self) -> u32 {
        self.index.unsigned_abs()
    }

    pub fn is_forward(&self) -> bool {
        self.index > 0
    }

    /// The vertex indices of the referenced edge in traversal order.
    pub fn get_edge(&self, edges: &[BSPEdge]) -> Result<(u16, u16), FormatError> {
        let edge = lookup(edges, LumpType::Edges, self.edge_index().into())?;
        Ok(if self.is_forward() {
            (edge.v0, edge.v1)
        } else {
            (edge.v1, edge.v0)
        })
    }
}

#[cfg(test)]
mod edges_tests {
    use super::*;

    const EDGE: BSPEdge = BSPEdge { v0: 5, v1: 9 };

    #[test]
    fn zero_surfedge_is_reversed() {
        let edges = [EDGE];
        assert_eq!(BSPSurfEdge::new(0).get_edge(&edges), Ok((9, 5)));
        assert_eq!(BSPSurfEdge::new(-0).get_edge(&edges), Ok((9, 5)));
    }

    #[test]
    fn sign_picks_direction() {
        let edges = [BSPEdge::default(), EDGE];
        assert_eq!(BSPSurfEdge::new(1).get_edge(&edges), Ok((5, 9)));
        assert_eq!(BSPSurfEdge::new(-1).get_edge(&edges), Ok((9, 5)));
    }

    #[test]
    fn magnitude_out_of_range() {
        let edges = [BSPEdge::default(), EDGE];
        for index in [2, -2, i32::MIN] {
            let err = BSPSurfEdge::new(index).get_edge(&edges).unwrap_err();
            assert_eq!(
                err,
                FormatError::IndexOutOfRange {
                    table: LumpType::Edges,
                    index: i64::from(index).abs(),
                    len: 2
                }
            );
        }
    }
}
