use glam::Vec3;

use super::{
    consts::LumpType,
    edges::{BSPEdge, BSPSurfEdge},
    error::{lookup, FormatError},
    face::BSPFace,
};

/// How many of a face's surfedges are walked.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum WindingPolicy {
    /// Every surfedge of the face.
    #[default]
    Complete,
    /// All but the last surfedge, matching thumbnails produced by older tooling.
    Legacy,
}

impl WindingPolicy {
    pub fn edge_count(self, num_edges: u16) -> usize {
        match self {
            WindingPolicy::Complete => num_edges as usize,
            WindingPolicy::Legacy => (num_edges as usize).saturating_sub(1),
        }
    }
}

/// The boundary of a face as directed vertex pairs, in traversal order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Winding {
    pub edges: Vec<[Vec3; 2]>,
}

impl Winding {
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Both ends of every edge.
    pub fn points(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.edges.iter().flatten().copied()
    }

    /// The polygon loop, one point per edge.
    pub fn polygon(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.edges.iter().map(|[start, _]| *start)
    }
}

/// Turns faces into vertex loops through the surfedge and edge tables.
#[derive(Copy, Clone, Debug)]
pub struct FaceWindingResolver<'a> {
    pub vertices: &'a [Vec3],
    pub edges: &'a [BSPEdge],
    pub surfedges: &'a [BSPSurfEdge],
    pub policy: WindingPolicy,
}

impl<'a> FaceWindingResolver<'a> {
    pub fn resolve(&self, face: &BSPFace) -> Result<Winding, FormatError> {
        let first = i64::from(face.first_edge);

        let edges = (0..self.policy.edge_count(face.num_edges))
            .map(|i| -> Result<[Vec3; 2], FormatError> {
                let surfedge = lookup(self.surfedges, LumpType::SurfEdges, first + i as i64)?;
                let (v0, v1) = surfedge.get_edge(self.edges)?;
                Ok([self.vertex(v0)?, self.vertex(v1)?])
            })
            .collect::<Result<_, _>>()?;

        Ok(Winding { edges })
    }

    fn vertex(&self, index: u16) -> Result<Vec3, FormatError> {
        lookup(self.vertices, LumpType::Vertexes, index.into()).copied()
    }
}

/// A face prepared for drawing: its winding and the orientation of its plane.
///
/// `hidden` marks faces turned away from their plane. Their winding is left empty.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderFace {
    pub index: usize,
    pub normal: Vec3,
    pub hidden: bool,
    pub winding: Winding,
}
