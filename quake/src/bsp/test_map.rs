//! Builds small in-memory maps for tests.

use std::collections::HashMap;

use glam::{vec3, Vec3};

use crate::binaries::BinaryData;

use super::{
    consts::{LumpType, BSP_VERSION, HEADER_SIZE},
    edges::{BSPEdge, BSPSurfEdge},
    face::BSPFace,
    header::BSPHeader,
    leaf::BSPLeaf,
    lump::{encode, BSPLump},
    model::BSPModel,
    node::BSPNode,
    plane::BSPPlane,
};

pub struct TestMap {
    pub version: u32,
    pub entities: String,
    pub planes: Vec<BSPPlane>,
    pub vertices: Vec<Vec3>,
    pub nodes: Vec<BSPNode>,
    pub faces: Vec<BSPFace>,
    pub leaves: Vec<BSPLeaf>,
    pub edges: Vec<BSPEdge>,
    pub surfedges: Vec<BSPSurfEdge>,
    pub models: Vec<BSPModel>,
    /// Replaces the encoded contents of a lump.
    pub raw: HashMap<LumpType, Vec<u8>>,
}

impl Default for TestMap {
    fn default() -> Self {
        Self {
            version: BSP_VERSION,
            entities: String::new(),
            planes: Vec::new(),
            vertices: Vec::new(),
            nodes: Vec::new(),
            faces: Vec::new(),
            leaves: Vec::new(),
            edges: Vec::new(),
            surfedges: Vec::new(),
            models: Vec::new(),
            raw: HashMap::new(),
        }
    }
}

impl TestMap {
    /// One model with one face made of a single edge from the origin to (10, 0, 0).
    pub fn line() -> Self {
        Self {
            planes: vec![BSPPlane::new(Vec3::Z, 0.0, 2)],
            vertices: vec![Vec3::ZERO, vec3(10.0, 0.0, 0.0)],
            faces: vec![BSPFace {
                first_edge: 0,
                num_edges: 1,
                ..Default::default()
            }],
            edges: vec![BSPEdge::default(), BSPEdge { v0: 0, v1: 1 }],
            surfedges: vec![BSPSurfEdge::new(1)],
            models: vec![BSPModel {
                num_faces: 1,
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    /// A floor facing up and a wider ceiling facing away from its plane, split by one node.
    pub fn room() -> Self {
        Self {
            entities: "{\n\"classname\" \"worldspawn\"\n}\n\0".to_owned(),
            planes: vec![
                BSPPlane::new(vec3(0.0, 0.0, 2.0), 0.0, 2),
                BSPPlane::new(Vec3::Z, 128.0, 2),
            ],
            vertices: vec![
                vec3(-64.0, -32.0, 0.0),
                vec3(64.0, -32.0, 0.0),
                vec3(64.0, 32.0, 0.0),
                vec3(-64.0, 32.0, 0.0),
                vec3(-80.0, -40.0, 128.0),
                vec3(80.0, -40.0, 128.0),
                vec3(80.0, 40.0, 128.0),
                vec3(-80.0, 40.0, 128.0),
            ],
            nodes: vec![BSPNode {
                front: !1i16 as u16,
                back: !0i16 as u16,
                num_faces: 1,
                ..Default::default()
            }],
            faces: vec![
                BSPFace {
                    plane_num: 0,
                    first_edge: 0,
                    num_edges: 4,
                    ..Default::default()
                },
                BSPFace {
                    plane_num: 1,
                    side: 1,
                    first_edge: 4,
                    num_edges: 4,
                    ..Default::default()
                },
            ],
            leaves: vec![
                BSPLeaf {
                    contents: -2,
                    ..Default::default()
                },
                BSPLeaf {
                    contents: -1,
                    num_faces: 2,
                    ..Default::default()
                },
            ],
            edges: vec![
                BSPEdge::default(),
                BSPEdge { v0: 0, v1: 1 },
                BSPEdge { v0: 1, v1: 2 },
                BSPEdge { v0: 2, v1: 3 },
                BSPEdge { v0: 3, v1: 0 },
                BSPEdge { v0: 4, v1: 5 },
                BSPEdge { v0: 5, v1: 6 },
                BSPEdge { v0: 6, v1: 7 },
                BSPEdge { v0: 7, v1: 4 },
            ],
            surfedges: [1, 2, 3, 4, -8, -7, -6, -5].map(BSPSurfEdge::new).to_vec(),
            models: vec![BSPModel {
                mins: vec3(-80.0, -40.0, 0.0),
                maxs: vec3(80.0, 40.0, 128.0),
                num_leafs: 1,
                num_faces: 2,
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    /// Lumps are laid out after the header in directory order.
    pub fn build(&self) -> Vec<u8> {
        let mut header = BSPHeader {
            version: self.version,
            ..Default::default()
        };
        let mut data = vec![0; HEADER_SIZE];

        for lump in LumpType::ALL {
            let bytes = match self.raw.get(&lump) {
                Some(raw) => raw.clone(),
                None => self.encode(lump),
            };
            header.lumps[lump as usize] = BSPLump::new(data.len() as u32, bytes.len() as u32);
            data.extend(bytes);
        }

        header.write(&mut &mut data[..HEADER_SIZE]).unwrap();
        data
    }

    fn encode(&self, lump: LumpType) -> Vec<u8> {
        match lump {
            LumpType::Entities => self.entities.as_bytes().to_vec(),
            LumpType::Planes => encode(&self.planes),
            LumpType::Vertexes => encode(&self.vertices),
            LumpType::Nodes => encode(&self.nodes),
            LumpType::Faces => encode(&self.faces),
            LumpType::Leafs => encode(&self.leaves),
            LumpType::Edges => encode(&self.edges),
            LumpType::SurfEdges => encode(&self.surfedges),
            LumpType::Models => encode(&self.models),
            _ => Vec::new(),
        }
    }
}
