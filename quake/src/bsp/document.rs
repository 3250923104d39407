use std::path::Path;

use common::vfile::VFile;
use getset::CopyGetters;
use glam::Vec3;

use super::{
    bounds::{global_bounds, model_bounds, Bounds, BoundsSeed},
    consts::LumpType,
    edges::{BSPEdge, BSPSurfEdge},
    error::{lookup, BspError, FormatError},
    face::BSPFace,
    header::BSPHeader,
    leaf::BSPLeaf,
    model::BSPModel,
    node::BSPNode,
    plane::BSPPlane,
    winding::{FaceWindingResolver, RenderFace, Winding, WindingPolicy},
};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadOptions {
    pub winding: WindingPolicy,
    pub bounds: BoundsSeed,
}

/// A fully decoded map. Built in one pass and never modified afterwards.
#[derive(Debug, CopyGetters)]
pub struct BspDocument {
    #[getset(get_copy = "pub")]
    header: BSPHeader,
    #[getset(get_copy = "pub")]
    options: LoadOptions,
    /// Bounds of every vertex in the map.
    #[getset(get_copy = "pub")]
    bounds: Bounds,
    entities: String,
    vertices: Box<[Vec3]>,
    edges: Box<[BSPEdge]>,
    surfedges: Box<[BSPSurfEdge]>,
    faces: Box<[BSPFace]>,
    planes: Box<[BSPPlane]>,
    leaves: Box<[BSPLeaf]>,
    models: Box<[BSPModel]>,
    nodes: Box<[BSPNode]>,
    model_bounds: Box<[Bounds]>,
}

impl BspDocument {
    pub fn load(path: &Path) -> Result<Self, BspError> {
        Self::load_with(path, LoadOptions::default())
    }

    pub fn load_with(path: &Path, options: LoadOptions) -> Result<Self, BspError> {
        let file = VFile::open(path).map_err(|source| BspError::Open {
            path: path.to_owned(),
            source,
        })?;
        log::info!("Loading BSP file {:?} ({} bytes)", file.path, file.len());

        Ok(Self::from_bytes_with(&file.data, options)?)
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, FormatError> {
        Self::from_bytes_with(data, LoadOptions::default())
    }

    pub fn from_bytes_with(data: &[u8], options: LoadOptions) -> Result<Self, FormatError> {
        let header = BSPHeader::parse(data)?;
        header.validate(data.len());

        log::debug!("Loading BSP lumps...");

        let entities = header
            .get_lump_header(LumpType::Entities)
            .slice(LumpType::Entities, data)?;
        let entities = String::from_utf8_lossy(entities)
            .trim_end_matches('\0')
            .to_owned();

        let vertices = header.get_lump::<Vec3>(data)?;

        let mut document = Self {
            header,
            options,
            bounds: global_bounds(&vertices, options.bounds),
            entities,
            vertices,
            edges: header.get_lump(data)?,
            surfedges: header.get_lump(data)?,
            faces: header.get_lump(data)?,
            planes: header.get_lump(data)?,
            leaves: header.get_lump(data)?,
            models: header.get_lump(data)?,
            nodes: header.get_lump(data)?,
            model_bounds: Box::default(),
        };

        log::debug!("Resolving model faces...");

        let per_model = (0..document.models.len())
            .map(|i| -> Result<Bounds, FormatError> {
                Ok(model_bounds(&document.model_faces(i)?, options.bounds))
            })
            .collect::<Result<Box<[_]>, _>>()?;
        document.model_bounds = per_model;

        log::info!(
            "Loaded BSP version {}: {} vertices, {} faces, {} models",
            document.version(),
            document.vertices.len(),
            document.faces.len(),
            document.models.len()
        );

        Ok(document)
    }

    pub fn version(&self) -> u32 {
        self.header.version
    }

    /// The entity lump as text.
    pub fn entities(&self) -> &str {
        &self.entities
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn edges(&self) -> &[BSPEdge] {
        &self.edges
    }

    pub fn surfedges(&self) -> &[BSPSurfEdge] {
        &self.surfedges
    }

    pub fn faces(&self) -> &[BSPFace] {
        &self.faces
    }

    pub fn planes(&self) -> &[BSPPlane] {
        &self.planes
    }

    pub fn leaves(&self) -> &[BSPLeaf] {
        &self.leaves
    }

    pub fn models(&self) -> &[BSPModel] {
        &self.models
    }

    pub fn nodes(&self) -> &[BSPNode] {
        &self.nodes
    }

    /// Bounds of the visible faces of a model.
    pub fn model_bounds(&self, model: usize) -> Option<Bounds> {
        self.model_bounds.get(model).copied()
    }

    pub fn resolver(&self) -> FaceWindingResolver<'_> {
        FaceWindingResolver {
            vertices: &self.vertices,
            edges: &self.edges,
            surfedges: &self.surfedges,
            policy: self.options.winding,
        }
    }

    pub fn face_winding(&self, face: usize) -> Result<Winding, FormatError> {
        let face = lookup(&self.faces, LumpType::Faces, face as i64)?;
        self.resolver().resolve(face)
    }

    /// Every face of a model with its plane normal, windings resolved for the visible ones.
    pub fn model_faces(&self, model: usize) -> Result<Vec<RenderFace>, FormatError> {
        let model = lookup(&self.models, LumpType::Models, model as i64)?;
        let resolver = self.resolver();

        model
            .face_range(self.faces.len())?
            .map(|index| -> Result<RenderFace, FormatError> {
                let face = &self.faces[index];
                let normal = face.plane(&self.planes)?.unit_normal();
                let hidden = !face.is_front_facing();
                let winding = if hidden {
                    Winding::default()
                } else {
                    resolver.resolve(face)?
                };
                Ok(RenderFace {
                    index,
                    normal,
                    hidden,
                    winding,
                })
            })
            .collect()
    }

    /// The faces lying on a node's splitting plane.
    pub fn node_faces(&self, node: usize) -> Result<&[BSPFace], FormatError> {
        let node = lookup(&self.nodes, LumpType::Nodes, node as i64)?;
        Ok(&self.faces[node.face_range(self.faces.len())?])
    }
}
