use std::mem;

use super::{
    consts::{LumpType, MAX_MAP_FACES},
    error::{lookup, FormatError},
    plane::BSPPlane,
    Lump,
};

///The face array is limited to 65535 (MAX_MAP_FACES) entries.
///
///Faces are culled by the compiler; many faces present before compilation of the map (primarily those that face towards the "void" outside the map) are removed from the array.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BSPFace {
    /// The plane number, i.e., the index into the plane array that corresponds to
    /// the plane that is aligned with this face in the world.
    pub plane_num: u16,
    /// Side is zero if this plane faces in the same direction as the face (i.e. "out" of the face) or non-zero otherwise.
    pub side: u16,
    /// Firstedge is an index into the Surfedge array; this and the following numedges entries in the surfedge array define the edges of the face.
    ///
    /// The vertices which make up the face are thus referenced in clockwise order; when looking towards the face,
    /// each edge is traced in a clockwise direction.
    pub first_edge: i32,
    /// number of surfedges
    pub num_edges: u16,
    /// texture info
    pub tex_info: u16,
    /// type of lighting for the face
    pub light_style: u8,
    /// from 0xFF (dark) to 0 (bright)
    pub base_light: u8,
    /// two additional light models
    pub light: [u8; 2],
    /// offset into lightmap lump, 0xFFFFFFFF when unlit
    pub light_ofs: u32,
}

const _: () = assert!(mem::size_of::<BSPFace>() == 20);

impl BSPFace {
    pub fn is_front_facing(&self) -> bool {
        self.side == 0
    }

    pub fn plane<'a>(&self, planes: &'a [BSPPlane]) -> Result<&'a BSPPlane, FormatError> {
        lookup(planes, LumpType::Planes, self.plane_num.into())
    }
}

impl Lump for BSPFace {
    fn max() -> usize {
        MAX_MAP_FACES
    }
    fn lump_type() -> LumpType {
        LumpType::Faces
    }
}

#[cfg(test)]
mod face_tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn plane_lookup() {
        let planes = [BSPPlane::new(Vec3::Z, 0.0, 2)];
        let face = BSPFace::default();
        assert!(face.is_front_facing());
        assert_eq!(face.plane(&planes).unwrap().normal, Vec3::Z);

        let face = BSPFace {
            plane_num: 1,
            side: 1,
            ..Default::default()
        };
        assert!(!face.is_front_facing());
        assert_eq!(
            face.plane(&planes),
            Err(FormatError::IndexOutOfRange {
                table: LumpType::Planes,
                index: 1,
                len: 1
            })
        );
    }
}
