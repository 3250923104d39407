use std::{mem, ops::Range};

use num_traits::FromPrimitive;

use super::{
    consts::{LeafContents, LumpType, MAX_MAP_LEAFS},
    Lump,
};

/// Leaves terminate the BSP tree. Each one is a convex region of space with uniform contents,
/// referencing the faces visible from inside it through the lface lump.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BSPLeaf {
    pub contents: i32,          // LeafContents, stored negated
    pub vis_ofs: i32,           // offset into the vislist lump, or -1
    pub mins: [i16; 3],         // bounding box
    pub maxs: [i16; 3],         //
    pub first_face: u16,        // index into the lface lump
    pub num_faces: u16,         //
    pub ambient_level: [u8; 4], // water, sky, slime, lava
}

const _: () = assert!(mem::size_of::<BSPLeaf>() == 28);

impl BSPLeaf {
    pub fn contents(&self) -> Option<LeafContents> {
        LeafContents::from_i32(self.contents)
    }

    pub fn face_range(&self) -> Range<usize> {
        let start = self.first_face as usize;
        start..start + self.num_faces as usize
    }
}

impl Lump for BSPLeaf {
    fn max() -> usize {
        MAX_MAP_LEAFS
    }

    fn lump_type() -> LumpType {
        LumpType::Leafs
    }
}

#[cfg(test)]
mod leaf_tests {
    use super::*;

    #[test]
    fn contents() {
        let mut leaf = BSPLeaf {
            contents: -2,
            first_face: 3,
            num_faces: 2,
            ..Default::default()
        };
        assert_eq!(leaf.contents(), Some(LeafContents::Solid));
        assert_eq!(leaf.face_range(), 3..5);

        leaf.contents = 1;
        assert_eq!(leaf.contents(), None);
    }
}
