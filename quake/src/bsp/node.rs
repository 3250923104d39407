use std::{mem, ops::Range};

use getset::CopyGetters;

use super::{
    consts::{LumpType, MAX_MAP_NODES},
    error::FormatError,
    Lump,
};

/// Where a node's child points: another node, or a leaf when the stored value is negative.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NodeChild {
    Node(usize),
    Leaf(usize),
}

impl NodeChild {
    pub fn from_raw(raw: u16) -> Self {
        let signed = raw as i16;
        if signed >= 0 {
            NodeChild::Node(signed as usize)
        } else {
            // -1 is leaf 0, -2 is leaf 1, ...
            NodeChild::Leaf((!signed) as usize)
        }
    }
}

/// Nodes split space by a plane. Each node also owns the faces lying on its plane.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, bytemuck::Pod, bytemuck::Zeroable, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct BSPNode {
    pub(crate) plane_num: i32,
    pub(crate) front: u16,
    pub(crate) back: u16,
    pub(crate) mins: [i16; 3],
    pub(crate) maxs: [i16; 3],
    pub(crate) first_face: u16,
    pub(crate) num_faces: u16,
}

const _: () = assert!(mem::size_of::<BSPNode>() == 24);

impl BSPNode {
    pub fn front_child(&self) -> NodeChild {
        NodeChild::from_raw(self.front)
    }

    pub fn back_child(&self) -> NodeChild {
        NodeChild::from_raw(self.back)
    }

    pub fn face_range(&self, faces_len: usize) -> Result<Range<usize>, FormatError> {
        let start = self.first_face as usize;
        let end = start + self.num_faces as usize;
        if end > faces_len {
            return Err(FormatError::out_of_range(
                LumpType::Faces,
                (end - 1) as i64,
                faces_len,
            ));
        }
        Ok(start..end)
    }
}

impl Lump for BSPNode {
    fn max() -> usize {
        MAX_MAP_NODES
    }

    fn lump_type() -> LumpType {
        LumpType::Nodes
    }
}
