use std::{mem, ops::Range};

use getset::CopyGetters;
use glam::Vec3;

use super::{
    consts::{LumpType, MAX_MAP_MODELS},
    error::FormatError,
    Lump,
};

/// A self-contained piece of geometry. Model 0 is the level itself, the others are brush
/// entities such as doors and platforms.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct BSPModel {
    pub(crate) mins: Vec3,
    pub(crate) maxs: Vec3,
    pub(crate) origin: Vec3,
    pub(crate) head_nodes: [i32; 4], // render tree, then the three clipping hulls
    pub(crate) num_leafs: i32,
    pub(crate) first_face: i32,
    pub(crate) num_faces: i32,
}

const _: () = assert!(mem::size_of::<BSPModel>() == 64);

impl BSPModel {
    /// The model's faces as a range into a face table of `faces_len` entries.
    pub fn face_range(&self, faces_len: usize) -> Result<Range<usize>, FormatError> {
        let start = i64::from(self.first_face);
        let end = start + i64::from(self.num_faces);
        if start < 0 || end < start || end > faces_len as i64 {
            let index = if start < 0 { start } else { end - 1 };
            return Err(FormatError::out_of_range(LumpType::Faces, index, faces_len));
        }
        Ok(start as usize..end as usize)
    }
}

impl Lump for BSPModel {
    fn max() -> usize {
        MAX_MAP_MODELS
    }

    fn lump_type() -> LumpType {
        LumpType::Models
    }
}

#[cfg(test)]
mod model_tests {
    use super::*;

    fn model(first_face: i32, num_faces: i32) -> BSPModel {
        BSPModel {
            first_face,
            num_faces,
            ..Default::default()
        }
    }

    #[test]
    fn face_range() {
        assert_eq!(model(2, 3).face_range(5), Ok(2..5));
        assert_eq!(model(0, 0).face_range(0), Ok(0..0));
        assert_eq!(
            model(2, 4).face_range(5),
            Err(FormatError::IndexOutOfRange {
                table: LumpType::Faces,
                index: 5,
                len: 5
            })
        );
        assert_eq!(
            model(-1, 1).face_range(5),
            Err(FormatError::IndexOutOfRange {
                table: LumpType::Faces,
                index: -1,
                len: 5
            })
        );
        assert!(model(3, -1).face_range(5).is_err());
    }
}
