use std::mem;

use glam::Vec3;
use num_traits::FromPrimitive;

use super::{
    consts::{LumpType, PlaneAxis, MAX_MAP_PLANES},
    Lump,
};

///Plane
///
///The basis of the BSP geometry is defined by planes, which are used as splitting surfaces across the BSP tree structure.
///
/// There are 20 bytes per plane, and the plane lump should be a multiple of 20 bytes long.
///
/// The plane is the set of points `p` with `normal · p = dist`. Points with a positive
/// `normal · p - dist` are in front of the plane.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BSPPlane {
    pub normal: Vec3, // normal vector
    pub dist: f32,    // distance from origin
    pub axis: u32,    // plane axis identifier
}

const _: () = assert!(mem::size_of::<BSPPlane>() == 20);

impl BSPPlane {
    pub fn new(normal: Vec3, dist: f32, axis: u32) -> Self {
        Self { normal, dist, axis }
    }

    pub fn axis(&self) -> Option<PlaneAxis> {
        PlaneAxis::from_u32(self.axis)
    }

    /// The normal scaled to length 1. Degenerate normals become zero.
    pub fn unit_normal(&self) -> Vec3 {
        self.normal.normalize_or_zero()
    }

    pub fn distance_to(&self, point: Vec3) -> f32 {
        self.normal.dot(point) - self.dist
    }
}

impl Lump for BSPPlane {
    fn max() -> usize {
        MAX_MAP_PLANES
    }

    fn lump_type() -> LumpType {
        LumpType::Planes
    }
}

#[cfg(test)]
mod plane_tests {
    use glam::vec3;

    use super::*;

    #[test]
    fn axis_and_normal() {
        let plane = BSPPlane::new(vec3(0.0, 0.0, 4.0), 8.0, 2);
        assert_eq!(plane.axis(), Some(PlaneAxis::Z));
        assert_eq!(plane.unit_normal(), Vec3::Z);
        assert_eq!(plane.distance_to(vec3(1.0, 1.0, 3.0)), 4.0);

        let plane = BSPPlane::new(Vec3::ZERO, 0.0, 9);
        assert_eq!(plane.axis(), None);
        assert_eq!(plane.unit_normal(), Vec3::ZERO);
    }
}
