use glam::Vec3;

use super::winding::RenderFace;

/// An axis aligned box grown point by point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Bounds {
    /// Contains nothing. Extending it by a point gives the box of that point.
    pub const EMPTY: Self = Self {
        min: Vec3::INFINITY,
        max: Vec3::NEG_INFINITY,
    };

    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn extend(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    pub fn extended(mut self, points: impl IntoIterator<Item = Vec3>) -> Self {
        points.into_iter().for_each(|p| self.extend(p));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.min.cmpgt(self.max).any()
    }

    /// `max - min`, or zero for an empty box.
    pub fn size(&self) -> Vec3 {
        if self.is_empty() {
            Vec3::ZERO
        } else {
            self.max - self.min
        }
    }
}

/// Starting box for the bounds reductions.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum BoundsSeed {
    /// Start empty, giving the true bounding box.
    #[default]
    Exact,
    /// Global bounds always include the origin and model bounds start from `±9999`,
    /// matching thumbnails produced by older tooling.
    Legacy,
}

impl BoundsSeed {
    pub fn global(self) -> Bounds {
        match self {
            BoundsSeed::Exact => Bounds::EMPTY,
            BoundsSeed::Legacy => Bounds::new(Vec3::ZERO, Vec3::ZERO),
        }
    }

    pub fn model(self) -> Bounds {
        match self {
            BoundsSeed::Exact => Bounds::EMPTY,
            BoundsSeed::Legacy => Bounds::new(Vec3::splat(9999.0), Vec3::splat(-9999.0)),
        }
    }
}

/// Bounds of every vertex in the map.
pub fn global_bounds(vertices: &[Vec3], seed: BoundsSeed) -> Bounds {
    seed.global().extended(vertices.iter().copied())
}

/// Bounds of the visible face windings of one model.
pub fn model_bounds(faces: &[RenderFace], seed: BoundsSeed) -> Bounds {
    seed.model().extended(
        faces
            .iter()
            .filter(|face| !face.hidden)
            .flat_map(|face| face.winding.points()),
    )
}

#[cfg(test)]
mod bounds_tests {
    use glam::vec3;

    use super::*;
    use crate::bsp::winding::Winding;

    const VERTICES: [Vec3; 2] = [Vec3::new(1.0, 2.0, 3.0), Vec3::new(-1.0, 5.0, 0.0)];

    #[test]
    fn exact_global() {
        let bounds = global_bounds(&VERTICES, BoundsSeed::Exact);
        assert_eq!(bounds.min, vec3(-1.0, 2.0, 0.0));
        assert_eq!(bounds.max, vec3(1.0, 5.0, 3.0));
        assert_eq!(bounds.size(), vec3(2.0, 3.0, 3.0));
    }

    #[test]
    fn legacy_global_includes_origin() {
        let bounds = global_bounds(&VERTICES, BoundsSeed::Legacy);
        assert_eq!(bounds.min, vec3(-1.0, 0.0, 0.0));
        assert_eq!(bounds.max, vec3(1.0, 5.0, 3.0));
    }

    #[test]
    fn empty() {
        let bounds = global_bounds(&[], BoundsSeed::Exact);
        assert!(bounds.is_empty());
        assert_eq!(bounds.size(), Vec3::ZERO);

        assert!(!global_bounds(&[], BoundsSeed::Legacy).is_empty());
        assert!(BoundsSeed::Legacy.model().is_empty());
    }

    #[test]
    fn hidden_faces_are_skipped() {
        let face = |hidden, x| RenderFace {
            index: 0,
            normal: Vec3::Z,
            hidden,
            winding: Winding {
                edges: vec![[Vec3::ZERO, vec3(x, 1.0, 0.0)]],
            },
        };
        let faces = [face(false, 10.0), face(true, 50.0)];

        let bounds = model_bounds(&faces, BoundsSeed::Exact);
        assert_eq!(bounds, Bounds::new(Vec3::ZERO, vec3(10.0, 1.0, 0.0)));

        let bounds = model_bounds(&faces, BoundsSeed::Legacy);
        assert_eq!(bounds, Bounds::new(Vec3::ZERO, vec3(10.0, 1.0, 0.0)));
    }
}
