use glam::{vec3, Vec3};
use quake::prelude::*;

/// A point of a face outline, moved into the view and shaded by height.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewPoint {
    pub position: Vec3,
    /// 0 at the bottom of the model, 1 at the top.
    pub shade: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewFace {
    pub index: usize,
    pub hidden: bool,
    pub normal: Vec3,
    pub lines: Vec<[ViewPoint; 2]>,
}

/// Everything needed to draw a model from above into a square texture.
#[derive(Clone, Debug, PartialEq)]
pub struct TopDownView {
    pub model: usize,
    pub bounds: Bounds,
    pub width: u32,
    pub height: u32,
    /// Side of the square texture, the larger of `width` and `height`.
    pub size: u32,
    pub faces: Vec<ViewFace>,
}

impl TopDownView {
    pub fn new(document: &BspDocument, model: usize) -> Result<Self, FormatError> {
        let faces = document.model_faces(model)?;
        // model_faces has already checked the index
        let bounds = document.model_bounds(model).unwrap_or_default();

        let extent = bounds.size();
        let offset = if bounds.is_empty() {
            Vec3::ZERO
        } else {
            vec3(-bounds.min.x, -bounds.min.y, 0.0)
        };
        let floor = if bounds.is_empty() { 0.0 } else { bounds.min.z };

        let point = |p: Vec3| ViewPoint {
            position: p + offset,
            shade: if extent.z > 0.0 {
                (p.z - floor) / extent.z
            } else {
                0.0
            },
        };

        let faces = faces
            .into_iter()
            .map(|face| ViewFace {
                index: face.index,
                hidden: face.hidden,
                normal: face.normal,
                lines: face
                    .winding
                    .edges
                    .iter()
                    .map(|&[a, b]| [point(a), point(b)])
                    .collect(),
            })
            .collect();

        let width = extent.x as u32;
        let height = extent.y as u32;

        log::debug!("Model {model} view is {width}x{height}");

        Ok(Self {
            model,
            bounds,
            width,
            height,
            size: width.max(height),
            faces,
        })
    }

    pub fn visible_faces(&self) -> impl Iterator<Item = &ViewFace> {
        self.faces.iter().filter(|face| !face.hidden)
    }

    pub fn line_count(&self) -> usize {
        self.visible_faces().map(|face| face.lines.len()).sum()
    }
}

#[cfg(test)]
mod view_tests {
    use quake::bsp::test_map::TestMap;

    use super::*;

    #[test]
    fn room_from_above() {
        let document = BspDocument::from_bytes(&TestMap::room().build()).unwrap();
        let view = TopDownView::new(&document, 0).unwrap();

        assert_eq!(view.width, 128);
        assert_eq!(view.height, 64);
        assert_eq!(view.size, 128);
        assert_eq!(view.faces.len(), 2);
        assert_eq!(view.visible_faces().count(), 1);
        assert_eq!(view.line_count(), 4);

        let floor = &view.faces[0];
        assert_eq!(floor.lines[0][0].position, Vec3::ZERO);
        assert_eq!(floor.lines[0][1].position, vec3(128.0, 0.0, 0.0));
        assert_eq!(floor.lines[2][0].position, vec3(128.0, 64.0, 0.0));
        // a flat model has no depth to shade by
        assert!(floor.lines.iter().flatten().all(|p| p.shade == 0.0));

        assert!(view.faces[1].hidden);
        assert!(view.faces[1].lines.is_empty());
    }

    #[test]
    fn shade_follows_height() {
        let mut map = TestMap::line();
        map.vertices[1].z = 8.0;
        let document = BspDocument::from_bytes(&map.build()).unwrap();
        let view = TopDownView::new(&document, 0).unwrap();

        let [start, end] = view.faces[0].lines[0];
        assert_eq!(start.shade, 0.0);
        assert_eq!(end.shade, 1.0);
        assert_eq!(view.width, 10);
        assert_eq!(view.height, 0);
        assert_eq!(view.size, 10);
    }

    #[test]
    fn missing_model() {
        let document = BspDocument::from_bytes(&TestMap::line().build()).unwrap();
        assert_eq!(
            TopDownView::new(&document, 3),
            Err(FormatError::IndexOutOfRange {
                table: LumpType::Models,
                index: 3,
                len: 1
            })
        );
    }
}
