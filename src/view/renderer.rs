use glam::Vec3;

use crate::model::{color_of, Chunk, ChunkCoord, ChunkSource, Color, World};

/// Where the renderer sends geometry: a current color and colored quads.
pub trait QuadSink {
    /// Color applied to every quad emitted after this call.
    fn set_color(&mut self, color: Color);

    /// One quad, corners in drawing order.
    fn emit_quad(&mut self, corners: [Vec3; 4]);

    /// Drops everything emitted so far.
    fn clear(&mut self);
}

/// Corner offsets of a unit cube, one quad per face:
/// front, back, left, right, top, bottom.
///
/// Every quad winds counter-clockwise seen from outside the cube, so
/// `(c1 - c0) x (c3 - c0)` is the outward face normal.
const CUBE_FACES: [[[f32; 3]; 4]; 6] = [
    [[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0], [1.0, 0.0, 0.0]],
    [[0.0, 0.0, 1.0], [1.0, 0.0, 1.0], [1.0, 1.0, 1.0], [0.0, 1.0, 1.0]],
    [[0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 1.0], [0.0, 1.0, 0.0]],
    [[1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [1.0, 1.0, 1.0], [1.0, 0.0, 1.0]],
    [[0.0, 1.0, 0.0], [0.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, 0.0]],
    [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 0.0, 1.0], [0.0, 0.0, 1.0]],
];

pub const QUADS_PER_CUBE: usize = CUBE_FACES.len();
pub const VERTICES_PER_QUAD: usize = 4;

/// Emits an axis-aligned cube with its minimum corner at `origin`.
///
/// All six faces are emitted regardless of neighbours.
pub fn emit_cube<S: QuadSink + ?Sized>(sink: &mut S, origin: Vec3, size: f32, color: Color) {
    sink.set_color(color);
    for face in CUBE_FACES {
        let corners = face.map(|offset| origin + Vec3::from(offset) * size);
        sink.emit_quad(corners);
    }
}

/// Emits one unit cube per non-air block of `chunk`, placed at its world position.
pub fn draw_chunk<S: QuadSink + ?Sized>(sink: &mut S, chunk: &Chunk, coord: &ChunkCoord) {
    for (local, kind) in chunk.iter_solid() {
        if let Some(color) = color_of(kind) {
            let origin = coord.block_to_world(&local).as_vec3();
            emit_cube(sink, origin, 1.0, color);
        }
    }
}

/// Draws every loaded chunk of `world`.
pub fn draw_world<S, G>(sink: &mut S, world: &World<G>)
where
    S: QuadSink + ?Sized,
    G: ChunkSource,
{
    world.for_each_loaded_chunk(|coord, chunk| draw_chunk(&mut *sink, chunk, coord));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorldConfig;
    use crate::model::{BlockKind, LatticeGenerator, WorldCoord, CHUNK_SIZE};

    /// Records everything it is sent.
    #[derive(Default)]
    struct RecordingSink {
        color: Option<Color>,
        quads: Vec<(Option<Color>, [Vec3; 4])>,
    }

    impl QuadSink for RecordingSink {
        fn set_color(&mut self, color: Color) {
            self.color = Some(color);
        }

        fn emit_quad(&mut self, corners: [Vec3; 4]) {
            self.quads.push((self.color, corners));
        }

        fn clear(&mut self) {
            self.color = None;
            self.quads.clear();
        }
    }

    impl RecordingSink {
        fn vertex_count(&self) -> usize {
            self.quads.len() * VERTICES_PER_QUAD
        }
    }

    #[test]
    fn test_cube_has_six_faces_spanning_its_size() {
        let mut sink = RecordingSink::default();
        emit_cube(&mut sink, Vec3::new(1.0, 2.0, 3.0), 0.5, [0.0, 0.0, 1.0]);

        assert_eq!(sink.quads.len(), 6);
        assert_eq!(sink.vertex_count(), 24);

        let corners: Vec<Vec3> = sink.quads.iter().flat_map(|(_, q)| q.iter().copied()).collect();
        let min = corners.iter().fold(Vec3::splat(f32::MAX), |a, b| a.min(*b));
        let max = corners.iter().fold(Vec3::splat(f32::MIN), |a, b| a.max(*b));
        assert_eq!(min, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(max, Vec3::new(1.5, 2.5, 3.5));

        assert!(sink.quads.iter().all(|(color, _)| *color == Some([0.0, 0.0, 1.0])));
    }

    #[test]
    fn test_each_face_is_planar_and_axis_aligned() {
        let mut sink = RecordingSink::default();
        emit_cube(&mut sink, Vec3::ZERO, 1.0, [1.0, 1.0, 1.0]);

        for (_, quad) in &sink.quads {
            let normal = (quad[1] - quad[0]).cross(quad[3] - quad[0]);
            let axes = [normal.x, normal.y, normal.z].iter().filter(|c| c.abs() > 0.0).count();
            assert_eq!(axes, 1, "quad {:?} is not axis aligned", quad);
            assert!((quad[2] - quad[0]).dot(normal).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn test_every_face_winds_outward() {
        let mut sink = RecordingSink::default();
        let origin = Vec3::new(-2.0, 3.0, 0.5);
        emit_cube(&mut sink, origin, 2.0, [1.0, 1.0, 1.0]);
        let center = origin + Vec3::ONE;

        let mut normals = Vec::new();
        for (_, quad) in &sink.quads {
            let normal = (quad[1] - quad[0]).cross(quad[3] - quad[0]).normalize();
            let face_center = (quad[0] + quad[1] + quad[2] + quad[3]) / 4.0;
            assert!(
                normal.dot(face_center - center) > 0.0,
                "quad {:?} winds inward (normal {:?})",
                quad,
                normal
            );

            // the second triangle shares the winding of the first
            let second = (quad[2] - quad[0]).cross(quad[3] - quad[0]);
            assert!(second.dot(normal) > 0.0);
            normals.push(normal);
        }

        // one face per direction: -z, +z, -x, +x, +y, -y
        assert_eq!(
            normals,
            vec![Vec3::NEG_Z, Vec3::Z, Vec3::NEG_X, Vec3::X, Vec3::Y, Vec3::NEG_Y]
        );
    }

    #[test]
    fn test_draw_chunk_places_blocks_in_world_space() {
        let generator = LatticeGenerator::default();
        let coord = ChunkCoord(1, 0, 0);
        let chunk = generator.generate(&coord);

        let mut sink = RecordingSink::default();
        draw_chunk(&mut sink, &chunk, &coord);

        assert_eq!(sink.quads.len(), chunk.solid_count() * QUADS_PER_CUBE);

        let trunk = WorldCoord(CHUNK_SIZE as isize, 0, 8).as_vec3();
        let brown = BlockKind::Wood.color();
        assert!(sink
            .quads
            .iter()
            .any(|(color, quad)| *color == brown && quad[0] == trunk));
    }

    #[test]
    fn test_draw_world_emits_one_cube_per_solid_block() {
        let world = World::from_config(&WorldConfig::default());
        let mut sink = RecordingSink::default();
        draw_world(&mut sink, &world);

        let solid = world.solid_count();
        assert!(solid > 0);
        assert_eq!(sink.quads.len(), solid * 6);
        assert_eq!(sink.vertex_count(), solid * 24);
        assert!(sink.quads.iter().all(|(color, _)| color.is_some()));
    }

    #[test]
    fn test_empty_chunk_draws_nothing() {
        let mut sink = RecordingSink::default();
        draw_chunk(&mut sink, &Chunk::new_empty(), &ChunkCoord(0, 0, 0));
        assert!(sink.quads.is_empty());
        assert!(sink.color.is_none());
    }
}
