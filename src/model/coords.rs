use glam::Vec3;

use super::chunk::CHUNK_SIZE;

/// coordinates of a block in world space
#[derive(Debug, Eq, Hash, PartialEq, Clone, Copy)]
pub struct WorldCoord(pub isize, pub isize, pub isize);

impl WorldCoord {
    /// Convert to the coordinate of the chunk containing this block
    pub fn to_chunk_coord(&self) -> ChunkCoord {
        ChunkCoord(
            self.0.div_euclid(CHUNK_SIZE as isize),
            self.1.div_euclid(CHUNK_SIZE as isize),
            self.2.div_euclid(CHUNK_SIZE as isize),
        )
    }

    /// Convert to chunk-local coordinates
    pub fn to_block_coord(&self) -> BlockCoord {
        BlockCoord(
            self.0.rem_euclid(CHUNK_SIZE as isize) as usize,
            self.1.rem_euclid(CHUNK_SIZE as isize) as usize,
            self.2.rem_euclid(CHUNK_SIZE as isize) as usize,
        )
    }

    pub fn as_vec3(&self) -> Vec3 {
        Vec3::new(self.0 as f32, self.1 as f32, self.2 as f32)
    }
}

// coordinates of a chunk in chunk space
#[derive(Debug, Eq, Hash, PartialEq, Clone, Copy)]
pub struct ChunkCoord(pub isize, pub isize, pub isize);

impl ChunkCoord {
    /// The corner of this chunk in world block coordinates
    pub fn to_world_coord(&self) -> WorldCoord {
        WorldCoord(
            self.0 * CHUNK_SIZE as isize,
            self.1 * CHUNK_SIZE as isize,
            self.2 * CHUNK_SIZE as isize,
        )
    }

    /// World position of a block inside this chunk: `self * N + local`
    pub fn block_to_world(&self, local: &BlockCoord) -> WorldCoord {
        let base = self.to_world_coord();
        WorldCoord(
            base.0 + local.0 as isize,
            base.1 + local.1 as isize,
            base.2 + local.2 as isize,
        )
    }
}

/// Chunk-local block coordinates (0..CHUNK_SIZE for each component)
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct BlockCoord(pub usize, pub usize, pub usize);

impl BlockCoord {
    pub fn get_block_idx(&self) -> usize {
        self.0 + self.1 * CHUNK_SIZE + self.2 * CHUNK_SIZE * CHUNK_SIZE
    }

    pub fn from_block_idx(idx: usize) -> Self {
        BlockCoord(
            idx % CHUNK_SIZE,
            (idx / CHUNK_SIZE) % CHUNK_SIZE,
            idx / (CHUNK_SIZE * CHUNK_SIZE),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_to_world() {
        let chunk = ChunkCoord(1, 0, 2);
        let world = chunk.block_to_world(&BlockCoord(3, 4, 5));
        let n = CHUNK_SIZE as isize;
        assert_eq!(world, WorldCoord(n + 3, 4, 2 * n + 5));
    }

    #[test]
    fn test_world_coord_splits_back() {
        let world = WorldCoord(-1, 17, 40);
        let chunk = world.to_chunk_coord();
        let local = world.to_block_coord();
        assert_eq!(chunk.block_to_world(&local), world);
        assert_eq!(chunk.0, -1);
        assert_eq!(local.0, CHUNK_SIZE - 1);
    }

    #[test]
    fn test_block_idx_is_inverse() {
        let coord = BlockCoord(2, 7, 11);
        assert_eq!(BlockCoord::from_block_idx(coord.get_block_idx()), coord);
    }
}
