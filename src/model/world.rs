use std::collections::HashMap;

use tracing::{debug, info};

use super::block::BlockKind;
use super::chunk::Chunk;
use super::coords::{ChunkCoord, WorldCoord};
use super::generator::{ChunkSource, LatticeGenerator};
use crate::config::WorldConfig;

/// Chunk store keyed by chunk coordinate.
///
/// Chunks are generated on first request and cached for the rest of the
/// session; nothing is ever unloaded. Iteration follows insertion order.
pub struct World<G: ChunkSource = LatticeGenerator> {
    generator: G,

    /// loaded chunks in the order they were generated
    chunks: Vec<(ChunkCoord, Chunk)>,

    /// chunk coordinate -> index into `chunks`
    index: HashMap<ChunkCoord, usize>,
}

impl<G: ChunkSource> World<G> {
    /// Creates a world with no chunks loaded.
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            chunks: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Creates a world and generates every chunk in `[0, world_size)³` up front.
    pub fn new_eager(config: &WorldConfig, generator: G) -> Self {
        let mut world = Self::new(generator);
        let size = config.world_size as isize;

        for x in 0..size {
            for y in 0..size {
                for z in 0..size {
                    world.get_chunk(&ChunkCoord(x, y, z));
                }
            }
        }

        info!(
            chunks = world.len(),
            blocks = world.solid_count(),
            world_size = config.world_size,
            "world loaded"
        );
        world
    }

    /// Returns the chunk at `coord`, generating and caching it on first use.
    pub fn get_chunk(&mut self, coord: &ChunkCoord) -> &Chunk {
        let idx = match self.index.get(coord).copied() {
            Some(idx) => idx,
            None => {
                let chunk = self.generator.generate(coord);
                debug!(?coord, solid = chunk.solid_count(), "generated chunk");

                let idx = self.chunks.len();
                self.chunks.push((*coord, chunk));
                self.index.insert(*coord, idx);
                idx
            }
        };
        &self.chunks[idx].1
    }

    /// Returns the chunk at `coord` only if it is already loaded.
    pub fn loaded_chunk(&self, coord: &ChunkCoord) -> Option<&Chunk> {
        self.index.get(coord).map(|&idx| &self.chunks[idx].1)
    }

    /// Visits every loaded chunk in insertion order.
    pub fn for_each_loaded_chunk<F>(&self, mut visitor: F)
    where
        F: FnMut(&ChunkCoord, &Chunk),
    {
        for (coord, chunk) in &self.chunks {
            visitor(coord, chunk);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ChunkCoord, &Chunk)> {
        self.chunks.iter().map(|(coord, chunk)| (coord, chunk))
    }

    /// Block at a world position, `None` if its chunk is not loaded.
    pub fn block_at(&self, world_coord: &WorldCoord) -> Option<BlockKind> {
        self.loaded_chunk(&world_coord.to_chunk_coord())
            .map(|chunk| chunk.get_block(&world_coord.to_block_coord()))
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Number of non-air blocks across all loaded chunks.
    pub fn solid_count(&self) -> usize {
        self.chunks.iter().map(|(_, chunk)| chunk.solid_count()).sum()
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }
}

impl World<LatticeGenerator> {
    /// The default world: lattice terrain, fully generated.
    pub fn from_config(config: &WorldConfig) -> Self {
        Self::new_eager(config, LatticeGenerator::new(config.generation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use crate::model::chunk::CHUNK_SIZE;

    /// Wraps the lattice generator and counts how often it runs.
    struct CountingSource {
        inner: LatticeGenerator,
        calls: Cell<usize>,
    }

    impl CountingSource {
        fn new() -> Self {
            Self { inner: LatticeGenerator::default(), calls: Cell::new(0) }
        }
    }

    impl ChunkSource for CountingSource {
        fn generate(&self, coord: &ChunkCoord) -> Chunk {
            self.calls.set(self.calls.get() + 1);
            self.inner.generate(coord)
        }
    }

    #[test]
    fn test_get_chunk_generates_once() {
        let mut world = World::new(CountingSource::new());
        let coord = ChunkCoord(1, 0, 0);

        let first = world.get_chunk(&coord).clone();
        let second = world.get_chunk(&coord).clone();

        assert_eq!(first, second);
        assert_eq!(world.generator().calls.get(), 1);
        assert_eq!(world.len(), 1);
    }

    #[test]
    fn test_eager_load_covers_the_whole_range() {
        let config = WorldConfig { world_size: 3, ..WorldConfig::default() };
        let mut world = World::new_eager(&config, CountingSource::new());

        assert_eq!(world.len(), 27);
        assert_eq!(world.generator().calls.get(), 27);

        for x in 0..3 {
            for y in 0..3 {
                for z in 0..3 {
                    let coord = ChunkCoord(x, y, z);
                    assert!(world.loaded_chunk(&coord).is_some());
                    world.get_chunk(&coord);
                }
            }
        }

        // every request above was served from the cache
        assert_eq!(world.generator().calls.get(), 27);
        assert!(world.loaded_chunk(&ChunkCoord(3, 0, 0)).is_none());
    }

    #[test]
    fn test_visits_in_insertion_order() {
        let mut world = World::new(LatticeGenerator::default());
        let order = [ChunkCoord(1, 1, 0), ChunkCoord(0, 0, 0), ChunkCoord(0, 1, 0)];
        for coord in &order {
            world.get_chunk(coord);
        }

        let mut visited = Vec::new();
        world.for_each_loaded_chunk(|coord, _| visited.push(*coord));
        assert_eq!(visited, order);

        let iterated: Vec<_> = world.iter().map(|(coord, _)| *coord).collect();
        assert_eq!(iterated, order);
    }

    #[test]
    fn test_block_at_reads_across_chunks() {
        let world = World::from_config(&WorldConfig::default());
        let n = CHUNK_SIZE as isize;

        assert_eq!(world.block_at(&WorldCoord(n + 1, 1, 3)), Some(BlockKind::Stone));
        assert_eq!(world.block_at(&WorldCoord(n, n, 8)), Some(BlockKind::Wood));
        assert_eq!(world.block_at(&WorldCoord(0, 0, n + 2)), Some(BlockKind::Air));
        assert_eq!(world.block_at(&WorldCoord(-1, 0, 0)), None);
    }
}
