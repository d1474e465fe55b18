// Lattice terrain generation
//
// Chunks are produced by an ordered list of paint passes. Every pass sweeps
// the whole chunk in world-absolute coordinates and overwrites each cell its
// predicate selects, so when two passes select the same cell the later one
// wins. With the default rules the passes are disjoint in height:
//
//   pass 1  Stone   wz <  ground, except where wx and wy both sit on the shaft lattice
//   pass 2  Wood    wz == ground, on the tree lattice
//   pass 3  Leaves  ground < wz < ground + leaf_band, on the tree lattice

use tracing::debug;

use super::block::BlockKind;
use super::chunk::{Chunk, N_BLOCKS_PER_CHUNK};
use super::coords::{BlockCoord, ChunkCoord, WorldCoord};
use crate::config::GenerationConfig;

/// Anything that can produce the contents of a chunk from its coordinate.
///
/// Implementations must be deterministic: the same coordinate always yields
/// the same chunk.
pub trait ChunkSource {
    fn generate(&self, coord: &ChunkCoord) -> Chunk;
}

/// One paint pass: every cell whose world position satisfies `applies` is set to `kind`.
#[derive(Clone, Copy)]
pub struct PaintPass {
    pub name: &'static str,
    pub kind: BlockKind,
    pub applies: fn(&GenerationConfig, &WorldCoord) -> bool,
}

impl std::fmt::Debug for PaintPass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaintPass")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}

fn on_lattice(world: &WorldCoord, pitch: isize) -> bool {
    world.0.rem_euclid(pitch) == 0 && world.1.rem_euclid(pitch) == 0
}

fn is_stone(config: &GenerationConfig, world: &WorldCoord) -> bool {
    world.2 < config.ground_level && !on_lattice(world, config.spacing)
}

fn is_trunk(config: &GenerationConfig, world: &WorldCoord) -> bool {
    world.2 == config.ground_level && on_lattice(world, config.tree_spacing)
}

fn is_leaves(config: &GenerationConfig, world: &WorldCoord) -> bool {
    world.2 > config.ground_level
        && world.2 < config.ground_level + config.leaf_band
        && on_lattice(world, config.tree_spacing)
}

/// Stone, then trunks, then leaves.
pub const DEFAULT_PASSES: [PaintPass; 3] = [
    PaintPass { name: "stone", kind: BlockKind::Stone, applies: is_stone },
    PaintPass { name: "trunks", kind: BlockKind::Wood, applies: is_trunk },
    PaintPass { name: "leaves", kind: BlockKind::Leaves, applies: is_leaves },
];

#[derive(Debug, Clone)]
pub struct LatticeGenerator {
    config: GenerationConfig,
    passes: Vec<PaintPass>,
}

impl LatticeGenerator {
    pub fn new(config: GenerationConfig) -> Self {
        Self::with_passes(config, DEFAULT_PASSES.to_vec())
    }

    /// Generator running `passes` in the given order.
    pub fn with_passes(config: GenerationConfig, passes: Vec<PaintPass>) -> Self {
        Self { config, passes }
    }
}

impl Default for LatticeGenerator {
    fn default() -> Self {
        Self::new(GenerationConfig::default())
    }
}

impl ChunkSource for LatticeGenerator {
    fn generate(&self, coord: &ChunkCoord) -> Chunk {
        let mut chunk = Chunk::new_empty();

        for pass in &self.passes {
            let mut painted = 0usize;
            for idx in 0..N_BLOCKS_PER_CHUNK {
                let local = BlockCoord::from_block_idx(idx);
                let world = coord.block_to_world(&local);
                if (pass.applies)(&self.config, &world) {
                    chunk.set_block(&local, pass.kind);
                    painted += 1;
                }
            }
            debug!(?coord, pass = pass.name, painted, "paint pass");
        }

        chunk
    }
}
