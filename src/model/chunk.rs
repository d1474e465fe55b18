use super::block::BlockKind;
use super::coords::BlockCoord;

/// Edge length of a chunk in blocks.
pub const CHUNK_SIZE: usize = 16;
pub const N_BLOCKS_PER_CHUNK: usize = CHUNK_SIZE.pow(3);

/// A fixed `CHUNK_SIZE`³ grid of blocks. Only the generator writes to it;
/// once handed to the world it is read-only.
#[derive(Clone, PartialEq, Eq)]
pub struct Chunk {
    blocks: [BlockKind; N_BLOCKS_PER_CHUNK],

    // tracks number of blocks that are BlockKind::Air
    n_empty_blocks: usize,
}

impl Chunk {
    /// creates a new chunk filled with air
    pub fn new_empty() -> Self {
        Self {
            blocks: [BlockKind::Air; N_BLOCKS_PER_CHUNK],
            n_empty_blocks: N_BLOCKS_PER_CHUNK,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.n_empty_blocks == N_BLOCKS_PER_CHUNK
    }

    /// Number of blocks that will be drawn.
    pub fn solid_count(&self) -> usize {
        N_BLOCKS_PER_CHUNK - self.n_empty_blocks
    }

    pub fn get_block(&self, coord: &BlockCoord) -> BlockKind {
        self.blocks[coord.get_block_idx()]
    }

    /// Writes `new` at `coord` and returns the kind it replaced.
    pub(crate) fn set_block(&mut self, coord: &BlockCoord, new: BlockKind) -> BlockKind {
        let target = &mut self.blocks[coord.get_block_idx()];

        if target.is_empty() && !new.is_empty() {
            self.n_empty_blocks -= 1;
        } else if !target.is_empty() && new.is_empty() {
            self.n_empty_blocks += 1;
        }

        std::mem::replace(target, new)
    }

    /// Iterates every cell as `(local position, kind)`, x fastest.
    pub fn iter(&self) -> impl Iterator<Item = (BlockCoord, BlockKind)> + '_ {
        self.blocks
            .iter()
            .enumerate()
            .map(|(idx, kind)| (BlockCoord::from_block_idx(idx), *kind))
    }

    /// Iterates only the cells that are not air.
    pub fn iter_solid(&self) -> impl Iterator<Item = (BlockCoord, BlockKind)> + '_ {
        self.iter().filter(|(_, kind)| !kind.is_empty())
    }
}

impl std::fmt::Debug for Chunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chunk")
            .field("solid", &self.solid_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_chunk() {
        let chunk = Chunk::new_empty();
        assert!(chunk.is_empty());
        assert_eq!(chunk.iter_solid().count(), 0);
        assert_eq!(chunk.iter().count(), N_BLOCKS_PER_CHUNK);
    }

    #[test]
    fn test_set_block_tracks_empty_count() {
        let mut chunk = Chunk::new_empty();
        let coord = BlockCoord(1, 2, 3);

        assert_eq!(chunk.set_block(&coord, BlockKind::Stone), BlockKind::Air);
        assert_eq!(chunk.solid_count(), 1);
        assert_eq!(chunk.get_block(&coord), BlockKind::Stone);

        // replacing one solid kind with another keeps the count
        assert_eq!(chunk.set_block(&coord, BlockKind::Wood), BlockKind::Stone);
        assert_eq!(chunk.solid_count(), 1);

        assert_eq!(chunk.set_block(&coord, BlockKind::Air), BlockKind::Wood);
        assert!(chunk.is_empty());

        // writing air over air changes nothing
        chunk.set_block(&coord, BlockKind::Air);
        assert!(chunk.is_empty());
    }

    #[test]
    fn test_iter_solid_reports_positions() {
        let mut chunk = Chunk::new_empty();
        chunk.set_block(&BlockCoord(0, 0, 0), BlockKind::Leaves);
        let last = CHUNK_SIZE - 1;
        chunk.set_block(&BlockCoord(last, last, last), BlockKind::Stone);

        let solid: Vec<_> = chunk.iter_solid().collect();
        assert_eq!(
            solid,
            vec![
                (BlockCoord(0, 0, 0), BlockKind::Leaves),
                (BlockCoord(last, last, last), BlockKind::Stone),
            ]
        );
    }
}
