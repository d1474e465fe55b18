/// RGB display color, each channel in `[0, 1]`.
pub type Color = [f32; 3];

#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BlockKind {
    #[default]
    Air = 0,
    Stone = 1,
    Wood = 2,
    Leaves = 3,
}

impl BlockKind {
    /// Every kind, in declaration order.
    pub const ALL: [BlockKind; 4] = [
        BlockKind::Air,
        BlockKind::Stone,
        BlockKind::Wood,
        BlockKind::Leaves,
    ];

    pub fn is_empty(self) -> bool {
        self == BlockKind::Air
    }

    /// Display color of this kind, `None` for the kind that is never drawn.
    pub fn color(self) -> Option<Color> {
        match self {
            BlockKind::Air => None,
            BlockKind::Stone => Some([0.5, 0.5, 0.5]),
            BlockKind::Wood => Some([0.55, 0.35, 0.15]),
            BlockKind::Leaves => Some([0.2, 0.6, 0.2]),
        }
    }
}

/// Free-function form of [`BlockKind::color`] used by the renderer.
pub fn color_of(kind: BlockKind) -> Option<Color> {
    kind.color()
}
