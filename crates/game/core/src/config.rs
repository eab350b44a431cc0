/// Game configuration constants and tunable rule switches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Whether a Cannon may capture an enemy stack with zero screens between
    /// them (point-blank), in addition to the classic single-screen jump.
    pub point_blank_cannon: bool,

    /// Whether friendly stacks count as chain targets, which lets a player
    /// keep a chain alive by merging into or recalling their own stacks.
    pub friendly_chain: bool,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Board rows.
    pub const ROWS: u8 = 4;
    /// Board columns.
    pub const COLS: u8 = 8;
    /// Number of cells on the board.
    pub const CELLS: usize = Self::ROWS as usize * Self::COLS as usize;
    /// Number of piece instances in a game (16 per color).
    pub const PIECE_COUNT: usize = 32;
    /// Tallest stack allowed for any base type (Soldier stacks).
    pub const MAX_STACK_HEIGHT: usize = 12;
    /// A hand can hold at most every piece in the game.
    pub const HAND_CAPACITY: usize = Self::PIECE_COUNT;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_POINT_BLANK_CANNON: bool = true;
    pub const DEFAULT_FRIENDLY_CHAIN: bool = true;

    pub fn new() -> Self {
        Self {
            point_blank_cannon: Self::DEFAULT_POINT_BLANK_CANNON,
            friendly_chain: Self::DEFAULT_FRIENDLY_CHAIN,
        }
    }

    /// Classic ruleset: Cannons capture only by jumping, chains continue only
    /// against enemies.
    pub fn classic() -> Self {
        Self {
            point_blank_cannon: false,
            friendly_chain: false,
        }
    }

    #[must_use]
    pub fn with_point_blank_cannon(mut self, enabled: bool) -> Self {
        self.point_blank_cannon = enabled;
        self
    }

    #[must_use]
    pub fn with_friendly_chain(mut self, enabled: bool) -> Self {
        self.friendly_chain = enabled;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
