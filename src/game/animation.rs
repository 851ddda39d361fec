// Animation configurations for the adventurer sprite sheet

use glam::IVec2;

/// Every animation the sprite sheet provides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationKind {
    Idle,
    Running,
    Attack1,
    Attack2,
    Attack3,
    Jump,
    Die,
}

impl Default for AnimationKind {
    fn default() -> Self {
        Self::Idle
    }
}

impl AnimationKind {
    /// All kinds in library order
    pub const ALL: [AnimationKind; 7] = [
        Self::Idle,
        Self::Running,
        Self::Attack1,
        Self::Attack2,
        Self::Attack3,
        Self::Jump,
        Self::Die,
    ];

    /// Selection priority when several animation keys are active at once
    /// (higher wins)
    pub fn priority(&self) -> u8 {
        match self {
            Self::Idle => 0,
            Self::Running => 1,
            Self::Jump => 2,
            Self::Attack1 => 3,
            Self::Attack2 => 4,
            Self::Attack3 => 5,
            Self::Die => 6,
        }
    }

    /// Human readable name, used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Attack1 => "attack1",
            Self::Attack2 => "attack2",
            Self::Attack3 => "attack3",
            Self::Jump => "jump",
            Self::Die => "die",
        }
    }

    fn slot(&self) -> usize {
        match self {
            Self::Idle => 0,
            Self::Running => 1,
            Self::Attack1 => 2,
            Self::Attack2 => 3,
            Self::Attack3 => 4,
            Self::Jump => 5,
            Self::Die => 6,
        }
    }
}

/// Where an animation lives in the sprite sheet and how fast it plays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationConfig {
    /// Top-left corner of the first frame, in sheet pixels
    pub origin: IVec2,
    /// Number of frames laid out horizontally from `origin`
    pub frame_count: u32,
    /// Ticks each frame stays on screen
    pub frame_rate: u32,
}

impl AnimationConfig {
    pub const fn new(x: i32, y: i32, frame_count: u32, frame_rate: u32) -> Self {
        Self {
            origin: IVec2::new(x, y),
            frame_count,
            frame_rate,
        }
    }
}

pub const IDLE: AnimationConfig = AnimationConfig::new(0, 0, 8, 10);
pub const RUNNING: AnimationConfig = AnimationConfig::new(0, 32, 8, 10);
pub const ATTACK1: AnimationConfig = AnimationConfig::new(0, 64, 8, 10);
pub const ATTACK2: AnimationConfig = AnimationConfig::new(0, 96, 8, 10);
pub const ATTACK3: AnimationConfig = AnimationConfig::new(0, 128, 8, 10);
pub const JUMP: AnimationConfig = AnimationConfig::new(0, 160, 6, 15);
pub const DIE: AnimationConfig = AnimationConfig::new(0, 192, 7, 20);

/// One config per animation kind.
///
/// Starts out as the built-in sheet layout; authoring controls may commit
/// edited origins back into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationLibrary {
    configs: [AnimationConfig; 7],
}

impl Default for AnimationLibrary {
    fn default() -> Self {
        Self::adventurer()
    }
}

impl AnimationLibrary {
    /// Layout of the adventurer sprite sheet
    pub fn adventurer() -> Self {
        Self {
            configs: [IDLE, RUNNING, ATTACK1, ATTACK2, ATTACK3, JUMP, DIE],
        }
    }

    /// Get the config for an animation
    pub fn get(&self, kind: AnimationKind) -> AnimationConfig {
        self.configs[kind.slot()]
    }

    /// Overwrite only the vertical origin of an animation
    pub fn commit_origin_y(&mut self, kind: AnimationKind, y: i32) {
        self.configs[kind.slot()].origin.y = y;
    }
}
