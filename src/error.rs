use core::fmt;

/// Reasons a session refuses to start
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    NonFinite { field: &'static str, value: f32 },
    NonPositiveRadius { radius: f32 },
    NonPositiveMargin { margin: f32 },
    ZeroSpawnLimit,
    NonPositivePlayfield { width: f32, height: f32 },
    ZeroGrowthPeriod,
    InvertedGrowthRange { min: u32, max: u32 },
    TooFewFrames { frame_count: u32 },
    PlayfieldTooSmall { width: f32, height: f32, required: f32 },
    MissingCollisionPolicy,
    UnknownCollisionPolicy { name: String },
    Parse { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { field, value } => write!(f, "{field} must be finite, got {value}"),
            Self::NonPositiveRadius { radius } => {
                write!(f, "bubble radius must be positive, got {radius}")
            }
            Self::NonPositiveMargin { margin } => {
                write!(f, "spawn margin must be positive, got {margin}")
            }
            Self::ZeroSpawnLimit => write!(f, "spawn limit must be at least 1"),
            Self::NonPositivePlayfield { width, height } => {
                write!(f, "playfield must have positive size, got {width}x{height}")
            }
            Self::ZeroGrowthPeriod => write!(f, "growth period must be at least 1 tick"),
            Self::InvertedGrowthRange { min, max } => {
                write!(f, "growth range is inverted: {min}..={max}")
            }
            Self::TooFewFrames { frame_count } => write!(
                f,
                "pop animation needs at least 2 frames, got {frame_count}"
            ),
            Self::PlayfieldTooSmall {
                width,
                height,
                required,
            } => write!(
                f,
                "playfield {width}x{height} cannot hold a spawn (needs more than {required} per axis)"
            ),
            Self::MissingCollisionPolicy => write!(f, "no collision policy configured"),
            Self::UnknownCollisionPolicy { name } => {
                write!(f, "unknown collision policy: {name:?}")
            }
            Self::Parse { message } => write!(f, "config parse error: {message}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            message: err.to_string(),
        }
    }
}
