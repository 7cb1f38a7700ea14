use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Animation played on an event icon when it is tapped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelineAnimation {
    /// Scale up on a spring, then settle
    Bounce,
    /// Lift on a spring, then drop back
    Jump,
    /// Dim, then restore
    Fade,
}

impl TimelineAnimation {
    pub const ALL: [TimelineAnimation; 3] = [
        TimelineAnimation::Bounce,
        TimelineAnimation::Jump,
        TimelineAnimation::Fade,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimelineAnimation::Bounce => "bounce",
            TimelineAnimation::Jump => "jump",
            TimelineAnimation::Fade => "fade",
        }
    }
}

impl fmt::Display for TimelineAnimation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimelineAnimation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bounce" => Ok(TimelineAnimation::Bounce),
            "jump" => Ok(TimelineAnimation::Jump),
            "fade" => Ok(TimelineAnimation::Fade),
            other => Err(format!("Unknown animation: {}", other)),
        }
    }
}
