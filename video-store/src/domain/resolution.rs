use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Video resolutions a record may advertise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    P144,
    P240,
    P360,
    P480,
    P720,
    P1080,
    P1440,
    P2160,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown resolution: {0}")]
pub struct UnknownResolution(pub String);

impl Resolution {
    pub const ALL: [Resolution; 8] = [
        Resolution::P144,
        Resolution::P240,
        Resolution::P360,
        Resolution::P480,
        Resolution::P720,
        Resolution::P1080,
        Resolution::P1440,
        Resolution::P2160,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Resolution::P144 => "P144",
            Resolution::P240 => "P240",
            Resolution::P360 => "P360",
            Resolution::P480 => "P480",
            Resolution::P720 => "P720",
            Resolution::P1080 => "P1080",
            Resolution::P1440 => "P1440",
            Resolution::P2160 => "P2160",
        }
    }
}

impl FromStr for Resolution {
    type Err = UnknownResolution;

    /// Labels are matched exactly; `p720` or ` P720` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Resolution::ALL
            .iter()
            .copied()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UnknownResolution(s.to_string()))
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_known_label() {
        for resolution in Resolution::ALL {
            assert_eq!(resolution.as_str().parse::<Resolution>(), Ok(resolution));
        }
    }

    #[test]
    fn rejects_unknown_and_differently_cased_labels() {
        assert_eq!(
            "P4320".parse::<Resolution>(),
            Err(UnknownResolution("P4320".to_string()))
        );
        assert!("p720".parse::<Resolution>().is_err());
        assert!("".parse::<Resolution>().is_err());
    }

    #[test]
    fn serializes_as_bare_label() {
        let json = serde_json::to_string(&vec![Resolution::P144, Resolution::P2160]).unwrap();
        assert_eq!(json, r#"["P144","P2160"]"#);
    }
}
