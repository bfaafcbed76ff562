use std::fmt;

use serde::{Deserialize, Serialize};

/// Firmware or hardware version as reported by the device (`major.minor.build`).
///
/// # Examples
/// ```
/// use floodsensor_core::VersionTriple;
///
/// let version = VersionTriple::new(1, 2, 3);
/// assert_eq!(version.to_string(), "1.2.3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionTriple {
    pub major: i8,
    pub minor: i8,
    pub build: i8,
}

impl VersionTriple {
    pub fn new(major: i8, minor: i8, build: i8) -> Self {
        Self {
            major,
            minor,
            build,
        }
    }
}

impl fmt::Display for VersionTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.build)
    }
}

#[cfg(test)]
mod tests {
    use super::VersionTriple;

    #[test]
    fn display_keeps_signed_components() {
        assert_eq!(VersionTriple::new(2, 0, -1).to_string(), "2.0.-1");
    }
}
