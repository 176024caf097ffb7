// SPDX-FileCopyrightText: 2025 Contributors to the virtdl project.
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, str::FromStr};

/// A libvirt release, compared component-wise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub micro: u32,
}

impl Version {
    /// Release the declaration tables were generated against
    /// (`LIBVIR_VERSION_NUMBER` 11002000).
    pub const BUILD: Version = Version::new(11, 2, 0);

    pub const fn new(major: u32, minor: u32, micro: u32) -> Self {
        Self {
            major,
            minor,
            micro,
        }
    }

    /// Decode libvirt's packed `major * 1_000_000 + minor * 1_000 + micro`.
    pub const fn from_number(number: u64) -> Self {
        Self::new(
            (number / 1_000_000) as u32,
            ((number / 1_000) % 1_000) as u32,
            (number % 1_000) as u32,
        )
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid libvirt version {0:?}, expected major.minor.micro")]
pub struct ParseVersionError(String);

impl FromStr for Version {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseVersionError(s.to_owned());
        let mut parts = s.trim().split('.');
        let mut next = || -> Result<u32, ParseVersionError> {
            parts.next().ok_or_else(invalid)?.parse().map_err(|_| invalid())
        };
        let version = Version::new(next()?, next()?, next()?);
        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(Version::new(1, 0, 0) < Version::new(5, 0, 0));
        assert!(Version::new(0, 10, 0) > Version::new(0, 9, 4));
        assert!(Version::new(4, 4, 0) <= Version::new(4, 4, 0));
        assert!(Version::new(99, 0, 0) > Version::BUILD);
    }

    #[test]
    fn test_number_encoding() {
        assert_eq!(Version::from_number(11_002_000), Version::BUILD);
        assert_eq!(Version::from_number(1_002_017), Version::new(1, 2, 17));
        assert_eq!(Version::from_number(9_000), Version::new(0, 9, 0));
    }

    #[test]
    fn test_parse() {
        assert_eq!("5.0.0".parse::<Version>().unwrap(), Version::new(5, 0, 0));
        assert_eq!(" 0.10.2 ".parse::<Version>().unwrap(), Version::new(0, 10, 2));
        assert!("5.0".parse::<Version>().is_err());
        assert!("5.0.0.1".parse::<Version>().is_err());
        assert!("five.0.0".parse::<Version>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Version::new(0, 7, 7).to_string(), "0.7.7");
    }
}
