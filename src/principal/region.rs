/*
 * Responsibility
 * - The fixed region enumeration and its membership test
 * - Names are matched exactly (case-sensitive), in this order
 */
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Asia,
    Africa,
    NorthAmerica,
    SouthAmerica,
    Antarctica,
    Europe,
    Australia,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown region: {0}")]
pub struct UnknownRegion(pub String);

impl Region {
    pub const ALL: [Region; 7] = [
        Self::Asia,
        Self::Africa,
        Self::NorthAmerica,
        Self::SouthAmerica,
        Self::Antarctica,
        Self::Europe,
        Self::Australia,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asia => "Asia",
            Self::Africa => "Africa",
            Self::NorthAmerica => "North America",
            Self::SouthAmerica => "South America",
            Self::Antarctica => "Antarctica",
            Self::Europe => "Europe",
            Self::Australia => "Australia",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = UnknownRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|region| region.as_str() == s)
            .ok_or_else(|| UnknownRegion(s.to_string()))
    }
}

/// Region names in their canonical order.
pub fn regions() -> Vec<&'static str> {
    Region::ALL.iter().map(|r| r.as_str()).collect()
}

pub fn is_valid_region(name: &str) -> bool {
    name.parse::<Region>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_seven_regions_in_order() {
        assert_eq!(
            regions(),
            vec![
                "Asia",
                "Africa",
                "North America",
                "South America",
                "Antarctica",
                "Europe",
                "Australia",
            ]
        );
    }

    #[test]
    fn every_listed_region_is_valid() {
        for name in regions() {
            assert!(is_valid_region(name), "{name} should be valid");
        }
    }

    #[test]
    fn rejects_unknown_and_near_miss_names() {
        assert!(!is_valid_region("Mars"));
        assert!(!is_valid_region(""));
        assert!(!is_valid_region("europe"));
        assert!(!is_valid_region("NorthAmerica"));
        assert!(!is_valid_region(" Asia"));
    }

    #[test]
    fn parse_and_display_agree() {
        let region: Region = "South America".parse().unwrap();
        assert_eq!(region, Region::SouthAmerica);
        assert_eq!(region.to_string(), "South America");
        assert_eq!(
            "Atlantis".parse::<Region>(),
            Err(UnknownRegion("Atlantis".into()))
        );
    }
}
