//! Section registry
//!
//! The closed set of portfolio sections. Everything that addresses a
//! section - the accordion, the nav rail, scroll tracking - goes through
//! `SectionId`, so an unknown section name can only appear at config
//! parse time, never at runtime.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Identifier for a portfolio section, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    Header,
    Bio,
    About,
    Education,
    Experience,
    Skills,
    Projects,
    Contact,
}

impl SectionId {
    /// Every section in display order
    pub const ALL: [SectionId; 8] = [
        SectionId::Header,
        SectionId::Bio,
        SectionId::About,
        SectionId::Education,
        SectionId::Experience,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// The subset rendered as accordion panels, in display order
    pub const ACCORDION: [SectionId; 6] = [
        SectionId::About,
        SectionId::Education,
        SectionId::Experience,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// Stable name used in config files and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Header => "header",
            SectionId::Bio => "bio",
            SectionId::About => "about",
            SectionId::Education => "education",
            SectionId::Experience => "experience",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    /// Panel title shown in the accordion and the nav rail
    pub fn title(&self) -> &'static str {
        match self {
            SectionId::Header => "Home",
            SectionId::Bio => "Info",
            SectionId::About => "About",
            SectionId::Education => "Education",
            SectionId::Experience => "Experience",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
        }
    }

    /// True for sections rendered as collapsible accordion panels
    pub fn is_accordion(&self) -> bool {
        Self::ACCORDION.contains(self)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| Error::UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accordion_is_subset_of_all() {
        for id in SectionId::ACCORDION {
            assert!(SectionId::ALL.contains(&id));
            assert!(id.is_accordion());
        }
        assert!(!SectionId::Header.is_accordion());
        assert!(!SectionId::Bio.is_accordion());
    }

    #[test]
    fn test_name_round_trip() {
        for id in SectionId::ALL {
            assert_eq!(id.as_str().parse::<SectionId>().unwrap(), id);
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "footer".parse::<SectionId>().unwrap_err();
        assert!(matches!(err, Error::UnknownSection(ref name) if name == "footer"));
    }
}
