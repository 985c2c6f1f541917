use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ReportError;

/// One of the four report sections, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Analysis,
    Icps,
    Targeting,
    AdCopy,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Analysis,
        Section::Icps,
        Section::Targeting,
        Section::AdCopy,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Section::Analysis => "analysis",
            Section::Icps => "icps",
            Section::Targeting => "targeting",
            Section::AdCopy => "ad-copy",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| ReportError::UnknownSection(s.to_owned()))
    }
}
