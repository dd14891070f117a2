//! # Issuing Jurisdiction — Single Source of Truth
//!
//! Defines the `Jurisdiction` enum with all 51 US issuing authorities
//! (50 states plus the District of Columbia). This is the ONE definition
//! used across the platform. Every `match` on `Jurisdiction` must be
//! exhaustive — adding a jurisdiction forces every consumer (most
//! importantly the license format table) to handle it at compile time.
//!
//! ## Invariant
//!
//! Codes are canonical uppercase two-letter USPS abbreviations. Parsing is
//! case-sensitive: registration forms populate the value from a fixed
//! dropdown, so anything other than a canonical code is caller error and
//! is rejected rather than silently folded.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::JurisdictionParseError;

/// A US driver-license issuing jurisdiction: one of the 50 states or DC.
///
/// Each jurisdiction has its own accepted license-number formats, looked up
/// by the license validation engine. Variants are declared alphabetically by
/// name; [`Jurisdiction::ALL`] lists them alphabetically by code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Jurisdiction {
    /// Alabama.
    #[serde(rename = "AL")]
    Alabama,
    /// Alaska.
    #[serde(rename = "AK")]
    Alaska,
    /// Arizona.
    #[serde(rename = "AZ")]
    Arizona,
    /// Arkansas.
    #[serde(rename = "AR")]
    Arkansas,
    /// California.
    #[serde(rename = "CA")]
    California,
    /// Colorado.
    #[serde(rename = "CO")]
    Colorado,
    /// Connecticut.
    #[serde(rename = "CT")]
    Connecticut,
    /// Delaware.
    #[serde(rename = "DE")]
    Delaware,
    /// District of Columbia.
    #[serde(rename = "DC")]
    DistrictOfColumbia,
    /// Florida.
    #[serde(rename = "FL")]
    Florida,
    /// Georgia.
    #[serde(rename = "GA")]
    Georgia,
    /// Hawaii.
    #[serde(rename = "HI")]
    Hawaii,
    /// Idaho.
    #[serde(rename = "ID")]
    Idaho,
    /// Illinois.
    #[serde(rename = "IL")]
    Illinois,
    /// Indiana.
    #[serde(rename = "IN")]
    Indiana,
    /// Iowa.
    #[serde(rename = "IA")]
    Iowa,
    /// Kansas.
    #[serde(rename = "KS")]
    Kansas,
    /// Kentucky.
    #[serde(rename = "KY")]
    Kentucky,
    /// Louisiana.
    #[serde(rename = "LA")]
    Louisiana,
    /// Maine.
    #[serde(rename = "ME")]
    Maine,
    /// Maryland.
    #[serde(rename = "MD")]
    Maryland,
    /// Massachusetts.
    #[serde(rename = "MA")]
    Massachusetts,
    /// Michigan.
    #[serde(rename = "MI")]
    Michigan,
    /// Minnesota.
    #[serde(rename = "MN")]
    Minnesota,
    /// Mississippi.
    #[serde(rename = "MS")]
    Mississippi,
    /// Missouri.
    #[serde(rename = "MO")]
    Missouri,
    /// Montana.
    #[serde(rename = "MT")]
    Montana,
    /// Nebraska.
    #[serde(rename = "NE")]
    Nebraska,
    /// Nevada.
    #[serde(rename = "NV")]
    Nevada,
    /// New Hampshire.
    #[serde(rename = "NH")]
    NewHampshire,
    /// New Jersey.
    #[serde(rename = "NJ")]
    NewJersey,
    /// New Mexico.
    #[serde(rename = "NM")]
    NewMexico,
    /// New York.
    #[serde(rename = "NY")]
    NewYork,
    /// North Carolina.
    #[serde(rename = "NC")]
    NorthCarolina,
    /// North Dakota.
    #[serde(rename = "ND")]
    NorthDakota,
    /// Ohio.
    #[serde(rename = "OH")]
    Ohio,
    /// Oklahoma.
    #[serde(rename = "OK")]
    Oklahoma,
    /// Oregon.
    #[serde(rename = "OR")]
    Oregon,
    /// Pennsylvania.
    #[serde(rename = "PA")]
    Pennsylvania,
    /// Rhode Island.
    #[serde(rename = "RI")]
    RhodeIsland,
    /// South Carolina.
    #[serde(rename = "SC")]
    SouthCarolina,
    /// South Dakota.
    #[serde(rename = "SD")]
    SouthDakota,
    /// Tennessee.
    #[serde(rename = "TN")]
    Tennessee,
    /// Texas.
    #[serde(rename = "TX")]
    Texas,
    /// Utah.
    #[serde(rename = "UT")]
    Utah,
    /// Vermont.
    #[serde(rename = "VT")]
    Vermont,
    /// Virginia.
    #[serde(rename = "VA")]
    Virginia,
    /// Washington.
    #[serde(rename = "WA")]
    Washington,
    /// West Virginia.
    #[serde(rename = "WV")]
    WestVirginia,
    /// Wisconsin.
    #[serde(rename = "WI")]
    Wisconsin,
    /// Wyoming.
    #[serde(rename = "WY")]
    Wyoming,
}

/// Total number of issuing jurisdictions. Used for compile-time assertions.
pub const JURISDICTION_COUNT: usize = 51;

impl Jurisdiction {
    /// All 51 jurisdictions in canonical order (alphabetical by code,
    /// with DC sorted under "DC").
    ///
    /// Registration dropdowns and exhaustiveness tests iterate this list.
    pub const ALL: [Jurisdiction; JURISDICTION_COUNT] = [
        Self::Alaska,
        Self::Alabama,
        Self::Arkansas,
        Self::Arizona,
        Self::California,
        Self::Colorado,
        Self::Connecticut,
        Self::DistrictOfColumbia,
        Self::Delaware,
        Self::Florida,
        Self::Georgia,
        Self::Hawaii,
        Self::Iowa,
        Self::Idaho,
        Self::Illinois,
        Self::Indiana,
        Self::Kansas,
        Self::Kentucky,
        Self::Louisiana,
        Self::Massachusetts,
        Self::Maryland,
        Self::Maine,
        Self::Michigan,
        Self::Minnesota,
        Self::Missouri,
        Self::Mississippi,
        Self::Montana,
        Self::NorthCarolina,
        Self::NorthDakota,
        Self::Nebraska,
        Self::NewHampshire,
        Self::NewJersey,
        Self::NewMexico,
        Self::Nevada,
        Self::NewYork,
        Self::Ohio,
        Self::Oklahoma,
        Self::Oregon,
        Self::Pennsylvania,
        Self::RhodeIsland,
        Self::SouthCarolina,
        Self::SouthDakota,
        Self::Tennessee,
        Self::Texas,
        Self::Utah,
        Self::Virginia,
        Self::Vermont,
        Self::Washington,
        Self::Wisconsin,
        Self::WestVirginia,
        Self::Wyoming,
    ];

    /// Returns the canonical uppercase two-letter code for this jurisdiction.
    ///
    /// This must match the serde serialization format and the values the
    /// registration form's state dropdown submits.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Alabama => "AL",
            Self::Alaska => "AK",
            Self::Arizona => "AZ",
            Self::Arkansas => "AR",
            Self::California => "CA",
            Self::Colorado => "CO",
            Self::Connecticut => "CT",
            Self::Delaware => "DE",
            Self::DistrictOfColumbia => "DC",
            Self::Florida => "FL",
            Self::Georgia => "GA",
            Self::Hawaii => "HI",
            Self::Idaho => "ID",
            Self::Illinois => "IL",
            Self::Indiana => "IN",
            Self::Iowa => "IA",
            Self::Kansas => "KS",
            Self::Kentucky => "KY",
            Self::Louisiana => "LA",
            Self::Maine => "ME",
            Self::Maryland => "MD",
            Self::Massachusetts => "MA",
            Self::Michigan => "MI",
            Self::Minnesota => "MN",
            Self::Mississippi => "MS",
            Self::Missouri => "MO",
            Self::Montana => "MT",
            Self::Nebraska => "NE",
            Self::Nevada => "NV",
            Self::NewHampshire => "NH",
            Self::NewJersey => "NJ",
            Self::NewMexico => "NM",
            Self::NewYork => "NY",
            Self::NorthCarolina => "NC",
            Self::NorthDakota => "ND",
            Self::Ohio => "OH",
            Self::Oklahoma => "OK",
            Self::Oregon => "OR",
            Self::Pennsylvania => "PA",
            Self::RhodeIsland => "RI",
            Self::SouthCarolina => "SC",
            Self::SouthDakota => "SD",
            Self::Tennessee => "TN",
            Self::Texas => "TX",
            Self::Utah => "UT",
            Self::Vermont => "VT",
            Self::Virginia => "VA",
            Self::Washington => "WA",
            Self::WestVirginia => "WV",
            Self::Wisconsin => "WI",
            Self::Wyoming => "WY",
        }
    }

    /// Returns the full jurisdiction name (e.g., "California").
    pub fn name(&self) -> &'static str {
        match self {
            Self::Alabama => "Alabama",
            Self::Alaska => "Alaska",
            Self::Arizona => "Arizona",
            Self::Arkansas => "Arkansas",
            Self::California => "California",
            Self::Colorado => "Colorado",
            Self::Connecticut => "Connecticut",
            Self::Delaware => "Delaware",
            Self::DistrictOfColumbia => "District of Columbia",
            Self::Florida => "Florida",
            Self::Georgia => "Georgia",
            Self::Hawaii => "Hawaii",
            Self::Idaho => "Idaho",
            Self::Illinois => "Illinois",
            Self::Indiana => "Indiana",
            Self::Iowa => "Iowa",
            Self::Kansas => "Kansas",
            Self::Kentucky => "Kentucky",
            Self::Louisiana => "Louisiana",
            Self::Maine => "Maine",
            Self::Maryland => "Maryland",
            Self::Massachusetts => "Massachusetts",
            Self::Michigan => "Michigan",
            Self::Minnesota => "Minnesota",
            Self::Mississippi => "Mississippi",
            Self::Missouri => "Missouri",
            Self::Montana => "Montana",
            Self::Nebraska => "Nebraska",
            Self::Nevada => "Nevada",
            Self::NewHampshire => "New Hampshire",
            Self::NewJersey => "New Jersey",
            Self::NewMexico => "New Mexico",
            Self::NewYork => "New York",
            Self::NorthCarolina => "North Carolina",
            Self::NorthDakota => "North Dakota",
            Self::Ohio => "Ohio",
            Self::Oklahoma => "Oklahoma",
            Self::Oregon => "Oregon",
            Self::Pennsylvania => "Pennsylvania",
            Self::RhodeIsland => "Rhode Island",
            Self::SouthCarolina => "South Carolina",
            Self::SouthDakota => "South Dakota",
            Self::Tennessee => "Tennessee",
            Self::Texas => "Texas",
            Self::Utah => "Utah",
            Self::Vermont => "Vermont",
            Self::Virginia => "Virginia",
            Self::Washington => "Washington",
            Self::WestVirginia => "West Virginia",
            Self::Wisconsin => "Wisconsin",
            Self::Wyoming => "Wyoming",
        }
    }
}

impl std::fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Jurisdiction {
    type Err = JurisdictionParseError;

    /// Parse a jurisdiction from its canonical uppercase two-letter code.
    ///
    /// Accepts exactly the codes produced by [`Jurisdiction::as_str()`].
    /// Lowercase, mixed-case, full names, and unknown codes are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AL" => Ok(Self::Alabama),
            "AK" => Ok(Self::Alaska),
            "AZ" => Ok(Self::Arizona),
            "AR" => Ok(Self::Arkansas),
            "CA" => Ok(Self::California),
            "CO" => Ok(Self::Colorado),
            "CT" => Ok(Self::Connecticut),
            "DE" => Ok(Self::Delaware),
            "DC" => Ok(Self::DistrictOfColumbia),
            "FL" => Ok(Self::Florida),
            "GA" => Ok(Self::Georgia),
            "HI" => Ok(Self::Hawaii),
            "ID" => Ok(Self::Idaho),
            "IL" => Ok(Self::Illinois),
            "IN" => Ok(Self::Indiana),
            "IA" => Ok(Self::Iowa),
            "KS" => Ok(Self::Kansas),
            "KY" => Ok(Self::Kentucky),
            "LA" => Ok(Self::Louisiana),
            "ME" => Ok(Self::Maine),
            "MD" => Ok(Self::Maryland),
            "MA" => Ok(Self::Massachusetts),
            "MI" => Ok(Self::Michigan),
            "MN" => Ok(Self::Minnesota),
            "MS" => Ok(Self::Mississippi),
            "MO" => Ok(Self::Missouri),
            "MT" => Ok(Self::Montana),
            "NE" => Ok(Self::Nebraska),
            "NV" => Ok(Self::Nevada),
            "NH" => Ok(Self::NewHampshire),
            "NJ" => Ok(Self::NewJersey),
            "NM" => Ok(Self::NewMexico),
            "NY" => Ok(Self::NewYork),
            "NC" => Ok(Self::NorthCarolina),
            "ND" => Ok(Self::NorthDakota),
            "OH" => Ok(Self::Ohio),
            "OK" => Ok(Self::Oklahoma),
            "OR" => Ok(Self::Oregon),
            "PA" => Ok(Self::Pennsylvania),
            "RI" => Ok(Self::RhodeIsland),
            "SC" => Ok(Self::SouthCarolina),
            "SD" => Ok(Self::SouthDakota),
            "TN" => Ok(Self::Tennessee),
            "TX" => Ok(Self::Texas),
            "UT" => Ok(Self::Utah),
            "VT" => Ok(Self::Vermont),
            "VA" => Ok(Self::Virginia),
            "WA" => Ok(Self::Washington),
            "WV" => Ok(Self::WestVirginia),
            "WI" => Ok(Self::Wisconsin),
            "WY" => Ok(Self::Wyoming),
            other => Err(JurisdictionParseError::UnknownCode {
                code: other.to_string(),
            }),
        }
    }
}
