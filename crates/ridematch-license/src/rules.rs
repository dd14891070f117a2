//! # Jurisdiction Format Table
//!
//! The authoritative license-number format rules for all 51 US issuing
//! jurisdictions. Each jurisdiction owns an ordered list of accepted
//! patterns; a candidate number is valid for that jurisdiction iff it
//! fully matches at least one of them.
//!
//! ## Invariants
//!
//! - Every jurisdiction has at least one pattern.
//! - Matching covers the whole candidate string. No partial matches, no
//!   separators. Letters compare case-insensitively.
//! - The table is `'static` const data, constructed at compile time and
//!   never mutated. It is safe to share across any number of threads.
//!
//! Patterns are expressed as typed character-class segments rather than
//! regex strings, so the table stays declarative and each pattern's exact
//! length bounds are derivable from its shape.

use ridematch_core::Jurisdiction;

// ─── Pattern Segments ────────────────────────────────────────────────

/// One run of characters within a license-number pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// `min..=max` ASCII letters (case-insensitive).
    Letters {
        /// Minimum run length.
        min: u8,
        /// Maximum run length.
        max: u8,
    },
    /// `min..=max` ASCII digits.
    Digits {
        /// Minimum run length.
        min: u8,
        /// Maximum run length.
        max: u8,
    },
    /// `min..=max` ASCII letters or digits.
    Alphanumeric {
        /// Minimum run length.
        min: u8,
        /// Maximum run length.
        max: u8,
    },
    /// A literal run, compared case-insensitively (e.g., the Nevada `X`
    /// prefix or the Missouri `R` suffix).
    Exact(&'static str),
}

const fn letters(min: u8, max: u8) -> Segment {
    Segment::Letters { min, max }
}

const fn digits(min: u8, max: u8) -> Segment {
    Segment::Digits { min, max }
}

const fn alnum(min: u8, max: u8) -> Segment {
    Segment::Alphanumeric { min, max }
}

const fn exact(literal: &'static str) -> Segment {
    Segment::Exact(literal)
}

impl Segment {
    fn min_len(&self) -> usize {
        match self {
            Self::Letters { min, .. } | Self::Digits { min, .. } | Self::Alphanumeric { min, .. } => {
                *min as usize
            }
            Self::Exact(lit) => lit.len(),
        }
    }

    fn max_len(&self) -> usize {
        match self {
            Self::Letters { max, .. } | Self::Digits { max, .. } | Self::Alphanumeric { max, .. } => {
                *max as usize
            }
            Self::Exact(lit) => lit.len(),
        }
    }

    fn accepts(&self, c: char) -> bool {
        match self {
            Self::Letters { .. } => c.is_ascii_alphabetic(),
            Self::Digits { .. } => c.is_ascii_digit(),
            Self::Alphanumeric { .. } => c.is_ascii_alphanumeric(),
            // Exact segments are matched wholesale, not char-by-class.
            Self::Exact(_) => false,
        }
    }
}

// ─── License Pattern ─────────────────────────────────────────────────

/// One accepted character-class-and-length shape for a license number.
///
/// A pattern matches a candidate iff the candidate can be partitioned
/// into the pattern's segments in order, consuming the entire string,
/// and (when present) the overall length bound holds.
#[derive(Debug, Clone, Copy)]
pub struct LicensePattern {
    segments: &'static [Segment],
    description: &'static str,
    /// Overall length bound for shapes tighter than the per-segment sums
    /// (the Washington mixed shape). `None` for every other pattern.
    total_length: Option<(u8, u8)>,
}

impl LicensePattern {
    const fn new(segments: &'static [Segment], description: &'static str) -> Self {
        Self {
            segments,
            description,
            total_length: None,
        }
    }

    const fn with_total_length(
        segments: &'static [Segment],
        description: &'static str,
        min: u8,
        max: u8,
    ) -> Self {
        Self {
            segments,
            description,
            total_length: Some((min, max)),
        }
    }

    /// Human-readable description of the shape, for diagnostics.
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Shortest candidate length this pattern can accept.
    pub fn min_length(&self) -> usize {
        let sum: usize = self.segments.iter().map(Segment::min_len).sum();
        match self.total_length {
            Some((min, _)) => sum.max(min as usize),
            None => sum,
        }
    }

    /// Longest candidate length this pattern can accept.
    pub fn max_length(&self) -> usize {
        let sum: usize = self.segments.iter().map(Segment::max_len).sum();
        match self.total_length {
            Some((_, max)) => sum.min(max as usize),
            None => sum,
        }
    }

    /// Whether the candidate fully matches this pattern.
    pub fn matches(&self, candidate: &str) -> bool {
        let chars: Vec<char> = candidate.chars().collect();
        if let Some((min, max)) = self.total_length {
            if chars.len() < min as usize || chars.len() > max as usize {
                return false;
            }
        }
        match_segments(self.segments, &chars)
    }
}

/// Recursive full-string match of a segment list against a candidate.
///
/// Variable-length segments backtrack from the greedy run length down to
/// their minimum. Candidates are at most a couple dozen characters and
/// patterns have at most five segments, so the recursion is trivially
/// bounded.
fn match_segments(segments: &[Segment], chars: &[char]) -> bool {
    let Some((segment, rest)) = segments.split_first() else {
        return chars.is_empty();
    };

    if let Segment::Exact(literal) = segment {
        let len = literal.len();
        if chars.len() < len {
            return false;
        }
        let head: String = chars[..len].iter().collect();
        if !head.eq_ignore_ascii_case(literal) {
            return false;
        }
        return match_segments(rest, &chars[len..]);
    }

    let min = segment.min_len();
    let max = segment.max_len();

    let mut run = 0;
    while run < max && run < chars.len() && segment.accepts(chars[run]) {
        run += 1;
    }
    if run < min {
        return false;
    }
    for take in (min..=run).rev() {
        if match_segments(rest, &chars[take..]) {
            return true;
        }
    }
    false
}

// ─── The Rule Table ──────────────────────────────────────────────────

const ALABAMA: &[LicensePattern] = &[LicensePattern::new(&[digits(1, 8)], "1 to 8 digits")];

const ALASKA: &[LicensePattern] = &[LicensePattern::new(&[digits(1, 7)], "1 to 7 digits")];

const ARIZONA: &[LicensePattern] = &[
    LicensePattern::new(&[letters(1, 1), digits(8, 8)], "1 letter followed by 8 digits"),
    LicensePattern::new(
        &[letters(2, 2), digits(3, 6)],
        "2 letters followed by 3 to 6 digits",
    ),
    LicensePattern::new(&[digits(9, 9)], "9 digits"),
];

const ARKANSAS: &[LicensePattern] = &[LicensePattern::new(&[digits(4, 9)], "4 to 9 digits")];

const CALIFORNIA: &[LicensePattern] = &[LicensePattern::new(
    &[letters(1, 1), digits(7, 7)],
    "1 letter followed by 7 digits",
)];

const COLORADO: &[LicensePattern] = &[
    LicensePattern::new(&[digits(9, 9)], "9 digits"),
    LicensePattern::new(
        &[letters(1, 1), digits(3, 6)],
        "1 letter followed by 3 to 6 digits",
    ),
    LicensePattern::new(
        &[letters(2, 2), digits(2, 5)],
        "2 letters followed by 2 to 5 digits",
    ),
];

const CONNECTICUT: &[LicensePattern] = &[LicensePattern::new(&[digits(9, 9)], "9 digits")];

const DELAWARE: &[LicensePattern] = &[LicensePattern::new(&[digits(1, 7)], "1 to 7 digits")];

const DISTRICT_OF_COLUMBIA: &[LicensePattern] = &[
    LicensePattern::new(&[digits(7, 7)], "7 digits"),
    LicensePattern::new(&[digits(9, 9)], "9 digits"),
];

const FLORIDA: &[LicensePattern] = &[LicensePattern::new(
    &[letters(1, 1), digits(12, 12)],
    "1 letter followed by 12 digits",
)];

const GEORGIA: &[LicensePattern] = &[LicensePattern::new(&[digits(7, 9)], "7 to 9 digits")];

const HAWAII: &[LicensePattern] = &[
    LicensePattern::new(&[letters(1, 1), digits(8, 8)], "1 letter followed by 8 digits"),
    LicensePattern::new(&[digits(9, 9)], "9 digits"),
];

const IDAHO: &[LicensePattern] = &[
    LicensePattern::new(
        &[letters(2, 2), digits(6, 6), letters(1, 1)],
        "2 letters, 6 digits, then 1 letter",
    ),
    LicensePattern::new(&[digits(9, 9)], "9 digits"),
];

const ILLINOIS: &[LicensePattern] = &[LicensePattern::new(
    &[letters(1, 1), digits(11, 12)],
    "1 letter followed by 11 or 12 digits",
)];

const INDIANA: &[LicensePattern] = &[
    LicensePattern::new(&[letters(1, 1), digits(9, 9)], "1 letter followed by 9 digits"),
    LicensePattern::new(&[digits(9, 10)], "9 or 10 digits"),
];

const IOWA: &[LicensePattern] = &[
    LicensePattern::new(&[digits(9, 9)], "9 digits"),
    LicensePattern::new(
        &[digits(3, 3), letters(2, 2), digits(4, 4)],
        "3 digits, 2 letters, then 4 digits",
    ),
];

const KANSAS: &[LicensePattern] = &[
    LicensePattern::new(
        &[
            letters(1, 1),
            digits(1, 1),
            letters(1, 1),
            digits(1, 1),
            letters(1, 1),
        ],
        "alternating letter-digit, 5 characters",
    ),
    LicensePattern::new(&[letters(1, 1), digits(8, 8)], "1 letter followed by 8 digits"),
    LicensePattern::new(&[digits(9, 9)], "9 digits"),
];

const KENTUCKY: &[LicensePattern] = &[
    LicensePattern::new(
        &[letters(1, 1), digits(8, 9)],
        "1 letter followed by 8 or 9 digits",
    ),
    LicensePattern::new(&[digits(9, 9)], "9 digits"),
];

const LOUISIANA: &[LicensePattern] = &[LicensePattern::new(&[digits(1, 9)], "1 to 9 digits")];

const MAINE: &[LicensePattern] = &[
    LicensePattern::new(&[digits(7, 7)], "7 digits"),
    LicensePattern::new(&[digits(7, 7), letters(1, 1)], "7 digits followed by 1 letter"),
    LicensePattern::new(&[digits(8, 8)], "8 digits"),
];

const MARYLAND: &[LicensePattern] = &[LicensePattern::new(
    &[letters(1, 1), digits(12, 12)],
    "1 letter followed by 12 digits",
)];

const MASSACHUSETTS: &[LicensePattern] = &[
    LicensePattern::new(&[letters(1, 1), digits(8, 8)], "1 letter followed by 8 digits"),
    LicensePattern::new(&[digits(9, 9)], "9 digits"),
];

const MICHIGAN: &[LicensePattern] = &[
    LicensePattern::new(&[letters(1, 1), digits(10, 10)], "1 letter followed by 10 digits"),
    LicensePattern::new(&[letters(1, 1), digits(12, 12)], "1 letter followed by 12 digits"),
];

const MINNESOTA: &[LicensePattern] = &[LicensePattern::new(
    &[letters(1, 1), digits(12, 12)],
    "1 letter followed by 12 digits",
)];

const MISSISSIPPI: &[LicensePattern] = &[LicensePattern::new(&[digits(9, 9)], "9 digits")];

const MISSOURI: &[LicensePattern] = &[
    LicensePattern::new(
        &[letters(1, 1), digits(5, 9)],
        "1 letter followed by 5 to 9 digits",
    ),
    LicensePattern::new(
        &[letters(1, 1), digits(6, 6), exact("R")],
        "1 letter, 6 digits, then 'R'",
    ),
    LicensePattern::new(
        &[digits(8, 8), letters(2, 2)],
        "8 digits followed by 2 letters",
    ),
    LicensePattern::new(
        &[digits(9, 9), letters(1, 1)],
        "9 digits followed by 1 letter",
    ),
    LicensePattern::new(&[digits(9, 9)], "9 digits"),
];

const MONTANA: &[LicensePattern] = &[
    LicensePattern::new(&[letters(1, 1), digits(8, 8)], "1 letter followed by 8 digits"),
    LicensePattern::new(&[digits(13, 13)], "13 digits"),
    LicensePattern::new(&[digits(14, 14)], "14 digits"),
    LicensePattern::new(&[digits(9, 9)], "9 digits"),
];

const NEBRASKA: &[LicensePattern] = &[LicensePattern::new(
    &[letters(1, 1), digits(6, 8)],
    "1 letter followed by 6 to 8 digits",
)];

const NEVADA: &[LicensePattern] = &[
    LicensePattern::new(&[digits(9, 10)], "9 or 10 digits"),
    LicensePattern::new(&[digits(12, 12)], "12 digits"),
    LicensePattern::new(&[exact("X"), digits(8, 8)], "'X' followed by 8 digits"),
];

const NEW_HAMPSHIRE: &[LicensePattern] = &[LicensePattern::new(
    &[digits(2, 2), letters(3, 3), digits(5, 5)],
    "2 digits, 3 letters, then 5 digits",
)];

const NEW_JERSEY: &[LicensePattern] = &[LicensePattern::new(
    &[letters(1, 1), digits(14, 14)],
    "1 letter followed by 14 digits",
)];

const NEW_MEXICO: &[LicensePattern] = &[LicensePattern::new(&[digits(8, 9)], "8 or 9 digits")];

const NEW_YORK: &[LicensePattern] = &[
    LicensePattern::new(&[letters(1, 1), digits(7, 7)], "1 letter followed by 7 digits"),
    LicensePattern::new(&[letters(1, 1), digits(18, 18)], "1 letter followed by 18 digits"),
    LicensePattern::new(&[digits(8, 9)], "8 or 9 digits"),
    LicensePattern::new(&[digits(16, 16)], "16 digits"),
    LicensePattern::new(&[letters(8, 8)], "8 letters"),
];

const NORTH_CAROLINA: &[LicensePattern] =
    &[LicensePattern::new(&[digits(1, 12)], "1 to 12 digits")];

const NORTH_DAKOTA: &[LicensePattern] = &[
    LicensePattern::new(
        &[letters(3, 3), digits(6, 6)],
        "3 letters followed by 6 digits",
    ),
    LicensePattern::new(&[digits(9, 9)], "9 digits"),
];

const OHIO: &[LicensePattern] = &[
    LicensePattern::new(
        &[letters(1, 1), digits(4, 8)],
        "1 letter followed by 4 to 8 digits",
    ),
    LicensePattern::new(
        &[letters(2, 2), digits(3, 7)],
        "2 letters followed by 3 to 7 digits",
    ),
    LicensePattern::new(&[digits(8, 8)], "8 digits"),
];

const OKLAHOMA: &[LicensePattern] = &[
    LicensePattern::new(&[letters(1, 1), digits(9, 9)], "1 letter followed by 9 digits"),
    LicensePattern::new(&[digits(9, 9)], "9 digits"),
];

const OREGON: &[LicensePattern] = &[LicensePattern::new(&[digits(1, 9)], "1 to 9 digits")];

const PENNSYLVANIA: &[LicensePattern] = &[LicensePattern::new(&[digits(8, 8)], "8 digits")];

const RHODE_ISLAND: &[LicensePattern] = &[
    LicensePattern::new(&[digits(7, 7)], "7 digits"),
    LicensePattern::new(&[letters(1, 1), digits(6, 6)], "1 letter followed by 6 digits"),
];

const SOUTH_CAROLINA: &[LicensePattern] =
    &[LicensePattern::new(&[digits(5, 11)], "5 to 11 digits")];

const SOUTH_DAKOTA: &[LicensePattern] = &[
    LicensePattern::new(&[digits(6, 10)], "6 to 10 digits"),
    LicensePattern::new(&[digits(12, 12)], "12 digits"),
];

const TENNESSEE: &[LicensePattern] = &[LicensePattern::new(&[digits(7, 9)], "7 to 9 digits")];

const TEXAS: &[LicensePattern] = &[LicensePattern::new(&[digits(7, 8)], "7 or 8 digits")];

const UTAH: &[LicensePattern] = &[LicensePattern::new(&[digits(4, 10)], "4 to 10 digits")];

const VERMONT: &[LicensePattern] = &[
    LicensePattern::new(&[digits(8, 8)], "8 digits"),
    LicensePattern::new(&[digits(7, 7), exact("A")], "7 digits followed by 'A'"),
];

const VIRGINIA: &[LicensePattern] = &[
    LicensePattern::new(
        &[letters(1, 1), digits(8, 11)],
        "1 letter followed by 8 to 11 digits",
    ),
    LicensePattern::new(&[digits(9, 9)], "9 digits"),
];

const WASHINGTON: &[LicensePattern] = &[LicensePattern::with_total_length(
    &[letters(1, 7), alnum(4, 11)],
    "1 to 7 letters then alphanumerics, 12 characters total",
    12,
    12,
)];

const WEST_VIRGINIA: &[LicensePattern] = &[
    LicensePattern::new(&[digits(7, 7)], "7 digits"),
    LicensePattern::new(
        &[letters(1, 2), digits(5, 6)],
        "1 or 2 letters followed by 5 or 6 digits",
    ),
];

const WISCONSIN: &[LicensePattern] = &[LicensePattern::new(
    &[letters(1, 1), digits(13, 13)],
    "1 letter followed by 13 digits",
)];

const WYOMING: &[LicensePattern] = &[LicensePattern::new(&[digits(9, 10)], "9 or 10 digits")];

/// Returns the accepted license-number patterns for a jurisdiction.
///
/// The match is exhaustive: adding a `Jurisdiction` variant without a
/// format entry is a compile error.
pub fn patterns_for(jurisdiction: Jurisdiction) -> &'static [LicensePattern] {
    match jurisdiction {
        Jurisdiction::Alabama => ALABAMA,
        Jurisdiction::Alaska => ALASKA,
        Jurisdiction::Arizona => ARIZONA,
        Jurisdiction::Arkansas => ARKANSAS,
        Jurisdiction::California => CALIFORNIA,
        Jurisdiction::Colorado => COLORADO,
        Jurisdiction::Connecticut => CONNECTICUT,
        Jurisdiction::Delaware => DELAWARE,
        Jurisdiction::DistrictOfColumbia => DISTRICT_OF_COLUMBIA,
        Jurisdiction::Florida => FLORIDA,
        Jurisdiction::Georgia => GEORGIA,
        Jurisdiction::Hawaii => HAWAII,
        Jurisdiction::Idaho => IDAHO,
        Jurisdiction::Illinois => ILLINOIS,
        Jurisdiction::Indiana => INDIANA,
        Jurisdiction::Iowa => IOWA,
        Jurisdiction::Kansas => KANSAS,
        Jurisdiction::Kentucky => KENTUCKY,
        Jurisdiction::Louisiana => LOUISIANA,
        Jurisdiction::Maine => MAINE,
        Jurisdiction::Maryland => MARYLAND,
        Jurisdiction::Massachusetts => MASSACHUSETTS,
        Jurisdiction::Michigan => MICHIGAN,
        Jurisdiction::Minnesota => MINNESOTA,
        Jurisdiction::Mississippi => MISSISSIPPI,
        Jurisdiction::Missouri => MISSOURI,
        Jurisdiction::Montana => MONTANA,
        Jurisdiction::Nebraska => NEBRASKA,
        Jurisdiction::Nevada => NEVADA,
        Jurisdiction::NewHampshire => NEW_HAMPSHIRE,
        Jurisdiction::NewJersey => NEW_JERSEY,
        Jurisdiction::NewMexico => NEW_MEXICO,
        Jurisdiction::NewYork => NEW_YORK,
        Jurisdiction::NorthCarolina => NORTH_CAROLINA,
        Jurisdiction::NorthDakota => NORTH_DAKOTA,
        Jurisdiction::Ohio => OHIO,
        Jurisdiction::Oklahoma => OKLAHOMA,
        Jurisdiction::Oregon => OREGON,
        Jurisdiction::Pennsylvania => PENNSYLVANIA,
        Jurisdiction::RhodeIsland => RHODE_ISLAND,
        Jurisdiction::SouthCarolina => SOUTH_CAROLINA,
        Jurisdiction::SouthDakota => SOUTH_DAKOTA,
        Jurisdiction::Tennessee => TENNESSEE,
        Jurisdiction::Texas => TEXAS,
        Jurisdiction::Utah => UTAH,
        Jurisdiction::Vermont => VERMONT,
        Jurisdiction::Virginia => VIRGINIA,
        Jurisdiction::Washington => WASHINGTON,
        Jurisdiction::WestVirginia => WEST_VIRGINIA,
        Jurisdiction::Wisconsin => WISCONSIN,
        Jurisdiction::Wyoming => WYOMING,
    }
}

/// Whether the candidate fully matches any pattern accepted by the
/// jurisdiction.
pub fn matches_format(jurisdiction: Jurisdiction, candidate: &str) -> bool {
    patterns_for(jurisdiction)
        .iter()
        .any(|pattern| pattern.matches(candidate))
}

// ─── Tests ───────────────────────────────────────────────────────────
