use serde::Serialize;

// Education stage
pub const L1: &[&str] = &["중등 교육과정", "고등 교육과정", "기타"];

// Subject
pub const L2: &[&str] = &["국어", "수학", "영어", "과학", "사회", "기타"];

// Grade, split by track
pub const L3_SECONDARY: &[&str] = &["중1", "중2", "중3"];
pub const L3_HIGH: &[&str] = &["고1", "고2", "고3"];

// Material type
pub const L4: &[&str] = &["교과서", "교사용", "내신서", "시험지", "문제집", "해답지"];

/// The five category sets, shaped for `GET /api/enums`.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct Enumerations {
    pub l1: &'static [&'static str],
    pub l2: &'static [&'static str],
    pub l3_secondary: &'static [&'static str],
    pub l3_high: &'static [&'static str],
    pub l4: &'static [&'static str],
}

pub fn enumerations() -> Enumerations {
    Enumerations {
        l1: L1,
        l2: L2,
        l3_secondary: L3_SECONDARY,
        l3_high: L3_HIGH,
        l4: L4,
    }
}

/// Which grade set an L1 value selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Track {
    Secondary,
    High,
}

impl Track {
    /// Matches the listed L1 value or any text naming the stage,
    /// so "중등" alone still selects the secondary track.
    pub fn from_l1(l1: &str) -> Option<Track> {
        if l1 == L1[0] || l1.contains("중등") {
            Some(Track::Secondary)
        } else if l1 == L1[1] || l1.contains("고등") {
            Some(Track::High)
        } else {
            None
        }
    }

    pub fn grades(&self) -> &'static [&'static str] {
        match self {
            Track::Secondary => L3_SECONDARY,
            Track::High => L3_HIGH,
        }
    }
}

/// Legal L3 values for the given L1. An unset or unrecognized L1 accepts
/// either track.
pub fn allowed_grades(l1: Option<&str>) -> Vec<&'static str> {
    match l1.and_then(Track::from_l1) {
        Some(track) => track.grades().to_vec(),
        None => L3_SECONDARY.iter().chain(L3_HIGH).copied().collect(),
    }
}
