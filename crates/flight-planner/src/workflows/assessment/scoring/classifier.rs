use super::super::domain::MaturityLevel;

/// Maps a score onto its maturity band. Bands are left-inclusive and the
/// function is total: values outside 0-100 land in the outermost bands.
pub fn classify(score: f64) -> MaturityLevel {
    match score {
        s if s < 20.0 => MaturityLevel::Foundational,
        s if s < 40.0 => MaturityLevel::Developing,
        s if s < 60.0 => MaturityLevel::Established,
        s if s < 80.0 => MaturityLevel::Advanced,
        _ => MaturityLevel::MarketLeading,
    }
}

impl MaturityLevel {
    pub fn from_score(score: i32) -> Self {
        classify(f64::from(score))
    }
}
