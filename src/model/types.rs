use crate::error::{Result, VibefyError};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// What kind of work an item is. Classifies the subject, not the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    #[default]
    Feature,
    Issue,
    Initiative,
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemType::Feature => write!(f, "feature"),
            ItemType::Issue => write!(f, "issue"),
            ItemType::Initiative => write!(f, "initiative"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMethod {
    Rice,
    ValueEffort,
    Custom,
}

impl fmt::Display for ScoringMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringMethod::Rice => write!(f, "rice"),
            ScoringMethod::ValueEffort => write!(f, "value_effort"),
            ScoringMethod::Custom => write!(f, "custom"),
        }
    }
}

impl FromStr for ScoringMethod {
    type Err = VibefyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "rice" => Ok(ScoringMethod::Rice),
            "value_effort" | "value-effort" | "valueeffort" => Ok(ScoringMethod::ValueEffort),
            "custom" => Ok(ScoringMethod::Custom),
            _ => Err(VibefyError::Parse(format!("Invalid scoring method: {}", s))),
        }
    }
}

/// Value band of a value/effort assessment, ordered low to critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl ValueLevel {
    /// Thresholds are inclusive lower bounds; anything below 4 is low.
    pub fn from_score(value: f64) -> Self {
        if value >= 8.0 {
            ValueLevel::Critical
        } else if value >= 6.0 {
            ValueLevel::High
        } else if value >= 4.0 {
            ValueLevel::Medium
        } else {
            ValueLevel::Low
        }
    }

    pub fn is_high_value(self) -> bool {
        self >= ValueLevel::High
    }
}

impl fmt::Display for ValueLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueLevel::Low => write!(f, "low"),
            ValueLevel::Medium => write!(f, "medium"),
            ValueLevel::High => write!(f, "high"),
            ValueLevel::Critical => write!(f, "critical"),
        }
    }
}

/// T-shirt size of the effort side, ordered xs to xl.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffortLevel {
    Xs,
    S,
    M,
    L,
    Xl,
}

impl EffortLevel {
    /// Thresholds are inclusive upper bounds; anything above 8 is xl.
    pub fn from_score(effort: f64) -> Self {
        if effort <= 2.0 {
            EffortLevel::Xs
        } else if effort <= 4.0 {
            EffortLevel::S
        } else if effort <= 6.0 {
            EffortLevel::M
        } else if effort <= 8.0 {
            EffortLevel::L
        } else {
            EffortLevel::Xl
        }
    }

    pub fn is_low_effort(self) -> bool {
        self <= EffortLevel::S
    }
}

impl fmt::Display for EffortLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EffortLevel::Xs => write!(f, "xs"),
            EffortLevel::S => write!(f, "s"),
            EffortLevel::M => write!(f, "m"),
            EffortLevel::L => write!(f, "l"),
            EffortLevel::Xl => write!(f, "xl"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    QuickWins,
    MajorProjects,
    FillIns,
    Questionable,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::QuickWins,
        Quadrant::MajorProjects,
        Quadrant::FillIns,
        Quadrant::Questionable,
    ];

    pub fn classify(value: ValueLevel, effort: EffortLevel) -> Self {
        match (value.is_high_value(), effort.is_low_effort()) {
            (true, true) => Quadrant::QuickWins,
            (true, false) => Quadrant::MajorProjects,
            (false, true) => Quadrant::FillIns,
            (false, false) => Quadrant::Questionable,
        }
    }

    /// Canonical raw `(value, effort)` inputs standing for the whole quadrant.
    ///
    /// Used when an item is dropped into a quadrant rather than scored on a
    /// continuous scale. Each pair sits inside its bands: value 7 is `high`,
    /// value 3 is `low`, effort 3 is `s` and effort 7 is `l`.
    pub fn representative(self) -> (f64, f64) {
        match self {
            Quadrant::QuickWins => (7.0, 3.0),
            Quadrant::MajorProjects => (7.0, 7.0),
            Quadrant::FillIns => (3.0, 3.0),
            Quadrant::Questionable => (3.0, 7.0),
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quadrant::QuickWins => write!(f, "quick_wins"),
            Quadrant::MajorProjects => write!(f, "major_projects"),
            Quadrant::FillIns => write!(f, "fill_ins"),
            Quadrant::Questionable => write!(f, "questionable"),
        }
    }
}

impl FromStr for Quadrant {
    type Err = VibefyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "quick_wins" | "quickwins" => Ok(Quadrant::QuickWins),
            "major_projects" | "majorprojects" => Ok(Quadrant::MajorProjects),
            "fill_ins" | "fillins" => Ok(Quadrant::FillIns),
            "questionable" => Ok(Quadrant::Questionable),
            _ => Err(VibefyError::Parse(format!("Invalid quadrant: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_level_thresholds() {
        assert_eq!(ValueLevel::from_score(8.0), ValueLevel::Critical);
        assert_eq!(ValueLevel::from_score(7.99), ValueLevel::High);
        assert_eq!(ValueLevel::from_score(6.0), ValueLevel::High);
        assert_eq!(ValueLevel::from_score(4.0), ValueLevel::Medium);
        assert_eq!(ValueLevel::from_score(3.9), ValueLevel::Low);
        assert_eq!(ValueLevel::from_score(-5.0), ValueLevel::Low);
        assert_eq!(ValueLevel::from_score(42.0), ValueLevel::Critical);
    }

    #[test]
    fn test_effort_level_thresholds() {
        assert_eq!(EffortLevel::from_score(0.0), EffortLevel::Xs);
        assert_eq!(EffortLevel::from_score(2.0), EffortLevel::Xs);
        assert_eq!(EffortLevel::from_score(2.5), EffortLevel::S);
        assert_eq!(EffortLevel::from_score(4.0), EffortLevel::S);
        assert_eq!(EffortLevel::from_score(6.0), EffortLevel::M);
        assert_eq!(EffortLevel::from_score(8.0), EffortLevel::L);
        assert_eq!(EffortLevel::from_score(8.01), EffortLevel::Xl);
    }

    #[test]
    fn test_quadrant_table() {
        use EffortLevel::*;
        use ValueLevel::*;
        for v in [High, Critical] {
            for e in [Xs, S] {
                assert_eq!(Quadrant::classify(v, e), Quadrant::QuickWins);
            }
            for e in [M, L, Xl] {
                assert_eq!(Quadrant::classify(v, e), Quadrant::MajorProjects);
            }
        }
        for v in [Low, Medium] {
            for e in [Xs, S] {
                assert_eq!(Quadrant::classify(v, e), Quadrant::FillIns);
            }
            for e in [M, L, Xl] {
                assert_eq!(Quadrant::classify(v, e), Quadrant::Questionable);
            }
        }
    }

    #[test]
    fn test_representatives_land_in_their_quadrant() {
        for quadrant in Quadrant::ALL {
            let (value, effort) = quadrant.representative();
            let classified =
                Quadrant::classify(ValueLevel::from_score(value), EffortLevel::from_score(effort));
            assert_eq!(classified, quadrant);
        }
    }

    #[test]
    fn test_item_type_accepts_only_its_own_names() {
        let issue: ItemType = serde_json::from_str("\"issue\"").unwrap();
        assert_eq!(issue, ItemType::Issue);
        assert!(serde_json::from_str::<ItemType>("\"bug\"").is_err());
        assert_eq!(ItemType::Initiative.to_string(), "initiative");
    }

    #[test]
    fn test_quadrant_from_str() {
        assert_eq!("quick_wins".parse::<Quadrant>().unwrap(), Quadrant::QuickWins);
        assert_eq!("Major-Projects".parse::<Quadrant>().unwrap(), Quadrant::MajorProjects);
        assert_eq!("fillins".parse::<Quadrant>().unwrap(), Quadrant::FillIns);
        assert!("nowhere".parse::<Quadrant>().is_err());
    }

    #[test]
    fn test_method_display_roundtrips_through_from_str() {
        for method in [ScoringMethod::Rice, ScoringMethod::ValueEffort, ScoringMethod::Custom] {
            assert_eq!(method.to_string().parse::<ScoringMethod>().unwrap(), method);
        }
    }
}
