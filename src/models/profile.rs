use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{NutriError, Result};
use crate::models::GoalVector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Sex {
    pub fn code(self) -> &'static str {
        match self {
            Sex::Male => "M",
            Sex::Female => "F",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Sex {
    type Err = NutriError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "M" | "MALE" => Ok(Sex::Male),
            "F" | "FEMALE" => Ok(Sex::Female),
            other => Err(NutriError::InvalidInput(format!("unknown sex '{}'", other))),
        }
    }
}

/// Physical activity multiplier applied to the basal estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Heavy,
    Athlete,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Heavy,
        ActivityLevel::Athlete,
    ];

    pub fn factor(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Heavy => 1.725,
            ActivityLevel::Athlete => 1.9,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (office job)",
            ActivityLevel::Light => "Light Exercise (1/2 days/week)",
            ActivityLevel::Moderate => "Moderate Exercise (3-5 days/week)",
            ActivityLevel::Heavy => "Heavy Exercise (6-7 days/week)",
            ActivityLevel::Athlete => "Athlete (2x per day)",
        }
    }

    /// Exact match against the enumerated factors.
    pub fn from_factor(factor: f64) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.factor() == factor)
    }
}

impl TryFrom<f64> for ActivityLevel {
    type Error = NutriError;

    fn try_from(factor: f64) -> Result<Self> {
        Self::from_factor(factor).ok_or_else(|| {
            NutriError::InvalidInput(format!(
                "activity factor {} is not one of 1.2, 1.375, 1.55, 1.725, 1.9",
                factor
            ))
        })
    }
}

impl From<ActivityLevel> for f64 {
    fn from(level: ActivityLevel) -> f64 {
        level.factor()
    }
}

impl FromStr for ActivityLevel {
    type Err = NutriError;

    fn from_str(s: &str) -> Result<Self> {
        let factor: f64 = s
            .trim()
            .parse()
            .map_err(|_| NutriError::InvalidInput(format!("invalid activity factor '{}'", s)))?;
        Self::try_from(factor)
    }
}

/// A fully populated profile, ready for goal computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysiologicalProfile {
    pub age: u32,
    pub height_m: f64,
    pub weight_kg: f64,
    pub sex: Sex,
    pub activity: ActivityLevel,
}

/// Profile as supplied by a form or file; any field may still be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileDraft {
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub height_m: Option<f64>,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub sex: Option<Sex>,
    #[serde(default)]
    pub activity: Option<ActivityLevel>,
}

impl ProfileDraft {
    /// Fails on the first absent field, in declaration order.
    pub fn complete(&self) -> Result<PhysiologicalProfile> {
        Ok(PhysiologicalProfile {
            age: self.age.ok_or(NutriError::ProfileIncomplete("age"))?,
            height_m: self.height_m.ok_or(NutriError::ProfileIncomplete("height"))?,
            weight_kg: self.weight_kg.ok_or(NutriError::ProfileIncomplete("weight"))?,
            sex: self.sex.ok_or(NutriError::ProfileIncomplete("sex"))?,
            activity: self
                .activity
                .ok_or(NutriError::ProfileIncomplete("activity"))?,
        })
    }

    /// Fields set in `other` take precedence.
    pub fn merged_with(&self, other: &ProfileDraft) -> ProfileDraft {
        ProfileDraft {
            age: other.age.or(self.age),
            height_m: other.height_m.or(self.height_m),
            weight_kg: other.weight_kg.or(self.weight_kg),
            sex: other.sex.or(self.sex),
            activity: other.activity.or(self.activity),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.complete().is_ok()
    }
}

impl From<PhysiologicalProfile> for ProfileDraft {
    fn from(p: PhysiologicalProfile) -> Self {
        ProfileDraft {
            age: Some(p.age),
            height_m: Some(p.height_m),
            weight_kg: Some(p.weight_kg),
            sex: Some(p.sex),
            activity: Some(p.activity),
        }
    }
}

/// A person who owns at most one goal vector at a time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Member {
    pub username: String,
    #[serde(default)]
    pub profile: ProfileDraft,
    #[serde(default)]
    pub goals: Option<GoalVector>,
}

impl Member {
    pub fn new(username: impl Into<String>, profile: ProfileDraft) -> Self {
        Self {
            username: username.into(),
            profile,
            goals: None,
        }
    }
}
