use std::fmt;
use std::str::FromStr;

use crate::error::{NutriError, Result};
use crate::models::{Micronutrients, Sex};

/// Integer percent-of-energy band, parsed from `"low-high"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PercentRange {
    pub low: u32,
    pub high: u32,
}

impl FromStr for PercentRange {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (low, high) = s
            .split_once('-')
            .ok_or_else(|| format!("expected 'low-high', got '{}'", s))?;
        let low: u32 = low
            .trim()
            .parse()
            .map_err(|_| format!("invalid lower bound in '{}'", s))?;
        let high: u32 = high
            .trim()
            .parse()
            .map_err(|_| format!("invalid upper bound in '{}'", s))?;
        if low > high {
            return Err(format!("lower bound exceeds upper bound in '{}'", s));
        }
        Ok(PercentRange { low, high })
    }
}

impl fmt::Display for PercentRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

/// Requirements for one (sex, age bracket) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceRow {
    pub sex: Sex,
    /// Exclusive lower bound: the row applies to ages strictly above it.
    pub age_threshold: u32,
    pub protein_pct: PercentRange,
    pub carbs_pct: PercentRange,
    pub fat_pct: PercentRange,
    pub micronutrients: Micronutrients,
}

/// Immutable reference dataset, one sorted bracket list per sex.
#[derive(Debug, Clone)]
pub struct ReferenceTable {
    male: Vec<ReferenceRow>,
    female: Vec<ReferenceRow>,
}

impl ReferenceTable {
    /// Build from rows in dataset order.
    ///
    /// Thresholds must be strictly increasing within each sex.
    pub fn from_rows(rows: Vec<ReferenceRow>) -> Result<Self> {
        if rows.is_empty() {
            return Err(NutriError::DatasetLoad("dataset has no rows".to_string()));
        }

        let mut male = Vec::new();
        let mut female = Vec::new();
        for row in rows {
            let bucket = match row.sex {
                Sex::Male => &mut male,
                Sex::Female => &mut female,
            };
            if let Some(prev) = bucket.last().map(|r: &ReferenceRow| r.age_threshold) {
                if row.age_threshold <= prev {
                    return Err(NutriError::DatasetLoad(format!(
                        "age thresholds for sex {} must be strictly increasing ({} after {})",
                        row.sex, row.age_threshold, prev
                    )));
                }
            }
            bucket.push(row);
        }

        Ok(Self { male, female })
    }

    /// All brackets for `sex`, ascending by threshold.
    pub fn brackets(&self, sex: Sex) -> &[ReferenceRow] {
        match sex {
            Sex::Male => &self.male,
            Sex::Female => &self.female,
        }
    }

    /// The bracket with the largest threshold strictly below `age`.
    pub fn lookup(&self, sex: Sex, age: u32) -> Result<&ReferenceRow> {
        let rows = self.brackets(sex);
        let idx = rows.partition_point(|r| r.age_threshold < age);
        if idx == 0 {
            return Err(NutriError::NoMatchingBracket { sex, age });
        }
        Ok(&rows[idx - 1])
    }

    pub fn len(&self) -> usize {
        self.male.len() + self.female.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
