use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{NutriError, Result};
use crate::models::{Micronutrients, Nutrient, Sex};
use crate::reference::table::{PercentRange, ReferenceRow, ReferenceTable};

/// One raw row of the reference CSV, matched to columns by header name.
#[derive(Debug, Deserialize)]
struct ReferenceRecord {
    sex: Sex,
    age: u32,
    protein_p: String,
    carbs_p: String,
    fat_p: String,
    calcium: f64,
    iron: f64,
    magnesium: f64,
    phosphorus: f64,
    potassium: f64,
    sodium: f64,
    zinc: f64,
    #[serde(rename = "vitA")]
    vit_a: f64,
    #[serde(rename = "vitE")]
    vit_e: f64,
    #[serde(rename = "vitD")]
    vit_d: f64,
    #[serde(rename = "vitC")]
    vit_c: f64,
    thiamin: f64,
    riboflavin: f64,
    niacin: f64,
    #[serde(rename = "vitB6")]
    vit_b6: f64,
    #[serde(rename = "vitB12")]
    vit_b12: f64,
    chlorine: f64,
    #[serde(rename = "vitK")]
    vit_k: f64,
    folate: f64,
}

impl ReferenceRecord {
    /// The column backing a micronutrient. `None` for energy and macros.
    fn micronutrient(&self, nutrient: Nutrient) -> Option<f64> {
        let value = match nutrient {
            Nutrient::Calcium => self.calcium,
            Nutrient::Iron => self.iron,
            Nutrient::Magnesium => self.magnesium,
            Nutrient::Phosphorus => self.phosphorus,
            Nutrient::Potassium => self.potassium,
            Nutrient::Sodium => self.sodium,
            Nutrient::Zinc => self.zinc,
            Nutrient::VitaminA => self.vit_a,
            Nutrient::VitaminE => self.vit_e,
            Nutrient::VitaminD => self.vit_d,
            Nutrient::VitaminC => self.vit_c,
            Nutrient::Thiamin => self.thiamin,
            Nutrient::Riboflavin => self.riboflavin,
            Nutrient::Niacin => self.niacin,
            Nutrient::VitaminB6 => self.vit_b6,
            Nutrient::VitaminB12 => self.vit_b12,
            Nutrient::Chlorine => self.chlorine,
            Nutrient::VitaminK => self.vit_k,
            Nutrient::Folate => self.folate,
            Nutrient::Calories
            | Nutrient::Protein
            | Nutrient::Carbs
            | Nutrient::Fiber
            | Nutrient::Sugar
            | Nutrient::Fat
            | Nutrient::SaturatedFat => return None,
        };
        Some(value)
    }

    fn into_row(self, line: usize) -> Result<ReferenceRow> {
        let parse = |column: &str, raw: &str| {
            raw.parse::<PercentRange>().map_err(|e| {
                NutriError::DatasetLoad(format!("row {}: column {}: {}", line, column, e))
            })
        };

        Ok(ReferenceRow {
            sex: self.sex,
            age_threshold: self.age,
            protein_pct: parse("protein_p", &self.protein_p)?,
            carbs_pct: parse("carbs_p", &self.carbs_p)?,
            fat_pct: parse("fat_p", &self.fat_p)?,
            micronutrients: Micronutrients::try_from_fn(|n| {
                self.micronutrient(n).ok_or_else(|| {
                    NutriError::DatasetLoad(format!("row {}: no column for {}", line, n))
                })
            })?,
        })
    }
}

impl ReferenceTable {
    /// Load the reference dataset from a CSV file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            NutriError::DatasetLoad(format!("cannot open {}: {}", path.display(), e))
        })?;
        let table = Self::from_reader(file)?;
        info!(
            path = %path.display(),
            rows = table.len(),
            "Loaded nutrient reference table"
        );
        Ok(table)
    }

    /// Parse CSV with a header row. Any malformed row fails the whole load.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

        let mut rows = Vec::new();
        for (i, record) in rdr.deserialize::<ReferenceRecord>().enumerate() {
            // Header is line 1.
            let line = i + 2;
            let record =
                record.map_err(|e| NutriError::DatasetLoad(format!("row {}: {}", line, e)))?;
            let row = record.into_row(line)?;
            debug!(sex = %row.sex, age = row.age_threshold, "Parsed reference row");
            rows.push(row);
        }

        Self::from_rows(rows)
    }
}
