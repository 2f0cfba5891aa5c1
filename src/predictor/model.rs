use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::models::CarFeatures;
use crate::prelude::*;

/// Trained pricing model, loaded once at startup from a JSON artifact.
///
/// `columns` lists the features in the exact order of the training schema.
/// A column name that does not resolve against [`CarFeatures`] fails
/// inference loudly instead of silently feeding the model garbage.
#[derive(Serialize, Deserialize)]
pub struct PriceModel {
    pub intercept: f64,
    pub columns: Vec<Column>,
}

#[derive(Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Column {
    Numeric {
        name: String,
        coefficient: f64,
    },

    Categorical {
        name: String,
        weights: HashMap<String, f64>,

        /// Weight applied to levels unseen during training.
        #[serde(default)]
        unknown_weight: f64,
    },
}

impl Column {
    fn name(&self) -> &str {
        match self {
            Self::Numeric { name, .. } | Self::Categorical { name, .. } => name,
        }
    }
}

impl PriceModel {
    pub fn load(path: &Path) -> Result<Self> {
        let artifact = fs::read(path)
            .with_context(|| format!("failed to read the model artifact `{}`", path.display()))?;
        serde_json::from_slice(&artifact).context("failed to parse the model artifact")
    }

    /// Runs single-row inference over the training schema.
    pub fn predict(&self, features: &CarFeatures) -> Result<f64> {
        let mut price = self.intercept;
        for column in &self.columns {
            let value = features.get(column.name()).ok_or_else(|| {
                anyhow!("model column `{}` does not match any feature", column.name())
            })?;
            price += match column {
                Column::Numeric { name, coefficient } => {
                    let value: f64 = value
                        .parse()
                        .with_context(|| format!("feature `{name}` is not numeric: `{value}`"))?;
                    coefficient * value
                }
                Column::Categorical { weights, unknown_weight, .. } => {
                    weights.get(value.as_ref()).copied().unwrap_or(*unknown_weight)
                }
            };
        }
        Ok(price)
    }
}
