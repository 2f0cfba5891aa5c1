use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::redis::CacheKey;

/// One incoming set of car features, as submitted to `/api/predict`.
///
/// All twelve fields are required. The numeric-looking fields are kept as
/// strings on purpose: the model was trained on raw text columns and parses
/// them itself.
#[derive(Clone, Debug, Deserialize)]
pub struct CarFeatures {
    pub company: String,
    pub year: i32,
    pub owner: String,
    pub fuel: String,
    pub seller_type: String,
    pub transmission: String,
    pub km_driven: String,
    pub mileage_mpg: String,
    pub engine_cc: String,

    /// The public field name is `max_power`; the legacy wire name
    /// `max_power_bhp` is still accepted on input.
    #[serde(alias = "max_power_bhp")]
    pub max_power: String,

    pub torque_nm: String,
    pub seats: f64,
}

impl CarFeatures {
    /// Looks up a feature value by its training schema column name.
    pub fn get(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "company" => Some(Cow::from(&self.company)),
            "year" => Some(Cow::from(self.year.to_string())),
            "owner" => Some(Cow::from(&self.owner)),
            "fuel" => Some(Cow::from(&self.fuel)),
            "seller_type" => Some(Cow::from(&self.seller_type)),
            "transmission" => Some(Cow::from(&self.transmission)),
            "km_driven" => Some(Cow::from(&self.km_driven)),
            "mileage_mpg" => Some(Cow::from(&self.mileage_mpg)),
            "engine_cc" => Some(Cow::from(&self.engine_cc)),
            "max_power" => Some(Cow::from(&self.max_power)),
            "torque_nm" => Some(Cow::from(&self.torque_nm)),
            "seats" => Some(Cow::from(self.seats.to_string())),
            _ => None,
        }
    }
}

impl CacheKey for CarFeatures {
    /// Joins the field values in declaration order.
    /// The key must not depend on the order the request body listed them in.
    fn cache_key(&self) -> String {
        format!(
            "{} {} {} {} {} {} {} {} {} {} {} {}",
            self.company,
            self.year,
            self.owner,
            self.fuel,
            self.seller_type,
            self.transmission,
            self.km_driven,
            self.mileage_mpg,
            self.engine_cc,
            self.max_power,
            self.torque_nm,
            self.seats,
        )
    }
}

/// The one result shape that crosses the cache and API boundaries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub predicted_price: f64,
}
