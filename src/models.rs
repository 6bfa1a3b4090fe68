//! Data models for plants, crop entries, harvests and environment conditions

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, Result};

/// Level name -> percentage adjustment (e.g. `"low" -> -50.0`).
pub type LevelTable = BTreeMap<String, f64>;

/// Environment dimension -> level table (e.g. `"sun" -> {low, medium, high}`).
pub type FactorTable = BTreeMap<String, LevelTable>;

/// A plant template.
///
/// The numeric fields are optional in stored data so that a plant used only
/// for yield figures does not need a price. Calculations that need a missing
/// field fail with [`CalcError::MissingField`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "yield", skip_serializing_if = "Option::is_none")]
    pub base_yield: Option<f64>,
    #[serde(alias = "costs", skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sell_price: Option<f64>,
    /// Absent means the plant ignores the environment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factor: Option<FactorTable>,
}

impl Plant {
    pub fn new(name: impl Into<String>, base_yield: f64) -> Self {
        Self {
            name: Some(name.into()),
            base_yield: Some(base_yield),
            ..Self::default()
        }
    }

    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = Some(cost);
        self
    }

    pub fn with_sell_price(mut self, sell_price: f64) -> Self {
        self.sell_price = Some(sell_price);
        self
    }

    /// Add (or replace) the level table for one environment dimension
    pub fn with_factor<L, S>(mut self, dimension: impl Into<String>, levels: L) -> Self
    where
        L: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let table = levels
            .into_iter()
            .map(|(level, pct)| (level.into(), pct))
            .collect();
        self.factor
            .get_or_insert_with(FactorTable::new)
            .insert(dimension.into(), table);
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Name used in reports and error messages
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("unnamed")
    }

    pub fn require_yield(&self) -> Result<f64> {
        self.require(self.base_yield, "yield")
    }

    pub fn require_cost(&self) -> Result<f64> {
        self.require(self.cost, "cost")
    }

    pub fn require_sell_price(&self) -> Result<f64> {
        self.require(self.sell_price, "sell_price")
    }

    /// Percentage adjustment for `level` of `dimension`, if the plant defines one
    pub fn percentage(&self, dimension: &str, level: &str) -> Option<f64> {
        self.factor.as_ref()?.get(dimension)?.get(level).copied()
    }

    fn require(&self, value: Option<f64>, field: &'static str) -> Result<f64> {
        value.ok_or_else(|| CalcError::MissingField {
            plant: self.label().to_string(),
            field,
        })
    }
}

/// A plant paired with the number planted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropEntry {
    #[serde(rename = "crop")]
    pub plant: Plant,
    #[serde(rename = "numCrops")]
    pub num_crops: u32,
}

impl CropEntry {
    pub fn new(plant: Plant, num_crops: u32) -> Self {
        Self { plant, num_crops }
    }
}

/// An ordered collection of crop entries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Harvest {
    pub crops: Vec<CropEntry>,
}

impl Harvest {
    pub fn new(crops: Vec<CropEntry>) -> Self {
        Self { crops }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn push(&mut self, entry: CropEntry) {
        self.crops.push(entry);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CropEntry> {
        self.crops.iter()
    }

    pub fn len(&self) -> usize {
        self.crops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }
}

impl FromIterator<CropEntry> for Harvest {
    fn from_iter<I: IntoIterator<Item = CropEntry>>(iter: I) -> Self {
        Self {
            crops: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Harvest {
    type Item = &'a CropEntry;
    type IntoIter = std::slice::Iter<'a, CropEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.crops.iter()
    }
}

/// Active level per environment dimension for one calculation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvironmentFactors(BTreeMap<String, String>);

impl EnvironmentFactors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, dimension: impl Into<String>, level: impl Into<String>) -> Self {
        self.set(dimension, level);
        self
    }

    /// Set the active level of a dimension, returning the previous one
    pub fn set(
        &mut self,
        dimension: impl Into<String>,
        level: impl Into<String>,
    ) -> Option<String> {
        self.0.insert(dimension.into(), level.into())
    }

    pub fn level(&self, dimension: &str) -> Option<&str> {
        self.0.get(dimension).map(String::as_str)
    }

    /// (dimension, level) pairs in dimension order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(d, l)| (d.as_str(), l.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<K, V> FromIterator<(K, V)> for EnvironmentFactors
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Formats as `sun=low, wind=high`, the same form [`FromStr`] accepts
impl std::fmt::Display for EnvironmentFactors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (dimension, level)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", dimension, level)?;
        }
        Ok(())
    }
}

/// Parses `"sun=low, wind=high"`. Later pairs override earlier ones.
impl FromStr for EnvironmentFactors {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        let mut factors = Self::new();

        for pair in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (dimension, level) = pair.split_once('=').ok_or_else(|| {
                CalcError::InvalidEnvironment(format!("expected dimension=level, got '{}'", pair))
            })?;
            let (dimension, level) = (dimension.trim(), level.trim());

            if dimension.is_empty() || level.is_empty() {
                return Err(CalcError::InvalidEnvironment(format!(
                    "empty dimension or level in '{}'",
                    pair
                )));
            }
            factors.set(dimension, level);
        }

        Ok(factors)
    }
}
