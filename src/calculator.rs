//! Yield and economics calculator logic

use tracing::{debug, trace};

use crate::error::Result;
use crate::models::{CropEntry, EnvironmentFactors, Harvest, Plant};

/// Calculate the yield of a single plant under the given environment
///
/// Each environment dimension the plant has a factor table for contributes a
/// modifier of `1 + percentage / 100`. Dimensions or levels the plant does not
/// define are skipped. Without an environment the base yield is returned.
pub fn compute_plant_yield(plant: &Plant, environment: Option<&EnvironmentFactors>) -> Result<f64> {
    let base_yield = plant.require_yield()?;

    let Some(environment) = environment else {
        return Ok(base_yield);
    };

    let mut multiplier = 1.0;
    for (dimension, level) in environment.iter() {
        match plant.percentage(dimension, level) {
            Some(percentage) => {
                let modifier = 1.0 + percentage / 100.0;
                trace!(
                    plant = plant.label(),
                    dimension,
                    level,
                    percentage,
                    modifier,
                    "applying environment modifier"
                );
                multiplier *= modifier;
            }
            None => trace!(
                plant = plant.label(),
                dimension,
                level,
                "no factor for environment level, skipping"
            ),
        }
    }

    Ok(base_yield * multiplier)
}

/// Yield of one plant times the number planted
pub fn compute_crop_yield(entry: &CropEntry, environment: Option<&EnvironmentFactors>) -> Result<f64> {
    Ok(compute_plant_yield(&entry.plant, environment)? * f64::from(entry.num_crops))
}

/// Sum of crop yields over the whole harvest
pub fn compute_total_yield(harvest: &Harvest, environment: Option<&EnvironmentFactors>) -> Result<f64> {
    let mut total = 0.0;
    for entry in harvest {
        total += compute_crop_yield(entry, environment)?;
    }
    Ok(total)
}

/// Planting cost of a crop entry. Costs are per plant and ignore the environment.
pub fn compute_crop_cost(entry: &CropEntry) -> Result<f64> {
    Ok(entry.plant.require_cost()? * f64::from(entry.num_crops))
}

pub fn compute_total_cost(harvest: &Harvest) -> Result<f64> {
    let mut total = 0.0;
    for entry in harvest {
        total += compute_crop_cost(entry)?;
    }
    Ok(total)
}

/// Sell price times the environment-adjusted crop yield
pub fn compute_crop_revenue(
    entry: &CropEntry,
    environment: Option<&EnvironmentFactors>,
) -> Result<f64> {
    let sell_price = entry.plant.require_sell_price()?;
    Ok(sell_price * compute_crop_yield(entry, environment)?)
}

pub fn compute_total_revenue(
    harvest: &Harvest,
    environment: Option<&EnvironmentFactors>,
) -> Result<f64> {
    let mut total = 0.0;
    for entry in harvest {
        total += compute_crop_revenue(entry, environment)?;
    }
    Ok(total)
}

/// Revenue minus cost; negative when the crop loses money
pub fn compute_crop_profit(
    entry: &CropEntry,
    environment: Option<&EnvironmentFactors>,
) -> Result<f64> {
    Ok(compute_crop_revenue(entry, environment)? - compute_crop_cost(entry)?)
}

pub fn compute_total_profit(
    harvest: &Harvest,
    environment: Option<&EnvironmentFactors>,
) -> Result<f64> {
    let mut total = 0.0;
    for entry in harvest {
        total += compute_crop_profit(entry, environment)?;
    }
    Ok(total)
}

/// Figures for one crop entry of a harvest
#[derive(Debug, Clone, PartialEq)]
pub struct CropLine {
    pub plant: String,
    pub num_crops: u32,
    pub crop_yield: f64,
    pub cost: f64,
    pub revenue: f64,
    pub profit: f64,
}

/// Summary of a harvest calculation
#[derive(Debug, Clone, PartialEq)]
pub struct HarvestSummary {
    pub environment: Option<EnvironmentFactors>,
    pub crops: Vec<CropLine>,
    pub total_yield: f64,
    pub total_cost: f64,
    pub total_revenue: f64,
    pub total_profit: f64,
}

/// Generate a per-crop and total summary of a harvest
///
/// Every plant needs a yield, cost and sell price.
pub fn summarize_harvest(
    harvest: &Harvest,
    environment: Option<&EnvironmentFactors>,
) -> Result<HarvestSummary> {
    let mut crops = Vec::with_capacity(harvest.len());
    let mut total_yield = 0.0;
    let mut total_cost = 0.0;
    let mut total_revenue = 0.0;
    let mut total_profit = 0.0;

    for entry in harvest {
        let line = CropLine {
            plant: entry.plant.label().to_string(),
            num_crops: entry.num_crops,
            crop_yield: compute_crop_yield(entry, environment)?,
            cost: compute_crop_cost(entry)?,
            revenue: compute_crop_revenue(entry, environment)?,
            profit: compute_crop_profit(entry, environment)?,
        };

        total_yield += line.crop_yield;
        total_cost += line.cost;
        total_revenue += line.revenue;
        total_profit += line.profit;
        crops.push(line);
    }

    debug!(
        crops = crops.len(),
        total_yield, total_cost, total_revenue, total_profit, "summarized harvest"
    );

    Ok(HarvestSummary {
        environment: environment.cloned(),
        crops,
        total_yield,
        total_cost,
        total_revenue,
        total_profit,
    })
}

impl std::fmt::Display for HarvestSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Harvest Summary ===")?;
        match &self.environment {
            Some(env) if !env.is_empty() => writeln!(f, "Environment: {}", env)?,
            _ => writeln!(f, "Environment: none")?,
        }
        writeln!(f)?;

        writeln!(f, "Crops:")?;
        for line in &self.crops {
            writeln!(
                f,
                "  {}x {:<12} yield {:>10.2}  cost {:>10.2}  revenue {:>10.2}  profit {:>10.2}",
                line.num_crops, line.plant, line.crop_yield, line.cost, line.revenue, line.profit
            )?;
        }
        writeln!(f)?;

        writeln!(f, "Totals:")?;
        writeln!(f, "  Yield:   {:.2}", self.total_yield)?;
        writeln!(f, "  Cost:    {:.2}", self.total_cost)?;
        writeln!(f, "  Revenue: {:.2}", self.total_revenue)?;
        writeln!(f, "  Profit:  {:.2}", self.total_profit)?;

        Ok(())
    }
}
