//! Statistics output types.

use serde::{Deserialize, Serialize};

/// Summary statistics folded from the workout history.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsSummary {
    /// Number of recorded workouts
    pub total_workouts: usize,
    /// Lifetime distance in km
    pub total_distance_km: f64,
    /// Lifetime workout time in seconds
    pub total_duration_seconds: u64,
    /// Average distance per workout in km (0 when the history is empty)
    pub average_distance_km: f64,
    /// Tokens earned in the trailing 7x24h window
    pub weekly_tokens: f64,
    /// Lifetime tokens per km (0 when no distance is recorded)
    pub tokens_per_km: f64,
    /// Urban riding grade derived from tokens per km
    pub grade: UrbanGrade,
    /// Ecological estimates derived from lifetime distance
    pub ecological: EcologicalImpact,
    /// Consecutive calendar days with at least one workout
    pub streak_days: u32,
}

/// Stepped classification of riding efficiency (tokens earned per km).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UrbanGrade {
    /// 1.0 tokens/km and above
    APlus,
    /// 0.8 to 1.0 tokens/km
    A,
    /// 0.6 to 0.8 tokens/km
    B,
    /// 0.4 to 0.6 tokens/km
    C,
    /// Below 0.4 tokens/km, or no distance recorded
    #[default]
    NotRated,
}

impl UrbanGrade {
    /// Classify a tokens-per-km ratio.
    pub fn from_tokens_per_km(tokens_per_km: f64) -> Self {
        if tokens_per_km >= 1.0 {
            UrbanGrade::APlus
        } else if tokens_per_km >= 0.8 {
            UrbanGrade::A
        } else if tokens_per_km >= 0.6 {
            UrbanGrade::B
        } else if tokens_per_km >= 0.4 {
            UrbanGrade::C
        } else {
            UrbanGrade::NotRated
        }
    }
}

impl std::fmt::Display for UrbanGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UrbanGrade::APlus => write!(f, "A+"),
            UrbanGrade::A => write!(f, "A"),
            UrbanGrade::B => write!(f, "B"),
            UrbanGrade::C => write!(f, "C"),
            UrbanGrade::NotRated => write!(f, "N/A"),
        }
    }
}

/// Ecological estimates: what the recorded rides replaced in car travel.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EcologicalImpact {
    /// CO2 saved in kg
    pub co2_saved_kg: f64,
    /// Equivalent number of trees planted
    pub trees_equivalent: u32,
    /// Fuel saved in liters
    pub fuel_saved_liters: f64,
}

/// CO2 saved per km not driven, in kg.
const CO2_KG_PER_KM: f64 = 0.12;

/// Yearly CO2 absorption of one tree, in kg.
const CO2_KG_PER_TREE: f64 = 2.4;

/// Fuel saved per km not driven, in liters.
const FUEL_LITERS_PER_KM: f64 = 0.08;

impl EcologicalImpact {
    /// Derive estimates from a lifetime distance in km.
    pub fn from_distance(total_distance_km: f64) -> Self {
        let co2_saved_kg = total_distance_km * CO2_KG_PER_KM;
        Self {
            co2_saved_kg,
            trees_equivalent: (co2_saved_kg / CO2_KG_PER_TREE).floor() as u32,
            fuel_saved_liters: total_distance_km * FUEL_LITERS_PER_KM,
        }
    }
}
