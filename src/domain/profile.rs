//! Household profiles and the fixed parameter tables attached to them.
//!
//! A profile is a closed category: base daily consumption, base hourly
//! consumption, and the per-appliance kWh shares are all looked up by
//! variant, never by open string keys. Unknown profile names fail to parse
//! instead of silently mapping to a default.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Household category driving all base-consumption lookups
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
pub enum HouseholdProfile {
    #[serde(rename = "Small Apartment")]
    #[strum(serialize = "Small Apartment")]
    SmallApartment,
    #[serde(rename = "Medium House")]
    #[strum(serialize = "Medium House")]
    MediumHouse,
    #[serde(rename = "Large House")]
    #[strum(serialize = "Large House")]
    LargeHouse,
    #[serde(rename = "Mansion")]
    #[strum(serialize = "Mansion")]
    Mansion,
}

impl HouseholdProfile {
    /// Base daily consumption in kWh for this profile
    pub fn base_daily_kwh(&self) -> f64 {
        match self {
            HouseholdProfile::SmallApartment => 15.0,
            HouseholdProfile::MediumHouse => 25.0,
            HouseholdProfile::LargeHouse => 45.0,
            HouseholdProfile::Mansion => 80.0,
        }
    }

    /// Base hourly consumption in kWh, before the time-of-day pattern
    pub fn base_hourly_kwh(&self) -> f64 {
        match self {
            HouseholdProfile::SmallApartment => 0.8,
            HouseholdProfile::MediumHouse => 1.2,
            HouseholdProfile::LargeHouse => 2.1,
            HouseholdProfile::Mansion => 3.5,
        }
    }

    /// Named sub-loads and their base daily kWh shares.
    ///
    /// Larger homes carry extra loads (pool/spa, security) that the smaller
    /// categories do not have, so the tables differ in length as well as
    /// magnitude.
    pub fn appliances(&self) -> &'static [(&'static str, f64)] {
        match self {
            HouseholdProfile::SmallApartment => &[
                ("HVAC System", 8.5),
                ("Water Heater", 3.2),
                ("Refrigerator", 1.8),
                ("Washer/Dryer", 1.5),
                ("Lighting", 1.2),
                ("Electronics", 2.1),
                ("Cooking", 1.8),
                ("Other", 1.0),
            ],
            HouseholdProfile::MediumHouse => &[
                ("HVAC System", 12.5),
                ("Water Heater", 4.8),
                ("Refrigerator", 2.2),
                ("Washer/Dryer", 2.8),
                ("Lighting", 2.5),
                ("Electronics", 3.5),
                ("Cooking", 2.5),
                ("Other", 1.8),
            ],
            HouseholdProfile::LargeHouse => &[
                ("HVAC System", 18.2),
                ("Water Heater", 7.1),
                ("Refrigerator", 3.1),
                ("Washer/Dryer", 4.2),
                ("Lighting", 4.8),
                ("Electronics", 5.2),
                ("Cooking", 3.8),
                ("Pool/Spa", 3.5),
                ("Other", 2.8),
            ],
            HouseholdProfile::Mansion => &[
                ("HVAC System", 28.5),
                ("Water Heater", 10.2),
                ("Refrigerator", 4.5),
                ("Washer/Dryer", 6.8),
                ("Lighting", 8.2),
                ("Electronics", 7.8),
                ("Cooking", 5.5),
                ("Pool/Spa", 8.2),
                ("Security System", 2.1),
                ("Other", 4.2),
            ],
        }
    }
}

/// Appliance efficiency label, drawn when synthesizing breakdown rows
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
pub enum EfficiencyClass {
    #[serde(rename = "A+++")]
    #[strum(serialize = "A+++")]
    APlusPlusPlus,
    #[serde(rename = "A++")]
    #[strum(serialize = "A++")]
    APlusPlus,
    #[serde(rename = "A+")]
    #[strum(serialize = "A+")]
    APlus,
    A,
    B,
    C,
}

/// Supported supply mixes, exposed to front-ends via the config endpoint
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
pub enum EnergySource {
    #[serde(rename = "Grid Electricity")]
    #[strum(serialize = "Grid Electricity")]
    GridElectricity,
    #[serde(rename = "Solar + Grid")]
    #[strum(serialize = "Solar + Grid")]
    SolarGrid,
    #[serde(rename = "Solar Only")]
    #[strum(serialize = "Solar Only")]
    SolarOnly,
    #[serde(rename = "Wind + Grid")]
    #[strum(serialize = "Wind + Grid")]
    WindGrid,
}
