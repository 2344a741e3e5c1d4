use std::fmt;

use serde::{Serialize, Serializer};

use crate::errors::{CustomResult, InvalidArgumentSnafu};

/// Publication status of a results page, in probing priority order.
#[derive(Serialize, PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum StatusTier {
    Official,
    Provisional,
    PointsStanding,
}

/// Bike class of a race. Only the 250 and 450 classes are published.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum VehicleClass {
    Class250,
    Class450,
}

impl VehicleClass {
    pub fn from_number(number: u32) -> CustomResult<VehicleClass> {
        match number {
            250 => Ok(VehicleClass::Class250),
            450 => Ok(VehicleClass::Class450),
            other => InvalidArgumentSnafu {
                message: format!("'class' must be 250 or 450; got {other}"),
            }
            .fail(),
        }
    }

    pub fn number(&self) -> u32 {
        match self {
            VehicleClass::Class250 => 250,
            VehicleClass::Class450 => 450,
        }
    }

    /// # results file name
    /// the file name of the page that publishes this class at the given tier
    pub fn file_name(&self, tier: StatusTier) -> &'static str {
        match (self, tier) {
            (VehicleClass::Class250, StatusTier::Official) => "S2F1PRESS.html",
            (VehicleClass::Class450, StatusTier::Official) => "S1F1PRESS.html",
            (VehicleClass::Class250, StatusTier::Provisional) => "S2F1RES.html",
            (VehicleClass::Class450, StatusTier::Provisional) => "S1F1RES.html",
            (VehicleClass::Class250, StatusTier::PointsStanding) => "S2F1POINTS.html",
            (VehicleClass::Class450, StatusTier::PointsStanding) => "S1F1POINTS.html",
        }
    }
}

impl fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl Serialize for VehicleClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.number())
    }
}
