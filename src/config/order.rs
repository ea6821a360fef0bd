use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Presentation order for a campaign's donation list.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, Hash, ValueEnum, PartialEq, Eq, Default)]
pub enum DonationOrder {
    /// Most recent donations first
    #[default]
    Newest,
    /// Largest amounts first
    Top,
}

impl fmt::Display for DonationOrder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Newest => write!(f, "newest"),
            Self::Top => write!(f, "top"),
        }
    }
}
