use std::fmt;

use serde::{Deserialize, Serialize};

/// The five Lincolnshire stations covered by the dataset. The set is
/// closed: observations for any other station name are dropped at load
/// time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Station {
    BarkstonHeath,
    Scampton,
    Waddington,
    Cranwell,
    Coningsby,
}

impl Station {
    /// All known stations, in report output order.
    pub const ALL: [Station; 5] = [
        Station::BarkstonHeath,
        Station::Scampton,
        Station::Waddington,
        Station::Cranwell,
        Station::Coningsby,
    ];

    /// Parse a station identifier as it appears in the input file.
    /// Returns `None` for unknown names.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "BARKSTON_HEATH" => Some(Station::BarkstonHeath),
            "SCAMPTON" => Some(Station::Scampton),
            "WADDINGTON" => Some(Station::Waddington),
            "CRANWELL" => Some(Station::Cranwell),
            "CONINGSBY" => Some(Station::Coningsby),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Station::BarkstonHeath => "BARKSTON_HEATH",
            Station::Scampton => "SCAMPTON",
            Station::Waddington => "WADDINGTON",
            Station::Cranwell => "CRANWELL",
            Station::Coningsby => "CONINGSBY",
        }
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
