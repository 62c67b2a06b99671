use std::fmt;
use std::str::FromStr;

/// Kind of property a listing describes. Stored upper-case in the `ads.type` column,
/// where a CHECK constraint limits it to these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstateType {
    Apartment,
    House,
    Land,
}

impl EstateType {
    pub const ALL: [EstateType; 3] = [EstateType::Apartment, EstateType::House, EstateType::Land];

    pub fn as_str(&self) -> &'static str {
        match self {
            EstateType::Apartment => "APARTMENT",
            EstateType::House => "HOUSE",
            EstateType::Land => "LAND",
        }
    }
}

impl fmt::Display for EstateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EstateType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EstateType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown estate type: {s}"))
    }
}
