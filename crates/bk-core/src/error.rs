use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    InvalidRadius(String),
    NegativeRadius(i64),
    RadiusTooLarge { radius: i64, max: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRadius(raw) => write!(f, "radius is not an integer: {raw:?}"),
            Self::NegativeRadius(radius) => {
                write!(f, "radius must be non-negative, got {radius}")
            }
            Self::RadiusTooLarge { radius, max } => {
                write!(f, "radius {radius} exceeds the maximum of {max}")
            }
        }
    }
}

impl std::error::Error for Error {}
