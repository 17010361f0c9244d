use core::fmt;
use core::num::IntErrorKind;
use core::str::FromStr;

use crate::Error;

/// Largest accepted radius.
///
/// The binomial row for radius `r` sums to `2^(2r)`; `f64` overflows at
/// `2^1024`, so anything from 512 upwards cannot be normalized.
pub const MAX_RADIUS: usize = 500;

/// Half-width of a kernel in samples, validated to `0..=MAX_RADIUS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Radius(usize);

impl Radius {
    pub fn new(radius: i64) -> Result<Self, Error> {
        if radius < 0 {
            return Err(Error::NegativeRadius(radius));
        }
        if radius as u64 > MAX_RADIUS as u64 {
            return Err(Error::RadiusTooLarge {
                radius,
                max: MAX_RADIUS,
            });
        }
        Ok(Self(radius as usize))
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0
    }

    /// Number of taps in the full symmetric kernel, `2*radius + 1`.
    #[inline]
    pub fn full_len(self) -> usize {
        2 * self.0 + 1
    }

    /// Continuous-domain half-width covered by the discrete kernel.
    #[inline]
    pub fn effective(self) -> f64 {
        self.0 as f64 + 0.5
    }
}

impl FromStr for Radius {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Integers outside `i64` saturate so they get the range errors.
        let value = match s.trim().parse::<i64>() {
            Ok(value) => value,
            Err(err) => match err.kind() {
                IntErrorKind::PosOverflow => i64::MAX,
                IntErrorKind::NegOverflow => i64::MIN,
                _ => return Err(Error::InvalidRadius(s.to_owned())),
            },
        };
        Self::new(value)
    }
}

impl TryFrom<i64> for Radius {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Radius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{MAX_RADIUS, Radius};
    use crate::Error;

    #[test]
    fn parses_plain_signed_and_padded_integers() {
        assert_eq!("0".parse::<Radius>().unwrap().get(), 0);
        assert_eq!("+7".parse::<Radius>().unwrap().get(), 7);
        assert_eq!(" 12\n".parse::<Radius>().unwrap().get(), 12);
    }

    #[test]
    fn rejects_non_integers() {
        for raw in ["", "abc", "1.5", "2e3", "0x10"] {
            assert_eq!(
                raw.parse::<Radius>(),
                Err(Error::InvalidRadius(raw.to_owned())),
                "input {raw:?}"
            );
        }
    }

    #[test]
    fn rejects_negative_and_oversized() {
        assert_eq!("-1".parse::<Radius>(), Err(Error::NegativeRadius(-1)));
        assert_eq!(
            Radius::new(MAX_RADIUS as i64 + 1),
            Err(Error::RadiusTooLarge {
                radius: MAX_RADIUS as i64 + 1,
                max: MAX_RADIUS
            })
        );
        assert_eq!(Radius::new(MAX_RADIUS as i64).unwrap().get(), MAX_RADIUS);
    }

    #[test]
    fn effective_radius_adds_half_sample() {
        let r = Radius::new(3).unwrap();
        assert_eq!(r.effective(), 3.5);
        assert_eq!(r.full_len(), 7);
        assert_eq!(Radius::default().effective(), 0.5);
    }

    #[test]
    fn integers_beyond_i64_are_range_errors() {
        assert_eq!(
            "99999999999999999999".parse::<Radius>(),
            Err(Error::RadiusTooLarge {
                radius: i64::MAX,
                max: MAX_RADIUS
            })
        );
        assert_eq!(
            "-99999999999999999999".parse::<Radius>(),
            Err(Error::NegativeRadius(i64::MIN))
        );
    }
}
