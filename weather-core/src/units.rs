//! Unit suffixes and compass directions.

use crate::model::UnitSelection;

/// One label per 22.5° sector, starting at 0°.
///
/// N only owns the first and last sector; every other label owns two
/// consecutive sectors. Output compatibility depends on this exact layout.
const DIRECTIONS: [&str; 16] = [
    "N", "NE", "NE", "E", "E", "SE", "SE", "S", "S", "SW", "SW", "W", "W", "NW", "NW", "N",
];

/// Map a wind bearing in `[0, 359]` to a compass label.
///
/// Callers normalize with [`normalize_degrees`] first.
pub fn compass_direction(degrees: u16) -> &'static str {
    let index = (f64::from(degrees) / 22.5) as usize % DIRECTIONS.len();
    DIRECTIONS[index]
}

pub fn normalize_degrees(degrees: i64) -> u16 {
    // rem_euclid keeps the result in 0..360, which always fits.
    degrees.rem_euclid(360) as u16
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitSuffixes {
    pub temperature: &'static str,
    pub speed: &'static str,
}

pub fn suffixes(units: UnitSelection) -> UnitSuffixes {
    match units {
        UnitSelection::Imperial => UnitSuffixes { temperature: "°F", speed: "mph" },
        UnitSelection::Metric => UnitSuffixes { temperature: "°C", speed: "m/s" },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_bearings() {
        assert_eq!(compass_direction(0), "N");
        assert_eq!(compass_direction(22), "N");
        assert_eq!(compass_direction(23), "NE");
        assert_eq!(compass_direction(45), "NE");
        assert_eq!(compass_direction(90), "E");
        assert_eq!(compass_direction(270), "W");
        assert_eq!(compass_direction(337), "NW");
        assert_eq!(compass_direction(338), "N");
        assert_eq!(compass_direction(359), "N");
    }

    #[test]
    fn sector_boundaries() {
        let cases = [
            (11, "N"),
            (22, "N"),
            (23, "NE"),
            (67, "NE"),
            (68, "E"),
            (112, "E"),
            (113, "SE"),
            (157, "SE"),
            (158, "S"),
            (202, "S"),
            (203, "SW"),
            (247, "SW"),
            (248, "W"),
            (292, "W"),
            (293, "NW"),
            (337, "NW"),
            (338, "N"),
        ];

        for (degrees, expected) in cases {
            assert_eq!(compass_direction(degrees), expected, "bearing {degrees}");
        }
    }

    #[test]
    fn normalize_wraps_out_of_range_bearings() {
        assert_eq!(normalize_degrees(360), 0);
        assert_eq!(normalize_degrees(450), 90);
        assert_eq!(normalize_degrees(-90), 270);
        assert_eq!(compass_direction(normalize_degrees(720 + 90)), "E");
    }

    #[test]
    fn suffixes_per_unit_system() {
        assert_eq!(
            suffixes(UnitSelection::Imperial),
            UnitSuffixes { temperature: "°F", speed: "mph" }
        );
        assert_eq!(
            suffixes(UnitSelection::Metric),
            UnitSuffixes { temperature: "°C", speed: "m/s" }
        );
        assert_eq!(
            suffixes(UnitSelection::from_selector("unknown")),
            suffixes(UnitSelection::Metric)
        );
    }
}
