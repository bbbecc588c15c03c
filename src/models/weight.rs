//! Edge weight derivation from raw road measurements.

/// Share of the weight attributed to distance (km).
const DISTANCE_FACTOR: f64 = 0.2;
/// Share attributed to fuel used, `distance / 100 * consumption` (liters).
const FUEL_FACTOR: f64 = 0.2;
/// Share attributed to travel time (minutes).
const TIME_FACTOR: f64 = 0.6;

/// Computes the weight of a road from its distance, travel time, and fuel
/// consumption per 100 km, rounded to two decimals.
///
/// ```text
/// weight = round(0.2·distance + 0.2·(distance/100·consumption) + 0.6·time, 2)
/// ```
///
/// # Examples
///
/// ```
/// use road_graph::models::road_weight;
///
/// assert_eq!(road_weight(5.5, 8.0, 8.5), 5.99);
/// assert_eq!(road_weight(12.5, 17.0, 7.0), 12.88);
/// ```
pub fn road_weight(distance: f64, time: f64, consumption: f64) -> f64 {
    let raw = (distance * DISTANCE_FACTOR)
        + (((distance / 100.0) * consumption) * FUEL_FACTOR)
        + (time * TIME_FACTOR);
    round2(raw)
}

/// Rounds to two decimal places, halves away from zero.
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_road_weights() {
        let cases = [
            ((5.5, 8.0, 8.5), 5.99),
            ((5.1, 7.0, 6.8), 5.29),
            ((12.5, 17.0, 7.0), 12.88),
            ((7.7, 12.0, 6.7), 8.84),
            ((10.9, 14.0, 4.8), 10.68),
            ((11.2, 14.0, 9.2), 10.85),
            ((8.3, 13.0, 5.5), 9.55),
            ((5.6, 8.0, 5.2), 5.98),
            ((5.4, 8.0, 7.1), 5.96),
            ((6.0, 8.0, 5.9), 6.07),
            ((7.5, 11.0, 5.3), 8.18),
            ((11.2, 14.0, 7.5), 10.81),
            ((3.6, 6.0, 6.3), 4.37),
        ];
        for ((d, t, c), expected) in cases {
            assert_eq!(road_weight(d, t, c), expected, "road ({d}, {t}, {c})");
        }
    }

    #[test]
    fn test_zero_inputs() {
        assert_eq!(road_weight(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_time_only() {
        assert_eq!(road_weight(0.0, 10.0, 7.0), 6.0);
    }
}
