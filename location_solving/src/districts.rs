use covering::{CoverageInstance, DistanceMatrix};

/// Drive times in minutes between the eight administrative districts,
/// row = from, column = to.
const DRIVE_TIMES: [[f64; 8]; 8] = [
    [0.0, 10.0, 11.0, 13.0, 15.0, 16.0, 10.0, 17.0],
    [10.0, 0.0, 12.0, 14.0, 15.0, 13.0, 19.0, 16.0],
    [11.0, 12.0, 0.0, 9.0, 9.0, 10.0, 14.0, 12.0],
    [13.0, 14.0, 9.0, 0.0, 10.0, 9.0, 12.0, 11.0],
    [15.0, 15.0, 9.0, 10.0, 0.0, 10.0, 16.0, 18.0],
    [16.0, 13.0, 10.0, 9.0, 10.0, 0.0, 12.0, 9.0],
    [10.0, 19.0, 14.0, 12.0, 16.0, 12.0, 0.0, 14.0],
    [17.0, 16.0, 12.0, 11.0, 18.0, 9.0, 14.0, 0.0],
];

/// An emergency center must be reachable within ten minutes.
const RESPONSE_TIME_LIMIT: f64 = 10.0;

/// The eight-district emergency-center placement instance.
pub fn emergency_response_instance() -> CoverageInstance {
    let labels = (1..=DRIVE_TIMES.len()).map(|d| d.to_string()).collect();
    let rows = DRIVE_TIMES.iter().map(|row| row.to_vec()).collect();
    CoverageInstance::new(labels, DistanceMatrix::from_rows(rows), RESPONSE_TIME_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::emergency_response_instance;

    #[test]
    fn instance_matches_the_drive_time_table() {
        let instance = emergency_response_instance();
        assert_eq!(instance.num_points(), 8);
        assert_eq!(instance.threshold(), 10.0);
        assert_eq!(instance.label(0), "1");
        assert_eq!(instance.label(7), "8");
        assert_eq!(instance.distance(1, 6), 19.0);
        assert_eq!(instance.distance(6, 1), 19.0);
    }
}
