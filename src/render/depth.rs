/// Maps an event depth in kilometers to its marker color.
///
/// Buckets are half-open on the left, so a depth sitting exactly on a
/// boundary belongs to the next bucket (depth 10 is "yellow", not "green").
/// NaN fails every `<` comparison and lands in "red".
pub fn depth_color(depth: f64) -> &'static str {
    if depth < 10.0 {
        "green"
    } else if depth < 30.0 {
        "yellow"
    } else if depth < 50.0 {
        "gold"
    } else if depth < 70.0 {
        "orange"
    } else if depth < 90.0 {
        "orangered"
    } else {
        "red"
    }
}

/// Fixed legend table, in bucket order. Legend rendering derives from this
/// table only, never from fetched data.
pub const DEPTH_LEGEND: [(&str, &str); 6] = [
    ("-10-10", "green"),
    ("10-30", "yellow"),
    ("30-50", "gold"),
    ("50-70", "orange"),
    ("70-90", "orangered"),
    ("90+", "red"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_ranges() {
        assert_eq!(depth_color(-10.0), "green");
        assert_eq!(depth_color(0.0), "green");
        assert_eq!(depth_color(9.9), "green");
        assert_eq!(depth_color(15.0), "yellow");
        assert_eq!(depth_color(29.9), "yellow");
        assert_eq!(depth_color(35.0), "gold");
        assert_eq!(depth_color(55.0), "orange");
        assert_eq!(depth_color(75.0), "orangered");
        assert_eq!(depth_color(95.0), "red");
        assert_eq!(depth_color(700.0), "red");
    }

    #[test]
    fn test_boundary_belongs_to_next_bucket() {
        assert_eq!(depth_color(10.0), "yellow");
        assert_eq!(depth_color(30.0), "gold");
        assert_eq!(depth_color(50.0), "orange");
        assert_eq!(depth_color(70.0), "orangered");
        assert_eq!(depth_color(90.0), "red");
    }

    #[test]
    fn test_non_finite_inputs() {
        assert_eq!(depth_color(f64::NAN), "red");
        assert_eq!(depth_color(f64::INFINITY), "red");
        assert_eq!(depth_color(f64::NEG_INFINITY), "green");
    }

    #[test]
    fn test_legend_matches_classifier() {
        // Sample one depth inside each bucket; it must map to the legend
        // color at the same index.
        let samples = [0.0, 20.0, 40.0, 60.0, 80.0, 100.0];
        for (sample, (_, color)) in samples.iter().zip(DEPTH_LEGEND.iter()) {
            assert_eq!(depth_color(*sample), *color);
        }
    }
}
