use crate::io::DisplayOptions;
use crate::roi::compute_roi;

/// Parses a CLI number, treating anything unparseable as NaN so it flows
/// into the not-applicable path instead of failing argument parsing.
pub fn parse_lenient(value: &str) -> f64 {
    value.trim().parse::<f64>().unwrap_or(f64::NAN)
}

pub fn format_roi_command(revenue: &str, time_taken: &str, options: &DisplayOptions) -> String {
    let roi = compute_roi(parse_lenient(revenue), parse_lenient(time_taken));
    log::debug!("roi({}, {}) = {:?}", revenue, time_taken, roi);
    roi.display(options.precision, &options.na_label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roi_command_output() {
        let options = DisplayOptions::default();
        assert_eq!(format_roi_command("200", "10", &options), "20.0");
        assert_eq!(format_roi_command("100", "-5", &options), "N/A");
        assert_eq!(format_roi_command("NaN", "10", &options), "N/A");
        assert_eq!(format_roi_command("abc", "10", &options), "N/A");
        assert_eq!(format_roi_command(" 7 ", "2", &options), "3.5");
    }

    #[test]
    fn test_parse_lenient() {
        assert_eq!(parse_lenient("1.5"), 1.5);
        assert!(parse_lenient("").is_nan());
        assert!(parse_lenient("inf").is_infinite());
    }
}
