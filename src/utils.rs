use shot_tracker::clamp_shot_count;

/// Parse a slider value string into a shell count within `[0, MAX_SHOTS]`.
///
/// The range input already enforces the bounds in the browser, but the value
/// crosses the DOM boundary as a string, so clamp again after parsing.
pub fn parse_shot_count(input: &str) -> Option<usize> {
    input.trim().parse::<usize>().ok().map(clamp_shot_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shot_tracker::defaults::MAX_SHOTS;

    #[test]
    fn parses_plain_counts() {
        assert_eq!(parse_shot_count("0"), Some(0));
        assert_eq!(parse_shot_count("7"), Some(7));
        assert_eq!(parse_shot_count(" 12 "), Some(12));
    }

    #[test]
    fn clamps_above_slider_max() {
        assert_eq!(parse_shot_count("13"), Some(MAX_SHOTS));
        assert_eq!(parse_shot_count("9999"), Some(MAX_SHOTS));
    }

    #[test]
    fn rejects_non_numeric_input() {
        assert_eq!(parse_shot_count(""), None);
        assert_eq!(parse_shot_count("-1"), None);
        assert_eq!(parse_shot_count("3.5"), None);
        assert_eq!(parse_shot_count("live"), None);
    }
}
