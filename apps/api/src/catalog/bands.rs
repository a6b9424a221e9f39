//! Salary band formatting. Bands are stored and compared as raw integers
//! (thousands) and displayed as "120k", with everything from the top band up
//! collapsed to "350k+".

/// Bands at or above this value display as an open-ended range.
pub const TOP_BAND: i32 = 350;

pub fn format_salary_band(band: i32) -> String {
    if band >= TOP_BAND {
        format!("{TOP_BAND}k+")
    } else {
        format!("{band}k")
    }
}

/// Parses a band back to its numeric value. Accepts the display forms
/// ("120k", "350k+") as well as a bare integer ("120"). Returns `None` for
/// blank or malformed input.
pub fn parse_salary_band(raw: &str) -> Option<i32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .trim_end_matches('+')
        .trim_end_matches(['k', 'K'])
        .parse::<i32>()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_regular_band() {
        assert_eq!(format_salary_band(60), "60k");
        assert_eq!(format_salary_band(120), "120k");
    }

    #[test]
    fn test_format_top_band_is_open_ended() {
        assert_eq!(format_salary_band(350), "350k+");
        assert_eq!(format_salary_band(500), "350k+");
    }

    #[test]
    fn test_parse_display_forms() {
        assert_eq!(parse_salary_band("120k"), Some(120));
        assert_eq!(parse_salary_band("350k+"), Some(350));
        assert_eq!(parse_salary_band("120"), Some(120));
        assert_eq!(parse_salary_band(" 80k "), Some(80));
    }

    #[test]
    fn test_parse_rejects_blank_and_garbage() {
        assert_eq!(parse_salary_band(""), None);
        assert_eq!(parse_salary_band("   "), None);
        assert_eq!(parse_salary_band("competitive"), None);
    }

    #[test]
    fn test_round_trip_below_top_band() {
        for band in [45, 60, 120, 349] {
            assert_eq!(parse_salary_band(&format_salary_band(band)), Some(band));
        }
    }
}
