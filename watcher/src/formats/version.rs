//! Dotted version strings broken into numeric parts.

use crate::models::mod_file::VersionParts;

/// Split `version` on `.` into major, minor and patch.
///
/// A segment that is missing or not a base-10 integer counts as 0, so
/// `"1.20"` is `1.20.0` and `"1.x.2"` is `1.0.2`. Anything after the third
/// segment is ignored.
pub fn parse_version(version: &str) -> VersionParts {
    let mut segments = version.split('.').map(parse_segment);

    VersionParts {
        major: segments.next().unwrap_or(0),
        minor: segments.next().unwrap_or(0),
        patch: segments.next().unwrap_or(0),
    }
}

fn parse_segment(segment: &str) -> u32 {
    segment.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(major: u32, minor: u32, patch: u32) -> VersionParts {
        VersionParts { major, minor, patch }
    }

    #[test]
    fn test_three_numeric_segments() {
        assert_eq!(parse_version("1.20.1"), parts(1, 20, 1));
    }

    #[test]
    fn test_non_numeric_segment_defaults_to_zero() {
        assert_eq!(parse_version("1.x.2"), parts(1, 0, 2));
        assert_eq!(parse_version("2.3.4b"), parts(2, 3, 0));
    }

    #[test]
    fn test_missing_segments_default_to_zero() {
        assert_eq!(parse_version("1.20"), parts(1, 20, 0));
        assert_eq!(parse_version("7"), parts(7, 0, 0));
        assert_eq!(parse_version(""), parts(0, 0, 0));
    }

    #[test]
    fn test_extra_segments_ignored() {
        assert_eq!(parse_version("1.2.3.4"), parts(1, 2, 3));
    }

    #[test]
    fn test_negative_segment_is_not_a_version_number() {
        assert_eq!(parse_version("1.-2.3"), parts(1, 0, 3));
    }
}
