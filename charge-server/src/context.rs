//! Chat context assembly.
//!
//! Formats top-ranked stations into the short text block that grounds the
//! assistant's replies.

use crate::recommend::ScoredStation;

/// Number of stations included in chat context.
pub const DEFAULT_TOP_N: usize = 3;

/// Format the best `top_n` ranked stations as a newline-delimited list.
///
/// Each line is 1-indexed: `"1. Station Title - 2.3km away"`, with the
/// distance formatted to one decimal place. Returns an empty string when
/// `ranked` is empty; the caller omits the context block entirely in that
/// case.
pub fn build_context(ranked: &[ScoredStation], top_n: usize) -> String {
    let mut out = String::new();

    for (i, item) in ranked.iter().take(top_n).enumerate() {
        out.push_str(&format!(
            "{}. {} - {:.1}km away\n",
            i + 1,
            item.station.title,
            item.distance_km
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Station, UNKNOWN_DISTANCE_KM, UNKNOWN_LABEL};

    fn scored(title: &str, distance_km: f64) -> ScoredStation {
        ScoredStation {
            station: Station {
                title: title.to_string(),
                address_line: UNKNOWN_LABEL.to_string(),
                town: UNKNOWN_LABEL.to_string(),
                distance_km,
                connections: Vec::new(),
                is_operational: false,
                status: UNKNOWN_LABEL.to_string(),
            },
            score: 0,
            distance_km,
        }
    }

    #[test]
    fn empty_ranking_yields_empty_string() {
        assert_eq!(build_context(&[], DEFAULT_TOP_N), "");
    }

    #[test]
    fn formats_one_indexed_lines() {
        let ranked = vec![scored("Alpha", 1.23), scored("Beta", 10.0)];

        let context = build_context(&ranked, DEFAULT_TOP_N);

        assert_eq!(context, "1. Alpha - 1.2km away\n2. Beta - 10.0km away\n");
    }

    #[test]
    fn truncates_to_top_n() {
        let ranked = vec![scored("A", 1.0), scored("B", 2.0), scored("C", 3.0)];

        let context = build_context(&ranked, 2);

        assert_eq!(context.lines().count(), 2);
        assert!(!context.contains("C"));
    }

    #[test]
    fn short_ranking_produces_fewer_lines() {
        let ranked = vec![scored("Only", 4.0)];

        let context = build_context(&ranked, DEFAULT_TOP_N);

        assert_eq!(context.lines().count(), 1);
    }

    #[test]
    fn unknown_station_renders_with_fallback_title() {
        let ranked = vec![scored(UNKNOWN_LABEL, UNKNOWN_DISTANCE_KM)];

        let context = build_context(&ranked, DEFAULT_TOP_N);

        assert_eq!(context, "1. Unknown - 999.0km away\n");
    }
}
