use super::model::{Sighting, SightingDataset};

// ---------------------------------------------------------------------------
// Bucket filters: mutually exclusive named ranges over year / duration
// ---------------------------------------------------------------------------

/// Date-range buckets, disjoint and exhaustive over parseable years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateBucket {
    #[default]
    All,
    /// 1940 ≤ year < 1980
    Early,
    /// 1980 ≤ year < 2000
    Mid,
    /// year ≥ 2000
    Recent,
}

impl DateBucket {
    pub const ALL: [DateBucket; 4] = [
        DateBucket::All,
        DateBucket::Early,
        DateBucket::Mid,
        DateBucket::Recent,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DateBucket::All => "All years",
            DateBucket::Early => "1940–1980",
            DateBucket::Mid => "1980–2000",
            DateBucket::Recent => "2000+",
        }
    }

    /// Whether a sighting's (possibly missing) year falls in this bucket.
    /// A missing year only ever matches `All`.
    pub fn matches(self, year: Option<i32>) -> bool {
        match self {
            DateBucket::All => true,
            DateBucket::Early => matches!(year, Some(y) if (1940..1980).contains(&y)),
            DateBucket::Mid => matches!(year, Some(y) if (1980..2000).contains(&y)),
            DateBucket::Recent => matches!(year, Some(y) if y >= 2000),
        }
    }
}

/// Duration buckets in seconds. A duration of exactly 0 (the loader's
/// placeholder for missing values) matches none of the non-All buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DurationBucket {
    #[default]
    All,
    /// 0 < secs < 600
    Short,
    /// 600 ≤ secs ≤ 1800
    Medium,
    /// secs > 1800
    Long,
}

impl DurationBucket {
    pub const ALL: [DurationBucket; 4] = [
        DurationBucket::All,
        DurationBucket::Short,
        DurationBucket::Medium,
        DurationBucket::Long,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DurationBucket::All => "Any length",
            DurationBucket::Short => "< 10 min",
            DurationBucket::Medium => "10–30 min",
            DurationBucket::Long => "> 30 min",
        }
    }

    pub fn matches(self, secs: f64) -> bool {
        match self {
            DurationBucket::All => true,
            DurationBucket::Short => secs > 0.0 && secs < 600.0,
            DurationBucket::Medium => (600.0..=1800.0).contains(&secs),
            DurationBucket::Long => secs > 1800.0,
        }
    }
}

/// The active selection: one bucket per dimension, combined with AND.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub date: DateBucket,
    pub duration: DurationBucket,
}

impl FilterSelection {
    pub fn matches(&self, s: &Sighting) -> bool {
        self.date.matches(s.year) && self.duration.matches(s.duration_secs)
    }
}

/// Return indices of sightings that pass both active buckets.
pub fn filtered_indices(dataset: &SightingDataset, filters: &FilterSelection) -> Vec<usize> {
    dataset
        .sightings
        .iter()
        .enumerate()
        .filter(|(_, s)| filters.matches(s))
        .map(|(i, _)| i)
        .collect()
}

// ---------------------------------------------------------------------------
// Range mapping
// ---------------------------------------------------------------------------

/// Affine map of `val` from `[vmin, vmax]` onto `[dmin, dmax]`.
/// Endpoints map exactly; values in between interpolate linearly.
pub fn map_range(val: f64, vmin: f64, vmax: f64, dmin: f64, dmax: f64) -> f64 {
    let t = (val - vmin) / (vmax - vmin);
    dmin + t * (dmax - dmin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::parse_year;

    fn sighting(date: &str, duration_secs: f64) -> Sighting {
        Sighting {
            latitude: 40.0,
            longitude: -75.0,
            date: date.to_string(),
            year: parse_year(date),
            shape: "light".to_string(),
            duration_secs,
        }
    }

    #[test]
    fn date_bucket_boundaries() {
        assert!(!DateBucket::Early.matches(Some(1939)));
        assert!(DateBucket::Early.matches(Some(1940)));
        assert!(DateBucket::Early.matches(Some(1979)));
        assert!(!DateBucket::Early.matches(Some(1980)));

        assert!(DateBucket::Mid.matches(Some(1980)));
        assert!(DateBucket::Mid.matches(Some(1999)));
        assert!(!DateBucket::Mid.matches(Some(2000)));

        assert!(DateBucket::Recent.matches(Some(2000)));
        assert!(DateBucket::Recent.matches(Some(2031)));
        assert!(!DateBucket::Recent.matches(Some(1999)));
    }

    #[test]
    fn date_buckets_are_disjoint_and_exhaustive_from_1940() {
        for year in 1940..2100 {
            let hits = [DateBucket::Early, DateBucket::Mid, DateBucket::Recent]
                .iter()
                .filter(|b| b.matches(Some(year)))
                .count();
            assert_eq!(hits, 1, "year {year} matched {hits} buckets");
        }
    }

    #[test]
    fn missing_year_only_matches_all() {
        assert!(DateBucket::All.matches(None));
        assert!(!DateBucket::Early.matches(None));
        assert!(!DateBucket::Mid.matches(None));
        assert!(!DateBucket::Recent.matches(None));
    }

    #[test]
    fn duration_bucket_boundaries() {
        assert!(DurationBucket::Short.matches(599.9));
        assert!(!DurationBucket::Short.matches(600.0));
        assert!(DurationBucket::Medium.matches(600.0));
        assert!(DurationBucket::Medium.matches(1800.0));
        assert!(!DurationBucket::Medium.matches(1800.1));
        assert!(DurationBucket::Long.matches(1800.1));
        assert!(!DurationBucket::Long.matches(1800.0));
    }

    #[test]
    fn zero_duration_matches_no_named_bucket() {
        assert!(!DurationBucket::Short.matches(0.0));
        assert!(!DurationBucket::Medium.matches(0.0));
        assert!(!DurationBucket::Long.matches(0.0));
        assert!(DurationBucket::All.matches(0.0));
    }

    #[test]
    fn combined_filter_is_an_intersection() {
        let dataset = SightingDataset::new(vec![
            sighting("10/10/1949 20:30", 300.0), // early + short
            sighting("5/5/1990 10:00", 300.0),   // mid + short
            sighting("5/5/1949 10:00", 2000.0),  // early + long
        ]);

        let filters = FilterSelection {
            date: DateBucket::Early,
            duration: DurationBucket::Short,
        };
        assert_eq!(filtered_indices(&dataset, &filters), vec![0]);
    }

    #[test]
    fn all_is_the_identity_for_each_dimension() {
        let dataset = SightingDataset::new(vec![
            sighting("10/10/1949 20:30", 300.0),
            sighting("bogus", 0.0),
            sighting("5/5/2010 10:00", 5000.0),
        ]);

        let everything = FilterSelection::default();
        assert_eq!(filtered_indices(&dataset, &everything), vec![0, 1, 2]);

        // All on one dimension constrains nothing there.
        let early_any = FilterSelection {
            date: DateBucket::Early,
            duration: DurationBucket::All,
        };
        assert_eq!(filtered_indices(&dataset, &early_any), vec![0]);
    }

    #[test]
    fn early_short_cylinder_sighting() {
        let s = sighting("10/10/1949 20:30", 300.0);

        let early_short = FilterSelection {
            date: DateBucket::Early,
            duration: DurationBucket::Short,
        };
        assert!(early_short.matches(&s));

        let recent = FilterSelection {
            date: DateBucket::Recent,
            duration: DurationBucket::All,
        };
        assert!(!recent.matches(&s));

        let long = FilterSelection {
            date: DateBucket::All,
            duration: DurationBucket::Long,
        };
        assert!(!long.matches(&s));
    }

    #[test]
    fn map_range_endpoints_and_midpoint() {
        assert_eq!(map_range(-180.0, -180.0, 180.0, -18.0, 18.0), -18.0);
        assert_eq!(map_range(180.0, -180.0, 180.0, -18.0, 18.0), 18.0);
        assert_eq!(map_range(0.0, -180.0, 180.0, -18.0, 18.0), 0.0);
        // Inverted destination range (latitude → screen y).
        assert_eq!(map_range(-90.0, -90.0, 90.0, 9.0, -9.0), 9.0);
        assert_eq!(map_range(90.0, -90.0, 90.0, 9.0, -9.0), -9.0);
    }

    #[test]
    fn map_range_is_affine() {
        let f = |v| map_range(v, 0.0, 10.0, 100.0, 200.0);
        for v in [1.0, 2.5, 7.0] {
            let expected = 100.0 + v / 10.0 * 100.0;
            assert!((f(v) - expected).abs() < 1e-12);
        }
    }
}
