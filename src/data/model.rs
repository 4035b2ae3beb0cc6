// ---------------------------------------------------------------------------
// Sighting – one validated row of the source CSV
// ---------------------------------------------------------------------------

/// A single reported sighting (one valid row of the source file).
#[derive(Debug, Clone, PartialEq)]
pub struct Sighting {
    /// Degrees north, guaranteed within [-90, 90].
    pub latitude: f64,
    /// Degrees east, guaranteed within [-180, 180].
    pub longitude: f64,
    /// Raw date text as it appeared in the file, e.g. `10/10/1949 20:30`.
    pub date: String,
    /// Year extracted from `date` at load time; `None` when unparseable.
    pub year: Option<i32>,
    /// Reported object shape, lower-cased; `unknown` when the cell was empty.
    pub shape: String,
    /// Reported duration in seconds; 0 when the cell was empty or invalid.
    pub duration_secs: f64,
}

/// Extract the year from a `M/D/YYYY[ H:MM]` date string.
///
/// Anything that does not split into three slash-separated numeric fields
/// yields `None`; such rows stay loaded but never match a non-All date bucket.
pub fn parse_year(date: &str) -> Option<i32> {
    let date_part = date.split_whitespace().next()?;
    let mut parts = date_part.split('/');
    let _month: u32 = parts.next()?.parse().ok()?;
    let _day: u32 = parts.next()?.parse().ok()?;
    let year: i32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(year)
}

// ---------------------------------------------------------------------------
// SightingDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full validated dataset. Never mutated after load.
#[derive(Debug, Clone, Default)]
pub struct SightingDataset {
    pub sightings: Vec<Sighting>,
}

impl SightingDataset {
    pub fn new(sightings: Vec<Sighting>) -> Self {
        SightingDataset { sightings }
    }

    /// Number of loaded sightings.
    pub fn len(&self) -> usize {
        self.sightings.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.sightings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_from_dataset_style_date() {
        assert_eq!(parse_year("10/10/1949 20:30"), Some(1949));
        assert_eq!(parse_year("1/2/2007 0:05"), Some(2007));
    }

    #[test]
    fn year_without_time_component() {
        assert_eq!(parse_year("6/15/1985"), Some(1985));
    }

    #[test]
    fn unparseable_dates_yield_none() {
        assert_eq!(parse_year(""), None);
        assert_eq!(parse_year("1949-10-10"), None);
        assert_eq!(parse_year("10/1949"), None);
        assert_eq!(parse_year("a/b/c"), None);
        assert_eq!(parse_year("1/2/3/4"), None);
    }
}
