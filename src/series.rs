use fnv::FnvHashMap;

use crate::record::BenchmarkRecord;

/// One plotted data point: both measured times at a given record count.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SeriesPoint {
    pub record_count: u64,
    pub insertion_ns: f64,
    pub search_ns: f64,
}

/// All data points of one hash function, ordered ascending by record count.
///
/// Only ever built through [`group_by_function`], so a series holds at least
/// one point.
#[derive(Debug, PartialEq)]
pub struct FunctionSeries {
    name: String,
    points: Vec<SeriesPoint>,
}

impl FunctionSeries {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            points: Vec::new(),
        }
    }

    #[cfg(test)]
    pub fn from_points(name: &str, points: Vec<SeriesPoint>) -> Self {
        Self {
            name: name.to_string(),
            points,
        }
    }

    fn add_datapoint(&mut self, record: &BenchmarkRecord) {
        self.points.push(SeriesPoint {
            record_count: record.record_count,
            insertion_ns: record.insertion_ns,
            search_ns: record.search_ns,
        });
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    /// Inclusive record-count span of the series, `(min, max)`.
    #[must_use]
    pub fn count_range(&self) -> (u64, u64) {
        self.points
            .iter()
            .fold((u64::MAX, 0), |(min, max), p| {
                (min.min(p.record_count), max.max(p.record_count))
            })
    }

    /// Largest measured time across both plotted series.
    #[must_use]
    pub fn max_time_ns(&self) -> f64 {
        self.points
            .iter()
            .fold(0.0_f64, |max, p| max.max(p.insertion_ns).max(p.search_ns))
    }
}

/// Partitions records into one series per distinct hash function.
///
/// Emission order is deterministic regardless of input order: series are
/// sorted lexicographically by function name, points ascending by record
/// count (stable, so equal counts keep file order).
#[must_use]
pub fn group_by_function(records: &[BenchmarkRecord]) -> Vec<FunctionSeries> {
    let mut groups: FnvHashMap<&str, FunctionSeries> = FnvHashMap::default();
    for record in records {
        groups
            .entry(record.hash_function.as_str())
            .or_insert_with(|| FunctionSeries::new(&record.hash_function))
            .add_datapoint(record);
    }

    // sort in a vec: the map's iteration order must not leak into the output
    let mut series = groups.into_values().collect::<Vec<_>>();
    series.sort_unstable_by(|a, b| a.name.cmp(&b.name));
    for series in &mut series {
        series.points.sort_by_key(|p| p.record_count);
    }
    series
}
