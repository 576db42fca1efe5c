use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

/// One row of `resultados.csv`, as written by the benchmark harness.
///
/// The file carries a header row and columns are matched by name, so their
/// order in the file does not matter. Collision and comparison counters are
/// part of every row but never plotted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BenchmarkRecord {
    /// Capacity of the hash table the run was performed against.
    #[serde(rename = "Tamanho")]
    pub table_size: u64,
    /// Name of the benchmarked hash function. Grouping key and filename stem.
    #[serde(rename = "FuncaoHash")]
    pub hash_function: String,
    /// Number of records inserted in the run. The x-axis of every chart.
    #[serde(rename = "Quantidade")]
    pub record_count: u64,
    #[serde(rename = "TempoInsercao")]
    pub insertion_ns: f64,
    #[serde(rename = "TempoBusca")]
    pub search_ns: f64,
    #[serde(rename = "Colisoes")]
    pub collisions: u64,
    #[serde(rename = "Comparacoes")]
    pub comparisons: u64,
}

/// Reads the whole result file into memory.
///
/// The file is read exactly once. A missing file, a missing column or an
/// unparsable field fails the load; there is no row-level recovery.
pub fn load_records(path: impl AsRef<Path>) -> anyhow::Result<Vec<BenchmarkRecord>> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    reader
        .deserialize()
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("malformed row in {}", path.display()))
}
