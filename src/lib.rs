//! Renders hash-table benchmark results (`resultados.csv`) into one PNG line
//! chart per hash function: insertion and search time against record count.

#![deny(
    clippy::all,
    clippy::cargo,
    clippy::nursery,
    clippy::must_use_candidate
)]
// dependency tree, not ours
#![allow(clippy::multiple_crate_versions)]
#![deny(missing_debug_implementations)]
#![deny(rustdoc::all)]

mod chart;
mod record;
mod series;

pub use chart::{output_filename, render_chart};
pub use record::{load_records, BenchmarkRecord};
pub use series::{group_by_function, FunctionSeries, SeriesPoint};

use std::path::{Path, PathBuf};

/// Reads the result file at `csv_path` and writes one
/// `grafico_<FuncaoHash>.png` into `out_dir` per distinct hash function.
///
/// Returns the written paths in emission order (lexicographic by function
/// name). A file without data rows produces no charts. The first I/O, parse
/// or render error aborts the run; charts already written stay on disk.
pub fn generate_reports(
    csv_path: impl AsRef<Path>,
    out_dir: impl AsRef<Path>,
) -> anyhow::Result<Vec<PathBuf>> {
    let records = record::load_records(csv_path)?;

    let mut written = Vec::new();
    for series in series::group_by_function(&records) {
        let path = out_dir.as_ref().join(chart::output_filename(series.name()));
        chart::render_chart(&series, &path)?;
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "Tamanho,FuncaoHash,Quantidade,TempoInsercao,TempoBusca,Colisoes,Comparacoes";

    fn write_csv(dir: &Path, rows: &[&str]) -> PathBuf {
        let path = dir.join("resultados.csv");
        let mut content = String::from(HEADER);
        for row in rows {
            content.push('\n');
            content.push_str(row);
        }
        content.push('\n');
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_one_chart_per_hash_function() {
        let dir = tempfile::tempdir().unwrap();
        let csv = write_csv(
            dir.path(),
            &[
                "1000,MD5,100,70,95,1,4",
                "1000,FNV,100,50,80,2,5",
                "1000,FNV,200,60,90,3,6",
            ],
        );

        let written = generate_reports(&csv, dir.path()).unwrap();

        assert_eq!(
            written,
            vec![
                dir.path().join("grafico_FNV.png"),
                dir.path().join("grafico_MD5.png"),
            ],
            "one file per function, lexicographic order"
        );
        for path in &written {
            assert!(std::fs::metadata(path).unwrap().len() > 0);
        }
    }

    #[test]
    fn test_single_function_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let csv = write_csv(
            dir.path(),
            &["1000,FNV,100,50,80,2,5", "1000,FNV,200,60,90,3,6"],
        );

        let written = generate_reports(&csv, dir.path()).unwrap();

        assert_eq!(written, vec![dir.path().join("grafico_FNV.png")]);
    }

    #[test]
    fn test_no_rows_no_files() {
        let dir = tempfile::tempdir().unwrap();
        let csv = write_csv(dir.path(), &[]);

        let written = generate_reports(&csv, dir.path()).unwrap();

        assert_eq!(written, Vec::<PathBuf>::new());
        let pngs = std::fs::read_dir(dir.path())
            .unwrap()
            .filter(|entry| {
                entry
                    .as_ref()
                    .unwrap()
                    .path()
                    .extension()
                    .is_some_and(|ext| ext == "png")
            })
            .count();
        assert_eq!(pngs, 0);
    }

    #[test]
    fn test_missing_input_file_aborts() {
        let dir = tempfile::tempdir().unwrap();

        assert!(generate_reports(dir.path().join("nope.csv"), dir.path()).is_err());
    }

    #[test]
    fn test_rerun_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let csv = write_csv(dir.path(), &["1000,FNV,100,50,80,2,5"]);

        let first = generate_reports(&csv, dir.path()).unwrap();
        let second = generate_reports(&csv, dir.path()).unwrap();

        assert_eq!(first, second);
        assert!(first[0].exists());
    }
}
