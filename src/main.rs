use std::path::Path;
use std::time::Instant;

/// CLI is: `[/path/to/resultados.csv [out_dir]]`.
fn main() -> anyhow::Result<()> {
    let begin = Instant::now();
    let mut args = std::env::args().skip(1);
    let csv_path = args
        .next()
        .unwrap_or_else(|| "./resultados.csv".to_string());
    let out_dir = args.next().unwrap_or_else(|| ".".to_string());

    let written = hash_charts::generate_reports(&csv_path, Path::new(&out_dir))?;
    for path in &written {
        println!("{}", path.display());
    }
    println!("took {:?}", begin.elapsed());
    Ok(())
}
