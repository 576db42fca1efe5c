use std::path::Path;

use anyhow::Context;
use plotters::prelude::*;

use crate::series::FunctionSeries;

const CHART_SIZE: (u32, u32) = (1000, 500);

/// File name for one hash function's chart, `grafico_<name>.png`. The scheme
/// of the original report tooling, kept so downstream consumers keep working.
#[must_use]
pub fn output_filename(function: &str) -> String {
    format!("grafico_{function}.png")
}

/// Renders one chart to `path`: insertion and search time against record
/// count, with legend and grid.
///
/// Every call owns its backend and drawing area, so no drawing state is
/// shared between charts.
pub fn render_chart(series: &FunctionSeries, path: &Path) -> anyhow::Result<()> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let (count_min, count_max) = series.count_range();
    // Widen degenerate axis spans so single-point or all-zero series still
    // produce a valid chart.
    let count_max = count_max.max(count_min + 1);
    let time_max = series.max_time_ns().max(1.0) * 1.05;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Desenvolvimento para {}", series.name()),
            ("sans-serif", 30).into_font(),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(count_min..count_max, 0f64..time_max)?;

    chart
        .configure_mesh()
        .x_desc("Quantidade de Registros")
        .y_desc("Tempo (ns)")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            series
                .points()
                .iter()
                .map(|p| (p.record_count, p.insertion_ns)),
            &RED,
        ))?
        .label("Tempo de Inserção")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));

    chart
        .draw_series(LineSeries::new(
            series.points().iter().map(|p| (p.record_count, p.search_ns)),
            &BLUE,
        ))?
        .label("Tempo de Busca")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
