use std::io::{self, Write};

use tracing::debug;

use crate::{
    charts::Chart,
    core::{
        bounds::terminal_chart_width,
        color::{AnsiCode, NAMED_COLORS},
        config::{ChartOptions, ChartOptionsBuilder},
        data::{DataPoint, Series, parse_values, read_series_from_path},
        error::ChartError,
        rng::Lcg,
    },
    factory::builtin_factory,
};

use super::parse::{DemoArgs, RenderArgs};

fn emit(chart: &dyn Chart) -> Result<(), ChartError> {
    let mut out = io::stdout().lock();
    out.write_all(chart.render().as_bytes())?;
    out.flush()?;
    Ok(())
}

fn with_color(b: ChartOptionsBuilder, color: Option<String>) -> ChartOptionsBuilder {
    match color {
        Some(name) => b.color_name(name),
        None => b,
    }
}

pub fn render(a: RenderArgs) -> Result<(), ChartError> {
    let data = match &a.values {
        Some(list) => parse_values(list)?,
        None => read_series_from_path(a.file.as_deref().unwrap_or("-"))?,
    };

    let b = ChartOptions::builder()
        .title(a.title)
        .subtitle_opt(a.subtitle)
        .width(a.width.unwrap_or_else(terminal_chart_width))
        .symbol_opt(a.symbol)
        .show_values(a.show_values)
        .decimals(a.decimals);
    let options = with_color(b, a.color).build()?;

    debug!(kind = %a.kind, points = data.len(), width = options.width, "render");
    let chart = builtin_factory().create(&a.kind, data, options)?;
    emit(chart.as_ref())
}

/// One registered identifier per line.
pub fn types() {
    for kind in builtin_factory().kinds() {
        println!("{kind}");
    }
}

pub fn demo(a: &DemoArgs) -> Result<(), ChartError> {
    let mut rng = a.seed.map_or_else(Lcg::seed_from_time, Lcg::seed);
    let data: Series = (1..=a.points)
        .map(|i| {
            let v = (rng.uniform(1.0, 100.0) * 10.0).round() / 10.0;
            DataPoint::new(format!("item {i}"), v)
        })
        .collect();
    let width = a.width.unwrap_or_else(terminal_chart_width);
    let factory = builtin_factory();

    for kind in factory.kinds() {
        let b = ChartOptions::builder()
            .title(format!("{kind} chart"))
            .subtitle(format!("{} random points", data.len()))
            .width(width)
            .show_values(true);
        let options = with_color(b, a.color.clone()).build()?;
        let chart = factory.create(kind, data.clone(), options)?;
        emit(chart.as_ref())?;
        println!();
    }
    Ok(())
}

/// Pretty-print available color names + an example hex code.
pub fn colors() {
    println!("\nPossible colors:");
    for (name, code) in &NAMED_COLORS {
        let shown = if *name == "orange" {
            "orange | industrial"
        } else {
            *name
        };
        println!("{}", code.paint(shown));
    }
    println!(
        "{}  (#505050 or any other #RRGGBB)\n",
        AnsiCode::Rgb(0x50, 0x50, 0x50).paint("#505050")
    );
}

/// Print handy invocations for new users.
pub fn examples() {
    let bin = "ascii-chart";
    println!(
        "
Example invocations
-------------------
• Bar chart from CSV : {bin} render bar budget.csv --title \"Monthly budget\"
• Inline values      : {bin} render pie --values rent=900,food=350,fun=120
• Any casing         : {bin} render DOT --values 3,1,4,1,5 --show-values
• From stdin         : cat budget.csv | {bin} render bar -
• Named color        : {bin} render bar budget.csv --color blue
• Hex color          : {bin} render bar budget.csv --color #6048c1
• Fixed width        : {bin} render pie budget.csv --width 60
• Chart types        : {bin} types
• Random data        : {bin} demo --points 8 --seed 42
• Dispatch logging   : {bin} --debug render bar budget.csv
"
    );
}
