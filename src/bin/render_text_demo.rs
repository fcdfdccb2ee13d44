use std::fs;
use std::path::PathBuf;

use chart_txt::core::{
    BarInfo, BoxStats, ErrorPoint, Key, KeyEntry, LabelPlacement, PlotStyle, Range, Style, Tic,
    TicSetting, WHITE, Wedge,
};
use chart_txt::render::{Graphics, TextGraphics, TextGraphicsConfig};
use chart_txt::telemetry::{init_default_tracing, init_tracing};

const DEFAULT_WIDTH: usize = 72;
const DEFAULT_HEIGHT: usize = 22;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DemoChart {
    Scatter,
    Boxes,
    Bars,
    Pie,
}

#[derive(Debug)]
struct CliArgs {
    config_path: Option<PathBuf>,
    width: usize,
    height: usize,
    chart: DemoChart,
    verbose: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let _ = if args.verbose {
        init_tracing("chart_txt=trace")
    } else {
        init_default_tracing()
    };
    let config = match &args.config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read config `{}`: {err}", path.display()))?;
            TextGraphicsConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => TextGraphicsConfig::new(args.width, args.height),
    };
    let mut graphics = TextGraphics::with_config(config).map_err(|err| err.to_string())?;

    graphics.begin();
    match args.chart {
        DemoChart::Scatter => draw_scatter(&mut graphics),
        DemoChart::Boxes => draw_boxes(&mut graphics),
        DemoChart::Bars => draw_bars(&mut graphics),
        DemoChart::Pie => draw_pie(&mut graphics),
    }
    graphics.end();

    print!("{graphics}");
    Ok(())
}

/// Screen frame of the plot area: left, right, top, bottom.
fn plot_area(graphics: &TextGraphics) -> (i32, i32, i32, i32) {
    let (width, height) = graphics.dimensions();
    let width = i32::try_from(width).unwrap_or(i32::MAX);
    let height = i32::try_from(height).unwrap_or(i32::MAX);
    (8, width - 3, 3, height - 5)
}

fn draw_scatter(graphics: &mut TextGraphics) {
    let (left, right, top, bottom) = plot_area(graphics);
    graphics.title("sin(x) with samples");

    let x_range = Range::new(0.0, 10.0, left, right)
        .with_label("x")
        .with_tics(
            (0..=5)
                .map(|i| Tic::new(f64::from(i * 2), (i * 2).to_string()))
                .collect(),
        )
        .with_tic_setting(TicSetting {
            hide: false,
            mirror: 1,
        });
    let y_range = Range::new(-1.0, 1.0, bottom, top)
        .with_label("sin")
        .with_show_zero(true)
        .with_tics(vec![
            Tic::new(-1.0, "-1"),
            Tic::new(0.0, "0"),
            Tic::new(1.0, "1"),
        ]);
    graphics.x_axis(&x_range, bottom + 1, top - 1);
    graphics.y_axis(&y_range, left - 1, right + 1);

    let curve: Vec<ErrorPoint> = (0..=40)
        .map(|i| {
            let x = f64::from(i) / 4.0;
            ErrorPoint::new(
                f64::from(x_range.data_to_screen(x)),
                f64::from(y_range.data_to_screen(x.sin())),
            )
        })
        .collect();
    graphics.scatter(&curve, PlotStyle::LINES, &Style::default().with_symbol('.'));

    let samples: Vec<ErrorPoint> = [1.0_f64, 4.0, 7.5]
        .iter()
        .map(|&x| {
            ErrorPoint::new(
                f64::from(x_range.data_to_screen(x)),
                f64::from(y_range.data_to_screen(x.sin() * 0.8)),
            )
            .with_delta_y(4.0)
        })
        .collect();
    graphics.scatter(&samples, PlotStyle::POINTS, &Style::default().with_symbol('#'));

    let key = Key::new(vec![
        KeyEntry::new("sin(x)", Style::default().with_symbol('.'), PlotStyle::LINES),
        KeyEntry::new("sample", Style::default().with_symbol('#'), PlotStyle::POINTS),
    ]);
    graphics.key(right - 22, top, &key);
}

fn draw_boxes(graphics: &mut TextGraphics) {
    let (left, right, top, bottom) = plot_area(graphics);
    graphics.title("response times");

    let y_range = Range::new(0.0, 100.0, bottom, top).with_tics(
        (0..=4)
            .map(|i| Tic::new(f64::from(i * 25), (i * 25).to_string()))
            .collect(),
    );
    let x_range = Range::new(0.0, 4.0, left, right).with_tics(vec![
        Tic::new(1.0, "api"),
        Tic::new(2.0, "db"),
        Tic::new(3.0, "cache"),
    ]);
    graphics.x_axis(&x_range, bottom + 1, top - 1);
    graphics.y_axis(&y_range, left - 1, right + 1);

    let screen = |v: f64| f64::from(y_range.data_to_screen(v));
    let summaries = [
        (1.0, 30.0, 60.0, 45.0, 10.0, 80.0),
        (2.0, 20.0, 40.0, 28.0, 5.0, 55.0),
        (3.0, 5.0, 15.0, 8.0, 2.0, 25.0),
    ];
    let boxes: Vec<BoxStats> = summaries
        .iter()
        .map(|&(x, q1, q3, med, low, high)| {
            BoxStats::new(f64::from(x_range.data_to_screen(x)), screen(q1), screen(q3))
                .with_median(screen(med))
                .with_whiskers(screen(low), screen(high))
                .with_outliers(vec![screen(high + 12.0)])
        })
        .collect();
    graphics.boxes(&boxes, 7, &Style::default().with_symbol('o'));
}

fn draw_bars(graphics: &mut TextGraphics) {
    let (left, _right, top, bottom) = plot_area(graphics);
    graphics.title("requests per day");

    let y_range = Range::new(0.0, 40.0, bottom, top);
    graphics.y_axis(&y_range, left - 1, left - 1);

    let values = [12.0, 31.0, 24.0, 38.0, 7.0];
    let bars: Vec<BarInfo> = values
        .iter()
        .zip(0..)
        .map(|(&value, i)| {
            let y = y_range.data_to_screen(value);
            BarInfo::new(left + 2 + i * 10, y, 7, bottom - y + 1)
                .with_label(format!("{value}"), LabelPlacement::Outside)
        })
        .collect();
    graphics.bars(&bars, &Style::default().with_fill_color(WHITE).with_symbol('#'));
}

fn draw_pie(graphics: &mut TextGraphics) {
    let (_, height) = graphics.dimensions();
    let height = i32::try_from(height).unwrap_or(i32::MAX);
    graphics.title("market share");

    let shares = [("alpha", 0.45), ("beta", 0.3), ("gamma", 0.25)];
    let mut phi = 0.0;
    let wedges: Vec<Wedge> = shares
        .iter()
        .map(|&(label, share)| {
            let psi = phi + share * std::f64::consts::TAU;
            let wedge = Wedge::new(phi, psi)
                .with_label(label)
                .with_style(Style::default().with_symbol('*'));
            phi = psi;
            wedge
        })
        .collect();
    let ro = (height - 6) / 2;
    graphics.rings(&wedges, 20, height / 2 + 1, ro, 0);
}

fn parse_args() -> Result<CliArgs, String> {
    let mut config_path = None;
    let mut width = DEFAULT_WIDTH;
    let mut height = DEFAULT_HEIGHT;
    let mut chart = DemoChart::Scatter;
    let mut verbose = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config_path = Some(PathBuf::from(value));
            }
            "--width" => width = parse_size(args.next(), "--width")?,
            "--height" => height = parse_size(args.next(), "--height")?,
            "--chart" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --chart".to_owned())?;
                chart = match value.as_str() {
                    "scatter" => DemoChart::Scatter,
                    "boxes" => DemoChart::Boxes,
                    "bars" => DemoChart::Bars,
                    "pie" => DemoChart::Pie,
                    _ => return Err(format!("unknown chart `{value}`")),
                };
            }
            "--verbose" | "-v" => verbose = true,
            "--help" | "-h" => {
                println!("{}", usage_message());
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    Ok(CliArgs {
        config_path,
        width,
        height,
        chart,
        verbose,
    })
}

fn parse_size(value: Option<String>, flag: &str) -> Result<usize, String> {
    let value = value.ok_or_else(|| format!("missing value for {flag}"))?;
    value
        .parse()
        .map_err(|err| format!("invalid value `{value}` for {flag}: {err}"))
}

fn usage_message() -> &'static str {
    "usage: render_text_demo [--chart scatter|boxes|bars|pie] [--width N] [--height N] [--config PATH] [--verbose]"
}
