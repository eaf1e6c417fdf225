mod curves;
mod framing;
mod plot;
mod report;
mod roots;
mod solver;

use crate::curves::CurveParams;
use crate::framing::{frame, PLOT_SAMPLES};
use crate::plot::plot_intersections;
use crate::report::{write_roots_csv, write_summary_json, ScanReport, Summary};
use crate::roots::{clips_log_domain, find_roots, IntervalPolicy};

use anyhow::{anyhow, Result};
use clap::Parser;
use std::fs::create_dir_all;
use std::path::Path;

#[derive(Parser, Debug)]
#[command(
    name = "explog",
    version,
    about = "Exponential/logarithmic intersection finder + plotter"
)]
struct Args {
    /// Exponential base a (> 0, != 1)
    #[arg(long, default_value_t = 2.0)]
    a: f64,
    /// Exponential horizontal shift
    #[arg(long, default_value_t = 0.0)]
    b: f64,
    /// Exponential vertical shift
    #[arg(long, default_value_t = 0.0)]
    c: f64,

    /// Logarithm coefficient
    #[arg(long, default_value_t = 1.0)]
    p: f64,
    /// Logarithm base d (> 0, != 1); ignored with --use-ln
    #[arg(long, default_value_t = 10.0)]
    d: f64,
    /// Fix the logarithm base to Euler's number
    #[arg(long, action = clap::ArgAction::SetTrue)]
    use_ln: bool,
    /// Logarithm horizontal shift
    #[arg(long, default_value_t = 0.0)]
    e: f64,
    /// Logarithm vertical shift
    #[arg(long, default_value_t = 0.0)]
    f: f64,

    /// Left edge of an explicit search window (requires --x-max)
    #[arg(long)]
    x_min: Option<f64>,
    /// Right edge of an explicit search window (requires --x-min)
    #[arg(long)]
    x_max: Option<f64>,

    /// Override the scan grid size
    #[arg(long)]
    samples: Option<usize>,
    /// Override the root dedup tolerance
    #[arg(long)]
    dedup_tol: Option<f64>,
    /// Plotting grid size
    #[arg(long, default_value_t = PLOT_SAMPLES)]
    plot_samples: usize,

    #[arg(long, default_value = "out")]
    out_dir: String,
    #[arg(long = "no-draw", action = clap::ArgAction::SetFalse, default_value_t = true)]
    draw: bool,
    #[arg(long = "no-axes", action = clap::ArgAction::SetFalse, default_value_t = true)]
    axes: bool,
    #[arg(long, action = clap::ArgAction::SetTrue)]
    verbose: bool,
}

fn validate_inputs(args: &Args) -> Result<()> {
    if !args.a.is_finite() || args.a <= 0.0 || args.a == 1.0 {
        return Err(anyhow!("a must be finite, > 0 and != 1 (got {})", args.a));
    }
    if !args.use_ln && (!args.d.is_finite() || args.d <= 0.0 || args.d == 1.0) {
        return Err(anyhow!("d must be finite, > 0 and != 1 (got {})", args.d));
    }
    if args.x_min.is_some() != args.x_max.is_some() {
        return Err(anyhow!("--x-min and --x-max must be given together"));
    }
    if let Some(n) = args.samples {
        if n < 2 {
            return Err(anyhow!("samples must be >= 2 (got {})", n));
        }
    }
    if args.plot_samples < 2 {
        return Err(anyhow!(
            "plot-samples must be >= 2 (got {})",
            args.plot_samples
        ));
    }
    if let Some(t) = args.dedup_tol {
        if !(t > 0.0) {
            return Err(anyhow!("dedup-tol must be > 0 (got {})", t));
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    validate_inputs(&args)?;

    let params = CurveParams {
        a: args.a,
        b: args.b,
        c: args.c,
        p: args.p,
        d: if args.use_ln {
            std::f64::consts::E
        } else {
            args.d
        },
        e: args.e,
        f: args.f,
    };

    let policy = match (args.x_min, args.x_max) {
        (Some(min), Some(max)) => IntervalPolicy::Window { min, max },
        _ => IntervalPolicy::Auto,
    };
    let (left, right) = policy.resolve(&params)?;

    let mut config = policy.scan_config();
    if let Some(n) = args.samples {
        config.sample_count = n;
    }
    if let Some(t) = args.dedup_tol {
        config.dedup_tol = t;
    }

    let clipped = clips_log_domain(&params, left, right);
    if clipped {
        println!(
            "warning: [{:.4}, {:.4}] extends left of the log domain (x > {:.4}); undefined samples are skipped",
            left,
            right,
            params.log_domain_start()
        );
    }

    let roots = find_roots(&params, left, right, &config);
    let scan = ScanReport::new(left, right, &config, &roots, clipped);

    if roots.is_empty() {
        println!("no intersection found in [{:.4}, {:.4}]", left, right);
    } else {
        for (i, r) in roots.iter().enumerate() {
            println!("#{}  x = {:.10}  y = {:.10}", i + 1, r.x, r.y);
        }
    }

    let (window, series) = frame(&params, &roots, (left, right), args.plot_samples);

    if args.verbose {
        println!("{}", scan.narrative());
        println!(
            "display window: x in [{:.4}, {:.4}], y in [{:.4}, {:.4}]",
            window.x_min, window.x_max, window.y_min, window.y_max
        );
    }

    create_dir_all(&args.out_dir)?;
    let out = Path::new(&args.out_dir);
    write_roots_csv(&out.join("roots.csv"), &scan, &roots)?;
    write_summary_json(
        &out.join("summary.json"),
        &Summary {
            params,
            scan,
            roots: roots.clone(),
            window,
        },
    )?;
    if args.draw {
        plot_intersections(
            &series,
            &roots,
            &window,
            args.axes,
            &format!("{}/intersections.png", args.out_dir),
        )?;
    }
    Ok(())
}
