//! Scan narrative and tabular/JSON output

use crate::curves::CurveParams;
use crate::framing::ViewWindow;
use crate::roots::{Root, ScanConfig};
use anyhow::Result;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Scan parameters and outcome, for the diagnostic narrative and file
/// headers.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct ScanReport {
    /// Left edge of the scanned interval
    pub left: f64,
    /// Right edge of the scanned interval
    pub right: f64,
    /// Number of grid samples
    pub sample_count: usize,
    /// Dedup tolerance applied to accepted roots
    pub dedup_tol: f64,
    /// Number of distinct roots found
    pub root_count: usize,
    /// Whether part of the interval lies outside the log domain
    pub domain_clipped: bool,
}

impl ScanReport {
    /// Builds the report for a finished scan.
    pub fn new(
        left: f64,
        right: f64,
        config: &ScanConfig,
        roots: &[Root],
        domain_clipped: bool,
    ) -> Self {
        ScanReport {
            left,
            right,
            sample_count: config.sample_count,
            dedup_tol: config.dedup_tol,
            root_count: roots.len(),
            domain_clipped,
        }
    }

    /// Human-readable description of how the scan ran. Purely
    /// descriptive; nothing downstream depends on the wording.
    pub fn narrative(&self) -> String {
        let mut lines = vec![
            "difference function: g(x) = a^(x+b) + c - (p*log_d(x+e) + f)".to_string(),
            format!(
                "search interval: [{:.4}, {:.4}] split into {} samples ({} brackets)",
                self.left,
                self.right,
                self.sample_count,
                self.sample_count.saturating_sub(1)
            ),
            "sign changes refined with Brent's method (bisection + interpolation)".to_string(),
            format!(
                "roots closer than {:e} in x are treated as one",
                self.dedup_tol
            ),
        ];
        if self.domain_clipped {
            lines.push("samples with x + e <= 0 lie outside the log domain and are skipped".into());
        }
        lines.push(format!("intersections found: {}", self.root_count));
        lines.join("\n")
    }
}

#[derive(Serialize)]
struct TableRow {
    index: usize,
    x: f64,
    y: f64,
}

/// Writes the intersection table: `#` metadata lines, one header, one
/// row per root. Zero roots produce a header-only table.
pub fn write_roots_csv(path: &Path, report: &ScanReport, roots: &[Root]) -> Result<()> {
    let mut file = File::create(path)?;

    writeln!(file, "# Exponential/logarithmic intersection scan")?;
    writeln!(
        file,
        "# Interval: [{:.6}, {:.6}], {} samples",
        report.left, report.right, report.sample_count
    )?;
    writeln!(file, "# Dedup tolerance: {:e}", report.dedup_tol)?;
    writeln!(file, "# Intersections: {}", report.root_count)?;
    writeln!(file)?;

    let mut wtr = csv::Writer::from_writer(file);
    wtr.write_record(["index", "x", "y"])?;
    for (i, r) in roots.iter().enumerate() {
        wtr.serialize(TableRow {
            index: i + 1,
            x: r.x,
            y: r.y,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// Full record of one invocation: inputs, scan outcome, display window.
#[derive(Debug, Serialize)]
pub struct Summary {
    /// Curve parameters the scan ran with
    pub params: CurveParams,
    /// Scan settings and outcome
    pub scan: ScanReport,
    /// Roots in ascending x order
    pub roots: Vec<Root>,
    /// Display ranges framing the roots
    pub window: ViewWindow,
}

/// Serializes the invocation summary as pretty-printed JSON.
pub fn write_summary_json(path: &Path, summary: &Summary) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, summary)?;
    Ok(())
}
