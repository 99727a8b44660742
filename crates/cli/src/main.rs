use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use gjk2d::api::{
    draw_pair_radial, intersect, GeomCfg, GjkCfg, GjkReport, Intersection, PolygonReplay,
    RadialCfg, VertexCount,
};
use polars::prelude::*;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;

use input::{PairInput, ReportOut};
use provenance::{OutcomeCounts, Sidecar};

#[derive(Parser)]
#[command(name = "gjk2d-cli")]
#[command(about = "Convex polygon intersection checks and sweeps")]
struct Cmd {
    /// Refinement iteration cap before reporting indeterminate
    #[arg(long, global = true, default_value_t = gjk2d::gjk::DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,
    /// Signed-area tolerance (scaled by squared coordinate magnitude)
    #[arg(long, global = true, default_value_t = GeomCfg::default().eps_area)]
    eps_area: f64,
    /// Distance below which shapes count as touching
    #[arg(long, global = true, default_value_t = GeomCfg::default().eps_dist)]
    eps_dist: f64,

    #[command(subcommand)]
    action: Action,
}

impl Cmd {
    fn gjk_cfg(&self) -> GjkCfg {
        GjkCfg {
            max_iterations: self.max_iterations,
            geom: GeomCfg {
                eps_area: self.eps_area,
                eps_dist: self.eps_dist,
            },
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Test one polygon pair read from JSON ({"a": [[x,y],...], "b": [[x,y],...]})
    Check {
        #[arg(long)]
        input: PathBuf,
        /// Also write the report (plus a provenance sidecar) here
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Test many random pairs and write one row per pair (.csv or .parquet)
    Sweep {
        #[arg(long, default_value_t = 1000)]
        pairs: u64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 3)]
        min_vertices: usize,
        #[arg(long, default_value_t = 8)]
        max_vertices: usize,
        /// Second polygon's center is offset uniformly within [-spread, spread]²
        #[arg(long, default_value_t = 2.0)]
        spread: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Outcome counts of a sweep result file
    Summarize {
        #[arg(long)]
        input: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let cfg = cmd.gjk_cfg();
    match cmd.action {
        Action::Check { input, out } => check(&input, out.as_deref(), &cfg),
        Action::Sweep {
            pairs,
            seed,
            min_vertices,
            max_vertices,
            spread,
            out,
        } => sweep(
            SweepParams {
                pairs,
                seed,
                min_vertices,
                max_vertices,
                spread,
            },
            &out,
            &cfg,
        ),
        Action::Summarize { input } => summarize(&input),
        Action::Report => report(&cfg),
    }
}

fn log_unresolved(report: &GjkReport, what: &str) {
    if report.outcome == Intersection::Indeterminate {
        tracing::warn!(
            what,
            iterations = report.iterations,
            search_angle_deg = report.search_angle_deg(),
            simplex = ?report.simplex.map(|s| s.points),
            "iteration cap reached"
        );
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}

fn check(input: &Path, out: Option<&Path>, cfg: &GjkCfg) -> Result<()> {
    let pair = PairInput::read(input)?;
    let (a, b) = pair.polygons(&cfg.geom)?;
    let report = intersect(&a, &b, cfg);
    tracing::info!(
        input = %input.display(),
        outcome = %report.outcome,
        iterations = report.iterations,
        "check"
    );
    log_unresolved(&report, "check");

    let view = ReportOut::from(&report);
    let json = serde_json::to_vec_pretty(&view)?;
    println!("{}", String::from_utf8_lossy(&json));

    if let Some(out) = out {
        ensure_parent(out)?;
        std::fs::write(out, &json).with_context(|| format!("writing {}", out.display()))?;
        let mut counts = OutcomeCounts::default();
        counts.record(report.outcome);
        Sidecar::new("check", cfg, serde_json::json!({ "input": input.to_string_lossy() }))
            .with_counts(counts)
            .write_next_to(out)?;
    }
    Ok(())
}

struct SweepParams {
    pairs: u64,
    seed: u64,
    min_vertices: usize,
    max_vertices: usize,
    spread: f64,
}

fn sweep(params: SweepParams, out: &Path, cfg: &GjkCfg) -> Result<()> {
    if params.min_vertices < 3 || params.min_vertices > params.max_vertices {
        bail!(
            "need 3 <= min_vertices <= max_vertices, got {}..{}",
            params.min_vertices,
            params.max_vertices
        );
    }
    tracing::info!(
        pairs = params.pairs,
        seed = params.seed,
        spread = params.spread,
        max_iterations = cfg.max_iterations,
        "sweep"
    );
    let radial = RadialCfg {
        vertex_count: VertexCount::Uniform {
            min: params.min_vertices,
            max: params.max_vertices,
        },
        ..RadialCfg::default()
    };

    let mut index_col: Vec<u64> = Vec::new();
    let mut n_a_col: Vec<u32> = Vec::new();
    let mut n_b_col: Vec<u32> = Vec::new();
    let mut outcome_col: Vec<&'static str> = Vec::new();
    let mut iterations_col: Vec<u32> = Vec::new();
    let mut angle_col: Vec<f64> = Vec::new();
    let mut counts = OutcomeCounts::default();

    for index in 0..params.pairs {
        let tok = PolygonReplay {
            seed: params.seed,
            index,
        };
        let Some((a, b)) = draw_pair_radial(radial, params.spread, tok) else {
            tracing::warn!(index, "degenerate sample skipped");
            counts.skipped += 1;
            continue;
        };
        let report = intersect(&a, &b, cfg);
        counts.record(report.outcome);
        log_unresolved(&report, "sweep");
        index_col.push(index);
        n_a_col.push(a.len() as u32);
        n_b_col.push(b.len() as u32);
        outcome_col.push(report.outcome.as_str());
        iterations_col.push(report.iterations as u32);
        angle_col.push(report.search_angle_deg());
    }

    let mut df = df!(
        "index" => index_col,
        "n_a" => n_a_col,
        "n_b" => n_b_col,
        "outcome" => outcome_col,
        "iterations" => iterations_col,
        "search_angle_deg" => angle_col,
    )?;
    ensure_parent(out)?;
    let mut file =
        std::fs::File::create(out).with_context(|| format!("creating {}", out.display()))?;
    if out.extension().is_some_and(|e| e == "parquet") {
        ParquetWriter::new(&mut file).finish(&mut df)?;
    } else {
        CsvWriter::new(&mut file).include_header(true).finish(&mut df)?;
    }
    tracing::info!(
        rows = df.height(),
        tested = counts.tested(),
        colliding = counts.colliding,
        not_colliding = counts.not_colliding,
        indeterminate = counts.indeterminate,
        skipped = counts.skipped,
        out = %out.display(),
        "sweep_done"
    );

    let sweep_params = serde_json::json!({
        "pairs": params.pairs,
        "seed": params.seed,
        "min_vertices": params.min_vertices,
        "max_vertices": params.max_vertices,
        "spread": params.spread,
    });
    Sidecar::new("sweep", cfg, sweep_params)
        .with_counts(counts)
        .write_next_to(out)?;
    Ok(())
}

fn summarize(input: &Path) -> Result<()> {
    let path = input.to_string_lossy().to_string();
    let lf = if input.extension().is_some_and(|e| e == "parquet") {
        LazyFrame::scan_parquet(&path, Default::default())?
    } else {
        LazyCsvReader::new(&path)
            .with_infer_schema_length(Some(100))
            .finish()?
    };
    let df = lf
        .group_by([col("outcome")])
        .agg([
            col("index").count().alias("pairs"),
            col("iterations").max().alias("max_iterations"),
            col("iterations").mean().alias("mean_iterations"),
        ])
        .collect()?;
    tracing::info!(groups = df.height(), input = %input.display(), "summarize");
    println!("{df}");
    Ok(())
}

fn report(cfg: &GjkCfg) -> Result<()> {
    let sidecar = Sidecar::new("report", cfg, serde_json::json!({}));
    println!("{}", serde_json::to_string_pretty(&sidecar)?);
    Ok(())
}
