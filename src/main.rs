use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use job_time_set_viewer::series::LABEL_ATTRIBUTE_INDEX;
use job_time_set_viewer::{
    INPUT_FILE_MARKER, Model, SeriesOptions, Session, accepts_input_path, build_series_with,
    diagnostics, initial_window, list_data_sources, render, report, resolve_job,
};
use std::sync::Arc;
use tracing::info;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "job-time-set-viewer")]
#[command(about = "Browse job time sets recorded in job_time_sets.xml", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a self-contained HTML report with every data source.
    Report {
        #[arg(long)]
        input: String,

        #[arg(short = 'o', long)]
        out: String,

        /// Job attribute position used as bar label (0 is the id).
        #[arg(long, default_value_t = LABEL_ATTRIBUTE_INDEX)]
        label_index: usize,
    },

    /// List data source names.
    Sources {
        #[arg(long)]
        input: String,
    },

    /// Print ranked points of every variation in a data source.
    Series {
        #[arg(long)]
        input: String,

        #[arg(long)]
        source: String,

        #[arg(long, default_value_t = LABEL_ATTRIBUTE_INDEX)]
        label_index: usize,
    },

    /// Print all properties of one job.
    Job {
        #[arg(long)]
        input: String,

        #[arg(long)]
        id: String,
    },
}

fn main() -> Result<()> {
    diagnostics::init_logging();
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Report {
            input,
            out,
            label_index,
        } => {
            let model = load(&input)?;
            let options = series_options(label_index);

            let data = report::build_report_data(&input, &model, &options)?;
            let html = render::render_html_report(&data)?;
            std::fs::write(&out, html).with_context(|| format!("write report {}", out))?;
            info!(out = %out, "wrote report");
            println!("Wrote {}", out);
        }
        Commands::Sources { input } => {
            let model = load(&input)?;
            for name in list_data_sources(&model) {
                println!("{}", name);
            }
        }
        Commands::Series {
            input,
            source,
            label_index,
        } => {
            let model = load(&input)?;
            let series = build_series_with(&model, &source, &series_options(label_index))?;

            for (variation, s) in &series {
                let window = initial_window(s.points.len());
                println!(
                    "{} ({} points, initial window {}..{})",
                    variation,
                    s.points.len(),
                    window.start,
                    window.end
                );
                for (rank, p) in s.points.iter().enumerate() {
                    println!(
                        "  {:>3}  {:>12}  {}  [{}]  {}",
                        rank + 1,
                        p.value,
                        p.color,
                        p.job_id,
                        p.label
                    );
                }
            }
        }
        Commands::Job { input, id } => {
            let model = load(&input)?;
            for line in resolve_job(&model, &id)? {
                println!("{}", line);
            }
        }
    }

    Ok(())
}

fn load(path: &str) -> Result<Arc<Model>> {
    if !accepts_input_path(path) {
        bail!("input must be a {} file: {}", INPUT_FILE_MARKER, path);
    }
    let bytes = std::fs::read(path).with_context(|| format!("read input file {}", path))?;

    let mut session = Session::new();
    let model = session
        .load(&bytes)
        .with_context(|| format!("load {}", path))?;
    Ok(model)
}

fn series_options(label_index: usize) -> SeriesOptions {
    SeriesOptions {
        label_attribute_index: label_index,
        ..SeriesOptions::default()
    }
}
