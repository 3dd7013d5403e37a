// tablenav: rewrite the tables of an HTML file so screen readers can navigate them.
//
// Reads INPUT, annotates every <table>, and writes the document to OUTPUT
// (default: <input stem>_2.html next to the input).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tablenav::{
    AnnotateConfig, AnnotateConfigBuilder, IdScheme, default_output_path, rewrite_html_tables,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(
    name = "tablenav",
    version,
    about = "Add header ids, scopes and per-cell headers references to every HTML table"
)]
struct Cli {
    /// HTML file to rewrite
    input: PathBuf,

    /// Where to write the result (overwritten if present)
    output: Option<PathBuf>,

    /// JSON file with annotation settings; flags below override it
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Do not insert placeholder <caption> elements
    #[arg(long)]
    no_caption: bool,

    /// Text for inserted captions
    #[arg(long, value_name = "TEXT")]
    caption_text: Option<String>,

    /// Keep row header cells as <td> (they still get id and scope="row")
    #[arg(long)]
    no_row_header_tag: bool,

    /// Also treat existing <th> cells as table cells
    #[arg(long)]
    match_th: bool,

    /// Use short ids (_t_1_c_2) instead of _table_1_col_2
    #[arg(long)]
    compact_ids: bool,

    /// Refuse inputs larger than this many bytes
    #[arg(long, value_name = "BYTES")]
    max_input_bytes: Option<usize>,
}

impl Cli {
    fn annotate_config(&self) -> Result<AnnotateConfig> {
        let base = match &self.config {
            Some(path) => AnnotateConfig::from_json_file(path)?,
            None => AnnotateConfig::default(),
        };

        let mut builder = AnnotateConfigBuilder::from(base);
        if self.no_caption {
            builder = builder.insert_placeholder_caption(false);
        }
        if let Some(text) = &self.caption_text {
            builder = builder.caption_text(text.clone());
        }
        if self.no_row_header_tag {
            builder = builder.convert_row_header_cell_tag(false);
        }
        if self.match_th {
            builder = builder.match_existing_header_cells(true);
        }
        if self.compact_ids {
            builder = builder.id_scheme(IdScheme::Compact);
        }
        if let Some(bytes) = self.max_input_bytes {
            builder = builder.max_input_bytes(bytes);
        }
        Ok(builder.build()?)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli.annotate_config().context("Invalid annotation settings")?;
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&cli.input));

    let summary = rewrite_html_tables(&cli.input, &output, &config)
        .with_context(|| format!("HTML table rewriting failed for {}", cli.input.display()))?;

    tracing::debug!(
        "{} tables, {} bytes written",
        summary.report.tables,
        summary.bytes_written
    );
    println!("Output is in {}", summary.output.display());
    Ok(())
}
