use clap::Parser;

use dtgraph::application::dto::OutputFormat;
use dtgraph::graph_projection::domain::LayoutName;

/// Visualize a device tree as a node-link graph
#[derive(Parser, Debug)]
#[command(name = "dtgraph")]
#[command(version)]
#[command(
    about = "Visualize a device tree (.dts/.dtb) as a node-link graph",
    long_about = None
)]
pub struct Args {
    /// Device tree to load: a local path or an http(s) URL
    /// (.dts, .dtsi, .dtb or .dtbo)
    #[arg(short, long, value_name = "FILE|URL")]
    pub file: String,

    /// Output format: json or markdown [default: json]
    #[arg(short = 'F', long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Renderer stylesheet (JSON), path or URL; the bundled style is used otherwise
    #[arg(short, long, value_name = "FILE|URL")]
    pub style: Option<String>,

    /// Layout algorithm for the renderer (e.g. cose, breadthfirst, dagre)
    #[arg(short, long)]
    pub layout: Option<LayoutName>,

    /// Inspect a node by id: list it with its connecting edges.
    /// Can be specified multiple times: --select cpus --select "cpu@0"
    #[arg(long = "select", value_name = "NODE")]
    pub select: Vec<String>,

    /// Device tree compiler used for .dts input [default: dtc]
    #[arg(long, value_name = "PATH")]
    pub dtc: Option<String>,

    /// Path to a config file (defaults to ./dtgraph.config.yml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
