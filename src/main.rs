mod cli;
mod config;

use cli::Args;
use config::{CliOverrides, Settings};
use dtgraph::adapters::outbound::console::StderrProgressReporter;
use dtgraph::adapters::outbound::devicetree::{DtcCompiler, FdtDeviceTreeDecoder};
use dtgraph::adapters::outbound::SourceLoader;
use dtgraph::application::dto::GraphRequest;
use dtgraph::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use dtgraph::application::read_models::GraphDocumentBuilder;
use dtgraph::application::use_cases::GenerateGraphUseCase;
use dtgraph::graph_projection::domain::SourceLocation;
use dtgraph::ports::outbound::ProgressReporter;
use dtgraph::shared::error::ExitCode;
use dtgraph::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    // Parse command-line arguments (clap exits with status 2 on invalid usage)
    let args = Args::parse_args();

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::for_error(&e).as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    let settings = load_settings(&args)?;

    // Create adapters (Dependency Injection)
    let source_reader = SourceLoader::new()?;
    let decoder = FdtDeviceTreeDecoder::new(DtcCompiler::new(settings.dtc.clone()));
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = GenerateGraphUseCase::new(source_reader, decoder, progress_reporter);

    // Create request
    let request = GraphRequest::new(SourceLocation::parse(&args.file))
        .with_stylesheet(settings.style.as_deref().map(SourceLocation::parse))
        .with_layout(settings.layout)
        .with_selected_nodes(args.select);

    // Execute use case
    let response = use_case.execute(request)?;
    let document = GraphDocumentBuilder::build(response);

    // Display progress message
    eprintln!("{}", FormatterFactory::progress_message(settings.format));

    // Create formatter using factory
    let formatter = FormatterFactory::create(settings.format);
    let formatted_output = formatter.format(&document)?;

    // Present output
    let presenter =
        PresenterFactory::create(PresenterType::from_output(args.output.map(PathBuf::from)));
    presenter.present(&formatted_output)?;

    StderrProgressReporter::new().report_completion(&format!(
        "🎉 Graph generated: {} node(s), {} edge(s)",
        document.stats.node_count, document.stats.edge_count
    ));

    Ok(())
}

/// Resolves effective settings: CLI options > config file > defaults
fn load_settings(args: &Args) -> Result<Settings> {
    let config_file = match args.config.as_deref() {
        Some(path) => {
            let config = config::load_config_from_path(Path::new(path))?;
            eprintln!("⚙️  Loaded config from: {}", path);
            Some(config)
        }
        None => {
            let config = config::discover_config(Path::new("."))?;
            if config.is_some() {
                eprintln!("⚙️  Auto-discovered config file: {}", config::CONFIG_FILENAME);
            }
            config
        }
    };

    let overrides = CliOverrides {
        format: args.format,
        layout: args.layout,
        style: args.style.clone(),
        dtc: args.dtc.clone(),
    };

    config::resolve_settings(overrides, config_file.as_ref())
}
