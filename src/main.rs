use clap::{Parser, Subcommand};
use imageset_gen::config::{self, ExportConfig};
use imageset_gen::export::{self, ExportOptions};
use imageset_gen::imaging::RustBackend;
use imageset_gen::naming::ImageName;
use imageset_gen::source::{self, ArgSelection, DestinationProvider};
use imageset_gen::types::ExportTarget;
use imageset_gen::{manifest, output, reveal};
use std::path::{Path, PathBuf};

#[derive(clap::Args)]
struct ExportArgs {
    /// Source image (png, jpg or jpeg)
    source: Option<PathBuf>,

    /// Directory the .imageset folder is created in (created if missing)
    #[arg(long, short)]
    dest: Option<PathBuf>,

    /// Show the imageset in the file browser afterwards
    #[arg(long)]
    reveal: bool,
}

#[derive(Parser)]
#[command(name = "imageset-gen")]
#[command(about = "Generate a 1x/2x/3x asset catalog imageset from one image")]
#[command(long_about = "\
Generate a 1x/2x/3x asset catalog imageset from one image

The source is scaled to fill a 13x13, 25x25 and 38x38 box (aspect ratio
kept, nothing cropped) and written next to a Contents.json manifest:

  <dest>/<name>.imageset/
  ├── <name>@1x.png
  ├── <name>@2x.png
  ├── <name>@3x.png
  └── Contents.json

<name> is the source file name without its extension. Re-exporting into an
existing imageset overwrites these four files and leaves anything else alone.

Run 'imageset-gen gen-config' to generate a documented imageset.toml.")]
#[command(version)]
struct Cli {
    /// Config file (defaults to ./imageset.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log pipeline steps to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Export an image as an imageset
    Export(ExportArgs),
    /// Print the Contents.json for an image name
    Manifest {
        /// Image name (file name without extension)
        name: String,
    },
    /// Print a stock imageset.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Export(args) => {
            let config = load_cli_config(cli.config.as_deref())?;
            init_thread_pool(&config.processing);

            let selection = ArgSelection {
                source: args.source,
                destination: args.dest,
            };
            let backend = RustBackend::new();
            let loaded = source::load_source(&backend, &selection)?;
            let destination = selection.choose_destination()?;
            output::print_lines(&output::format_source(&loaded));

            let target = ExportTarget::new(&destination, loaded.name.clone());
            let (tx, rx) = std::sync::mpsc::channel();
            let printer = std::thread::spawn(move || {
                for event in rx {
                    output::print_lines(&output::format_export_event(&event));
                }
            });
            let result = export::export_imageset_with_backend(
                &backend,
                &loaded.image,
                &target,
                &ExportOptions::from_config(&config),
                Some(tx),
            );
            printer
                .join()
                .map_err(|_| "progress printer thread panicked")?;

            let report = match result {
                Ok(report) => report,
                Err(e) => {
                    output::print_lines(&output::format_export_error(&e));
                    return Err(e.into());
                }
            };
            output::print_export_summary(&report);

            if args.reveal {
                reveal::reveal(Some(&report.location), &config.reveal)?;
            }
        }
        Command::Manifest { name } => {
            let image_name = ImageName::new(name.as_str())
                .ok_or_else(|| format!("invalid image name: {name:?}"))?;
            print!("{}", manifest::render_manifest(&image_name));
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Logs go to stderr; stdout is reserved for progress output.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn load_cli_config(path: Option<&Path>) -> Result<ExportConfig, config::ConfigError> {
    match path {
        Some(file) => config::load_config_file(file),
        None => config::load_config(Path::new(".")),
    }
}

/// Initialize the rayon thread pool based on processing config.
///
/// Caps at the number of available CPU cores — user can constrain down, not up.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
