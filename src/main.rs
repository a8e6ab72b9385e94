use clap::Parser;
use exiflens::ExportOptions;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod app;
mod ui;

#[derive(Parser)]
#[command(
    name = "exiflens",
    about = "Exporta la metadata EXIF de fotos JPEG a JSON y a un resumen CSV",
    version,
    long_about = None
)]
struct Cli {
    /// Fotos o directorios a procesar. Sin rutas se abre el modo interactivo.
    paths: Vec<PathBuf>,

    /// Directorio donde se guardan los documentos exportados.
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// No genera el JSON de cada foto.
    #[arg(long)]
    no_json: bool,

    /// No genera el resumen CSV.
    #[arg(long)]
    no_csv: bool,

    /// Recorre también los subdirectorios.
    #[arg(short, long)]
    recursive: bool,
}

impl Cli {
    fn options(&self) -> ExportOptions {
        ExportOptions {
            output_dir: self.output_dir.clone(),
            write_json: !self.no_json,
            write_csv: !self.no_csv,
            recursive: self.recursive,
        }
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();
    let options = cli.options();

    if let Err(error) = app::run(cli.paths, &options) {
        eprintln!("{error}");
        std::process::exit(1);
    }
}
