use console::style;
use exiflens::RunReport;
use std::path::Path;

pub fn render_header() {
    let title = format!("exiflens {}", env!("CARGO_PKG_VERSION"));
    let subtitle = "Metadata EXIF de fotos JPEG: un JSON por foto y un resumen CSV";

    eprintln!();
    eprintln!("{}", style(title).bold().cyan());
    eprintln!("{}", style(subtitle).dim());
    eprintln!("{}\n", style("═".repeat(subtitle.chars().count())).cyan());
}

pub fn render_input_hint() {
    let hint_lines = [
        "┌─ Puedes ingresar:",
        "│   • Una foto JPEG (ej. IMG_0001.jpg)",
        "│   • Un directorio con fotos (ej. ./vacaciones)",
        "│   • Una ruta por línea; los espacios se respetan",
        "│   • 'salir' o 'exit' para terminar",
        "└─",
    ];

    for line in hint_lines.iter() {
        eprintln!("{}", style(line).cyan().dim());
    }

    eprintln!();
}

pub fn render_reading() {
    eprintln!("{}", style("Leyendo archivos...").dim());
}

pub fn render_run_report(report: &RunReport, output_dir: &Path) {
    eprintln!(
        "\n{} {}",
        style("Procesados").bold().cyan(),
        style(report.processed()).bold()
    );

    for name in &report.skipped {
        eprintln!("  {} {}", style("omitido").yellow(), style(name).dim());
    }

    for name in &report.exported {
        eprintln!(
            "  {} {}",
            style("guardado").green(),
            output_dir.join(name).display()
        );
    }

    for message in &report.errors {
        eprintln!("  {} {}", style("error").red().bold(), message);
    }

    if report.processed() == 0 {
        eprintln!(
            "{}",
            style("No se encontraron fotos JPEG; no se generó el resumen CSV.").yellow()
        );
    }
}
