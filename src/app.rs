use crate::ui;
use console::style;
use exiflens::input::collect_input_files;
use exiflens::{
    DirectorySink, ExifDecoder, ExifLensError, ExportOptions, SystemClock, render_summary,
};
use std::io::{self, Write};
use std::path::PathBuf;

pub fn run(paths: Vec<PathBuf>, options: &ExportOptions) -> Result<(), ExifLensError> {
    if !paths.is_empty() {
        return process_paths(&paths, options);
    }

    ui::render_header();
    ui::render_input_hint();

    let mut input = String::new();
    loop {
        match read_user_input(&mut input) {
            Ok(None) => {
                eprintln!("\n{}", style("Fin de la entrada. ¡Hasta luego!").dim());
                break;
            }
            Ok(Some(line)) => {
                if line.is_empty() {
                    continue;
                }

                if matches_command(&line, &["exit", "salir"]) {
                    eprintln!("{}", style("Hasta luego!").dim());
                    break;
                }

                if matches_command(&line, &["ayuda", "help"]) {
                    ui::render_input_hint();
                    continue;
                }

                if let Err(error) = process_paths(&[input_path(&line)], options) {
                    eprintln!("{}", style(error).red());
                }
            }
            Err(error) => {
                eprintln!("Error al leer la entrada: {error}");
            }
        }
    }

    Ok(())
}

fn process_paths(paths: &[PathBuf], options: &ExportOptions) -> Result<(), ExifLensError> {
    ui::render_reading();

    let files = collect_input_files(paths, options.recursive);
    let mut sink = DirectorySink::new(&options.output_dir);
    let report = exiflens::run(files, &ExifDecoder::new(), &mut sink, &SystemClock, options);

    println!("{}", render_summary(&report.summaries)?);
    ui::render_run_report(&report, sink.output_dir());
    Ok(())
}

/// Cada línea es una sola ruta; se aceptan comillas alrededor, como al arrastrar un archivo a la terminal.
fn input_path(line: &str) -> PathBuf {
    let trimmed = line.trim();
    let unquoted = ['"', '\'']
        .iter()
        .find_map(|quote| {
            trimmed
                .strip_prefix(*quote)
                .and_then(|rest| rest.strip_suffix(*quote))
        })
        .unwrap_or(trimmed);
    PathBuf::from(unquoted)
}

fn matches_command(input: &str, aliases: &[&str]) -> bool {
    aliases
        .iter()
        .any(|alias| input.eq_ignore_ascii_case(alias))
}

fn read_user_input(buffer: &mut String) -> io::Result<Option<String>> {
    eprint!("{} ", style("Ruta").bold().cyan());
    eprint!("{} ", style("›").cyan());
    io::stderr().flush()?;

    buffer.clear();
    let bytes_read = io::stdin().read_line(buffer)?;
    if bytes_read == 0 {
        return Ok(None);
    }

    Ok(Some(buffer.trim().to_string()))
}
