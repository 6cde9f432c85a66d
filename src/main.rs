use grid_reader::config::{self, OutputFormat, RuntimeConfig};
use grid_reader::image::io::{decode_image, save_grid_image, write_json_file};
use grid_reader::{DetectionReport, GridError, GridReader};
use std::env;

const DEFAULT_DEBUG_CELL_PX: u32 = 16;

#[tokio::main]
async fn main() {
    env_logger::init();
    if let Err(err) = run().await {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

async fn run() -> grid_reader::Result<()> {
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "grid_reader".to_string());
    let config = config::parse_cli(&program, args)?;

    let matrix = decode_image(config.input.clone()).await?;
    let reader = GridReader::new(config.params.clone());
    let report = reader.process_with_diagnostics(&matrix)?;

    emit(&config, &report)
}

fn emit(config: &RuntimeConfig, report: &DetectionReport) -> grid_reader::Result<()> {
    let format = config.output.format;
    if format.includes_text() {
        print_text_summary(report);
    }

    if format.includes_json() {
        if let Some(path) = &config.output.json_out {
            write_json_file(path, report)?;
            println!("JSON report written to {}", path.display());
        } else {
            let json = serde_json::to_string_pretty(report)
                .map_err(|e| GridError::Config(format!("Failed to serialize JSON: {e}")))?;
            if format == OutputFormat::Both {
                println!("\nJSON report:\n{json}");
            } else {
                println!("{json}");
            }
        }
    }

    if let Some(path) = &config.output.debug_image {
        let cell_px = config.output.debug_cell_px.unwrap_or(DEFAULT_DEBUG_CELL_PX);
        if save_grid_image(&report.grid, cell_px, path)? {
            eprintln!("Debug image written to {}", path.display());
        }
    }
    Ok(())
}

fn print_text_summary(report: &DetectionReport) {
    let trace = &report.trace;
    println!("{}", report.grid);
    println!(
        "\n{}x{} cells ({} dark, {} degenerate) from a {}x{} image in {:.3} ms",
        trace.cells.rows,
        trace.cells.cols,
        trace.cells.dark_cells,
        trace.cells.degenerate_cells,
        trace.input.width,
        trace.input.height,
        trace.timings.total_ms
    );
}
