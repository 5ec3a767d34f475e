use edge_scorer::config::load_config;
use edge_scorer::image::{io, RasterU8};
use edge_scorer::{EdgeScorer, ScorerParams};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    match std::env::args().nth(1) {
        Some(config_path) => match run_from_config(Path::new(&config_path)) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            }
        },
        None => {
            run_demo();
            ExitCode::SUCCESS
        }
    }
}

/// Load the configured image, score it, and persist the edge map + report.
fn run_from_config(config_path: &Path) -> Result<(), String> {
    let config = load_config(config_path)?;
    let raster = io::load_raster(&config.input)?;
    let scorer = EdgeScorer::new(config.scorer_params()).map_err(|e| e.to_string())?;
    let run = scorer
        .process_with_diagnostics(&raster)
        .map_err(|e| e.to_string())?;

    io::save_gray_u8(&run.output.edge_image, &config.output.edge_image)?;
    io::write_json_file(&config.output.report_json, &run.report)?;

    println!(
        "score={:.3} edges={} ({}x{}) total_ms={:.3}",
        run.output.result.score,
        run.output.result.edge_pixels,
        run.output.result.width,
        run.output.result.height,
        run.report.trace.timing.total_ms
    );
    Ok(())
}

/// Demo stub: scores a synthetic step-edge image.
fn run_demo() {
    let w = 640usize;
    let h = 480usize;
    let mut gray = vec![40u8; w * h];
    for row in gray.chunks_mut(w) {
        for v in &mut row[w / 2..] {
            *v = 215;
        }
    }
    let raster = RasterU8::new_gray(w, h, gray).expect("demo buffer is consistent");

    let scorer = EdgeScorer::new(ScorerParams::default()).expect("default thresholds are valid");
    let result = scorer.process(&raster).expect("demo input is valid").result;
    println!(
        "score={:.3} edges={} latency_ms={:.3}",
        result.score, result.edge_pixels, result.latency_ms
    );
}
