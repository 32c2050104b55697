use scan_prep::config::load_config;
use scan_prep::matrix::io::{load_packed_image, save_binary_f32, write_json_file};
use scan_prep::pixel::PixelView;
use scan_prep::Binarizer;
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args()
        .nth(1)
        .ok_or_else(|| "usage: binarize_demo <config.json>".to_string())?;
    let config = load_config(Path::new(&config_path))?;

    let packed = load_packed_image(&config.input_path)?;
    let binarizer = Binarizer::new(config.params.clone());
    let (bw, report) = binarizer
        .process(PixelView::Packed(packed.view()))
        .map_err(|e| format!("Failed to binarize {}: {e}", config.input_path.display()))?;

    match report.threshold {
        Some(t) => println!(
            "binarized {}x{} threshold={t:.4} latency_ms={:.3}",
            report.width, report.height, report.latency_ms
        ),
        None => println!(
            "binarized {}x{} (adaptive) latency_ms={:.3}",
            report.width, report.height, report.latency_ms
        ),
    }

    if let Some(path) = &config.output.image_out {
        save_binary_f32(&bw, path)?;
        println!("binary image written to {}", path.display());
    }
    if let Some(path) = &config.output.json_out {
        write_json_file(path, &report)?;
        println!("JSON report written to {}", path.display());
    }
    Ok(())
}
