use scan_prep::pixel::PixelView;
use scan_prep::{BinarizeParams, Binarizer, Matrix};

fn main() {
    // Demo stub: binarizes a synthetic two-band page
    let w = 640usize;
    let h = 480usize;
    let mut gray = vec![0xE0u8; w * h];
    for row in gray.chunks_mut(w).skip(h / 2) {
        for v in row.iter_mut() {
            *v = 0x30;
        }
    }
    let page = Matrix::from_vec(w, h, gray).expect("buffer matches dimensions");

    let binarizer = Binarizer::new(BinarizeParams::default());
    match binarizer.process(PixelView::Byte(page.view())) {
        Ok((bw, report)) => println!(
            "binarized {}x{} latency_ms={:.3}",
            bw.width(),
            bw.height(),
            report.latency_ms
        ),
        Err(err) => eprintln!("Error: {err}"),
    }
}
