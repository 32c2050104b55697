//! Synthetic page buffers shared by the integration tests.

use scan_prep::Matrix;

/// Two-level page: top half `hi`, bottom half `lo`.
pub fn bimodal_f32(w: usize, h: usize, lo: f32, hi: f32) -> Matrix<f32> {
    let mut data = vec![hi; w * h];
    for v in data.iter_mut().skip(w * (h / 2)) {
        *v = lo;
    }
    Matrix::from_vec(w, h, data).expect("buffer matches dimensions")
}

/// Horizontal byte gradient repeated down the page.
pub fn gradient_bytes(w: usize, h: usize) -> Matrix<u8> {
    let mut data = Vec::with_capacity(w * h);
    for _y in 0..h {
        for x in 0..w {
            data.push((x * 255 / w.max(1)) as u8);
        }
    }
    Matrix::from_vec(w, h, data).expect("buffer matches dimensions")
}

/// Dark text-like strokes on a light packed-color background.
pub fn strokes_packed(w: usize, h: usize) -> Matrix<u32> {
    let mut data = vec![0xFFF0_F0F0u32; w * h];
    for y in (2..h).step_by(5) {
        for x in 1..w - 1 {
            data[y * w + x] = 0xFF20_2020;
        }
    }
    Matrix::from_vec(w, h, data).expect("buffer matches dimensions")
}
