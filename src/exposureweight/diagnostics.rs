use std::io::{
    self,
    BufWriter,
    Write
};
use std::sync::atomic::{
    AtomicUsize,
    Ordering
};

use rayon::prelude::*;

use crate::exposureweight::exposureweight::ExposureWeight;

#[inline]
fn sample_position(i: usize, n: usize) -> f64 {
    i as f64 / (n - 1) as f64
}

/// Writes `i x w` for `n` equidistant samples of [0, 1] to standard output.
pub fn dump_weight_function(weight_function: &dyn ExposureWeight, n: usize) -> io::Result<()> {
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    dump_weight_function_to(weight_function, n, &mut writer)?;
    writer.flush()
}

pub fn dump_weight_function_to<W: Write>(weight_function: &dyn ExposureWeight,
                                         n: usize,
                                         writer: &mut W) -> io::Result<()> {
    assert!(n >= 2, "at least two samples are needed, got {}", n);

    for i in 0..n {
        let x = sample_position(i, n);
        let w = weight_function.weight(x);
        writeln!(writer, "{} {} {}", i, x, w)?;
    }
    Ok(())
}

/// Number of samples whose weight falls outside [0, 1). `NaN` counts as
/// outside.
///
/// Samples are evaluated on the rayon pool in no particular order.
pub fn count_weight_faults(weight_function: &dyn ExposureWeight, n: usize) -> usize {
    assert!(n >= 2, "at least two samples are needed, got {}", n);

    let number_of_faults = AtomicUsize::new(0);
    (0..n).into_par_iter().for_each(|i| {
        let w = weight_function.weight(sample_position(i, n));
        if !(0.0..1.0).contains(&w) {
            number_of_faults.fetch_add(1, Ordering::Relaxed);
        }
    });
    number_of_faults.into_inner()
}

/// Whether one of the `n` sample positions lands exactly on `y`. Curves
/// peaking at 1.0 fail the range check when their optimum does.
pub fn sample_grid_contains(y: f64, n: usize) -> bool {
    assert!(n >= 2, "at least two samples are needed, got {}", n);
    (0..n).any(|i| sample_position(i, n) == y)
}

pub fn check_weight_function(weight_function: &dyn ExposureWeight, n: usize) -> bool {
    count_weight_faults(weight_function, n) == 0
}
