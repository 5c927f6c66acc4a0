//! Conversion of interleaved peak values into an ordered (m/z, intensity) table

use log::warn;

use crate::scan::MzTable;

/// Build a table from (m/z, intensity) pairs
///
/// A pair is dropped when both values are `<= 0` or when its m/z is NaN. If
/// the m/z values of the kept pairs are not strictly increasing, the kept
/// pairs are sorted by m/z. The sort is stable, so peaks sharing an m/z keep
/// their input order.
pub fn normalize_pairs<I>(pairs: I) -> MzTable
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let mut kept: Vec<(f64, f64)> = Vec::new();
    let mut ordered = true;
    let mut last_mz = 0.0f64;
    let mut nan_mz = 0usize;

    for (mz, intensity) in pairs {
        if mz.is_nan() {
            nan_mz += 1;
            continue;
        }
        if mz > 0.0 || intensity > 0.0 {
            ordered = ordered && mz > last_mz;
            last_mz = mz;
            kept.push((mz, intensity));
        }
    }

    if nan_mz > 0 {
        warn!("Peak list has {} NaN m/z values; dropping those peaks", nan_mz);
    }

    if !ordered {
        kept.sort_by(|a, b| a.0.total_cmp(&b.0));
    }

    MzTable::from_pairs(kept)
}

/// Build a table from a flat interleaved sequence `mz, intensity, mz, ...`
///
/// Works on any float width that widens losslessly to `f64`. A trailing
/// unpaired value is dropped.
pub fn mz_pairs_to_table<T>(values: &[T]) -> MzTable
where
    T: Copy + Into<f64>,
{
    if values.len() % 2 != 0 {
        warn!(
            "Peak list has an odd number of values ({}); dropping the last one",
            values.len()
        );
    }
    normalize_pairs(
        values
            .chunks_exact(2)
            .map(|pair| (pair[0].into(), pair[1].into())),
    )
}
