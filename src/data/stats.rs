//! Summary statistics behind the distribution charts.

/// Five-number summary drawn as a box plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Quantile of an ascending slice, interpolating linearly between the two
/// closest ranks (`h = (n - 1) * p`).
pub fn quantile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
    let last = sorted.len().checked_sub(1)?;
    let h = last as f64 * p.clamp(0.0, 1.0);
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(last);
    let frac = h - lo as f64;
    Some(sorted[lo] + frac * (sorted[hi] - sorted[lo]))
}

/// Box summary of the finite values in `values`; `None` if there are none.
pub fn box_summary(values: &[f64]) -> Option<BoxSummary> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(f64::total_cmp);

    Some(BoxSummary {
        min: sorted[0],
        q1: quantile_sorted(&sorted, 0.25)?,
        median: quantile_sorted(&sorted, 0.5)?,
        q3: quantile_sorted(&sorted, 0.75)?,
        max: sorted[sorted.len() - 1],
    })
}

// ---------------------------------------------------------------------------
// Histogram binning
// ---------------------------------------------------------------------------

/// Equal-width bins `[start + i*width, start + (i+1)*width)`, the last one
/// closed on the right at `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinEdges {
    pub start: f64,
    /// Upper edge of the last bin, kept as observed rather than recomputed
    /// from `start + width * count`, which can round below it.
    pub end: f64,
    pub width: f64,
    pub count: usize,
}

impl BinEdges {
    /// Bins spanning the finite min..max of `values`.
    ///
    /// When every value is equal the span is widened to one unit centred on
    /// the value, which then falls in the middle bin.
    pub fn spanning(values: &[f64], count: usize) -> Option<Self> {
        if count == 0 {
            return None;
        }
        let (min, max) = values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        if min > max {
            return None;
        }

        let (start, end) = if (max - min).abs() < f64::EPSILON {
            (min - 0.5, min + 0.5)
        } else {
            (min, max)
        };
        Some(BinEdges {
            start,
            end,
            width: (end - start) / count as f64,
            count,
        })
    }

    /// Bin holding `value`, `None` outside the span or for NaN.
    pub fn bin_of(&self, value: f64) -> Option<usize> {
        if !(value >= self.start && value <= self.end) {
            return None;
        }
        let idx = ((value - self.start) / self.width).floor() as usize;
        Some(idx.min(self.count - 1))
    }

    pub fn center(&self, bin: usize) -> f64 {
        self.start + (bin as f64 + 0.5) * self.width
    }

    /// Count `values` into these bins.
    pub fn histogram(&self, values: &[f64]) -> Vec<usize> {
        let mut counts = vec![0; self.count];
        for &v in values {
            if let Some(bin) = self.bin_of(v) {
                counts[bin] += 1;
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn quartiles_interpolate_between_ranks() {
        let s = box_summary(&[4.0, 1.0, 3.0, 2.0]).unwrap();
        assert_eq!(s.min, 1.0);
        assert!(approx(s.q1, 1.75));
        assert!(approx(s.median, 2.5));
        assert!(approx(s.q3, 3.25));
        assert_eq!(s.max, 4.0);
    }

    #[test]
    fn single_value_summary_collapses() {
        let s = box_summary(&[2.5]).unwrap();
        assert_eq!((s.min, s.q1, s.median, s.q3, s.max), (2.5, 2.5, 2.5, 2.5, 2.5));
    }

    #[test]
    fn empty_or_nan_only_sample_has_no_summary() {
        assert!(box_summary(&[]).is_none());
        assert!(box_summary(&[f64::NAN]).is_none());
        assert!(quantile_sorted(&[], 0.5).is_none());
    }

    #[test]
    fn histogram_conserves_counts_and_closes_last_bin() {
        let values = [1.0, 1.0, 2.0, 3.0, 10.0];
        let bins = BinEdges::spanning(&values, 20).unwrap();
        assert_eq!(bins.start, 1.0);
        assert_eq!(bins.end, 10.0);
        let counts = bins.histogram(&values);
        assert_eq!(counts.len(), 20);
        assert_eq!(counts.iter().sum::<usize>(), 5);
        assert_eq!(counts[0], 2);
        assert_eq!(counts[19], 1);
    }

    #[test]
    fn constant_sample_lands_in_middle_bin() {
        let values = [2.0, 2.0, 2.0];
        let bins = BinEdges::spanning(&values, 20).unwrap();
        let counts = bins.histogram(&values);
        assert_eq!(counts[10], 3);
        assert!(approx(bins.center(10), 2.025));
    }

    #[test]
    fn no_bins_without_finite_values() {
        assert!(BinEdges::spanning(&[], 20).is_none());
        assert!(BinEdges::spanning(&[f64::NAN], 20).is_none());
        assert!(BinEdges::spanning(&[1.0, 2.0], 0).is_none());
    }

    #[test]
    fn values_outside_span_are_not_binned() {
        let bins = BinEdges::spanning(&[0.0, 1.0], 4).unwrap();
        assert_eq!(bins.bin_of(-0.1), None);
        assert_eq!(bins.bin_of(1.1), None);
        assert_eq!(bins.bin_of(f64::NAN), None);
        assert_eq!(bins.bin_of(0.5), Some(2));
    }

    #[test]
    fn observed_max_is_binned_when_edges_round_below_it() {
        // 0.9 / 20 * 20 == 0.8999999999999999
        let bins = BinEdges::spanning(&[0.0, 0.9], 20).unwrap();
        assert_eq!(bins.end, 0.9);
        assert_eq!(bins.bin_of(0.9), Some(19));

        for lo_step in 0..60 {
            for hi_step in (lo_step + 1)..=60 {
                let (lo, hi) = (lo_step as f64 * 0.1, hi_step as f64 * 0.1);
                let values = [lo, (lo + hi) / 2.0, hi];
                let bins = BinEdges::spanning(&values, 20).unwrap();
                let counts = bins.histogram(&values);
                assert_eq!(counts.iter().sum::<usize>(), 3, "span [{lo}, {hi}]");
                assert!(counts[19] >= 1, "max of [{lo}, {hi}] in last bin");
            }
        }
    }
}
