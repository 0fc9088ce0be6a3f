use crate::section::SectionId;

/// Contiguous scroll bands, one per section, in narrative order.
///
/// Band `i` covers `[start(i), start(i + 1))` and the last band ends at
/// [`total`](Self::total). Band 0 always starts at 0, so the bands cover
/// `[0, total]` with no gaps and no overlaps whatever the raw layout
/// reported.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SectionBands {
    starts: Vec<f64>,
    total: f64,
}

impl SectionBands {
    /// Build bands from absolute pixel offsets of each section's top edge.
    ///
    /// Offsets beyond the section count are ignored. Non-finite entries
    /// reuse the previous start, decreasing entries are raised to keep the
    /// sequence monotone, and negative entries are clamped to 0. `total` is
    /// raised to the last start if it falls short.
    #[must_use]
    pub fn from_offsets(offsets: &[f64], total: f64) -> Self {
        let mut starts = Vec::with_capacity(SectionId::COUNT);
        let mut running = 0.0_f64;
        for &raw in offsets.iter().take(SectionId::COUNT) {
            if raw.is_finite() {
                running = running.max(raw.max(0.0));
            }
            starts.push(running);
        }
        if let Some(first) = starts.first_mut() {
            *first = 0.0;
        }
        let last = starts.last().copied().unwrap_or(0.0);
        let total = if total.is_finite() { total.max(last) } else { last };
        Self { starts, total }
    }

    /// Number of registered bands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.starts.len()
    }

    /// Whether no section is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    /// Start offset of band `index`.
    #[must_use]
    pub fn start(&self, index: usize) -> Option<f64> {
        self.starts.get(index).copied()
    }

    /// End offset of band `index` (the next band's start, or the total).
    #[must_use]
    pub fn end(&self, index: usize) -> Option<f64> {
        if index >= self.starts.len() {
            return None;
        }
        Some(self.starts.get(index + 1).copied().unwrap_or(self.total))
    }

    /// `[start, end)` of band `index`.
    #[must_use]
    pub fn band(&self, index: usize) -> Option<(f64, f64)> {
        Some((self.start(index)?, self.end(index)?))
    }

    /// Total scrollable extent covered by the bands.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Index of the band containing `y`: the largest `i` with
    /// `y >= start(i)`, or 0 when `y` precedes every band. Equal starts
    /// resolve to the later band.
    #[must_use]
    pub fn index_at(&self, y: f64) -> usize {
        if y.is_nan() {
            return 0;
        }
        self.starts
            .iter()
            .rposition(|&start| y >= start)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn even() -> SectionBands {
        SectionBands::from_offsets(&[0.0, 800.0, 1600.0, 2400.0, 3200.0], 4000.0)
    }

    #[test]
    fn bands_are_contiguous_and_exhaustive() {
        let bands = even();
        assert_eq!(bands.len(), 5);
        assert_eq!(bands.start(0), Some(0.0));
        for i in 0..bands.len() - 1 {
            assert_eq!(bands.end(i), bands.start(i + 1));
        }
        assert_eq!(bands.end(4), Some(4000.0));
        assert_eq!(bands.band(5), None);
    }

    #[test]
    fn index_at_picks_largest_start_not_after_y() {
        let bands = even();
        assert_eq!(bands.index_at(-10.0), 0);
        assert_eq!(bands.index_at(0.0), 0);
        assert_eq!(bands.index_at(799.9), 0);
        assert_eq!(bands.index_at(800.0), 1);
        assert_eq!(bands.index_at(3999.0), 4);
        assert_eq!(bands.index_at(1e9), 4);
        assert_eq!(bands.index_at(f64::NAN), 0);
    }

    #[test]
    fn equal_starts_resolve_to_later_band() {
        let bands =
            SectionBands::from_offsets(&[0.0, 500.0, 500.0, 900.0], 1000.0);
        assert_eq!(bands.index_at(500.0), 2);
        assert_eq!(bands.band(1), Some((500.0, 500.0)));
    }

    #[test]
    fn sanitizes_bad_offsets() {
        let bands = SectionBands::from_offsets(
            &[40.0, f64::NAN, 300.0, 200.0, -5.0, 9000.0],
            100.0,
        );
        assert_eq!(bands.len(), 5);
        assert_eq!(bands.start(0), Some(0.0));
        assert_eq!(bands.start(1), Some(40.0));
        assert_eq!(bands.start(2), Some(300.0));
        assert_eq!(bands.start(3), Some(300.0));
        assert_eq!(bands.start(4), Some(300.0));
        assert_eq!(bands.total(), 300.0);
    }

    #[test]
    fn empty_bands() {
        let bands = SectionBands::from_offsets(&[], 0.0);
        assert!(bands.is_empty());
        assert_eq!(bands.index_at(100.0), 0);
        assert_eq!(bands.end(0), None);
    }
}
