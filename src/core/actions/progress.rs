use log::{debug, info};
use std::sync::atomic::{AtomicU32, Ordering};

const PROGRESS_REPORTS: u32 = 10;

/// Counts finished rows and logs roughly every tenth of the total.
///
/// Safe to share between workers; each row is counted with one atomic add.
#[derive(Debug)]
pub struct RowProgress {
    total_rows: u32,
    report_every: u32,
    completed: AtomicU32,
}

impl RowProgress {
    #[must_use]
    pub fn new(total_rows: u32) -> Self {
        Self {
            total_rows,
            report_every: (total_rows / PROGRESS_REPORTS).max(1),
            completed: AtomicU32::new(0),
        }
    }

    pub fn row_done(&self) {
        let done = self.completed.fetch_add(1, Ordering::Relaxed) + 1;

        if done % self.report_every == 0 || done == self.total_rows {
            info!(
                "progress: {}/{} rows ({}%)",
                done,
                self.total_rows,
                u64::from(done) * 100 / u64::from(self.total_rows.max(1))
            );
        } else {
            debug!("row {} of {} done", done, self.total_rows);
        }
    }

    #[must_use]
    pub fn completed(&self) -> u32 {
        self.completed.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn total_rows(&self) -> u32 {
        self.total_rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_rows() {
        let progress = RowProgress::new(25);

        for _ in 0..25 {
            progress.row_done();
        }

        assert_eq!(progress.completed(), 25);
        assert_eq!(progress.total_rows(), 25);
    }

    #[test]
    fn test_small_totals_report_every_row() {
        let progress = RowProgress::new(3);

        assert_eq!(progress.report_every, 1);
    }

    #[test]
    fn test_report_interval_is_a_tenth() {
        assert_eq!(RowProgress::new(600).report_every, 60);
    }
}
