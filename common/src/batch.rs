//! Scan batch
//!
//! The in-progress bulk-entry collection: an ordered, duplicate-free list
//! of validated serial numbers accumulated from the scanner before one
//! batched create request. Insertion order is scan order. The bulk-entry
//! view is the only writer; the batch lives until a successful submission
//! clears it.

use crate::error::Result;
use crate::serial::SerialNumber;

/// Outcome of pushing one valid scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// New serial, appended to the batch
    Added,
    /// Already present, batch unchanged (re-scanning a unit is idempotent)
    Duplicate,
}

/// Summary of one batch paste.
///
/// Every whitespace-delimited chunk is validated and pushed independently,
/// so valid chunks land even when others are rejected. The view clears the
/// paste field only when [`PasteReport::all_valid`] holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasteReport {
    pub added: usize,
    pub duplicates: usize,
    pub rejected: Vec<String>,
}

impl PasteReport {
    pub fn all_valid(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Ordered, duplicate-free collection of scanned serial numbers.
#[derive(Debug, Clone, Default)]
pub struct ScanBatch {
    serials: Vec<SerialNumber>,
}

impl ScanBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append one scan.
    ///
    /// Invalid input returns the validation error without touching the
    /// batch; the caller surfaces it and refocuses the input. A re-scan of
    /// a serial already in the batch reports [`ScanOutcome::Duplicate`]
    /// and changes nothing.
    pub fn push_scan(&mut self, raw: &str) -> Result<ScanOutcome> {
        let serial = SerialNumber::parse(raw)?;
        if self.serials.contains(&serial) {
            return Ok(ScanOutcome::Duplicate);
        }
        self.serials.push(serial);
        Ok(ScanOutcome::Added)
    }

    /// Push every whitespace-delimited chunk of a pasted block.
    ///
    /// Chunks are processed in order and independently; a rejected chunk
    /// is recorded verbatim and does not stop the rest.
    pub fn push_paste(&mut self, text: &str) -> PasteReport {
        let mut report = PasteReport::default();
        for chunk in text.split_whitespace() {
            match self.push_scan(chunk) {
                Ok(ScanOutcome::Added) => report.added += 1,
                Ok(ScanOutcome::Duplicate) => report.duplicates += 1,
                Err(_) => report.rejected.push(chunk.to_string()),
            }
        }
        report
    }

    /// Remove a serial by value. No-op when absent.
    pub fn remove(&mut self, serial: &str) {
        self.serials.retain(|s| s.as_str() != serial);
    }

    /// Read-only snapshot, in scan order.
    pub fn serials(&self) -> &[SerialNumber] {
        &self.serials
    }

    pub fn len(&self) -> usize {
        self.serials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.serials.is_empty()
    }

    /// Drop every scan. Called after a successful submission.
    pub fn clear(&mut self) {
        self.serials.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SN_A: &str = "AAAAAAAAAAAAAAAAA";
    const SN_B: &str = "BBBBBBBBBBBBBBBBB";

    #[test]
    fn test_push_scan_added() {
        let mut batch = ScanBatch::new();
        let outcome = batch.push_scan(SN_A).expect("valid scan");
        assert_eq!(outcome, ScanOutcome::Added);
        assert_eq!(batch.len(), 1);
        assert_eq!(batch.serials()[0].as_str(), SN_A);
    }

    #[test]
    fn test_push_scan_trims() {
        let mut batch = ScanBatch::new();
        batch.push_scan("  AAAAAAAAAAAAAAAAA\n").expect("valid scan");
        assert_eq!(batch.serials()[0].as_str(), SN_A);
    }

    #[test]
    fn test_push_scan_rejects_16_chars() {
        let mut batch = ScanBatch::new();
        let err = batch.push_scan("AAAAAAAAAAAAAAAA").unwrap_err();
        assert!(matches!(err, crate::Error::Validation(_)));
        assert!(batch.is_empty());
    }

    #[test]
    fn test_duplicate_is_idempotent() {
        let mut batch = ScanBatch::new();
        assert_eq!(batch.push_scan(SN_A).unwrap(), ScanOutcome::Added);
        assert_eq!(batch.push_scan(SN_A).unwrap(), ScanOutcome::Duplicate);
        // Same serial with surrounding whitespace is still the same unit
        assert_eq!(batch.push_scan(" AAAAAAAAAAAAAAAAA ").unwrap(), ScanOutcome::Duplicate);
        assert_eq!(batch.len(), 1);
    }

    #[test]
    fn test_never_two_equal_serials() {
        let mut batch = ScanBatch::new();
        let scans = [SN_A, SN_B, SN_A, SN_B, SN_A];
        for scan in scans {
            batch.push_scan(scan).expect("valid scan");
        }
        assert_eq!(batch.len(), 2); // distinct count, not push count
        let listed: Vec<&str> = batch.serials().iter().map(|s| s.as_str()).collect();
        assert_eq!(listed, vec![SN_A, SN_B]);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut batch = ScanBatch::new();
        batch.push_scan(SN_B).unwrap();
        batch.push_scan(SN_A).unwrap();
        let listed: Vec<&str> = batch.serials().iter().map(|s| s.as_str()).collect();
        assert_eq!(listed, vec![SN_B, SN_A]);
    }

    #[test]
    fn test_remove_present() {
        let mut batch = ScanBatch::new();
        batch.push_scan(SN_A).unwrap();
        batch.push_scan(SN_B).unwrap();
        batch.remove(SN_A);
        let listed: Vec<&str> = batch.serials().iter().map(|s| s.as_str()).collect();
        assert_eq!(listed, vec![SN_B]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut batch = ScanBatch::new();
        batch.push_scan(SN_A).unwrap();
        batch.remove(SN_B);
        batch.remove(SN_B); // idempotent
        assert_eq!(batch.len(), 1);
    }

    #[test]
    fn test_paste_two_serials_space_separated() {
        let mut batch = ScanBatch::new();
        let report = batch.push_paste("AAAAAAAAAAAAAAAAA BBBBBBBBBBBBBBBBB");
        assert_eq!(report.added, 2);
        assert!(report.all_valid());
        let listed: Vec<&str> = batch.serials().iter().map(|s| s.as_str()).collect();
        assert_eq!(listed, vec![SN_A, SN_B]);
    }

    #[test]
    fn test_paste_newline_separated() {
        let mut batch = ScanBatch::new();
        let report = batch.push_paste("AAAAAAAAAAAAAAAAA\nBBBBBBBBBBBBBBBBB\n");
        assert_eq!(report.added, 2);
        assert!(report.all_valid());
    }

    #[test]
    fn test_paste_keeps_valid_chunks_around_rejects() {
        let mut batch = ScanBatch::new();
        let report = batch.push_paste("AAAAAAAAAAAAAAAAA bad BBBBBBBBBBBBBBBBB");
        assert_eq!(report.added, 2);
        assert_eq!(report.rejected, vec!["bad".to_string()]);
        assert!(!report.all_valid());
        assert_eq!(batch.len(), 2);
    }

    #[test]
    fn test_paste_counts_duplicates() {
        let mut batch = ScanBatch::new();
        batch.push_scan(SN_A).unwrap();
        let report = batch.push_paste("AAAAAAAAAAAAAAAAA BBBBBBBBBBBBBBBBB");
        assert_eq!(report.added, 1);
        assert_eq!(report.duplicates, 1);
        assert_eq!(batch.len(), 2);
    }

    #[test]
    fn test_paste_empty_text() {
        let mut batch = ScanBatch::new();
        let report = batch.push_paste("  \n \t ");
        assert_eq!(report, PasteReport::default());
        assert!(batch.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut batch = ScanBatch::new();
        batch.push_scan(SN_A).unwrap();
        batch.push_scan(SN_B).unwrap();
        batch.clear();
        assert!(batch.is_empty());
    }
}
