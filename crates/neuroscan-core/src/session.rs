//! Scan session - the simulated upload/analysis pipeline
//!
//! This is a display simulation, not a real pipeline: no bytes move and no
//! inference runs. Progress exists solely to animate the dashboard, so the
//! machine has no failure, retry, or cancellation paths - every phase always
//! succeeds after its fixed number of ticks.
//!
//! The session itself is time-free. The caller owns the clock: it calls
//! [`ScanSession::tick`] on a fixed interval while [`ScanSession::needs_tick`]
//! is true, and schedules the one-shot finalize delay when a tick reports
//! [`SessionPhase::Finalizing`]. The epoch counter makes that one-shot safe:
//! replacing or removing the scan bumps the epoch, and a finalize carrying a
//! stale epoch is discarded, so a delay scheduled for an abandoned cycle can
//! never resurrect it.

use crate::report::AnalysisReport;
use crate::scan::SelectedScan;

/// Percent added to upload progress per tick
pub const UPLOAD_STEP: u8 = 5;

/// Percent added to processing progress per tick
pub const PROCESSING_STEP: u8 = 2;

/// Phase of the simulated pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No scan selected
    Idle,
    /// Upload progress animating toward 100
    Uploading,
    /// Upload done, waiting for the user to start analysis
    Ready,
    /// Processing progress animating toward 100
    Processing,
    /// Processing hit 100; the short fixed delay before the result appears
    Finalizing,
    /// Result populated
    Complete,
}

/// State for one scan's trip through the simulated pipeline
#[derive(Debug, Clone)]
pub struct ScanSession {
    phase: SessionPhase,
    scan: Option<SelectedScan>,
    upload_progress: u8,
    processing_progress: u8,
    report: Option<AnalysisReport>,
    /// Bumped on every select/remove; stale finalize callbacks are dropped
    epoch: u64,
    upload_step: u8,
    processing_step: u8,
}

impl ScanSession {
    /// Create an idle session with the default step sizes
    pub fn new() -> Self {
        Self::with_steps(UPLOAD_STEP, PROCESSING_STEP)
    }

    /// Create an idle session with configured step sizes
    ///
    /// A zero step would never reach 100; it is clamped to 1.
    pub fn with_steps(upload_step: u8, processing_step: u8) -> Self {
        Self {
            phase: SessionPhase::Idle,
            scan: None,
            upload_progress: 0,
            processing_progress: 0,
            report: None,
            epoch: 0,
            upload_step: upload_step.max(1),
            processing_step: processing_step.max(1),
        }
    }

    /// Current phase
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// The selected scan, if any
    pub fn scan(&self) -> Option<&SelectedScan> {
        self.scan.as_ref()
    }

    /// Upload percentage (0-100)
    pub fn upload_progress(&self) -> u8 {
        self.upload_progress
    }

    /// Processing percentage (0-100), meaningful only while processing
    pub fn processing_progress(&self) -> u8 {
        self.processing_progress
    }

    /// The analysis result, populated once per completed cycle
    pub fn report(&self) -> Option<&AnalysisReport> {
        self.report.as_ref()
    }

    /// Current epoch, to tag one-shot finalize callbacks with
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Whether analysis is in flight (from trigger until the result lands)
    pub fn is_processing(&self) -> bool {
        matches!(
            self.phase,
            SessionPhase::Processing | SessionPhase::Finalizing
        )
    }

    /// Whether the caller should be running the repeating tick timer
    pub fn needs_tick(&self) -> bool {
        matches!(
            self.phase,
            SessionPhase::Uploading | SessionPhase::Processing
        )
    }

    /// Select a scan, from any phase
    ///
    /// Discards the previous result and both progress counters, bumps the
    /// epoch so any in-flight finalize is orphaned, and starts the simulated
    /// upload from zero.
    pub fn select_scan(&mut self, scan: SelectedScan) {
        log::info!("Scan selected: {} ({})", scan.file_name, scan.size_display());
        self.scan = Some(scan);
        self.report = None;
        self.upload_progress = 0;
        self.processing_progress = 0;
        self.epoch += 1;
        self.phase = SessionPhase::Uploading;
    }

    /// Remove the scan, from any phase
    ///
    /// Clears everything back to the initial state.
    pub fn remove_scan(&mut self) {
        if let Some(scan) = &self.scan {
            log::info!("Scan removed: {}", scan.file_name);
        }
        self.scan = None;
        self.report = None;
        self.upload_progress = 0;
        self.processing_progress = 0;
        self.epoch += 1;
        self.phase = SessionPhase::Idle;
    }

    /// Start analysis
    ///
    /// Only legal from `Ready` (which implies a scan is selected); from any
    /// other phase this is a no-op. Returns whether analysis started.
    pub fn start_analysis(&mut self) -> bool {
        if self.phase != SessionPhase::Ready {
            log::debug!("start_analysis ignored in phase {:?}", self.phase);
            return false;
        }
        self.processing_progress = 0;
        self.phase = SessionPhase::Processing;
        log::info!("Analysis started");
        true
    }

    /// Advance whichever progress counter is active and return the phase
    /// after the tick
    ///
    /// A `Finalizing` return is the edge on which the caller schedules the
    /// one-shot finalize delay; it is reported exactly once per cycle since
    /// `needs_tick` goes false at the same moment.
    pub fn tick(&mut self) -> SessionPhase {
        match self.phase {
            SessionPhase::Uploading => self.tick_upload(),
            SessionPhase::Processing => self.tick_processing(),
            _ => {}
        }
        self.phase
    }

    /// One upload tick; at 100 the upload is done and the scan is ready
    pub fn tick_upload(&mut self) {
        if self.phase != SessionPhase::Uploading {
            return;
        }
        self.upload_progress = self.upload_progress.saturating_add(self.upload_step).min(100);
        if self.upload_progress >= 100 {
            self.phase = SessionPhase::Ready;
            log::info!("Upload complete");
        }
    }

    /// One processing tick; at 100 the session enters the finalize delay
    pub fn tick_processing(&mut self) {
        if self.phase != SessionPhase::Processing {
            return;
        }
        self.processing_progress = self
            .processing_progress
            .saturating_add(self.processing_step)
            .min(100);
        if self.processing_progress >= 100 {
            self.phase = SessionPhase::Finalizing;
            log::info!("Processing complete, finalizing");
        }
    }

    /// Land the result after the finalize delay
    ///
    /// Ignored unless the session is still `Finalizing` *and* the epoch
    /// matches - a mismatch means the scan was replaced or removed while the
    /// delay was in flight. Returns whether the result landed.
    pub fn finalize(&mut self, epoch: u64) -> bool {
        if self.phase != SessionPhase::Finalizing || epoch != self.epoch {
            log::debug!(
                "finalize discarded (phase {:?}, epoch {} vs {})",
                self.phase,
                epoch,
                self.epoch
            );
            return false;
        }
        self.report = Some(AnalysisReport::placeholder());
        self.phase = SessionPhase::Complete;
        log::info!("Analysis result available");
        true
    }
}

impl Default for ScanSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan() -> SelectedScan {
        SelectedScan::new("scan.dcm", 2 * 1024 * 1024)
    }

    /// Drive the session from Uploading to Ready
    fn upload_fully(session: &mut ScanSession) {
        while session.phase() == SessionPhase::Uploading {
            session.tick();
        }
    }

    /// Drive the session to Complete for the current scan
    fn complete_cycle(session: &mut ScanSession) {
        upload_fully(session);
        assert!(session.start_analysis());
        while session.phase() == SessionPhase::Processing {
            session.tick();
        }
        assert!(session.finalize(session.epoch()));
    }

    #[test]
    fn test_select_starts_upload_from_zero() {
        let mut session = ScanSession::new();
        session.select_scan(scan());
        assert_eq!(session.phase(), SessionPhase::Uploading);
        assert_eq!(session.upload_progress(), 0);
        assert_eq!(session.processing_progress(), 0);
        assert!(session.report().is_none());
    }

    #[test]
    fn test_upload_monotone_and_capped_at_100() {
        let mut session = ScanSession::new();
        session.select_scan(scan());

        let mut last = 0;
        for _ in 0..40 {
            session.tick();
            let p = session.upload_progress();
            assert!(p >= last);
            assert!(p <= 100);
            last = p;
        }
        assert_eq!(session.upload_progress(), 100);
        assert_eq!(session.phase(), SessionPhase::Ready);
    }

    #[test]
    fn test_upload_takes_twenty_ticks_of_five() {
        let mut session = ScanSession::new();
        session.select_scan(scan());
        for i in 1..=20 {
            session.tick();
            assert_eq!(session.upload_progress(), 5 * i);
        }
        assert_eq!(session.phase(), SessionPhase::Ready);
    }

    #[test]
    fn test_start_analysis_is_noop_without_scan() {
        let mut session = ScanSession::new();
        assert!(!session.start_analysis());
        assert_eq!(session.phase(), SessionPhase::Idle);
    }

    #[test]
    fn test_start_analysis_is_noop_mid_upload() {
        let mut session = ScanSession::new();
        session.select_scan(scan());
        session.tick();
        assert!(!session.start_analysis());
        assert_eq!(session.phase(), SessionPhase::Uploading);
    }

    #[test]
    fn test_processing_only_advances_while_processing() {
        let mut session = ScanSession::new();
        session.select_scan(scan());

        // Ticks during upload must not move the processing counter
        for _ in 0..10 {
            session.tick();
        }
        assert_eq!(session.processing_progress(), 0);

        upload_fully(&mut session);
        assert!(session.start_analysis());
        session.tick();
        assert_eq!(session.processing_progress(), 2);
    }

    #[test]
    fn test_processing_takes_fifty_ticks_of_two() {
        let mut session = ScanSession::new();
        session.select_scan(scan());
        upload_fully(&mut session);
        assert!(session.start_analysis());

        for i in 1..=50 {
            session.tick();
            assert_eq!(session.processing_progress(), 2 * i);
        }
        assert_eq!(session.phase(), SessionPhase::Finalizing);
        assert!(session.is_processing());
        assert!(!session.needs_tick());
    }

    #[test]
    fn test_finalize_lands_report() {
        let mut session = ScanSession::new();
        session.select_scan(scan());
        complete_cycle(&mut session);

        assert_eq!(session.phase(), SessionPhase::Complete);
        assert!(!session.is_processing());
        let report = session.report().expect("report after finalize");
        assert_eq!(report.probability_percent, 87);
        assert_eq!(report.location, "Right Temporal Lobe");
        assert!((report.size_cm2 - 3.2).abs() < f32::EPSILON);
    }

    #[test]
    fn test_result_requires_full_upload_and_cycle() {
        let mut session = ScanSession::new();
        session.select_scan(scan());
        // Every intermediate phase has no report and a full upload behind
        // any Complete state
        assert!(session.report().is_none());
        upload_fully(&mut session);
        assert!(session.report().is_none());
        session.start_analysis();
        while session.phase() == SessionPhase::Processing {
            assert!(session.report().is_none());
            session.tick();
        }
        assert!(session.report().is_none());
        session.finalize(session.epoch());
        assert_eq!(session.upload_progress(), 100);
        assert!(session.report().is_some());
    }

    #[test]
    fn test_stale_finalize_is_discarded() {
        let mut session = ScanSession::new();
        session.select_scan(scan());
        upload_fully(&mut session);
        session.start_analysis();
        while session.phase() == SessionPhase::Processing {
            session.tick();
        }
        let stale_epoch = session.epoch();

        // User replaces the scan while the finalize delay is in flight
        session.select_scan(SelectedScan::new("other.nii", 1024));
        assert!(!session.finalize(stale_epoch));
        assert!(session.report().is_none());
        assert_eq!(session.phase(), SessionPhase::Uploading);
    }

    #[test]
    fn test_reselect_clears_result_from_every_phase() {
        // Complete, Ready, Uploading, Processing, Finalizing, Idle
        let mut session = ScanSession::new();
        session.select_scan(scan());
        complete_cycle(&mut session);
        assert!(session.report().is_some());

        session.select_scan(scan());
        assert!(session.report().is_none());
        assert_eq!(session.upload_progress(), 0);
        assert_eq!(session.processing_progress(), 0);
        assert_eq!(session.phase(), SessionPhase::Uploading);

        // Mid-upload reselect also resets the counter
        for _ in 0..5 {
            session.tick();
        }
        session.select_scan(scan());
        assert_eq!(session.upload_progress(), 0);
    }

    #[test]
    fn test_remove_mid_upload_resets_everything() {
        let mut session = ScanSession::new();
        session.select_scan(scan());
        for _ in 0..7 {
            session.tick();
        }
        session.remove_scan();

        assert_eq!(session.phase(), SessionPhase::Idle);
        assert!(session.scan().is_none());
        assert!(session.report().is_none());
        assert_eq!(session.upload_progress(), 0);
        assert_eq!(session.processing_progress(), 0);
        assert!(!session.needs_tick());
    }

    #[test]
    fn test_remove_orphans_inflight_finalize() {
        let mut session = ScanSession::new();
        session.select_scan(scan());
        upload_fully(&mut session);
        session.start_analysis();
        while session.phase() == SessionPhase::Processing {
            session.tick();
        }
        let stale_epoch = session.epoch();

        session.remove_scan();
        assert!(!session.finalize(stale_epoch));
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert!(session.report().is_none());
    }

    #[test]
    fn test_zero_steps_are_clamped() {
        let mut session = ScanSession::with_steps(0, 0);
        session.select_scan(scan());
        for _ in 0..100 {
            session.tick();
        }
        assert_eq!(session.phase(), SessionPhase::Ready);
    }
}
