//! # Scroll-Spy Engine
//!
//! Tracks which form section is "in view" as the user scrolls, and keeps
//! that tracking out of the way while a programmatic scroll (a rail click)
//! is in flight. The engine is an explicit two-phase state machine:
//!
//! ```text
//!            begin_navigation(target)
//! Observing ──────────────────────────> Suppressed
//!            <──────────────────────────
//!            finish_navigation(ticket)   (settle timer, current ticket only)
//! ```
//!
//! - **Observing**: scroll offsets feed a rate-limited recomputation of the
//!   active section by geometric containment.
//! - **Suppressed**: all observations are dropped. Entered with an
//!   optimistic active-section update; left only when the settle timer for
//!   the *most recent* navigation fires. Smooth-scroll completion is not
//!   reliably observable, so a fixed timeout is the termination signal, and
//!   it always fires, so suppression can never stick.
//!
//! The engine owns no timers itself: callers schedule the frame tick and the
//! settle delay and hand the results back via [`ScrollSpy::recompute`] and
//! [`ScrollSpy::finish_navigation`]. That keeps every transition
//! synchronous and unit-testable.

use std::time::Duration;

use crate::sections::SectionId;

/// Tuning constants for the containment rule and timers.
///
/// The margins are a UX choice, not a derivable invariant, so they live in
/// config rather than being hard-coded at the call sites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpyConfig {
    /// Extends each section's trigger window upward, so a section activates
    /// slightly before its top edge reaches the probe point
    pub lead_margin: f32,
    /// Extends each section's trigger window downward past its bottom edge
    pub trail_margin: f32,
    /// Offset added to the raw scroll position to form the probe point,
    /// roughly the height of the fixed header plus some reading distance
    pub lookahead: f32,
    /// How long observations stay suppressed after a programmatic scroll.
    /// Must exceed the scroll animation duration or the observer fights the
    /// animation and flickers the highlight.
    pub settle: Duration,
    /// Minimum spacing between recomputations while free-scrolling
    pub frame_interval: Duration,
}

impl Default for SpyConfig {
    fn default() -> Self {
        SpyConfig {
            lead_margin: 40.0,
            trail_margin: 16.0,
            lookahead: 96.0,
            settle: Duration::from_millis(700),
            frame_interval: Duration::from_millis(16),
        }
    }
}

/// Document-space position of one section, supplied by the layout layer on
/// every recomputation. Geometry is never cached here: section heights
/// change whenever the clinical mode or an expansion toggle changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionGeometry {
    pub id: SectionId,
    /// Top edge in document coordinates
    pub top: f32,
    /// Rendered height, including the section header
    pub height: f32,
}

impl SectionGeometry {
    /// Whether `probe` falls inside this section's trigger window
    /// `[top - lead_margin, top + height + trail_margin)`.
    fn contains(&self, probe: f32, config: &SpyConfig) -> bool {
        probe >= self.top - config.lead_margin
            && probe < self.top + self.height + config.trail_margin
    }
}

/// Proof that a navigation was started; redeemed when its settle timer
/// fires. Tickets from superseded navigations are rejected, which is what
/// keeps two rapid rail clicks from producing two competing resumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavTicket {
    seq: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Observing,
    Suppressed,
}

/// Active-section tracker. Single-writer: the GUI owns one instance and
/// routes both scroll observations and navigation requests through it.
#[derive(Debug)]
pub struct ScrollSpy {
    config: SpyConfig,
    active: SectionId,
    phase: Phase,
    /// Sequence number of the most recent navigation; only the matching
    /// ticket may end suppression
    settle_seq: u64,
    /// Latest observed offset awaiting recomputation. `Some` means a frame
    /// tick is already scheduled, so further observations just overwrite
    /// the offset instead of scheduling more work.
    pending: Option<f32>,
}

impl ScrollSpy {
    pub fn new(config: SpyConfig) -> Self {
        ScrollSpy {
            config,
            active: SectionId::first(),
            phase: Phase::Observing,
            settle_seq: 0,
            pending: None,
        }
    }

    /// The section the rail should highlight. Always a registry id.
    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn config(&self) -> &SpyConfig {
        &self.config
    }

    /// True while a programmatic scroll is in flight
    pub fn is_suppressed(&self) -> bool {
        self.phase == Phase::Suppressed
    }

    /// Record a raw scroll observation.
    ///
    /// Returns `true` when the caller must schedule a recomputation tick
    /// (one `frame_interval` from now). Returns `false` when a tick is
    /// already pending (the burst collapses into the latest offset), or
    /// while suppressed, where observations are dropped entirely.
    pub fn record_scroll(&mut self, offset: f32) -> bool {
        if self.phase == Phase::Suppressed {
            return false;
        }
        let tick_needed = self.pending.is_none();
        self.pending = Some(offset);
        tick_needed
    }

    /// Run the containment rule against current geometry, draining the
    /// pending observation. Returns the new active id if it changed.
    ///
    /// The active section is the *last* section in document order whose
    /// trigger window contains the probe point; near boundaries the windows
    /// overlap and the last match favors the section being scrolled into.
    /// No match (probe above the first section) retains the previous value:
    /// the active section is never cleared.
    ///
    /// Never touches expansion state: free scrolling must not collapse or
    /// expand anything.
    pub fn recompute(&mut self, geometry: &[SectionGeometry]) -> Option<SectionId> {
        let offset = self.pending.take()?;
        if self.phase == Phase::Suppressed {
            // A tick scheduled just before a navigation landed; ignore it.
            return None;
        }

        let probe = offset + self.config.lookahead;
        let mut hit = None;
        for section in geometry {
            if section.contains(probe, &self.config) {
                hit = Some(section.id);
            }
        }

        match hit {
            Some(id) if id != self.active => {
                self.active = id;
                Some(id)
            }
            _ => None,
        }
    }

    /// Start a programmatic navigation to `target`.
    ///
    /// The active section is updated optimistically *before* suppression is
    /// entered, so a recomputation sneaking in between cannot overwrite it.
    /// Any pending observation is discarded, and any earlier ticket is
    /// invalidated; at most one settle timer ever governs this machine.
    pub fn begin_navigation(&mut self, target: SectionId) -> NavTicket {
        self.active = target;
        self.pending = None;
        self.phase = Phase::Suppressed;
        self.settle_seq += 1;
        NavTicket {
            seq: self.settle_seq,
        }
    }

    /// Settle timer fired. Resumes observation only for the most recent
    /// navigation's ticket; stale tickets are ignored. Returns whether the
    /// machine resumed.
    pub fn finish_navigation(&mut self, ticket: NavTicket) -> bool {
        if self.phase == Phase::Suppressed && ticket.seq == self.settle_seq {
            self.phase = Phase::Observing;
            true
        } else {
            false
        }
    }
}

impl Default for ScrollSpy {
    fn default() -> Self {
        ScrollSpy::new(SpyConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Three sections laid out back to back: tops 0, 400, 1000.
    fn geometry() -> Vec<SectionGeometry> {
        vec![
            SectionGeometry {
                id: SectionId::Patient,
                top: 0.0,
                height: 400.0,
            },
            SectionGeometry {
                id: SectionId::Visit,
                top: 400.0,
                height: 600.0,
            },
            SectionGeometry {
                id: SectionId::History,
                top: 1000.0,
                height: 500.0,
            },
        ]
    }

    /// Observe an offset and immediately run the tick, returning the change.
    fn scroll_to(spy: &mut ScrollSpy, offset: f32, geo: &[SectionGeometry]) -> Option<SectionId> {
        spy.record_scroll(offset);
        spy.recompute(geo)
    }

    fn test_config() -> SpyConfig {
        SpyConfig {
            lead_margin: 40.0,
            trail_margin: 16.0,
            lookahead: 96.0,
            ..SpyConfig::default()
        }
    }

    #[test]
    fn test_initial_active_is_first_section() {
        let spy = ScrollSpy::default();
        assert_eq!(spy.active(), SectionId::first());
        assert!(!spy.is_suppressed());
    }

    #[test]
    fn test_scroll_into_section_activates_it() {
        let mut spy = ScrollSpy::new(test_config());
        let geo = geometry();

        // Probe = 500 + 96 = 596, inside Visit's window [360, 1016)
        assert_eq!(scroll_to(&mut spy, 500.0, &geo), Some(SectionId::Visit));
        assert_eq!(spy.active(), SectionId::Visit);

        // Probe = 1200 + 96 = 1296, inside History's window
        assert_eq!(scroll_to(&mut spy, 1200.0, &geo), Some(SectionId::History));
    }

    #[test]
    fn test_no_change_reports_none() {
        let mut spy = ScrollSpy::new(test_config());
        let geo = geometry();
        assert_eq!(scroll_to(&mut spy, 10.0, &geo), None);
        assert_eq!(spy.active(), SectionId::Patient);
    }

    #[test]
    fn test_above_all_windows_retains_previous() {
        let mut spy = ScrollSpy::new(test_config());
        let geo = geometry();
        scroll_to(&mut spy, 500.0, &geo);
        assert_eq!(spy.active(), SectionId::Visit);

        // Probe = -300 + 96 = -204, above Patient's window [-40, ..)
        assert_eq!(scroll_to(&mut spy, -300.0, &geo), None);
        assert_eq!(spy.active(), SectionId::Visit);
    }

    #[test]
    fn test_overlap_favors_later_section() {
        let mut spy = ScrollSpy::new(test_config());
        let geo = geometry();

        // Probe = 310 + 96 = 406: inside Patient's window [-40, 416) *and*
        // Visit's window [360, 1016). Last match in document order wins.
        assert_eq!(scroll_to(&mut spy, 310.0, &geo), Some(SectionId::Visit));
    }

    #[test]
    fn test_rate_limiter_collapses_bursts() {
        let mut spy = ScrollSpy::new(test_config());
        let geo = geometry();

        assert!(spy.record_scroll(100.0));
        // Burst: no new ticks, latest offset wins
        assert!(!spy.record_scroll(450.0));
        assert!(!spy.record_scroll(1200.0));

        assert_eq!(spy.recompute(&geo), Some(SectionId::History));

        // Drained: next observation schedules again
        assert!(spy.record_scroll(0.0));
    }

    #[test]
    fn test_recompute_without_observation_is_noop() {
        let mut spy = ScrollSpy::new(test_config());
        assert_eq!(spy.recompute(&geometry()), None);
    }

    #[test]
    fn test_navigation_is_optimistic_and_suppresses() {
        let mut spy = ScrollSpy::new(test_config());
        let geo = geometry();

        let ticket = spy.begin_navigation(SectionId::History);
        assert_eq!(spy.active(), SectionId::History);
        assert!(spy.is_suppressed());

        // Scroll events during suppression are dropped outright
        assert!(!spy.record_scroll(0.0));
        assert_eq!(spy.recompute(&geo), None);
        assert_eq!(spy.active(), SectionId::History);

        assert!(spy.finish_navigation(ticket));
        assert!(!spy.is_suppressed());

        // Free scrolling can move the highlight again
        assert_eq!(scroll_to(&mut spy, 0.0, &geo), Some(SectionId::Patient));
    }

    #[test]
    fn test_pending_tick_from_before_navigation_is_ignored() {
        let mut spy = ScrollSpy::new(test_config());
        let geo = geometry();

        // Tick scheduled, then a rail click lands before it runs
        assert!(spy.record_scroll(1200.0));
        spy.begin_navigation(SectionId::Visit);

        assert_eq!(spy.recompute(&geo), None);
        assert_eq!(spy.active(), SectionId::Visit);
    }

    #[test]
    fn test_rapid_clicks_leave_one_live_ticket() {
        let mut spy = ScrollSpy::new(test_config());

        let stale = spy.begin_navigation(SectionId::Visit);
        let live = spy.begin_navigation(SectionId::History);
        assert_eq!(spy.active(), SectionId::History);

        // First navigation's timer fires late: rejected, still suppressed
        assert!(!spy.finish_navigation(stale));
        assert!(spy.is_suppressed());

        assert!(spy.finish_navigation(live));
        assert!(!spy.is_suppressed());
        assert_eq!(spy.active(), SectionId::History);
    }

    #[test]
    fn test_finish_twice_is_harmless() {
        let mut spy = ScrollSpy::new(test_config());
        let ticket = spy.begin_navigation(SectionId::Exam);
        assert!(spy.finish_navigation(ticket));
        assert!(!spy.finish_navigation(ticket));
        assert!(!spy.is_suppressed());
    }
}
