//! One-shot visibility latch
//!
//! Gates the section's entrance animation. The latch starts `false`, flips to
//! `true` the first time the section is seen intersecting the viewport, and
//! stays there.

/// Terminal boolean signal fed by viewport intersection reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilityLatch {
    visible: bool,
}

impl VisibilityLatch {
    /// A latch that has not fired.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the latch has fired.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feed one intersection report.
    ///
    /// Returns `true` only for the report that fires the latch. Callers use
    /// it to stop observing.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        if self.visible || !is_intersecting {
            return false;
        }
        self.visible = true;
        tracing::debug!("section entered viewport");
        true
    }
}
