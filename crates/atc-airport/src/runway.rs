//! The runway bank — one airport's runway flags and last-use stamps.

use atc_core::{RunwayIndex, Tick};

/// Availability flags and last-operation stamps for `R` runways.
///
/// A runway is **eligible** at tick `t` when it is not assigned and at least
/// `min_spacing` ticks have passed since it was last granted.  A runway that
/// has never been granted is eligible immediately.
///
/// Every read and write goes through [`is_eligible`][Self::is_eligible], so
/// the deterministic allocator and the learned gate can never disagree on
/// what "eligible" means.
#[derive(Clone, Debug)]
pub struct RunwayBank {
    available:   Vec<bool>,
    last_used:   Vec<Option<Tick>>,
    min_spacing: u64,
}

impl RunwayBank {
    /// `count` free, never-used runways.
    pub fn new(count: u16, min_spacing: u64) -> Self {
        Self {
            available: vec![true; count as usize],
            last_used: vec![None; count as usize],
            min_spacing,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.available.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.available.is_empty()
    }

    #[inline]
    pub fn min_spacing(&self) -> u64 {
        self.min_spacing
    }

    /// Number of runways currently assigned to a plane.
    pub fn in_use(&self) -> usize {
        self.available.iter().filter(|&&free| !free).count()
    }

    /// Tick of the most recent grant of `runway`, if any.
    pub fn last_used(&self, runway: RunwayIndex) -> Option<Tick> {
        self.last_used.get(runway.index()).copied().flatten()
    }

    /// `true` if `runway` exists, is free, and has cleared the spacing window.
    pub fn is_eligible(&self, runway: RunwayIndex, tick: Tick) -> bool {
        let i = runway.index();
        if i >= self.available.len() || !self.available[i] {
            return false;
        }
        match self.last_used[i] {
            None       => true,
            Some(last) => tick.since(last) >= self.min_spacing,
        }
    }

    /// Eligible runway indices in scan order.
    pub fn eligible(&self, tick: Tick) -> impl Iterator<Item = RunwayIndex> + '_ {
        (0..self.available.len() as u16)
            .map(RunwayIndex)
            .filter(move |&r| self.is_eligible(r, tick))
    }

    pub fn eligible_count(&self, tick: Tick) -> usize {
        self.eligible(tick).count()
    }

    /// Lowest-indexed eligible runway.
    pub fn first_eligible(&self, tick: Tick) -> Option<RunwayIndex> {
        self.eligible(tick).next()
    }

    /// Grant the first eligible runway: mark it taken and stamp `tick`.
    ///
    /// Returns `None` and leaves the bank untouched when nothing qualifies.
    pub fn request(&mut self, tick: Tick) -> Option<RunwayIndex> {
        let runway = self.first_eligible(tick)?;
        self.available[runway.index()] = false;
        self.last_used[runway.index()] = Some(tick);
        Some(runway)
    }

    /// Mark `runway` free again.  Out-of-range indices are ignored.
    pub fn release(&mut self, runway: RunwayIndex) {
        if let Some(flag) = self.available.get_mut(runway.index()) {
            *flag = true;
        }
    }
}
