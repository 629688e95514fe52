//! Plain data row types written by output backends.

use atc_plane::PlaneState;

/// One plane's state at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaneSnapshotRow {
    pub plane_id:    u32,
    pub tick:        u64,
    pub state:       PlaneState,
    pub x:           i32,
    pub y:           i32,
    pub origin:      u32,
    pub destination: u32,
    /// Held runway at the airport the plane is using; `None` off-runway.
    pub runway:      Option<u16>,
}

/// Fleet totals for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:               u64,
    pub transitions:        u64,
    pub waiting:            u64,
    pub taking_off:         u64,
    pub flying:             u64,
    pub landing:            u64,
    pub wait_after_landing: u64,
    pub runways_in_use:     u64,
}
