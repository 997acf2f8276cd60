//! Geometry and styling of the bead ring.
//!
//! Everything here is a pure function of bead count, progress and size; the
//! only moving part is the idle [`Wobble`], stepped once per display frame
//! by its owner.

mod wobble;

pub use wobble::Wobble;

use std::f64::consts::{FRAC_PI_2, TAU};

pub const BEAD_RADIUS: f64 = 8.0;
pub const GURU_BEAD_RADIUS: f64 = 12.0;
pub const DEFAULT_BEAD_SPACING: f64 = 12.0;
pub const DEFAULT_RING_SIZE: f64 = 320.0;

pub const THREAD_COLOR: &str = "#8B4513";
pub const THREAD_THICKNESS: f64 = 3.0;

pub const UPCOMING_COLOR: &str = "#deb887";
pub const COMPLETED_COLOR: &str = "#f97316";
pub const CURRENT_COLOR: &str = "#ffb347";
pub const GURU_COLOR: &str = "#7c3aed";

/// Progress of a single bead relative to the current index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BeadStatus {
    Completed,
    Current,
    Upcoming,
}

impl BeadStatus {
    pub fn classify(index: usize, current: usize) -> Self {
        if index < current {
            Self::Completed
        } else if index == current {
            Self::Current
        } else {
            Self::Upcoming
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bead {
    pub index: usize,
    /// Center of the bead.
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub status: BeadStatus,
}

impl Bead {
    /// Bead 0 marks the start of a round.
    pub fn is_guru(&self) -> bool {
        self.index == 0
    }

    pub fn color(&self) -> &'static str {
        if self.is_guru() {
            return GURU_COLOR;
        }
        match self.status {
            BeadStatus::Completed => COMPLETED_COLOR,
            BeadStatus::Current => CURRENT_COLOR,
            BeadStatus::Upcoming => UPCOMING_COLOR,
        }
    }

    /// Scale at time `now_ms`; only the current bead pulses.
    pub fn scale(&self, now_ms: f64) -> f64 {
        match self.status {
            BeadStatus::Current => pulse_scale(now_ms),
            _ => 1.0,
        }
    }

    pub fn left(&self) -> f64 {
        self.x - self.radius
    }

    pub fn top(&self) -> f64 {
        self.y - self.radius
    }

    pub fn diameter(&self) -> f64 {
        self.radius * 2.0
    }
}

/// Thread from one bead's center towards its clockwise neighbour.
#[derive(Clone, Debug, PartialEq)]
pub struct Thread {
    pub x: f64,
    pub y: f64,
    pub length: f64,
    /// Radians, measured like `atan2`.
    pub angle: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RingLayout {
    pub size: f64,
    pub beads: Vec<Bead>,
    pub threads: Vec<Thread>,
}

pub fn pulse_scale(now_ms: f64) -> f64 {
    1.2 + 0.05 * (now_ms / 200.0).sin()
}

/// Angle of bead `index`, with bead 0 at the top going clockwise.
pub fn bead_angle(index: usize, total_beads: usize) -> f64 {
    (index as f64 / total_beads as f64) * TAU - FRAC_PI_2
}

/// Lay out `total_beads` evenly on a closed ring inside a `size` square.
pub fn layout(
    total_beads: usize,
    current_bead_index: usize,
    size: f64,
    spacing: f64,
) -> RingLayout {
    let size = if size.is_finite() { size.max(0.0) } else { 0.0 };
    if total_beads == 0 {
        return RingLayout {
            size,
            ..Default::default()
        };
    }

    let center = size / 2.0;
    let ring_radius = (center - GURU_BEAD_RADIUS - spacing).max(0.0);
    let point = |index: usize| {
        let angle = bead_angle(index % total_beads, total_beads);
        (
            center + ring_radius * angle.cos(),
            center + ring_radius * angle.sin(),
        )
    };

    let mut beads = Vec::with_capacity(total_beads);
    let mut threads = Vec::with_capacity(total_beads);
    for index in 0..total_beads {
        let (x, y) = point(index);
        let (next_x, next_y) = point(index + 1);

        threads.push(Thread {
            x,
            y,
            length: (next_x - x).hypot(next_y - y),
            angle: (next_y - y).atan2(next_x - x),
        });
        beads.push(Bead {
            index,
            x,
            y,
            radius: if index == 0 {
                GURU_BEAD_RADIUS
            } else {
                BEAD_RADIUS
            },
            status: BeadStatus::classify(index, current_bead_index),
        });
    }

    RingLayout {
        size,
        beads,
        threads,
    }
}
