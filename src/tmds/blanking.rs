//! Video timing modes and the control-period blanking pattern.

use crate::tmds::{CTL_00, CTL_01, CTL_10, CTL_11};
use crate::types::Symbol;

/// Timing parameters for one supported video mode: active and total
/// resolution plus the four porch widths.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct VideoMode {
    pub h_active: usize,
    pub v_active: usize,
    pub h_total: usize,
    pub v_total: usize,
    pub h_front_porch: usize,
    pub h_back_porch: usize,
    pub v_front_porch: usize,
    pub v_back_porch: usize,
}

/// The supported active resolutions and their blanking geometry.
pub const VIDEO_MODES: [VideoMode; 5] = [
    VideoMode {
        h_active: 640,
        v_active: 480,
        h_total: 800,
        v_total: 525,
        h_front_porch: 8,
        h_back_porch: 40,
        v_front_porch: 2,
        v_back_porch: 25,
    },
    VideoMode {
        h_active: 800,
        v_active: 600,
        h_total: 1056,
        v_total: 628,
        h_front_porch: 40,
        h_back_porch: 88,
        v_front_porch: 1,
        v_back_porch: 23,
    },
    VideoMode {
        h_active: 1280,
        v_active: 720,
        h_total: 1650,
        v_total: 750,
        h_front_porch: 110,
        h_back_porch: 220,
        v_front_porch: 5,
        v_back_porch: 20,
    },
    VideoMode {
        h_active: 1600,
        v_active: 900,
        h_total: 1800,
        v_total: 1000,
        h_front_porch: 24,
        h_back_porch: 96,
        v_front_porch: 1,
        v_back_porch: 96,
    },
    VideoMode {
        h_active: 1920,
        v_active: 1080,
        h_total: 2200,
        v_total: 1125,
        h_front_porch: 88,
        h_back_porch: 148,
        v_front_porch: 4,
        v_back_porch: 36,
    },
];

impl VideoMode {
    /// Look up the mode for an active resolution. `None` if the resolution is
    /// not on the whitelist.
    pub fn for_active(width: usize, height: usize) -> Option<&'static VideoMode> {
        VIDEO_MODES
            .iter()
            .find(|mode| mode.h_active == width && mode.v_active == height)
    }

    /// Total horizontal blanking (everything outside active columns).
    pub fn h_blank(&self) -> usize {
        self.h_total - self.h_active
    }

    /// Total vertical blanking (everything outside active rows).
    pub fn v_blank(&self) -> usize {
        self.v_total - self.v_active
    }
}

/// Build the blanking pattern for one mode: a row-major h_total x v_total
/// plane of control-period codes. The bottom-right h_active x v_active block,
/// where active video goes, is left zero for the frame encoder to overwrite.
pub fn blanking_pattern(mode: &VideoMode) -> Vec<Symbol> {
    let mut plane = vec![0; mode.h_total * mode.v_total];
    let hb = mode.h_blank();
    let vb = mode.v_blank();
    let (hfp, hbp) = (mode.h_front_porch, mode.h_back_porch);
    let (vfp, vbp) = (mode.v_front_porch, mode.v_back_porch);

    // (C1,C0)=(0,0): corner/padding regions outside both porches.
    fill(&mut plane, mode.h_total, 0..vfp, 0..hfp, CTL_00);
    fill(&mut plane, mode.h_total, 0..vfp, hb - hbp..mode.h_total, CTL_00);
    fill(&mut plane, mode.h_total, vb - vbp..vb, 0..hfp, CTL_00);
    fill(&mut plane, mode.h_total, vb - vbp..vb, hb - hbp..mode.h_total, CTL_00);
    fill(&mut plane, mode.h_total, vb..mode.v_total, 0..hb, CTL_00);

    // (C1,C0)=(0,1): top/bottom porch strips inside the horizontal span.
    fill(&mut plane, mode.h_total, 0..vfp, hfp..hb - hbp, CTL_01);
    fill(&mut plane, mode.h_total, vb - vbp..mode.v_total, hfp..hb - hbp, CTL_01);

    // (C1,C0)=(1,0): left/right porch strips alongside the active rows.
    fill(&mut plane, mode.h_total, vfp..vb - vbp, 0..hfp, CTL_10);
    fill(&mut plane, mode.h_total, vfp..vb - vbp, hb - hbp..mode.h_total, CTL_10);

    // (C1,C0)=(1,1): guard band directly framing active video.
    fill(&mut plane, mode.h_total, vfp..vb - vbp, hfp..hb - hbp, CTL_11);

    plane
}

fn fill(
    plane: &mut [Symbol],
    width: usize,
    rows: std::ops::Range<usize>,
    cols: std::ops::Range<usize>,
    code: Symbol,
) {
    for y in rows {
        plane[y * width + cols.start..y * width + cols.end].fill(code);
    }
}
