//! Staggered entrance sequencing for project cards.
//!
//! Cards fade in and rise from below their slot, one after another, rather
//! than appearing simultaneously. This is presentation sequencing only: the
//! delays carry no correctness dependency, and replacing the filtered list
//! restarts them from zero.

use serde::Serialize;

/// Milliseconds added to the entrance delay per card index.
pub const REVEAL_STEP_MS: u64 = 100;

/// Vertical offset in pixels a card rises from while fading in.
pub const RISE_OFFSET_PX: u32 = 30;

/// Delay before the card at `index` starts its entrance animation.
pub fn reveal_delay_ms(index: usize) -> u64 {
    REVEAL_STEP_MS * index as u64
}

/// Entrance/exit hints for one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Reveal {
    /// Delay before the entrance animation starts.
    pub delay_ms: u64,
    /// The card fades in while rising from this many pixels below its slot.
    pub rise_from_px: u32,
}

impl Reveal {
    pub fn at_index(index: usize) -> Self {
        Reveal {
            delay_ms: reveal_delay_ms(index),
            rise_from_px: RISE_OFFSET_PX,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
