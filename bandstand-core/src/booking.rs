//! The simulated ticket-booking flow.
//!
//! Bookings don't go anywhere: the form "processes" for a fixed delay,
//! confirms, shows the confirmation for another fixed delay, then resets.
//! This type tracks the stage; whoever drives it schedules the delays.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How long the fake payment step runs before confirming.
pub const PROCESSING_DELAY: Duration = Duration::from_millis(2000);
/// How long the confirmation stays up before the form resets.
pub const CONFIRMATION_DELAY: Duration = Duration::from_millis(2000);

/// Where the booking form currently is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStage {
    #[default]
    Idle,
    Processing,
    Confirmed,
}

/// The booking form's lifecycle: Idle → Processing → Confirmed → Idle.
///
/// There is no failure branch; processing always confirms. Each transition
/// only fires from the stage it belongs to, so a submit while processing
/// is a no-op (the page disables the button for the same reason).
#[derive(Debug, Clone, Default)]
pub struct BookingFlow {
    stage: BookingStage,
}

impl BookingFlow {
    pub fn new() -> BookingFlow {
        BookingFlow::default()
    }

    pub fn stage(&self) -> BookingStage {
        self.stage
    }

    /// Submit the form. Returns whether processing actually started.
    pub fn submit(&mut self) -> bool {
        if self.stage == BookingStage::Idle {
            self.stage = BookingStage::Processing;
            true
        } else {
            false
        }
    }

    /// The processing delay elapsed.
    pub fn finish_processing(&mut self) {
        if self.stage == BookingStage::Processing {
            self.stage = BookingStage::Confirmed;
        }
    }

    /// The confirmation delay elapsed; the form resets.
    pub fn acknowledge(&mut self) {
        if self.stage == BookingStage::Confirmed {
            self.stage = BookingStage::Idle;
        }
    }
}
