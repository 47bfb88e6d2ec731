use crate::duration::Duration;
use log::info;
use serde::{Deserialize, Serialize};

/// Set by a nuclear launch warning. While active the army pulls back home.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NukeAlert {
    raised_at: Option<u32>,
    duration: Duration,
}

impl NukeAlert {
    pub fn new(duration: Duration) -> Self {
        Self {
            raised_at: None,
            duration,
        }
    }

    pub fn raise(&mut self, game_loop: u32) {
        info!("Nuke launch detected at {}", Duration::from_loops(game_loop));
        self.raised_at = Some(game_loop);
    }

    /// Active for `[raised, raised + duration)`
    pub fn is_active(&self, game_loop: u32) -> bool {
        self.raised_at.map_or(false, |raised| {
            game_loop >= raised && game_loop - raised < self.duration.loops()
        })
    }

    /// Clears the alert once it ran out, returns whether it is still active.
    pub fn check(&mut self, game_loop: u32) -> bool {
        if self.is_active(game_loop) {
            return true;
        }
        if self.raised_at.take().is_some() {
            info!("Nuke alert over at {}", Duration::from_loops(game_loop));
        }
        false
    }
}
