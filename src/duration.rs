use derive_more::Display;
use serde::{Deserialize, Serialize};

// Game loops per real second at "faster" speed
const LOOPS_PER_SECOND: f32 = 22.4;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Display, Serialize, Deserialize)]
#[display(fmt = "{}:{:02}", "self.seconds() / 60", "self.seconds() % 60")]
pub struct Duration {
    loops: u32,
}

impl Duration {
    pub const fn from_loops(loops: u32) -> Self {
        Self { loops }
    }

    pub const fn loops(self) -> u32 {
        self.loops
    }

    pub fn seconds(self) -> u32 {
        (self.loops as f32 / LOOPS_PER_SECOND) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_game_time() {
        assert_eq!(Duration::from_loops(2688).to_string(), "2:00");
        assert_eq!(Duration::from_loops(400).to_string(), "0:17");
    }
}
