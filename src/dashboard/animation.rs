//! Year animation: play/pause state and the periodic tick that advances the year slider.

use serde::Serialize;
use std::time::Duration;

pub const FIRST_YEAR: i32 = 2016;
pub const LAST_YEAR: i32 = 2024;

/// How often the presentation layer should call [`AnimationDriver::tick`].
pub const TICK_INTERVAL: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Phase {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// Drives the year slider while the animation plays.
///
/// ```
/// use atmoscope::AnimationDriver;
///
/// let mut animation = AnimationDriver::new();
/// animation.play();
/// assert_eq!(animation.tick(), Some(2016)); // 2024 wraps around
/// animation.pause();
/// assert_eq!(animation.tick(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnimationDriver {
    phase: Phase,
    current_year: i32,
}

impl AnimationDriver {
    pub fn new() -> Self {
        Self {
            phase: Phase::Stopped,
            current_year: LAST_YEAR,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    pub fn play(&mut self) {
        self.phase = Phase::Playing;
    }

    /// Pauses a playing animation; has no effect when stopped.
    pub fn pause(&mut self) {
        if self.phase == Phase::Playing {
            self.phase = Phase::Paused;
        }
    }

    /// Advances the year by one while playing, wrapping after [`LAST_YEAR`].
    ///
    /// Returns the new year, or `None` if the animation is not playing.
    pub fn tick(&mut self) -> Option<i32> {
        if !self.is_playing() {
            return None;
        }
        self.current_year = if self.current_year >= LAST_YEAR {
            FIRST_YEAR
        } else {
            self.current_year + 1
        };
        Some(self.current_year)
    }

    /// Status line shown under the play/pause buttons.
    pub fn status(&self) -> String {
        match self.phase {
            Phase::Stopped => "Stopped".to_string(),
            Phase::Playing => format!("Playing... Year: {}", self.current_year),
            Phase::Paused => format!("Paused - Year: {}", self.current_year),
        }
    }
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let animation = AnimationDriver::new();
        assert_eq!(animation.phase(), Phase::Stopped);
        assert!(!animation.is_playing());
        assert_eq!(animation.current_year(), 2024);
        assert_eq!(animation.status(), "Stopped");
    }

    #[test]
    fn test_tick_without_play_does_nothing() {
        let mut animation = AnimationDriver::new();
        assert_eq!(animation.tick(), None);
        assert_eq!(animation.current_year(), 2024);
    }

    #[test]
    fn test_play_wraps_and_advances() {
        let mut animation = AnimationDriver::new();
        animation.play();
        assert!(animation.is_playing());
        assert_eq!(animation.tick(), Some(2016));
        assert_eq!(animation.tick(), Some(2017));
        assert_eq!(animation.status(), "Playing... Year: 2017");

        let years: Vec<_> = (0..8).filter_map(|_| animation.tick()).collect();
        assert_eq!(years, [2018, 2019, 2020, 2021, 2022, 2023, 2024, 2016]);
    }

    #[test]
    fn test_pause_freezes_year() {
        let mut animation = AnimationDriver::new();
        animation.play();
        animation.tick();
        animation.pause();
        assert_eq!(animation.phase(), Phase::Paused);
        assert_eq!(animation.tick(), None);
        assert_eq!(animation.tick(), None);
        assert_eq!(animation.current_year(), 2016);
        assert_eq!(animation.status(), "Paused - Year: 2016");

        animation.play();
        assert_eq!(animation.tick(), Some(2017));
    }

    #[test]
    fn test_pause_while_stopped_stays_stopped() {
        let mut animation = AnimationDriver::new();
        animation.pause();
        assert_eq!(animation.phase(), Phase::Stopped);
    }
}
