//! The radio's three-button keyboard.

use crate::button::TwoStateButton;
use car_common::hal::port::InputHandle;

/// Hold time on play that toggles loop silencing [s].
pub const SILENCE_TOGGLE_INTERVAL: f64 = 2.0;

/// Classified radio key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadioKey {
    /// A button is down, outcome not decided yet.
    Pending,
    /// Back, short.
    Previous,
    /// Back, held.
    Rewind,
    /// Play, short.
    TogglePause,
    /// Play, held for [`SILENCE_TOGGLE_INTERVAL`]. Handled by the radio itself.
    ToggleSilencing,
    /// Forward, short.
    Next,
    /// Forward, held.
    FastForward,
}

impl RadioKey {
    /// Text written to the player's stdin, `None` for keys the radio consumes.
    ///
    /// `Pending` maps to the empty string and is still forwarded.
    pub fn player_text(self) -> Option<&'static str> {
        match self {
            Self::Pending => Some(""),
            Self::Previous => Some("<"),
            Self::Rewind => Some("\x1b[D"),
            Self::TogglePause => Some(" "),
            Self::ToggleSilencing => None,
            Self::Next => Some(">"),
            Self::FastForward => Some("\x1b[C"),
        }
    }
}

/// Back / play / forward, polled in priority order play, back, forward.
pub struct RadioKeyboard {
    back: TwoStateButton<RadioKey>,
    play: TwoStateButton<RadioKey>,
    forward: TwoStateButton<RadioKey>,
}

impl RadioKeyboard {
    pub fn new(back: InputHandle, play: InputHandle, forward: InputHandle) -> Self {
        Self {
            back: TwoStateButton::new(back, RadioKey::Previous, RadioKey::Rewind, RadioKey::Pending),
            play: TwoStateButton::with_interval(
                play,
                RadioKey::TogglePause,
                RadioKey::ToggleSilencing,
                RadioKey::Pending,
                SILENCE_TOGGLE_INTERVAL,
            ),
            forward: TwoStateButton::new(forward, RadioKey::Next, RadioKey::FastForward, RadioKey::Pending),
        }
    }

    /// First non-empty classification. Lower-priority buttons are not
    /// sampled once a higher one reports something.
    pub fn poll(&mut self, now: f64) -> Option<RadioKey> {
        self.play
            .poll(now)
            .or_else(|| self.back.poll(now))
            .or_else(|| self.forward.poll(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use car_hal::{SimulatedBoard, SimulationDriver};
    use car_common::hal::driver::GpioDriver;
    use car_common::io::role::InputLogic;

    fn keyboard() -> (RadioKeyboard, SimulatedBoard) {
        let mut driver = SimulationDriver::new();
        let board = driver.board();
        let back = driver.open_input(10, InputLogic::ActiveLow).unwrap();
        let play = driver.open_input(9, InputLogic::ActiveLow).unwrap();
        let forward = driver.open_input(11, InputLogic::ActiveLow).unwrap();
        (RadioKeyboard::new(back, play, forward), board)
    }

    #[test]
    fn idle_reports_nothing() {
        let (mut kb, _) = keyboard();
        assert_eq!(kb.poll(0.0), None);
        assert_eq!(kb.poll(0.02), None);
    }

    #[test]
    fn forward_click_is_next() {
        let (mut kb, board) = keyboard();
        board.press(11);
        assert_eq!(kb.poll(1.0), Some(RadioKey::Pending));
        board.release(11);
        assert_eq!(kb.poll(1.125), Some(RadioKey::Next));
    }

    #[test]
    fn back_hold_is_rewind() {
        let (mut kb, board) = keyboard();
        board.press(10);
        assert_eq!(kb.poll(1.0), Some(RadioKey::Pending));
        assert_eq!(kb.poll(1.5), Some(RadioKey::Rewind));
    }

    #[test]
    fn play_hold_toggles_silencing_after_two_seconds() {
        let (mut kb, board) = keyboard();
        board.press(9);
        assert_eq!(kb.poll(0.0), Some(RadioKey::Pending));
        assert_eq!(kb.poll(1.5), Some(RadioKey::Pending));
        assert_eq!(kb.poll(2.0), Some(RadioKey::ToggleSilencing));
    }

    #[test]
    fn play_has_priority() {
        let (mut kb, board) = keyboard();
        board.press(9);
        board.press(11);
        assert_eq!(kb.poll(0.0), Some(RadioKey::Pending));
        board.release(9);
        board.release(11);
        // Play's click wins; forward was never sampled while play reported.
        assert_eq!(kb.poll(0.25), Some(RadioKey::TogglePause));
        assert_eq!(kb.poll(0.5), None);
    }

    #[test]
    fn player_text_mapping() {
        assert_eq!(RadioKey::Pending.player_text(), Some(""));
        assert_eq!(RadioKey::Previous.player_text(), Some("<"));
        assert_eq!(RadioKey::Rewind.player_text(), Some("\x1b[D"));
        assert_eq!(RadioKey::TogglePause.player_text(), Some(" "));
        assert_eq!(RadioKey::Next.player_text(), Some(">"));
        assert_eq!(RadioKey::FastForward.player_text(), Some("\x1b[C"));
        assert_eq!(RadioKey::ToggleSilencing.player_text(), None);
    }
}
