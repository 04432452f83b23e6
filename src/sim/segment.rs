//! Seven-segment encoding for the HUD counters
//!
//! Segment order follows the classic calculator layout:
//! top, upper-right, lower-right, bottom, lower-left, upper-left, middle.

use serde::{Deserialize, Serialize};

/// Number of segments in one digit
pub const SEGMENT_COUNT: usize = 7;

/// Lit/unlit state of the seven segments of one digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Segments(pub [bool; SEGMENT_COUNT]);

impl Segments {
    pub const TOP: usize = 0;
    pub const UPPER_RIGHT: usize = 1;
    pub const LOWER_RIGHT: usize = 2;
    pub const BOTTOM: usize = 3;
    pub const LOWER_LEFT: usize = 4;
    pub const UPPER_LEFT: usize = 5;
    pub const MIDDLE: usize = 6;

    /// Number of lit segments
    pub fn lit_count(&self) -> usize {
        self.0.iter().filter(|on| **on).count()
    }

    pub fn is_lit(&self, segment: usize) -> bool {
        self.0.get(segment).copied().unwrap_or(false)
    }
}

// Bit n set = segment n lit
const DIGIT_MASKS: [u8; 10] = [
    0b011_1111, // 0
    0b000_0110, // 1
    0b101_1011, // 2
    0b100_1111, // 3
    0b110_0110, // 4
    0b110_1101, // 5
    0b111_1101, // 6
    0b000_0111, // 7
    0b111_1111, // 8
    0b110_1111, // 9
];

/// Encode a single decimal digit. Only `digit % 10` is used.
pub fn encode(digit: u32) -> Segments {
    let mask = DIGIT_MASKS[(digit % 10) as usize];
    let mut segments = [false; SEGMENT_COUNT];
    for (i, seg) in segments.iter_mut().enumerate() {
        *seg = mask & (1 << i) != 0;
    }
    Segments(segments)
}

/// Encode `value` across `N` digits, most significant first.
///
/// Digits are peeled ones-first with `% 10` / `/ 10`; anything wider than
/// the display is dropped.
pub fn encode_number<const N: usize>(value: u32) -> [Segments; N] {
    let mut out = [Segments::default(); N];
    let mut rest = value;
    for slot in out.iter_mut().rev() {
        *slot = encode(rest % 10);
        rest /= 10;
    }
    out
}

/// All digit patterns shown on the HUD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hud {
    /// Move counter (hundreds, tens, ones)
    pub moves: [Segments; 3],
    /// Elapsed minutes (tens, ones)
    pub minutes: [Segments; 2],
    /// Elapsed seconds within the minute (tens, ones)
    pub seconds: [Segments; 2],
}

impl Hud {
    pub fn new(move_count: u32, elapsed_seconds: u32) -> Self {
        Self {
            moves: encode_number(move_count),
            minutes: encode_number(elapsed_seconds / 60),
            seconds: encode_number(elapsed_seconds % 60),
        }
    }
}

impl Hud {
    /// Copy with hidden groups blanked out
    pub fn masked(&self, visibility: HudVisibility) -> Self {
        let mut hud = *self;
        if !visibility.moves {
            hud.moves = [Segments::default(); 3];
        }
        if !visibility.timer {
            hud.minutes = [Segments::default(); 2];
            hud.seconds = [Segments::default(); 2];
        }
        hud
    }

    /// Total lit segments across every digit
    pub fn lit_count(&self) -> usize {
        self.moves
            .iter()
            .chain(&self.minutes)
            .chain(&self.seconds)
            .map(Segments::lit_count)
            .sum()
    }
}

/// Which HUD groups are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HudVisibility {
    pub moves: bool,
    pub timer: bool,
}

impl Default for HudVisibility {
    fn default() -> Self {
        Self {
            moves: true,
            timer: true,
        }
    }
}

impl Default for Hud {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_lights_all_but_middle() {
        let zero = encode(0);
        assert_eq!(zero.lit_count(), 6);
        assert!(!zero.is_lit(Segments::MIDDLE));
    }

    #[test]
    fn test_eight_lights_everything() {
        assert_eq!(encode(8).lit_count(), SEGMENT_COUNT);
    }

    #[test]
    fn test_digit_table() {
        let on = |d: u32| -> Vec<usize> {
            (0..SEGMENT_COUNT).filter(|s| encode(d).is_lit(*s)).collect()
        };
        assert_eq!(on(1), vec![Segments::UPPER_RIGHT, Segments::LOWER_RIGHT]);
        assert_eq!(
            on(4),
            vec![
                Segments::UPPER_RIGHT,
                Segments::LOWER_RIGHT,
                Segments::UPPER_LEFT,
                Segments::MIDDLE
            ]
        );
        assert_eq!(on(7), vec![Segments::TOP, Segments::UPPER_RIGHT, Segments::LOWER_RIGHT]);
        assert!(!encode(6).is_lit(Segments::UPPER_RIGHT));
        assert!(!encode(9).is_lit(Segments::LOWER_LEFT));
        assert!(!encode(2).is_lit(Segments::LOWER_RIGHT));
        assert!(!encode(5).is_lit(Segments::UPPER_RIGHT));
    }

    #[test]
    fn test_multi_digit_order() {
        assert_eq!(encode_number::<2>(25), [encode(2), encode(5)]);
        assert_eq!(encode_number::<3>(7), [encode(0), encode(0), encode(7)]);
        // Overflow keeps the low digits
        assert_eq!(encode_number::<3>(1234), [encode(2), encode(3), encode(4)]);
    }

    #[test]
    fn test_hud_splits_minutes_and_seconds() {
        let hud = Hud::new(42, 125);
        assert_eq!(hud.moves, encode_number::<3>(42));
        assert_eq!(hud.minutes, [encode(0), encode(2)]);
        assert_eq!(hud.seconds, [encode(0), encode(5)]);
    }

    #[test]
    fn test_masked_blanks_hidden_groups() {
        let hud = Hud::new(888, 0);
        let no_timer = hud.masked(HudVisibility {
            moves: true,
            timer: false,
        });
        assert_eq!(no_timer.moves, hud.moves);
        assert_eq!(no_timer.lit_count(), 21);

        let nothing = hud.masked(HudVisibility {
            moves: false,
            timer: false,
        });
        assert_eq!(nothing.lit_count(), 0);
        assert_eq!(hud.masked(HudVisibility::default()), hud);
    }
}
