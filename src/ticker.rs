/// Rolling-digit counter: each digit slot spins toward its target value,
/// staggered left to right, advanced by the animation tick.

const STAGGER_TICKS: u8 = 3;
const ROLL_SPEED: f32 = 0.35;
const SNAP_EPSILON: f32 = 0.05;

struct DigitSlot {
    /// Continuous position along the 0..9 digit strip.
    pos: f32,
    target: f32,
    /// Ticks to wait before this slot starts rolling.
    delay: u8,
}

pub(crate) struct Ticker {
    value: u64,
    slots: Vec<DigitSlot>,
}

impl Ticker {
    pub(crate) fn new(value: u64) -> Self {
        let mut ticker = Self {
            value,
            slots: Vec::new(),
        };
        ticker.set_value(value);
        for slot in &mut ticker.slots {
            slot.pos = slot.target;
            slot.delay = 0;
        }
        ticker
    }

    pub(crate) fn value(&self) -> u64 {
        self.value
    }

    /// Point every digit slot at the new value. Slots roll there over the
    /// following ticks, each starting a little after its left neighbor.
    pub(crate) fn set_value(&mut self, value: u64) {
        self.value = value;
        let digits: Vec<u8> = value
            .to_string()
            .bytes()
            .map(|b| b - b'0')
            .collect();

        // Grow or shrink the slot row to match the digit count; fresh
        // slots start parked at zero.
        self.slots.resize_with(digits.len(), || DigitSlot {
            pos: 0.0,
            target: 0.0,
            delay: 0,
        });

        for (i, (slot, digit)) in self.slots.iter_mut().zip(digits).enumerate() {
            slot.target = f32::from(digit);
            slot.delay = i as u8 * STAGGER_TICKS;
        }
    }

    /// Advance the animation one frame.
    pub(crate) fn tick(&mut self) {
        for slot in &mut self.slots {
            if slot.delay > 0 {
                slot.delay -= 1;
                continue;
            }
            let diff = slot.target - slot.pos;
            if diff.abs() <= SNAP_EPSILON {
                slot.pos = slot.target;
            } else {
                slot.pos += diff * ROLL_SPEED;
            }
        }
    }

    /// True while any slot is still rolling or waiting its turn.
    pub(crate) fn animating(&self) -> bool {
        self.slots
            .iter()
            .any(|s| s.delay > 0 || s.pos != s.target)
    }

    /// The digit currently showing in each slot, left to right.
    pub(crate) fn frame_digits(&self) -> Vec<u8> {
        self.slots
            .iter()
            .map(|s| (s.pos.round() as i32).rem_euclid(10) as u8)
            .collect()
    }
}
