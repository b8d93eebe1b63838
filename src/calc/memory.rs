/// The single memory register behind the MC / MR / M+ / M− / MS keys.
///
/// Lives independently of the accumulator, so clearing the display keeps
/// the stored value.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct MemoryRegister {
    value: f64,
}

impl MemoryRegister {
    pub fn clear(&mut self) {
        self.value = 0.0;
    }

    pub fn store(&mut self, value: f64) {
        self.value = value;
    }

    pub fn recall(&self) -> f64 {
        self.value
    }

    pub fn add(&mut self, value: f64) {
        self.value += value;
    }

    pub fn subtract(&mut self, value: f64) {
        self.value -= value;
    }

    /// Whether the "M" indicator should be lit.
    pub fn is_set(&self) -> bool {
        self.value != 0.0
    }
}
