/// A mutable cell threaded through every effect invoked by one dispatch.
///
/// Many effects may read and write the same holder; the last writer wins. Holders never fail.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Holder<T> {
    pub value: T,
}

impl<T> Holder<T>
where
    T: Copy,
{
    pub fn new(value: T) -> Self {
        Self { value }
    }

    pub fn get(&self) -> T {
        self.value
    }

    pub fn set(&mut self, value: T) {
        self.value = value;
    }
}

/// A boolean holder, usually a "cancelled" or "applied" flag.
pub type BooleanHolder = Holder<bool>;

/// A numeric holder, usually a multiplier.
pub type NumberHolder = Holder<f64>;

/// An integer holder, for stages.
pub type IntegerHolder = Holder<i32>;

impl NumberHolder {
    /// Multiplies the held value in place.
    pub fn scale(&mut self, factor: f64) {
        self.value *= factor;
    }
}

impl IntegerHolder {
    /// Adds to the held value in place.
    pub fn increment(&mut self, delta: i32) {
        self.value += delta;
    }
}
