use utfx::destination::Destination;

/// Forwards every unit to a closure.
pub struct FnDestination<F>(F);

impl<F> FnDestination<F> {
    pub fn new(f: F) -> Self {
        FnDestination(f)
    }
}

impl<T, F: FnMut(T)> Destination<T> for FnDestination<F> {
    fn accept(&mut self, unit: T) {
        (self.0)(unit)
    }
}

/// Counts units without storing them.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    count: usize,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

impl<T> Destination<T> for Counter {
    fn accept(&mut self, _unit: T) {
        self.count += 1;
    }
}
