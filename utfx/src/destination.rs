//! Push side of a conversion.

/// Push-based consumer of units.
///
/// A destination only acknowledges receipt. It may keep state across calls
/// (a buffer, a counter) and expose it through its own API once the
/// conversion is done, e.g. `StringDestination::finish` in the `stream`
/// crate.
///
/// The unit type is a parameter rather than an associated type so a single
/// destination can accept more than one kind of unit.
pub trait Destination<T> {
    /// Stores or forwards one unit.
    fn accept(&mut self, unit: T);
}

impl<T, D: Destination<T> + ?Sized> Destination<T> for &mut D {
    fn accept(&mut self, unit: T) {
        (**self).accept(unit)
    }
}

/// Array destination: units are appended in order.
impl<T> Destination<T> for Vec<T> {
    fn accept(&mut self, unit: T) {
        self.push(unit);
    }
}
