//! Reactive slots - stable cells that props bind to.
//!
//! A `Slot` holds one of three bindings: a static value, a signal, or a
//! getter. Reads inside a derived or effect track the binding (signal and
//! getter reads register their own dependencies; rebinds and static writes
//! are announced through a version signal), so layout and frame buffer
//! deriveds re-run exactly when a bound property changes.
//!
//! A `SlotArray` is a growable column of slots with a per-column default,
//! backing the parallel arrays in [`crate::engine::arrays`].

use std::cell::RefCell;
use std::rc::Rc;

use spark_signals::{signal, Signal};

// =============================================================================
// Binding
// =============================================================================

/// The three ways a slot can be bound.
enum Binding<T: Clone + PartialEq + 'static> {
    Value(T),
    Signal(Signal<T>),
    Getter(Rc<dyn Fn() -> T>),
}

impl<T: Clone + PartialEq + 'static> Clone for Binding<T> {
    fn clone(&self) -> Self {
        match self {
            Binding::Value(v) => Binding::Value(v.clone()),
            Binding::Signal(s) => Binding::Signal(s.clone()),
            Binding::Getter(f) => Binding::Getter(f.clone()),
        }
    }
}

// =============================================================================
// Slot
// =============================================================================

/// A stable reactive cell.
///
/// Cloning a slot shares the underlying binding; components hand out clones
/// freely while the cell itself never moves.
pub struct Slot<T: Clone + PartialEq + 'static> {
    binding: Rc<RefCell<Binding<T>>>,
    version: Signal<u64>,
    next_version: Rc<RefCell<u64>>,
}

impl<T: Clone + PartialEq + 'static> Clone for Slot<T> {
    fn clone(&self) -> Self {
        Self {
            binding: self.binding.clone(),
            version: self.version.clone(),
            next_version: self.next_version.clone(),
        }
    }
}

impl<T: Clone + PartialEq + 'static> Slot<T> {
    /// Create a slot holding a static value.
    pub fn new(value: T) -> Self {
        Self {
            binding: Rc::new(RefCell::new(Binding::Value(value))),
            version: signal(0u64),
            next_version: Rc::new(RefCell::new(0)),
        }
    }

    /// Read the current value (reactive).
    ///
    /// The borrow is released before evaluating signal/getter bindings so a
    /// getter may freely read other slots.
    pub fn get(&self) -> T {
        // Dependency on rebinds and static writes.
        let _ = self.version.get();

        let binding = self.binding.borrow().clone();
        match binding {
            Binding::Value(v) => v,
            Binding::Signal(s) => s.get(),
            Binding::Getter(f) => f(),
        }
    }

    /// Bind a static value.
    pub fn set_value(&self, value: T) {
        *self.binding.borrow_mut() = Binding::Value(value);
        self.bump();
    }

    /// Bind a signal. The connection stays live: writes to the signal reach
    /// every derived that reads this slot.
    pub fn set_signal(&self, sig: Signal<T>) {
        *self.binding.borrow_mut() = Binding::Signal(sig);
        self.bump();
    }

    /// Bind a getter function, evaluated on every read.
    pub fn set_getter<F>(&self, getter: F)
    where
        F: Fn() -> T + 'static,
    {
        *self.binding.borrow_mut() = Binding::Getter(Rc::new(getter));
        self.bump();
    }

    fn bump(&self) {
        let next = {
            let mut next = self.next_version.borrow_mut();
            *next += 1;
            *next
        };
        self.version.set(next);
    }
}

// =============================================================================
// SlotArray
// =============================================================================

/// A growable column of slots with a shared default value.
///
/// Indices map to components; cells are created lazily on first access and
/// stay stable for the array's lifetime.
pub struct SlotArray<T: Clone + PartialEq + 'static> {
    cells: RefCell<Vec<Slot<T>>>,
    default: T,
}

impl<T: Clone + PartialEq + 'static> SlotArray<T> {
    /// Create an array whose cells start as `default`.
    pub fn new(default: T) -> Self {
        Self {
            cells: RefCell::new(Vec::new()),
            default,
        }
    }

    /// Get the slot at an index, growing the column as needed.
    fn slot(&self, index: usize) -> Slot<T> {
        let mut cells = self.cells.borrow_mut();
        while cells.len() <= index {
            cells.push(Slot::new(self.default.clone()));
        }
        cells[index].clone()
    }

    /// Ensure a cell exists at this index.
    pub fn ensure_capacity(&self, index: usize) {
        let _ = self.slot(index);
    }

    /// Read the value at an index (reactive).
    pub fn get(&self, index: usize) -> T {
        self.slot(index).get()
    }

    /// Bind a static value at an index.
    pub fn set_value(&self, index: usize, value: T) {
        self.slot(index).set_value(value);
    }

    /// Bind a signal at an index.
    pub fn set_signal(&self, index: usize, sig: Signal<T>) {
        self.slot(index).set_signal(sig);
    }

    /// Bind a getter at an index.
    pub fn set_getter<F>(&self, index: usize, getter: F)
    where
        F: Fn() -> T + 'static,
    {
        self.slot(index).set_getter(getter);
    }

    /// Reset the cell at an index back to the default binding.
    pub fn clear(&self, index: usize) {
        let exists = self.cells.borrow().len() > index;
        if exists {
            self.slot(index).set_value(self.default.clone());
        }
    }

    /// Drop all cells, releasing memory.
    pub fn clear_all(&self) {
        self.cells.borrow_mut().clear();
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use spark_signals::derived;

    #[test]
    fn test_slot_static_value() {
        let slot = Slot::new(1u16);
        assert_eq!(slot.get(), 1);

        slot.set_value(5);
        assert_eq!(slot.get(), 5);
    }

    #[test]
    fn test_slot_signal_binding() {
        let slot = Slot::new(0i32);
        let sig = signal(10i32);
        slot.set_signal(sig.clone());

        assert_eq!(slot.get(), 10);

        sig.set(20);
        assert_eq!(slot.get(), 20);
    }

    #[test]
    fn test_slot_getter_binding() {
        let base = signal(2u16);
        let slot = Slot::new(0u16);
        let base_for_getter = base.clone();
        slot.set_getter(move || base_for_getter.get() * 2);

        assert_eq!(slot.get(), 4);
        base.set(8);
        assert_eq!(slot.get(), 16);
    }

    #[test]
    fn test_slot_tracked_in_derived() {
        let slot = Slot::new(1u32);
        let slot_for_derived = slot.clone();
        let doubled = derived(move || slot_for_derived.get() * 2);

        assert_eq!(doubled.get(), 2);

        // Static rebind goes through the version signal.
        slot.set_value(21);
        assert_eq!(doubled.get(), 42);

        // Signal rebind, then a write through the signal.
        let sig = signal(3u32);
        slot.set_signal(sig.clone());
        assert_eq!(doubled.get(), 6);
        sig.set(50);
        assert_eq!(doubled.get(), 100);
    }

    #[test]
    fn test_slot_array_defaults_and_growth() {
        let arr = SlotArray::new(String::new());
        assert_eq!(arr.get(7), "");

        arr.set_value(3, "hello".to_string());
        assert_eq!(arr.get(3), "hello");
        assert_eq!(arr.get(2), "");
    }

    #[test]
    fn test_slot_array_clear() {
        let arr = SlotArray::new(0u16);
        arr.set_value(1, 9);
        assert_eq!(arr.get(1), 9);

        arr.clear(1);
        assert_eq!(arr.get(1), 0);

        // Clearing an index never touched is a no-op.
        arr.clear(100);
    }
}
