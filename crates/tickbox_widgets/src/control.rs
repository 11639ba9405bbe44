//! Value-changed targets shared by toggle controls

use std::fmt;

/// Callback fired with the control's new value
pub type ValueChangedHandler = Box<dyn FnMut(bool)>;

/// Ordered list of value-changed targets
///
/// Targets fire in registration order on every user-driven change.
/// Programmatic updates never reach them.
#[derive(Default)]
pub struct ValueChangedTargets {
    handlers: Vec<ValueChangedHandler>,
}

impl ValueChangedTargets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a target
    pub fn add<F>(&mut self, handler: F)
    where
        F: FnMut(bool) + 'static,
    {
        self.handlers.push(Box::new(handler));
    }

    /// Fire every target with `value`
    pub fn send(&mut self, value: bool) {
        for handler in &mut self.handlers {
            handler(value);
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn clear(&mut self) {
        self.handlers.clear();
    }
}

impl fmt::Debug for ValueChangedTargets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueChangedTargets")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_targets_fire_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut targets = ValueChangedTargets::new();

        let first = log.clone();
        targets.add(move |v| first.borrow_mut().push(("first", v)));
        let second = log.clone();
        targets.add(move |v| second.borrow_mut().push(("second", v)));

        targets.send(true);
        assert_eq!(*log.borrow(), [("first", true), ("second", true)]);
        assert_eq!(targets.len(), 2);
    }

    #[test]
    fn test_clear() {
        let mut targets = ValueChangedTargets::new();
        targets.add(|_| {});
        targets.clear();
        assert!(targets.is_empty());
        targets.send(false);
    }
}
