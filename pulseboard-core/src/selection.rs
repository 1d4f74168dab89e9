//! Selectable-card-with-detail state machine.
//!
//! One value: the currently open record's key, or nothing. Selecting while a
//! detail is already open replaces it in a single transition; there is no
//! state in which two details are open.

/// Selection state for one card grid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection<K> {
    selected: Option<K>,
}

impl<K: PartialEq> Selection<K> {
    pub fn new() -> Self {
        Self { selected: None }
    }

    /// Open the detail view for `key`, replacing any prior selection.
    pub fn select(&mut self, key: K) {
        self.selected = Some(key);
    }

    /// Close the detail view. Idempotent.
    pub fn dismiss(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&K> {
        self.selected.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn is_selected(&self, key: &K) -> bool {
        self.selected.as_ref() == Some(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let sel: Selection<usize> = Selection::new();
        assert!(!sel.is_open());
        assert_eq!(sel.selected(), None);
    }

    #[test]
    fn select_opens_exactly_one() {
        let mut sel = Selection::new();
        sel.select(2usize);
        assert!(sel.is_open());
        assert!(sel.is_selected(&2));
        assert!(!sel.is_selected(&0));
    }

    #[test]
    fn reselect_replaces_atomically() {
        let mut sel = Selection::new();
        sel.select("a");
        sel.select("b");
        assert_eq!(sel.selected(), Some(&"b"));
        assert!(!sel.is_selected(&"a"));
    }

    #[test]
    fn dismiss_is_idempotent() {
        let mut sel = Selection::new();
        sel.select(1usize);
        sel.dismiss();
        assert!(!sel.is_open());
        sel.dismiss();
        assert!(!sel.is_open());
    }
}
