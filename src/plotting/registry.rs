//! Page-wide shared state for every chart instance.
//!
//! Category visibility flags, mark selection flags and the published
//! selection list are shared by all charts that hold a handle to the same
//! registry. A selection flag belongs to one mark: a chart id plus the index
//! of the record it draws. Charts subscribe to change events instead of scanning each other.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use log::debug;
use serde::Serialize;

use crate::plotting::data::Record;

/// Member identifier inside a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ChartId(u64);

impl fmt::Display for ChartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "chart-{}", self.0)
    }
}

/// Handle returned by [`ChartRegistry::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

/// A change to page-wide state.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryEvent {
    CategoryVisibility { category: String, visible: bool },
    RecordSelection {
        chart: ChartId,
        index: usize,
        selected: bool,
    },
    SelectionListPublished,
}

type Listener = Box<dyn FnMut(&RegistryEvent)>;

/// Shared registry handle. Cloning yields another handle to the same state.
#[derive(Clone, Default)]
pub struct ChartRegistry {
    inner: Rc<RefCell<RegistryState>>,
}

#[derive(Default)]
struct RegistryState {
    next_member_id: u64,
    next_subscription_id: u64,
    members: IndexMap<ChartId, Rc<[Record]>>,
    visibility: IndexMap<String, bool>,
    selected: BTreeSet<(ChartId, usize)>,
    selection_list: Vec<String>,
    listeners: Vec<(SubscriptionId, Listener)>,
    /// Depth of `notify` calls in progress
    notifying: usize,
    /// Unsubscribed while their listener list was taken out for notification
    removed: Vec<SubscriptionId>,
}

impl ChartRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a chart's records and return its id.
    pub fn register_member(&self, records: Rc<[Record]>) -> ChartId {
        let mut state = self.inner.borrow_mut();
        state.next_member_id = state.next_member_id.wrapping_add(1);
        let id = ChartId(state.next_member_id);
        state.members.insert(id, records);
        debug!("Registered {} ({} charts on page)", id, state.members.len());
        id
    }

    /// Remove a chart and drop the selection flags of its marks.
    pub fn unregister_member(&self, id: ChartId) {
        let mut state = self.inner.borrow_mut();
        state.members.shift_remove(&id);
        state.selected.retain(|(chart, _)| *chart != id);
    }

    /// Every registered chart with its records, in registration order.
    pub fn members(&self) -> Vec<(ChartId, Rc<[Record]>)> {
        self.inner
            .borrow()
            .members
            .iter()
            .map(|(id, records)| (*id, Rc::clone(records)))
            .collect()
    }

    pub fn member_count(&self) -> usize {
        self.inner.borrow().members.len()
    }

    /// Subscribe to change events.
    pub fn subscribe(&self, listener: impl FnMut(&RegistryEvent) + 'static) -> SubscriptionId {
        let mut state = self.inner.borrow_mut();
        state.next_subscription_id = state.next_subscription_id.wrapping_add(1);
        let id = SubscriptionId(state.next_subscription_id);
        state.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        let mut state = self.inner.borrow_mut();
        state.listeners.retain(|(sid, _)| *sid != id);
        if state.notifying > 0 {
            state.removed.push(id);
        }
    }

    /// Record a category with the default visible state, keeping any existing flag.
    pub fn ensure_category(&self, category: &str) {
        let mut state = self.inner.borrow_mut();
        if !state.visibility.contains_key(category) {
            state.visibility.insert(category.to_string(), true);
        }
    }

    /// Visibility of a category. Unknown categories are visible.
    pub fn is_category_visible(&self, category: &str) -> bool {
        self.inner
            .borrow()
            .visibility
            .get(category)
            .copied()
            .unwrap_or(true)
    }

    /// Set a category's visibility; notifies subscribers when it changes.
    pub fn set_category_visible(&self, category: &str, visible: bool) {
        let previous = self
            .inner
            .borrow_mut()
            .visibility
            .insert(category.to_string(), visible);
        if previous.unwrap_or(true) != visible {
            self.notify(&RegistryEvent::CategoryVisibility {
                category: category.to_string(),
                visible,
            });
        }
    }

    /// Categories currently hidden, in first-registered order.
    pub fn hidden_categories(&self) -> Vec<String> {
        self.inner
            .borrow()
            .visibility
            .iter()
            .filter(|(_, visible)| !**visible)
            .map(|(c, _)| c.clone())
            .collect()
    }

    /// Whether the mark drawing record `index` on `chart` is flagged.
    pub fn is_record_selected(&self, chart: ChartId, index: usize) -> bool {
        self.inner.borrow().selected.contains(&(chart, index))
    }

    /// Flag or unflag one mark; notifies subscribers when it changes.
    pub fn set_record_selected(&self, chart: ChartId, index: usize, selected: bool) {
        let changed = {
            let mut state = self.inner.borrow_mut();
            if selected {
                state.selected.insert((chart, index))
            } else {
                state.selected.remove(&(chart, index))
            }
        };
        if changed {
            self.notify(&RegistryEvent::RecordSelection {
                chart,
                index,
                selected,
            });
        }
    }

    /// Flagged marks, ordered by chart id then record index.
    pub fn selected_marks(&self) -> Vec<(ChartId, usize)> {
        self.inner.borrow().selected.iter().copied().collect()
    }

    /// Distinct record indices flagged on any chart, ascending.
    pub fn selected_records(&self) -> Vec<usize> {
        let state = self.inner.borrow();
        let indices: BTreeSet<usize> = state.selected.iter().map(|(_, i)| *i).collect();
        indices.into_iter().collect()
    }

    /// Unflag every selected mark.
    pub fn clear_selection(&self) {
        for (chart, index) in self.selected_marks() {
            self.set_record_selected(chart, index, false);
        }
    }

    /// Replace the page-level selection list.
    pub fn publish_selection_list(&self, lines: Vec<String>) {
        self.inner.borrow_mut().selection_list = lines;
        self.notify(&RegistryEvent::SelectionListPublished);
    }

    pub fn selection_list(&self) -> Vec<String> {
        self.inner.borrow().selection_list.clone()
    }

    fn notify(&self, event: &RegistryEvent) {
        // Listeners run without a borrow held so they may read the registry.
        let mut listeners = {
            let mut state = self.inner.borrow_mut();
            state.notifying += 1;
            std::mem::take(&mut state.listeners)
        };
        for (_, listener) in listeners.iter_mut() {
            listener(event);
        }
        let mut state = self.inner.borrow_mut();
        state.notifying -= 1;
        listeners.append(&mut state.listeners);
        let removed = &state.removed;
        listeners.retain(|(sid, _)| !removed.contains(sid));
        if state.notifying == 0 {
            state.removed.clear();
        }
        state.listeners = listeners;
    }
}

impl fmt::Debug for ChartRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.borrow();
        f.debug_struct("ChartRegistry")
            .field("members", &state.members.len())
            .field("visibility", &state.visibility)
            .field("selected", &state.selected)
            .field("selection_list", &state.selection_list)
            .field("listeners", &state.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_member_ids_are_unique() {
        let registry = ChartRegistry::new();
        let a = registry.register_member(Rc::from(Vec::<Record>::new()));
        let b = registry.register_member(Rc::from(Vec::<Record>::new()));
        assert_ne!(a, b);
        assert_eq!(registry.member_count(), 2);
        registry.unregister_member(a);
        assert_eq!(registry.members()[0].0, b);
    }

    #[test]
    fn test_categories_default_visible() {
        let registry = ChartRegistry::new();
        assert!(registry.is_category_visible("suv"));
        registry.ensure_category("suv");
        registry.set_category_visible("suv", false);
        registry.ensure_category("suv");
        assert!(!registry.is_category_visible("suv"));
        assert_eq!(registry.hidden_categories(), vec!["suv".to_string()]);
    }

    #[test]
    fn test_notifies_only_on_change() {
        let registry = ChartRegistry::new();
        let count = Rc::new(Cell::new(0));
        let seen = Rc::clone(&count);
        let sub = registry.subscribe(move |_| seen.set(seen.get() + 1));

        let chart = registry.register_member(Rc::from(Vec::<Record>::new()));
        registry.set_record_selected(chart, 3, true);
        registry.set_record_selected(chart, 3, true);
        registry.set_category_visible("a", true);
        assert_eq!(count.get(), 1);

        registry.set_category_visible("a", false);
        assert_eq!(count.get(), 2);

        registry.unsubscribe(sub);
        registry.set_record_selected(chart, 4, true);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_listener_may_read_registry() {
        let registry = ChartRegistry::new();
        let handle = registry.clone();
        let observed = Rc::new(Cell::new(false));
        let flag = Rc::clone(&observed);
        registry.subscribe(move |event| {
            if let RegistryEvent::RecordSelection { chart, index, .. } = event {
                flag.set(handle.is_record_selected(*chart, *index));
            }
        });
        let chart = registry.register_member(Rc::from(Vec::<Record>::new()));
        registry.set_record_selected(chart, 1, true);
        assert!(observed.get());
    }

    #[test]
    fn test_clear_selection() {
        let registry = ChartRegistry::new();
        let chart = registry.register_member(Rc::from(Vec::<Record>::new()));
        registry.set_record_selected(chart, 1, true);
        registry.set_record_selected(chart, 5, true);
        assert_eq!(registry.selected_records(), vec![1, 5]);
        registry.clear_selection();
        assert!(registry.selected_records().is_empty());
    }

    #[test]
    fn test_flags_belong_to_one_chart() {
        let registry = ChartRegistry::new();
        let a = registry.register_member(Rc::from(Vec::<Record>::new()));
        let b = registry.register_member(Rc::from(Vec::<Record>::new()));
        registry.set_record_selected(a, 0, true);
        registry.set_record_selected(b, 0, true);
        registry.set_record_selected(b, 2, true);
        assert!(registry.is_record_selected(a, 0));
        assert!(!registry.is_record_selected(a, 2));
        assert_eq!(registry.selected_records(), vec![0, 2]);

        registry.unregister_member(b);
        assert_eq!(registry.selected_marks(), vec![(a, 0)]);
    }

    #[test]
    fn test_unsubscribe_from_listener() {
        let registry = ChartRegistry::new();
        let chart = registry.register_member(Rc::from(Vec::<Record>::new()));
        let count = Rc::new(Cell::new(0));
        let own_id = Rc::new(Cell::new(None));

        let handle = registry.clone();
        let seen = Rc::clone(&count);
        let slot = Rc::clone(&own_id);
        let sub = registry.subscribe(move |_| {
            seen.set(seen.get() + 1);
            if let Some(id) = slot.get() {
                handle.unsubscribe(id);
            }
        });
        own_id.set(Some(sub));

        registry.set_record_selected(chart, 0, true);
        registry.set_record_selected(chart, 1, true);
        assert_eq!(count.get(), 1);
    }
}
