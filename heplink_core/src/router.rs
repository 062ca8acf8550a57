//! Live hash router.
//!
//! The router owns nothing but the last fragment it saw. The navigation
//! environment (a browser window, or [`MemoryNavigation`] outside one) owns
//! the real location and tells the router when it changed; the router
//! re-reads it and notifies its observers before returning, so a view never
//! sees an intermediate state.
//!
//! Dropping a [`HashRouter`] drops its subscription, which unsubscribes it.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use tracing::debug;

use crate::route::{RouteToken, ViewSelection};

/// Something that has a location fragment and announces when it changes.
pub trait NavigationSource {
    /// Handle returned by [`NavigationSource::subscribe`]. Dropping it must
    /// unsubscribe the callback.
    type Subscription;

    /// Current fragment including `#`, or `None` when there is none.
    fn fragment(&self) -> Option<String>;

    /// Register `on_change` to run after every navigation.
    fn subscribe(&self, on_change: Box<dyn Fn()>) -> Self::Subscription;
}

type Observer = Box<dyn Fn(&RouteToken)>;

struct RouterState {
    token: RefCell<RouteToken>,
    observers: RefCell<Vec<Observer>>,
}

impl RouterState {
    fn apply(&self, next: RouteToken) {
        let previous = self.token.replace(next.clone());
        debug!(from = %previous, to = %next, view = %next.selection(), "route changed");
        for observer in self.observers.borrow().iter() {
            observer(&next);
        }
    }
}

/// Maps the environment's fragment to a [`ViewSelection`] for as long as it
/// lives.
pub struct HashRouter<S: NavigationSource> {
    state: Rc<RouterState>,
    _subscription: S::Subscription,
}

impl<S> HashRouter<S>
where
    S: NavigationSource + Clone + 'static,
{
    /// Read the current fragment (defaulting to `#/home`) and subscribe to
    /// changes.
    pub fn mount(source: &S) -> Self {
        let initial = RouteToken::from_fragment(source.fragment().as_deref());
        debug!(route = %initial, "router mounted");

        let state = Rc::new(RouterState {
            token: RefCell::new(initial),
            observers: RefCell::new(Vec::new()),
        });

        let weak: Weak<RouterState> = Rc::downgrade(&state);
        let reader = source.clone();
        let subscription = source.subscribe(Box::new(move || {
            if let Some(state) = weak.upgrade() {
                state.apply(RouteToken::from_fragment(reader.fragment().as_deref()));
            }
        }));

        Self {
            state,
            _subscription: subscription,
        }
    }
}

impl<S: NavigationSource> HashRouter<S> {
    /// Last observed fragment.
    pub fn token(&self) -> RouteToken {
        self.state.token.borrow().clone()
    }

    /// View derived from the last observed fragment.
    pub fn selection(&self) -> ViewSelection {
        self.state.token.borrow().selection()
    }

    /// Run `observer` synchronously after each route change.
    ///
    /// Observers must not register further observers from inside the
    /// callback.
    pub fn on_change(&self, observer: impl Fn(&RouteToken) + 'static) {
        self.state.observers.borrow_mut().push(Box::new(observer));
    }
}

/// Navigation environment for non-browser contexts.
///
/// Starts without a fragment. [`MemoryNavigation::navigate`] replaces the
/// fragment and, like a browser's `hashchange`, notifies subscribers only
/// when the value actually changed.
#[derive(Clone, Default)]
pub struct MemoryNavigation {
    inner: Rc<MemoryInner>,
}

#[derive(Default)]
struct MemoryInner {
    fragment: RefCell<Option<String>>,
    listeners: RefCell<Vec<(u64, Rc<dyn Fn()>)>>,
    next_id: Cell<u64>,
}

impl MemoryNavigation {
    /// Environment with no fragment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Environment already pointing at `fragment`.
    pub fn at(fragment: impl Into<String>) -> Self {
        let nav = Self::default();
        nav.inner.fragment.replace(Some(fragment.into()));
        nav
    }

    /// Set the fragment and notify subscribers if it changed.
    pub fn navigate(&self, fragment: impl Into<String>) {
        let fragment = fragment.into();
        let changed = self.inner.fragment.borrow().as_deref() != Some(fragment.as_str());
        if !changed {
            return;
        }
        self.inner.fragment.replace(Some(fragment));

        // Snapshot so callbacks may subscribe or unsubscribe.
        let listeners: Vec<Rc<dyn Fn()>> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener();
        }
    }

    /// Number of live subscriptions.
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }
}

impl NavigationSource for MemoryNavigation {
    type Subscription = MemorySubscription;

    fn fragment(&self) -> Option<String> {
        self.inner.fragment.borrow().clone()
    }

    fn subscribe(&self, on_change: Box<dyn Fn()>) -> MemorySubscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::from(on_change)));
        MemorySubscription {
            source: Rc::downgrade(&self.inner),
            id,
        }
    }
}

/// Subscription to a [`MemoryNavigation`]; unsubscribes on drop.
pub struct MemorySubscription {
    source: Weak<MemoryInner>,
    id: u64,
}

impl Drop for MemorySubscription {
    fn drop(&mut self) {
        if let Some(source) = self.source.upgrade() {
            source
                .listeners
                .borrow_mut()
                .retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::Section;

    #[test]
    fn starts_at_home_without_fragment() {
        let nav = MemoryNavigation::new();
        let router = HashRouter::mount(&nav);
        assert_eq!(router.token().as_str(), "#/home");
        assert_eq!(router.selection(), ViewSelection::Home);
    }

    #[test]
    fn starts_at_current_fragment() {
        let nav = MemoryNavigation::at("#/contact");
        let router = HashRouter::mount(&nav);
        assert_eq!(router.selection(), ViewSelection::Contact);
    }

    #[test]
    fn navigation_updates_state_synchronously() {
        let nav = MemoryNavigation::new();
        let router = HashRouter::mount(&nav);

        nav.navigate("#/services?x=1");
        assert_eq!(router.selection(), ViewSelection::Services);
        assert_eq!(router.token().as_str(), "#/services?x=1");

        nav.navigate("#/unknown");
        assert_eq!(router.selection(), ViewSelection::Home);
    }

    #[test]
    fn observers_see_each_change_once_with_no_intermediate_view() {
        let nav = MemoryNavigation::new();
        let router = HashRouter::mount(&nav);
        let seen: Rc<RefCell<Vec<Vec<Section>>>> = Rc::default();
        let sink = Rc::clone(&seen);
        router.on_change(move |token| {
            sink.borrow_mut().push(token.selection().sections().to_vec());
        });

        nav.navigate("#/work");
        nav.navigate("#/work"); // no change, no notification
        nav.navigate("#/careers");

        assert_eq!(
            *seen.borrow(),
            vec![
                vec![Section::Work, Section::Community],
                vec![Section::Careers],
            ]
        );
    }

    #[test]
    fn clearing_the_fragment_returns_home() {
        let nav = MemoryNavigation::at("#/insights");
        let router = HashRouter::mount(&nav);
        nav.navigate("");
        assert_eq!(router.token().as_str(), "#/home");
    }

    #[test]
    fn dropping_router_unsubscribes() {
        let nav = MemoryNavigation::new();
        let router = HashRouter::mount(&nav);
        assert_eq!(nav.listener_count(), 1);

        drop(router);
        assert_eq!(nav.listener_count(), 0);

        // Navigation after teardown is harmless.
        nav.navigate("#/work");
    }

    #[test]
    fn routers_on_one_source_are_independent() {
        let nav = MemoryNavigation::new();
        let first = HashRouter::mount(&nav);
        let second = HashRouter::mount(&nav);

        nav.navigate("#/insights");
        assert_eq!(first.selection(), ViewSelection::Insights);
        assert_eq!(second.selection(), ViewSelection::Insights);

        drop(first);
        assert_eq!(nav.listener_count(), 1);
    }
}
