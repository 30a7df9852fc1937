use std::any::Any;
use std::cell::RefCell;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::rc::Rc;

/// A channel listener. Identity (for `remove`/`has`) is the `Rc` allocation,
/// so keep a clone of the handle you registered if you intend to revoke it.
pub type Listener<P> = Rc<dyn Fn(&P)>;

/// Optional receiver handle a listener is registered "as". Two registrations
/// of the same listener under different contexts are distinct; contexts are
/// compared by `Rc` identity, never by value.
pub type Context = Rc<dyn Any>;

/// One listener binding on a channel.
struct Registration<P> {
    listener: Listener<P>,
    context: Option<Context>,
    priority: i32,
    once: bool,
}

impl<P> Clone for Registration<P> {
    fn clone(&self) -> Self {
        Self {
            listener: Rc::clone(&self.listener),
            context: self.context.clone(),
            priority: self.priority,
            once: self.once,
        }
    }
}

impl<P> Registration<P> {
    /// Listener identity match, narrowed by context identity when the caller
    /// supplies one. Without a context, every registration of the listener
    /// matches regardless of its context.
    fn matches(&self, listener: &Listener<P>, context: Option<&Context>) -> bool {
        Rc::ptr_eq(&self.listener, listener)
            && context.is_none_or(|ctx| {
                self.context.as_ref().is_some_and(|own| Rc::ptr_eq(own, ctx))
            })
    }
}

/// Priority-ordered, re-entrant-safe, revocable pub/sub registry.
///
/// Channels are created implicitly by the first `add`/`add_once` and live
/// until `dispose`. All operations are total: acting on an unknown channel
/// or listener is a silent no-op. Single-threaded by design; components
/// share one hub via `Rc`.
pub struct SignalHub<P> {
    /// Registration lists keyed by channel name, sorted by priority
    /// descending (stable on ties).
    signals: RefCell<HashMap<String, Vec<Registration<P>>>>,
    /// Active flags. Kept separate from `signals` because `set_active` may
    /// create a flag entry before any listener exists.
    active: RefCell<HashMap<String, bool>>,
}

impl<P> Default for SignalHub<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> SignalHub<P> {
    pub fn new() -> Self {
        Self {
            signals: RefCell::new(HashMap::new()),
            active: RefCell::new(HashMap::new()),
        }
    }

    /// Register a persistent listener with default priority 0.
    pub fn add(&self, name: &str, listener: Listener<P>) {
        self.insert(name, listener, None, 0, false);
    }

    /// Register a persistent listener with an explicit context and priority.
    /// Higher priority runs first; equal priorities keep insertion order.
    pub fn add_with(
        &self,
        name: &str,
        listener: Listener<P>,
        context: Option<Context>,
        priority: i32,
    ) {
        self.insert(name, listener, context, priority, false);
    }

    /// Register a one-shot listener: removed right after its first
    /// invocation, even if that dispatch is halted afterwards.
    pub fn add_once(&self, name: &str, listener: Listener<P>) {
        self.insert(name, listener, None, 0, true);
    }

    /// One-shot registration with an explicit context and priority.
    pub fn add_once_with(
        &self,
        name: &str,
        listener: Listener<P>,
        context: Option<Context>,
        priority: i32,
    ) {
        self.insert(name, listener, context, priority, true);
    }

    /// Fire a channel synchronously.
    ///
    /// No-op if the channel does not exist or is halted. Listeners are
    /// invoked over a snapshot of the registration list, so registrations
    /// added or removed by a listener only take effect on the next dispatch.
    /// The active flag is re-read before every invocation: a listener that
    /// halts its own channel stops the remaining (lower-priority) listeners
    /// of this dispatch. One-shot registrations that actually ran are
    /// removed afterwards, halted or not.
    pub fn dispatch(&self, name: &str, payload: &P) {
        let snapshot: Vec<Registration<P>> = {
            let signals = self.signals.borrow();
            match signals.get(name) {
                Some(list) => list.clone(),
                None => return,
            }
        };
        if !self.is_active(name) {
            return;
        }

        tracing::trace!(signal = name, listeners = snapshot.len(), "dispatch");

        // No RefCell borrow is held here: listeners are free to re-enter
        // any hub operation, including dispatch of this same channel.
        let mut fired_once: Vec<Registration<P>> = Vec::new();
        for registration in &snapshot {
            if !self.is_active(name) {
                break;
            }
            (registration.listener)(payload);
            if registration.once {
                fired_once.push(registration.clone());
            }
        }

        for registration in fired_once {
            self.remove_matching(name, &registration.listener, registration.context.as_ref());
        }
    }

    /// Remove every registration of `listener` on the channel, under any
    /// context. No-op for unknown channels.
    pub fn remove(&self, name: &str, listener: &Listener<P>) {
        self.remove_matching(name, listener, None);
    }

    /// Remove registrations matching both listener and context identity.
    pub fn remove_with(&self, name: &str, listener: &Listener<P>, context: &Context) {
        self.remove_matching(name, listener, Some(context));
    }

    /// Clear the channel's registration list. The channel itself and its
    /// active flag survive; dispatch becomes a no-op until listeners return.
    pub fn remove_all(&self, name: &str) {
        if let Some(list) = self.signals.borrow_mut().get_mut(name) {
            list.clear();
        }
    }

    /// Set the channel's active flag, creating the flag entry if needed.
    /// Never creates a registration list.
    pub fn set_active(&self, name: &str, active: bool) {
        self.active.borrow_mut().insert(name.to_owned(), active);
    }

    /// Stop the channel's current and future dispatches until reactivated.
    pub fn halt(&self, name: &str) {
        self.set_active(name, false);
    }

    /// Destroy the channel entirely. A later `add` recreates it fresh with
    /// the active flag set.
    pub fn dispose(&self, name: &str) {
        self.remove_all(name);
        self.signals.borrow_mut().remove(name);
        self.active.borrow_mut().remove(name);
    }

    /// Whether `listener` is registered on the channel under any context.
    pub fn has(&self, name: &str, listener: &Listener<P>) -> bool {
        self.has_matching(name, listener, None)
    }

    /// Whether `listener` is registered under exactly this context.
    pub fn has_with(&self, name: &str, listener: &Listener<P>, context: &Context) -> bool {
        self.has_matching(name, listener, Some(context))
    }

    /// Borrow-bound handle for one channel name.
    pub fn signal<'a>(&'a self, name: &'a str) -> Signal<'a, P> {
        Signal { hub: self, name }
    }

    /// Number of registrations currently on the channel.
    pub fn listener_count(&self, name: &str) -> usize {
        self.signals.borrow().get(name).map_or(0, Vec::len)
    }

    fn insert(
        &self,
        name: &str,
        listener: Listener<P>,
        context: Option<Context>,
        priority: i32,
        once: bool,
    ) {
        let mut signals = self.signals.borrow_mut();
        let list = match signals.entry(name.to_owned()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                self.active.borrow_mut().insert(name.to_owned(), true);
                entry.insert(Vec::new())
            }
        };
        list.push(Registration {
            listener,
            context,
            priority,
            once,
        });
        // Stable: equal priorities keep their insertion order.
        list.sort_by(|a, b| b.priority.cmp(&a.priority));
    }

    fn is_active(&self, name: &str) -> bool {
        self.active.borrow().get(name).copied().unwrap_or(false)
    }

    fn remove_matching(&self, name: &str, listener: &Listener<P>, context: Option<&Context>) {
        if let Some(list) = self.signals.borrow_mut().get_mut(name) {
            list.retain(|registration| !registration.matches(listener, context));
        }
    }

    fn has_matching(&self, name: &str, listener: &Listener<P>, context: Option<&Context>) -> bool {
        self.signals
            .borrow()
            .get(name)
            .is_some_and(|list| {
                list.iter()
                    .any(|registration| registration.matches(listener, context))
            })
    }
}

/// Convenience handle binding a hub to one channel name, mirroring the hub's
/// per-channel operations without repeating the name at every call site.
pub struct Signal<'a, P> {
    hub: &'a SignalHub<P>,
    name: &'a str,
}

impl<P> Signal<'_, P> {
    pub fn add(&self, listener: Listener<P>) {
        self.hub.add(self.name, listener);
    }

    pub fn add_with(&self, listener: Listener<P>, context: Option<Context>, priority: i32) {
        self.hub.add_with(self.name, listener, context, priority);
    }

    pub fn add_once(&self, listener: Listener<P>) {
        self.hub.add_once(self.name, listener);
    }

    pub fn dispatch(&self, payload: &P) {
        self.hub.dispatch(self.name, payload);
    }

    pub fn remove(&self, listener: &Listener<P>) {
        self.hub.remove(self.name, listener);
    }

    pub fn remove_all(&self) {
        self.hub.remove_all(self.name);
    }

    pub fn set_active(&self, active: bool) {
        self.hub.set_active(self.name, active);
    }

    pub fn halt(&self) {
        self.hub.halt(self.name);
    }

    pub fn dispose(&self) {
        self.hub.dispose(self.name);
    }

    pub fn has(&self, listener: &Listener<P>) -> bool {
        self.hub.has(self.name, listener)
    }
}
