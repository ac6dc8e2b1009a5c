//! Path-based navigation: route resolution, the current-location cursor,
//! and the history strategy it runs under.

pub mod table;

pub use table::{Route, RouteTable};

use snafu::prelude::*;
use tokio::sync::watch;
use tracing::debug;

use crate::error::{
    ConfigError, DuplicateNameSnafu, DuplicatePathSnafu, EmptyTableSnafu, NameSnafu, NotFound,
    PathSnafu, UnknownHistoryModeSnafu,
};

/// Where navigation history lives.
///
/// Fixed for the lifetime of the router; a constructor option, not a
/// separate code path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryMode {
    /// Location state lives only in process memory. Nothing outside the
    /// process can observe a navigation.
    #[default]
    Memory,
    /// Every location change is published on an external mirror channel
    /// (see [`Router::watch`]) so the host can reflect it somewhere
    /// visible and bookmarkable.
    Addressable,
}

impl std::fmt::Display for HistoryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HistoryMode::Memory => write!(f, "memory"),
            HistoryMode::Addressable => write!(f, "addressable"),
        }
    }
}

impl std::str::FromStr for HistoryMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "memory" => Ok(HistoryMode::Memory),
            "addressable" => Ok(HistoryMode::Addressable),
            _ => UnknownHistoryModeSnafu { value: s }.fail(),
        }
    }
}

/// The router's cursor: the path and route name currently active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub name: String,
}

/// Resolves requested paths to views and tracks the current location.
///
/// The table is validated once at construction and immutable afterwards.
/// Resolution is an ordered scan with exact path equality, O(routes), and
/// always completes synchronously.
///
/// # Example
/// ```ignore
/// use waypoint::{routes, HistoryMode, Router};
///
/// let mut router = Router::new(HistoryMode::Memory, routes! {
///     "/control" => "Control": "control pane",
///     "/"        => "Preview": "preview pane",
/// })?;
///
/// assert_eq!(router.resolve("/")?, &"preview pane");
/// assert_eq!(router.location().name, "Preview");
/// ```
#[derive(Debug)]
pub struct Router<V> {
    routes: Vec<Route<V>>,
    mode: HistoryMode,
    current: usize,
    back_stack: Vec<usize>,
    forward_stack: Vec<usize>,
    mirror: Option<watch::Sender<Location>>,
}

impl<V> Router<V> {
    /// Build a router over a validated table. The first route in the table
    /// becomes the initial location.
    ///
    /// Fails if the table is empty or contains a duplicate path or name.
    pub fn new(mode: HistoryMode, table: RouteTable<V>) -> Result<Self, ConfigError> {
        let routes = table.into_routes();
        ensure!(!routes.is_empty(), EmptyTableSnafu);
        for (i, route) in routes.iter().enumerate() {
            for earlier in &routes[..i] {
                ensure!(
                    earlier.path() != route.path(),
                    DuplicatePathSnafu { path: route.path() }
                );
                ensure!(
                    earlier.name() != route.name(),
                    DuplicateNameSnafu { name: route.name() }
                );
            }
        }

        let mut router = Self {
            routes,
            mode,
            current: 0,
            back_stack: Vec::new(),
            forward_stack: Vec::new(),
            mirror: None,
        };
        if mode == HistoryMode::Addressable {
            let (tx, _) = watch::channel(router.location());
            router.mirror = Some(tx);
        }
        Ok(router)
    }

    pub fn mode(&self) -> HistoryMode {
        self.mode
    }

    /// Snapshot of the current location.
    pub fn location(&self) -> Location {
        let route = &self.routes[self.current];
        Location {
            path: route.path().to_owned(),
            name: route.name().to_owned(),
        }
    }

    pub fn current_view(&self) -> &V {
        self.routes[self.current].view()
    }

    pub fn current_view_mut(&mut self) -> &mut V {
        self.routes[self.current].view_mut()
    }

    /// Look up a route by path without navigating.
    pub fn route(&self, path: &str) -> Result<&Route<V>, NotFound> {
        self.find_path(path).map(|idx| &self.routes[idx])
    }

    /// Look up a route by name without navigating.
    pub fn route_named(&self, name: &str) -> Result<&Route<V>, NotFound> {
        self.find_name(name).map(|idx| &self.routes[idx])
    }

    /// Resolve a requested path and make it the current location.
    ///
    /// The previous location is pushed onto the back stack and the forward
    /// stack is cleared; resolving the already-current path leaves history
    /// untouched.
    pub fn resolve(&mut self, path: &str) -> Result<&V, NotFound> {
        let idx = self.find_path(path)?;
        self.commit(idx);
        Ok(self.routes[idx].view())
    }

    /// Like [`resolve`](Self::resolve), keyed by route name instead of
    /// path, so callers need not hard-code path literals.
    pub fn navigate_by_name(&mut self, name: &str) -> Result<&V, NotFound> {
        let idx = self.find_name(name)?;
        self.commit(idx);
        Ok(self.routes[idx].view())
    }

    /// Apply a location change that originated outside the router, such as
    /// a deep link at startup or a host-level back/forward transition.
    ///
    /// Matching and error semantics are identical to [`resolve`](Self::resolve),
    /// but the history stacks are left untouched: an externally driven
    /// transition must not grow history with duplicate entries.
    pub fn sync(&mut self, path: &str) -> Result<&V, NotFound> {
        let idx = self.find_path(path)?;
        if idx != self.current {
            self.current = idx;
            self.publish();
            debug!(path = self.routes[idx].path(), "synced external location");
        }
        Ok(self.routes[idx].view())
    }

    /// Step back to the previous location. Returns whether a move happened.
    pub fn back(&mut self) -> bool {
        match self.back_stack.pop() {
            Some(prev) => {
                self.forward_stack.push(self.current);
                self.current = prev;
                self.publish();
                debug!(path = self.routes[self.current].path(), "went back");
                true
            }
            None => false,
        }
    }

    /// Step forward again after [`back`](Self::back). Returns whether a
    /// move happened.
    pub fn forward(&mut self) -> bool {
        match self.forward_stack.pop() {
            Some(next) => {
                self.back_stack.push(self.current);
                self.current = next;
                self.publish();
                debug!(path = self.routes[self.current].path(), "went forward");
                true
            }
            None => false,
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.back_stack.is_empty()
    }

    pub fn can_go_forward(&self) -> bool {
        !self.forward_stack.is_empty()
    }

    /// Number of entries on the back stack.
    pub fn history_len(&self) -> usize {
        self.back_stack.len()
    }

    /// Receiver for the external location mirror.
    ///
    /// `Some` only under [`HistoryMode::Addressable`]; a memory-mode router
    /// produces no externally observable signal, so there is nothing to
    /// subscribe to.
    pub fn watch(&self) -> Option<watch::Receiver<Location>> {
        self.mirror.as_ref().map(|tx| tx.subscribe())
    }

    fn find_path(&self, path: &str) -> Result<usize, NotFound> {
        self.routes
            .iter()
            .position(|route| route.path() == path)
            .context(PathSnafu { path })
    }

    fn find_name(&self, name: &str) -> Result<usize, NotFound> {
        self.routes
            .iter()
            .position(|route| route.name() == name)
            .context(NameSnafu { name })
    }

    fn commit(&mut self, idx: usize) {
        if idx != self.current {
            self.back_stack.push(self.current);
            self.current = idx;
            self.forward_stack.clear();
            self.publish();
            let route = &self.routes[idx];
            debug!(path = route.path(), name = route.name(), "navigated");
        }
    }

    fn publish(&self) {
        if let Some(mirror) = &self.mirror {
            let _ = mirror.send(self.location());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes;

    fn table() -> RouteTable<&'static str> {
        routes! {
            "/control" => "Control": "control-view",
            "/" => "Preview": "preview-view",
        }
    }

    #[test]
    fn construction_succeeds_for_unique_table() {
        let router = Router::new(HistoryMode::Memory, table());
        assert!(router.is_ok());
    }

    #[test]
    fn initial_location_is_first_route() {
        let router = Router::new(HistoryMode::Memory, table()).unwrap();
        assert_eq!(router.location().path, "/control");
        assert_eq!(router.location().name, "Control");
        assert_eq!(router.current_view(), &"control-view");
    }

    #[test]
    fn duplicate_path_is_rejected() {
        let dup = routes! {
            "/" => "Preview": "a",
            "/" => "Control": "b",
        };
        let err = Router::new(HistoryMode::Memory, dup).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicatePath { .. }));
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let dup = routes! {
            "/" => "Preview": "a",
            "/other" => "Preview": "b",
        };
        let err = Router::new(HistoryMode::Memory, dup).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateName { .. }));
    }

    #[test]
    fn empty_table_is_rejected() {
        let empty: RouteTable<&str> = routes! {};
        let err = Router::new(HistoryMode::Memory, empty).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyTable));
    }

    #[test]
    fn resolve_matches_exact_paths() {
        let mut router = Router::new(HistoryMode::Memory, table()).unwrap();
        assert_eq!(router.resolve("/").unwrap(), &"preview-view");
        assert_eq!(router.resolve("/control").unwrap(), &"control-view");
    }

    #[test]
    fn resolve_unknown_path_is_not_found() {
        let mut router = Router::new(HistoryMode::Memory, table()).unwrap();
        let err = router.resolve("/missing").unwrap_err();
        assert!(matches!(err, NotFound::Path { .. }));
        // A failed resolution leaves the cursor where it was.
        assert_eq!(router.location().path, "/control");
    }

    #[test]
    fn navigate_by_name_matches_resolve() {
        let mut by_name = Router::new(HistoryMode::Memory, table()).unwrap();
        let mut by_path = Router::new(HistoryMode::Memory, table()).unwrap();

        let view = *by_name.navigate_by_name("Preview").unwrap();
        assert_eq!(view, *by_path.resolve("/").unwrap());

        by_name.navigate_by_name("Control").unwrap();
        assert_eq!(by_name.location().path, "/control");
    }

    #[test]
    fn unknown_name_is_not_found() {
        let mut router = Router::new(HistoryMode::Memory, table()).unwrap();
        let err = router.navigate_by_name("Settings").unwrap_err();
        assert!(matches!(err, NotFound::Name { .. }));
    }

    #[test]
    fn back_restores_previous_path() {
        let mut router = Router::new(HistoryMode::Memory, table()).unwrap();
        router.resolve("/").unwrap();
        router.resolve("/control").unwrap();

        assert!(router.back());
        assert_eq!(router.location().path, "/");
        assert!(router.back());
        assert_eq!(router.location().path, "/control");
        assert!(!router.back());
    }

    #[test]
    fn forward_replays_undone_navigation() {
        let mut router = Router::new(HistoryMode::Memory, table()).unwrap();
        router.resolve("/").unwrap();
        router.back();

        assert!(router.can_go_forward());
        assert!(router.forward());
        assert_eq!(router.location().path, "/");
        assert!(!router.forward());
    }

    #[test]
    fn fresh_navigation_clears_forward_stack() {
        let mut router = Router::new(HistoryMode::Memory, table()).unwrap();
        router.resolve("/").unwrap();
        router.back();
        assert!(router.can_go_forward());

        router.resolve("/").unwrap();
        assert!(!router.can_go_forward());
    }

    #[test]
    fn resolving_current_path_adds_no_history() {
        let mut router = Router::new(HistoryMode::Memory, table()).unwrap();
        router.resolve("/control").unwrap();
        assert_eq!(router.history_len(), 0);
        assert!(!router.can_go_back());
    }

    #[test]
    fn sync_updates_location_without_growing_history() {
        let mut router = Router::new(HistoryMode::Memory, table()).unwrap();
        router.resolve("/").unwrap();
        assert_eq!(router.history_len(), 1);

        assert_eq!(router.sync("/control").unwrap(), &"control-view");
        assert_eq!(router.location().path, "/control");
        assert_eq!(router.history_len(), 1);
    }

    #[test]
    fn sync_unknown_path_is_not_found() {
        let mut router = Router::new(HistoryMode::Memory, table()).unwrap();
        assert!(matches!(
            router.sync("/missing").unwrap_err(),
            NotFound::Path { .. }
        ));
    }

    #[test]
    fn memory_mode_has_no_external_mirror() {
        let mut router = Router::new(HistoryMode::Memory, table()).unwrap();
        assert!(router.watch().is_none());
        router.resolve("/").unwrap();
        assert!(router.watch().is_none());
    }

    #[test]
    fn addressable_mirror_publishes_each_change() {
        let mut router = Router::new(HistoryMode::Addressable, table()).unwrap();
        let mut rx = router.watch().expect("addressable router exposes a mirror");
        assert_eq!(rx.borrow().path, "/control");

        router.resolve("/").unwrap();
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().path, "/");

        router.back();
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().path, "/control");
    }

    #[test]
    fn history_mode_parses_recognized_values() {
        assert_eq!("memory".parse::<HistoryMode>().unwrap(), HistoryMode::Memory);
        assert_eq!(
            "Addressable".parse::<HistoryMode>().unwrap(),
            HistoryMode::Addressable
        );
        assert!(matches!(
            "browser".parse::<HistoryMode>().unwrap_err(),
            ConfigError::UnknownHistoryMode { .. }
        ));
    }

    #[test]
    fn pure_lookups_do_not_navigate() {
        let router = Router::new(HistoryMode::Memory, table()).unwrap();
        assert_eq!(router.route("/").unwrap().name(), "Preview");
        assert_eq!(router.route_named("Preview").unwrap().path(), "/");
        assert_eq!(router.location().path, "/control");
    }
}
