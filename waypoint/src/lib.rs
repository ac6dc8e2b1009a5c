//! Path-based view routing for terminal applications.
//!
//! A [`Router`] maps literal paths to opaque views and tracks the current
//! location under a configurable [`HistoryMode`]; [`Application`] is the
//! terminal shell that drives it.

pub mod application;
pub mod error;
pub mod router;
pub mod view;

pub use application::{Application, BoxedView};
pub use error::{ConfigError, NotFound};
pub use router::{HistoryMode, Location, Route, RouteTable, Router};
pub use view::{Action, Event, View};
