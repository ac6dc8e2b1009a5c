use snafu::prelude::*;

/// Rejected router configuration. Fatal at startup: a router is never
/// constructed from a malformed table.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ConfigError {
    #[snafu(display("route table is empty"))]
    EmptyTable,

    #[snafu(display("duplicate route path {path:?}"))]
    DuplicatePath { path: String },

    #[snafu(display("duplicate route name {name:?}"))]
    DuplicateName { name: String },

    #[snafu(display("unknown history mode {value:?}, expected \"memory\" or \"addressable\""))]
    UnknownHistoryMode { value: String },
}

/// A navigation request that matched nothing. Recoverable: the caller
/// decides the fallback, the router never substitutes a view.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum NotFound {
    #[snafu(display("no route matches path {path:?}"))]
    Path { path: String },

    #[snafu(display("no route named {name:?}"))]
    Name { name: String },
}
