mod control;
mod preview;

pub use control::ControlPane;
pub use preview::PreviewPane;
