use ratatui::layout::Rect;

/// Terminal event delivered to the active view.
#[derive(Debug, Clone)]
pub enum Event {
    Key(crossterm::event::KeyEvent),
    Mouse(crossterm::event::MouseEvent),
    Resize(u16, u16),
    FocusGained,
    FocusLost,
    Paste(String),
}

/// What a view asks the shell to do after handling an event.
///
/// Navigation is expressed either by path or by route name; names keep
/// view code decoupled from path literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Navigate(String),
    NavigateNamed(String),
    Back,
    Forward,
    Quit,
}

/// A renderable view the router can point at.
///
/// The routing layer never inspects views; only the application shell
/// calls into this trait. `on_enter`/`on_exit` bracket every committed
/// navigation.
pub trait View {
    /// Called after this view becomes the current location.
    fn on_enter(&mut self) {}

    /// Called before navigation moves away from this view.
    fn on_exit(&mut self) {}

    /// Render into the given area.
    fn render(&mut self, frame: &mut ratatui::Frame, area: Rect);

    /// Handle an event, optionally returning an action for the shell.
    fn handle_event(&mut self, event: Event) -> Option<Action> {
        let _ = event;
        None
    }
}
