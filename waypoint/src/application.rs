//! Terminal shell: owns the terminal, drives the event loop, and applies
//! view actions to the router.

use std::io::{self, stdout};
use std::time::Duration;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent, KeyEventKind},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::prelude::*;
use tokio::runtime::Runtime;
use tokio::sync::watch;
use tracing::warn;

use crate::router::{Location, Router};
use crate::view::{Action, Event, View};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Views are stored behind a trait object so one table can mix view types.
pub type BoxedView = Box<dyn View>;

/// Main application handle.
///
/// Renders the router's current view, feeds it translated terminal events,
/// and applies the actions it returns. Under an addressable router the
/// terminal title tracks the external location mirror, so the active path
/// stays visible outside the alternate screen.
#[derive(Default)]
pub struct Application;

impl Application {
    pub fn new() -> Self {
        Self
    }

    /// Run until the active view requests [`Action::Quit`].
    pub fn run(self, router: Router<BoxedView>) -> anyhow::Result<()> {
        let rt = Runtime::new().map_err(|e| anyhow::anyhow!("failed to start tokio: {e}"))?;
        rt.block_on(async move { self.run_loop(router).await })
    }

    async fn run_loop(&self, mut router: Router<BoxedView>) -> anyhow::Result<()> {
        enable_raw_mode()?;
        let mut out = stdout();
        execute!(
            out,
            EnterAlternateScreen,
            EnableMouseCapture,
            event::EnableFocusChange
        )?;
        let backend = CrosstermBackend::new(out);
        let mut terminal = Terminal::new(backend)?;

        let result = self.drive(&mut terminal, &mut router).await;

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            event::DisableFocusChange
        )?;
        terminal.show_cursor()?;

        result
    }

    async fn drive(
        &self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        router: &mut Router<BoxedView>,
    ) -> anyhow::Result<()> {
        let mut mirror = router.watch();
        if let Some(rx) = &mirror {
            execute!(io::stdout(), SetTitle(&rx.borrow().path))?;
        }
        router.current_view_mut().on_enter();

        loop {
            terminal.draw(|frame| {
                let area = frame.area();
                router.current_view_mut().render(frame, area);
            })?;

            tokio::select! {
                changed = mirror_changed(&mut mirror) => {
                    if changed {
                        if let Some(rx) = &mut mirror {
                            let path = rx.borrow_and_update().path.clone();
                            execute!(io::stdout(), SetTitle(path))?;
                        }
                    }
                }
                ready = async { event::poll(POLL_INTERVAL) } => {
                    if let Ok(true) = ready {
                        let translated = match event::read()? {
                            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                                Some(Event::Key(key))
                            }
                            CrosstermEvent::Mouse(mouse) => Some(Event::Mouse(mouse)),
                            CrosstermEvent::Resize(w, h) => Some(Event::Resize(w, h)),
                            CrosstermEvent::FocusGained => Some(Event::FocusGained),
                            CrosstermEvent::FocusLost => Some(Event::FocusLost),
                            CrosstermEvent::Paste(s) => Some(Event::Paste(s)),
                            _ => None,
                        };

                        if let Some(event) = translated {
                            if let Some(action) = router.current_view_mut().handle_event(event) {
                                if !self.apply(router, action) {
                                    return Ok(());
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    /// Apply a view action. Returns false when the application should stop.
    ///
    /// Navigation runs the exit/enter lifecycle around the commit: the
    /// target is looked up first, so a rejected navigation never disturbs
    /// the current view.
    fn apply(&self, router: &mut Router<BoxedView>, action: Action) -> bool {
        match action {
            Action::Navigate(path) => {
                match router.route(&path) {
                    Ok(_) => {
                        router.current_view_mut().on_exit();
                        if router.resolve(&path).is_ok() {
                            router.current_view_mut().on_enter();
                        }
                    }
                    Err(err) => warn!("navigation rejected: {err}"),
                }
                true
            }
            Action::NavigateNamed(name) => {
                match router.route_named(&name) {
                    Ok(_) => {
                        router.current_view_mut().on_exit();
                        if router.navigate_by_name(&name).is_ok() {
                            router.current_view_mut().on_enter();
                        }
                    }
                    Err(err) => warn!("navigation rejected: {err}"),
                }
                true
            }
            Action::Back => {
                if router.can_go_back() {
                    router.current_view_mut().on_exit();
                    router.back();
                    router.current_view_mut().on_enter();
                }
                true
            }
            Action::Forward => {
                if router.can_go_forward() {
                    router.current_view_mut().on_exit();
                    router.forward();
                    router.current_view_mut().on_enter();
                }
                true
            }
            Action::Quit => {
                router.current_view_mut().on_exit();
                false
            }
        }
    }
}

async fn mirror_changed(mirror: &mut Option<watch::Receiver<Location>>) -> bool {
    match mirror {
        Some(rx) => rx.changed().await.is_ok(),
        None => std::future::pending::<bool>().await,
    }
}
