use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};
use waypoint::{Action, Event, View};

struct Scene {
    label: &'static str,
    live: bool,
}

/// Control surface: pick which scenes are live, then jump to the preview.
pub struct ControlPane {
    selected: usize,
    scenes: Vec<Scene>,
}

impl ControlPane {
    pub fn new() -> Self {
        Self {
            selected: 0,
            scenes: vec![
                Scene { label: "Camera", live: true },
                Scene { label: "Screen share", live: false },
                Scene { label: "Lower third", live: false },
                Scene { label: "Countdown", live: false },
            ],
        }
    }
}

impl View for ControlPane {
    fn render(&mut self, frame: &mut ratatui::Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(area);

        let items: Vec<ListItem> = self
            .scenes
            .iter()
            .enumerate()
            .map(|(i, scene)| {
                let is_selected = i == self.selected;
                let prefix = if is_selected { "▶ " } else { "  " };
                let marker = if scene.live { "● live" } else { "○ idle" };

                ListItem::new(Line::from(vec![
                    Span::styled(
                        prefix,
                        Style::default().fg(if is_selected { Color::Yellow } else { Color::DarkGray }),
                    ),
                    Span::styled(
                        scene.label,
                        Style::default()
                            .fg(if is_selected { Color::Yellow } else { Color::White })
                            .add_modifier(if is_selected { Modifier::BOLD } else { Modifier::empty() }),
                    ),
                    Span::raw("  "),
                    Span::styled(
                        marker,
                        Style::default().fg(if scene.live { Color::Green } else { Color::DarkGray }),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title(" Control ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Yellow)),
        );
        frame.render_widget(list, chunks[0]);

        let footer = Paragraph::new(" ↑/↓ Select │ Space Toggle │ Enter Preview │ Backspace Back │ Q Quit ")
            .style(Style::default().bg(Color::Yellow).fg(Color::Black))
            .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[1]);
    }

    fn handle_event(&mut self, event: Event) -> Option<Action> {
        match event {
            Event::Key(key) => match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    self.selected = self.selected.checked_sub(1).unwrap_or(self.scenes.len() - 1);
                    None
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.selected = (self.selected + 1) % self.scenes.len();
                    None
                }
                KeyCode::Char(' ') => {
                    self.scenes[self.selected].live = !self.scenes[self.selected].live;
                    None
                }
                KeyCode::Enter | KeyCode::Char('p') => {
                    Some(Action::NavigateNamed("Preview".to_string()))
                }
                KeyCode::Backspace | KeyCode::Esc => Some(Action::Back),
                KeyCode::Char('f') => Some(Action::Forward),
                KeyCode::Char('q') => Some(Action::Quit),
                _ => None,
            },
            _ => None,
        }
    }
}
