use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
};
use waypoint::{Action, Event, View};

/// Program output placeholder: what the audience would see.
pub struct PreviewPane {
    visits: usize,
}

impl PreviewPane {
    pub fn new() -> Self {
        Self { visits: 0 }
    }
}

impl View for PreviewPane {
    fn on_enter(&mut self) {
        self.visits += 1;
    }

    fn render(&mut self, frame: &mut ratatui::Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(area);

        let lines = vec![
            Line::from(""),
            Line::styled(
                "ON AIR",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center),
            Line::from(""),
            Line::styled(
                format!("preview shown {} time(s) this session", self.visits),
                Style::default().fg(Color::DarkGray),
            )
            .alignment(Alignment::Center),
        ];

        let body = Paragraph::new(lines).block(
            Block::default()
                .title(" Preview ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Red)),
        );
        frame.render_widget(body, chunks[0]);

        let footer = Paragraph::new(" C Control │ Backspace Back │ F Forward │ Q Quit ")
            .style(Style::default().bg(Color::Red).fg(Color::Black))
            .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[1]);
    }

    fn handle_event(&mut self, event: Event) -> Option<Action> {
        match event {
            Event::Key(key) => match key.code {
                KeyCode::Char('c') => Some(Action::Navigate("/control".to_string())),
                KeyCode::Backspace => Some(Action::Back),
                KeyCode::Char('f') => Some(Action::Forward),
                KeyCode::Char('q') => Some(Action::Quit),
                _ => None,
            },
            _ => None,
        }
    }
}
