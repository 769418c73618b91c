use tuirealm::props::{Alignment, Color};
use tuirealm::ratatui::layout::Rect;
use tuirealm::ratatui::style::Style;
use tuirealm::ratatui::text::{Line, Span, Text};
use tuirealm::{Component, Event, Frame, MockComponent, NoUserEvent};

use crate::components::common::{ComponentId, Msg};

/// Help bar that shows keyboard shortcuts based on the current active component
pub struct HelpBar {
    style: Style,
}

impl HelpBar {
    pub fn new() -> Self {
        Self {
            style: Style::default().fg(Color::White).bg(Color::DarkGray),
        }
    }

    /// Get global shortcuts that should appear in all contexts
    fn get_global_shortcuts(&self) -> Vec<(String, bool)> {
        vec![
            ("[t]".to_string(), true),
            (" Design ".to_string(), false),
            ("[q]".to_string(), true),
            (" Quit".to_string(), false),
        ]
    }

    /// Get context-specific shortcuts for a given component
    fn get_context_shortcuts(&self, active_component: &ComponentId) -> Vec<(String, bool)> {
        match active_component {
            ComponentId::LandingPage => vec![
                ("[↑/k ↓/j]".to_string(), true),
                (" Scroll ".to_string(), false),
                ("[Enter/o]".to_string(), true),
                (" 無料エントリー ".to_string(), false),
                ("[l]".to_string(), true),
                (" 特商法表記 ".to_string(), false),
                ("[p]".to_string(), true),
                (" Profile ".to_string(), false),
            ],
            ComponentId::LegalPage | ComponentId::ProfilePage => vec![
                ("[↑/k ↓/j]".to_string(), true),
                (" Scroll ".to_string(), false),
                ("[Esc]".to_string(), true),
                (" Back ".to_string(), false),
            ],
            ComponentId::DesignPicker => vec![
                ("[↑/k ↓/j]".to_string(), true),
                (" Navigate ".to_string(), false),
                ("[Enter]".to_string(), true),
                (" Apply ".to_string(), false),
                ("[Esc]".to_string(), true),
                (" Close ".to_string(), false),
            ],
            _ => vec![],
        }
    }

    /// Combine context-specific and global shortcuts
    fn get_help_text(&self, active_component: &ComponentId) -> Vec<(String, bool)> {
        let mut shortcuts = self.get_context_shortcuts(active_component);
        shortcuts.extend(self.get_global_shortcuts());
        shortcuts
    }

    pub fn view_with_active(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        active_component: &ComponentId,
    ) {
        let help_text = self.get_help_text(active_component);
        let mut spans: Vec<Span> = Vec::new();

        for (i, (text, highlight)) in help_text.iter().enumerate() {
            if i > 0 && i % 2 == 0 {
                spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
            }

            if *highlight {
                spans.push(Span::styled(
                    text.clone(),
                    Style::default().fg(Color::Yellow),
                ));
            } else {
                spans.push(Span::raw(text.clone()));
            }
        }

        let paragraph = tuirealm::ratatui::widgets::Paragraph::new(Text::from(Line::from(spans)))
            .style(self.style)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }
}

impl Default for HelpBar {
    fn default() -> Self {
        Self::new()
    }
}

impl MockComponent for HelpBar {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        self.view_with_active(frame, area, &ComponentId::LandingPage);
    }

    fn query(&self, _attr: tuirealm::Attribute) -> Option<tuirealm::AttrValue> {
        None
    }

    fn attr(&mut self, _attr: tuirealm::Attribute, _value: tuirealm::AttrValue) {}

    fn state(&self) -> tuirealm::State {
        tuirealm::State::None
    }

    fn perform(&mut self, _cmd: tuirealm::command::Cmd) -> tuirealm::command::CmdResult {
        tuirealm::command::CmdResult::None
    }
}

impl Component<Msg, NoUserEvent> for HelpBar {
    fn on(&mut self, _ev: Event<NoUserEvent>) -> Option<Msg> {
        None
    }
}
