use crate::app::state::Page;
use crate::components::common::{Msg, NavigationMsg};
use crate::components::pages::chrome;
use crate::components::state::ComponentState;
use crate::config;
use crate::content::{self, legal};
use crate::error::AppResult;
use crate::theme::styles;
use crate::theme::types::{DesignSystem, Palette};
use tuirealm::command::{Cmd, CmdResult};
use tuirealm::event::{Key, KeyEvent};
use tuirealm::props::{Style, TextModifiers};
use tuirealm::ratatui::layout::Rect;
use tuirealm::ratatui::text::{Line, Span};
use tuirealm::ratatui::widgets::Paragraph;
use tuirealm::{
    AttrValue, Attribute, Component, Event, Frame, MockComponent, NoUserEvent, State,
};

/// The 特定商取引法 disclosure page: a single card holding the label/value
/// table, same background treatment as the landing page.
pub struct LegalPage {
    system: DesignSystem,
    scroll: usize,
}

impl LegalPage {
    pub fn new(system: &DesignSystem) -> Self {
        Self {
            system: system.clone(),
            scroll: 0,
        }
    }

    fn build_lines(&self, width: usize) -> Vec<Line<'static>> {
        let system = &self.system;
        let text_primary = Style::default().fg(Palette::hex_to_color(&system.colors.text_primary));
        let muted = Style::default().fg(Palette::hex_to_color(&system.colors.text_secondary));
        let inner = width.saturating_sub(4);

        let mut lines = chrome::nav_lines(
            system,
            "← BACK",
            &format!("⌬ {}", content::BRAND),
            width,
        );
        lines.push(Line::from(""));

        lines.push(chrome::centered(
            vec![Span::styled(
                legal::LEGAL_TITLE.to_string(),
                text_primary.add_modifier(TextModifiers::BOLD),
            )],
            width,
        ));
        lines.push(Line::from(""));

        let mut rows: Vec<Vec<Span<'static>>> = Vec::new();
        for (i, (label, value)) in legal::LEGAL_ENTRIES.iter().enumerate() {
            rows.push(vec![Span::styled(
                label.to_string(),
                muted.add_modifier(TextModifiers::BOLD),
            )]);
            for value_line in value.split('\n') {
                for wrapped in chrome::wrap_text(value_line, inner.saturating_sub(2)) {
                    rows.push(vec![Span::raw("  "), Span::styled(wrapped, text_primary)]);
                }
            }
            if i + 1 < legal::LEGAL_ENTRIES.len() {
                rows.push(Vec::new());
            }
        }
        lines.extend(chrome::card(system, width, rows));
        lines.push(Line::from(""));

        lines.push(chrome::divider(system, width));
        lines.push(chrome::centered(
            vec![Span::styled(content::FOOTER_COPYRIGHT.to_string(), muted)],
            width,
        ));

        lines
    }

    fn scroll_by(&mut self, delta: isize) {
        if delta < 0 {
            self.scroll = self.scroll.saturating_sub(delta.unsigned_abs());
        } else {
            self.scroll = self.scroll.saturating_add(delta as usize);
        }
    }
}

impl MockComponent for LegalPage {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let lines = self.build_lines(area.width as usize);
        let max_scroll = lines.len().saturating_sub(area.height as usize);
        self.scroll = self.scroll.min(max_scroll);

        let paragraph = Paragraph::new(lines)
            .style(styles::page_style(&self.system).style())
            .scroll((self.scroll as u16, 0));
        frame.render_widget(paragraph, area);
    }

    fn query(&self, _attr: Attribute) -> Option<AttrValue> {
        None
    }

    fn attr(&mut self, _attr: Attribute, _value: AttrValue) {}

    fn state(&self) -> State {
        State::None
    }

    fn perform(&mut self, _cmd: Cmd) -> CmdResult {
        CmdResult::None
    }
}

impl Component<Msg, NoUserEvent> for LegalPage {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        match ev {
            Event::Keyboard(KeyEvent {
                code: Key::Down, ..
            }) => {
                self.scroll_by(1);
                Some(Msg::ForceRedraw)
            }
            Event::Keyboard(KeyEvent { code: Key::Up, .. }) => {
                self.scroll_by(-1);
                Some(Msg::ForceRedraw)
            }
            Event::Keyboard(KeyEvent {
                code: Key::PageDown,
                ..
            }) => {
                self.scroll_by(10);
                Some(Msg::ForceRedraw)
            }
            Event::Keyboard(KeyEvent {
                code: Key::PageUp, ..
            }) => {
                self.scroll_by(-10);
                Some(Msg::ForceRedraw)
            }
            Event::Keyboard(KeyEvent { code: Key::Esc, .. })
            | Event::Keyboard(KeyEvent {
                code: Key::Backspace,
                ..
            }) => Some(Msg::NavigationActivity(NavigationMsg::PageRequested(
                Page::Home,
            ))),
            Event::Keyboard(KeyEvent {
                code: Key::Char(c), ..
            }) => {
                let keys = config::get_config_or_panic().keys();
                if c == keys.down() {
                    self.scroll_by(1);
                    Some(Msg::ForceRedraw)
                } else if c == keys.up() {
                    self.scroll_by(-1);
                    Some(Msg::ForceRedraw)
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

impl ComponentState for LegalPage {
    fn mount(&mut self) -> AppResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeCatalog;

    #[test]
    fn test_build_lines_contains_every_disclosure_entry() {
        let catalog = ThemeCatalog::load_embedded().unwrap();
        let page = LegalPage::new(catalog.default_system());
        let lines = page.build_lines(100);

        let text: String = lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .map(|s| s.content.clone().into_owned())
            .collect();

        for (label, _) in legal::LEGAL_ENTRIES {
            assert!(text.contains(label), "missing disclosure label {label}");
        }
    }
}
