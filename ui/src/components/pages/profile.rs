use crate::app::state::Page;
use crate::components::common::{Msg, NavigationMsg};
use crate::components::pages::chrome;
use crate::components::state::ComponentState;
use crate::config;
use crate::content::{self, profile};
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

/// The representative's bio: header, catchphrase, and the
/// BACKGROUND / CHALLENGE / SOLUTION / MESSAGE / CAREER card.
pub struct ProfilePage {
    system: DesignSystem,
    scroll: usize,
}

impl ProfilePage {
    pub fn new(system: &DesignSystem) -> Self {
        Self {
            system: system.clone(),
            scroll: 0,
        }
    }

    fn build_lines(&self, width: usize) -> Vec<Line<'static>> {
        let system = &self.system;
        let accent = styles::accent_text_style(system);
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

        // Header
        lines.push(chrome::centered(
            vec![Span::styled(
                profile::PROFILE_NAME.to_string(),
                text_primary.add_modifier(TextModifiers::BOLD),
            )],
            width,
        ));
        lines.push(chrome::centered(
            vec![Span::styled(profile::PROFILE_NAME_ROMAJI.to_string(), muted)],
            width,
        ));
        lines.push(chrome::centered(
            vec![Span::styled(profile::PROFILE_ROLE.to_string(), muted)],
            width,
        ));
        lines.push(chrome::centered(
            vec![Span::styled(
                profile::PROFILE_TAGLINE.to_string(),
                accent.style().add_modifier(TextModifiers::ITALIC),
            )],
            width,
        ));
        lines.push(chrome::divider(system, width));
        lines.push(Line::from(""));

        // Catchphrase
        let mut catchphrase: Vec<Span<'static>> = profile::CATCHPHRASE_REJECTED
            .iter()
            .map(|phrase| {
                Span::styled(
                    phrase.to_string(),
                    text_primary.add_modifier(TextModifiers::BOLD),
                )
            })
            .collect();
        catchphrase.push(Span::styled(profile::CATCHPHRASE_TAIL.to_string(), muted));
        lines.push(chrome::centered(catchphrase, width));
        lines.push(chrome::centered(
            vec![
                Span::styled(profile::CATCHPHRASE_OFFER_LEAD.to_string(), text_primary),
                Span::styled(
                    profile::CATCHPHRASE_OFFER_EMPHASIS.to_string(),
                    accent
                        .style()
                        .add_modifier(TextModifiers::BOLD | TextModifiers::UNDERLINED),
                ),
                Span::styled(profile::CATCHPHRASE_OFFER_TAIL.to_string(), text_primary),
            ],
            width,
        ));
        lines.push(Line::from(""));

        // Bio card
        let mut rows: Vec<Vec<Span<'static>>> = Vec::new();
        for (i, section) in profile::PROFILE_SECTIONS.iter().enumerate() {
            rows.push(vec![
                Span::styled(format!("{} ", section.glyph), accent.style()),
                Span::styled(
                    section.heading.to_string(),
                    muted.add_modifier(TextModifiers::BOLD),
                ),
            ]);
            rows.push(Vec::new());
            for paragraph in section.paragraphs {
                rows.extend(chrome::body_rows(system, paragraph, inner));
                rows.push(Vec::new());
            }
            if i + 1 < profile::PROFILE_SECTIONS.len() {
                rows.push(vec![Span::styled(
                    "╌".repeat(inner),
                    Style::default().fg(Palette::hex_to_color(&system.colors.border)),
                )]);
                rows.push(Vec::new());
            }
        }

        // Career table closes the card
        rows.push(vec![
            Span::styled(format!("{} ", profile::CAREER_GLYPH), accent.style()),
            Span::styled(
                profile::CAREER_HEADING.to_string(),
                muted.add_modifier(TextModifiers::BOLD),
            ),
        ]);
        rows.push(Vec::new());
        for (label, value) in profile::CAREER_ENTRIES {
            rows.push(vec![Span::styled(
                label.to_uppercase(),
                muted.add_modifier(TextModifiers::BOLD),
            )]);
            for wrapped in chrome::wrap_text(value, inner.saturating_sub(2)) {
                rows.push(vec![Span::raw("  "), Span::styled(wrapped, text_primary)]);
            }
            rows.push(Vec::new());
        }
        rows.pop();
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

impl MockComponent for ProfilePage {
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

impl Component<Msg, NoUserEvent> for ProfilePage {
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

impl ComponentState for ProfilePage {
    fn mount(&mut self) -> AppResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeCatalog;

    #[test]
    fn test_build_lines_contains_bio_sections() {
        let catalog = ThemeCatalog::load_embedded().unwrap();
        let page = ProfilePage::new(catalog.default_system());
        let lines = page.build_lines(90);

        let text: String = lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .map(|s| s.content.clone().into_owned())
            .collect();

        assert!(text.contains("藤田 勇人"));
        for section in profile::PROFILE_SECTIONS {
            assert!(text.contains(section.heading));
        }
        assert!(text.contains("CAREER"));
    }
}
