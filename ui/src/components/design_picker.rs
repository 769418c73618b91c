use crate::components::common::{Msg, ThemeActivityMsg};
use crate::components::state::ComponentState;
use crate::config;
use crate::error::{AppError, AppResult};
use crate::theme::ThemeCatalog;
use crate::theme::types::{DesignSystem, Palette};
use tuirealm::command::{Cmd, CmdResult};
use tuirealm::event::{Key, KeyEvent};
use tuirealm::props::{Alignment, Style, TextModifiers};
use tuirealm::ratatui::layout::Rect;
use tuirealm::ratatui::text::{Line, Span};
use tuirealm::ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};
use tuirealm::{
    AttrValue, Attribute, Component, Event, Frame, MockComponent, NoUserEvent, State, StateValue,
};

const CMD_RESULT_SYSTEM_SELECTED: &str = "SystemSelected";
const CMD_RESULT_CLOSE_PICKER: &str = "ClosePicker";

// The panel chrome is deliberately neutral (the original selector sits on a
// fixed near-black sheet) so swatches read true against any active system.
const PANEL_BG: tuirealm::props::Color = tuirealm::props::Color::Rgb(23, 23, 23);
const PANEL_BORDER: tuirealm::props::Color = tuirealm::props::Color::Rgb(64, 64, 64);
const PANEL_TEXT: tuirealm::props::Color = tuirealm::props::Color::Rgb(229, 229, 229);
const PANEL_MUTED: tuirealm::props::Color = tuirealm::props::Color::Rgb(140, 140, 140);

/// Sliding panel listing the design-system catalog.
///
/// Every entry shows name, description and swatches of `bg_primary`,
/// `accent` and `accent_secondary`; the entry matching the active system id
/// is marked. Applying a selection leaves the panel open so several systems
/// can be compared in quick succession; a separate toggle closes it.
pub struct DesignPicker {
    systems: Vec<DesignSystem>,
    active_id: String,
    selected: usize,
}

impl DesignPicker {
    pub fn new(catalog: &ThemeCatalog, active_id: &str) -> Self {
        let systems = catalog.systems().to_vec();
        let selected = systems
            .iter()
            .position(|s| s.id() == active_id)
            .unwrap_or(0);

        Self {
            systems,
            active_id: active_id.to_string(),
            selected,
        }
    }

    fn selected_system(&self) -> Option<&DesignSystem> {
        self.systems.get(self.selected)
    }

    /// Called after a selection is applied so the active marker follows
    /// without remounting the panel.
    pub fn mark_active(&mut self, id: &str) {
        self.active_id = id.to_string();
    }

    fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    fn move_down(&mut self) {
        if self.selected + 1 < self.systems.len() {
            self.selected += 1;
        }
    }

    fn entry_lines(&self, index: usize, system: &DesignSystem) -> Vec<Line<'static>> {
        let is_cursor = index == self.selected;
        let is_active = system.id() == self.active_id;

        let cursor = if is_cursor { "▶ " } else { "  " };
        let check = if is_active { "  ✓" } else { "" };

        let name_style = if is_cursor {
            Style::default()
                .fg(PANEL_TEXT)
                .add_modifier(TextModifiers::BOLD | TextModifiers::REVERSED)
        } else {
            Style::default()
                .fg(PANEL_TEXT)
                .add_modifier(TextModifiers::BOLD)
        };

        let swatch = |token: &str| -> Span<'static> {
            Span::styled(
                "██",
                Style::default().fg(Palette::hex_to_color(token)),
            )
        };

        vec![
            Line::from(vec![
                Span::raw(cursor.to_string()),
                Span::styled(format!("{}{check}", system.name()), name_style),
            ]),
            Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    system.description().to_string(),
                    Style::default().fg(PANEL_MUTED),
                ),
            ]),
            Line::from(vec![
                Span::raw("  "),
                swatch(&system.colors.bg_primary),
                Span::raw(" "),
                swatch(&system.colors.accent),
                Span::raw(" "),
                swatch(&system.colors.accent_secondary),
                Span::styled("  Aa", Style::default().fg(PANEL_MUTED)),
            ]),
            Line::from(""),
        ]
    }
}

impl MockComponent for DesignPicker {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(PANEL_BORDER))
            .title("  Design System  ")
            .title_alignment(Alignment::Center)
            .title_style(
                Style::default()
                    .fg(PANEL_TEXT)
                    .add_modifier(TextModifiers::BOLD),
            );

        let mut lines: Vec<Line> = vec![
            Line::from(Span::styled(
                "Select a pattern based on the emerald & gold inspiration.",
                Style::default().fg(PANEL_MUTED),
            )),
            Line::from(""),
        ];
        for (i, system) in self.systems.iter().enumerate() {
            lines.extend(self.entry_lines(i, system));
        }

        let paragraph = Paragraph::new(lines)
            .block(block)
            .style(Style::default().fg(PANEL_TEXT).bg(PANEL_BG))
            .wrap(Wrap { trim: true });

        frame.render_widget(Clear, area);
        frame.render_widget(paragraph, area);
    }

    fn query(&self, _attr: Attribute) -> Option<AttrValue> {
        None
    }

    fn attr(&mut self, _attr: Attribute, _value: AttrValue) {}

    fn state(&self) -> State {
        match self.selected_system() {
            Some(system) => State::One(StateValue::String(system.id().to_string())),
            None => State::None,
        }
    }

    fn perform(&mut self, _cmd: Cmd) -> CmdResult {
        CmdResult::None
    }
}

impl Component<Msg, NoUserEvent> for DesignPicker {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        let cmd_result = match ev {
            Event::Keyboard(KeyEvent {
                code: Key::Down, ..
            }) => {
                self.move_down();
                CmdResult::Changed(State::One(StateValue::Usize(self.selected)))
            }
            Event::Keyboard(KeyEvent { code: Key::Up, .. }) => {
                self.move_up();
                CmdResult::Changed(State::One(StateValue::Usize(self.selected)))
            }
            Event::Keyboard(KeyEvent {
                code: Key::Enter, ..
            }) => match self.selected_system() {
                Some(system) => CmdResult::Custom(
                    CMD_RESULT_SYSTEM_SELECTED,
                    State::One(StateValue::String(system.id().to_string())),
                ),
                None => CmdResult::None,
            },
            Event::Keyboard(KeyEvent { code: Key::Esc, .. }) => {
                CmdResult::Custom(CMD_RESULT_CLOSE_PICKER, State::None)
            }
            Event::Keyboard(KeyEvent {
                code: Key::Char(c), ..
            }) => {
                let keys = config::get_config_or_panic().keys();
                if c == keys.up() {
                    self.move_up();
                    CmdResult::Changed(State::One(StateValue::Usize(self.selected)))
                } else if c == keys.down() {
                    self.move_down();
                    CmdResult::Changed(State::One(StateValue::Usize(self.selected)))
                } else {
                    CmdResult::None
                }
            }
            _ => CmdResult::None,
        };

        match cmd_result {
            CmdResult::Custom(CMD_RESULT_SYSTEM_SELECTED, State::One(StateValue::String(id))) => {
                Some(Msg::ThemeActivity(ThemeActivityMsg::SystemSelected(id)))
            }
            CmdResult::Custom(CMD_RESULT_CLOSE_PICKER, _) => {
                Some(Msg::ThemeActivity(ThemeActivityMsg::PickerClosed))
            }
            CmdResult::None => None,
            _ => Some(Msg::ForceRedraw),
        }
    }
}

impl ComponentState for DesignPicker {
    fn mount(&mut self) -> AppResult<()> {
        if self.systems.is_empty() {
            return Err(AppError::Component(
                "Design picker mounted with an empty catalog".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picker() -> DesignPicker {
        let catalog = ThemeCatalog::load_embedded().unwrap();
        DesignPicker::new(&catalog, "neural-emerald")
    }

    #[test]
    fn test_cursor_starts_on_active_system() {
        let picker = picker();
        assert_eq!(picker.selected, 1);
        assert_eq!(
            picker.state(),
            State::One(StateValue::String("neural-emerald".to_string()))
        );
    }

    #[test]
    fn test_cursor_clamps_at_catalog_bounds() {
        let mut picker = picker();
        picker.move_up();
        picker.move_up();
        assert_eq!(picker.selected, 0);

        picker.move_down();
        picker.move_down();
        picker.move_down();
        assert_eq!(picker.selected, 2);
    }

    #[test]
    fn test_mark_active_follows_selection() {
        let mut picker = picker();
        picker.mark_active("obsidian-stealth");
        assert_eq!(picker.active_id, "obsidian-stealth");
        // cursor is untouched; only the marker moves
        assert_eq!(picker.selected, 1);
    }
}
