use crate::app::model::Model;
use crate::components::common::ComponentId;
use crate::components::help_bar::HelpBar;
use crate::error::{AppError, AppResult};
use tuirealm::ratatui::layout::{Constraint, Direction, Layout, Rect};
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn view(&mut self) -> AppResult<()> {
        let active = self.active_component();
        let page_id = Self::page_component(self.state.current_page());
        let selector_open = self.state.is_selector_open();

        let mut view_result: AppResult<()> = Ok(());
        let _ = self.terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints(
                    [
                        Constraint::Length(1), // Status label
                        Constraint::Min(10),   // Active page
                        Constraint::Length(1), // Help bar
                    ]
                    .as_ref(),
                )
                .split(f.area());

            self.app.view(&ComponentId::StatusLabel, f, chunks[0]);

            // Exactly one page is rendered, keyed by the current page.
            self.app.view(&page_id, f, chunks[1]);

            // The design picker slides over the page's right edge.
            if selector_open {
                self.app
                    .view(&ComponentId::DesignPicker, f, picker_area(chunks[1]));
            }

            view_result = self
                .app
                .active(&active)
                .map_err(|e| AppError::Component(e.to_string()));

            let mut help_bar = HelpBar::new();
            help_bar.view_with_active(f, chunks[2], &active);
        });

        view_result
    }
}

/// Right-hand panel area for the design picker: full page height, roughly
/// two fifths of the width, clamped to sane terminal sizes.
pub fn picker_area(area: Rect) -> Rect {
    let width = (area.width * 2 / 5).clamp(30, 44).min(area.width);
    Rect {
        x: area.x + area.width.saturating_sub(width),
        y: area.y,
        width,
        height: area.height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picker_area_hugs_right_edge() {
        let area = Rect::new(0, 1, 100, 40);
        let panel = picker_area(area);
        assert_eq!(panel.x + panel.width, 100);
        assert_eq!(panel.y, 1);
        assert_eq!(panel.height, 40);
        assert_eq!(panel.width, 40);
    }

    #[test]
    fn test_picker_area_never_exceeds_page_width() {
        let area = Rect::new(0, 0, 24, 20);
        let panel = picker_area(area);
        assert!(panel.width <= 24);
    }
}
