use crate::app::state::{Page, SiteState};
use crate::components::common::{ComponentId, Msg};
use crate::components::global_key_watcher::GlobalKeyWatcher;
use crate::components::pages::{LandingPage, LegalPage, ProfilePage};
use crate::components::state::ComponentStateMount;
use crate::components::text_label::StatusLabel;
use crate::config;
use crate::error::{AppError, AppResult};
use crate::theme::ThemeCatalog;
use tuirealm::event::NoUserEvent;
use tuirealm::terminal::{CrosstermTerminalAdapter, TerminalAdapter, TerminalBridge};
use tuirealm::{Application, EventListenerCfg, Sub, SubClause, SubEventClause};

/// Application model: the tui-realm application, the owned site state and
/// the immutable design-system catalog.
pub struct Model<T>
where
    T: TerminalAdapter,
{
    /// Application
    pub app: Application<ComponentId, Msg, NoUserEvent>,
    /// The single owned UI state instance; renderers receive what they need
    /// from it explicitly.
    pub state: SiteState,
    /// Immutable catalog of design systems, loaded and validated at startup.
    pub catalog: ThemeCatalog,
    /// Indicates that the application must quit
    pub quit: bool,
    /// Tells whether to redraw interface
    pub redraw: bool,
    /// Used to draw to terminal
    pub terminal: TerminalBridge<T>,
}

impl Model<CrosstermTerminalAdapter> {
    pub fn new(catalog: ThemeCatalog, state: SiteState) -> AppResult<Self> {
        let app = Self::init_app(&state)?;

        Ok(Self {
            app,
            state,
            catalog,
            quit: false,
            redraw: true,
            terminal: TerminalBridge::init_crossterm()
                .map_err(|e| AppError::Component(e.to_string()))?,
        })
    }
}

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    fn init_app(state: &SiteState) -> AppResult<Application<ComponentId, Msg, NoUserEvent>> {
        let config = config::get_config_or_panic();
        let mut app: Application<ComponentId, Msg, NoUserEvent> = Application::init(
            EventListenerCfg::default()
                .crossterm_input_listener(
                    config.crossterm_input_listener_interval(),
                    config.crossterm_input_listener_retries(),
                )
                .poll_timeout(config.poll_timeout())
                .tick_interval(config.tick_interval()),
        );

        let system = state.current_system();

        app.mount(
            ComponentId::StatusLabel,
            Box::new(StatusLabel::new(system)),
            Vec::default(),
        )
        .map_err(|e| AppError::Component(e.to_string()))?;

        app.mount_with_state(
            ComponentId::LandingPage,
            LandingPage::new(system),
            Vec::default(),
        )?;
        app.mount_with_state(
            ComponentId::LegalPage,
            LegalPage::new(system),
            Vec::default(),
        )?;
        app.mount_with_state(
            ComponentId::ProfilePage,
            ProfilePage::new(system),
            Vec::default(),
        )?;

        app.mount(
            ComponentId::GlobalKeyWatcher,
            Box::new(GlobalKeyWatcher::default()),
            vec![Sub::new(SubEventClause::Any, SubClause::Always)],
        )
        .map_err(|e| AppError::Component(e.to_string()))?;

        app.active(&ComponentId::LandingPage)
            .map_err(|e| AppError::Component(e.to_string()))?;

        Ok(app)
    }

    /// The component that owns the keyboard right now: the picker when it
    /// is open, otherwise the active page.
    pub fn active_component(&self) -> ComponentId {
        if self.state.is_selector_open() {
            ComponentId::DesignPicker
        } else {
            Self::page_component(self.state.current_page())
        }
    }

    /// Router: each page maps to exactly one mounted component. The match
    /// is exhaustive; there is no fallback page.
    pub fn page_component(page: Page) -> ComponentId {
        match page {
            Page::Home => ComponentId::LandingPage,
            Page::Legal => ComponentId::LegalPage,
            Page::Profile => ComponentId::ProfilePage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_component_mapping_is_total() {
        assert_eq!(
            Model::<CrosstermTerminalAdapter>::page_component(Page::Home),
            ComponentId::LandingPage
        );
        assert_eq!(
            Model::<CrosstermTerminalAdapter>::page_component(Page::Legal),
            ComponentId::LegalPage
        );
        assert_eq!(
            Model::<CrosstermTerminalAdapter>::page_component(Page::Profile),
            ComponentId::ProfilePage
        );
    }
}
