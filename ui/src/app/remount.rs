use crate::app::model::Model;
use crate::components::common::ComponentId;
use crate::components::design_picker::DesignPicker;
use crate::components::pages::{LandingPage, LegalPage, ProfilePage};
use crate::components::state::ComponentStateMount;
use crate::components::text_label::StatusLabel;
use crate::error::{AppError, AppResult};
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    /// Remount every theme-dependent view against the current design
    /// system. Called after a selection so the whole site re-skins at once.
    pub fn remount_themed_views(&mut self) -> AppResult<()> {
        let system = self.state.current_system().clone();

        self.app
            .remount(
                ComponentId::StatusLabel,
                Box::new(StatusLabel::new(&system)),
                Vec::default(),
            )
            .map_err(|e| AppError::Component(e.to_string()))?;

        self.app.remount_with_state(
            ComponentId::LandingPage,
            LandingPage::new(&system),
            Vec::default(),
        )?;
        self.app.remount_with_state(
            ComponentId::LegalPage,
            LegalPage::new(&system),
            Vec::default(),
        )?;
        self.app.remount_with_state(
            ComponentId::ProfilePage,
            ProfilePage::new(&system),
            Vec::default(),
        )?;

        Ok(())
    }

    /// Remount the page a navigation lands on so it comes up at the top.
    pub fn remount_page(&mut self, page: crate::app::state::Page) -> AppResult<()> {
        let system = self.state.current_system().clone();
        match Self::page_component(page) {
            ComponentId::LandingPage => self.app.remount_with_state(
                ComponentId::LandingPage,
                LandingPage::new(&system),
                Vec::default(),
            ),
            ComponentId::LegalPage => self.app.remount_with_state(
                ComponentId::LegalPage,
                LegalPage::new(&system),
                Vec::default(),
            ),
            ComponentId::ProfilePage => self.app.remount_with_state(
                ComponentId::ProfilePage,
                ProfilePage::new(&system),
                Vec::default(),
            ),
            _ => Ok(()),
        }
    }

    pub fn mount_design_picker(&mut self) -> AppResult<()> {
        let picker = DesignPicker::new(&self.catalog, self.state.current_system().id());
        self.app
            .remount_with_state(ComponentId::DesignPicker, picker, Vec::default())
    }

    pub fn umount_design_picker(&mut self) -> AppResult<()> {
        if self.app.mounted(&ComponentId::DesignPicker) {
            self.app
                .umount(&ComponentId::DesignPicker)
                .map_err(|e| AppError::Component(e.to_string()))?;
        }
        Ok(())
    }
}
