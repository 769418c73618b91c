use crate::app::model::Model;
use crate::components::common::{Msg, ThemeActivityMsg};
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn update_theme(&mut self, msg: ThemeActivityMsg) -> Option<Msg> {
        match msg {
            ThemeActivityMsg::TogglePicker => self.handle_picker_toggled(),
            ThemeActivityMsg::SystemSelected(id) => self.handle_system_selected(id),
            ThemeActivityMsg::PickerClosed => self.handle_picker_closed(),
        }
    }

    fn handle_picker_toggled(&mut self) -> Option<Msg> {
        if self.state.is_selector_open() {
            return self.handle_picker_closed();
        }

        match self.mount_design_picker() {
            Ok(()) => {
                self.state.set_selector_open(true);
                Some(Msg::ForceRedraw)
            }
            Err(e) => {
                log::error!("Failed to mount design picker: {e}");
                Some(Msg::Error(e))
            }
        }
    }

    fn handle_system_selected(&mut self, id: String) -> Option<Msg> {
        log::info!("Switching to design system: {id}");

        if !self.state.select_system(&self.catalog, &id) {
            // Unknown id: state stays as it is, nothing to re-render.
            return None;
        }

        if let Err(e) = self.remount_themed_views() {
            log::error!("Failed to remount themed views: {e}");
            return Some(Msg::Error(e));
        }

        // The panel stays open after a selection so systems can be compared
        // back to back; remount it so the active marker follows.
        if self.state.is_selector_open() {
            if let Err(e) = self.mount_design_picker() {
                log::error!("Failed to refresh design picker: {e}");
                return Some(Msg::Error(e));
            }
        }

        log::info!("Active design system is now {id}");
        Some(Msg::ForceRedraw)
    }

    fn handle_picker_closed(&mut self) -> Option<Msg> {
        log::debug!("Design picker closed");
        self.state.set_selector_open(false);
        if let Err(e) = self.umount_design_picker() {
            log::error!("Failed to unmount design picker: {e}");
            return Some(Msg::Error(e));
        }
        Some(Msg::ForceRedraw)
    }
}
