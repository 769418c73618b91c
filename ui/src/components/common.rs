use crate::app::state::Page;
use crate::error::AppError;

#[derive(Debug, Eq, PartialEq, Clone, Hash)]
pub enum ComponentId {
    StatusLabel,
    LandingPage,
    LegalPage,
    ProfilePage,
    DesignPicker,
    GlobalKeyWatcher,
}

#[derive(Debug, PartialEq)]
pub enum Msg {
    AppClose,
    ForceRedraw,
    NavigationActivity(NavigationMsg),
    ThemeActivity(ThemeActivityMsg),
    CtaActivity(CtaActivityMsg),
    Error(AppError),
}

#[derive(Debug, PartialEq)]
pub enum NavigationMsg {
    /// Replace the current page. Any page may request any page; the
    /// transition graph is fully connected.
    PageRequested(Page),
}

#[derive(Debug, PartialEq)]
pub enum ThemeActivityMsg {
    /// Toggle the design picker panel.
    TogglePicker,
    /// A catalog entry was chosen in the picker. The panel stays open so
    /// systems can be compared in quick succession.
    SystemSelected(String),
    /// The picker was dismissed.
    PickerClosed,
}

#[derive(Debug, PartialEq)]
pub enum CtaActivityMsg {
    /// Launch the external entry link in the OS browser.
    OpenEntryLink,
}

impl Default for Msg {
    fn default() -> Self {
        Self::AppClose
    }
}
