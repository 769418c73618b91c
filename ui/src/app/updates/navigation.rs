use crate::app::model::Model;
use crate::components::common::{Msg, NavigationMsg};
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn update_navigation(&mut self, msg: NavigationMsg) -> Option<Msg> {
        match msg {
            NavigationMsg::PageRequested(page) => {
                if self.state.current_page() != page {
                    log::debug!("Navigating {:?} -> {:?}", self.state.current_page(), page);
                    self.state.navigate(page);
                    // Fresh mount so the target page comes up scrolled to
                    // the top, like a page load.
                    if let Err(e) = self.remount_page(page) {
                        return Some(Msg::Error(e));
                    }
                }
                Some(Msg::ForceRedraw)
            }
        }
    }
}
