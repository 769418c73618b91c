use crate::app::model::Model;
use crate::components::common::{CtaActivityMsg, Msg};
use crate::config;
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    /// The call-to-action hands a fixed URL to the OS opener. The link is
    /// never validated or polled; a failed launch is logged and the session
    /// continues.
    pub fn update_cta(&mut self, msg: CtaActivityMsg) -> Option<Msg> {
        match msg {
            CtaActivityMsg::OpenEntryLink => {
                let url = config::get_config_or_panic().cta_url();
                log::info!("Opening entry link: {url}");
                if let Err(e) = open::that(url) {
                    log::error!("Failed to open entry link '{url}': {e}");
                }
                None
            }
        }
    }
}
