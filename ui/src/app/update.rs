use crate::app::model::Model;
use crate::components::common::Msg;
use tuirealm::Update;
use tuirealm::terminal::TerminalAdapter;

impl<T> Update<Msg> for Model<T>
where
    T: TerminalAdapter,
{
    fn update(&mut self, msg: Option<Msg>) -> Option<Msg> {
        if let Some(msg) = msg {
            // Set redraw
            self.redraw = true;

            match msg {
                Msg::AppClose => {
                    self.quit = true; // Terminate
                    None
                }
                Msg::ForceRedraw => None,
                Msg::NavigationActivity(msg) => self.update_navigation(msg),
                Msg::ThemeActivity(msg) => self.update_theme(msg),
                Msg::CtaActivity(msg) => self.update_cta(msg),
                Msg::Error(e) => {
                    log::error!("Error received: {e}");
                    None
                }
            }
        } else {
            None
        }
    }
}
