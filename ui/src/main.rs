use anyhow::Context;
use clap::{Parser, ValueEnum};
use hlal::app::model::Model;
use hlal::app::state::{Page, SiteState};
use hlal::theme::ThemeCatalog;
use hlal::{config, logger};
use std::path::PathBuf;
use tuirealm::Update;
use tuirealm::application::PollStrategy;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StartPage {
    Home,
    Legal,
    Profile,
}

impl From<StartPage> for Page {
    fn from(page: StartPage) -> Self {
        match page {
            StartPage::Home => Page::Home,
            StartPage::Legal => Page::Legal,
            StartPage::Profile => Page::Profile,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "hlal", version, about = "HLAL terminal site")]
struct Args {
    /// Design-system id to start on (see the design picker for the catalog)
    #[arg(long)]
    theme: Option<String>,

    /// Page to start on
    #[arg(long, value_enum)]
    page: Option<StartPage>,

    /// Path to the configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = config::init(args.config.as_deref())?;
    logger::setup_logger().context("failed to initialize logging")?;

    // The catalog is static data; a defect in it aborts here, before the
    // terminal is touched.
    let catalog = ThemeCatalog::load_embedded()?;

    let mut state = SiteState::new(&catalog);
    if let Some(id) = args.theme.as_deref().or(config.theme()) {
        if !state.select_system(&catalog, id) {
            anyhow::bail!(
                "Unknown design system '{id}'. Available: {}",
                catalog.ids().join(", ")
            );
        }
    }
    if let Some(page) = args.page {
        state.navigate(page.into());
    }

    let mut model = Model::new(catalog, state)?;

    // Enter alternate screen
    let _ = model.terminal.enter_alternate_screen();
    let _ = model.terminal.enable_raw_mode();

    // Main loop
    while !model.quit {
        // Tick
        match model.app.tick(PollStrategy::Once) {
            Err(err) => {
                log::error!("Application tick error: {err}");
                model.redraw = true;
            }
            Ok(messages) if !messages.is_empty() => {
                // NOTE: redraw if at least one msg has been processed
                model.redraw = true;
                for msg in messages.into_iter() {
                    let mut msg = Some(msg);
                    while msg.is_some() {
                        msg = model.update(msg);
                    }
                }
            }
            _ => {}
        }
        // Redraw
        if model.redraw {
            if let Err(e) = model.view() {
                hlal::error::handle_error(e);
            }
            model.redraw = false;
        }
    }

    // Terminate terminal
    let _ = model.terminal.leave_alternate_screen();
    let _ = model.terminal.disable_raw_mode();
    let _ = model.terminal.clear_screen();
    Ok(())
}
