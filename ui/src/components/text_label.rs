use tui_realm_stdlib::Label;
use tuirealm::{
    Component, Event, MockComponent, NoUserEvent,
    props::{Alignment, Color, TextModifiers},
};

use crate::components::common::Msg;
use crate::content;
use crate::theme::DesignSystem;
use crate::theme::types::Palette;

/// Status line: brand plus the name of the active design system.
#[derive(MockComponent)]
pub struct StatusLabel {
    component: Label,
}

impl StatusLabel {
    pub fn new(system: &DesignSystem) -> Self {
        let component = Label::default()
            .text(format!(
                "{} · {} · {}",
                content::BRAND,
                content::BRAND_TAGLINE,
                system.name()
            ))
            .alignment(Alignment::Center)
            .foreground(Palette::hex_to_color(&system.colors.accent))
            .background(Color::Reset)
            .modifiers(TextModifiers::BOLD);

        Self { component }
    }
}

impl Component<Msg, NoUserEvent> for StatusLabel {
    fn on(&mut self, _: Event<NoUserEvent>) -> Option<Msg> {
        None
    }
}
