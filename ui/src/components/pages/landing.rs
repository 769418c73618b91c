use crate::app::state::Page;
use crate::components::common::{CtaActivityMsg, Msg, NavigationMsg};
use crate::components::pages::chrome;
use crate::components::state::ComponentState;
use crate::config;
use crate::content::{self, landing};
use crate::error::AppResult;
use crate::theme::styles::{self, compose_alpha};
use crate::theme::types::{DesignSystem, Palette};
use rand::Rng;
use tuirealm::command::{Cmd, CmdResult};
use tuirealm::event::{Key, KeyEvent};
use tuirealm::props::{Style, TextModifiers};
use tuirealm::ratatui::layout::Rect;
use tuirealm::ratatui::text::{Line, Span};
use tuirealm::ratatui::widgets::Paragraph;
use tuirealm::{
    AttrValue, Attribute, Component, Event, Frame, MockComponent, NoUserEvent, State,
};

const PARTICLE_GLYPHS: &[char] = &['·', '•', '✦'];
const PARTICLES_PER_ROW: usize = 7;
const PARTICLE_ROWS: usize = 6;

/// One cosmetic dot in the atmospheric decoration. Placement and color are
/// rolled once per mount; nothing depends on them.
#[derive(Debug, Clone)]
struct Particle {
    col_pct: f32,
    glyph: char,
    color: &'static str,
}

fn roll_particles() -> Vec<Vec<Particle>> {
    let mut rng = rand::thread_rng();
    let total_weight: u32 = landing::PARTICLE_PALETTE.iter().map(|(_, w)| w).sum();

    (0..PARTICLE_ROWS)
        .map(|_| {
            let mut row: Vec<Particle> = (0..PARTICLES_PER_ROW)
                .map(|_| {
                    let mut pick = rng.gen_range(0..total_weight);
                    let mut color = landing::PARTICLE_PALETTE[0].0;
                    for &(token, weight) in landing::PARTICLE_PALETTE {
                        if pick < weight {
                            color = token;
                            break;
                        }
                        pick -= weight;
                    }
                    Particle {
                        col_pct: rng.gen_range(0.0..1.0),
                        glyph: PARTICLE_GLYPHS[rng.gen_range(0..PARTICLE_GLYPHS.len())],
                        color,
                    }
                })
                .collect();
            row.sort_by(|a, b| a.col_pct.total_cmp(&b.col_pct));
            row
        })
        .collect()
}

/// The landing page: hero, credentials, THE LOGIC / THE CORE / PLANS
/// sections and the conversion call-to-action. Purely presentational; all
/// copy comes from [`content::landing`] and all styling from the active
/// design system.
pub struct LandingPage {
    system: DesignSystem,
    particles: Vec<Vec<Particle>>,
    scroll: usize,
}

impl LandingPage {
    pub fn new(system: &DesignSystem) -> Self {
        Self {
            system: system.clone(),
            particles: Vec::new(),
            scroll: 0,
        }
    }

    fn particle_line(&self, row: &[Particle], width: usize) -> Line<'static> {
        let mut spans: Vec<Span<'static>> = Vec::new();
        let mut cursor = 0usize;
        for particle in row {
            let col = ((width.saturating_sub(1)) as f32 * particle.col_pct) as usize;
            if col < cursor {
                continue;
            }
            if col > cursor {
                spans.push(Span::raw(" ".repeat(col - cursor)));
            }
            spans.push(Span::styled(
                particle.glyph.to_string(),
                Style::default().fg(Palette::hex_to_color(particle.color)),
            ));
            cursor = col + 1;
        }
        Line::from(spans)
    }

    fn hero_line(&self, runs: &[landing::HeroRun], width: usize) -> Line<'static> {
        let text_primary = Palette::hex_to_color(&self.system.colors.text_primary);
        let spans = runs
            .iter()
            .map(|&(text, emphasis)| {
                let color = match emphasis {
                    Some(token) => Palette::hex_to_color(token),
                    None => text_primary,
                };
                Span::styled(
                    text.to_string(),
                    Style::default().fg(color).add_modifier(TextModifiers::BOLD),
                )
            })
            .collect();
        chrome::centered(spans, width)
    }

    fn build_lines(&self, width: usize) -> Vec<Line<'static>> {
        let system = &self.system;
        let accent = styles::accent_text_style(system);
        let text_primary = Style::default().fg(Palette::hex_to_color(&system.colors.text_primary));
        let muted = Style::default().fg(Palette::hex_to_color(&system.colors.text_secondary));
        let inner = width.saturating_sub(4);

        let mut lines = chrome::nav_lines(
            system,
            &format!("⌬ {}", content::BRAND),
            content::BRAND_TAGLINE,
            width,
        );
        let mut particles = self.particles.iter();
        let mut particle_row = |lines: &mut Vec<Line<'static>>| {
            if let Some(row) = particles.next() {
                lines.push(self.particle_line(row, width));
            }
        };

        lines.push(Line::from(""));
        particle_row(&mut lines);

        // Hero
        lines.push(chrome::centered(
            vec![Span::styled(
                format!("── {} ──", landing::HERO_KICKER),
                accent.style().add_modifier(TextModifiers::BOLD),
            )],
            width,
        ));
        lines.push(Line::from(""));
        lines.push(self.hero_line(landing::HERO_LINE_1, width));
        lines.push(self.hero_line(landing::HERO_LINE_2, width));
        lines.push(Line::from(""));
        particle_row(&mut lines);

        // Credentials
        for credential in landing::CREDENTIALS {
            lines.push(chrome::centered(
                vec![
                    Span::styled("✦ ", accent.style()),
                    Span::styled(credential.to_string(), text_primary.add_modifier(TextModifiers::BOLD)),
                ],
                width,
            ));
        }
        lines.push(chrome::centered(
            vec![Span::styled(landing::CREDENTIALS_NOTE.to_string(), muted)],
            width,
        ));
        lines.push(Line::from(""));

        for intro in landing::HERO_INTRO {
            for wrapped in chrome::wrap_text(intro, width) {
                lines.push(chrome::centered(
                    vec![Span::styled(wrapped, text_primary)],
                    width,
                ));
            }
        }
        lines.push(Line::from(""));
        particle_row(&mut lines);

        // Google AI Plus info block, accent border like the original
        let mut rows: Vec<Vec<Span<'static>>> = Vec::new();
        for wrapped in chrome::wrap_text(landing::AI_PLUS_TITLE, inner) {
            rows.push(vec![Span::styled(
                wrapped,
                text_primary.add_modifier(TextModifiers::BOLD),
            )]);
        }
        for body in landing::AI_PLUS_BODY {
            rows.extend(chrome::body_rows(system, body, inner));
        }
        lines.extend(chrome::card_with_border(
            system,
            width,
            rows,
            Some(&system.colors.accent),
        ));
        lines.push(Line::from(""));

        lines.extend(chrome::cta_button(landing::CTA_LABEL, width));
        lines.push(chrome::centered(
            vec![Span::styled(landing::CTA_NOTE.to_string(), muted)],
            width,
        ));
        lines.push(Line::from(""));
        particle_row(&mut lines);

        // 01. THE LOGIC
        lines.extend(chrome::section_tag(system, landing::LOGIC_SECTION_TAG, width));
        let mut rows: Vec<Vec<Span<'static>>> = vec![vec![Span::styled(
            landing::LOGIC_TITLE.to_string(),
            text_primary.add_modifier(TextModifiers::BOLD),
        )]];
        rows.push(Vec::new());
        for paragraph in landing::LOGIC_PARAGRAPHS {
            rows.extend(chrome::body_rows(system, paragraph, inner));
            rows.push(Vec::new());
        }
        rows.pop();
        lines.extend(chrome::card(system, width, rows));
        lines.push(Line::from(""));
        particle_row(&mut lines);

        // 02. THE CORE
        lines.extend(chrome::section_tag(system, landing::CORE_SECTION_TAG, width));
        for feature in landing::CORE_FEATURES {
            let mut rows: Vec<Vec<Span<'static>>> = Vec::new();
            let glyph_span = Span::styled(
                format!("{} ", feature.glyph),
                Style::default().fg(Palette::hex_to_color(feature.color)),
            );
            let title_lines = chrome::wrap_text(feature.title, inner.saturating_sub(2));
            for (i, wrapped) in title_lines.into_iter().enumerate() {
                let mut row = Vec::new();
                if i == 0 {
                    row.push(glyph_span.clone());
                } else {
                    row.push(Span::raw("  "));
                }
                // Titles are forced white for contrast, as on the site.
                row.push(Span::styled(
                    wrapped,
                    Style::default()
                        .fg(Palette::hex_to_color("#ffffff"))
                        .add_modifier(TextModifiers::BOLD),
                ));
                rows.push(row);
            }
            rows.push(Vec::new());
            for wrapped in chrome::wrap_text(feature.desc, inner) {
                rows.push(vec![Span::styled(
                    wrapped,
                    Style::default().fg(Palette::hex_to_color("#d4d4d8")),
                )]);
            }
            lines.extend(chrome::card_with_border(
                system,
                width,
                rows,
                Some(&compose_alpha(feature.color, styles::BORDER_ALPHA_SUFFIX)),
            ));
            lines.push(Line::from(""));
        }
        particle_row(&mut lines);

        // 03. PLANS
        lines.extend(chrome::section_tag(system, landing::PLANS_SECTION_TAG, width));
        for plan in landing::PLANS {
            let mut rows: Vec<Vec<Span<'static>>> = Vec::new();
            let name_style = if plan.recommended {
                accent.style().add_modifier(TextModifiers::BOLD)
            } else {
                text_primary.add_modifier(TextModifiers::BOLD)
            };
            let mut header = vec![
                Span::styled(plan.name.to_string(), name_style),
                Span::raw("  "),
                Span::styled(
                    format!("{} {}", plan.price, plan.period),
                    name_style,
                ),
            ];
            if plan.recommended {
                header.push(Span::raw("  "));
                header.push(Span::styled(
                    " RECOMMENDED ".to_string(),
                    Style::default()
                        .fg(Palette::hex_to_color(&self.system.colors.bg_primary))
                        .bg(Palette::hex_to_color(&self.system.colors.accent))
                        .add_modifier(TextModifiers::BOLD),
                ));
            }
            rows.push(header);
            rows.push(Vec::new());
            for feature in plan.features {
                let check_color = if plan.recommended {
                    &self.system.colors.accent
                } else {
                    &self.system.colors.accent_secondary
                };
                let mut first = true;
                for wrapped in chrome::wrap_text(feature, inner.saturating_sub(2)) {
                    let lead = if first { "✓ " } else { "  " };
                    first = false;
                    rows.push(vec![
                        Span::styled(
                            lead.to_string(),
                            Style::default().fg(Palette::hex_to_color(check_color)),
                        ),
                        Span::styled(wrapped, muted),
                    ]);
                }
            }
            let border = plan.recommended.then_some(self.system.colors.accent.as_str());
            lines.extend(chrome::card_with_border(system, width, rows, border));
            lines.push(Line::from(""));
        }

        // Bottom call-to-action
        lines.push(chrome::centered(
            vec![Span::styled(landing::BOTTOM_CTA_LEAD.to_string(), muted)],
            width,
        ));
        lines.extend(chrome::cta_button(landing::CTA_LABEL, width));
        lines.push(Line::from(""));

        // Footer
        lines.push(chrome::divider(system, width));
        lines.push(chrome::centered(
            vec![Span::styled(content::FOOTER_TEAM.to_string(), muted)],
            width,
        ));
        lines.push(chrome::centered(
            vec![Span::styled(
                format!("[l] {}", landing::LEGAL_LINK_LABEL),
                muted.add_modifier(TextModifiers::UNDERLINED),
            )],
            width,
        ));
        lines.push(chrome::centered(
            vec![Span::styled(content::FOOTER_COPYRIGHT.to_string(), muted)],
            width,
        ));

        lines
    }

    fn scroll_by(&mut self, delta: isize) {
        if delta < 0 {
            self.scroll = self.scroll.saturating_sub(delta.unsigned_abs());
        } else {
            self.scroll = self.scroll.saturating_add(delta as usize);
        }
    }
}

impl MockComponent for LandingPage {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let lines = self.build_lines(area.width as usize);
        let max_scroll = lines.len().saturating_sub(area.height as usize);
        self.scroll = self.scroll.min(max_scroll);

        let paragraph = Paragraph::new(lines)
            .style(styles::page_style(&self.system).style())
            .scroll((self.scroll as u16, 0));
        frame.render_widget(paragraph, area);
    }

    fn query(&self, _attr: Attribute) -> Option<AttrValue> {
        None
    }

    fn attr(&mut self, _attr: Attribute, _value: AttrValue) {}

    fn state(&self) -> State {
        State::None
    }

    fn perform(&mut self, _cmd: Cmd) -> CmdResult {
        CmdResult::None
    }
}

impl Component<Msg, NoUserEvent> for LandingPage {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        match ev {
            Event::Keyboard(KeyEvent {
                code: Key::Down, ..
            }) => {
                self.scroll_by(1);
                Some(Msg::ForceRedraw)
            }
            Event::Keyboard(KeyEvent { code: Key::Up, .. }) => {
                self.scroll_by(-1);
                Some(Msg::ForceRedraw)
            }
            Event::Keyboard(KeyEvent {
                code: Key::PageDown,
                ..
            }) => {
                self.scroll_by(10);
                Some(Msg::ForceRedraw)
            }
            Event::Keyboard(KeyEvent {
                code: Key::PageUp, ..
            }) => {
                self.scroll_by(-10);
                Some(Msg::ForceRedraw)
            }
            Event::Keyboard(KeyEvent {
                code: Key::Home, ..
            }) => {
                self.scroll = 0;
                Some(Msg::ForceRedraw)
            }
            Event::Keyboard(KeyEvent {
                code: Key::Enter, ..
            }) => Some(Msg::CtaActivity(CtaActivityMsg::OpenEntryLink)),
            Event::Keyboard(KeyEvent {
                code: Key::Char(c), ..
            }) => {
                let keys = config::get_config_or_panic().keys();
                if c == keys.down() {
                    self.scroll_by(1);
                    Some(Msg::ForceRedraw)
                } else if c == keys.up() {
                    self.scroll_by(-1);
                    Some(Msg::ForceRedraw)
                } else if c == keys.legal() {
                    Some(Msg::NavigationActivity(NavigationMsg::PageRequested(
                        Page::Legal,
                    )))
                } else if c == keys.profile() {
                    Some(Msg::NavigationActivity(NavigationMsg::PageRequested(
                        Page::Profile,
                    )))
                } else if c == keys.open_cta() {
                    Some(Msg::CtaActivity(CtaActivityMsg::OpenEntryLink))
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

impl ComponentState for LandingPage {
    fn mount(&mut self) -> AppResult<()> {
        // Decorations are rolled per mount; no reproducibility requirement.
        self.particles = roll_particles();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeCatalog;

    #[test]
    fn test_build_lines_covers_all_sections() {
        let catalog = ThemeCatalog::load_embedded().unwrap();
        let page = LandingPage::new(catalog.default_system());
        let lines = page.build_lines(80);

        let text: String = lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .map(|s| s.content.clone().into_owned())
            .collect();

        assert!(text.contains("01. THE LOGIC"));
        assert!(text.contains("02. THE CORE"));
        assert!(text.contains("03. PLANS"));
        assert!(text.contains("公式ラインから無料エントリー"));
        assert!(text.contains("特定商取引法に基づく表記"));
    }

    #[test]
    fn test_mount_rolls_particles() {
        let catalog = ThemeCatalog::load_embedded().unwrap();
        let mut page = LandingPage::new(catalog.default_system());
        assert!(page.particles.is_empty());
        page.mount().unwrap();
        assert_eq!(page.particles.len(), PARTICLE_ROWS);
        assert!(page.particles.iter().all(|r| r.len() == PARTICLES_PER_ROW));
    }
}
