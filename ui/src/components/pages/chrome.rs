//! Shared page furniture: navigation bar, section tags, dividers, cards and
//! the call-to-action button, all expressed through the style deriver so the
//! three pages stay consistent.
//!
//! The terminal renders its own line wrapping here (greedy, CJK-aware width
//! heuristic) because card backgrounds must cover full rows; ratatui's
//! `Wrap` fills trailing cells with the paragraph style, not the line style.

use crate::theme::styles::{self, cta_style};
use crate::theme::types::{DesignSystem, Palette};
use tuirealm::props::{Style, TextModifiers};
use tuirealm::ratatui::text::{Line, Span};

/// Approximate display width: ASCII is narrow, everything else is treated
/// as wide. Good enough for the CJK copy this site carries.
pub fn display_width(s: &str) -> usize {
    s.chars().map(|c| if c.is_ascii() { 1 } else { 2 }).sum()
}

/// Greedy wrap on the display-width heuristic.
pub fn wrap_text(s: &str, width: usize) -> Vec<String> {
    let width = width.max(2);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut used = 0;

    for ch in s.chars() {
        let w = if ch.is_ascii() { 1 } else { 2 };
        if used + w > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            used = 0;
        }
        current.push(ch);
        used += w;
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Build a line padded with trailing spaces to `width`, with `base` applied
/// underneath every span (spans keep their own foregrounds).
pub fn padded_line(mut spans: Vec<Span<'static>>, width: usize, base: Style) -> Line<'static> {
    let used: usize = spans.iter().map(|s| display_width(&s.content)).sum();
    if used < width {
        spans.push(Span::raw(" ".repeat(width - used)));
    }
    Line::from(spans).style(base)
}

/// Navigation bar: brand/back affordances over the nav background composite,
/// closed by a border rule. Nav translucency blends over the page color.
pub fn nav_lines(
    system: &DesignSystem,
    left: &str,
    right: &str,
    width: usize,
) -> Vec<Line<'static>> {
    let page = styles::page_style(system);
    let nav = styles::nav_style(system);

    let left_span = Span::styled(
        format!(" {left}"),
        nav.style(&page).add_modifier(TextModifiers::BOLD),
    );
    let gap = width
        .saturating_sub(display_width(left) + display_width(right) + 3)
        .max(1);
    let right_span = Span::styled(
        format!("{}{right} ", " ".repeat(gap)),
        nav.style(&page),
    );

    vec![
        padded_line(vec![left_span, right_span], width, nav.style(&page)),
        Line::from(Span::styled(
            "─".repeat(width),
            nav.border_style(&page),
        )),
    ]
}

/// Section tag ("01. THE LOGIC") in accent color over a border rule.
pub fn section_tag(system: &DesignSystem, tag: &str, width: usize) -> Vec<Line<'static>> {
    let accent = styles::accent_text_style(system);
    let page = styles::page_style(system);
    let rule = styles::compose_alpha(&system.colors.border, styles::BORDER_ALPHA_SUFFIX);

    vec![
        Line::from(Span::styled(
            tag.to_string(),
            accent.style().add_modifier(TextModifiers::BOLD),
        )),
        Line::from(Span::styled(
            "─".repeat(width),
            Style::default().fg(styles::resolve_color(&rule, &page.background)),
        )),
        Line::from(""),
    ]
}

/// Thin divider inside cards, border color at low alpha.
pub fn divider(system: &DesignSystem, width: usize) -> Line<'static> {
    let page = styles::page_style(system);
    let rule = styles::compose_alpha(&system.colors.border, styles::BORDER_ALPHA_SUFFIX);
    Line::from(Span::styled(
        "╌".repeat(width),
        Style::default().fg(styles::resolve_color(&rule, &page.background)),
    ))
}

/// A card: bordered box whose interior rows carry the derived card
/// background (translucent over the page when glassmorphism is on).
///
/// `rows` are span runs pre-wrapped to `width - 4`.
pub fn card(
    system: &DesignSystem,
    width: usize,
    rows: Vec<Vec<Span<'static>>>,
) -> Vec<Line<'static>> {
    card_with_border(system, width, rows, None)
}

/// Card variant with an explicit border color token (plan highlight, core
/// feature accents). `None` uses the system border.
pub fn card_with_border(
    system: &DesignSystem,
    width: usize,
    rows: Vec<Vec<Span<'static>>>,
    border_token: Option<&str>,
) -> Vec<Line<'static>> {
    let width = width.max(6);
    let inner = width - 4;
    let page = styles::page_style(system);
    let card = styles::card_style(system);

    let border_color = match border_token {
        Some(token) => styles::resolve_color(token, &page.background),
        None => Palette::hex_to_color(&card.border),
    };
    let border_style = Style::default().fg(border_color);
    let bg = card.style(&page);

    let mut out = Vec::with_capacity(rows.len() + 2);
    out.push(Line::from(Span::styled(
        format!("╭{}╮", "─".repeat(width - 2)),
        border_style,
    )));

    for row in rows {
        let mut spans = vec![Span::styled("│ ".to_string(), border_style)];
        let used: usize = row.iter().map(|s| display_width(&s.content)).sum();
        spans.extend(row);
        if used < inner {
            spans.push(Span::raw(" ".repeat(inner - used)));
        }
        spans.push(Span::styled(" │".to_string(), border_style));
        out.push(Line::from(spans).style(bg));
    }

    out.push(Line::from(Span::styled(
        format!("╰{}╯", "─".repeat(width - 2)),
        border_style,
    )));
    out
}

/// The conversion button. Styling comes from [`cta_style`], which is fixed
/// across design systems.
pub fn cta_button(label: &str, width: usize) -> Vec<Line<'static>> {
    let cta = cta_style();
    let width = width.max(6);
    let inner = width - 2;
    let label_width = display_width(label);
    let pad_left = inner.saturating_sub(label_width) / 2;
    let pad_right = inner.saturating_sub(label_width + pad_left);

    vec![
        Line::from(Span::styled(
            format!("╭{}╮", "─".repeat(inner)),
            cta.border_style(),
        )),
        Line::from(vec![
            Span::styled("│".to_string(), cta.border_style()),
            Span::styled(
                format!("{}{label}{}", " ".repeat(pad_left), " ".repeat(pad_right)),
                cta.style(),
            ),
            Span::styled("│".to_string(), cta.border_style()),
        ]),
        Line::from(Span::styled(
            format!("╰{}╯", "─".repeat(inner)),
            cta.border_style(),
        )),
    ]
}

/// Center a span run by left padding.
pub fn centered(spans: Vec<Span<'static>>, width: usize) -> Line<'static> {
    let used: usize = spans.iter().map(|s| display_width(&s.content)).sum();
    let pad = width.saturating_sub(used) / 2;
    let mut out = vec![Span::raw(" ".repeat(pad))];
    out.extend(spans);
    Line::from(out)
}

/// Paragraph rows for card interiors, in the secondary text color.
pub fn body_rows(system: &DesignSystem, text: &str, width: usize) -> Vec<Vec<Span<'static>>> {
    wrap_text(text, width)
        .into_iter()
        .map(|l| {
            vec![Span::styled(
                l,
                Style::default().fg(Palette::hex_to_color(&system.colors.text_secondary)),
            )]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeCatalog;

    #[test]
    fn test_display_width_counts_cjk_as_wide() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("健康"), 4);
        assert_eq!(display_width("a健b"), 4);
    }

    #[test]
    fn test_wrap_text_respects_width() {
        let wrapped = wrap_text("健康を武装せよ", 6);
        assert_eq!(wrapped, vec!["健康を", "武装せ", "よ"]);

        let wrapped = wrap_text("", 10);
        assert_eq!(wrapped, vec![""]);
    }

    #[test]
    fn test_card_frames_rows() {
        let catalog = ThemeCatalog::load_embedded().unwrap();
        let system = catalog.default_system();
        let lines = card(system, 20, vec![vec![Span::raw("hello")]]);
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_cta_button_has_three_rows() {
        let lines = cta_button("ENTRY", 24);
        assert_eq!(lines.len(), 3);
    }
}
