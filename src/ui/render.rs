use crate::catalog::CatalogItem;
use crate::ui::app::App;
use crate::ui::card::{LOCK_GLYPH, OWNED_GLYPH};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::theme::{Theme, ACCENT, STATUS_LOCKED, STATUS_OK};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use std::time::Instant;

const DETAIL_WIDTH: u16 = 52;

pub fn draw(frame: &mut Frame<'_>, app: &App, now: Instant) {
    let area = frame.area();
    let theme = app.theme();
    frame.render_widget(Block::default().style(theme.base()), area);

    let regions = layout_regions(area);
    frame.render_widget(Header::new(theme).widget(app.screen()), regions.header);
    frame.render_widget(app.filter_bar(), regions.filter);
    app.collection()
        .render(regions.body, frame.buffer_mut(), app.presence(), now);
    frame.render_widget(Footer::new(theme).widget(regions.footer), regions.footer);

    if let Some(item) = app.detail() {
        render_detail(frame, regions.body, item, theme);
    }
}

fn detail_lines(item: &CatalogItem, theme: Theme) -> Vec<Line<'static>> {
    let text = Style::default().fg(theme.text());
    let muted = Style::default().fg(theme.muted());
    let (status, status_style) = if item.purchased {
        (format!("{OWNED_GLYPH} Purchased"), Style::default().fg(STATUS_OK))
    } else if item.is_locked() {
        (format!("{LOCK_GLYPH} Locked"), Style::default().fg(STATUS_LOCKED))
    } else {
        ("Free to play".to_string(), Style::default().fg(STATUS_OK))
    };

    let mut lines = vec![
        Line::from(Span::styled(
            item.title.clone(),
            text.add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(item.badge(), status_style),
            Span::styled(format!("  {} questions  ", item.questions), muted),
            Span::styled(status, status_style),
        ]),
    ];
    if !item.description.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(item.description.clone(), text)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Esc: Close", muted)));
    lines
}

fn render_detail(frame: &mut Frame<'_>, body: Rect, item: &CatalogItem, theme: Theme) {
    let lines = detail_lines(item, theme);
    // Leave room for the description to wrap once.
    let height = lines.len().saturating_add(3) as u16;
    let area = centered_rect_by_size(body, DETAIL_WIDTH, height);

    frame.render_widget(Clear, area);
    let popup = Block::default()
        .title(Span::styled(format!(" Quiz #{} ", item.id), Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .style(Style::default().bg(theme.surface()));
    let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(popup);
    frame.render_widget(widget, area);
}
