//! Top-level UI layout — slider stack, change log, status bar.

pub mod overlays;
pub mod status_bar;
pub mod widgets;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use twinrange_core::Thumb;

use crate::app::{AppState, Overlay};
use crate::theme;

use widgets::range_slider::{self, RangeSliderWidget};

/// Rows per slider: borders, the widget, one detail line.
const SLIDER_BLOCK_HEIGHT: u16 = range_slider::HEIGHT + 3;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    let main_area = chunks[0];
    let status_area = chunks[1];

    draw_main(f, main_area, app);
    status_bar::render(f, status_area, app);

    match app.overlay {
        Overlay::Help => overlays::render_help(f, main_area),
        Overlay::None => {}
    }
}

fn draw_main(f: &mut Frame, area: Rect, app: &AppState) {
    let mut constraints: Vec<Constraint> = app
        .sliders
        .iter()
        .map(|_| Constraint::Length(SLIDER_BLOCK_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(3));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (i, slider_area) in rows.iter().take(app.sliders.len()).enumerate() {
        draw_slider(f, *slider_area, app, i);
    }
    if let Some(log_area) = rows.last() {
        draw_changes(f, *log_area, app);
    }
}

fn draw_slider(f: &mut Frame, area: Rect, app: &AppState, index: usize) {
    let Some(slider) = app.sliders.get(index) else {
        return;
    };
    let selected = index == app.selected;
    let view = slider.view();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(selected))
        .title(format!(" {} ", slider.id()))
        .title_style(theme::panel_title(selected));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(range_slider::HEIGHT), Constraint::Length(1)])
        .split(inner);

    let focused = selected.then_some(app.thumb);
    f.render_widget(RangeSliderWidget::new(&view).focused(focused), parts[0]);

    let state = slider.state();
    let unit = if view.unit.is_empty() {
        String::new()
    } else {
        format!(" {}", view.unit)
    };
    let mut spans = vec![
        Span::styled("range ", theme::muted()),
        Span::styled(format!("{}..{}{unit}", view.low.value, view.high.value), theme::text()),
        Span::styled(format!("  min gap {}", state.min_separation()), theme::muted()),
    ];
    if state.is_draft_dirty(Thumb::Low) || state.is_draft_dirty(Thumb::High) {
        spans.push(Span::styled("  editing", theme::warning()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), parts[1]);
}

fn draw_changes(f: &mut Frame, area: Rect, app: &AppState) {
    let changes = app.changes.borrow();
    let items: Vec<ListItem> = changes
        .iter()
        .rev()
        .map(|c| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<12}", c.slider), theme::accent()),
                Span::styled(format!("{}..{}", c.low, c.high), theme::positive()),
            ]))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(false))
        .title(format!(" Changes [{}] ", changes.len()))
        .title_style(theme::panel_title(false));
    f.render_widget(List::new(items).block(block), area);
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
