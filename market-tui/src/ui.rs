//! Screen layout

use market_client::MarketplaceApi;
use ratatui::{prelude::*, widgets::*};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

use crate::app::{App, Focus};
use crate::render;
use crate::view::FilterField;

pub fn draw<A: MarketplaceApi + 'static>(f: &mut Frame, app: &mut App<A>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Filters
            Constraint::Min(8),    // Activities + Bookings
            Constraint::Length(1), // Notice
            Constraint::Length(8), // Logs
        ])
        .split(f.area());

    draw_header(f, app, chunks[0]);
    draw_filters(f, app, chunks[1]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[2]);
    draw_activities(f, app, main_chunks[0]);
    draw_bookings(f, app, main_chunks[1]);

    let notice = app.controller.state().notice.clone().unwrap_or_default();
    f.render_widget(
        Paragraph::new(Span::styled(
            notice,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        chunks[3],
    );

    let logs = TuiLoggerWidget::default()
        .block(
            Block::default()
                .title(" Logs ")
                .border_style(Style::default().fg(Color::White).add_modifier(Modifier::DIM))
                .borders(Borders::ALL),
        )
        .output_separator('|')
        .output_timestamp(Some("%H:%M:%S".to_string()))
        .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
        .output_target(false)
        .output_file(false)
        .output_line(false)
        .style(Style::default().fg(Color::White))
        .state(&app.logger_state);
    f.render_widget(logs, chunks[4]);
}

fn border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Cyan)
    }
}

fn draw_header<A: MarketplaceApi + 'static>(f: &mut Frame, app: &App<A>, area: Rect) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(" Activity Marketplace ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" | API: "),
        Span::styled(app.api_url.as_str(), Style::default().fg(Color::Green)),
        Span::raw(format!(" | user {} ", app.controller.user_id())),
        Span::styled(
            " Tab focus · Enter search · ^L clear · b book · m my bookings · x cancel · q quit ",
            Style::default().add_modifier(Modifier::DIM),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(title, area);
}

fn draw_filters<A: MarketplaceApi + 'static>(f: &mut Frame, app: &App<A>, area: Rect) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    for (field, cell) in FilterField::ALL.into_iter().zip(cells.iter()) {
        let focused = app.focus == Focus::Filter(field);
        let input = app.input(field);
        let width = cell.width.saturating_sub(2) as usize;
        let scroll = input.visual_scroll(width);

        let widget = Paragraph::new(input.value())
            .scroll((0, scroll as u16))
            .block(
                Block::default()
                    .title(format!(" {} ", field.label()))
                    .borders(Borders::ALL)
                    .border_style(border(focused)),
            );
        f.render_widget(widget, *cell);

        if focused {
            let cursor = input.visual_cursor().saturating_sub(scroll) as u16;
            f.set_cursor_position((cell.x + 1 + cursor, cell.y + 1));
        }
    }
}

fn draw_activities<A: MarketplaceApi + 'static>(f: &mut Frame, app: &mut App<A>, area: Rect) {
    let state = app.controller.state();
    let title = match render::activities_status(&state.activities) {
        Some(status) => format!(" Activities ({}) · {} ", state.activities.items.len(), status),
        None => format!(" Activities ({}) ", state.activities.items.len()),
    };

    let items: Vec<ListItem> = state
        .activities
        .items
        .iter()
        .map(|a| {
            let button = if state.is_booking(a.id) {
                Span::styled(" [Booking…] ", Style::default().fg(Color::DarkGray))
            } else {
                Span::styled(" [Book] ", Style::default().fg(Color::Green))
            };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(a.title.as_str(), Style::default().add_modifier(Modifier::BOLD)),
                    button,
                ]),
                Line::from(Span::styled(
                    render::location_line(a),
                    Style::default().fg(Color::Gray),
                )),
                Line::from(Span::styled(
                    render::details_line(a),
                    Style::default().fg(Color::Gray),
                )),
            ])
        })
        .collect();

    let title_style = if state.activities.error.is_some() {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    };
    let list = List::new(items)
        .block(
            Block::default()
                .title(Span::styled(title, title_style))
                .borders(Borders::ALL)
                .border_style(border(app.focus == Focus::Activities)),
        )
        .highlight_symbol("> ")
        .highlight_style(Style::default().bg(Color::DarkGray));
    f.render_stateful_widget(list, area, &mut app.activities);
}

fn draw_bookings<A: MarketplaceApi + 'static>(f: &mut Frame, app: &mut App<A>, area: Rect) {
    let state = app.controller.state();
    let title = match render::bookings_status(&state.bookings) {
        Some(status) => format!(" My Bookings · {} ", status),
        None => format!(" My Bookings ({}) ", state.bookings.items.len()),
    };

    let items: Vec<ListItem> = state
        .bookings
        .items
        .iter()
        .map(|b| {
            let style = if state.cancelling == Some(b.id) {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(render::booking_line(b), style)))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(border(app.focus == Focus::Bookings)),
        )
        .highlight_symbol("> ")
        .highlight_style(Style::default().bg(Color::DarkGray));
    f.render_stateful_widget(list, area, &mut app.bookings);
}
