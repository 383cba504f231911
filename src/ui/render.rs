use crate::ui::app::{App, Control};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_sections, layout_regions};
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, PROMPT_TEXT, STATUS_OK,
    TITLE_ACCENT,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

const PLACEHOLDER: &str = "Select...";

pub fn draw(frame: &mut Frame<'_>, app: &App, service: &str) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let state = app.picker().state();

    let header_widget = Header::new(service, state.subdivisions.len(), state.municipalities.len());
    frame.render_widget(header_widget.widget(), header);
    frame.render_widget(Clear, body);

    let (left, right, status) = body_sections(body);
    draw_subdivisions(frame, app, left);
    draw_municipalities(frame, app, right);
    draw_status(frame, app, status);

    frame.render_widget(Footer::widget(footer), footer);
}

fn draw_subdivisions(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let selected = &app.picker().state().selection.subdivision_code;
    let options = app
        .subdivision_options()
        .iter()
        .map(|s| option_line(&format!("{:<3} {}", s.code, s.name), s.code == *selected));
    draw_control(frame, app, Control::Subdivision, "UF", options.collect(), area);
}

fn draw_municipalities(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let selected = &app.picker().state().selection.municipality_name;
    let options = app
        .municipality_options()
        .iter()
        .map(|m| option_line(&m.name, m.name == *selected));
    draw_control(
        frame,
        app,
        Control::Municipality,
        "Municipality",
        options.collect(),
        area,
    );
}

fn option_line(label: &str, is_selected: bool) -> ListItem<'static> {
    let marker = if is_selected { "● " } else { "  " };
    let style = if is_selected {
        Style::default().fg(STATUS_OK).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(HEADER_TEXT)
    };
    ListItem::new(Line::from(vec![
        Span::styled(marker, style),
        Span::styled(label.to_string(), style),
    ]))
}

fn draw_control(
    frame: &mut Frame<'_>,
    app: &App,
    control: Control,
    title: &'static str,
    options: Vec<ListItem<'static>>,
    area: Rect,
) {
    let focused = app.focus() == control;
    let border_color = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };

    let mut items = Vec::with_capacity(options.len() + 1);
    items.push(ListItem::new(Line::from(Span::styled(
        format!("  {PLACEHOLDER}"),
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
    ))));
    items.extend(options);

    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(TITLE_ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let list = if focused {
        List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
            .highlight_symbol("›")
    } else {
        List::new(items).block(block).highlight_symbol(" ")
    };

    let mut list_state = ListState::default().with_selected(Some(app.cursor(control)));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_status(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let view = app.status();
    let prompt_style = Style::default().fg(PROMPT_TEXT);

    let mut lines = Vec::new();
    for line in view.lines() {
        match &view.selected {
            Some(pair) if line.ends_with(pair.as_str()) => {
                lines.push(Line::from(vec![
                    Span::styled("Selected: ", Style::default().fg(HEADER_TEXT)),
                    Span::styled(
                        pair.clone(),
                        Style::default().fg(STATUS_OK).add_modifier(Modifier::BOLD),
                    ),
                ]));
            }
            _ => lines.push(Line::from(Span::styled(line, prompt_style))),
        }
    }

    let block = Block::default()
        .title(Span::styled("Location", Style::default().fg(TITLE_ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
