//! UI rendering and layout module

use crate::constants::{APP_SUBTITLE, APP_TITLE, QUERY_PLACEHOLDER};
use crate::mode::Mode;
use crate::search::{placeholder_dimensions, Role, SearchResult};
use crate::tui::app::{App, InputFocus};
use crate::tui::highlighter::{SyntaxHighlighter, SNIPPET_EXTENSION};
use crate::tui::wrap::{fit_tail, text_width, wrap_lines};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use throbber_widgets_tui::Throbber;

const ACCENT: Color = Color::Blue;
const MUTED: Color = Color::DarkGray;
const HELP_TEXT: &str = "Enter search · Tab focus · F1-F5 mode · ↑↓ scroll · Esc quit";
const SUBMIT_WIDTH: u16 = 12;

/// Screen area of a mode card for mouse click handling
#[derive(Debug, Clone)]
pub struct ModeAreaInfo {
    pub mode: Mode,
    pub top: u16,
    pub height: u16,
    pub left: u16,
    pub width: u16,
}

impl ModeAreaInfo {
    fn new(mode: Mode, area: Rect) -> Self {
        Self {
            mode,
            top: area.y,
            height: area.height,
            left: area.x,
            width: area.width,
        }
    }

    /// Whether a terminal cell lies inside this card
    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.left
            && column - self.left < self.width
            && row >= self.top
            && row - self.top < self.height
    }
}

/// Draw the whole search panel
pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(mode_selector_height(area.width, app.active_mode())),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(frame, chunks[0]);
    render_search_box(frame, chunks[1], app);
    render_mode_selector(frame, chunks[2], app);
    render_results(frame, chunks[3], app);
    render_status(frame, chunks[4], app);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            APP_TITLE,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(APP_SUBTITLE, Style::default().fg(MUTED))),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, area);
}

fn render_search_box(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.input_focus == InputFocus::Search;
    let border_color = if focused { ACCENT } else { MUTED };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [input_area, submit_area] =
        Layout::horizontal([Constraint::Min(1), Constraint::Length(SUBMIT_WIDTH)]).areas(inner);

    let query = app.panel.query();
    // one column stays free for the cursor
    let visible = fit_tail(query, usize::from(input_area.width).saturating_sub(1));
    let input = if query.is_empty() {
        Line::from(Span::styled(QUERY_PLACEHOLDER, Style::default().fg(MUTED)))
    } else {
        Line::from(visible.to_string())
    };
    frame.render_widget(Paragraph::new(input), input_area);

    if focused && input_area.width > 0 {
        let offset = u16::try_from(text_width(visible)).unwrap_or(u16::MAX);
        frame.set_cursor_position((input_area.x + offset.min(input_area.width - 1), input_area.y));
    }

    frame.render_widget(
        Paragraph::new(submit_indicator(app)).alignment(Alignment::Right),
        submit_area,
    );
}

/// Submit control: a search glyph when enabled, a dimmed spinner while loading
fn submit_indicator(app: &App) -> Line<'static> {
    if app.panel.submit_enabled() {
        Line::from(Span::styled(
            "⌕ Enter",
            Style::default().fg(Color::White).bg(ACCENT),
        ))
    } else {
        let dim = Style::default().fg(MUTED);
        let spinner = Throbber::default().style(dim).throbber_style(dim);
        Line::from(vec![
            spinner.to_symbol_span(&app.throbber_state),
            Span::styled(" Searching", dim),
        ])
    }
}

/// Unwrapped content of a mode card
fn card_lines(mode: Mode, active: bool) -> Vec<Line<'static>> {
    let accent = if active { ACCENT } else { MUTED };
    vec![
        Line::from(vec![
            Span::styled(mode.icon(), Style::default().fg(accent)),
            Span::raw(" "),
            Span::styled(mode.name(), Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(Span::styled(mode.description(), Style::default().fg(MUTED))),
    ]
}

/// Rows needed so the tallest card shows all of its text at this terminal width
fn mode_selector_height(total_width: u16, active_mode: Mode) -> u16 {
    // the narrowest card gets the floor share of the width
    let card_width = total_width / Mode::ALL.len() as u16;
    let inner_width = usize::from(card_width.saturating_sub(2));
    let rows = Mode::ALL
        .iter()
        .map(|mode| wrap_lines(&card_lines(*mode, *mode == active_mode), inner_width).len())
        .max()
        .unwrap_or(0);
    u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(2)
}

fn render_mode_selector(frame: &mut Frame, area: Rect, app: &mut App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, Mode::ALL.len() as u32); Mode::ALL.len()])
        .split(area);

    app.mode_areas.clear();
    let active_mode = app.active_mode();
    for (mode, card) in Mode::ALL.into_iter().zip(cards.iter()) {
        let active = mode == active_mode;
        let (border_type, accent) = if active {
            (BorderType::Thick, ACCENT)
        } else {
            (BorderType::Plain, MUTED)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(Style::default().fg(accent));
        let inner_width = usize::from(block.inner(*card).width);
        let content =
            Paragraph::new(wrap_lines(&card_lines(mode, active), inner_width)).block(block);

        frame.render_widget(content, *card);
        app.mode_areas.push(ModeAreaInfo::new(mode, *card));
    }
}

fn render_results(frame: &mut Frame, area: Rect, app: &mut App) {
    if app.panel.result().is_none() {
        app.set_results_viewport(0, 0);
        return;
    }
    let Some(result) = app.panel.result() else {
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Span::styled(
            format!(" {} ", result_title(result)),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    let lines = wrap_lines(
        &result_lines(result, &mut app.highlighter),
        usize::from(inner.width),
    );

    let total = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    app.set_results_viewport(total, inner.height);

    let results = Paragraph::new(lines)
        .block(block)
        .scroll((app.results_scroll, 0));
    frame.render_widget(results, area);
}

/// Heading of the results panel for each result type
pub fn result_title(result: &SearchResult) -> &'static str {
    match result {
        SearchResult::Smart { .. } => "AI-Enhanced Results",
        SearchResult::Image { .. } => "Image Analysis",
        SearchResult::Video { .. } => "Video Generation",
        SearchResult::Code { .. } => "Code Assistant",
        SearchResult::Chat { .. } => "AI Chat",
    }
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

/// Placeholder box label standing in for an image
fn image_placeholder(label: &str, path: &str) -> Line<'static> {
    let size = match placeholder_dimensions(path) {
        Some((width, height)) => format!("{}x{}", width, height),
        None => path.to_string(),
    };
    Line::from(Span::styled(
        format!("▢ {} ({})", label, size),
        Style::default().fg(MUTED),
    ))
}

/// Body lines of the results panel, before wrapping
fn result_lines(result: &SearchResult, highlighter: &mut SyntaxHighlighter) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    match result {
        SearchResult::Smart { answer, sources } => {
            lines.push(Line::from(answer.clone()));
            lines.push(Line::default());
            lines.push(heading("Sources:"));
            for source in sources {
                lines.push(Line::from(vec![
                    Span::styled(
                        source.title.clone(),
                        Style::default()
                            .fg(ACCENT)
                            .add_modifier(Modifier::UNDERLINED),
                    ),
                    Span::raw("  "),
                    Span::styled(
                        format!("Relevance: {}", source.relevance),
                        Style::default().fg(MUTED),
                    ),
                ]));
            }
        }
        SearchResult::Image {
            analysis,
            similar_images,
        } => {
            lines.push(Line::from(analysis.clone()));
            lines.push(Line::default());
            for (index, image) in similar_images.iter().enumerate() {
                lines.push(image_placeholder(
                    &format!("Similar image {}", index + 1),
                    image,
                ));
            }
        }
        SearchResult::Video {
            status,
            preview,
            details,
            generation_steps,
        } => {
            lines.push(image_placeholder("Video preview", preview));
            lines.push(Line::from(Span::styled(
                status.clone(),
                Style::default().fg(Color::Yellow),
            )));
            lines.push(Line::default());

            let label = Style::default().fg(MUTED);
            let value = Style::default().add_modifier(Modifier::BOLD);
            lines.push(Line::from(vec![
                Span::styled("Duration ", label),
                Span::styled(details.duration.clone(), value),
                Span::raw("   "),
                Span::styled("Style ", label),
                Span::styled(details.style.clone(), value),
                Span::raw("   "),
                Span::styled("Resolution ", label),
                Span::styled(details.resolution.clone(), value),
            ]));
            lines.push(Line::default());

            lines.push(heading("Generation Progress"));
            for (index, step) in generation_steps.iter().enumerate() {
                lines.push(Line::from(vec![
                    Span::styled(format!("({}) ", index + 1), Style::default().fg(ACCENT)),
                    Span::raw(step.clone()),
                ]));
            }
        }
        SearchResult::Code {
            snippet,
            explanation,
            suggestions,
        } => {
            lines.extend(
                highlighter
                    .highlight_text(snippet, Some(SNIPPET_EXTENSION))
                    .lines,
            );
            lines.push(Line::default());
            lines.push(Line::from(explanation.clone()));
            lines.push(Line::default());
            lines.push(heading("Suggestions:"));
            for suggestion in suggestions {
                lines.push(Line::from(Span::styled(
                    format!("• {}", suggestion),
                    Style::default().fg(MUTED),
                )));
            }
        }
        SearchResult::Chat { messages } => {
            for (index, message) in messages.iter().enumerate() {
                if index > 0 {
                    lines.push(Line::default());
                }
                let style = match message.role {
                    Role::Assistant => Style::default().fg(Color::Cyan),
                    Role::User => Style::default().fg(Color::White),
                };
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{}: ", message.role.label()),
                        style.add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(message.content.clone(), style),
                ]));
            }
        }
    }
    lines
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let status = app.get_status_message();
    let help_width = text_width(HELP_TEXT);

    // the help hint is dropped rather than truncated when it does not fit
    if text_width(&status) + 2 + help_width <= usize::from(area.width) {
        let [status_area, help_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(help_width as u16),
        ])
        .areas(area);
        frame.render_widget(Paragraph::new(status), status_area);
        frame.render_widget(
            Paragraph::new(Span::styled(HELP_TEXT, Style::default().fg(MUTED))),
            help_area,
        );
    } else {
        frame.render_widget(Paragraph::new(status), area);
    }
}
