use crate::content::{ContentField, GeneratedContent};
use crate::ui::app::{App, Focus};
use crate::ui::editable::EditableText;
use std::ops::Range;
use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const TITLE: &str = "AI Landing Page Builder";
const DESCRIPTION_LABEL: &str = "Describe your product or business";
const PLACEHOLDER: &str = "AI-based fitness app for busy professionals";
const FEATURES_HEADING: &str = "Key Features";

/// Rows of description text shown before the box starts scrolling.
const MAX_DESCRIPTION_ROWS: u16 = 5;

pub fn render(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.bg).fg(theme.fg)),
        area,
    );

    // The form chrome takes only the rows it needs; the preview gets the rest.
    let description = description_lines(app);
    let description_rows = wrapped_rows(&description, area.width.saturating_sub(2))
        .clamp(1, MAX_DESCRIPTION_ROWS);
    let status = status_lines(app);
    let status_rows = wrapped_rows(&status, area.width).clamp(1, (area.height / 3).max(1));

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                    // Header
            Constraint::Length(description_rows + 2), // Description
            Constraint::Length(status_rows),          // Button + error
            Constraint::Min(0),                       // Preview
            Constraint::Length(1),                    // Footer
        ])
        .split(area);

    render_header(frame, app, main_chunks[0]);
    render_description(frame, app, description, main_chunks[1]);
    frame.render_widget(
        Paragraph::new(status).wrap(Wrap { trim: false }),
        main_chunks[2],
    );
    if let Some(content) = app.content() {
        render_preview(frame, app, content, main_chunks[3]);
    }
    render_footer(frame, app, main_chunks[4]);
}

/// Terminal rows `lines` occupy once wrapped to `width`.
fn wrapped_rows(lines: &[Line], width: u16) -> u16 {
    let rows = Paragraph::new(lines.to_vec())
        .wrap(Wrap { trim: false })
        .line_count(width);
    u16::try_from(rows).unwrap_or(u16::MAX)
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("  {TITLE}  "),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("→ {}", app.server_url),
            Style::default().fg(theme.fg_dim),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent)),
    );

    frame.render_widget(header, area);
}

fn description_lines(app: &App) -> Vec<Line<'static>> {
    let theme = &app.theme;
    let focused = app.focus == Focus::Description;

    if app.description.is_empty() && !focused {
        vec![Line::from(Span::styled(
            PLACEHOLDER,
            Style::default().fg(theme.fg_dim),
        ))]
    } else if focused {
        let cursor = app.description.chars().count();
        cursor_lines(&app.description, cursor, Style::default().fg(theme.fg))
    } else {
        app.description
            .split('\n')
            .map(|line| Line::from(line.to_string()))
            .collect()
    }
}

fn render_description(frame: &mut Frame, app: &App, lines: Vec<Line<'static>>, area: Rect) {
    let theme = &app.theme;
    let border_color = if app.focus == Focus::Description {
        theme.accent
    } else {
        theme.fg_dim
    };

    // The cursor sits at the end of the text, so keep the last rows in view.
    let scroll = wrapped_rows(&lines, area.width.saturating_sub(2))
        .saturating_sub(area.height.saturating_sub(2));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {DESCRIPTION_LABEL} "))
                .border_style(Style::default().fg(border_color)),
        )
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));

    frame.render_widget(paragraph, area);
}

fn status_lines(app: &App) -> Vec<Line<'static>> {
    let theme = &app.theme;
    let label = if app.is_loading() {
        " Generating... "
    } else {
        " Generate "
    };

    let button_style = if app.is_loading() {
        Style::default().fg(theme.bg).bg(theme.fg_dim)
    } else if app.focus == Focus::GenerateButton {
        Style::default()
            .fg(theme.bg)
            .bg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
    };

    let mut lines = vec![Line::from(vec![
        Span::raw(" "),
        Span::styled(format!("[{label}]"), button_style),
    ])];
    if let Some(message) = app.error_message() {
        lines.push(Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
        )));
    }
    lines
}

/// The preview as one column of lines, remembering which lines each
/// editable field occupies.
struct Preview {
    lines: Vec<Line<'static>>,
    hero_end: usize,
    fields: Vec<(ContentField, Range<usize>)>,
}

impl Preview {
    fn push_field(&mut self, field: ContentField, lines: impl IntoIterator<Item = Line<'static>>) {
        let start = self.lines.len();
        self.lines.extend(lines);
        self.fields.push((field, start..self.lines.len()));
    }

    fn field_range(&self, field: ContentField) -> Option<Range<usize>> {
        self.fields
            .iter()
            .find(|(candidate, _)| *candidate == field)
            .map(|(_, range)| range.clone())
    }
}

fn preview_lines(app: &App, content: &GeneratedContent) -> Preview {
    let theme = &app.theme;
    let hero_style = Style::default().fg(theme.hero_fg).bg(theme.hero_bg);
    let mut preview = Preview {
        lines: vec![Line::default()],
        hero_end: 0,
        fields: Vec::new(),
    };

    preview.push_field(
        ContentField::HeroTitle,
        field_lines(
            app,
            ContentField::HeroTitle,
            &content.hero_title,
            hero_style.add_modifier(Modifier::BOLD),
        )
        .into_iter()
        .map(Line::centered),
    );
    preview.lines.push(Line::default());
    preview.push_field(
        ContentField::HeroSubtitle,
        field_lines(
            app,
            ContentField::HeroSubtitle,
            &content.hero_subtitle,
            hero_style,
        )
        .into_iter()
        .map(Line::centered),
    );
    preview.lines.push(Line::default());
    preview.hero_end = preview.lines.len();

    preview.lines.extend([
        Line::default(),
        Line::from(Span::styled(
            FEATURES_HEADING,
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ]);
    for (index, feature) in content.features.iter().enumerate() {
        let field = ContentField::Feature(index);
        let lines = field_lines(app, field, feature, Style::default().fg(theme.fg));
        let bulleted = lines.into_iter().enumerate().map(|(row, line)| {
            let prefix = if row == 0 {
                Span::styled(" ● ", Style::default().fg(theme.accent))
            } else {
                Span::raw("   ")
            };
            let mut spans = vec![prefix];
            spans.extend(line.spans);
            Line::from(spans)
        });
        preview.push_field(field, bulleted);
    }

    preview.lines.push(Line::default());
    preview.push_field(
        ContentField::CtaText,
        field_lines(
            app,
            ContentField::CtaText,
            &content.cta_text,
            Style::default()
                .fg(theme.bg)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .into_iter()
        .map(Line::centered),
    );
    preview
}

/// The field whose rows must stay on screen: the one being edited, else the
/// focused one.
fn active_field(app: &App) -> Option<ContentField> {
    if let Some((field, _)) = app.editor() {
        return Some(field);
    }
    match app.focus {
        Focus::Field(field) => Some(field),
        _ => None,
    }
}

fn render_preview(frame: &mut Frame, app: &App, content: &GeneratedContent, area: Rect) {
    let theme = &app.theme;
    let preview = preview_lines(app, content);

    let inner = Block::default().borders(Borders::ALL).inner(area);
    let text_area = inner.inner(Margin::new(1, 0));
    let width = text_area.width;

    let scroll = active_field(app)
        .and_then(|field| preview.field_range(field))
        .map_or(0, |range| {
            let top = wrapped_rows(&preview.lines[..range.start], width);
            let bottom = wrapped_rows(&preview.lines[..range.end], width);
            bottom.saturating_sub(inner.height).min(top)
        });
    let total_rows = wrapped_rows(&preview.lines, width);
    let hero_rows = wrapped_rows(&preview.lines[..preview.hero_end], width);

    let title = if total_rows > scroll.saturating_add(inner.height) {
        " Preview ↓ "
    } else {
        " Preview "
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(theme.fg_dim));
    frame.render_widget(block, area);

    let band_height = hero_rows.saturating_sub(scroll).min(inner.height);
    if band_height > 0 {
        frame.render_widget(
            Block::default().style(Style::default().bg(theme.hero_bg)),
            Rect {
                height: band_height,
                ..inner
            },
        );
    }

    frame.render_widget(
        Paragraph::new(preview.lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        text_area,
    );
}

/// Lines for one editable field: the live draft with a cursor when it is
/// being edited, otherwise the stored value (underlined when focused).
fn field_lines(app: &App, field: ContentField, value: &str, style: Style) -> Vec<Line<'static>> {
    if let Some((editing, editor)) = app.editor() {
        if editing == field {
            return editor_lines(editor, style.bg(app.theme.editing_bg));
        }
    }

    let style = if app.focus == Focus::Field(field) {
        style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD)
    } else {
        style
    };
    value
        .split('\n')
        .map(|line| Line::from(Span::styled(line.to_string(), style)))
        .collect()
}

fn editor_lines(editor: &EditableText, style: Style) -> Vec<Line<'static>> {
    let cursor = editor.cursor().unwrap_or(0);
    cursor_lines(editor.display_text(), cursor, style)
}

/// Split `text` into lines, drawing the char at `cursor` (or a trailing
/// space at the end) in reverse video.
fn cursor_lines(text: &str, cursor: usize, style: Style) -> Vec<Line<'static>> {
    let cursor_style = style.add_modifier(Modifier::REVERSED);
    let mut lines = Vec::new();
    let mut spans = Vec::new();
    let mut run = String::new();

    for (i, c) in text.chars().enumerate() {
        if i == cursor {
            spans.push(Span::styled(std::mem::take(&mut run), style));
            let shown = if c == '\n' { ' ' } else { c };
            spans.push(Span::styled(shown.to_string(), cursor_style));
        }
        if c == '\n' {
            spans.push(Span::styled(std::mem::take(&mut run), style));
            lines.push(Line::from(std::mem::take(&mut spans)));
        } else if i != cursor {
            run.push(c);
        }
    }

    spans.push(Span::styled(run, style));
    if cursor >= text.chars().count() {
        spans.push(Span::styled(" ", cursor_style));
    }
    lines.push(Line::from(spans));
    lines
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.is_editing() {
        "[Enter] Save  [Esc] Cancel  [←→] Move  [Tab] Save & Next"
    } else {
        match app.focus {
            Focus::Description => {
                "[Enter] Generate  [Alt+Enter] Newline  [Tab] Next  [Ctrl+T] Theme  [Esc] Quit"
            }
            Focus::GenerateButton => "[Enter] Generate  [Tab] Next  [Ctrl+T] Theme  [Q] Quit",
            Focus::Field(_) => {
                "[Enter/e] Edit  [↑↓/jk] Move  [Tab] Next  [Ctrl+T] Theme  [Q] Quit"
            }
        }
    };

    let footer = Paragraph::new(help_text)
        .style(Style::default().fg(app.theme.fg_dim))
        .block(Block::default());

    frame.render_widget(footer, area);
}
