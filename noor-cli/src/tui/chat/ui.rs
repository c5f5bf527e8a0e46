//! Chat UI rendering components

use super::markdown::render_markdown;
use super::state::{ChatState, SUGGESTIONS};
use crate::tui::theme::Palette;
use noor_core::MessageRole;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

const SPINNER_FRAMES: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];

/// Main chat UI renderer
pub struct ChatUI;

impl ChatUI {
    /// Render the complete chat interface
    pub fn render(frame: &mut Frame, state: &ChatState, model: &str) {
        let palette = Palette::for_mode(state.dark_mode);
        let area = frame.area();

        // Layout: Status bar, Messages, Input, Help bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(5),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(area);

        Self::render_status_bar(frame, chunks[0], state, model, &palette);
        Self::render_messages(frame, chunks[1], state, &palette);
        Self::render_input(frame, chunks[2], state, &palette);
        Self::render_help_bar(frame, chunks[3], state, &palette);
    }

    fn render_status_bar(
        frame: &mut Frame,
        area: Rect,
        state: &ChatState,
        model: &str,
        palette: &Palette,
    ) {
        let theme_badge = if state.dark_mode { "داكن" } else { "فاتح" };

        let loading_indicator = if state.is_loading() {
            Span::styled(
                format!(" {} ", SPINNER_FRAMES[state.loading_frame]),
                palette.loading(),
            )
        } else {
            Span::raw("")
        };

        let status_msg = state
            .status_message
            .as_ref()
            .map(|s| Span::styled(format!(" │ {s}"), palette.subtitle()))
            .unwrap_or_else(|| Span::raw(""));

        let status_line = Line::from(vec![
            Span::styled(" نور الهداية ", palette.title()),
            Span::styled("مساعدك الذكي", palette.subtitle()),
            Span::styled(" │ ", palette.subtitle()),
            Span::styled(model.to_string(), palette.text()),
            Span::styled(" │ ", palette.subtitle()),
            Span::styled(theme_badge, palette.text()),
            loading_indicator,
            status_msg,
        ]);

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(palette.border());

        frame.render_widget(Paragraph::new(status_line).block(block), area);
    }

    fn render_messages(frame: &mut Frame, area: Rect, state: &ChatState, palette: &Palette) {
        let lines = if state.session.messages().is_empty() && !state.is_loading() {
            Self::empty_state_lines(palette)
        } else {
            Self::message_lines(state, palette)
        };

        // Clamp the scroll; u16::MAX means "pin to newest"
        let inner_height = area.height.saturating_sub(1) as usize;
        let max_scroll = lines.len().saturating_sub(inner_height) as u16;
        let scroll = state.scroll_offset.min(max_scroll);

        let block = Block::default()
            .borders(Borders::LEFT | Borders::RIGHT)
            .border_style(palette.border());

        let para = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0));

        frame.render_widget(para, area);
    }

    fn message_lines(state: &ChatState, palette: &Palette) -> Vec<Line<'static>> {
        let mut lines: Vec<Line> = Vec::new();

        for msg in state.session.messages() {
            match msg.role {
                MessageRole::User => {
                    lines.push(Line::from(Span::styled("أنت:", palette.user_prefix())));
                    for line in msg.content.lines() {
                        lines.push(Line::from(Span::styled(
                            format!("  {line}"),
                            palette.text(),
                        )));
                    }
                }
                MessageRole::Assistant => {
                    lines.push(Line::from(Span::styled("نور:", palette.assistant_prefix())));
                    for line in render_markdown(&msg.content, palette) {
                        lines.push(line);
                    }
                }
            }
            lines.push(Line::from(""));
        }

        if state.is_loading() {
            lines.push(Line::from(Span::styled(
                format!(
                    "{} جاري التفكير...",
                    SPINNER_FRAMES[state.loading_frame]
                ),
                palette.loading(),
            )));
        }

        lines
    }

    fn empty_state_lines(palette: &Palette) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "  كيف يمكنني مساعدتك اليوم؟",
                palette.title(),
            )),
            Line::from(Span::styled(
                "  أنا هنا للإجابة على تساؤلاتك الدينية والعامة بكل رحابة صدر.",
                palette.subtitle(),
            )),
            Line::from(""),
        ];
        for (i, suggestion) in SUGGESTIONS.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {}. ", i + 1), palette.key_hint()),
                Span::styled((*suggestion).to_string(), palette.suggestion()),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  اضغط رقم الاقتراح لنسخه إلى حقل الإدخال",
            palette.subtitle(),
        )));
        lines
    }

    fn render_input(frame: &mut Frame, area: Rect, state: &ChatState, palette: &Palette) {
        let display_input = if state.is_loading() {
            Span::styled("بانتظار الرد...".to_string(), palette.subtitle())
        } else if state.input.is_empty() {
            Span::styled("اكتب سؤالك هنا...".to_string(), palette.subtitle())
        } else {
            let mut chars: Vec<char> = state.input.chars().collect();
            if state.cursor_pos >= chars.len() {
                chars.push('_');
            } else {
                chars.insert(state.cursor_pos, '|');
            }
            Span::styled(chars.into_iter().collect::<String>(), palette.text())
        };

        let input_line = Line::from(vec![
            Span::styled("> ", palette.key_hint()),
            display_input,
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(if state.is_loading() {
                palette.border()
            } else {
                palette.border_active()
            })
            .title(if state.is_command() {
                " أمر "
            } else {
                " رسالة "
            });

        frame.render_widget(Paragraph::new(input_line).block(block), area);
    }

    fn render_help_bar(frame: &mut Frame, area: Rect, state: &ChatState, palette: &Palette) {
        let help_text = if state.is_loading() {
            Line::from(Span::styled(
                " هذا المساعد يستخدم الذكاء الاصطناعي، يرجى مراجعة المصادر الموثوقة ",
                palette.subtitle(),
            ))
        } else {
            Line::from(vec![
                Span::styled(" Enter", palette.key_hint()),
                Span::styled(": إرسال │ ", palette.subtitle()),
                Span::styled("/help", palette.key_hint()),
                Span::styled(": الأوامر │ ", palette.subtitle()),
                Span::styled("Ctrl+T", palette.key_hint()),
                Span::styled(": النمط │ ", palette.subtitle()),
                Span::styled("Ctrl+Q", palette.key_hint()),
                Span::styled(": خروج ", palette.subtitle()),
            ])
        };

        frame.render_widget(Paragraph::new(help_text), area);
    }
}
