use crate::app::LoadMore;
use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

pub struct StatusBar<'a> {
    pub query: &'a str,
    pub shown: usize,
    pub load_more: &'a LoadMore,
    pub search_mode: bool,
    pub search_text: &'a str,
}

impl<'a> Widget for StatusBar<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let bg = Style::default().bg(theme::STATUS_BG);
        for x in area.x..area.right() {
            buf[(x, area.y)].set_style(bg);
        }

        if self.search_mode {
            let line = Line::from(vec![
                Span::styled(
                    " /",
                    Style::default()
                        .fg(theme::INPUT_COLOR)
                        .bg(theme::STATUS_BG)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(self.search_text.to_string(), bg),
                Span::styled(
                    "\u{258c}",
                    Style::default().fg(theme::INPUT_COLOR).bg(theme::STATUS_BG),
                ),
            ]);
            buf.set_line(area.x, area.y, &line, area.width);
            return;
        }

        let sep = Span::styled(
            "\u{2502}",
            Style::default().fg(theme::CARD_BORDER).bg(theme::STATUS_BG),
        );

        let mut spans = vec![
            Span::styled(
                " repohunt ",
                Style::default()
                    .fg(theme::ACCENT)
                    .bg(theme::STATUS_BG)
                    .add_modifier(Modifier::BOLD),
            ),
            sep.clone(),
            Span::styled(format!(" {} ", self.query), bg),
            sep.clone(),
            Span::styled(format!(" {} repos ", self.shown), bg),
        ];

        let state = match self.load_more {
            LoadMore::Hidden => None,
            LoadMore::Visible => Some(("more available", theme::DIM_TEXT)),
            LoadMore::Loading => Some(("loading\u{2026}", theme::INPUT_COLOR)),
            LoadMore::Exhausted => Some(("all results loaded", theme::DIM_TEXT)),
            LoadMore::Failed(_) => Some(("fetch failed", theme::ERROR_FG)),
        };
        if let Some((text, color)) = state {
            spans.push(sep);
            spans.push(Span::styled(
                format!(" {text} "),
                Style::default().fg(color).bg(theme::STATUS_BG),
            ));
        }

        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);

        let hints = "/ search  m more  o open  ? help  q quit ";
        let hints_w = UnicodeWidthStr::width(hints);
        let area_w = area.width as usize;
        if area_w > hints_w {
            let x = area.x + (area_w - hints_w) as u16;
            let span = Span::styled(hints, Style::default().fg(theme::DIM_TEXT).bg(theme::STATUS_BG));
            buf.set_line(x, area.y, &Line::from(span), hints_w as u16);
        }
    }
}
