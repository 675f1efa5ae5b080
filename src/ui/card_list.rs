use crate::app::{Card, LoadMore};
use crate::ui::{theme, truncate_with_ellipsis, wrap_lines};
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

const DESC_MAX_LINES: usize = 2;

/// Display height of one card at the given text width, borders included.
pub fn card_height(card: &Card, text_w: usize) -> u16 {
    let desc_lines = wrap_lines(&card.record.description, text_w, DESC_MAX_LINES)
        .len()
        .max(1);
    // name + description + stars/forks row
    let mut lines = 2 + desc_lines;
    if card.expanded {
        // full name, language, updated, size, url
        lines += 5;
    }
    lines as u16 + 2
}

pub struct CardList<'a> {
    pub cards: &'a [Card],
    pub selected: usize,
    pub scroll: usize,
    pub load_more: &'a LoadMore,
    pub focused: bool,
}

impl<'a> CardList<'a> {
    fn card_lines(card: &Card, text_w: usize) -> Vec<Line<'static>> {
        let r = &card.record;
        let label = Style::default().fg(theme::ACCENT);
        let mut lines = vec![Line::from(Span::styled(
            truncate_with_ellipsis(&r.name, text_w),
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        ))];

        let desc = wrap_lines(&r.description, text_w, DESC_MAX_LINES);
        if desc.is_empty() {
            lines.push(Line::from(Span::styled(
                "No description".to_string(),
                Style::default().fg(theme::DIM_TEXT),
            )));
        } else {
            for l in desc {
                lines.push(Line::from(Span::styled(
                    l,
                    Style::default().fg(theme::DIM_TEXT),
                )));
            }
        }

        lines.push(Line::from(vec![
            Span::styled(
                format!("\u{2605} {}", r.stars),
                Style::default().fg(theme::STAR_COLOR),
            ),
            Span::raw("  "),
            Span::styled(
                format!("\u{2442} {}", r.forks),
                Style::default().fg(theme::FORK_COLOR),
            ),
        ]));

        if card.expanded {
            lines.push(Line::from(vec![
                Span::styled("Full name ", label),
                Span::raw(truncate_with_ellipsis(&r.full_name, text_w.saturating_sub(10))),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Language ", label),
                Span::styled(r.language.clone(), Style::default().fg(theme::LANGUAGE_COLOR)),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Updated ", label),
                Span::raw(r.updated_label()),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Size ", label),
                Span::raw(r.size_label()),
            ]));
            lines.push(Line::from(vec![
                Span::styled("URL ", label),
                Span::raw(truncate_with_ellipsis(&r.url, text_w.saturating_sub(4))),
            ]));
        }

        lines
    }

    fn load_more_line(&self) -> Option<Line<'static>> {
        match self.load_more {
            LoadMore::Hidden => None,
            LoadMore::Visible => Some(Line::from(Span::styled(
                " \u{25be} m: load more".to_string(),
                Style::default().fg(theme::ACCENT),
            ))),
            LoadMore::Loading => Some(Line::from(Span::styled(
                " \u{2026} loading".to_string(),
                Style::default().fg(theme::DIM_TEXT),
            ))),
            LoadMore::Exhausted => Some(Line::from(Span::styled(
                " \u{2500} no more results \u{2500}".to_string(),
                Style::default().fg(theme::DIM_TEXT),
            ))),
            LoadMore::Failed(e) => Some(Line::from(Span::styled(
                format!(" error: {e} (m to retry)"),
                Style::default().fg(theme::ERROR_FG),
            ))),
        }
    }
}

impl<'a> Widget for CardList<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        if area.height == 0 || area.width < 6 {
            return;
        }

        let text_w = area.width.saturating_sub(4) as usize;
        let bottom = area.bottom();
        let mut y = area.y;
        let mut all_cards_shown = true;

        for (idx, card) in self.cards.iter().enumerate().skip(self.scroll) {
            if y >= bottom {
                all_cards_shown = false;
                break;
            }
            let h = card_height(card, text_w).min(bottom - y);
            let card_area = Rect::new(area.x, y, area.width, h);

            let border = if idx == self.selected && self.focused {
                theme::SELECTED_BORDER
            } else {
                theme::CARD_BORDER
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border));
            let inner = block.inner(card_area);
            block.render(card_area, buf);

            for (i, line) in Self::card_lines(card, text_w).iter().enumerate() {
                let ly = inner.y + i as u16;
                if ly >= inner.bottom() {
                    break;
                }
                buf.set_line(inner.x + 1, ly, line, inner.width.saturating_sub(1));
            }

            y += h;
        }

        if all_cards_shown && y < bottom {
            if let Some(line) = self.load_more_line() {
                buf.set_line(area.x, y, &line, area.width);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::record::RepoRecord;
    use serde_json::json;

    fn card(desc: &str, expanded: bool) -> Card {
        Card {
            record: RepoRecord::from_json(&json!({ "description": desc })),
            expanded,
        }
    }

    #[test]
    fn height_grows_with_detail_view() {
        let summary = card("short", false);
        let detail = card("short", true);
        assert_eq!(card_height(&summary, 40), 5);
        assert_eq!(card_height(&detail, 40), 10);
    }

    #[test]
    fn long_description_wraps_to_two_lines() {
        let c = card(&"x".repeat(100), false);
        assert_eq!(card_height(&c, 40), 6);
    }
}
