use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use revu_core::Rating;

/// Rating selector plus multi-line review input.
pub struct SubmitForm {
    rating: Rating,
    review: String,
}

impl Default for SubmitForm {
    fn default() -> Self {
        Self {
            rating: Rating::One,
            review: String::new(),
        }
    }
}

impl SubmitForm {
    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn review(&self) -> &str {
        &self.review
    }

    pub fn clear_review(&mut self) {
        self.review.clear();
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => self.rating = self.rating.lower(),
            KeyCode::Right => self.rating = self.rating.higher(),
            KeyCode::Enter => self.review.push('\n'),
            KeyCode::Backspace => {
                self.review.pop();
            }
            KeyCode::Char(c) => self.review.push(c),
            _ => {}
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(3)])
            .split(area);

        let mut spans = Vec::new();
        for &rating in Rating::ALL {
            let style = if rating == self.rating {
                Style::default().bold().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(format!(" {} ", rating.stars()), style));
        }
        let selector = Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::ALL).title(" Rating "));
        frame.render_widget(selector, layout[0]);

        let input = Paragraph::new(self.review.as_str())
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Write your review "),
            );
        frame.render_widget(input, layout[1]);
    }
}
