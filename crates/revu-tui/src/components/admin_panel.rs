use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{BarChart, Block, Borders, Paragraph, Row, Table, TableState, Wrap};

use revu_service::DashboardSnapshot;

/// Read-only aggregate view: metric tiles, the submission table
/// (newest first) and the rating histogram. Holds no controls that
/// mutate state.
pub struct AdminPanel {
    snapshot: DashboardSnapshot,
    table_state: TableState,
}

impl AdminPanel {
    pub fn new(snapshot: DashboardSnapshot) -> Self {
        let mut table_state = TableState::default();
        if !snapshot.is_empty() {
            table_state.select(Some(0));
        }
        Self {
            snapshot,
            table_state,
        }
    }

    pub fn snapshot(&self) -> &DashboardSnapshot {
        &self.snapshot
    }

    pub fn selected(&self) -> Option<usize> {
        self.table_state.selected()
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let last = self.snapshot.total().saturating_sub(1);
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if let Some(current) = self.table_state.selected() {
                    if current < last {
                        self.table_state.select(Some(current + 1));
                    }
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if let Some(current) = self.table_state.selected() {
                    if current > 0 {
                        self.table_state.select(Some(current - 1));
                    }
                }
            }
            KeyCode::Char('g') => {
                if !self.snapshot.is_empty() {
                    self.table_state.select(Some(0));
                }
            }
            KeyCode::Char('G') => {
                if !self.snapshot.is_empty() {
                    self.table_state.select(Some(last));
                }
            }
            _ => {}
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.snapshot.is_empty() {
            let notice = Paragraph::new("No feedback submissions yet.")
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: false })
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(notice, area);
            return;
        }

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(9),
            ])
            .split(area);

        self.render_metrics(frame, layout[0]);
        self.render_table(frame, layout[1]);
        self.render_histogram(frame, layout[2]);
    }

    fn render_metrics(&self, frame: &mut Frame, area: Rect) {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let total = Paragraph::new(self.snapshot.total().to_string())
            .style(Style::default().bold())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Total Submissions "),
            );
        frame.render_widget(total, halves[0]);

        let average = self
            .snapshot
            .average_rating()
            .map(|avg| format!("{avg:.2}"))
            .unwrap_or_else(|| "—".to_string());
        let average = Paragraph::new(average).style(Style::default().bold()).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Average Rating "),
        );
        frame.render_widget(average, halves[1]);
    }

    fn render_table(&mut self, frame: &mut Frame, area: Rect) {
        let header = Row::new(["Time", "Rating", "Review", "Summary", "Action"])
            .style(Style::default().bold().fg(Color::Cyan));

        let rows: Vec<Row> = self
            .snapshot
            .records()
            .iter()
            .map(|record| {
                Row::new(vec![
                    record.timestamp.format("%Y-%m-%d %H:%M").to_string(),
                    record.rating.stars().to_string(),
                    single_line(&record.review),
                    single_line(&record.ai_summary),
                    single_line(&record.ai_action),
                ])
            })
            .collect();

        let widths = [
            Constraint::Length(16),
            Constraint::Length(6),
            Constraint::Percentage(34),
            Constraint::Percentage(22),
            Constraint::Percentage(22),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .row_highlight_style(Style::default().bg(Color::DarkGray))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" All Feedback (Latest First) "),
            );

        frame.render_stateful_widget(table, area, &mut self.table_state);
    }

    fn render_histogram(&self, frame: &mut Frame, area: Rect) {
        let data: Vec<(&str, u64)> = ["1", "2", "3", "4", "5"]
            .into_iter()
            .zip(self.snapshot.histogram().into_iter().map(|(_, count)| count))
            .collect();

        let chart = BarChart::default()
            .data(&data[..])
            .bar_width(5)
            .bar_gap(2)
            .bar_style(Style::default().fg(Color::Yellow))
            .value_style(Style::default().bold())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Rating Distribution "),
            );
        frame.render_widget(chart, area);
    }
}

/// Flatten embedded newlines so a record stays on one table row.
fn single_line(text: &str) -> String {
    text.replace('\n', " ")
}
