use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use revu_service::{DashboardSnapshot, SubmissionPipeline, SubmitError};
use revu_store::FeedbackStore;

use crate::components::admin_panel::AdminPanel;
use crate::components::submit_form::SubmitForm;

/// Which of the two mutually exclusive screens is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Submit,
    Admin,
}

pub struct App {
    pipeline: SubmissionPipeline,
    store: FeedbackStore,
    screen: Screen,
    form: SubmitForm,
    /// Generated reply from the most recent successful submission.
    last_response: Option<String>,
    admin: Option<AdminPanel>,
    admin_error: Option<String>,
    status_message: Option<String>,
}

impl App {
    pub fn new(pipeline: SubmissionPipeline, store: FeedbackStore) -> Self {
        Self {
            pipeline,
            store,
            screen: Screen::Submit,
            form: SubmitForm::default(),
            last_response: None,
            admin: None,
            admin_error: None,
            status_message: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn form(&self) -> &SubmitForm {
        &self.form
    }

    pub fn last_response(&self) -> Option<&str> {
        self.last_response.as_deref()
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn admin(&self) -> Option<&AdminPanel> {
        self.admin.as_ref()
    }

    pub fn admin_error(&self) -> Option<&str> {
        self.admin_error.as_deref()
    }

    /// The submission form captures every printable key, including `q`.
    pub fn is_input_mode(&self) -> bool {
        self.screen == Screen::Submit
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.status_message = None;

        if key.code == KeyCode::Tab {
            self.toggle_screen();
            return;
        }

        match self.screen {
            Screen::Submit => self.handle_submit_screen(key),
            Screen::Admin => self.handle_admin_screen(key),
        }
    }

    fn toggle_screen(&mut self) {
        self.screen = match self.screen {
            Screen::Submit => {
                self.load_admin();
                Screen::Admin
            }
            Screen::Admin => Screen::Submit,
        };
    }

    /// Read the store and rebuild the admin view model. A read failure
    /// degrades to an error notice instead of crashing the process.
    fn load_admin(&mut self) {
        match self.store.read_all() {
            Ok(records) => {
                self.admin = Some(AdminPanel::new(DashboardSnapshot::from_records(records)));
                self.admin_error = None;
            }
            Err(e) => {
                self.admin = None;
                self.admin_error = Some(format!("Error: {e}"));
            }
        }
    }

    fn handle_submit_screen(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit();
            }
            KeyCode::Esc => {
                self.last_response = None;
            }
            _ => self.form.handle_key(key),
        }
    }

    /// Run the pipeline for the current form contents. Blocks until the
    /// generation calls return or fail; every error becomes a status
    /// message on this screen.
    fn submit(&mut self) {
        match self.pipeline.submit(self.form.rating(), self.form.review()) {
            Ok(record) => {
                self.form.clear_review();
                self.last_response = Some(record.ai_response);
                self.status_message = Some("Feedback submitted successfully!".into());
            }
            Err(SubmitError::EmptyReview) => {
                self.status_message = Some("Please enter a review before submitting.".into());
            }
            Err(e) => {
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    fn handle_admin_screen(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('r') => self.load_admin(),
            _ => {
                if let Some(admin) = self.admin.as_mut() {
                    admin.handle_key(key);
                }
            }
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        self.render_title_bar(frame, layout[0]);
        match self.screen {
            Screen::Submit => self.render_submit_screen(frame, layout[1]),
            Screen::Admin => self.render_admin_screen(frame, layout[1]),
        }
        self.render_status_bar(frame, layout[2]);
    }

    fn render_title_bar(&self, frame: &mut Frame, area: Rect) {
        let screen_name = match self.screen {
            Screen::Submit => "User Feedback",
            Screen::Admin => "Admin Dashboard",
        };
        let title = Line::from(vec![
            Span::styled(" revu ", Style::default().bold().fg(Color::Cyan)),
            Span::raw("| "),
            Span::styled(screen_name, Style::default().fg(Color::Yellow)),
        ]);
        frame.render_widget(title, area);
    }

    fn render_submit_screen(&self, frame: &mut Frame, area: Rect) {
        if let Some(ref response) = self.last_response {
            let halves = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(area);
            self.form.render(frame, halves[0]);
            let reply = Paragraph::new(response.as_str())
                .wrap(Wrap { trim: false })
                .block(Block::default().borders(Borders::ALL).title(" AI Response "));
            frame.render_widget(reply, halves[1]);
        } else {
            self.form.render(frame, area);
        }
    }

    fn render_admin_screen(&mut self, frame: &mut Frame, area: Rect) {
        if let Some(ref err) = self.admin_error {
            let notice = Paragraph::new(err.as_str())
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: false })
                .block(Block::default().borders(Borders::ALL).title(" Store Error "));
            frame.render_widget(notice, area);
            return;
        }
        if let Some(admin) = self.admin.as_mut() {
            admin.render(frame, area);
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        if let Some(ref msg) = self.status_message {
            let line = Line::from(Span::styled(
                format!(" {msg}"),
                Style::default().fg(Color::Green),
            ));
            frame.render_widget(line, area);
            return;
        }

        let hints: &[(&str, &str)] = match self.screen {
            Screen::Submit => &[
                ("Ctrl+S", "submit"),
                ("←/→", "rating"),
                ("Esc", "dismiss reply"),
                ("Tab", "admin"),
                ("Ctrl+C", "quit"),
            ],
            Screen::Admin => &[
                ("j/k", "scroll"),
                ("r", "refresh"),
                ("Tab", "feedback form"),
                ("q", "quit"),
            ],
        };

        let mut spans = Vec::new();
        for (key, desc) in hints {
            spans.push(Span::styled(
                format!(" {key}"),
                Style::default().bold().fg(Color::Cyan),
            ));
            spans.push(Span::styled(
                format!(" {desc} "),
                Style::default().fg(Color::DarkGray),
            ));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
