//! Application state and core logic

use crate::content::SiteContent;
use crate::platform::SUBMIT_MODIFIER;
use crate::signup::{
    FieldId, FormEvent, FormSurface, SignupPage, SubmissionEndpoint, SubmissionStatus,
    WorkflowSettings,
};
use crate::state::{AppState, BlogFocus, Form, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Endpoint sign-ups are sent to
    endpoint: Arc<dyn SubmissionEndpoint>,
    /// Fixed values for sign-up attempts
    settings: WorkflowSettings,
    /// Handlers for the sign-up form while the Subscribe view is shown
    signup_page: Option<SignupPage>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(
        content: SiteContent,
        endpoint: Arc<dyn SubmissionEndpoint>,
        settings: WorkflowSettings,
    ) -> Self {
        Self {
            state: AppState::new(content),
            endpoint,
            settings,
            signup_page: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Advance time-driven state
    pub fn tick(&mut self, now: Instant) {
        self.state.blog.load_more.tick(now);
    }

    /// Status of the latest sign-up attempt while the Subscribe view is shown
    pub fn signup_status(&self) -> SubmissionStatus {
        self.signup_page
            .as_ref()
            .map(SignupPage::status)
            .unwrap_or_default()
    }

    /// Switch views, mounting or tearing down the sign-up page as needed.
    ///
    /// Must run inside a tokio runtime when entering the Subscribe view.
    pub fn navigate(&mut self, view: View) {
        if self.state.current_view == view {
            return;
        }
        debug!(from = ?self.state.current_view, to = ?view, "navigate");
        if self.state.current_view == View::Subscribe {
            self.signup_page = None;
        }
        if view == View::Subscribe {
            let surface: Arc<dyn FormSurface> = Arc::new(self.state.signup.clone());
            self.signup_page = Some(SignupPage::mount(
                surface,
                Arc::clone(&self.endpoint),
                self.settings.clone(),
            ));
        }
        self.state.current_view = view;
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if !self.state.current_view.is_form_view() {
            if let KeyCode::Char(c) = key.code {
                if c == 'q' {
                    self.quit = true;
                    return Ok(());
                }
                if let Some(view) = View::ALL.iter().find(|v| v.shortcut() == c) {
                    self.navigate(*view);
                    return Ok(());
                }
            }
        }

        match self.state.current_view {
            View::Blog => self.handle_blog_key(key),
            View::Faq => self.handle_faq_key(key),
            View::Subscribe => self.handle_subscribe_key(key),
        }
        Ok(())
    }

    /// Handle keys in Blog view
    fn handle_blog_key(&mut self, key: KeyEvent) {
        let blog = &mut self.state.blog;
        match (self.state.blog_focus, key.code) {
            (_, KeyCode::Tab) => self.state.blog_focus = self.state.blog_focus.next(),
            (BlogFocus::Filters, KeyCode::Left | KeyCode::Char('h')) => blog.prev_filter(),
            (BlogFocus::Filters, KeyCode::Right | KeyCode::Char('l')) => blog.next_filter(),
            (BlogFocus::Filters, KeyCode::Enter) => blog.apply_selected_filter(),
            (BlogFocus::Posts, KeyCode::Down | KeyCode::Char('j')) => blog.next_post(),
            (BlogFocus::Posts, KeyCode::Up | KeyCode::Char('k')) => blog.prev_post(),
            (BlogFocus::LoadMore, KeyCode::Enter) => blog.load_more.press(Instant::now()),
            _ => {}
        }
    }

    /// Handle keys in FAQ view
    fn handle_faq_key(&mut self, key: KeyEvent) {
        let faq = &mut self.state.faq;
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => faq.select_next(),
            KeyCode::Up | KeyCode::Char('k') => faq.select_prev(),
            KeyCode::Enter | KeyCode::Char(' ') => faq.toggle_selected(),
            _ => {}
        }
    }

    /// Handle keys in Subscribe view
    fn handle_subscribe_key(&mut self, key: KeyEvent) {
        let form = self.state.signup.clone();
        let (active, disabled, on_join) = {
            let f = form.lock();
            (f.active_field_id(), f.disabled, f.is_join_button_active())
        };
        let blur_text = |app: &Self, field: Option<FieldId>| {
            if let Some(field) = field.filter(|f| !f.is_checkbox()) {
                app.dispatch(FormEvent::Blur(field));
            }
        };

        match key.code {
            KeyCode::Esc => self.navigate(View::Blog),
            KeyCode::Tab => {
                form.lock().next_field();
                blur_text(self, active);
            }
            KeyCode::BackTab => {
                form.lock().prev_field();
                blur_text(self, active);
            }
            KeyCode::Enter if on_join => self.submit_signup(),
            KeyCode::Enter if active.is_some_and(|f| !f.is_checkbox()) => {
                form.lock().next_field();
                blur_text(self, active);
            }
            KeyCode::Char('s') if key.modifiers.contains(SUBMIT_MODIFIER) => {
                self.submit_signup()
            }
            _ if disabled => {}
            KeyCode::Char(' ') | KeyCode::Enter if active.is_some_and(|f| f.is_checkbox()) => {
                if let Some(field) = form.lock().get_active_field_mut() {
                    field.toggle();
                }
            }
            KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
                if let Some(field) = active.filter(|f| !f.is_checkbox()) {
                    form.lock().field_mut(field).push_char(c);
                    self.dispatch(FormEvent::Input(field));
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = active.filter(|f| !f.is_checkbox()) {
                    form.lock().field_mut(field).pop_char();
                    self.dispatch(FormEvent::Input(field));
                }
            }
            _ => {}
        }
    }

    /// Submit the sign-up unless a submission is already in flight
    fn submit_signup(&self) {
        if self.state.signup.is_disabled() {
            debug!("ignoring submit while the form is disabled");
            return;
        }
        self.dispatch(FormEvent::Submit);
    }

    fn dispatch(&self, event: FormEvent) {
        if let Some(page) = &self.signup_page {
            page.dispatch(event);
        }
    }
}
