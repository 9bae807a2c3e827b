//! # Application State
//!
//! [`App`] is the form controller: it owns the description draft, the
//! generated content, the request state and the inline editor, and it is
//! the only place any of them change.
//!
//! A submit is split in two halves so the UI loop never blocks:
//! [`App::begin_submit`] validates and flips to loading, then
//! [`App::finish_submit`] applies whatever the service answered.
//! [`App::submit`] glues both halves around an awaited request.

use crate::content::{ContentField, GeneratedContent};
use crate::generate::{GenerateError, GenerateRequest, GenerationService};
use crate::ui::editable::EditableText;
use crate::ui::theme::Theme;
use thiserror::Error;
use tracing::{debug, info};

/// Shown when submitting an empty or whitespace-only description.
pub const VALIDATION_MESSAGE: &str = "Please enter a description";

/// Lifecycle of the generation request. Exactly one state holds at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Failed(String),
}

/// Coarse view of the controller, combining request state and content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Error,
    Ready,
}

/// Why a submit did not start a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("Please enter a description")]
    EmptyDescription,
    #[error("a generation request is already in flight")]
    Busy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Description,
    GenerateButton,
    Field(ContentField),
}

pub struct App {
    pub description: String,
    content: Option<GeneratedContent>,
    request: RequestState,
    pub focus: Focus,
    editor: Option<(ContentField, EditableText)>,
    pub theme: Theme,
    pub server_url: String,
    pub should_quit: bool,
}

impl App {
    pub fn new(theme: Theme, server_url: impl Into<String>) -> Self {
        Self {
            description: String::new(),
            content: None,
            request: RequestState::Idle,
            focus: Focus::Description,
            editor: None,
            theme,
            server_url: server_url.into(),
            should_quit: false,
        }
    }

    pub fn content(&self) -> Option<&GeneratedContent> {
        self.content.as_ref()
    }

    pub fn request_state(&self) -> &RequestState {
        &self.request
    }

    pub fn is_loading(&self) -> bool {
        self.request == RequestState::Loading
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.request {
            RequestState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn phase(&self) -> Phase {
        match (&self.request, &self.content) {
            (RequestState::Loading, _) => Phase::Loading,
            (RequestState::Failed(_), _) => Phase::Error,
            (RequestState::Idle, Some(_)) => Phase::Ready,
            (RequestState::Idle, None) => Phase::Idle,
        }
    }

    // -- Description draft --------------------------------------------------

    pub fn description_push_char(&mut self, c: char) {
        self.description.push(c);
    }

    pub fn description_pop_char(&mut self) {
        self.description.pop();
    }

    // -- Submit -------------------------------------------------------------

    /// Validate the draft and enter the loading state.
    ///
    /// On success the returned request must be sent and its outcome handed
    /// to [`App::finish_submit`].
    pub fn begin_submit(&mut self) -> Result<GenerateRequest, SubmitRejected> {
        if self.is_loading() {
            return Err(SubmitRejected::Busy);
        }
        if self.description.trim().is_empty() {
            debug!("submit: rejected empty description");
            self.request = RequestState::Failed(VALIDATION_MESSAGE.to_string());
            return Err(SubmitRejected::EmptyDescription);
        }

        info!(chars = self.description.len(), "submit: generating content");
        self.request = RequestState::Loading;
        Ok(GenerateRequest {
            description: self.description.clone(),
        })
    }

    /// Apply the outcome of the attempt started by [`App::begin_submit`].
    ///
    /// Ignored unless a request is in flight, so loading ends exactly once.
    pub fn finish_submit(&mut self, outcome: Result<GeneratedContent, GenerateError>) {
        if !self.is_loading() {
            return;
        }
        match outcome {
            Ok(content) => {
                info!(features = content.features.len(), "submit: content replaced");
                // An open editor points into the old content.
                self.editor = None;
                self.content = Some(content);
                self.clamp_focus();
                self.request = RequestState::Idle;
            }
            Err(e) => {
                info!(error = %e, "submit: generation failed");
                self.request = RequestState::Failed(e.to_string());
            }
        }
    }

    /// Run a whole attempt against `service`, awaiting the response inline.
    pub async fn submit(&mut self, service: &dyn GenerationService) -> Result<(), SubmitRejected> {
        let request = self.begin_submit()?;
        let outcome = service.generate(request).await;
        self.finish_submit(outcome);
        Ok(())
    }

    // -- Focus --------------------------------------------------------------

    /// Focus targets in tab order.
    pub fn focusables(&self) -> Vec<Focus> {
        let mut targets = vec![Focus::Description, Focus::GenerateButton];
        if let Some(content) = &self.content {
            targets.extend(content.fields().into_iter().map(Focus::Field));
        }
        targets
    }

    /// Move focus forward, committing any edit in progress first (blur).
    pub fn focus_next(&mut self) {
        self.commit_edit();
        let targets = self.focusables();
        let current = targets.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = targets[(current + 1) % targets.len()];
    }

    /// Move focus backward, committing any edit in progress first (blur).
    pub fn focus_previous(&mut self) {
        self.commit_edit();
        let targets = self.focusables();
        let current = targets.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = targets[(current + targets.len() - 1) % targets.len()];
    }

    /// Step to the next content field without wrapping into the form.
    pub fn field_down(&mut self) {
        self.step_field(1);
    }

    /// Step to the previous content field without wrapping into the form.
    pub fn field_up(&mut self) {
        self.step_field(-1);
    }

    fn step_field(&mut self, delta: isize) {
        let Focus::Field(current) = self.focus else {
            return;
        };
        let Some(content) = &self.content else {
            return;
        };
        let fields = content.fields();
        if let Some(pos) = fields.iter().position(|f| *f == current) {
            let last = fields.len().saturating_sub(1) as isize;
            let next = (pos as isize + delta).clamp(0, last) as usize;
            self.focus = Focus::Field(fields[next]);
        }
    }

    fn clamp_focus(&mut self) {
        if !self.focusables().contains(&self.focus) {
            self.focus = Focus::GenerateButton;
        }
    }

    // -- Inline editing -----------------------------------------------------

    /// Open the editor on the focused content field.
    pub fn begin_edit(&mut self) {
        let Focus::Field(field) = self.focus else {
            return;
        };
        if self.editor.is_some() {
            return;
        }
        let Some(value) = self.content.as_ref().and_then(|c| c.get(field)) else {
            return;
        };
        let mut editor = EditableText::new(value);
        editor.begin_edit();
        self.editor = Some((field, editor));
    }

    pub fn is_editing(&self) -> bool {
        self.editor.is_some()
    }

    /// The field being edited and its editor, if any.
    pub fn editor(&self) -> Option<(ContentField, &EditableText)> {
        self.editor.as_ref().map(|(field, editor)| (*field, editor))
    }

    pub fn editor_mut(&mut self) -> Option<&mut EditableText> {
        self.editor.as_mut().map(|(_, editor)| editor)
    }

    /// Close the editor and write its committed value back into the content.
    ///
    /// Returns `true` when a field actually changed.
    pub fn commit_edit(&mut self) -> bool {
        let Some((field, mut editor)) = self.editor.take() else {
            return false;
        };
        let Some(value) = editor.commit() else {
            return false;
        };
        let changed = self
            .content
            .as_mut()
            .is_some_and(|content| content.apply_edit(field, value));
        if changed {
            debug!(%field, "edit: committed");
        }
        changed
    }

    /// Close the editor without touching the content.
    pub fn cancel_edit(&mut self) {
        self.editor = None;
    }

    // -- Misc ---------------------------------------------------------------

    /// Switch to the next built-in theme and return its name.
    pub fn cycle_theme(&mut self) -> &'static str {
        let next = self.theme.next();
        self.theme = next.clone();
        next.name
    }
}
