use std::sync::Arc;
use std::time::{Duration, Instant};

use folio_core::{AssetCatalog, ChatBridge, ContactDraft, ContactRelay, Portfolio, Transcript};
use tokio::runtime::Handle as TokioHandle;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;

const CHAT_EVENT_CHANNEL_CAPACITY: usize = 8;
const CONTACT_EVENT_CHANNEL_CAPACITY: usize = 8;
#[cfg(test)]
const DEFAULT_STATUS_RESET: Duration = Duration::from_secs(5);
#[cfg(test)]
const DEFAULT_TRANSCRIPT_LINE_LIMIT: usize = 200;

/// The mutually exclusive top-level screens. Exactly one is active at any
/// time; transitions happen only through [`ShellState::navigate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Projects,
    Resume,
    AiChat,
    Contact,
}

impl View {
    pub const ALL: [View; 5] = [
        View::Home,
        View::Projects,
        View::Resume,
        View::AiChat,
        View::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Projects => "projects",
            Self::Resume => "resume",
            Self::AiChat => "assistant",
            Self::Contact => "contact",
        }
    }

    fn position(self) -> usize {
        Self::ALL
            .iter()
            .position(|view| *view == self)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub(crate) fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Message,
            Self::Message => Self::Name,
        }
    }

    pub(crate) fn previous(self) -> Self {
        match self {
            Self::Name => Self::Message,
            Self::Email => Self::Name,
            Self::Message => Self::Email,
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Name => "your name",
            Self::Email => "your email",
            Self::Message => "your message",
        }
    }
}

#[derive(Debug)]
pub(crate) struct ContactFormState {
    pub(crate) draft: ContactDraft,
    pub(crate) status: SubmissionStatus,
    pub(crate) focused: ContactField,
    pub(crate) reset_deadline: Option<Instant>,
}

impl Default for ContactFormState {
    fn default() -> Self {
        Self {
            draft: ContactDraft::default(),
            status: SubmissionStatus::Idle,
            focused: ContactField::Name,
            reset_deadline: None,
        }
    }
}

impl ContactFormState {
    pub(crate) fn focused_value_mut(&mut self) -> &mut String {
        match self.focused {
            ContactField::Name => &mut self.draft.name,
            ContactField::Email => &mut self.draft.email,
            ContactField::Message => &mut self.draft.message,
        }
    }

    /// (label, value, focused) rows in display order.
    pub(crate) fn entries(&self) -> [(&'static str, &str, bool); 3] {
        [
            (
                ContactField::Name.label(),
                self.draft.name.as_str(),
                self.focused == ContactField::Name,
            ),
            (
                ContactField::Email.label(),
                self.draft.email.as_str(),
                self.focused == ContactField::Email,
            ),
            (
                ContactField::Message.label(),
                self.draft.message.as_str(),
                self.focused == ContactField::Message,
            ),
        ]
    }
}

/// Index into the fixed gallery sequence. Wraps in both directions; the
/// index is always in `[0, len)` while the gallery is non-empty.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CarouselState {
    index: usize,
    len: usize,
}

impl CarouselState {
    pub(crate) fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub(crate) fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub(crate) fn previous(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    pub(crate) fn go_to(&mut self, target: usize) {
        if target < self.len {
            self.index = target;
        }
    }
}

#[derive(Debug)]
pub(crate) enum ChatEvent {
    Replied { text: String },
}

#[derive(Debug)]
pub(crate) enum ContactEvent {
    Completed { error: Option<String> },
}

pub struct ShellState {
    pub(crate) portfolio: Portfolio,
    pub(crate) assets: AssetCatalog,
    base_status: String,
    pub(crate) status_warning: Option<String>,
    view: View,
    nav_overlay: Option<usize>,
    active_preview_url: Option<String>,
    pub(crate) selected_project: usize,
    pub(crate) carousel: CarouselState,
    pub(crate) resume_scroll: u16,
    pub(crate) selected_skill: Option<(usize, usize)>,
    pub(crate) transcript: Transcript,
    pub(crate) chat_input: String,
    chat_loading: bool,
    pub(crate) chat_follow: bool,
    pub(crate) chat_scroll: usize,
    pub(crate) contact: ContactFormState,
    chat_bridge: Option<Arc<ChatBridge>>,
    contact_relay: Option<Arc<dyn ContactRelay>>,
    chat_sender: Option<mpsc::Sender<ChatEvent>>,
    chat_receiver: Option<mpsc::Receiver<ChatEvent>>,
    contact_sender: Option<mpsc::Sender<ContactEvent>>,
    contact_receiver: Option<mpsc::Receiver<ContactEvent>>,
    status_reset: Duration,
    pub(crate) transcript_line_limit: usize,
}

impl ShellState {
    #[cfg(test)]
    pub(crate) fn new(status: String, portfolio: Portfolio, assets: AssetCatalog) -> Self {
        Self::new_with_integrations(
            status,
            portfolio,
            assets,
            None,
            None,
            DEFAULT_STATUS_RESET,
            DEFAULT_TRANSCRIPT_LINE_LIMIT,
        )
    }

    pub fn new_with_integrations(
        status: String,
        portfolio: Portfolio,
        assets: AssetCatalog,
        chat_bridge: Option<Arc<ChatBridge>>,
        contact_relay: Option<Arc<dyn ContactRelay>>,
        status_reset: Duration,
        transcript_line_limit: usize,
    ) -> Self {
        let (chat_sender, chat_receiver) = if chat_bridge.is_some() {
            let (sender, receiver) = mpsc::channel(CHAT_EVENT_CHANNEL_CAPACITY);
            (Some(sender), Some(receiver))
        } else {
            (None, None)
        };
        let (contact_sender, contact_receiver) = if contact_relay.is_some() {
            let (sender, receiver) = mpsc::channel(CONTACT_EVENT_CHANNEL_CAPACITY);
            (Some(sender), Some(receiver))
        } else {
            (None, None)
        };

        let transcript = Transcript::seeded(portfolio.assistant.greeting.clone());
        let carousel = CarouselState::new(assets.gallery.len());

        Self {
            portfolio,
            assets,
            base_status: status,
            status_warning: None,
            view: View::Home,
            nav_overlay: None,
            active_preview_url: None,
            selected_project: 0,
            carousel,
            resume_scroll: 0,
            selected_skill: None,
            transcript,
            chat_input: String::new(),
            chat_loading: false,
            chat_follow: true,
            chat_scroll: 0,
            contact: ContactFormState::default(),
            chat_bridge,
            contact_relay,
            chat_sender,
            chat_receiver,
            contact_sender,
            contact_receiver,
            status_reset,
            transcript_line_limit,
        }
    }

    pub fn current_view(&self) -> View {
        self.view
    }

    /// Unconditionally overwrites the active view. Closes the menu overlay
    /// when invoked from it, and disarms the contact form's idle-reset when
    /// the Contact view is torn down.
    pub fn navigate(&mut self, target: View) {
        if self.view == View::Contact && target != View::Contact {
            self.disarm_contact_reset();
        }
        self.view = target;
        self.nav_overlay = None;
    }

    fn disarm_contact_reset(&mut self) {
        self.contact.reset_deadline = None;
        if matches!(
            self.contact.status,
            SubmissionStatus::Success | SubmissionStatus::Error
        ) {
            self.contact.status = SubmissionStatus::Idle;
        }
    }

    pub(crate) fn open_nav_overlay(&mut self) {
        self.nav_overlay = Some(self.view.position());
    }

    pub(crate) fn close_nav_overlay(&mut self) {
        self.nav_overlay = None;
    }

    pub(crate) fn nav_overlay_is_open(&self) -> bool {
        self.nav_overlay.is_some()
    }

    pub(crate) fn nav_overlay_index(&self) -> Option<usize> {
        self.nav_overlay
    }

    pub(crate) fn nav_overlay_move(&mut self, delta: isize) {
        if let Some(index) = self.nav_overlay {
            let len = View::ALL.len() as isize;
            let next = (index as isize + delta).rem_euclid(len);
            self.nav_overlay = Some(next as usize);
        }
    }

    pub(crate) fn nav_overlay_confirm(&mut self) {
        if let Some(index) = self.nav_overlay {
            self.navigate(View::ALL[index]);
        }
    }

    pub fn active_preview(&self) -> Option<&str> {
        self.active_preview_url.as_deref()
    }

    /// The preview surface renders only while the Projects view is active;
    /// a stale URL stays dormant until Projects is revisited.
    pub(crate) fn preview_overlay_visible(&self) -> bool {
        self.view == View::Projects && self.active_preview_url.is_some()
    }

    /// Title activation: projects without a live link are a no-op.
    pub fn activate_selected_project(&mut self) {
        if let Some(url) = self
            .portfolio
            .projects
            .get(self.selected_project)
            .and_then(|project| project.live_preview_url())
        {
            self.active_preview_url = Some(url);
        }
    }

    pub fn dismiss_preview(&mut self) {
        self.active_preview_url = None;
    }

    pub(crate) fn select_next_project(&mut self) {
        let count = self.portfolio.projects.len();
        if count > 0 && self.selected_project + 1 < count {
            self.selected_project += 1;
        }
    }

    pub(crate) fn select_previous_project(&mut self) {
        self.selected_project = self.selected_project.saturating_sub(1);
    }

    /// Moves the single highlighted skill key; at most one key is
    /// highlighted at a time, and moving replaces it atomically.
    pub(crate) fn move_skill_selection(&mut self, row_delta: isize, col_delta: isize) {
        let rows = &self.portfolio.skill_rows;
        if rows.is_empty() {
            return;
        }

        let (row, col) = match self.selected_skill {
            Some(selected) => selected,
            None => {
                self.selected_skill = Some((0, 0));
                return;
            }
        };

        let row_count = rows.len() as isize;
        let next_row = (row as isize + row_delta).rem_euclid(row_count) as usize;
        let row_len = rows[next_row].len();
        if row_len == 0 {
            return;
        }

        let next_col = if row_delta != 0 {
            col.min(row_len - 1)
        } else {
            ((col as isize + col_delta).rem_euclid(row_len as isize)) as usize
        };

        self.selected_skill = Some((next_row, next_col));
    }

    pub(crate) fn clear_skill_selection(&mut self) {
        self.selected_skill = None;
    }

    pub(crate) fn is_chat_loading(&self) -> bool {
        self.chat_loading
    }

    pub(crate) fn scroll_chat(&mut self, delta: isize) {
        self.chat_follow = false;
        if delta < 0 {
            self.chat_scroll = self.chat_scroll.saturating_sub(delta.unsigned_abs());
        } else {
            self.chat_scroll = self.chat_scroll.saturating_add(delta as usize);
        }
    }

    /// Appends the user message synchronously, then asks the bridge in the
    /// background. Rejected while a previous turn is still in flight.
    pub fn send_chat_message(&mut self) {
        if self.chat_loading {
            return;
        }
        let text = self.chat_input.trim().to_owned();
        if text.is_empty() {
            return;
        }
        let Some(bridge) = self.chat_bridge.clone() else {
            self.status_warning = Some("chat is unavailable: no assistant is configured".to_owned());
            return;
        };
        let Some(sender) = self.chat_sender.clone() else {
            return;
        };

        match TokioHandle::try_current() {
            Ok(handle) => {
                self.transcript.push_user(text.clone());
                self.chat_input.clear();
                self.chat_loading = true;
                self.chat_follow = true;
                handle.spawn(async move {
                    run_chat_ask_task(bridge, text, sender).await;
                });
            }
            Err(_) => {
                self.status_warning =
                    Some("chat is unavailable: tokio runtime is not active".to_owned());
            }
        }
    }

    pub fn tick_chat_and_report(&mut self) -> bool {
        let Some(receiver) = self.chat_receiver.as_mut() else {
            return false;
        };

        let mut changed = false;
        loop {
            match receiver.try_recv() {
                Ok(ChatEvent::Replied { text }) => {
                    self.transcript.push_model(text);
                    self.chat_loading = false;
                    self.chat_follow = true;
                    changed = true;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        changed
    }

    /// Issues the outbound delivery for a complete draft. At most one
    /// submission is in flight at a time; a resubmission while Submitting
    /// is rejected without a second outbound call.
    pub fn submit_contact(&mut self) {
        if self.contact.status == SubmissionStatus::Submitting {
            return;
        }
        if !self.contact.draft.is_complete() {
            self.status_warning =
                Some("fill in name, email, and message before sending".to_owned());
            return;
        }
        let Some(relay) = self.contact_relay.clone() else {
            self.status_warning =
                Some("contact form is unavailable: no relay is configured".to_owned());
            return;
        };
        let Some(sender) = self.contact_sender.clone() else {
            return;
        };

        match TokioHandle::try_current() {
            Ok(handle) => {
                self.contact.status = SubmissionStatus::Submitting;
                self.contact.reset_deadline = None;
                self.status_warning = None;
                let draft = self.contact.draft.clone();
                handle.spawn(async move {
                    run_contact_submit_task(relay, draft, sender).await;
                });
            }
            Err(_) => {
                self.status_warning =
                    Some("contact submission unavailable: tokio runtime is not active".to_owned());
            }
        }
    }

    pub fn tick_contact_and_report(&mut self) -> bool {
        let mut changed = false;

        // Expire a previously armed idle-reset before draining new events,
        // so a terminal status stays observable for at least one frame.
        if let Some(deadline) = self.contact.reset_deadline {
            if Instant::now() >= deadline {
                self.contact.reset_deadline = None;
                if matches!(
                    self.contact.status,
                    SubmissionStatus::Success | SubmissionStatus::Error
                ) {
                    self.contact.status = SubmissionStatus::Idle;
                }
                changed = true;
            }
        }

        if let Some(receiver) = self.contact_receiver.as_mut() {
            loop {
                match receiver.try_recv() {
                    Ok(ContactEvent::Completed { error: None }) => {
                        self.contact.status = SubmissionStatus::Success;
                        self.contact.draft.clear();
                        self.contact.reset_deadline = Some(Instant::now() + self.status_reset);
                        changed = true;
                    }
                    Ok(ContactEvent::Completed {
                        error: Some(message),
                    }) => {
                        tracing::warn!(error = %message, "contact submission failed");
                        self.contact.status = SubmissionStatus::Error;
                        self.contact.reset_deadline = Some(Instant::now() + self.status_reset);
                        changed = true;
                    }
                    Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
                }
            }
        }

        changed
    }

    pub fn has_active_animated_indicator(&self) -> bool {
        self.chat_loading || self.contact.status == SubmissionStatus::Submitting
    }

    pub fn status_text(&self) -> String {
        self.status_warning
            .clone()
            .unwrap_or_else(|| self.base_status.clone())
    }
}

async fn run_chat_ask_task(
    bridge: Arc<ChatBridge>,
    text: String,
    sender: mpsc::Sender<ChatEvent>,
) {
    let reply = bridge.ask(text.as_str()).await;
    let _ = sender.send(ChatEvent::Replied { text: reply }).await;
}

async fn run_contact_submit_task(
    relay: Arc<dyn ContactRelay>,
    draft: ContactDraft,
    sender: mpsc::Sender<ContactEvent>,
) {
    match relay.deliver(&draft).await {
        Ok(()) => {
            let _ = sender.send(ContactEvent::Completed { error: None }).await;
        }
        Err(error) => {
            let _ = sender
                .send(ContactEvent::Completed {
                    error: Some(error.to_string()),
                })
                .await;
        }
    }
}
