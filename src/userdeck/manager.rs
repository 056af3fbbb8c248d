//! The user manager: owns the [`State`] and runs the two network operations
//! against a [`UsersApi`].

use super::{
    client::UsersApi,
    errors::{ApiError, UiError},
    state::{Seq, State, Transition, ViewState},
    types::{DraftField, User, UserDraft},
};
use tracing::{debug, error, info, warn};

#[derive(Debug)]
pub struct UserManager<A> {
    api: A,
    state: State,
    next_seq: Seq,
}

impl<A: UsersApi> UserManager<A> {
    #[must_use]
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: State::new(),
            next_seq: 0,
        }
    }

    /// Creates the manager and runs the initial fetch.
    pub async fn mount(api: A) -> Self {
        let mut manager = Self::new(api);
        manager.load_users().await;
        manager
    }

    /// Fetches all users. On failure the previous list stays and the fetch
    /// error is shown. Loading always ends, whatever the outcome.
    pub async fn load_users(&mut self) {
        let seq = self.begin_load();
        let result = self.api.list_users().await;
        self.finish_load(seq, result);
    }

    /// Marks a fetch as started and returns its sequence number.
    pub fn begin_load(&mut self) -> Seq {
        self.next_seq += 1;
        let seq = self.next_seq;
        self.transition(Transition::StartLoad(seq));
        seq
    }

    /// Applies the outcome of the fetch started as `seq`. Results of fetches
    /// superseded by a later [`UserManager::begin_load`] are ignored.
    pub fn finish_load(&mut self, seq: Seq, result: Result<Vec<User>, ApiError>) {
        match result {
            Ok(users) => {
                debug!("fetched {} users (seq {})", users.len(), seq);
                self.transition(Transition::LoadSucceeded(seq, users));
            }
            Err(err) => {
                error!("Error fetching users: {}", err);
                self.transition(Transition::LoadFailed(seq));
            }
        }
    }

    /// Submits the current draft. On success the draft is cleared and the
    /// whole list is fetched again; on failure the draft is kept for a retry.
    /// Does nothing while another submit is in flight.
    ///
    /// Field constraints are checked by the form before this is called.
    pub async fn submit_user(&mut self) {
        let Some(draft) = self.begin_submit() else {
            return;
        };

        let result = self.api.create_user(&draft).await;
        if self.finish_submit(result) {
            self.load_users().await;
        }
    }

    /// Marks a submit as started and returns the draft to send, or `None`
    /// when a submit is already in flight.
    pub fn begin_submit(&mut self) -> Option<UserDraft> {
        if self.state.is_submitting() {
            warn!("submit already in progress");
            return None;
        }

        let draft = self.state.draft().clone();
        self.transition(Transition::StartSubmit);
        Some(draft)
    }

    /// Applies the outcome of the pending submit. Returns `true` when the
    /// list should be fetched again.
    pub fn finish_submit(&mut self, result: Result<(), ApiError>) -> bool {
        if !self.state.is_submitting() {
            debug!("no submit in flight, result ignored");
            return false;
        }

        match result {
            Ok(()) => {
                info!("user created");
                self.transition(Transition::SubmitSucceeded);
                true
            }
            Err(err) => {
                error!("Error creating user: {}", err);
                self.transition(Transition::SubmitFailed);
                false
            }
        }
    }

    pub fn edit(&mut self, field: DraftField, value: impl Into<String>) {
        self.transition(Transition::EditDraft(field, value.into()));
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.edit(DraftField::Name, value);
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.edit(DraftField::Email, value);
    }

    #[must_use]
    pub fn state(&self) -> &State {
        &self.state
    }

    #[must_use]
    pub fn view(&self) -> ViewState<'_> {
        self.state.view()
    }

    #[must_use]
    pub fn draft(&self) -> &UserDraft {
        self.state.draft()
    }

    #[must_use]
    pub fn error(&self) -> Option<UiError> {
        self.state.error()
    }

    fn transition(&mut self, transition: Transition) {
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(transition);
    }
}
