//! Single-value state container for the user manager.
//!
//! State only changes through [`State::apply`], which consumes the current value
//! and returns the next one. The phase is a sum type, so "loading" and "error"
//! cannot be set at the same time.
//!
//! Fetches are fenced by sequence number: a load result is applied only if its
//! sequence number is the latest one issued with [`Transition::StartLoad`].
//! Older results are dropped.

use super::{
    errors::UiError,
    types::{DraftField, User, UserDraft},
};
use tracing::debug;

/// Monotonic fetch sequence number.
pub type Seq = u64;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// A fetch is in flight.
    Loading,
    /// The last fetch or create attempt failed.
    Failed(UiError),
    Ready,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    StartLoad(Seq),
    LoadSucceeded(Seq, Vec<User>),
    LoadFailed(Seq),
    StartSubmit,
    SubmitSucceeded,
    SubmitFailed,
    EditDraft(DraftField, String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State {
    users: Vec<User>,
    phase: Phase,
    draft: UserDraft,
    latest_seq: Seq,
    submitting: bool,
}

/// What should be shown, derived from [`State`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewState<'a> {
    Loading,
    Error(UiError),
    Ready {
        users: &'a [User],
        draft: &'a UserDraft,
    },
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    /// The initial state is `Loading`: the manager fetches as soon as it mounts.
    #[must_use]
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            phase: Phase::Loading,
            draft: UserDraft::default(),
            latest_seq: 0,
            submitting: false,
        }
    }

    #[must_use]
    pub fn apply(mut self, transition: Transition) -> Self {
        match transition {
            Transition::StartLoad(seq) => {
                self.latest_seq = self.latest_seq.max(seq);
                self.phase = Phase::Loading;
            }
            Transition::LoadSucceeded(seq, users) => {
                if self.is_current(seq) {
                    self.users = users;
                    self.phase = Phase::Ready;
                }
            }
            Transition::LoadFailed(seq) => {
                if self.is_current(seq) {
                    self.phase = Phase::Failed(UiError::FetchFailed);
                }
            }
            Transition::StartSubmit => self.submitting = true,
            Transition::SubmitSucceeded => {
                if self.is_submit_pending() {
                    self.submitting = false;
                    self.draft = UserDraft::default();
                }
            }
            Transition::SubmitFailed => {
                if self.is_submit_pending() {
                    self.submitting = false;
                    // An in-flight fetch decides the view once it completes.
                    if self.phase != Phase::Loading {
                        self.phase = Phase::Failed(UiError::CreateFailed);
                    }
                }
            }
            Transition::EditDraft(field, value) => {
                self.draft = self.draft.with_field(field, value);
            }
        }
        self
    }

    fn is_current(&self, seq: Seq) -> bool {
        if seq == self.latest_seq {
            true
        } else {
            debug!(
                "discarding stale load result: seq {} (latest {})",
                seq, self.latest_seq
            );
            false
        }
    }

    fn is_submit_pending(&self) -> bool {
        if !self.submitting {
            debug!("discarding submit result: no submit in flight");
        }
        self.submitting
    }

    #[must_use]
    pub fn view(&self) -> ViewState<'_> {
        match self.phase {
            Phase::Loading => ViewState::Loading,
            Phase::Failed(error) => ViewState::Error(error),
            Phase::Ready => ViewState::Ready {
                users: &self.users,
                draft: &self.draft,
            },
        }
    }

    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub fn draft(&self) -> &UserDraft {
        &self.draft
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    #[must_use]
    pub fn error(&self) -> Option<UiError> {
        match self.phase {
            Phase::Failed(error) => Some(error),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    #[must_use]
    pub fn latest_seq(&self) -> Seq {
        self.latest_seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::userdeck::types::UserId;

    fn user(id: i64, name: &str) -> User {
        User {
            id: UserId::new(id),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
        }
    }

    fn loaded(users: Vec<User>) -> State {
        State::new()
            .apply(Transition::StartLoad(1))
            .apply(Transition::LoadSucceeded(1, users))
    }

    #[test]
    fn starts_loading() {
        let state = State::new();
        assert!(state.is_loading());
        assert_eq!(state.view(), ViewState::Loading);
        assert!(state.users().is_empty());
        assert!(state.draft().is_empty());
    }

    #[test]
    fn load_success_replaces_list_and_becomes_ready() {
        let state = loaded(vec![user(1, "Ada")]);
        let state = state
            .apply(Transition::StartLoad(2))
            .apply(Transition::LoadSucceeded(2, vec![user(2, "Grace")]));

        assert_eq!(state.phase(), &Phase::Ready);
        assert_eq!(state.users(), &[user(2, "Grace")]);
    }

    #[test]
    fn load_failure_keeps_previous_list() {
        let state = loaded(vec![user(1, "Ada")])
            .apply(Transition::StartLoad(2))
            .apply(Transition::LoadFailed(2));

        assert_eq!(state.view(), ViewState::Error(UiError::FetchFailed));
        assert_eq!(state.users(), &[user(1, "Ada")]);
        assert!(!state.is_loading());
    }

    #[test]
    fn successful_load_clears_error() {
        let state = State::new()
            .apply(Transition::StartLoad(1))
            .apply(Transition::LoadFailed(1))
            .apply(Transition::StartLoad(2))
            .apply(Transition::LoadSucceeded(2, vec![]));

        assert_eq!(state.error(), None);
        assert_eq!(state.phase(), &Phase::Ready);
    }

    #[test]
    fn loading_never_shows_error() {
        let state = State::new()
            .apply(Transition::StartLoad(1))
            .apply(Transition::LoadFailed(1))
            .apply(Transition::StartLoad(2));

        assert!(state.is_loading());
        assert_eq!(state.error(), None);
        assert_eq!(state.view(), ViewState::Loading);
    }

    #[test]
    fn stale_load_results_are_discarded() {
        let state = State::new()
            .apply(Transition::StartLoad(1))
            .apply(Transition::StartLoad(2))
            .apply(Transition::LoadSucceeded(2, vec![user(2, "Grace")]))
            .apply(Transition::LoadSucceeded(1, vec![user(1, "Ada")]));

        assert_eq!(state.users(), &[user(2, "Grace")]);
        assert_eq!(state.latest_seq(), 2);

        let state = state.apply(Transition::LoadFailed(1));
        assert_eq!(state.phase(), &Phase::Ready);
    }

    #[test]
    fn stale_result_does_not_end_loading() {
        let state = State::new()
            .apply(Transition::StartLoad(1))
            .apply(Transition::StartLoad(2))
            .apply(Transition::LoadSucceeded(1, vec![user(1, "Ada")]));

        assert!(state.is_loading());
        assert!(state.users().is_empty());
    }

    #[test]
    fn edit_draft_touches_one_field() {
        let state = loaded(vec![])
            .apply(Transition::EditDraft(DraftField::Name, "Ada".to_string()))
            .apply(Transition::EditDraft(
                DraftField::Email,
                "ada@example.com".to_string(),
            ))
            .apply(Transition::EditDraft(DraftField::Name, "Ada L.".to_string()));

        assert_eq!(state.draft(), &UserDraft::new("Ada L.", "ada@example.com"));
    }

    #[test]
    fn submit_success_resets_draft() {
        let state = loaded(vec![])
            .apply(Transition::EditDraft(DraftField::Name, "Ada".to_string()))
            .apply(Transition::StartSubmit);
        assert!(state.is_submitting());

        let state = state.apply(Transition::SubmitSucceeded);
        assert!(!state.is_submitting());
        assert!(state.draft().is_empty());
    }

    #[test]
    fn submit_failure_keeps_draft_and_shows_error() {
        let state = loaded(vec![user(1, "Ada")])
            .apply(Transition::EditDraft(DraftField::Name, "Grace".to_string()))
            .apply(Transition::StartSubmit)
            .apply(Transition::SubmitFailed);

        assert_eq!(state.view(), ViewState::Error(UiError::CreateFailed));
        assert_eq!(state.draft().name, "Grace");
        assert_eq!(state.users(), &[user(1, "Ada")]);
    }

    #[test]
    fn submit_result_without_start_is_ignored() {
        let draft = UserDraft::new("Ada", "ada@example.com");
        let state = loaded(vec![])
            .apply(Transition::EditDraft(DraftField::Name, draft.name.clone()))
            .apply(Transition::EditDraft(DraftField::Email, draft.email.clone()));

        let state = state.apply(Transition::SubmitSucceeded);
        assert_eq!(state.draft(), &draft);

        let state = state.apply(Transition::SubmitFailed);
        assert_eq!(state.error(), None);
        assert_eq!(state.draft(), &draft);
    }

    #[test]
    fn submit_failure_during_fetch_defers_to_fetch() {
        let state = loaded(vec![])
            .apply(Transition::StartLoad(2))
            .apply(Transition::StartSubmit)
            .apply(Transition::SubmitFailed);
        assert!(state.is_loading());

        let state = state.apply(Transition::LoadSucceeded(2, vec![user(3, "Linus")]));
        assert_eq!(state.error(), None);
        assert_eq!(state.users().len(), 1);
    }

    #[test]
    fn ready_view_exposes_list_and_draft() {
        let state = loaded(vec![user(1, "Ada"), user(2, "Grace")])
            .apply(Transition::EditDraft(DraftField::Email, "x@y.z".to_string()));

        match state.view() {
            ViewState::Ready { users, draft } => {
                assert_eq!(users.len(), 2);
                assert_eq!(draft.email, "x@y.z");
            }
            other => panic!("expected ready view, got {other:?}"),
        }
    }
}
