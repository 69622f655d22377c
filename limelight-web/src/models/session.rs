use limelight_shared::models::User;
use yewdux::Store;

/// Where the session is in its lifecycle.
///
/// `Unknown` exists only before the bootstrap check is issued; once a phase
/// settles, it changes again only through a fresh remote call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionPhase {
    /// Pre-bootstrap; nothing known yet.
    #[default]
    Unknown,
    /// The bootstrap "who am I" check is in flight.
    Loading,
    /// A user is signed in.
    Authenticated,
    /// No user is signed in.
    Anonymous,
}

/// The client's belief about which user, if any, is authenticated.
///
/// Views subscribe through yewdux and receive immutable snapshots; every
/// mutation goes through one of the transition constructors below, so the
/// invariant `user.is_some() == (phase == Authenticated)` holds everywhere.
#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct SessionState {
    /// Lifecycle phase.
    pub phase: SessionPhase,

    /// The signed-in user, present exactly in the `Authenticated` phase.
    pub user: Option<User>,

    /// Message from the most recent rejected sign-in attempt.
    pub error: Option<String>,
}

impl SessionState {
    /// The bootstrap check has been issued.
    pub fn begin_bootstrap() -> Self {
        Self {
            phase: SessionPhase::Loading,
            user: None,
            error: None,
        }
    }

    /// The bootstrap check settled. Never leaves the loading phase set.
    pub fn bootstrap_resolved(user: Option<User>) -> Self {
        match user {
            Some(user) => Self::signed_in(user),
            None => Self::signed_out(),
        }
    }

    /// A sign-in or registration succeeded.
    pub fn signed_in(user: User) -> Self {
        Self {
            phase: SessionPhase::Authenticated,
            user: Some(user),
            error: None,
        }
    }

    /// A sign-in or registration was rejected: record the message, keep the
    /// session at its prior value.
    pub fn rejected(&self, message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..self.clone()
        }
    }

    /// The session ended, whatever the logout call returned.
    pub fn signed_out() -> Self {
        Self {
            phase: SessionPhase::Anonymous,
            user: None,
            error: None,
        }
    }

    /// Whether the bootstrap check is still unresolved.
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, SessionPhase::Unknown | SessionPhase::Loading)
    }

    /// Whether a user is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.phase == SessionPhase::Authenticated
    }
}
