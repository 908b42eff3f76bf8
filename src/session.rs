use crate::store::auth::AuthUser;

/// Which subtree the application renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Gate {
    /// Auth state not yet known; render the placeholder.
    Loading,
    /// No signed-in user; render the sign-in/sign-up card.
    SignedOut,
    /// A user is signed in; render the tabbed layout.
    SignedIn,
}

/// The application's authentication state, fed by the auth change stream.
///
/// Starts loading; the first notification (which the auth service emits
/// immediately on subscription) clears the flag for the process lifetime.
/// The user id is derived from the user, so one is present exactly when
/// the other is.
pub(crate) struct Session {
    user: Option<AuthUser>,
    loading: bool,
}

impl Session {
    pub(crate) fn new() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }

    /// Apply an auth change notification.
    pub(crate) fn apply(&mut self, user: Option<AuthUser>) {
        self.user = user;
        self.loading = false;
    }

    pub(crate) fn user(&self) -> Option<&AuthUser> {
        self.user.as_ref()
    }

    pub(crate) fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.uid.as_str())
    }

    pub(crate) fn gate(&self) -> Gate {
        if self.loading {
            Gate::Loading
        } else if self.user.is_none() {
            Gate::SignedOut
        } else {
            Gate::SignedIn
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(uid: &str) -> AuthUser {
        AuthUser {
            uid: uid.to_string(),
            email: format!("{uid}@example.com"),
        }
    }

    #[test]
    fn starts_loading() {
        let session = Session::new();
        assert_eq!(session.gate(), Gate::Loading);
        assert!(session.user_id().is_none());
    }

    #[test]
    fn first_notification_clears_loading() {
        let mut session = Session::new();
        session.apply(None);
        assert_eq!(session.gate(), Gate::SignedOut);

        session.apply(Some(user("u1")));
        assert_eq!(session.gate(), Gate::SignedIn);
    }

    #[test]
    fn sign_out_returns_to_signed_out_not_loading() {
        let mut session = Session::new();
        session.apply(Some(user("u1")));
        session.apply(None);
        assert_eq!(session.gate(), Gate::SignedOut);
    }

    #[test]
    fn user_id_present_iff_user_present() {
        let mut session = Session::new();
        assert_eq!(session.user().is_some(), session.user_id().is_some());

        session.apply(Some(user("u1")));
        assert_eq!(session.user_id(), Some("u1"));
        assert_eq!(session.user().is_some(), session.user_id().is_some());

        session.apply(None);
        assert_eq!(session.user().is_some(), session.user_id().is_some());
    }
}
