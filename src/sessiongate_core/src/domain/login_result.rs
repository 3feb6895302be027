/// Outcome of a single login attempt against a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginResult {
    /// The session was already valid; nothing was verified.
    AlreadyAuthenticated,
    /// Credentials were accepted and the session is now valid.
    Authenticated,
    /// Credentials were submitted but did not lead to a valid session.
    Rejected(RejectionReason),
    /// No prior session and no credentials submitted.
    NoOp,
}

impl LoginResult {
    /// Name used for this result in response payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            LoginResult::AlreadyAuthenticated => "already_authenticated",
            LoginResult::Authenticated => "authenticated",
            LoginResult::Rejected(_) => "rejected",
            LoginResult::NoOp => "no_op",
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(
            self,
            LoginResult::AlreadyAuthenticated | LoginResult::Authenticated
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    /// The verifier looked at the credentials and said no.
    VerificationFailed,
    /// The verifier could not give an answer (transport error or timeout).
    VerifierUnavailable,
}

impl RejectionReason {
    /// Human-readable failure message shown to the end user.
    pub fn message(&self) -> &'static str {
        match self {
            RejectionReason::VerificationFailed => "Login failure!",
            RejectionReason::VerifierUnavailable => "Authentication service unavailable",
        }
    }
}
