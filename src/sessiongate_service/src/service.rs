use axum::{
    Router,
    http::{HeaderValue, Method, request},
    routing::{get, post},
};
use sessiongate_adapters::config::{AllowedOrigins, SessionGateSettings};
use sessiongate_application::{SessionAuthenticator, SessionLoginUseCase, SessionStatusUseCase};
use sessiongate_axum::{
    LoginState, SessionStatusState,
    routes::{login, session_status},
};
use sessiongate_core::{CredentialVerifier, SessionStore};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::request_tracing::{make_span_with_request_id, on_request, on_response};

/// Session login service exposing `POST /login` and `GET /session`
pub struct SessionGateService {
    router: Router,
}

impl SessionGateService {
    /// Create a new SessionGateService
    ///
    /// # Arguments
    /// * `session_store` - Store holding session state (must be Clone)
    /// * `verifier` - Credential verifier consulted on login
    /// * `settings` - Session cookie and verifier timeout settings
    ///
    /// # Note on Architecture
    /// Stores implement Clone via internal Arc<RwLock> for thread-safe sharing.
    /// Each route is given only the state it needs.
    pub fn new<S, V>(session_store: S, verifier: V, settings: &SessionGateSettings) -> Self
    where
        S: SessionStore + Clone + 'static,
        V: CredentialVerifier + 'static,
    {
        let authenticator =
            SessionAuthenticator::new(verifier).with_timeout(settings.verifier.timeout());

        let login_state = LoginState::new(
            SessionLoginUseCase::new(session_store.clone(), authenticator),
            settings.session.clone(),
        );
        let status_state = SessionStatusState::new(
            SessionStatusUseCase::new(session_store),
            settings.session.clone(),
        );

        let router = Router::new()
            // Login needs the session store and the verifier
            .route("/login", post(login::<S, V>))
            .with_state(login_state)
            // Session status only reads the session store
            .route("/session", get(session_status::<S>))
            .with_state(status_state);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the service into a router that can be mounted on another router
    ///
    /// # Arguments
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins.filter(|origins| !origins.is_empty()) {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run the service as a standalone server
    ///
    /// # Arguments
    /// * `listener` - TCP listener to bind the server to
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("Session gate listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
