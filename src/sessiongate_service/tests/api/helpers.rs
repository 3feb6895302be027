use reqwest::{Client, Response};
use sessiongate_adapters::{
    config::{SessionGateSettings, test},
    persistence::HashMapSessionStore,
    verification::{HttpCredentialVerifier, StaticCredentialVerifier},
};
use sessiongate_core::CredentialVerifier;
use sessiongate_service::SessionGateService;
use tokio::net::TcpListener;

pub struct TestApp {
    pub address: String,
    pub http_client: Client,
}

impl TestApp {
    /// Spawn a service that knows a single account, alice/wonderland.
    pub async fn new() -> Self {
        Self::with_verifier(StaticCredentialVerifier::with_account("alice", "wonderland")).await
    }

    /// Spawn a service that asks the directory at `base_url`.
    pub async fn with_directory(base_url: String) -> Self {
        let http_client = Client::new();
        Self::with_verifier(HttpCredentialVerifier::new(base_url, None, http_client)).await
    }

    async fn with_verifier<V>(verifier: V) -> Self
    where
        V: CredentialVerifier + 'static,
    {
        let settings = SessionGateSettings::from_json(
            r#"{ "session": { "ttl_seconds": 60 }, "verifier": { "timeout_millis": 500 } }"#,
        )
        .expect("Failed to build test settings");

        let store = HashMapSessionStore::new().with_ttl(settings.session.ttl());
        let service = SessionGateService::new(store, verifier, &settings);

        let listener = TcpListener::bind(test::APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(service.run_standalone(listener, None));

        let http_client = Client::builder()
            .cookie_store(true)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            address,
            http_client,
        }
    }

    pub async fn post_login(&self, fields: &[(&str, &str)]) -> Response {
        self.http_client
            .post(format!("{}/login", self.address))
            .form(fields)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_session(&self) -> Response {
        self.http_client
            .get(format!("{}/session", self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }
}
