use std::net::TcpListener;
use std::time::Duration;

use reqwest::{redirect, Client, Method, Response};

use serde::Serialize;

use sqlx::PgPool;

use url::Url;

use wiremock::MockServer;

use pmc_site::app;
use pmc_site::client::{EmailAuthorizationToken, EmailClient};
use pmc_site::dispatch::{Dispatcher, EmailNotifier};
use pmc_site::domain::EmailAddress;

/// Form fixture with optional fields so missing-field cases are easy to
/// express
#[derive(Debug, Serialize)]
pub struct ContactFormBody {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

impl ContactFormBody {
    pub fn valid() -> Self {
        Self {
            name: Some("Jane".into()),
            email: Some("j@x.com".into()),
            subject: Some("Hi".into()),
            message: Some("Hello".into()),
        }
    }
}

pub struct TestApp {
    addr: String,

    pub client: Client,
    pub email_server: MockServer,
}

impl TestApp {
    pub async fn spawn(pool: Option<PgPool>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to listen on random port");
        let port = listener.local_addr().unwrap().port();

        let addr = format!("http://127.0.0.1:{}", port);

        let email_server = MockServer::start().await;

        let notifier = {
            let sender: EmailAddress = "site@test.com"
                .parse()
                .expect("Failed to parse sender email address");
            let recipient: EmailAddress = "notify@test.com"
                .parse()
                .expect("Failed to parse recipient email address");
            let api_base_url =
                Url::parse(&email_server.uri()).expect("Failed to parse mock server uri");
            let api_auth_token: EmailAuthorizationToken = "TestAuthorization"
                .parse()
                .expect("Failed to parse auth token");
            let api_timeout = Duration::from_secs(2);

            let client = EmailClient::new(sender, api_timeout, api_base_url, api_auth_token)
                .expect("Failed to create email client");

            EmailNotifier::new(client, recipient)
        };

        let dispatcher = Dispatcher::new(pool, Some(notifier));

        let server =
            app::run(listener, dispatcher, "public".into()).expect("Failed to spawn app instance");
        let _ = tokio::spawn(server);

        // Redirect responses are asserted on directly
        let client = Client::builder()
            .redirect(redirect::Policy::none())
            .build()
            .expect("Failed to build test client");

        Self {
            addr,
            client,
            email_server,
        }
    }

    pub fn request(&self, method: Method, url: &str) -> reqwest::RequestBuilder {
        let url = format!("{}/{}", &self.addr, url);
        self.client.request(method, url)
    }

    pub async fn get(&self, path: &str) -> reqwest::Result<Response> {
        self.request(Method::GET, path.trim_start_matches('/'))
            .send()
            .await
    }

    pub async fn health_check(&self) -> reqwest::Result<Response> {
        self.request(Method::GET, "health_check").send().await
    }

    pub async fn contact_submit(&self, form: &ContactFormBody) -> reqwest::Result<Response> {
        self.request(Method::POST, "contact")
            .form(form)
            .send()
            .await
    }

    pub async fn api_contact_submit(&self, form: &ContactFormBody) -> reqwest::Result<Response> {
        self.request(Method::POST, "api/contact")
            .form(form)
            .send()
            .await
    }
}
