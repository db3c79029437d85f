use hello_service::telemetry::{get_subscriber, init_subscriber};
use once_cell::sync::Lazy;
use std::net::TcpListener;

// Ensure that the `tracing` stack is only initialized once.
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    // We only print logs to the console if the `TEST_LOG` environment variable is set. The sink is
    // part of the type returned by `get_subscriber`, so each branch builds and installs its own.
    if std::env::var("TEST_LOG").is_ok() {
        // To see prettified test logs, install bunyan with `cargo install bunyan` then run tests
        // with `TEST_LOG=true cargo test | bunyan`
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber).expect("Failed to initialize tracing");
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber).expect("Failed to initialize tracing");
    }
});

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(&format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn head(&self, path: &str) -> reqwest::Response {
        self.client
            .head(&format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post(&self, path: &str) -> reqwest::Response {
        self.client
            .post(&format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

// Launch our application in the background.
// We are running tests, so it is not worth it to propagate errors: if we fail to perform the
// required setup we can just panic and crash all the things.
pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");

    // We retrieve the port assigned to us by the OS.
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{port}");

    let server = hello_service::startup::run(listener).expect("Failed to bind address");
    let _ = tokio::spawn(server);

    TestApp { address, client: reqwest::Client::new() }
}
