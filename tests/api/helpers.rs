use std::{net::TcpListener, sync::Mutex};

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpResponse, HttpServer, cookie::Key, web};
use jokes::{
    authentication::UserId,
    configuration::{DatabaseSettings, get_configuration},
    domain::{JokeRecord, NewJoke},
    routes::e500,
    session_state::TypedSession,
    startup::configure_routes,
    store::JokeStore,
    telemetry::{get_subscriber, init_subscriber},
};
use once_cell::sync::Lazy;
use sqlx::{Connection, Executor, PgConnection, PgPool};
use tracing_actix_web::TracingLogger;
use uuid::Uuid;

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

#[derive(Default)]
pub struct InMemoryJokeStore {
    jokes: Mutex<Vec<JokeRecord>>,
}

impl InMemoryJokeStore {
    pub fn jokes(&self) -> Vec<JokeRecord> {
        self.jokes.lock().unwrap().clone()
    }
}

impl JokeStore for InMemoryJokeStore {
    async fn insert_joke(&self, joke: &NewJoke, jokester_id: UserId) -> Result<Uuid, anyhow::Error> {
        let id = Uuid::new_v4();
        self.jokes.lock().unwrap().push(JokeRecord {
            id,
            jokester_id: *jokester_id,
            name: joke.name.as_ref().to_string(),
            content: joke.content.as_ref().to_string(),
        });
        Ok(id)
    }

    async fn find_joke(&self, joke_id: Uuid) -> Result<Option<JokeRecord>, anyhow::Error> {
        Ok(self
            .jokes
            .lock()
            .unwrap()
            .iter()
            .find(|joke| joke.id == joke_id)
            .cloned())
    }
}

/// Stands in for a database that refuses every write.
pub struct FailingJokeStore;

impl JokeStore for FailingJokeStore {
    async fn insert_joke(&self, _: &NewJoke, _: UserId) -> Result<Uuid, anyhow::Error> {
        Err(anyhow::anyhow!("connection refused"))
    }

    async fn find_joke(&self, _: Uuid) -> Result<Option<JokeRecord>, anyhow::Error> {
        Err(anyhow::anyhow!("connection refused"))
    }
}

/// Creates a fresh, migrated database for one test. Returns `None` when no
/// Postgres server is reachable with the local configuration.
pub async fn configure_database(config: &DatabaseSettings) -> Option<PgPool> {
    let mut connection = match PgConnection::connect_with(&config.without_db()).await {
        Ok(connection) => connection,
        Err(e) => {
            eprintln!("Skipping Postgres-backed test, cannot connect: {e}");
            return None;
        }
    };

    connection
        .execute(format!(r#"CREATE DATABASE "{}";"#, config.database_name).as_str())
        .await
        .expect("Failed to create database");

    let connection_pool = PgPool::connect_with(config.with_db())
        .await
        .expect("Failed to connect to Postgres");

    sqlx::migrate!("./migrations")
        .run(&connection_pool)
        .await
        .expect("Failed to migrate database");

    Some(connection_pool)
}

/// Same as [`spawn_app_with`], backed by a throwaway Postgres database.
pub async fn spawn_app_with_postgres() -> Option<TestApp<PgPool>> {
    let mut config = get_configuration().expect("Failed to read configuration");
    config.database.database_name = Uuid::new_v4().to_string();

    let connection_pool = configure_database(&config.database).await?;
    Some(spawn_app_with(connection_pool).await)
}

pub struct TestApp<S> {
    pub address: String,
    pub api_client: reqwest::Client,
    pub store: web::Data<S>,
    pub jokester_id: Uuid,
}

impl<S> TestApp<S> {
    pub async fn log_in(&self) {
        let resp = self
            .api_client
            .post(format!("{}/test/login/{}", &self.address, self.jokester_id))
            .send()
            .await
            .expect("Failed to execute request.");
        assert_eq!(resp.status().as_u16(), 200);
    }

    pub async fn get_new_joke_form(&self) -> reqwest::Response {
        self.api_client
            .get(format!("{}/jokes/new", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_new_joke(&self, body: &str) -> reqwest::Response {
        self.api_client
            .post(format!("{}/jokes/new", &self.address))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body.to_string())
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_new_joke_from_browser(&self, body: &str) -> reqwest::Response {
        self.api_client
            .post(format!("{}/jokes/new", &self.address))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .header("Accept", "text/html,application/xhtml+xml,*/*;q=0.8")
            .body(body.to_string())
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.api_client
            .get(format!("{}{}", &self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

async fn log_in_as(
    user_id: web::Path<Uuid>,
    session: TypedSession,
) -> Result<HttpResponse, actix_web::Error> {
    session
        .insert_user_id(user_id.into_inner())
        .map_err(e500)?;
    Ok(HttpResponse::Ok().finish())
}

pub async fn spawn_app() -> TestApp<InMemoryJokeStore> {
    spawn_app_with(InMemoryJokeStore::default()).await
}

/// Serves the real routes on a random port, with a cookie session store and
/// an extra `/test/login/{user_id}` route standing in for the login flow.
pub async fn spawn_app_with<S>(store: S) -> TestApp<S>
where
    S: JokeStore + Send + Sync + 'static,
{
    Lazy::force(&TRACING);

    let store = web::Data::new(store);
    let app_store = store.clone();
    let secret_key = Key::generate();

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port.");
    let port = listener.local_addr().unwrap().port();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false)
                    .build(),
            )
            .configure(configure_routes::<S>)
            .route("/test/login/{user_id}", web::post().to(log_in_as))
            .app_data(app_store.clone())
    })
    .workers(1)
    .listen(listener)
    .expect("Failed to bind address.")
    .run();

    let _ = tokio::spawn(server);

    let api_client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .cookie_store(true)
        .build()
        .unwrap();

    TestApp {
        address: format!("http://127.0.0.1:{port}"),
        api_client,
        store,
        jokester_id: Uuid::new_v4(),
    }
}

pub fn assert_is_redirect_to(response: &reqwest::Response, location: &str) {
    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(response.headers().get("Location").unwrap(), location);
}
