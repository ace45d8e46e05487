use actix_session::{config::PersistentSession, storage::CookieSessionStore, SessionMiddleware};
use actix_web::cookie::{Key, SameSite};
use actix_web::http::header;
use actix_web::middleware::{DefaultHeaders, Logger};
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use anyhow::Context;
use civic_survey::app_config;
use civic_survey::db::{close_db, init_db};
use civic_survey::seed::ensure_seed_data;
use env_logger::Env;
use rand::{distributions::Alphanumeric, Rng};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    init_lib_mods();
    app_config::init();

    let config = app_config::get_config();

    let db = init_db(&config.database.url)
        .await
        .with_context(|| format!("Failed to open database {}", config.database.url))?;

    // A partially seeded catalog must never be served.
    ensure_seed_data(&db)
        .await
        .context("Failed to load the politician catalog")?;

    let session = app_config::session();
    let secret_key = session_key(&session.secret_key);
    let cookie_secure = session.cookie_secure;
    let app_db = db.clone();

    log::info!("Listening on {}", config.server.bind);

    HttpServer::new(move || {
        // Order of middleware IS IMPORTANT and is in REVERSE EXECUTION ORDER.
        App::new()
            .app_data(Data::new(app_db.clone()))
            .wrap(
                DefaultHeaders::new()
                    .add((header::X_FRAME_OPTIONS, "DENY"))
                    .add((header::X_CONTENT_TYPE_OPTIONS, "nosniff"))
                    .add(("X-XSS-Protection", "0"))
                    .add(("Referrer-Policy", "strict-origin-when-cross-origin"))
                    .add((
                        "Permissions-Policy",
                        "geolocation=(), microphone=(), camera=()",
                    )),
            )
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_same_site(SameSite::Lax)
                    .cookie_secure(cookie_secure)
                    .session_lifecycle(PersistentSession::default())
                    .build(),
            )
            .wrap(Logger::new("%a %r %s %T"))
            .configure(civic_survey::web::configure)
    })
    .bind(&config.server.bind)
    .with_context(|| format!("Failed to bind {}", config.server.bind))?
    .run()
    .await?;

    close_db(db).await.context("Failed to close database")?;
    Ok(())
}

/// Initialize third party crates we rely on but don't have control over.
fn init_lib_mods() {
    // A missing .env file is fine; configuration then comes from config.toml and the environment.
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
}

/// Session cookies are signed with the configured key. Without a usable key a
/// random one is generated, which logs everyone out on restart.
fn session_key(configured: &str) -> Key {
    match Key::try_from(configured.as_bytes()) {
        Ok(key) => key,
        Err(err) => {
            let random_string: String = rand::thread_rng()
                .sample_iter(&Alphanumeric)
                .take(128)
                .map(char::from)
                .collect();
            log::warn!(
                "No usable session secret ({:?}); survey sessions will not survive a restart. \
                 Set [session] secret_key in config.toml or SURVEY_SESSION__SECRET_KEY \
                 to at least 64 bytes.",
                err
            );
            Key::from(random_string.as_bytes())
        }
    }
}
