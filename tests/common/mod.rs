#![allow(dead_code)]
#![allow(unused_macros)]

pub mod database;
pub mod fixtures;

/// Build the full web app over `$db` with cookie sessions, as the binary does.
macro_rules! init_app {
    ($db:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($db))
                .wrap(actix_session::SessionMiddleware::new(
                    actix_session::storage::CookieSessionStore::default(),
                    actix_web::cookie::Key::generate(),
                ))
                .configure(civic_survey::web::configure),
        )
        .await
    };
}
