pub mod asset;
pub mod index;
pub mod politicians;
pub mod results;
pub mod survey;

/// Configures the web app by adding services from each web file.
///
/// @see https://docs.rs/actix-web/4.0.1/actix_web/struct.App.html#method.configure
pub fn configure(conf: &mut actix_web::web::ServiceConfig) {
    // Descending order. Order is important.
    // Route resolution will stop at the first match.
    index::configure(conf);
    survey::configure(conf);
    results::configure(conf);
    politicians::configure(conf);
    asset::configure(conf);
}
