//! Static files: politician photos and the stylesheet.

pub(super) fn configure(conf: &mut actix_web::web::ServiceConfig) {
    let static_dir = crate::app_config::server().static_dir;
    conf.service(actix_files::Files::new("/static", static_dir));
}
