//! One-shot messages carried to the next rendered page.
//!
//! Messages are queued in the client's cookie session and removed the first
//! time a page drains them.

use crate::error::SurveyError;
use actix_session::Session;

const FLASH_SESSION_KEY: &str = "flash_messages";

/// Queue a message for the next rendered page.
pub fn push_flash(session: &Session, message: impl Into<String>) -> Result<(), SurveyError> {
    let mut queue = pending(session);
    queue.push(message.into());
    session
        .insert(FLASH_SESSION_KEY, queue)
        .map_err(|e| SurveyError::Internal(format!("couldn't store flash message: {}", e)))
}

/// Remove and return every pending message, oldest first.
pub fn take_flashes(session: &Session) -> Vec<String> {
    match session.remove_as::<Vec<String>>(FLASH_SESSION_KEY) {
        Some(Ok(messages)) => messages,
        Some(Err(raw)) => {
            log::warn!("Discarding unreadable flash queue: {}", raw);
            Vec::new()
        }
        None => Vec::new(),
    }
}

fn pending(session: &Session) -> Vec<String> {
    session
        .get::<Vec<String>>(FLASH_SESSION_KEY)
        .ok()
        .flatten()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_session::SessionExt;
    use actix_web::test::TestRequest;

    #[test]
    fn test_messages_are_drained_once() {
        let req = TestRequest::default().to_srv_request();
        let session = req.get_session();

        push_flash(&session, "uno").unwrap();
        push_flash(&session, "dos").unwrap();

        assert_eq!(take_flashes(&session), vec!["uno", "dos"]);
        assert!(take_flashes(&session).is_empty());
    }

    #[test]
    fn test_empty_session_has_no_messages() {
        let req = TestRequest::default().to_srv_request();
        assert!(take_flashes(&req.get_session()).is_empty());
    }
}
