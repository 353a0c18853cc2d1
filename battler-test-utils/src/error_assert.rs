use anyhow::Result;

/// [`assert`]s that the result is an error with the given message, including its context chain.
#[track_caller]
pub fn assert_error_message<T>(result: Result<T>, message: &str) {
    match result {
        Ok(_) => panic!("expected error \"{message}\", got Ok"),
        Err(err) => pretty_assertions::assert_eq!(format!("{err:#}"), message),
    }
}

/// [`assert`]s that the result is an error whose message contains the given message.
#[track_caller]
pub fn assert_error_message_contains<T>(result: Result<T>, message: &str) {
    assert!(result.is_err_and(|err| format!("{err:#}").contains(message)))
}
