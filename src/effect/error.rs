//! Error types for the effect system.
//!
//! [`Task::attempt`](super::Task::attempt) converts a panic raised by its
//! executor into a [`TaskPanic`], which the caller's error type absorbs
//! through `From<TaskPanic>`.

use std::any::Any;

/// A panic captured while starting or polling a task.
///
/// # Examples
///
/// ```rust
/// use remonad::effect::TaskPanic;
///
/// let error = TaskPanic { message: "index out of bounds".to_string() };
/// assert_eq!(format!("{error}"), "task panicked: index out of bounds");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskPanic {
    /// The panic message, or `"Unknown panic"` when the payload was not a string.
    pub message: String,
}

impl TaskPanic {
    /// Extracts the message from a panic payload.
    pub(crate) fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = if let Some(message) = payload.downcast_ref::<&str>() {
            (*message).to_string()
        } else if let Some(message) = payload.downcast_ref::<String>() {
            message.clone()
        } else {
            "Unknown panic".to_string()
        };
        Self { message }
    }
}

impl std::fmt::Display for TaskPanic {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "task panicked: {}", self.message)
    }
}

impl std::error::Error for TaskPanic {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_from_str_payload() {
        let payload: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(TaskPanic::from_payload(payload.as_ref()).message, "boom");
    }

    #[rstest]
    fn test_from_string_payload() {
        let payload: Box<dyn Any + Send> = Box::new(String::from("formatted 3"));
        assert_eq!(TaskPanic::from_payload(payload.as_ref()).message, "formatted 3");
    }

    #[rstest]
    fn test_from_opaque_payload() {
        let payload: Box<dyn Any + Send> = Box::new(17_u8);
        assert_eq!(TaskPanic::from_payload(payload.as_ref()).message, "Unknown panic");
    }

    #[rstest]
    fn test_is_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(TaskPanic { message: "x".into() });
        assert_eq!(error.to_string(), "task panicked: x");
    }
}
