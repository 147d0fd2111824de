//! Common helper UI components

mod loading_spinner;
mod placeholder_message;

pub use loading_spinner::LoadingSpinner;
pub use placeholder_message::PlaceholderMessage;
