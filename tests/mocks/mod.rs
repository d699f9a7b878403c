//! Mock implementations of the form's seams for testing.

pub mod mock_contact_client;
pub mod recording_notifier;

#[allow(unused_imports)]
pub use mock_contact_client::MockContactClient;
#[allow(unused_imports)]
pub use recording_notifier::RecordingNotifier;
