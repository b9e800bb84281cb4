//! Domain services

pub mod notify;

pub use notify::{ChallanNotice, LogNotifier, Notifier, RelayNotifier};
