//! Application shell
//!
//! Owns everything the page view owns: the current session, the fetched
//! claims list, all transient form state, modal visibility, and the toast
//! notifications. Renders either the landing view or the claims dashboard
//! depending on session presence, and consumes refresh commands pushed by
//! the change-feed subscriber.
//!
//! All state is ephemeral, held in memory for the lifetime of the shell;
//! nothing here persists or coordinates across processes.

pub mod config;
pub mod shell;
pub mod forms;
pub mod view;
pub mod notify;
pub mod feed;

pub use config::AppConfig;
pub use shell::{Shell, Modal, ShellCommand};
pub use forms::{LoginForm, SignupForm, ClaimForm, SelectedDocument};
pub use view::{View, LandingView, DashboardView, ClaimRowView, FeatureCard};
pub use notify::{Notice, NoticeLevel, Notices};
pub use feed::{spawn_change_feed, FeedHandle};
