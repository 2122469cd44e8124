//! Page-level state for the portfolio site: configuration, routing and the
//! interactive pieces of each screen.
//!
//! Nothing here draws. The application crate renders from these types and
//! feeds user input back into them.

pub mod config;
pub mod contact;
pub mod navbar;
pub mod projects;
pub mod route;

pub use config::MIN_WINDOW_HEIGHT;
pub use config::MIN_WINDOW_WIDTH;
pub use config::SiteConfig;
pub use config::WindowConfig;
pub use contact::ContactDraft;
pub use contact::ContactForm;
pub use contact::ContactTiming;
pub use contact::FormPhase;
pub use navbar::NavbarState;
pub use projects::CardAction;
pub use projects::ProjectsSection;
pub use route::Location;
pub use route::Route;
