pub mod login;
pub mod pages;
pub mod types;

pub use login::{LoginAttempt, LoginError, LoginField, LoginForm};
pub use pages::{NavItem, Page, HEADER_ACTIONS, HEADER_LINKS, HOME_CALL_TO_ACTION};
pub use types::HealthResponse;
