//! Extend Core
//!
//! DOM-free logic behind the "extend due date" modal:
//! - models: wire types shared with the server
//! - validation / dates: day-count parsing and date display rules
//! - state: the per-modal session and its lifecycle
//! - view / api / clock: the seams the browser frontend implements
//! - controller: the operations wiring it all together

pub mod api;
pub mod clock;
pub mod config;
pub mod controller;
pub mod dates;
pub mod error;
pub mod i18n;
pub mod models;
pub mod state;
pub mod validation;
pub mod view;

pub use api::ExtensionApi;
pub use clock::{Clock, FixedClock};
pub use config::ExtendConfig;
pub use controller::{CardPatch, ConfirmOutcome, ExtensionController, PreviewOutcome};
pub use dates::{format_for_display, DueStatus, Locale};
pub use error::{ExtendError, ExtendResult, ValidationError};
pub use i18n::Messages;
pub use models::{
    CsrfToken, ErrorBody, ExtendRequest, ExtendResponse, ExtendTrigger, PreviewResponse,
};
pub use state::{ModalPhase, Session};
pub use view::ExtensionView;
