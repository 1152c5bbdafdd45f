//! UI Components

mod success_notice;

pub use success_notice::show_success_notice;
