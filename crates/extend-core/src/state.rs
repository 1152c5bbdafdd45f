//! Modal Session
//!
//! Lifecycle: Closed -> Populating -> Idle <-> Previewing -> Submitting.
//! Submitting returns to Closed on success and to Idle on failure; hiding
//! the modal always lands in a clean Closed.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalPhase {
    #[default]
    Closed,
    Populating,
    Idle,
    Previewing,
    Submitting,
}

/// State of the currently open modal, if any
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    item_id: Option<String>,
    due_date: Option<String>,
    phase: ModalPhase,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item_id(&self) -> Option<&str> {
        self.item_id.as_deref()
    }

    pub fn due_date(&self) -> Option<&str> {
        self.due_date.as_deref()
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase != ModalPhase::Closed
    }

    /// Target a new item, dropping whatever was open before
    pub fn begin_open(&mut self, item_id: impl Into<String>, due_date: impl Into<String>) {
        self.item_id = Some(item_id.into());
        self.due_date = Some(due_date.into());
        self.phase = ModalPhase::Populating;
    }

    pub fn mark_idle(&mut self) {
        if self.is_open() {
            self.phase = ModalPhase::Idle;
        }
    }

    /// Item id to preview against, or `None` when no modal is open.
    ///
    /// Previews are unguarded: several may be in flight, and one may run
    /// while a submission is pending (the phase then stays Submitting).
    pub fn begin_preview(&mut self) -> Option<String> {
        match self.phase {
            ModalPhase::Idle | ModalPhase::Previewing => self.phase = ModalPhase::Previewing,
            ModalPhase::Submitting => {}
            ModalPhase::Closed | ModalPhase::Populating => return None,
        }
        self.item_id.clone()
    }

    pub fn finish_preview(&mut self) {
        if self.phase == ModalPhase::Previewing {
            self.phase = ModalPhase::Idle;
        }
    }

    /// Claims the submission slot; `None` if closed or already submitting
    pub fn begin_submit(&mut self) -> Option<String> {
        match self.phase {
            ModalPhase::Idle | ModalPhase::Previewing => {
                let item_id = self.item_id.clone()?;
                self.phase = ModalPhase::Submitting;
                Some(item_id)
            }
            _ => None,
        }
    }

    pub fn finish_submit(&mut self, succeeded: bool) {
        if succeeded {
            self.clear();
        } else if self.phase == ModalPhase::Submitting {
            self.phase = ModalPhase::Idle;
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_session() -> Session {
        let mut session = Session::new();
        session.begin_open("7", "2025-01-10");
        session.mark_idle();
        session
    }

    #[test]
    fn test_open_then_close() {
        let mut session = open_session();
        assert_eq!(session.phase(), ModalPhase::Idle);
        assert_eq!(session.item_id(), Some("7"));
        assert_eq!(session.due_date(), Some("2025-01-10"));

        session.clear();
        assert_eq!(session, Session::default());
        assert!(!session.is_open());
    }

    #[test]
    fn test_submit_is_exclusive() {
        let mut session = open_session();
        assert_eq!(session.begin_submit().as_deref(), Some("7"));
        assert_eq!(session.begin_submit(), None);

        session.finish_submit(false);
        assert_eq!(session.phase(), ModalPhase::Idle);
        assert_eq!(session.item_id(), Some("7"));

        session.begin_submit();
        session.finish_submit(true);
        assert_eq!(session.phase(), ModalPhase::Closed);
        assert_eq!(session.item_id(), None);
    }

    #[test]
    fn test_preview_phases() {
        let mut session = Session::new();
        assert_eq!(session.begin_preview(), None);

        let mut session_open = open_session();
        assert_eq!(session_open.begin_preview().as_deref(), Some("7"));
        assert_eq!(session_open.phase(), ModalPhase::Previewing);
        session_open.finish_preview();
        assert_eq!(session_open.phase(), ModalPhase::Idle);

        session_open.begin_submit();
        assert_eq!(session_open.begin_preview().as_deref(), Some("7"));
        session_open.finish_preview();
        assert_eq!(session_open.phase(), ModalPhase::Submitting);

        session.mark_idle();
        assert_eq!(session.phase(), ModalPhase::Closed);
    }

    #[test]
    fn test_reopen_replaces_target() {
        let mut session = open_session();
        session.begin_open("9", "2025-02-01");
        assert_eq!(session.item_id(), Some("9"));
        assert_eq!(session.phase(), ModalPhase::Populating);
    }
}
