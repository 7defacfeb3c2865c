//! Login and access-request flows
//!
//! Both are the same single-shot shape: the user submits, a "submitting"
//! state holds for a fixed delay, then the flow succeeds. There is no
//! failure path - this is a demo with no backend, so submission cannot be
//! rejected. Field validation is the only gate.

/// Fixed delay between submit and success, in milliseconds
pub const SUBMIT_DELAY_MS: u64 = 1500;

/// State of a single-shot submit flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    /// Waiting for the user to submit
    #[default]
    Idle,
    /// Fixed delay running
    Submitting,
    /// Delay elapsed; the flow's next view applies
    Succeeded,
}

/// A submit-with-fixed-delay flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubmitFlow {
    state: SubmitState,
}

impl SubmitFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmitState::Submitting
    }

    pub fn succeeded(&self) -> bool {
        self.state == SubmitState::Succeeded
    }

    /// Begin submitting; a no-op unless the flow is idle. Returns whether
    /// the caller should schedule the completion delay.
    pub fn submit(&mut self) -> bool {
        if self.state != SubmitState::Idle {
            return false;
        }
        self.state = SubmitState::Submitting;
        true
    }

    /// Completion delay elapsed
    pub fn complete(&mut self) {
        if self.state == SubmitState::Submitting {
            self.state = SubmitState::Succeeded;
        }
    }

    /// Back to idle (logout, or navigating away from the form)
    pub fn reset(&mut self) {
        self.state = SubmitState::Idle;
    }
}

/// Login form fields
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub show_password: bool,
}

impl LoginForm {
    /// Both fields filled in
    pub fn is_complete(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.is_empty()
    }
}

/// Access-request form fields (step 1 of the two-step form)
#[derive(Debug, Clone, Default)]
pub struct AccessForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub institution: String,
    pub role: String,
    pub accepted_terms: bool,
}

impl AccessForm {
    /// Every field filled in and the terms checkbox ticked
    pub fn is_complete(&self) -> bool {
        !self.first_name.trim().is_empty()
            && !self.last_name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.institution.trim().is_empty()
            && !self.role.trim().is_empty()
            && self.accepted_terms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flow_single_shot() {
        let mut flow = SubmitFlow::new();
        assert!(flow.submit());
        assert!(flow.is_submitting());

        // Re-submitting while the delay runs is a no-op
        assert!(!flow.submit());

        flow.complete();
        assert!(flow.succeeded());

        // Succeeded is terminal until reset
        assert!(!flow.submit());
        flow.reset();
        assert!(flow.submit());
    }

    #[test]
    fn test_complete_ignored_when_idle() {
        let mut flow = SubmitFlow::new();
        flow.complete();
        assert_eq!(flow.state(), SubmitState::Idle);
    }

    #[test]
    fn test_login_form_requires_both_fields() {
        let mut form = LoginForm::default();
        assert!(!form.is_complete());
        form.email = "dr.chen@example.org".into();
        assert!(!form.is_complete());
        form.password = "hunter2".into();
        assert!(form.is_complete());
    }

    #[test]
    fn test_access_form_requires_terms() {
        let form = AccessForm {
            first_name: "Sarah".into(),
            last_name: "Chen".into(),
            email: "dr.chen@example.org".into(),
            institution: "General Hospital".into(),
            role: "Radiologist".into(),
            accepted_terms: false,
        };
        assert!(!form.is_complete());

        let form = AccessForm {
            accepted_terms: true,
            ..form
        };
        assert!(form.is_complete());
    }
}
