//! Provisioning wizard state machine.
//!
//! The modal component drives this struct and owns nothing but signals; every
//! transition rule lives here where it can be tested natively. The flow:
//! pick an owner (re-verified by id against the backend, since the search
//! result may be stale), enter SIP credentials, test them explicitly, then
//! submit. Credentials that passed a test are kept in an in-memory list for
//! this wizard instance only, tagged with the server's verification
//! timestamp; they are never persisted and die with the modal.
//!
//! Submit is possible only while both the owner and the selected credential
//! set are verified. Editing any credential field drops the verified
//! selection, so untested credentials can never be submitted. A failed
//! submit keeps everything entered intact.

use contracts::system::users::User;
use contracts::telephony::inbound_numbers::{CreateInboundNumberDto, SipCredential};

use crate::layout::notify::AlertData;

/// Input buffer for the credential step; all fields are strings until the
/// test action validates them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CredentialForm {
    pub host: String,
    pub port: String,
    pub username: String,
    pub password: String,
}

impl CredentialForm {
    pub fn empty() -> Self {
        Self {
            port: "5060".to_string(),
            ..Default::default()
        }
    }

    fn from_credential(credential: &SipCredential) -> Self {
        Self {
            host: credential.host.clone(),
            port: credential.port.to_string(),
            username: credential.username.clone(),
            password: credential.password.clone(),
        }
    }

    pub fn to_credential(&self) -> Result<SipCredential, String> {
        let host = self.host.trim();
        if host.is_empty() {
            return Err("SIP host is required".to_string());
        }
        let port: u16 = self
            .port
            .trim()
            .parse()
            .map_err(|_| format!("Not a valid port: \"{}\"", self.port.trim()))?;
        let username = self.username.trim();
        if username.is_empty() {
            return Err("SIP username is required".to_string());
        }
        if self.password.is_empty() {
            return Err("SIP password is required".to_string());
        }
        Ok(SipCredential {
            host: host.to_string(),
            port,
            username: username.to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredField {
    Host,
    Port,
    Username,
    Password,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TestedCredential {
    pub credential: SipCredential,
    pub verified_at: String,
}

#[derive(Debug, Clone, Default)]
pub struct ProvisionWizard {
    pub phone_number: String,
    pub provider: String,
    pub verifying_user: bool,
    pub verified_user: Option<User>,
    pub credentials: CredentialForm,
    pub testing: bool,
    pub tested: Vec<TestedCredential>,
    pub selected: Option<usize>,
    pub submitting: bool,
    pub alert: Option<AlertData>,
}

impl ProvisionWizard {
    pub fn new() -> Self {
        Self {
            credentials: CredentialForm::empty(),
            ..Default::default()
        }
    }

    pub fn user_verified(&self) -> bool {
        self.verified_user.is_some()
    }

    pub fn credential_verified(&self) -> bool {
        self.selected.is_some()
    }

    /// Submit is enabled iff the owner and the selected credential set are
    /// both verified and no submit is already running.
    pub fn can_submit(&self) -> bool {
        self.user_verified() && self.credential_verified() && !self.submitting
    }

    /// The operator picked a search result; re-verify it by id before
    /// accepting. Returns false when a verification is already running.
    pub fn begin_user_verification(&mut self) -> bool {
        if self.verifying_user {
            return false;
        }
        self.verifying_user = true;
        self.alert = None;
        true
    }

    /// Outcome of the by-id re-fetch. A missing or deactivated user rejects
    /// the selection and returns the workflow to the picking step; nothing of
    /// the rejected selection is retained.
    pub fn resolve_user(&mut self, result: Result<User, String>) {
        self.verifying_user = false;
        match result {
            Ok(user) if user.is_active => {
                self.verified_user = Some(user);
                self.alert = None;
            }
            Ok(user) => {
                self.verified_user = None;
                self.alert = Some(AlertData::danger(format!(
                    "User \"{}\" is deactivated and cannot own a number",
                    user.username
                )));
            }
            Err(message) => {
                self.verified_user = None;
                self.alert = Some(AlertData::danger(message));
            }
        }
    }

    pub fn clear_user(&mut self) {
        self.verified_user = None;
    }

    /// Editing any credential field invalidates the verified selection.
    pub fn edit_credential(&mut self, field: CredField, value: String) {
        match field {
            CredField::Host => self.credentials.host = value,
            CredField::Port => self.credentials.port = value,
            CredField::Username => self.credentials.username = value,
            CredField::Password => self.credentials.password = value,
        }
        self.selected = None;
    }

    /// Explicit operator action: validate the form and start the connection
    /// test.
    pub fn begin_credential_test(&mut self) -> Result<SipCredential, String> {
        if self.testing {
            return Err(String::new());
        }
        let credential = self.credentials.to_credential()?;
        self.testing = true;
        self.alert = None;
        Ok(credential)
    }

    /// A passed test appends the credential set to the tested list and
    /// selects it; a failed one leaves the form as entered.
    pub fn resolve_credential_test(
        &mut self,
        credential: SipCredential,
        outcome: Result<String, String>,
    ) {
        self.testing = false;
        match outcome {
            Ok(verified_at) => {
                self.tested.push(TestedCredential {
                    credential,
                    verified_at,
                });
                self.selected = Some(self.tested.len() - 1);
                self.alert = Some(AlertData::success("Connection verified"));
            }
            Err(message) => {
                self.alert = Some(AlertData::danger(message));
            }
        }
    }

    /// Select a previously tested credential set; restores its values into
    /// the form without invalidating the selection.
    pub fn select_tested(&mut self, index: usize) -> bool {
        let Some(tested) = self.tested.get(index) else {
            return false;
        };
        self.credentials = CredentialForm::from_credential(&tested.credential);
        self.selected = Some(index);
        true
    }

    /// Build the submit payload and enter the submitting state. Returns None
    /// outside the ready state or with an incomplete number/provider.
    pub fn begin_submit(&mut self) -> Option<CreateInboundNumberDto> {
        if !self.can_submit() {
            return None;
        }
        let phone_number = self.phone_number.trim();
        if phone_number.is_empty() {
            self.alert = Some(AlertData::warning("Phone number is required"));
            return None;
        }
        if self.provider.trim().is_empty() {
            self.alert = Some(AlertData::warning("Select a provider"));
            return None;
        }
        let user = self.verified_user.as_ref()?;
        let credential = self.tested.get(self.selected?)?.credential.clone();
        self.submitting = true;
        self.alert = None;
        Some(CreateInboundNumberDto {
            phone_number: phone_number.to_string(),
            provider: self.provider.trim().to_string(),
            user_id: user.id,
            credential,
        })
    }

    /// A failed submit keeps the modal state intact so the operator can
    /// correct and retry.
    pub fn fail_submit(&mut self, message: String) {
        self.submitting = false;
        self.alert = Some(AlertData::danger(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn active_user() -> User {
        User {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            email: None,
            full_name: None,
            is_active: true,
            is_admin: false,
            credit_balance: 0.0,
            created_at: "2026-01-01T00:00:00Z".to_string(),
            last_login_at: None,
        }
    }

    fn filled_form() -> CredentialForm {
        CredentialForm {
            host: "sip.example.net".to_string(),
            port: "5060".to_string(),
            username: "trunk01".to_string(),
            password: "secret".to_string(),
        }
    }

    fn wizard_with_verified_credential() -> ProvisionWizard {
        let mut w = ProvisionWizard::new();
        w.credentials = filled_form();
        let credential = w.begin_credential_test().unwrap();
        w.resolve_credential_test(credential, Ok("2026-08-01T10:00:00Z".to_string()));
        w
    }

    #[test]
    fn test_submit_requires_both_verifications() {
        let mut w = ProvisionWizard::new();
        assert!(!w.can_submit());

        // user only
        w.resolve_user(Ok(active_user()));
        assert!(w.user_verified());
        assert!(!w.can_submit());

        // credential only
        let mut w = wizard_with_verified_credential();
        assert!(w.credential_verified());
        assert!(!w.can_submit());

        // both
        w.resolve_user(Ok(active_user()));
        assert!(w.can_submit());

        // and never while a submit is running
        w.phone_number = "+493011122233".to_string();
        w.provider = "telnyx".to_string();
        assert!(w.begin_submit().is_some());
        assert!(!w.can_submit());
    }

    #[test]
    fn test_editing_a_credential_field_invalidates_the_selection() {
        let mut w = wizard_with_verified_credential();
        w.resolve_user(Ok(active_user()));
        assert!(w.can_submit());

        w.edit_credential(CredField::Password, "changed".to_string());
        assert!(!w.credential_verified());
        assert!(!w.can_submit());
        // the tested list is kept; only the selection is dropped
        assert_eq!(w.tested.len(), 1);
    }

    #[test]
    fn test_selecting_a_tested_credential_restores_the_form() {
        let mut w = wizard_with_verified_credential();
        w.edit_credential(CredField::Host, "other.example.net".to_string());
        assert!(!w.credential_verified());

        assert!(w.select_tested(0));
        assert!(w.credential_verified());
        assert_eq!(w.credentials.host, "sip.example.net");
        assert!(!w.select_tested(5));
    }

    #[test]
    fn test_rejected_user_returns_to_selection() {
        let mut w = ProvisionWizard::new();
        assert!(w.begin_user_verification());
        assert!(!w.begin_user_verification());
        w.resolve_user(Err("User not found".to_string()));
        assert!(!w.verifying_user);
        assert!(!w.user_verified());
        assert!(w.alert.is_some());
    }

    #[test]
    fn test_deactivated_user_is_rejected() {
        let mut w = ProvisionWizard::new();
        let mut user = active_user();
        user.is_active = false;
        w.resolve_user(Ok(user));
        assert!(!w.user_verified());
        assert!(w.alert.is_some());
    }

    #[test]
    fn test_failed_test_keeps_the_form_as_entered() {
        let mut w = ProvisionWizard::new();
        w.credentials = filled_form();
        let credential = w.begin_credential_test().unwrap();
        w.resolve_credential_test(credential, Err("Connection refused".to_string()));
        assert!(!w.testing);
        assert!(!w.credential_verified());
        assert!(w.tested.is_empty());
        assert_eq!(w.credentials, filled_form());
    }

    #[test]
    fn test_incomplete_credentials_do_not_start_a_test() {
        let mut w = ProvisionWizard::new();
        w.credentials = CredentialForm {
            port: "sip".to_string(),
            ..filled_form()
        };
        assert!(w.begin_credential_test().is_err());
        assert!(!w.testing);

        w.credentials = CredentialForm {
            host: "  ".to_string(),
            ..filled_form()
        };
        assert!(w.begin_credential_test().is_err());
        assert!(!w.testing);
    }

    #[test]
    fn test_failed_submit_keeps_everything_entered() {
        let mut w = wizard_with_verified_credential();
        w.resolve_user(Ok(active_user()));
        w.phone_number = "+493011122233".to_string();
        w.provider = "telnyx".to_string();

        let dto = w.begin_submit().expect("ready to submit");
        assert_eq!(dto.phone_number, "+493011122233");
        assert_eq!(dto.credential.host, "sip.example.net");

        w.fail_submit("Number already provisioned".to_string());
        assert!(!w.submitting);
        assert!(w.can_submit());
        assert_eq!(w.phone_number, "+493011122233");
        assert_eq!(w.tested.len(), 1);
        assert!(w.alert.is_some());
    }

    #[test]
    fn test_submit_requires_number_and_provider() {
        let mut w = wizard_with_verified_credential();
        w.resolve_user(Ok(active_user()));
        assert!(w.begin_submit().is_none());
        assert!(!w.submitting);

        w.phone_number = "+493011122233".to_string();
        assert!(w.begin_submit().is_none());
        w.provider = "telnyx".to_string();
        assert!(w.begin_submit().is_some());
    }
}
