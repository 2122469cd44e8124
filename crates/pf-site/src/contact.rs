//! Contact form with a simulated submission.
//!
//! Nothing is sent anywhere: a valid submission discards the draft, shows a
//! "sending" state for a while, then a success state, then returns to idle.

use pf_core::SiteError;
use pf_core::SiteResult;
use serde::Deserialize;
use std::time::Duration;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactTiming {
    pub submit_delay_ms: u64,
    pub success_display_ms: u64,
}

impl Default for ContactTiming {
    fn default() -> Self {
        Self {
            submit_delay_ms: 1500,
            success_display_ms: 3000,
        }
    }
}

impl ContactTiming {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn success_display(&self) -> Duration {
        Duration::from_millis(self.success_display_ms)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    pub fn validate(&self) -> SiteResult<()> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(SiteError::new(
                    "contact.missing_field",
                    format!("`{field}` is required"),
                ));
            }
        }

        if !looks_like_email(self.email.trim()) {
            return Err(SiteError::new(
                "contact.invalid_email",
                format!("`{}` is not an email address", self.email.trim()),
            ));
        }

        Ok(())
    }
}

fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, _)| !host.is_empty())
        && !domain.ends_with('.')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Submitting { since: Instant },
    Success { since: Instant },
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    draft: ContactDraft,
    phase: FormPhase,
    timing: ContactTiming,
    last_error: Option<SiteError>,
}

impl ContactForm {
    pub fn new(timing: ContactTiming) -> Self {
        Self {
            draft: ContactDraft::default(),
            phase: FormPhase::Idle,
            timing,
            last_error: None,
        }
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ContactDraft {
        &mut self.draft
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn can_submit(&self) -> bool {
        matches!(self.phase, FormPhase::Idle)
    }

    pub fn last_error(&self) -> Option<&SiteError> {
        self.last_error.as_ref()
    }

    pub fn button_label(&self) -> &'static str {
        match self.phase {
            FormPhase::Idle => "Envoyer le message",
            FormPhase::Submitting { .. } => "Envoi en cours...",
            FormPhase::Success { .. } => "Message envoyé !",
        }
    }

    /// Validates and "sends" the draft. The draft is discarded on success.
    pub fn submit(&mut self, now: Instant) -> SiteResult<()> {
        if !self.can_submit() {
            return Err(SiteError::new(
                "contact.busy",
                "a message is already being sent",
            ));
        }

        if let Err(error) = self.draft.validate() {
            self.last_error = Some(error.clone());
            return Err(error);
        }

        self.draft = ContactDraft::default();
        self.last_error = None;
        self.phase = FormPhase::Submitting { since: now };
        tracing::info!("contact form submitted (simulated, input discarded)");
        Ok(())
    }

    /// Advances the simulated submission. Returns true when the phase changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let next = match self.phase {
            FormPhase::Submitting { since }
                if now.saturating_duration_since(since) >= self.timing.submit_delay() =>
            {
                // Success starts at the deadline, not at the (possibly late) tick.
                FormPhase::Success {
                    since: since + self.timing.submit_delay(),
                }
            }
            FormPhase::Success { since }
                if now.saturating_duration_since(since) >= self.timing.success_display() =>
            {
                FormPhase::Idle
            }
            _ => return false,
        };
        self.phase = next;
        true
    }

    /// Time left until the next phase change, for repaint scheduling.
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        match self.phase {
            FormPhase::Idle => None,
            FormPhase::Submitting { since } => Some(
                self.timing
                    .submit_delay()
                    .saturating_sub(now.saturating_duration_since(since)),
            ),
            FormPhase::Success { since } => Some(
                self.timing
                    .success_display()
                    .saturating_sub(now.saturating_duration_since(since)),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ContactForm;
    use super::ContactTiming;
    use super::FormPhase;
    use std::time::Duration;
    use std::time::Instant;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new(ContactTiming::default());
        let draft = form.draft_mut();
        draft.name = "John Doe".to_owned();
        draft.email = "john@example.com".to_owned();
        draft.subject = "Proposition de projet".to_owned();
        draft.message = "Bonjour !".to_owned();
        form
    }

    #[test]
    fn walks_through_simulated_submission() {
        let mut form = filled_form();
        let start = Instant::now();

        form.submit(start).expect("valid draft");
        assert!(matches!(form.phase(), FormPhase::Submitting { .. }));
        assert_eq!(form.button_label(), "Envoi en cours...");
        assert!(form.draft().name.is_empty());

        assert!(!form.tick(start + Duration::from_millis(1499)));
        assert!(form.tick(start + Duration::from_millis(1500)));
        assert_eq!(form.button_label(), "Message envoyé !");

        let shown = start + Duration::from_millis(1500);
        assert!(!form.tick(shown + Duration::from_millis(2999)));
        assert!(form.tick(shown + Duration::from_millis(3000)));
        assert_eq!(form.phase(), FormPhase::Idle);
        assert!(form.can_submit());
    }

    #[test]
    fn rejects_submission_while_busy() {
        let mut form = filled_form();
        let start = Instant::now();
        form.submit(start).expect("valid draft");

        *form.draft_mut() = filled_form().draft().clone();
        let error = form.submit(start).expect_err("busy form must refuse");
        assert_eq!(error.code, "contact.busy");
    }

    #[test]
    fn missing_fields_keep_draft_and_record_error() {
        let mut form = filled_form();
        form.draft_mut().subject = "   ".to_owned();

        let error = form.submit(Instant::now()).expect_err("subject is required");
        assert_eq!(error.code, "contact.missing_field");
        assert_eq!(form.last_error().map(|e| e.code), Some("contact.missing_field"));
        assert_eq!(form.draft().name, "John Doe");
        assert_eq!(form.phase(), FormPhase::Idle);
    }

    #[test]
    fn email_shape_is_checked() {
        for bad in ["john", "john@", "@example.com", "john@example", "jo hn@example.com", "a@b@c.d", "john@.com"] {
            let mut form = filled_form();
            form.draft_mut().email = bad.to_owned();
            let error = form.submit(Instant::now()).expect_err(bad);
            assert_eq!(error.code, "contact.invalid_email", "{bad}");
        }
    }

    #[test]
    fn late_tick_does_not_extend_success_window() {
        let mut form = filled_form();
        let start = Instant::now();
        form.submit(start).expect("valid draft");

        assert!(form.tick(start + Duration::from_millis(2000)));
        assert_eq!(
            form.phase(),
            FormPhase::Success {
                since: start + Duration::from_millis(1500)
            }
        );
        assert_eq!(
            form.next_deadline(start + Duration::from_millis(2000)),
            Some(Duration::from_millis(2500))
        );
        assert!(form.tick(start + Duration::from_millis(4500)));
        assert_eq!(form.phase(), FormPhase::Idle);
    }

    #[test]
    fn deadline_counts_down() {
        let mut form = filled_form();
        let start = Instant::now();
        assert_eq!(form.next_deadline(start), None);

        form.submit(start).expect("valid draft");
        assert_eq!(
            form.next_deadline(start + Duration::from_millis(500)),
            Some(Duration::from_millis(1000))
        );
    }
}
