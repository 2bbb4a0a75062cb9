//! The contact form: field records, the submission state machine, and the
//! delivery seam.

mod field;
pub mod rules;

pub use field::{Field, FieldRole};

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

pub const SUBMIT_LABEL: &str = "Send Message";
pub const SUBMIT_BUSY_LABEL: &str = "Sending...";
pub const SENT_NOTICE: &str = "Message sent successfully!";
pub const FAILED_NOTICE: &str = "Failed to send message. Please try again later.";

/// Simulated delivery time.
pub const DELIVERY_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
}

/// What `submit` decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitGate {
    /// A submission is already in flight; the event is dropped.
    Busy,
    /// At least one field failed validation; nothing was sent.
    Rejected,
    /// All fields valid; the form is now Submitting and the payload is
    /// ready to hand to a courier.
    Accepted(Delivery),
}

/// The values captured at the moment submission was accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum CourierError {
    #[error("delivery timed out")]
    Timeout,
    #[error("delivery rejected: {0}")]
    Rejected(String),
}

/// Delivery seam. The shipped courier simulates a backend; tests swap in
/// couriers that fail or count calls.
#[async_trait]
pub trait Courier: Send + Sync {
    async fn deliver(&self, delivery: Delivery) -> Result<(), CourierError>;
}

/// Sleeps for [`DELIVERY_DELAY`], then reports success.
pub struct SimulatedCourier;

#[async_trait]
impl Courier for SimulatedCourier {
    async fn deliver(&self, _delivery: Delivery) -> Result<(), CourierError> {
        tokio::time::sleep(DELIVERY_DELAY).await;
        Ok(())
    }
}

/// The whole form: three field records plus the Idle/Submitting machine.
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: Field,
    pub email: Field,
    pub message: Field,
    phase: Phase,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: Field::new(FieldRole::Name, "name", "Name"),
            email: Field::new(FieldRole::Email, "email", "Email"),
            message: Field::new(FieldRole::Message, "message", "Message"),
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn fields(&self) -> [&Field; 3] {
        [&self.name, &self.email, &self.message]
    }

    pub fn field_mut(&mut self, id: &str) -> Option<&mut Field> {
        [&mut self.name, &mut self.email, &mut self.message]
            .into_iter()
            .find(|field| field.id == id)
    }

    /// Blur trigger: revalidate the field unconditionally.
    pub fn blurred(&mut self, id: &str) -> bool {
        match self.field_mut(id) {
            Some(field) => field.validate(),
            None => true,
        }
    }

    /// Change trigger: take the edited value; the field revalidates only
    /// while errored.
    pub fn edited(&mut self, id: &str, value: String) {
        if let Some(field) = self.field_mut(id) {
            field.edited(value);
        }
    }

    /// Submit gate. The reentrancy check runs before anything else: a form
    /// already Submitting drops the event without touching the fields.
    /// Otherwise every field is validated, reporting every error, and the
    /// form advances to Submitting only when all of them pass.
    pub fn submit(&mut self) -> SubmitGate {
        if self.phase == Phase::Submitting {
            return SubmitGate::Busy;
        }

        let mut all_valid = true;
        for field in [&mut self.name, &mut self.email, &mut self.message] {
            // No short-circuit: every invalid field gets its error.
            all_valid &= field.validate();
        }
        if !all_valid {
            return SubmitGate::Rejected;
        }

        self.phase = Phase::Submitting;
        SubmitGate::Accepted(Delivery {
            name: self.name.value.clone(),
            email: self.email.value.clone(),
            message: self.message.value.clone(),
        })
    }

    /// Delivery finished. Success resets the fields; failure keeps the
    /// values for retry. Either way the form returns to Idle. Returns the
    /// notice to show.
    pub fn finish(&mut self, delivered: bool) -> &'static str {
        self.phase = Phase::Idle;
        if delivered {
            self.name.reset();
            self.email.reset();
            self.message.reset();
            SENT_NOTICE
        } else {
            FAILED_NOTICE
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}
