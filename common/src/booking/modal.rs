use crate::calendar::DaySelection;
use crate::model::appointment::Appointment;
use crate::requests::BookingForm;

/// Milliseconds the success indicator stays up before the modal closes.
pub const AUTO_CLOSE_DELAY_MS: u32 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMode {
    /// List of the day's appointments.
    View,
    /// Booking form.
    Create,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

/// State of the day modal for one selected day.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalState {
    selection: DaySelection,
    mode: ModalMode,
    form: BookingForm,
    phase: SubmitPhase,
    cancelling: Option<i64>,
}

impl ModalState {
    /// An empty day opens straight into the booking form.
    pub fn open(selection: DaySelection) -> Self {
        let mode = if selection.is_empty() {
            ModalMode::Create
        } else {
            ModalMode::View
        };
        let form = BookingForm::for_date(&selection.date_key());
        Self {
            selection,
            mode,
            form,
            phase: SubmitPhase::Idle,
            cancelling: None,
        }
    }

    pub fn selection(&self) -> &DaySelection {
        &self.selection
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.selection.appointments
    }

    pub fn mode(&self) -> ModalMode {
        self.mode
    }

    pub fn form(&self) -> &BookingForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut BookingForm {
        &mut self.form
    }

    pub fn phase(&self) -> &SubmitPhase {
        &self.phase
    }

    pub fn switch_to_create(&mut self) {
        self.mode = ModalMode::Create;
    }

    /// Going back to the list only makes sense when the day has bookings.
    pub fn switch_to_view(&mut self) -> bool {
        if self.selection.is_empty() {
            return false;
        }
        self.mode = ModalMode::View;
        true
    }

    pub fn can_switch_to_view(&self) -> bool {
        !self.selection.is_empty()
    }

    /// Starts a submission and hands out the form to send. Returns `None`
    /// while another submission is in flight.
    pub fn begin_submit(&mut self) -> Option<BookingForm> {
        if self.phase == SubmitPhase::Submitting {
            return None;
        }
        self.phase = SubmitPhase::Submitting;
        Some(self.form.clone())
    }

    /// Shows the success indicator and clears the form, keeping the date.
    pub fn submit_succeeded(&mut self) {
        self.phase = SubmitPhase::Succeeded;
        self.form = BookingForm::for_date(&self.selection.date_key());
    }

    pub fn submit_failed(&mut self, message: impl Into<String>) {
        self.phase = SubmitPhase::Failed(message.into());
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            SubmitPhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Only active, persisted appointments can be cancelled, one at a time.
    pub fn can_cancel(&self, appointment: &Appointment) -> bool {
        appointment.is_active() && appointment.id.is_some() && self.cancelling.is_none()
    }

    pub fn begin_cancel(&mut self, id: i64) -> bool {
        if self.cancelling.is_some() {
            return false;
        }
        self.cancelling = Some(id);
        true
    }

    pub fn cancel_finished(&mut self) {
        self.cancelling = None;
    }

    pub fn cancelling(&self) -> Option<i64> {
        self.cancelling
    }
}
