use crate::model::appointment::Appointment;

/// Identifies one fetch of the appointment list. Only the result of the most
/// recently started fetch is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RefreshTicket(u64);

/// The dashboard's copy of the patient's appointments.
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentBook {
    appointments: Vec<Appointment>,
    latest: u64,
    loading: bool,
    loaded: bool,
}

impl Default for AppointmentBook {
    fn default() -> Self {
        Self::new()
    }
}

impl AppointmentBook {
    /// Empty book waiting for its first fetch.
    pub fn new() -> Self {
        Self {
            appointments: Vec::new(),
            latest: 0,
            loading: true,
            loaded: false,
        }
    }

    /// Marks a new fetch as started. Results of any earlier fetch are
    /// ignored from now on.
    pub fn start_refresh(&mut self) -> RefreshTicket {
        self.latest += 1;
        self.loading = true;
        RefreshTicket(self.latest)
    }

    /// Replaces the list with the result of the fetch behind `ticket`.
    ///
    /// Returns `false`, leaving the book untouched, when a newer fetch has
    /// been started since.
    pub fn replace(&mut self, ticket: RefreshTicket, appointments: Vec<Appointment>) -> bool {
        if ticket.0 != self.latest {
            return false;
        }
        self.appointments = appointments;
        self.loading = false;
        self.loaded = true;
        true
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// False until the first fetch has completed, successful or not.
    pub fn has_loaded(&self) -> bool {
        self.loaded
    }

    pub fn find(&self, id: i64) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == Some(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::appointment::AppointmentStatus;

    fn appointment(id: i64) -> Appointment {
        Appointment {
            id: Some(id),
            usuario_id: Some(1),
            nombre_paciente: "Ana López".into(),
            telefono: String::new(),
            email: "ana@example.com".into(),
            servicio: "podologia".into(),
            fecha_cita: "2026-10-22".into(),
            hora_cita: "09:00".into(),
            estado: AppointmentStatus::Pendiente,
            mensaje: None,
            created_at: None,
        }
    }

    #[test]
    fn refresh_keeps_previous_list_until_replaced() {
        let mut book = AppointmentBook::new();
        assert!(book.is_loading() && !book.has_loaded());
        let first = book.start_refresh();
        assert!(book.replace(first, vec![appointment(1)]));
        book.start_refresh();
        assert!(book.is_loading());
        assert!(book.has_loaded());
        assert!(book.find(1).is_some());
    }

    #[test]
    fn stale_fetch_does_not_overwrite_newer_one() {
        let mut book = AppointmentBook::new();
        let manual = book.start_refresh();
        let after_booking = book.start_refresh();

        assert!(book.replace(after_booking, vec![appointment(1), appointment(2)]));
        assert!(!book.replace(manual, vec![appointment(1)]));

        assert_eq!(book.appointments().len(), 2);
        assert!(book.find(2).is_some());
        assert!(!book.is_loading());
    }

    #[test]
    fn older_result_keeps_loading_flag_for_pending_fetch() {
        let mut book = AppointmentBook::new();
        let older = book.start_refresh();
        book.start_refresh();

        assert!(!book.replace(older, Vec::new()));
        assert!(book.is_loading());
        assert!(!book.has_loaded());
    }
}
