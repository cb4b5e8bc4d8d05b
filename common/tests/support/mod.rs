//! In-memory stand-in for the clinic REST API.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use common::requests::{LoginRequest, NewAppointment, RegisterData};
use common::responses::AuthResponse;
use common::{ApiError, Appointment, AppointmentStatus, ClinicApi, User};

#[derive(Default)]
pub struct FakeClinic {
    users: RefCell<Vec<(User, String)>>,
    tokens: RefCell<HashMap<String, i64>>,
    appointments: RefCell<Vec<Appointment>>,
    next_id: Cell<i64>,
    pub fail_list: Cell<bool>,
    pub fail_cancel: Cell<bool>,
    pub fail_create: Cell<bool>,
    pub me_calls: Cell<usize>,
    /// Times `me` yields to the executor before answering.
    pub me_yields: Cell<usize>,
}

impl FakeClinic {
    pub fn new() -> Self {
        Self {
            next_id: Cell::new(1),
            ..Self::default()
        }
    }

    /// Registers a patient directly and returns a valid token for them.
    pub fn seed_user(&self, nombre: &str, email: &str, password: &str) -> (User, String) {
        let user = User {
            id: self.bump(),
            nombre: nombre.to_string(),
            apellido: "Prueba".to_string(),
            email: email.to_string(),
            telefono: Some("555-123-4567".to_string()),
            created_at: None,
        };
        self.users
            .borrow_mut()
            .push((user.clone(), password.to_string()));
        let token = self.issue(user.id);
        (user, token)
    }

    pub fn seed_appointment(&self, owner: &User, fecha: &str, hora: &str) -> i64 {
        let id = self.bump();
        self.appointments.borrow_mut().push(Appointment {
            id: Some(id),
            usuario_id: Some(owner.id),
            nombre_paciente: owner.full_name(),
            telefono: String::new(),
            email: owner.email.clone(),
            servicio: "medicina-general".to_string(),
            fecha_cita: fecha.to_string(),
            hora_cita: hora.to_string(),
            estado: AppointmentStatus::Pendiente,
            mensaje: None,
            created_at: None,
        });
        id
    }

    pub fn revoke(&self, token: &str) {
        self.tokens.borrow_mut().remove(token);
    }

    fn bump(&self) -> i64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }

    fn issue(&self, user_id: i64) -> String {
        let token = format!("token-{}", self.bump());
        self.tokens.borrow_mut().insert(token.clone(), user_id);
        token
    }

    fn owner(&self, token: &str) -> Result<i64, ApiError> {
        self.tokens
            .borrow()
            .get(token)
            .copied()
            .ok_or(ApiError::Status(401))
    }
}

impl ClinicApi for FakeClinic {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let user = self
            .users
            .borrow()
            .iter()
            .find(|(u, p)| u.email == request.email && *p == request.password)
            .map(|(u, _)| u.clone())
            .ok_or(ApiError::Status(401))?;
        let token = self.issue(user.id);
        Ok(AuthResponse { token, user })
    }

    async fn register(&self, request: &RegisterData) -> Result<AuthResponse, ApiError> {
        if self
            .users
            .borrow()
            .iter()
            .any(|(u, _)| u.email == request.email)
        {
            return Err(ApiError::Status(409));
        }
        let user = User {
            id: self.bump(),
            nombre: request.nombre.clone(),
            apellido: request.apellido.clone(),
            email: request.email.clone(),
            telefono: request.telefono.clone(),
            created_at: None,
        };
        self.users
            .borrow_mut()
            .push((user.clone(), request.password.clone()));
        let token = self.issue(user.id);
        Ok(AuthResponse { token, user })
    }

    async fn me(&self, token: &str) -> Result<User, ApiError> {
        self.me_calls.set(self.me_calls.get() + 1);
        for _ in 0..self.me_yields.get() {
            tokio::task::yield_now().await;
        }
        let id = self.owner(token)?;
        self.users
            .borrow()
            .iter()
            .find(|(u, _)| u.id == id)
            .map(|(u, _)| u.clone())
            .ok_or(ApiError::Status(401))
    }

    async fn list_appointments(&self, token: &str) -> Result<Vec<Appointment>, ApiError> {
        if self.fail_list.get() {
            return Err(ApiError::Network("connection reset".into()));
        }
        let id = self.owner(token)?;
        Ok(self
            .appointments
            .borrow()
            .iter()
            .filter(|a| a.usuario_id == Some(id))
            .cloned()
            .collect())
    }

    async fn create_appointment(
        &self,
        token: &str,
        request: &NewAppointment,
    ) -> Result<Appointment, ApiError> {
        if self.fail_create.get() {
            return Err(ApiError::Status(500));
        }
        let owner = self.owner(token)?;
        let appointment = Appointment {
            id: Some(self.bump()),
            usuario_id: Some(owner),
            nombre_paciente: request.nombre_paciente.clone(),
            telefono: request.telefono.clone(),
            email: request.email.clone(),
            servicio: request.servicio.clone(),
            fecha_cita: request.fecha_cita.clone(),
            hora_cita: request.hora_cita.clone(),
            estado: AppointmentStatus::Pendiente,
            mensaje: request.mensaje.clone(),
            created_at: None,
        };
        self.appointments.borrow_mut().push(appointment.clone());
        Ok(appointment)
    }

    async fn cancel_appointment(&self, token: &str, id: i64) -> Result<(), ApiError> {
        if self.fail_cancel.get() {
            return Err(ApiError::Status(500));
        }
        let owner = self.owner(token)?;
        let mut appointments = self.appointments.borrow_mut();
        let appointment = appointments
            .iter_mut()
            .find(|a| a.id == Some(id) && a.usuario_id == Some(owner))
            .ok_or(ApiError::Status(404))?;
        appointment.estado = AppointmentStatus::Cancelada;
        Ok(())
    }
}
