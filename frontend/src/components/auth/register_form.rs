use common::requests::{RegisterData, MIN_PASSWORD_LEN};
use common::User;
use log::debug;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::helpers::input_value;
use crate::session::session_of;

#[derive(Properties, PartialEq)]
pub struct RegisterFormProps {
    pub on_switch: Callback<()>,
    pub on_done: Callback<()>,
}

#[derive(Clone, Copy)]
pub enum Field {
    Nombre,
    Apellido,
    Email,
    Telefono,
    Password,
    Confirm,
}

pub enum Msg {
    Set(Field, String),
    TogglePassword,
    Submit,
    Succeeded(User),
    Failed(String),
}

pub struct RegisterForm {
    data: RegisterData,
    telefono: String,
    confirm_password: String,
    show_password: bool,
    error: Option<String>,
    loading: bool,
}

impl Component for RegisterForm {
    type Message = Msg;
    type Properties = RegisterFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            data: RegisterData::default(),
            telefono: String::new(),
            confirm_password: String::new(),
            show_password: false,
            error: None,
            loading: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Set(field, value) => {
                match field {
                    Field::Nombre => self.data.nombre = value,
                    Field::Apellido => self.data.apellido = value,
                    Field::Email => self.data.email = value,
                    Field::Telefono => self.telefono = value,
                    Field::Password => self.data.password = value,
                    Field::Confirm => self.confirm_password = value,
                }
                false
            }
            Msg::TogglePassword => {
                self.show_password = !self.show_password;
                true
            }
            Msg::Submit => {
                if self.loading {
                    return false;
                }
                let mut data = self.data.clone();
                data.telefono = Some(self.telefono.clone());
                // Checked here as well so the message shows without a round trip.
                if let Err(e) = data.validate(&self.confirm_password) {
                    self.error = Some(e.to_string());
                    return true;
                }
                let Some(session) = session_of(ctx) else {
                    debug!("register form rendered outside a session context");
                    return false;
                };
                self.loading = true;
                self.error = None;

                let gate = session.gate.clone();
                let confirm = self.confirm_password.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    match gate.register(&data, &confirm).await {
                        Ok(user) => link.send_message(Msg::Succeeded(user)),
                        Err(e) => link.send_message(Msg::Failed(e.to_string())),
                    }
                });
                true
            }
            Msg::Succeeded(user) => {
                self.loading = false;
                if let Some(session) = session_of(ctx) {
                    session.signed_in(user);
                }
                ctx.props().on_done.emit(());
                false
            }
            Msg::Failed(message) => {
                self.loading = false;
                self.error = Some(message);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_switch = ctx.props().on_switch.clone();
        let password_type = if self.show_password { "text" } else { "password" };
        let field = |f: Field| link.callback(move |e: InputEvent| Msg::Set(f, input_value(&e)));

        html! {
            <form class="auth-form" onsubmit={link.callback(|e: SubmitEvent| {
                e.prevent_default();
                Msg::Submit
            })}>
                <h2>{ "Crear cuenta" }</h2>
                <p>{ "Completa el formulario para comenzar" }</p>

                if let Some(error) = &self.error {
                    <div class="alert alert-error">{ error.clone() }</div>
                }

                <div class="form-row">
                    <div>
                        <label for="nombre">{ "Nombre" }</label>
                        <input id="nombre" name="nombre" type="text" required=true placeholder="Juan"
                               value={self.data.nombre.clone()} oninput={field(Field::Nombre)} />
                    </div>
                    <div>
                        <label for="apellido">{ "Apellido" }</label>
                        <input id="apellido" name="apellido" type="text" required=true placeholder="Pérez"
                               value={self.data.apellido.clone()} oninput={field(Field::Apellido)} />
                    </div>
                </div>

                <label for="email">{ "Correo Electrónico" }</label>
                <input id="email" name="email" type="email" required=true placeholder="tu@email.com"
                       value={self.data.email.clone()} oninput={field(Field::Email)} />

                <label for="telefono">{ "Teléfono (opcional)" }</label>
                <input id="telefono" name="telefono" type="tel" placeholder="555-123-4567"
                       value={self.telefono.clone()} oninput={field(Field::Telefono)} />

                <div class="form-row">
                    <div>
                        <label for="password">{ "Contraseña" }</label>
                        <input id="password" name="password" type={password_type} required=true
                               minlength={MIN_PASSWORD_LEN.to_string()}
                               value={self.data.password.clone()} oninput={field(Field::Password)} />
                    </div>
                    <div>
                        <label for="confirmPassword">{ "Confirmar" }</label>
                        <input id="confirmPassword" type={password_type} required=true
                               value={self.confirm_password.clone()} oninput={field(Field::Confirm)} />
                    </div>
                </div>
                <button type="button" class="link" onclick={link.callback(|_| Msg::TogglePassword)}>
                    <i class="material-icons">{ if self.show_password { "visibility_off" } else { "visibility" } }</i>
                </button>
                <p class="hint">{ format!("Mínimo {} caracteres", MIN_PASSWORD_LEN) }</p>

                <button type="submit" class="btn-primary" disabled={self.loading}>
                    { if self.loading { "Creando cuenta..." } else { "Crear Cuenta" } }
                </button>

                <p class="auth-switch">
                    { "¿Ya tienes cuenta? " }
                    <button type="button" class="link" onclick={Callback::from(move |_| on_switch.emit(()))}>
                        { "Inicia sesión" }
                    </button>
                </p>
            </form>
        }
    }
}
