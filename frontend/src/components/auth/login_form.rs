use common::User;
use log::debug;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::helpers::input_value;
use crate::session::session_of;

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    pub on_switch: Callback<()>,
    pub on_done: Callback<()>,
}

pub enum Msg {
    SetEmail(String),
    SetPassword(String),
    Submit,
    Succeeded(User),
    Failed(String),
}

pub struct LoginForm {
    email: String,
    password: String,
    error: Option<String>,
    loading: bool,
}

impl Component for LoginForm {
    type Message = Msg;
    type Properties = LoginFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            error: None,
            loading: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetEmail(email) => {
                self.email = email;
                false
            }
            Msg::SetPassword(password) => {
                self.password = password;
                false
            }
            Msg::Submit => {
                if self.loading {
                    return false;
                }
                let Some(session) = session_of(ctx) else {
                    debug!("login form rendered outside a session context");
                    return false;
                };
                self.loading = true;
                self.error = None;

                let gate = session.gate.clone();
                let (email, password) = (self.email.clone(), self.password.clone());
                let link = ctx.link().clone();
                spawn_local(async move {
                    match gate.login(&email, &password).await {
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

        html! {
            <form class="auth-form" onsubmit={link.callback(|e: SubmitEvent| {
                e.prevent_default();
                Msg::Submit
            })}>
                <h2>{ "Iniciar sesión" }</h2>
                <p>{ "Accede para ver y agendar tus citas" }</p>

                if let Some(error) = &self.error {
                    <div class="alert alert-error">{ error.clone() }</div>
                }

                <label for="login-email">{ "Correo Electrónico" }</label>
                <input id="login-email" name="email" type="email" required=true
                       placeholder="tu@email.com"
                       value={self.email.clone()}
                       oninput={link.callback(|e: InputEvent| Msg::SetEmail(input_value(&e)))} />

                <label for="login-password">{ "Contraseña" }</label>
                <input id="login-password" name="password" type="password" required=true
                       value={self.password.clone()}
                       oninput={link.callback(|e: InputEvent| Msg::SetPassword(input_value(&e)))} />

                <button type="submit" class="btn-primary" disabled={self.loading}>
                    { if self.loading { "Ingresando..." } else { "Iniciar Sesión" } }
                </button>

                <p class="auth-switch">
                    { "¿No tienes cuenta? " }
                    <button type="button" class="link" onclick={Callback::from(move |_| on_switch.emit(()))}>
                        { "Regístrate" }
                    </button>
                </p>
            </form>
        }
    }
}
