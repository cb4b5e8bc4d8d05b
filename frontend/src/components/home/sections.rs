//! Static sections of the landing page.

use chrono::Datelike;
use common::{Service, SERVICES};
use yew::prelude::*;

const FEATURES: [(&str, &str, &str); 4] = [
    (
        "favorite",
        "Atención Personalizada",
        "Cada paciente es único y merece un tratamiento individualizado y de calidad.",
    ),
    (
        "workspace_premium",
        "Profesionales Certificados",
        "Contamos con especialistas altamente calificados y con años de experiencia.",
    ),
    (
        "groups",
        "Equipo Multidisciplinario",
        "Trabajo en conjunto de diferentes especialidades para tu bienestar integral.",
    ),
    (
        "schedule",
        "Horarios Flexibles",
        "Adaptamos nuestros horarios a tus necesidades para facilitar tu atención.",
    ),
];

pub fn hero(on_services: Callback<MouseEvent>, on_book: Callback<MouseEvent>) -> Html {
    html! {
        <div class="hero">
            <h1>{ "Tu salud en las mejores manos" }</h1>
            <p>
                { "Tu salud y bienestar son nuestra prioridad. Ofrecemos atención médica especializada con profesionales altamente calificados." }
            </p>
            <div class="hero-actions">
                <button class="btn-primary" onclick={on_services}>{ "Conoce nuestros servicios" }</button>
                <button class="btn-secondary" onclick={on_book}>{ "Agenda tu cita" }</button>
            </div>
        </div>
    }
}

fn service_card(service: &Service) -> Html {
    html! {
        <article class="service-card" key={service.id}>
            <i class="material-icons">{ service.icon }</i>
            <h3>{ service.name }</h3>
            <p>{ service.description }</p>
        </article>
    }
}

pub fn services() -> Html {
    html! {
        <div class="services">
            <h2>{ "Nuestros Servicios" }</h2>
            <p>{ "Ofrecemos atención médica integral con especialistas dedicados a tu bienestar y salud" }</p>
            <div class="service-grid">
                { for SERVICES.iter().map(service_card) }
            </div>
        </div>
    }
}

pub fn about() -> Html {
    html! {
        <div class="about">
            <h2>{ "¿Por qué elegir Clínica Wenka?" }</h2>
            <p>{ "Somos tu mejor opción en atención médica integral con más de 10 años de experiencia" }</p>
            <div class="feature-grid">
                { for FEATURES.iter().map(|(icon, title, description)| html! {
                    <div class="feature">
                        <i class="material-icons">{ *icon }</i>
                        <h4>{ *title }</h4>
                        <p>{ *description }</p>
                    </div>
                }) }
            </div>
        </div>
    }
}

pub fn footer() -> Html {
    let year = chrono::Local::now().year();
    html! {
        <footer class="site-footer" id="contacto">
            <div class="footer-columns">
                <div>
                    <h3>{ "Clínica Wenka" }</h3>
                    <p>{ "Tu salud y bienestar son nuestra prioridad." }</p>
                </div>
                <div>
                    <h4>{ "Servicios" }</h4>
                    <ul>
                        { for SERVICES.iter().map(|s| html! {
                            <li key={s.id}><a href="#servicios">{ s.name }</a></li>
                        }) }
                    </ul>
                </div>
                <div>
                    <h4>{ "Enlaces" }</h4>
                    <ul>
                        <li><a href="#inicio">{ "Inicio" }</a></li>
                        <li><a href="#servicios">{ "Servicios" }</a></li>
                        <li><a href="#nosotros">{ "Nosotros" }</a></li>
                    </ul>
                </div>
            </div>
            <p class="copyright">{ format!("© {} Clínica Wenka. Todos los derechos reservados.", year) }</p>
        </footer>
    }
}
