//! Static catalog of medical services offered by the clinic.

/// One entry of the service catalog. `icon` is a Material Icons ligature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        id: "fisioterapia",
        name: "Fisioterapia",
        description: "Tratamientos especializados para la recuperación de lesiones, rehabilitación deportiva y mejora de la movilidad.",
        icon: "accessibility_new",
    },
    Service {
        id: "medicina-general",
        name: "Medicina General",
        description: "Consultas médicas integrales para el diagnóstico, tratamiento y prevención de enfermedades.",
        icon: "medical_services",
    },
    Service {
        id: "cirugia",
        name: "Cirugía",
        description: "Procedimientos quirúrgicos realizados por cirujanos especializados con equipamiento de última generación.",
        icon: "content_cut",
    },
    Service {
        id: "entrenamiento-funcional",
        name: "Entrenamiento Funcional",
        description: "Programas personalizados de ejercicio físico para mejorar tu condición y alcanzar tus metas.",
        icon: "fitness_center",
    },
    Service {
        id: "odontologia",
        name: "Odontología",
        description: "Cuidado dental completo incluyendo limpieza, tratamientos estéticos y procedimientos especializados.",
        icon: "sentiment_satisfied",
    },
    Service {
        id: "podologia",
        name: "Podología",
        description: "Diagnóstico y tratamiento de afecciones del pie, uñas encarnadas, callos y cuidado integral podológico.",
        icon: "directions_walk",
    },
];

pub fn find_service(id: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|s| s.id == id)
}

/// Display name for an appointment's `servicio`.
///
/// Older bookings may carry the service name instead of its id; anything
/// not in the catalog is shown as-is.
pub fn service_label(servicio: &str) -> &str {
    find_service(servicio).map(|s| s.name).unwrap_or(servicio)
}
