use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Language::Es => Language::En,
            Language::En => Language::Es,
        }
    }

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::Es => "ES",
            Language::En => "EN",
        }
    }

    #[must_use]
    pub fn strings(self) -> &'static Strings {
        match self {
            Language::Es => &ES,
            Language::En => &EN,
        }
    }
}

/// Every user-facing label the page and the palette draw.
#[derive(Debug, PartialEq, Eq)]
pub struct Strings {
    pub nav_home: &'static str,
    pub nav_work: &'static str,
    pub nav_stack: &'static str,
    pub nav_contact: &'static str,

    pub group_navigation: &'static str,
    pub group_actions: &'static str,
    pub download_cv: &'static str,
    pub copy_email: &'static str,
    pub copied: &'static str,

    pub palette_title: &'static str,
    pub palette_placeholder: &'static str,
    pub palette_no_results: &'static str,
    pub palette_navigate: &'static str,
    pub palette_select: &'static str,
    pub palette_footer: &'static str,
    pub search_button: &'static str,

    pub hero_badge: &'static str,
    pub projects_title: &'static str,
    pub projects_subtitle: &'static str,
    pub stack_title: &'static str,
    pub contact_title: &'static str,
    pub contact_cta: &'static str,
}

pub static ES: Strings = Strings {
    nav_home: "Inicio",
    nav_work: "Proyectos",
    nav_stack: "Stack",
    nav_contact: "Contacto",

    group_navigation: "Navegación",
    group_actions: "Acciones",
    download_cv: "Descargar CV",
    copy_email: "Copiar Email",
    copied: "¡Copiado al portapapeles!",

    palette_title: "MENÚ DE COMANDOS",
    palette_placeholder: "¿A dónde vamos? (ej. Proyectos, Stack, GitHub...)",
    palette_no_results: "No se encontraron resultados.",
    palette_navigate: "navegar",
    palette_select: "elegir",
    palette_footer: "Menú para usuarios avanzados",
    search_button: "Buscar",

    hero_badge: "Disponible para nuevos desafíos | Open to Work",
    projects_title: "Casos de Estudio",
    projects_subtitle: "Proyectos desarrollados desde cero para resolver problemas reales.",
    stack_title: "Mi Stack Técnico",
    contact_title: "Contacto",
    contact_cta: "¿Tenés un desafío técnico? Transformémoslo en una solución.",
};

pub static EN: Strings = Strings {
    nav_home: "Home",
    nav_work: "Work",
    nav_stack: "Stack",
    nav_contact: "Contact",

    group_navigation: "Navigation",
    group_actions: "Actions",
    download_cv: "Download CV",
    copy_email: "Copy Email",
    copied: "Copied to clipboard!",

    palette_title: "COMMAND PALETTE",
    palette_placeholder: "Where to? (e.g., Projects, Stack, GitHub...)",
    palette_no_results: "No results found.",
    palette_navigate: "navigate",
    palette_select: "select",
    palette_footer: "Power User Menu",
    search_button: "Search",

    hero_badge: "Available for new challenges | Open to Work",
    projects_title: "Case Studies",
    projects_subtitle: "Projects built from scratch to solve real-world problems.",
    stack_title: "Technical Arsenal",
    contact_title: "Contact",
    contact_cta: "Have a technical challenge? Let's turn it into a solution.",
};
