//! Static copy for the brochure sections.

pub struct CourseCard {
    pub id: &'static str,
    pub name: &'static str,
    pub objectives: &'static [&'static str],
    pub duration: &'static str,
    pub modality: &'static str,
}

pub struct GalleryImage {
    pub id: &'static str,
    pub src: &'static str,
    pub alt: &'static str,
    pub category: &'static str,
    pub wide: bool,
    pub tall: bool,
}

pub struct Pillar {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub quote: &'static str,
    pub rating: u8,
}

impl Testimonial {
    /// One filled star per rating point.
    pub fn stars(&self) -> String {
        "★".repeat(usize::from(self.rating))
    }

    /// "role · company", or whichever part exists.
    pub fn byline(&self) -> Option<String> {
        match (self.role.is_empty(), self.company.is_empty()) {
            (true, true) => None,
            (false, true) => Some(self.role.to_string()),
            (true, false) => Some(self.company.to_string()),
            (false, false) => Some(format!("{} · {}", self.role, self.company)),
        }
    }
}

pub struct Instructor {
    pub id: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub credentials: &'static [&'static str],
    pub image: &'static str,
}

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const COURSES: &[CourseCard] = &[
    CourseCard {
        id: "svb",
        name: "Soporte Vital Básico (SVB)",
        objectives: &["Reconoce paro cardíaco", "Inicia RCP de alta calidad", "Integra DEA con seguridad"],
        duration: "8 horas",
        modality: "Presencial",
    },
    CourseCard {
        id: "trauma",
        name: "Trauma",
        objectives: &["Control de hemorragias", "Manejo inicial", "Evaluación rápida y priorización"],
        duration: "16 horas",
        modality: "Presencial",
    },
    CourseCard {
        id: "inmovilizacion",
        name: "Inmovilización Selectiva",
        objectives: &["Técnicas de inmovilización", "Evaluación de lesiones", "Protocolos de seguridad"],
        duration: "12 horas",
        modality: "Presencial",
    },
    CourseCard {
        id: "primeros-auxilios",
        name: "Primeros Auxilios",
        objectives: &[
            "Atención inicial de emergencias",
            "Manejo de heridas y quemaduras",
            "Situaciones de emergencia comunes",
        ],
        duration: "8 horas",
        modality: "Presencial",
    },
    CourseCard {
        id: "hemorragias",
        name: "Control de Hemorragias",
        objectives: &["Identificación de hemorragias", "Técnicas de control", "Uso de torniquete"],
        duration: "6 horas",
        modality: "Presencial",
    },
    CourseCard {
        id: "vvp",
        name: "Canalización de Vías Venosas Periféricas",
        objectives: &["Asepsia y anatomía aplicada", "Técnica segura", "Complicaciones y prevención"],
        duration: "12 horas",
        modality: "Presencial",
    },
];

pub const GALLERY: &[GalleryImage] = &[
    GalleryImage { id: "1", src: "/img1.webp", alt: "Práctica de RCP en maniquí", category: "Soporte Vital Básico", wide: true, tall: true },
    GalleryImage { id: "2", src: "/img2.webp", alt: "Estudiantes en práctica de primeros auxilios", category: "Primeros Auxilios", wide: false, tall: false },
    GalleryImage { id: "3", src: "/img3.webp", alt: "Instructor enseñando técnicas de emergencia", category: "Capacitación", wide: false, tall: false },
    GalleryImage { id: "6", src: "/img6.webp", alt: "Equipo de estudiantes en simulación", category: "Trauma", wide: false, tall: false },
    GalleryImage { id: "7", src: "/img7.webp", alt: "Control de hemorragia", category: "Control de Hemorragia", wide: true, tall: false },
    GalleryImage { id: "5", src: "/img5.webp", alt: "Práctica de canalización venosa", category: "Vías Venosas", wide: false, tall: true },
    GalleryImage { id: "8", src: "/img8.webp", alt: "Técnicas de inmovilización", category: "Inmovilización", wide: false, tall: false },
    GalleryImage { id: "9", src: "/img9.webp", alt: "Práctica de inmovilización", category: "Inmovilización", wide: false, tall: false },
];

pub const PILLARS: &[Pillar] = &[
    Pillar {
        title: "Simulación con casos reales",
        description: "Entrena en escenarios que imitan el estrés real, preparándote para situaciones críticas del día a día.",
    },
    Pillar {
        title: "Instructor clínico activo",
        description: "Aprende de profesionales con experiencia en urgencias reales, que llevan la teoría a la práctica.",
    },
    Pillar {
        title: "Feedback personalizado 1:1",
        description: "Recibe retroalimentación clínica accionable que mejora tu técnica y toma de decisiones.",
    },
    Pillar {
        title: "Evaluación práctica",
        description: "Demuestra tus competencias en evaluaciones hands-on que certifican tu nivel de preparación.",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Marcela Vallejos",
        role: "",
        company: "",
        quote: "Excelentes profesionales. 100% recomendados. Enseñan de manera clara, sencilla y práctica, lo que permite aplicar de inmediato los conocimientos en el área de la salud. Una experiencia de aprendizaje realmente valiosa.",
        rating: 5,
    },
    Testimonial {
        name: "Carlos Pérez",
        role: "Paramédico",
        company: "SAMU Metropolitano",
        quote: "Instructores con experiencia real que te enseñan lo que realmente importa en terreno.",
        rating: 5,
    },
    Testimonial {
        name: "Ana Martínez",
        role: "Enfermera",
        company: "Clínica Las Condes",
        quote: "El mejor curso de trauma que he tomado. Simulaciones muy realistas y feedback valioso.",
        rating: 5,
    },
];

pub const INSTRUCTORS: &[Instructor] = &[
    Instructor {
        id: "1",
        name: "Instructor Principal",
        title: "Especialista Certificado en Soporte Vital y Emergencias",
        credentials: &[
            "Instructor Basic Life Support - American Heart Association (AHA)",
            "Instructor NAEMT - PHTLS, TECC, AHDR",
            "Instructor ECSI - BLS, WFA, WAFA",
            "Combat Casualty Care Course - Armada de Chile",
            "Sistema de Gestión de Calidad ISO 9001",
        ],
        image: "/instructor1.webp",
    },
    Instructor {
        id: "2",
        name: "Instructor Certificado",
        title: "Especialista en Emergencias y Rescate",
        credentials: &[
            "Instructor RCP",
            "Control de Hemorragia",
            "Uso de Equipos DEA",
            "Primeros Auxilios",
            "Instructor GRIMP Nivel 3",
            "Instructor Rescate en Mina Subterránea",
        ],
        image: "/instructor2.webp",
    },
];

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "¿Cuáles son los requisitos para inscribirse?",
        answer: "Los requisitos varían según el curso. Para cursos básicos como SVB y Primeros Auxilios, no se requiere experiencia previa. Para cursos avanzados como VVP, se requiere ser profesional o técnico de la salud.",
    },
    FaqEntry {
        question: "¿Qué incluye el curso?",
        answer: "Todos nuestros cursos incluyen: material teórico descargable, práctica con simuladores y maniquíes, evaluación teórico-práctica, certificado digital y físico, y acceso a contenido de repaso por 6 meses.",
    },
    FaqEntry {
        question: "¿Ofrecen cursos in-company para empresas?",
        answer: "Sí, diseñamos programas a medida para empresas, brigadas de emergencia y organizaciones. Incluimos diagnóstico de brechas, logística in-situ y reportes para auditorías. Contacta a nuestro equipo comercial.",
    },
    FaqEntry {
        question: "¿Qué debo llevar el día del curso?",
        answer: "Trae ropa cómoda que permita movimiento (para prácticas en el suelo), calzado cerrado, agua y snacks. Nosotros proporcionamos todo el material médico y simuladores.",
    },
    FaqEntry {
        question: "¿Puedo reprogramar mi inscripción?",
        answer: "Sí, puedes reprogramar hasta 48 horas antes del inicio del curso sin costo adicional. Reprogramaciones con menos de 48 horas tienen un cargo del 20% del valor del curso.",
    },
    FaqEntry {
        question: "¿Tienen política de devolución?",
        answer: "Ofrecemos devolución del 100% si cancelas con más de 7 días de anticipación. Entre 7 y 3 días: 50% de devolución. Menos de 3 días: no hay devolución, pero puedes reprogramar.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let courses: HashSet<_> = COURSES.iter().map(|c| c.id).collect();
        assert_eq!(courses.len(), COURSES.len());
        let images: HashSet<_> = GALLERY.iter().map(|g| g.id).collect();
        assert_eq!(images.len(), GALLERY.len());
        let instructors: HashSet<_> = INSTRUCTORS.iter().map(|i| i.id).collect();
        assert_eq!(instructors.len(), INSTRUCTORS.len());
    }

    #[test]
    fn ratings_fit_five_stars() {
        assert!(TESTIMONIALS.iter().all(|t| (1..=5).contains(&t.rating)));
    }

    #[test]
    fn stars_follow_rating() {
        assert_eq!(TESTIMONIALS[0].stars(), "★★★★★");
        assert!(TESTIMONIALS.iter().all(|t| t.stars().chars().count() == usize::from(t.rating)));
    }

    #[test]
    fn byline_skips_missing_parts() {
        assert_eq!(TESTIMONIALS[0].byline(), None);
        assert_eq!(TESTIMONIALS[1].byline().as_deref(), Some("Paramédico · SAMU Metropolitano"));
    }
}
