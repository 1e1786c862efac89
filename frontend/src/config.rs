use log::Level;

/// Destination for the contact form.
pub const CONTACT_WHATSAPP_NUMBER: &str = "56991477863";

/// Destination for the per-course "quick inquiry" buttons.
pub const COURSE_INQUIRY_WHATSAPP_NUMBER: &str = "56991487863";

pub const WHATSAPP_BASE_URL: &str = "https://wa.me";

/// Country code put into an empty phone field the first time it gains focus.
pub const PHONE_PREFIX: &str = "+56 ";

/// How long the "redirecting" confirmation stays up before the form resets.
pub const RESET_DELAY_MS: u32 = 3000;

/// Offerings with this many free slots or fewer get the "Últimos cupos" badge.
pub const LOW_AVAILABILITY_THRESHOLD: u32 = 5;

/// Select value meaning "no filter".
pub const ALL: &str = "all";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running `trunk serve` locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
