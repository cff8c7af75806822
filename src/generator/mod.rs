//! Name, logo and branding-kit generation

pub mod domain;
pub mod kit;
pub mod logo;
pub mod name;

pub use domain::{domain_for, simulate_availability};
pub use kit::{synthesize_kit, KitAssembler, BATCH_SIZE, MAX_NAME_ATTEMPTS};
pub use logo::{generate_logo, logo_text};
pub use name::{generate_name, keywords, pick_base_word};
