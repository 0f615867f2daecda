// Portfolio page sections

/// Version string shown in the footer and the console banner
pub const VERSION: &str = "v0.3.2";

/// Whose portfolio this is
pub const OWNER: &str = "Alex Moreau";

mod about;
mod behaviors;
mod contact;
mod easter_eggs;
mod experience;
mod footer;
mod hero;
mod nav;
mod projects;

pub use about::About;
pub use behaviors::Behaviors;
pub use contact::Contact;
pub use easter_eggs::EasterEggs;
pub use experience::Experience;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use projects::Projects;
