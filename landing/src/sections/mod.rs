// Landing page sections
// Built by the Heplink team

mod approach;
mod buttons;
mod careers;
mod community;
mod contact;
mod cursor;
mod footer;
mod hero;
mod insights;
mod media;
mod nav;
mod services;
mod work;

pub use approach::Approach;
pub use buttons::{Button, GhostLink, Tone};
pub use careers::Careers;
pub use community::Community;
pub use contact::Contact;
pub use cursor::CursorDot;
pub use footer::Footer;
pub use hero::Hero;
pub use insights::Insights;
pub use media::CardImage;
pub use nav::{Logo, Nav};
pub use services::Services;
pub use work::Work;
