pub mod badge;
pub mod button;
pub mod contest_card;
pub mod footer;
pub mod navbar;

pub use badge::StatusBadge;
pub use button::{Button, ButtonVariant};
pub use contest_card::ContestCard;
pub use footer::Footer;
pub use navbar::Navbar;
