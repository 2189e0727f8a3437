pub mod card;
pub mod downloads;
pub mod login_modal;

pub use card::card;
pub use downloads::{archive_buttons, downloads_table};
pub use login_modal::{login_modal, login_open_button};
