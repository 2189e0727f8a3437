pub mod downloads;
pub mod login;

pub use downloads::downloads_page;
pub use login::{login_page, LoginPageVm};
