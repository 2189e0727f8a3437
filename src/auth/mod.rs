pub mod credentials;
pub mod form;
pub mod gate;
pub mod login;
pub mod token;

pub use credentials::Credentials;
pub use form::{LoginForm, SubmitOutcome};
pub use gate::SubmitGate;
pub use login::{HttpLoginApi, LoginApi, LoginError};
pub use token::generate_form_id;
