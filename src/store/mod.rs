pub mod token;
pub mod users;

pub use token::TokenStore;
pub use users::UserStore;
