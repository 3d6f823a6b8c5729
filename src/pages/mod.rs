pub mod contact;
pub mod home;
pub mod products;

pub use contact::Contact;
pub use home::Home;
pub use products::Products;
