pub mod history;
pub mod store;

pub use history::{Speaker, Turn};
pub use store::SessionStore;
