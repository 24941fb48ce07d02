pub use super::client::Entity as Client;
