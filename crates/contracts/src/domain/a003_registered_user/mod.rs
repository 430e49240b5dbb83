pub mod aggregate;

pub use aggregate::{RegisteredUser, RegisteredUserDto};
