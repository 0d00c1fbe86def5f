pub mod contact;
pub mod ping;
