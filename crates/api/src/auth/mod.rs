pub mod password;
pub mod verifier;
