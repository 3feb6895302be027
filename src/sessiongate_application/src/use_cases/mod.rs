pub mod login;
pub mod session_authenticator;
pub mod session_status;

#[cfg(test)]
pub(crate) mod test_support;
