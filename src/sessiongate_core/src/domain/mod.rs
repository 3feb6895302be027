pub mod credentials;
pub mod login_result;
pub mod password;
pub mod session_id;
pub mod session_state;
pub mod username;
