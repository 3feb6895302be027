mod helpers;
mod login;
mod session;
