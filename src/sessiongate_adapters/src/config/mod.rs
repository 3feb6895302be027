pub mod constants;
pub mod settings;

pub use constants::*;
pub use settings::{
    AllowedOrigins, ApplicationSettings, SessionGateSettings, SessionSettings, StoreBackend,
    StoreSettings, VerifierBackend, VerifierSettings,
};
