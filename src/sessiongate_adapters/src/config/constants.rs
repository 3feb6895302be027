pub mod env {
    pub const ENV_PREFIX: &str = "SESSIONGATE";
    pub const ENV_SEPARATOR: &str = "__";
}

pub const CONFIG_FILE: &str = "config/base";

pub mod defaults {
    pub const SESSION_COOKIE_NAME: &str = "session_id";
    pub const SESSION_TTL_SECONDS: u64 = 3600;
    pub const REDIS_HOST_NAME: &str = "127.0.0.1";
    pub const VERIFIER_TIMEOUT_MILLIS: u64 = 5000;
}

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
