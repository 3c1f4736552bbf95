pub const MAIL_SUBJECT: &str = "DynDns Warning";

/// Display name on the sender mailbox.
pub const SENDER_NAME: &str = "DynDns Watchdog";

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";
