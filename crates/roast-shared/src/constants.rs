/// Application name
pub const APP_NAME: &str = "Roast Arena";

/// Length of a generated invite code
pub const INVITE_CODE_LEN: usize = 6;

/// Alphabet invite codes are drawn from (uppercase base-36)
pub const INVITE_CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Query parameter carrying the invite code in a shared link
pub const INVITE_QUERY_PARAM: &str = "invite";

/// Placeholder substituted with the target's name in roast templates
pub const NAME_PLACEHOLDER: &str = "{name}";

/// Sender recorded on messages sent while no user is set up
pub const ANONYMOUS_SENDER: &str = "Anonymous";

/// App origin and path used to build invite links when none is configured
pub const DEFAULT_APP_URL: &str = "http://localhost:3000/";

/// Minimum username length accepted during setup
pub const MIN_USERNAME_LEN: usize = 2;
