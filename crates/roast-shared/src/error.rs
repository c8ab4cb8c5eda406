use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InviteLinkError {
    #[error("Invalid invite link: {0}")]
    InvalidLink(#[from] url::ParseError),

    #[error("Invite link has no `invite` parameter")]
    MissingCode,

    #[error("Invite code is empty")]
    EmptyCode,
}

/// Input rejected by a presentation surface before it reaches the store.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a username")]
    EmptyUsername,

    #[error("Username must be at least {min} characters")]
    UsernameTooShort { min: usize },

    #[error("Enter a friend's name")]
    EmptyFriendName,

    #[error("Enter a roast!")]
    EmptyRoast,

    #[error("Include {{name}} placeholder in your roast!")]
    MissingPlaceholder,
}
