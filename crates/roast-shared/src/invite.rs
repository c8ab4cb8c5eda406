use std::collections::VecDeque;
use std::sync::Mutex;

use rand::Rng;
use url::Url;

use crate::constants::{INVITE_CODE_ALPHABET, INVITE_CODE_LEN, INVITE_QUERY_PARAM};
use crate::error::InviteLinkError;

/// Source of invite codes.
///
/// Codes are not checked for collisions against existing invites.
pub trait CodeGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Six uppercase alphanumeric characters from the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        let mut rng = rand::thread_rng();
        (0..INVITE_CODE_LEN)
            .map(|_| INVITE_CODE_ALPHABET[rng.gen_range(0..INVITE_CODE_ALPHABET.len())] as char)
            .collect()
    }
}

/// Replays a fixed list of codes, then falls back to random ones.
#[derive(Debug, Default)]
pub struct SequenceCodeGenerator {
    codes: Mutex<VecDeque<String>>,
}

impl SequenceCodeGenerator {
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            codes: Mutex::new(codes.into_iter().map(Into::into).collect()),
        }
    }
}

impl CodeGenerator for SequenceCodeGenerator {
    fn generate(&self) -> String {
        let next = self
            .codes
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .pop_front();
        next.unwrap_or_else(|| RandomCodeGenerator.generate())
    }
}

/// Build `<origin><path>?invite=<code>` from the configured app URL.
///
/// Any query string or fragment already on `base` is dropped.
pub fn invite_link(base: &Url, code: &str) -> Url {
    let mut link = base.clone();
    link.set_fragment(None);
    link.set_query(None);
    link.query_pairs_mut().append_pair(INVITE_QUERY_PARAM, code);
    link
}

/// Extract the invite code from a shared link, or accept a bare code as-is.
pub fn code_from_link(input: &str) -> Result<String, InviteLinkError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(InviteLinkError::EmptyCode);
    }

    if !input.contains("://") {
        return Ok(input.to_string());
    }

    let link = Url::parse(input)?;
    let code = link
        .query_pairs()
        .find(|(key, _)| key == INVITE_QUERY_PARAM)
        .map(|(_, value)| value.into_owned())
        .ok_or(InviteLinkError::MissingCode)?;

    if code.is_empty() {
        return Err(InviteLinkError::EmptyCode);
    }
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_code_shape() {
        for _ in 0..50 {
            let code = RandomCodeGenerator.generate();
            assert_eq!(code.len(), INVITE_CODE_LEN);
            assert!(code
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_sequence_generator_replays_then_falls_back() {
        let codes = SequenceCodeGenerator::new(["ABC123", "XYZ789"]);
        assert_eq!(codes.generate(), "ABC123");
        assert_eq!(codes.generate(), "XYZ789");
        assert_eq!(codes.generate().len(), INVITE_CODE_LEN);
    }

    #[test]
    fn test_link_drops_existing_query() {
        let base = Url::parse("https://roast.example/arena?tab=invite#top").unwrap();
        let link = invite_link(&base, "K9Q2ZT");
        assert_eq!(link.as_str(), "https://roast.example/arena?invite=K9Q2ZT");
    }

    #[test]
    fn test_code_from_link_and_bare_code() {
        assert_eq!(
            code_from_link("https://roast.example/?invite=K9Q2ZT").unwrap(),
            "K9Q2ZT"
        );
        assert_eq!(code_from_link("  K9Q2ZT ").unwrap(), "K9Q2ZT");
    }

    #[test]
    fn test_code_from_link_errors() {
        assert_eq!(
            code_from_link("https://roast.example/?tab=1"),
            Err(InviteLinkError::MissingCode)
        );
        assert_eq!(code_from_link("   "), Err(InviteLinkError::EmptyCode));
        assert!(matches!(
            code_from_link("http://[::1"),
            Err(InviteLinkError::InvalidLink(_))
        ));
    }
}
