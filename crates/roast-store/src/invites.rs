//! Link-based friend introduction.
//!
//! An invite is issued by the current user and may be redeemed any number of
//! times; there is no expiry.  Redeeming adds the issuer to the local friends
//! list only; the issuer does not gain the redeemer.

use roast_shared::invite::invite_link;
use url::Url;

use crate::collections::Invites;
use crate::error::Result;
use crate::models::Invite;
use crate::store::RoastStore;

impl RoastStore {
    pub fn invites(&self) -> Vec<Invite> {
        self.read::<Invites>()
    }

    /// Look an invite up by exact code.
    pub fn find_invite(&self, code: &str) -> Option<Invite> {
        self.invites().into_iter().find(|i| i.code == code)
    }

    /// Issue a new invite for the current user.  Returns `None` when no user
    /// is set up.
    pub fn generate_invite_code(&self) -> Result<Option<String>> {
        let Some(user) = self.current_user() else {
            tracing::debug!("invite requested without a current user");
            return Ok(None);
        };

        let mut invites = self.load::<Invites>()?;
        let code = self.next_code();
        invites.push(Invite {
            code: code.clone(),
            created_by: user.username,
            created_at: self.now(),
            used_by: Vec::new(),
        });

        self.write::<Invites>(&invites)?;
        tracing::debug!(code = %code, "invite issued");
        Ok(Some(code))
    }

    /// Issue a new invite and return the shareable link for it.
    pub fn invite_link(&self) -> Result<Option<Url>> {
        Ok(self
            .generate_invite_code()?
            .map(|code| invite_link(self.app_url(), &code)))
    }

    /// Redeem `code` on behalf of `redeemer`.
    ///
    /// Unknown codes return `false` and change nothing.  Otherwise the
    /// issuer goes through [`RoastStore::add_friend`] (so duplicates are
    /// still suppressed) and `redeemer` is appended to the invite's
    /// `used_by`, repeats included.
    pub fn redeem_invite(&self, code: &str, redeemer: &str) -> Result<bool> {
        let mut invites = self.load::<Invites>()?;
        let Some(invite) = invites.iter_mut().find(|i| i.code == code) else {
            tracing::debug!(code, "invite code not found");
            return Ok(false);
        };

        self.add_friend(&invite.created_by)?;
        invite.used_by.push(redeemer.to_string());

        self.write::<Invites>(&invites)?;
        tracing::info!(code, redeemer, "invite redeemed");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use crate::store::test_support::store;

    #[test]
    fn issuing_requires_a_user() {
        let (store, _) = store();
        assert_eq!(store.generate_invite_code().unwrap(), None);
        assert_eq!(store.invite_link().unwrap(), None);
        assert!(store.invites().is_empty());
    }

    #[test]
    fn link_embeds_code_as_query_parameter() {
        let (store, _) = store();
        store.set_current_user("Ana").unwrap();
        let link = store.invite_link().unwrap().unwrap();
        assert_eq!(link.as_str(), "http://localhost:3000/?invite=AAAAAA");

        let invite = store.find_invite("AAAAAA").unwrap();
        assert_eq!(invite.created_by, "Ana");
        assert!(invite.used_by.is_empty());
    }

    #[test]
    fn round_trip_adds_issuer_once() {
        let (store, _) = store();
        store.set_current_user("Ana").unwrap();
        let code = store.generate_invite_code().unwrap().unwrap();

        store.set_current_user("Ben").unwrap();
        assert!(store.redeem_invite(&code, "Ben").unwrap());
        assert!(store.redeem_invite(&code, "Ben").unwrap());

        let friends = store.friends();
        assert_eq!(friends.len(), 1);
        assert_eq!(friends[0].name, "Ana");
        assert_eq!(store.find_invite(&code).unwrap().used_by, vec!["Ben", "Ben"]);
    }

    #[test]
    fn unknown_code_mutates_nothing() {
        let (store, _) = store();
        store.set_current_user("Ana").unwrap();
        store.generate_invite_code().unwrap();
        let before = store.invites();

        assert!(!store.redeem_invite("ZZZZZZ", "Ben").unwrap());
        assert!(!store.redeem_invite("aaaaaa", "Ben").unwrap());
        assert_eq!(store.invites(), before);
        assert!(store.friends().is_empty());
    }

    #[test]
    fn configured_app_url_is_used() {
        let (store, _) = store();
        let store = store.with_app_url(url::Url::parse("https://roast.example/arena?tab=x").unwrap());
        store.set_current_user("Ana").unwrap();
        let link = store.invite_link().unwrap().unwrap();
        assert_eq!(link.as_str(), "https://roast.example/arena?invite=AAAAAA");
    }
}
