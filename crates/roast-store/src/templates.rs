//! Custom roast templates and roast generation.
//!
//! The store performs no validation here: callers are responsible for
//! checking that a template is non-blank and carries `{name}`
//! (see [`roast_shared::validation::validate_template`]).

use roast_shared::templates::{personalize, pick, DEFAULT_TEMPLATES};

use crate::collections::CustomRoasts;
use crate::error::Result;
use crate::store::RoastStore;

impl RoastStore {
    /// Custom templates in insertion order.
    pub fn custom_roasts(&self) -> Vec<String> {
        self.read::<CustomRoasts>()
    }

    pub fn add_custom_roast(&self, text: &str) -> Result<()> {
        let mut roasts = self.load::<CustomRoasts>()?;
        roasts.push(text.to_string());
        self.write::<CustomRoasts>(&roasts)?;
        tracing::debug!(total = roasts.len(), "custom roast added");
        Ok(())
    }

    /// Remove the template at `index`; later templates shift down by one.
    ///
    /// An out-of-range index removes nothing but still rewrites the list.
    pub fn remove_custom_roast(&self, index: usize) -> Result<Option<String>> {
        let mut roasts = self.load::<CustomRoasts>()?;
        let removed = (index < roasts.len()).then(|| roasts.remove(index));
        self.write::<CustomRoasts>(&roasts)?;
        tracing::debug!(index, removed = removed.is_some(), "custom roast removed");
        Ok(removed)
    }

    /// Built-in templates followed by the custom ones.
    pub fn roast_templates(&self) -> Vec<String> {
        DEFAULT_TEMPLATES
            .iter()
            .map(|t| t.to_string())
            .chain(self.custom_roasts())
            .collect()
    }

    /// Personalise a random template for `target` without recording anything.
    pub fn random_roast(&self, target: &str) -> String {
        let templates = self.roast_templates();
        let template = pick(&templates, &mut rand::thread_rng()).unwrap_or(DEFAULT_TEMPLATES[0]);
        personalize(template, target)
    }

    /// Personalise a random template for `target` and count it on the
    /// leaderboard.
    pub fn generate_roast(&self, target: &str) -> Result<String> {
        let roast = self.random_roast(target);
        self.add_roast(target)?;
        Ok(roast)
    }
}

#[cfg(test)]
mod tests {
    use roast_shared::templates::DEFAULT_TEMPLATES;

    use crate::store::test_support::store;

    #[test]
    fn removal_reindexes() {
        let (store, _) = store();
        for t in ["X", "Y", "Z"] {
            store.add_custom_roast(t).unwrap();
        }

        assert_eq!(store.remove_custom_roast(1).unwrap().as_deref(), Some("Y"));
        assert_eq!(store.custom_roasts(), vec!["X", "Z"]);

        assert_eq!(store.remove_custom_roast(1).unwrap().as_deref(), Some("Z"));
        assert_eq!(store.custom_roasts(), vec!["X"]);
    }

    #[test]
    fn out_of_range_removal_is_a_no_op() {
        let (store, _) = store();
        store.add_custom_roast("{name} again").unwrap();
        assert_eq!(store.remove_custom_roast(5).unwrap(), None);
        assert_eq!(store.custom_roasts().len(), 1);
    }

    #[test]
    fn add_does_not_validate() {
        let (store, _) = store();
        store.add_custom_roast("no placeholder at all").unwrap();
        assert_eq!(store.custom_roasts(), vec!["no placeholder at all"]);
    }

    #[test]
    fn templates_put_custom_after_defaults() {
        let (store, _) = store();
        store.add_custom_roast("{name} forgot the snacks").unwrap();
        let all = store.roast_templates();
        assert_eq!(all.len(), DEFAULT_TEMPLATES.len() + 1);
        assert_eq!(all.last().map(String::as_str), Some("{name} forgot the snacks"));
    }

    #[test]
    fn generate_personalises_and_counts() {
        let (store, _) = store();
        let roast = store.generate_roast("Zed").unwrap();
        assert!(roast.contains("Zed"));
        assert!(!roast.contains("{name}"));
        assert_eq!(store.leaderboard().get("Zed"), Some(&1));
    }
}
