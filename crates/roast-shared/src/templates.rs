//! Roast templates and `{name}` substitution.

use rand::seq::SliceRandom;

use crate::constants::NAME_PLACEHOLDER;

/// Built-in templates offered alongside the user's custom ones.
pub const DEFAULT_TEMPLATES: &[&str] = &[
    "Hey {name}, NASA called. They found your missing brain cell.",
    "{name}, you bring everyone so much joy... when you leave the room.",
    "I would roast {name}, but I don't want to get ashes all over my keyboard.",
    "{name}, you're the reason they put instructions on shampoo bottles.",
    "If {name} was a vegetable, they'd be a turnip... because nobody wants them.",
    "{name}, you're proof that evolution can go in reverse.",
    "I'd tell {name} to go to hell, but they'd probably get lost on the way.",
    "{name}, you're like a human version of a participation trophy.",
    "If {name} was a book, they'd be a coloring book... for toddlers.",
    "{name}, you're the human equivalent of wet socks.",
    "I'd roast {name}, but I don't want to be accused of animal cruelty.",
    "{name}, you're so boring, even your shadow left you.",
    "If {name} was a pizza, they'd be pineapple... nobody asked for it.",
    "{name}, you're the reason they invented the mute button.",
    "I'd say {name} is the life of the party, but nobody invited them.",
    "{name}, you're like a software update. Nobody wants you, but here you are.",
    "If {name} was a WiFi signal, you'd be out of range.",
    "{name}, you're the human equivalent of a 'skip ad' button.",
    "I'd roast {name}, but my mom said I shouldn't burn trash.",
    "{name}, you're proof that not all humans are created equal.",
];

pub fn has_placeholder(template: &str) -> bool {
    template.contains(NAME_PLACEHOLDER)
}

/// Replace every `{name}` in `template` with `name`.
pub fn personalize(template: &str, name: &str) -> String {
    template.replace(NAME_PLACEHOLDER, name)
}

/// Pick one template uniformly at random. `None` only when `templates` is empty.
pub fn pick<'a, R: rand::Rng + ?Sized>(templates: &'a [String], rng: &mut R) -> Option<&'a str> {
    templates.choose(rng).map(String::as_str)
}
