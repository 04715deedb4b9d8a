//! Canned bot replies.

pub const NEGATIVE_REPLIES: &[&str] = &[
    "Noooooo!!",
    "Nope.",
    "I'm sorry Dave, I'm afraid I can't do that.",
    "I don't think so.",
    "Not gonna happen.",
    "Out of the question.",
    "Huh? No.",
    "Nah.",
    "Naw.",
    "Not likely.",
    "No way, José.",
    "Not in a million years.",
    "Fat chance.",
    "Certainly not.",
    "NEGATORY.",
    "Nuh-uh.",
    "Not in my house!",
];

pub const POSITIVE_REPLIES: &[&str] = &[
    "Yep.",
    "Absolutely!",
    "Can do!",
    "Affirmative!",
    "Yeah okay.",
    "Sure.",
    "Sure thing!",
    "You're the boss!",
    "Okay.",
    "No problem.",
    "I got you.",
    "Alright.",
    "You got it!",
    "ROGER THAT",
    "Of course!",
    "Aye aye, cap'n!",
    "I'll allow it.",
];

pub const ERROR_REPLIES: &[&str] = &[
    "Please don't do that.",
    "You have to stop.",
    "Do you mind?",
    "In the future, don't do that.",
    "That was a mistake.",
    "You blew it.",
    "You're bad at computers.",
    "Are you trying to kill me?",
    "Noooooo!!",
    "I can't believe you've done this",
];

/// Picks a reply deterministically from `seed`, e.g. a message ID.
///
/// Returns `None` for an empty list.
#[must_use]
pub fn pick<'a>(replies: &[&'a str], seed: u64) -> Option<&'a str> {
    if replies.is_empty() {
        return None;
    }
    let len = replies.len() as u64;
    usize::try_from(seed % len)
        .ok()
        .and_then(|index| replies.get(index).copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_lists_are_populated() {
        assert_eq!(NEGATIVE_REPLIES.len(), 17);
        assert_eq!(POSITIVE_REPLIES.len(), 17);
        assert_eq!(ERROR_REPLIES.len(), 10);
    }

    #[test]
    fn test_pick_wraps_seed() {
        assert_eq!(pick(POSITIVE_REPLIES, 0), Some("Yep."));
        assert_eq!(pick(POSITIVE_REPLIES, 17), Some("Yep."));
        assert_eq!(pick(ERROR_REPLIES, 12), Some("Do you mind?"));
    }

    #[test]
    fn test_pick_empty() {
        assert_eq!(pick(&[], 5), None);
    }
}
