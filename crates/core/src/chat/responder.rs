use rand::Rng;
use rand::seq::IndexedRandom;

/// Reply sent when `keywords` appear in a message.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub keywords: &'static [&'static str],
    pub reply: &'static str,
}

const RULES: &[KeywordRule] = &[
    KeywordRule {
        keywords: &["course", "learn"],
        reply: "We run courses in web development, data science, AI, design and more. \
                The courses page lists them all. Which topic are you after?",
    },
    KeywordRule {
        keywords: &["price", "cost", "fee"],
        reply: "Most courses cost between $49 and $199, and every purchase comes with a \
                30-day money-back guarantee.",
    },
    KeywordRule {
        keywords: &["certificate"],
        reply: "Every finished course comes with a certificate of completion you can add \
                to your resume or profile.",
    },
    KeywordRule {
        keywords: &["support", "help"],
        reply: "Our support team answers by email, WhatsApp or right here, usually within \
                a few hours during business hours.",
    },
    KeywordRule {
        keywords: &["refund", "money back"],
        reply: "You can get a full refund within 30 days of purchase; just contact support.",
    },
    KeywordRule {
        keywords: &["instructor", "teacher"],
        reply: "Our instructors are working practitioners. Each course page introduces \
                its instructor.",
    },
    KeywordRule {
        keywords: &["time", "long", "duration"],
        reply: "Most courses run 10 to 40 hours. You learn at your own pace and keep \
                lifetime access.",
    },
    KeywordRule {
        keywords: &["beginner", "start"],
        reply: "Absolutely, look for courses marked Beginner. JavaScript and Python are \
                good first steps.",
    },
    KeywordRule {
        keywords: &["mobile", "app"],
        reply: "The platform works on phones, and the iOS and Android apps can download \
                lessons for offline viewing.",
    },
    KeywordRule {
        keywords: &["thank"],
        reply: "You're welcome! Anything else I can help with?",
    },
    KeywordRule {
        keywords: &["bye", "goodbye"],
        reply: "Thanks for chatting. Come back any time. Happy learning!",
    },
];

const FALLBACKS: &[&str] = &[
    "Good question! Could you tell me a bit more about what you're looking for?",
    "Happy to help. The FAQ section also covers the most common questions.",
    "For details, the courses page or our support team are the best places to look.",
    "Is there a particular course or topic you'd like to know more about?",
    "Our blog has plenty of learning tips too, if you want to dig deeper.",
];

/// Keyword-driven bot. Rules are checked in order against the lower-cased
/// message; the first rule with any matching keyword wins.
#[derive(Debug, Clone)]
pub struct Responder {
    rules: Vec<KeywordRule>,
    fallbacks: Vec<&'static str>,
}

impl Default for Responder {
    fn default() -> Self {
        Self {
            rules: RULES.to_vec(),
            fallbacks: FALLBACKS.to_vec(),
        }
    }
}

impl Responder {
    pub fn new(rules: Vec<KeywordRule>, fallbacks: Vec<&'static str>) -> Self {
        Self { rules, fallbacks }
    }

    /// The scripted reply for `message`, if any rule matches.
    pub fn match_rule(&self, message: &str) -> Option<&'static str> {
        let message = message.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.keywords.iter().any(|kw| message.contains(kw)))
            .map(|rule| rule.reply)
    }

    /// Reply to `message`, falling back to a random generic answer.
    pub fn reply<R: Rng + ?Sized>(&self, message: &str, rng: &mut R) -> &'static str {
        self.match_rule(message)
            .or_else(|| self.fallbacks.choose(rng).copied())
            .unwrap_or("How can I help you today?")
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn first_matching_rule_wins() {
        let responder = Responder::default();
        // "course" (rule 1) beats "price" (rule 2).
        let reply = responder.match_rule("What's the price of a course?").unwrap();
        assert!(reply.starts_with("We run courses"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let responder = Responder::default();
        assert!(
            responder
                .match_rule("Do you give a CERTIFICATE?")
                .unwrap()
                .contains("certificate")
        );
    }

    #[test]
    fn multi_word_keywords() {
        let responder = Responder::default();
        assert!(
            responder
                .match_rule("I want my money back")
                .unwrap()
                .contains("refund")
        );
    }

    #[test]
    fn unmatched_messages_use_fallbacks() {
        let responder = Responder::default();
        assert!(responder.match_rule("xyzzy").is_none());
        let mut rng = StdRng::seed_from_u64(7);
        let reply = responder.reply("xyzzy", &mut rng);
        assert!(FALLBACKS.contains(&reply));
    }

    #[test]
    fn empty_fallbacks_still_answer() {
        let responder = Responder::new(Vec::new(), Vec::new());
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(responder.reply("hi", &mut rng), "How can I help you today?");
    }
}
