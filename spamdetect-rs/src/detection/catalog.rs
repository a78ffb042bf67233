//! Rule catalog: weighted spam patterns, suspicious keywords, and
//! legitimacy indicators
//!
//! The catalog is a versionable, immutable data asset compiled once at
//! detector construction. Rule semantics live here as data; the scoring
//! algorithm never branches on individual rules.

use regex::Regex;

use super::types::{PatternRule, RuleCategory};
use crate::error::{DetectError, Result};

use RuleCategory::*;

/// Rule definitions: (pattern, weight, label, category)
///
/// Case insensitivity is encoded per pattern with `(?i)`; the formatting
/// rules are deliberately case-sensitive so that caps runs still register.
const RULE_DEFS: &[(&str, f64, &str, RuleCategory)] = &[
    // Lottery & prize scams
    (r"(?i)\b(congratulations?|congrats).*\b(won|winner|selected|chosen)", 0.20, "lottery winner", Lottery),
    (r"(?i)\b(won|win|winner).*(\$|₹|rs\.?|rupees?|\d+)", 0.19, "prize money", Lottery),
    (r"(?i)\b(claim|collect).*\b(prize|reward|money|cash|winnings?)", 0.18, "claim prize", Lottery),
    (r"(?i)\b(lottery|mega\s+lottery|international.*lottery)", 0.17, "lottery mention", Lottery),
    (r"(?i)\bemail\s+(id|address).*\b(selected|chosen|winner)", 0.18, "email selected", Lottery),
    // Phishing & account security
    (r"(?i)\baccount.*(suspended|blocked|locked|frozen|disabled|closed|terminated)", 0.22, "account suspended", Phishing),
    (r"(?i)\b(verify|confirm|update|validate).*(account|identity|password|details|information)", 0.21, "verify account", Phishing),
    (r"(?i)\b(suspicious|unusual).*(activity|login|transaction|access)", 0.20, "suspicious activity", Phishing),
    (r"(?i)\b(restore|reactivate|unlock|unblock).*(account|access)", 0.19, "restore account", Phishing),
    (r"(?i)\b(kyc|know\s+your\s+customer).*(expire|expiring|update|pending)", 0.20, "KYC update", Phishing),
    (r"(?i)\b(aadhaar?|adhaar?|aadhar).*\b(update|expire|invalid|freeze)", 0.21, "Aadhaar scam", Phishing),
    (r"(?i)\b(pan|permanent\s+account\s+number).*(linked|due|pending|update)", 0.20, "PAN card scam", Phishing),
    (r"(?i)\b(card|credit\s+card|debit\s+card).*(details|number|cvv|pin|otp)", 0.22, "card details", Phishing),
    (r"(?i)\b(bank|banking).*(details|account|password|credentials)", 0.21, "bank credentials", Phishing),
    // Urgency & time pressure
    (r"(?i)\b(urgent|immediately|right\s+now|act\s+now|asap)", 0.16, "urgent action", Urgency),
    (r"(?i)\bwithin\s+(\d+|twenty-four|24)\s+(hours?|hrs?|minutes?|mins?)", 0.15, "time deadline", Urgency),
    (r"(?i)\b(expires?|expiring|expiration).*(today|tonight|soon|\d+\s+hours?)", 0.15, "expires soon", Urgency),
    (r"(?i)\b(limited\s+time|last\s+chance|final\s+(notice|warning|opportunity))", 0.14, "limited time", Urgency),
    (r"(?i)\bfailure\s+to\s+(respond|reply|verify|update).*\b(will|result)", 0.17, "threat warning", Urgency),
    (r"(?i)\b(permanent|permanently).*(closure|close|suspend|block|delete)", 0.16, "permanent closure", Urgency),
    // Money & financial scams
    (r"(?i)\b(earn|make).*(\$|₹|rs\.?|\d+).*(day|week|month|hour)", 0.17, "make money fast", Money),
    (r"(?i)\b(free\s+money|cash\s+bonus|instant\s+cash)", 0.18, "free money", Money),
    (r"(?i)\b(double|triple|multiply).*\b(money|investment|profit)", 0.19, "double money", Money),
    (r"(?i)(\$|₹|rs\.?)\s*\d{1,3}(,\d{3})*(\.\d{2})?\s*(million|lakh|crore|thousand)", 0.16, "large amount", Money),
    (r"(?i)\bguaranteed.*(profit|return|income|earnings?)", 0.17, "guaranteed profit", Money),
    (r"(?i)\b(refund|owe|owed|due).*(₹|rs\.?|\$|\d+)", 0.15, "refund pending", Money),
    (r"(?i)\b(pay|payment).*(₹|rs\.?|\$)\s*\d+.*(fee|charge|shipping|delivery)", 0.14, "pay small fee", Money),
    (r"(?i)\b(registration|processing|security|handling)\s+fee", 0.15, "registration fee", Money),
    // Investment & crypto scams
    (r"(?i)\b(bitcoin|btc|crypto|cryptocurrency|blockchain).*\b(invest|profit|wallet|locked)", 0.16, "crypto scam", Investment),
    (r"(?i)\b(forex|trading|stocks?|investment).*(guaranteed|bot|ai|algorithm)", 0.17, "trading scam", Investment),
    (r"(?i)\b(invest|investment).*\b(opportunity|scheme|plan|program)", 0.15, "investment scheme", Investment),
    (r"(?i)\b\d+%\s*(profit|return|roi|interest).*(daily|weekly|guaranteed)", 0.18, "high returns", Investment),
    (r"(?i)\bmillionaire.*(weeks?|months?|days?)", 0.17, "quick millionaire", Investment),
    // Job & work-from-home scams
    (r"(?i)\b(work\s+from\s+home|wfh|remote\s+job).*\b(earn|₹|rs\.?)", 0.14, "work from home", Job),
    (r"(?i)\b(selected|shortlisted).*\b(internship|job|position)", 0.16, "fake job offer", Job),
    (r"(?i)\bno\s+(interview|experience|skills).*(required|needed)", 0.15, "no interview needed", Job),
    (r"(?i)\b(google|microsoft|amazon|facebook|meta).*\b(internship|job|hiring)", 0.17, "fake big company", Job),
    (r"(?i)\b(hr\s+team|recruitment|hiring\s+team)", 0.08, "HR mention", Job),
    // Delivery & package scams
    (r"(?i)\b(package|parcel|shipment|courier|delivery).*(hold|held|pending|failed|stuck)", 0.18, "package on hold", Delivery),
    (r"(?i)\b(delivery|shipping|courier).*(attempt|failed|unable)", 0.16, "delivery failed", Delivery),
    (r"(?i)\b(customs?|clearance).*(charge|fee|duty|payment)", 0.17, "customs fee", Delivery),
    (r"(?i)\b(address|delivery\s+address).*(confirm|verify|update|incomplete)", 0.15, "address issue", Delivery),
    (r"(?i)\b(re-?delivery|reattempt).*(fee|charge|₹|rs\.?)", 0.16, "redelivery fee", Delivery),
    // Tech support & virus scams
    (r"(?i)\b(virus|viruses|malware|trojan|spyware).*\b(detected|found|infected)", 0.19, "virus detected", Tech),
    (r"(?i)\b(device|computer|pc|system).*\b(infected|compromised|hacked|damaged)", 0.18, "device infected", Tech),
    (r"(?i)\bclick.*\b(clean|fix|repair|remove|scan)", 0.15, "click to fix", Tech),
    (r"(?i)\b(tech|technical)\s+support", 0.12, "tech support", Tech),
    // Romance & relationship scams
    (r"(?i)\b(love|dear|darling|honey|sweetheart)", 0.12, "romantic language", Romance),
    (r"(?i)\b(fallen\s+for\s+you|love\s+you|miss\s+you)", 0.14, "love declaration", Romance),
    (r"(?i)\b(visit|come\s+to|meet).*(need|help|money|ticket|visa)", 0.16, "visit help needed", Romance),
    (r"(?i)\b(send|wire|transfer).*(\$|₹|money|cash)", 0.15, "send money request", Romance),
    // Blackmail & extortion
    (r"(?i)\b(know|have|recorded|recordings?|videos?|photos?).*\b(you|private|personal)", 0.20, "blackmail threat", Blackmail),
    (r"(?i)\b(leak|expose|release|publish|share).*\b(content|video|photos?|recordings?)", 0.19, "leak threat", Blackmail),
    (r"(?i)\b(bitcoin|btc|crypto).*\b(wallet|address|send|transfer)", 0.15, "bitcoin payment", Blackmail),
    (r"(?i)\bseed\s+phrase", 0.18, "seed phrase request", Blackmail),
    // Tax & government scams
    (r"(?i)\b(tax|income\s+tax|irs).*(due|pending|unpaid|refund|owe)", 0.18, "tax payment", Tax),
    (r"(?i)\b(legal\s+action|arrest|warrant|court|lawsuit)", 0.17, "legal threat", Tax),
    (r"(?i)\b(uidai|aadhaar?|aadhar|adhaar).*(portal|update|government)", 0.16, "government portal", Tax),
    // Subscription & renewal scams
    (r"(?i)\bsubscription.*(renew|renewal|expire|expiring|charged)", 0.14, "subscription renewal", Subscription),
    (r"(?i)\b(mcafee|norton|antivirus).*\b(renew|subscription|charged)", 0.16, "antivirus renewal", Subscription),
    (r"(?i)\b(cancel|stop|prevent).*\b(renewal|charge|payment)", 0.13, "cancel subscription", Subscription),
    (r"(?i)\b(charged|charge|billed).*(\$|₹|rs\.?).*\d+", 0.12, "charge notification", Subscription),
    // Social media & verification scams
    (r"(?i)\b(instagram|facebook|twitter|tiktok|linkedin).*\b(verification|verified|badge|blue\s+tick)", 0.17, "social verification", Social),
    (r"(?i)\bblue\s+(tick|badge|check|verification)", 0.16, "blue badge", Social),
    (r"(?i)\b(eligible|approved|qualified).*\b(verification|verified)", 0.15, "eligible verified", Social),
    // Free gifts & giveaways
    (r"(?i)\b(free|complimentary).*(iphone|samsung|laptop|macbook|ipad)", 0.17, "free device", Giveaway),
    (r"(?i)\b(gift\s+card|voucher|coupon).*(free|₹|rs\.?|\d+)", 0.15, "gift card", Giveaway),
    (r"(?i)\b(flipkart|amazon|myntra).*(gift|voucher|card|cashback)", 0.14, "shopping voucher", Giveaway),
    (r"(?i)\b(giveaway|contest|survey|questionnaire).*\b(free|win|prize)", 0.13, "survey giveaway", Giveaway),
    (r"(?i)\bcomplete.*\b(survey|form|questionnaire).*\b(free|get|receive)", 0.14, "complete survey", Giveaway),
    (r"(?i)\bshipping\s+fee.*(\$|₹|rs\.?)\s*\d+", 0.15, "shipping fee trick", Giveaway),
    // Charity & donation scams
    (r"(?i)\b(donate|donation|charity|help|fund).*(flood|earthquake|disaster|victims?)", 0.13, "charity request", Charity),
    (r"(?i)\b(raising\s+funds|emergency|relief|humanitarian)", 0.11, "fundraising", Charity),
    // OTP & authentication scams
    (r"(?i)\b(otp|one\s+time\s+password).*\b(\d{4,6}|verify|enter|share)", 0.18, "OTP sharing", Otp),
    (r"(?i)\b(code|verification\s+code).*\b(\d{4,6}|enter|provide)", 0.16, "verification code", Otp),
    (r"(?i)\bdo\s+not\s+share.*(anyone|otp|code|password)", -0.05, "legitimate warning", Legitimate),
    // Payment platform scams
    (r"(?i)\b(paypal|paytm|phonepe|gpay|google\s+pay).*(limited|suspended|locked|verify)", 0.17, "payment platform", Payment),
    (r"(?i)\b(payment|transaction).*(failed|declined|issue|problem|error)", 0.13, "payment failed", Payment),
    // Suspicious language & claims
    (r"(?i)\b(100%|absolutely|completely).*(free|guaranteed|risk-?free|safe|legitimate)", 0.14, "100% claims", Suspicious),
    (r"(?i)\b(not\s+spam|not\s+junk|this\s+is\s+not|legitimate\s+email)", 0.16, "claims not spam", Suspicious),
    (r"(?i)\b(once\s+in.*lifetime|deal\s+of.*lifetime|exclusive\s+offer)", 0.13, "lifetime opportunity", Suspicious),
    (r"(?i)\b(secret|confidential|private|hidden|undisclosed)", 0.11, "secretive language", Suspicious),
    (r"(?i)\blimited\s+(slots?|seats?|spaces?|stock)", 0.12, "limited slots", Suspicious),
    // Formatting red flags (case-sensitive)
    (r"[A-Z]{6,}", 0.09, "excessive caps", Formatting),
    (r"!{3,}", 0.08, "multiple exclamations", Formatting),
    (r"\${2,}|₹{2,}", 0.10, "multiple currency symbols", Formatting),
    (r"🎉|🎁|⚠️|📦|❤️|💰|💵|💳", 0.07, "spam emojis", Formatting),
];

/// Suspicious keywords checked by lowercase containment, each adding
/// [`super::types::KEYWORD_INCREMENT`]
const SUSPICIOUS_KEYWORDS: &[&str] = &[
    // Financial
    "lottery", "jackpot", "guaranteed", "bonus", "prize", "winner", "selected",
    "credit", "debt", "loan", "refinance", "investment", "profit", "income",
    "refund", "owe", "owed", "due", "payment", "deposit",
    // Account/security
    "password", "suspended", "locked", "blocked", "frozen", "expires",
    "verify", "confirm", "update", "restore", "reactivate",
    // Indian specific
    "pan", "aadhaar", "aadhar", "kyc", "uidai", "sbi", "hdfc", "icici",
    "paytm", "phonepe", "gpay",
    // Transfer methods
    "western union", "moneygram", "wire transfer", "bitcoin", "btc",
    // Scam origins
    "nigeria", "nigerian", "prince", "beneficiary", "inheritance",
    "diplomat", "barrister", "attorney", "lawyer",
    // Tech
    "virus", "malware", "infected", "hacked", "compromised",
    // Products
    "viagra", "cialis", "pharmacy", "pills", "weight loss",
    "casino", "poker", "gambling", "rolex", "replica",
    // Education scams
    "diploma", "degree", "certificate", "university", "accredited",
    // Urgency
    "urgent", "immediately", "asap", "expire", "limited", "hurry",
];

/// Legitimacy indicators, each subtracting
/// [`super::types::LEGITIMACY_DECREMENT`] when present
///
/// The personalized-greeting pattern is case-sensitive on purpose: it keys
/// on a capitalized name.
const LEGITIMACY_DEFS: &[&str] = &[
    r"(?i)\b(thank\s+you|thanks)\s+(for|so\s+much)",
    r"(?i)\b(meeting|conference|appointment)\s+(scheduled|tomorrow|today|agenda)",
    r"(?i)\b(attached|attachment|please\s+find|enclosed)\s+(is|are|herewith)",
    r"(?i)\b(regards|sincerely|best\s+regards|warm\s+regards|cheers),",
    r"(?i)\bplease\s+(let\s+me\s+know|advise|confirm|review)",
    r"(?i)\b(invoice|receipt|order\s+confirmation|bill|statement)\s+#?\d+",
    r"\b(dear|hi|hello)\s+[A-Z][a-z]+,",
    r"(?i)\b(team|colleagues|all)",
    r"(?i)\b(project|report|presentation|document|file)",
];

/// Immutable catalog of pattern rules, keywords, and legitimacy indicators
pub struct RuleCatalog {
    rules: Vec<PatternRule>,
    keywords: &'static [&'static str],
    legitimacy: Vec<Regex>,
}

impl RuleCatalog {
    /// Compile the built-in catalog
    pub fn builtin() -> Result<Self> {
        let rules = RULE_DEFS
            .iter()
            .map(|&(pattern, weight, label, category)| {
                let regex = Regex::new(pattern)
                    .map_err(|source| DetectError::InvalidPattern { label, source })?;
                Ok(PatternRule {
                    regex,
                    weight,
                    label,
                    category,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let legitimacy = LEGITIMACY_DEFS
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|source| DetectError::InvalidPattern {
                    label: "legitimacy indicator",
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            rules,
            keywords: SUSPICIOUS_KEYWORDS,
            legitimacy,
        })
    }

    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }

    pub fn keywords(&self) -> &'static [&'static str] {
        self.keywords
    }

    pub fn legitimacy_indicators(&self) -> &[Regex] {
        &self.legitimacy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_compiles() {
        let catalog = RuleCatalog::builtin().unwrap();
        assert!(!catalog.rules().is_empty());
        assert_eq!(catalog.legitimacy_indicators().len(), 9);
        assert!(catalog.keywords().len() >= 60);
    }

    #[test]
    fn test_all_categories_present() {
        let catalog = RuleCatalog::builtin().unwrap();
        let categories: HashSet<_> = catalog.rules().iter().map(|r| r.category).collect();

        for category in [
            Lottery, Phishing, Urgency, Money, Investment, Job, Delivery, Tech, Romance,
            Blackmail, Tax, Subscription, Social, Giveaway, Charity, Otp, Payment, Suspicious,
            Formatting, Legitimate,
        ] {
            assert!(categories.contains(&category), "missing {:?}", category);
        }
    }

    #[test]
    fn test_single_negative_weight_rule() {
        let catalog = RuleCatalog::builtin().unwrap();
        let negative: Vec<_> = catalog
            .rules()
            .iter()
            .filter(|r| r.weight < 0.0)
            .collect();

        assert_eq!(negative.len(), 1);
        assert_eq!(negative[0].label, "legitimate warning");
        assert_eq!(negative[0].category, Legitimate);
        assert!((negative[0].weight - -0.05).abs() < 1e-9);
        assert!(negative[0]
            .regex
            .is_match("Do not share your OTP with anyone"));
    }

    #[test]
    fn test_lottery_rule_matches() {
        let catalog = RuleCatalog::builtin().unwrap();
        let rule = catalog
            .rules()
            .iter()
            .find(|r| r.label == "lottery winner")
            .unwrap();

        assert!(rule.regex.is_match("Congratulations! You have been selected"));
        assert!(rule.regex.is_match("congrats, you are our winner"));
        assert!(!rule.regex.is_match("the quarterly meeting agenda"));
    }

    #[test]
    fn test_formatting_rules_are_case_sensitive() {
        let catalog = RuleCatalog::builtin().unwrap();
        let caps = catalog
            .rules()
            .iter()
            .find(|r| r.label == "excessive caps")
            .unwrap();

        assert!(caps.regex.is_match("WINNER ANNOUNCED"));
        assert!(!caps.regex.is_match("winner announced"));
    }

    #[test]
    fn test_personalized_greeting_requires_capitalized_name() {
        let catalog = RuleCatalog::builtin().unwrap();
        let greeting = &catalog.legitimacy_indicators()[6];

        assert!(greeting.is_match("hello John, following up on the report"));
        assert!(!greeting.is_match("hello john, click here"));
        assert!(!greeting.is_match("hi there, click here"));
    }
}
