//! Builtin keyword table.
//!
//! Default dictionary compiled into the binary. Keywords are lowercase
//! literals matched as substrings of the lowercased description, so a
//! stem like "hack" also covers "hacked" and "hacking". A TOML
//! dictionary replaces this table wholesale; the two are never merged.

use breachscan_core::types::BreachCategory;

/// Build the full builtin keyword table as (category, keyword) pairs.
pub(super) fn builtin_keywords() -> Vec<(BreachCategory, &'static str)> {
    let mut entries = Vec::with_capacity(80);

    macro_rules! add {
        ($cat:expr, $kw:expr) => {
            entries.push(($cat, $kw));
        };
    }

    use BreachCategory::*;

    // ── Hacking (8) ──
    add!(Hacking, "hack");
    add!(Hacking, "unauthorized access");
    add!(Hacking, "intrusion");
    add!(Hacking, "cyberattack");
    add!(Hacking, "cyber attack");
    add!(Hacking, "sql injection");
    add!(Hacking, "brute force");
    add!(Hacking, "zero-day");

    // ── Malware (8) ──
    add!(Malware, "malware");
    add!(Malware, "virus");
    add!(Malware, "trojan");
    add!(Malware, "spyware");
    add!(Malware, "keylogger");
    add!(Malware, "botnet");
    add!(Malware, "worm");
    add!(Malware, "malicious code");

    // ── Phishing (7) ──
    add!(Phishing, "phishing");
    add!(Phishing, "smishing");
    add!(Phishing, "spoofed email");
    add!(Phishing, "fraudulent email");
    add!(Phishing, "social engineering");
    add!(Phishing, "credential harvesting");
    add!(Phishing, "business email compromise");

    // ── Ransomware (5) ──
    add!(Ransomware, "ransomware");
    add!(Ransomware, "ransom demand");
    add!(Ransomware, "ransom note");
    add!(Ransomware, "extortion");
    add!(Ransomware, "files encrypted");

    // ── Insider (7) ──
    add!(Insider, "insider");
    add!(Insider, "rogue employee");
    add!(Insider, "disgruntled employee");
    add!(Insider, "former employee");
    add!(Insider, "employee misuse");
    add!(Insider, "internal actor");
    add!(Insider, "abuse of access");

    // ── Physical theft (7) ──
    add!(PhysicalTheft, "burglary");
    add!(PhysicalTheft, "break-in");
    add!(PhysicalTheft, "stolen documents");
    add!(PhysicalTheft, "stolen paperwork");
    add!(PhysicalTheft, "stolen files");
    add!(PhysicalTheft, "paper records");
    add!(PhysicalTheft, "physical theft");

    // ── Portable device (8) ──
    add!(PortableDevice, "laptop");
    add!(PortableDevice, "usb drive");
    add!(PortableDevice, "flash drive");
    add!(PortableDevice, "thumb drive");
    add!(PortableDevice, "portable device");
    add!(PortableDevice, "mobile device");
    add!(PortableDevice, "external hard drive");
    add!(PortableDevice, "stolen phone");

    // ── Unintended disclosure (9) ──
    add!(UnintendedDisclosure, "inadvertent");
    add!(UnintendedDisclosure, "accidental");
    add!(UnintendedDisclosure, "unintended disclosure");
    add!(UnintendedDisclosure, "misdirected");
    add!(UnintendedDisclosure, "mailing error");
    add!(UnintendedDisclosure, "exposed online");
    add!(UnintendedDisclosure, "publicly accessible");
    add!(UnintendedDisclosure, "misconfigured");
    add!(UnintendedDisclosure, "unsecured database");

    // ── Third party (7) ──
    add!(ThirdParty, "third party");
    add!(ThirdParty, "third-party");
    add!(ThirdParty, "vendor");
    add!(ThirdParty, "contractor");
    add!(ThirdParty, "business associate");
    add!(ThirdParty, "service provider");
    add!(ThirdParty, "supply chain");

    // ── Payment card (8) ──
    add!(PaymentCard, "payment card");
    add!(PaymentCard, "credit card");
    add!(PaymentCard, "debit card");
    add!(PaymentCard, "cardholder");
    add!(PaymentCard, "card number");
    add!(PaymentCard, "skimming");
    add!(PaymentCard, "skimmer");
    add!(PaymentCard, "point of sale");

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_keywords() {
        let entries = builtin_keywords();
        for cat in BreachCategory::all() {
            assert!(
                entries.iter().any(|(c, _)| c == cat),
                "no builtin keywords for {}",
                cat
            );
        }
    }

    #[test]
    fn keywords_are_lowercase_and_trimmed() {
        for (cat, kw) in builtin_keywords() {
            assert_eq!(kw, kw.to_lowercase(), "{} keyword not lowercase", cat);
            assert_eq!(kw, kw.trim(), "{} keyword not trimmed", cat);
            assert!(!kw.is_empty(), "{} has an empty keyword", cat);
        }
    }

    #[test]
    fn no_duplicate_pairs() {
        let entries = builtin_keywords();
        for (i, (cat, kw)) in entries.iter().enumerate() {
            assert!(
                !entries[i + 1..].iter().any(|(c, k)| c == cat && k == kw),
                "duplicate builtin keyword {}/{}",
                cat,
                kw
            );
        }
    }
}
