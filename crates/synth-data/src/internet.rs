//! Emails, usernames, domains, IPs, user agents and UUIDs.

use crate::person;
use rand::Rng;
use uuid::Uuid;

pub const DOMAINS: &[&str] = &[
    "example.com",
    "example.org",
    "example.net",
    "mailbox.test",
    "postbox.test",
    "inbox.test",
    "acme-corp.test",
    "globex.test",
    "initech.test",
    "umbrella.test",
];

const TLDS: &[&str] = &["com", "org", "net", "io", "dev", "co"];

/// Random registrable domain name.
pub fn domain_name<R: Rng>(rng: &mut R) -> String {
    let word = crate::text::word(rng);
    let tld = TLDS[rng.gen_range(0..TLDS.len())];
    format!("{word}{}.{tld}", rng.gen_range(0..100))
}

/// Random username built from name pools.
pub fn user_name<R: Rng>(rng: &mut R) -> String {
    let first = person::first_name(rng).to_lowercase();
    let last = person::last_name(rng).to_lowercase();
    match rng.gen_range(0..3) {
        0 => format!("{first}.{last}"),
        1 => format!("{first}{last}{}", rng.gen_range(1..100)),
        _ => format!("{}{last}{}", &first[..1], rng.gen_range(1900..2010)),
    }
}

/// Well-formed synthetic email address.
pub fn email<R: Rng>(rng: &mut R) -> String {
    let local = user_name(rng);
    let domain = DOMAINS[rng.gen_range(0..DOMAINS.len())];
    format!("{local}@{domain}")
}

/// Random dotted-quad IPv4 address.
pub fn ipv4<R: Rng>(rng: &mut R) -> String {
    format!(
        "{}.{}.{}.{}",
        rng.gen_range(1..=254),
        rng.gen_range(0..=255),
        rng.gen_range(0..=255),
        rng.gen_range(1..=254)
    )
}

/// Random browser user-agent string.
pub fn user_agent<R: Rng>(rng: &mut R) -> String {
    let chrome = rng.gen_range(100..=130);
    let firefox = rng.gen_range(100..=133);
    let safari = rng.gen_range(14..=17);
    match rng.gen_range(0..4) {
        0 => format!(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
             (KHTML, like Gecko) Chrome/{chrome}.0.0.0 Safari/537.36"
        ),
        1 => format!(
            "Mozilla/5.0 (X11; Linux x86_64; rv:{firefox}.0) Gecko/20100101 Firefox/{firefox}.0"
        ),
        2 => format!(
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 \
             (KHTML, like Gecko) Version/{safari}.0 Safari/605.1.15"
        ),
        _ => format!(
            "Mozilla/5.0 (iPhone; CPU iPhone OS {safari}_0 like Mac OS X) AppleWebKit/605.1.15 \
             (KHTML, like Gecko) Mobile/15E148"
        ),
    }
}

/// Random version-4 UUID drawn from the caller's RNG (not the OS), so
/// seeded runs reproduce the same ids.
pub fn uuid4<R: Rng>(rng: &mut R) -> Uuid {
    let bytes: [u8; 16] = rng.gen();
    uuid::Builder::from_random_bytes(bytes).into_uuid()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_email_is_well_formed() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let email = email(&mut rng);
            let (local, domain) = email.split_once('@').expect("missing @");
            assert!(!local.is_empty());
            assert!(domain.contains('.'));
        }
    }

    #[test]
    fn test_ipv4_has_four_octets() {
        let mut rng = StdRng::seed_from_u64(42);
        let ip = ipv4(&mut rng);
        let octets: Vec<u16> = ip.split('.').map(|o| o.parse().unwrap()).collect();
        assert_eq!(octets.len(), 4);
        assert!(octets.iter().all(|&o| o <= 255));
    }

    #[test]
    fn test_uuid4_is_version_4_and_seeded() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        let a = uuid4(&mut rng1);
        let b = uuid4(&mut rng2);
        assert_eq!(a, b);
        assert_eq!(a.get_version_num(), 4);
    }
}
