//! Plain-text filler: words, sentences and short paragraphs.

use rand::Rng;

const WORDS: &[&str] = &[
    "account", "ability", "border", "campaign", "capital", "chapter", "concept", "contract",
    "country", "culture", "decision", "delivery", "economy", "element", "evidence", "exchange",
    "feature", "finance", "formula", "gallery", "history", "industry", "journey", "language",
    "machine", "manager", "market", "measure", "message", "mission", "network", "opinion",
    "package", "partner", "pattern", "picture", "process", "product", "project", "quality",
    "reason", "record", "region", "report", "request", "revenue", "science", "section",
    "service", "station", "storage", "strategy", "surface", "system", "theory", "traffic",
    "variety", "vehicle", "version", "weather",
];

/// One lowercase dictionary word.
pub fn word<R: Rng>(rng: &mut R) -> &'static str {
    WORDS[rng.gen_range(0..WORDS.len())]
}

/// Sentence of roughly `nb_words` words, capitalized and terminated.
pub fn sentence<R: Rng>(rng: &mut R, nb_words: usize) -> String {
    // Vary the length a little, like prose does.
    let spread = (nb_words / 2).max(1);
    let count = rng.gen_range(nb_words.saturating_sub(spread).max(1)..=nb_words + spread);
    let mut words: Vec<&str> = (0..count).map(|_| word(rng)).collect();
    let mut s = String::new();
    let first = words.remove(0);
    s.push_str(&capitalize(first));
    for w in words {
        s.push(' ');
        s.push_str(w);
    }
    s.push('.');
    s
}

/// Filler text of at most `max_chars` characters, built from sentences.
pub fn text<R: Rng>(rng: &mut R, max_chars: usize) -> String {
    let mut out = String::new();
    loop {
        let next = sentence(rng, 8);
        if out.len() + next.len() + 1 > max_chars {
            break;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&next);
        if out.len() >= max_chars / 2 && rng.gen_bool(0.3) {
            break;
        }
    }
    if out.is_empty() {
        out.push_str(&capitalize(word(rng)));
        out.truncate(max_chars);
    }
    out
}

fn capitalize(w: &str) -> String {
    let mut chars = w.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sentence_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let s = sentence(&mut rng, 8);
            assert!(s.ends_with('.'));
            assert!(s.chars().next().unwrap().is_uppercase());
        }
    }

    #[test]
    fn test_text_respects_max_chars() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            assert!(text(&mut rng, 200).len() <= 200);
        }
    }
}
