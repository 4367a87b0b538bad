//! Locale-varied names, addresses and filler text.
//!
//! Used where a dataset should mix scripts and diacritics the way real
//! international customer data does. Pools are small but cover Latin,
//! CJK and Cyrillic scripts.

use rand::Rng;

/// Supported locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    EnUs,
    DeDe,
    FrFr,
    JaJp,
    ZhCn,
    RuRu,
}

impl Locale {
    pub const ALL: [Locale; 6] = [
        Locale::EnUs,
        Locale::DeDe,
        Locale::FrFr,
        Locale::JaJp,
        Locale::ZhCn,
        Locale::RuRu,
    ];

    /// Uniform pick among the supported locales.
    pub fn any<R: Rng>(rng: &mut R) -> Locale {
        Locale::ALL[rng.gen_range(0..Locale::ALL.len())]
    }

    fn given_names(&self) -> &'static [&'static str] {
        match self {
            Locale::EnUs => &["Oliver", "Charlotte", "Henry", "Amelia", "Lucas", "Harper"],
            Locale::DeDe => &["Jürgen", "Björn", "Käthe", "Sören", "Änne", "Lukas"],
            Locale::FrFr => &["Amélie", "François", "Cécile", "Édouard", "Hélène", "Rémy"],
            Locale::JaJp => &["太郎", "花子", "健一", "美咲", "直樹", "由美"],
            Locale::ZhCn => &["伟", "芳", "娜", "军", "敏", "静"],
            Locale::RuRu => &["Иван", "Ольга", "Дмитрий", "Наталья", "Сергей", "Екатерина"],
        }
    }

    fn family_names(&self) -> &'static [&'static str] {
        match self {
            Locale::EnUs => &["Bennett", "Hayes", "Coleman", "Griffin", "Murray", "Ford"],
            Locale::DeDe => &["Müller", "Schäfer", "Köhler", "Weiß", "Großmann", "Becker"],
            Locale::FrFr => &["Lefèvre", "Moreau", "Durand", "Rousseau", "Bélanger", "Gérard"],
            Locale::JaJp => &["佐藤", "鈴木", "高橋", "田中", "渡辺", "伊藤"],
            Locale::ZhCn => &["王", "李", "张", "刘", "陈", "杨"],
            Locale::RuRu => &["Иванов", "Смирнова", "Кузнецов", "Попова", "Соколов", "Лебедева"],
        }
    }

    fn streets(&self) -> &'static [&'static str] {
        match self {
            Locale::EnUs => &["Birchwood Lane", "Harbor Street", "Cypress Avenue"],
            Locale::DeDe => &["Hauptstraße", "Bahnhofstraße", "Gartenweg"],
            Locale::FrFr => &["Rue de la Paix", "Avenue des Champs", "Boulevard Saint-Michel"],
            Locale::JaJp => &["桜通り", "本町通", "中央大通り"],
            Locale::ZhCn => &["人民路", "中山路", "解放大道"],
            Locale::RuRu => &["улица Ленина", "Невский проспект", "улица Мира"],
        }
    }

    fn cities(&self) -> &'static [&'static str] {
        match self {
            Locale::EnUs => &["Portland", "Austin", "Denver"],
            Locale::DeDe => &["München", "Köln", "Düsseldorf"],
            Locale::FrFr => &["Orléans", "Besançon", "Nîmes"],
            Locale::JaJp => &["東京", "大阪", "京都"],
            Locale::ZhCn => &["北京", "上海", "广州"],
            Locale::RuRu => &["Москва", "Санкт-Петербург", "Новосибирск"],
        }
    }

    fn phrases(&self) -> &'static [&'static str] {
        match self {
            Locale::EnUs => &[
                "Delivery left at the front desk.",
                "Prefers contact by email.",
                "Long-standing customer since 2019.",
            ],
            Locale::DeDe => &[
                "Lieferung bitte beim Nachbarn abgeben.",
                "Kunde wünscht Rückruf am Nachmittag.",
                "Rechnung geht an die Münchner Filiale.",
            ],
            Locale::FrFr => &[
                "Livraison à l'accueil de l'immeuble.",
                "Préfère être contacté par téléphone.",
                "Client fidèle depuis plusieurs années.",
            ],
            Locale::JaJp => &[
                "配達は管理人室までお願いします。",
                "午後の連絡を希望しています。",
                "長年のお得意様です。",
            ],
            Locale::ZhCn => &[
                "请将包裹放在前台。",
                "客户希望下午联系。",
                "多年老客户。",
            ],
            Locale::RuRu => &[
                "Доставка через служебный вход.",
                "Просит звонить после обеда.",
                "Постоянный клиент с 2019 года.",
            ],
        }
    }
}

/// Locale-appropriate full name.
pub fn name<R: Rng>(rng: &mut R, locale: Locale) -> String {
    let given = locale.given_names();
    let family = locale.family_names();
    let given = given[rng.gen_range(0..given.len())];
    let family = family[rng.gen_range(0..family.len())];
    match locale {
        // Family name first in CJK locales.
        Locale::JaJp | Locale::ZhCn => format!("{family}{given}"),
        _ => format!("{given} {family}"),
    }
}

/// Locale-appropriate single-line address.
pub fn address<R: Rng>(rng: &mut R, locale: Locale) -> String {
    let streets = locale.streets();
    let cities = locale.cities();
    let street = streets[rng.gen_range(0..streets.len())];
    let city = cities[rng.gen_range(0..cities.len())];
    let number = rng.gen_range(1..=200);
    match locale {
        Locale::JaJp | Locale::ZhCn => format!("{city}{street}{number}号"),
        Locale::DeDe | Locale::RuRu => format!("{street} {number}, {city}"),
        _ => format!("{number} {street}, {city}"),
    }
}

/// Locale-appropriate filler note of at most `max_chars` characters.
pub fn text<R: Rng>(rng: &mut R, locale: Locale, max_chars: usize) -> String {
    let phrases = locale.phrases();
    let mut out = String::new();
    for _ in 0..rng.gen_range(1..=3) {
        let p = phrases[rng.gen_range(0..phrases.len())];
        if out.chars().count() + p.chars().count() + 1 > max_chars {
            break;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(p);
    }
    if out.is_empty() {
        out.push_str(phrases[0]);
        out = out.chars().take(max_chars).collect();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_every_locale_produces_values() {
        let mut rng = StdRng::seed_from_u64(42);
        for locale in Locale::ALL {
            assert!(!name(&mut rng, locale).is_empty());
            assert!(!address(&mut rng, locale).is_empty());
            assert!(!text(&mut rng, locale, 200).is_empty());
        }
    }

    #[test]
    fn test_non_latin_scripts_present() {
        let mut rng = StdRng::seed_from_u64(42);
        let ru = name(&mut rng, Locale::RuRu);
        assert!(ru.chars().any(|c| ('\u{0400}'..='\u{04FF}').contains(&c)));
        let ja = name(&mut rng, Locale::JaJp);
        assert!(ja.chars().any(|c| c as u32 > 0x3000));
    }

    #[test]
    fn test_text_respects_char_budget() {
        let mut rng = StdRng::seed_from_u64(42);
        for locale in Locale::ALL {
            for _ in 0..10 {
                assert!(text(&mut rng, locale, 80).chars().count() <= 80);
            }
        }
    }
}
