use std::ops::Range;

use fake::Fake;
use fake::faker::company::{en as company_en, pt_br as company_pt_br};
use fake::faker::lorem::{en as lorem_en, pt_br as lorem_pt_br};
use fake::faker::name::{en as name_en, pt_br as name_pt_br};
use rand::Rng;

use crate::faker_rs::locales::LocaleKey;

/// Words drawn per sentence.
const SENTENCE_WORDS: Range<usize> = 4..9;

/// Draws filler text (company names, person names, paragraphs) for one locale.
#[derive(Clone, Copy, Debug, Default)]
pub struct FakeRsAdapter {
    locale: LocaleKey,
}

impl FakeRsAdapter {
    pub fn new(locale: LocaleKey) -> Self {
        Self { locale }
    }

    pub fn company<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        match self.locale {
            LocaleKey::EnUs => company_en::CompanyName().fake_with_rng(rng),
            LocaleKey::PtBr => company_pt_br::CompanyName().fake_with_rng(rng),
        }
    }

    pub fn person_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        match self.locale {
            LocaleKey::EnUs => name_en::Name().fake_with_rng(rng),
            LocaleKey::PtBr => name_pt_br::Name().fake_with_rng(rng),
        }
    }

    /// Single-line paragraph of exactly `sentences` capitalized sentences.
    pub fn paragraph<R: Rng + ?Sized>(&self, sentences: usize, rng: &mut R) -> String {
        (0..sentences)
            .map(|_| capitalize(&self.sentence(rng)))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn sentence<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        match self.locale {
            LocaleKey::EnUs => lorem_en::Sentence(SENTENCE_WORDS).fake_with_rng(rng),
            LocaleKey::PtBr => lorem_pt_br::Sentence(SENTENCE_WORDS).fake_with_rng(rng),
        }
    }
}

fn capitalize(sentence: &str) -> String {
    let mut chars = sentence.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn paragraphs_are_single_line_sentences() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for locale in LocaleKey::ALL {
            let faker = FakeRsAdapter::new(locale);
            for _ in 0..100 {
                let paragraph = faker.paragraph(3, &mut rng);
                assert!(!paragraph.contains('\n'), "{paragraph:?}");
                assert!(paragraph.ends_with('.'));
                assert_eq!(paragraph.matches('.').count(), 3);
                for sentence in paragraph.split(". ") {
                    assert!(sentence.starts_with(|ch: char| ch.is_uppercase()), "{sentence:?}");
                }
            }
        }
    }

    #[test]
    fn capitalize_only_touches_the_first_letter() {
        assert_eq!(capitalize("odio aliquam qui."), "Odio aliquam qui.");
        assert_eq!(capitalize(""), "");
    }
}
