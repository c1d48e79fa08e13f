use crate::lexicon::Lexicon;

/// Starter dictionary bundled with the crate: common characters and
/// phrases with IPA readings, tone letters included. Full databases load
/// through [`Lexicon::from_path`].
pub fn load_bundled() -> Lexicon {
    let source = include_str!("../data/yue.tsv");
    Lexicon::from_source(source).unwrap_or_default()
}
