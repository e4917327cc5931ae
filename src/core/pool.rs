// src/core/pool.rs
use crate::core::types::{HaikuOptions, Lexicon, TermPool, Wrestler};

/// Picks the wrestlers a request is about.
///
/// Name filters win over the era filter. A filter that matches nobody
/// falls back to the whole roster so the pool is never starved.
pub fn select_wrestlers<'a>(lexicon: &'a Lexicon, options: &HaikuOptions) -> Vec<&'a Wrestler> {
    let selected: Vec<&Wrestler> = if let Some(requested) = options.requested_wrestlers() {
        let needles: Vec<String> = requested.iter().map(|r| r.to_lowercase()).collect();
        lexicon
            .wrestlers
            .iter()
            .filter(|w| {
                let name = w.name.to_lowercase();
                needles.iter().any(|needle| name.contains(needle.as_str()))
            })
            .collect()
    } else if let Some(era) = options.era.as_deref() {
        lexicon.wrestlers.iter().filter(|w| w.era == era).collect()
    } else {
        lexicon.wrestlers.iter().collect()
    };

    if selected.is_empty() {
        log::debug!("wrestler filter matched nothing, using all {} wrestlers", lexicon.wrestlers.len());
        return lexicon.wrestlers.iter().collect();
    }
    selected
}

/// Builds the master pool shared by all three lines of one haiku:
/// names and aliases, then finishers and catchphrases, then tropes,
/// objects, pivots and the requested show and era.
pub fn build_pool(lexicon: &Lexicon, options: &HaikuOptions) -> TermPool {
    let wrestlers = select_wrestlers(lexicon, options);

    let names = wrestlers
        .iter()
        .flat_map(|w| std::iter::once(&w.name).chain(&w.aliases));
    let actions = wrestlers
        .iter()
        .flat_map(|w| w.finishers.iter().chain(&w.catchphrases));
    let context = lexicon
        .tropes
        .iter()
        .chain(&lexicon.objects)
        .chain(&lexicon.pivots)
        .chain(options.show.as_ref())
        .chain(options.era.as_ref());

    let pool = TermPool::from_terms(names.chain(actions).chain(context).cloned());
    log::debug!("term pool holds {} terms from {} wrestlers", pool.len(), wrestlers.len());
    pool
}
