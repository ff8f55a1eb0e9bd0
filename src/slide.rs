use rand::Rng;
use rand::seq::SliceRandom;

/// One unit of carousel content. The controller never looks inside `content`.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide<C> {
    pub id: u32,
    pub content: C,
}

impl<C> Slide<C> {
    pub fn new(id: u32, content: C) -> Self {
        Self { id, content }
    }
}

/// Number the payloads in order, starting at 1.
pub fn slides_from<C>(contents: impl IntoIterator<Item = C>) -> Vec<Slide<C>> {
    contents
        .into_iter()
        .zip(1..)
        .map(|(content, id)| Slide::new(id, content))
        .collect()
}

/// Randomize slide order. Ids travel with their content.
pub fn shuffle_slides<C, R: Rng + ?Sized>(slides: &mut [Slide<C>], rng: &mut R) {
    slides.shuffle(rng);
}
