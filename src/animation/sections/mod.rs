//! One animation per section.

mod adn;
mod bigbang;
mod humano;
mod newton;
mod vitruvio;

pub use adn::AdnAnimation;
pub use bigbang::BigBangAnimation;
pub use humano::HumanoAnimation;
pub use newton::NewtonAnimation;
pub use vitruvio::VitruvioAnimation;

use super::traits::{boxed, BoxedAnimation};
use crate::options::SectionOptions;
use crate::section::SectionId;

/// Build the animation for `section` with empty model slots.
#[must_use]
pub fn create(section: SectionId, sections: &SectionOptions) -> BoxedAnimation {
    match section {
        SectionId::BigBang => boxed(BigBangAnimation::new(sections.bigbang.clone())),
        SectionId::Adn => boxed(AdnAnimation::new(sections.adn.clone())),
        SectionId::Humano => boxed(HumanoAnimation::new(sections.humano.clone())),
        SectionId::Vitruvio => {
            boxed(VitruvioAnimation::new(sections.vitruvio.clone()))
        }
        SectionId::Newton => boxed(NewtonAnimation::new(sections.newton.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_animation_owns_its_sections_slots() {
        let sections = SectionOptions::default();
        for section in SectionId::ALL {
            let anim = create(section, &sections);
            assert_eq!(anim.section(), section);
            let keys: Vec<_> = anim.slots().iter().map(|s| s.key()).collect();
            assert_eq!(keys, section.slots().to_vec());
            assert!(!anim.is_ready());
        }
    }
}
