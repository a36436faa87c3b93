//! Fixed demo batch used when the API is unavailable.

use crate::models::{EngagementTier, GenerationContext, Idea};

/// Builds the deterministic five-idea demo batch. The season and special
/// events from the context are woven into the descriptions so the demo
/// output still reflects the caller's inputs.
pub fn demo_ideas(context: &GenerationContext) -> Vec<Idea> {
    let mut ideas = vec![
        Idea {
            title: "Frango Crocante do Dia".to_string(),
            description: "Mostre o frango saindo da fritadeira, dourado e crocante, \
                          com aquele barulhinho irresistível."
                .to_string(),
            format: "video".to_string(),
            hashtags: vec![
                "#FrangoCrocante".to_string(),
                "#JetChicken".to_string(),
                "#LondrinaPR".to_string(),
            ],
            call_to_action: "Peça já o seu pelo delivery!".to_string(),
            engagement: EngagementTier::High,
        },
        Idea {
            title: "Polenta Frita Imperdível".to_string(),
            description: "Close na polenta frita sequinha por fora e cremosa por dentro, \
                          acompanhamento perfeito para o balde de frango."
                .to_string(),
            format: "foto".to_string(),
            hashtags: vec![
                "#PolentaFrita".to_string(),
                "#Acompanhamento".to_string(),
                "#JetChicken".to_string(),
            ],
            call_to_action: "Marque quem ama polenta!".to_string(),
            engagement: EngagementTier::Medium,
        },
        Idea {
            title: "Combo Família Especial".to_string(),
            description: "Apresente o combo família na mesa posta: balde grande, \
                          acompanhamentos e refrigerante para compartilhar."
                .to_string(),
            format: "foto".to_string(),
            hashtags: vec![
                "#ComboFamilia".to_string(),
                "#AlmocoEmFamilia".to_string(),
                "#JetChicken".to_string(),
            ],
            call_to_action: "Reúna a família e aproveite!".to_string(),
            engagement: EngagementTier::High,
        },
        Idea {
            title: "Depoimento de Cliente".to_string(),
            description: "Compartilhe a avaliação de um cliente satisfeito com foto \
                          do pedido que ele fez."
                .to_string(),
            format: "foto".to_string(),
            hashtags: vec![
                "#ClienteSatisfeito".to_string(),
                "#Depoimento".to_string(),
                "#JetChicken".to_string(),
            ],
            call_to_action: "Conte pra gente sua experiência!".to_string(),
            engagement: EngagementTier::Medium,
        },
        Idea {
            title: "Happy Hour Especial".to_string(),
            description: "Divulgue a promoção de fim de tarde: porções de frango com \
                          preço especial para quem chega depois das 17h."
                .to_string(),
            format: "video".to_string(),
            hashtags: vec![
                "#HappyHour".to_string(),
                "#Promocao".to_string(),
                "#JetChicken".to_string(),
            ],
            call_to_action: "Chame os amigos e venha!".to_string(),
            engagement: EngagementTier::Medium,
        },
    ];

    if let Some(season) = context.season.as_deref().filter(|s| !s.is_empty()) {
        ideas[0]
            .description
            .push_str(&format!(" Perfeito para o {season}!"));
    }
    if let Some(events) = context.special_events.as_deref().filter(|s| !s.is_empty()) {
        ideas[2]
            .description
            .push_str(&format!(" Especial para {events}!"));
    }

    ideas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_batch_has_five_ideas() {
        let ideas = demo_ideas(&GenerationContext::default());
        assert_eq!(ideas.len(), 5);
        assert!(ideas.iter().all(|idea| !idea.hashtags.is_empty()));
    }

    #[test]
    fn season_and_events_are_woven_into_descriptions() {
        let context = GenerationContext {
            season: Some("Inverno".to_string()),
            special_events: Some("Festa Junina".to_string()),
            previous_performance: None,
        };
        let ideas = demo_ideas(&context);
        assert!(ideas[0].description.ends_with("Perfeito para o Inverno!"));
        assert!(ideas[2].description.ends_with("Especial para Festa Junina!"));
        assert!(!ideas[1].description.contains("Inverno"));
    }

    #[test]
    fn demo_batch_is_deterministic() {
        let context = GenerationContext::default();
        assert_eq!(demo_ideas(&context), demo_ideas(&context));
    }
}
