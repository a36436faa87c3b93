//! Static caption, hashtag and tip catalog.
//!
//! Everything here is read-only and deterministic per pillar; the
//! randomness of the weekly agenda lives entirely in the generator's
//! selection of pillar, template and type.

use crate::models::Pillar;

/// Location string attached to every post.
pub const LOCATION: &str = "Jet Chicken - Londrina - PR";

/// Hashtags attached to every post regardless of pillar.
const BASE_HASHTAGS: [&str; 3] = ["#JetChicken", "#LondrinaPR", "#FrangoFrito"];

/// Hashtag lists never exceed this length.
const MAX_HASHTAGS: usize = 5;

/// Caption templates per pillar, five each.
pub fn caption_templates(pillar: Pillar) -> [&'static str; 5] {
    match pillar {
        Pillar::Product => [
            "Frango frito crocante chegando! 🍗 Venha experimentar a porção para compartilhar.",
            "Polenta frita crocante por fora, cremosa por dentro. O par perfeito do seu frango!",
            "Combo família: frango, polenta, batata frita e refrigerante. Economia garantida! 🍟",
            "Nosso tempero da casa faz toda a diferença. Prove e comprove! 😋",
            "Chopp Brahma gelado para acompanhar o melhor frango da cidade 🍺",
        ],
        Pillar::SocialProof => [
            "Clientes felizes no final de semana! #SaborQueFazHistoria",
            "\"Melhor frango frito de Londrina!\" — obrigado pelo carinho, conte sempre conosco ❤️",
            "Casa cheia ontem à noite! Obrigado Londrina pela preferência 🙌",
            "Mais uma avaliação 5 estrelas! Vem conhecer o motivo 🌟",
            "Quem já provou, recomenda. Marca aquele amigo que precisa conhecer!",
        ],
        Pillar::Institutional => [
            "Por trás de cada porção tem uma equipe dedicada. Conheça quem faz acontecer! 👨‍🍳",
            "Tradição e sabor desde o primeiro dia. Essa é a nossa história 📖",
            "Ingredientes frescos, selecionados todos os dias. Qualidade é compromisso.",
            "Nosso salão está de portas abertas te esperando. Vem pra cá!",
            "Cuidado e higiene em cada etapa do preparo. Pode confiar! ✅",
        ],
        Pillar::LocalEngagement => [
            "Promoção do chopp Brahma hoje das 18h às 20h 🍺",
            "Londrina, qual acompanhamento não pode faltar no seu pedido? Comenta aí! 👇",
            "Jogo do LEC hoje! Vem assistir com a gente e aquela porção de frango 🏆",
            "Sexta-feira em Londrina pede frango frito. Marca a galera do trampo!",
            "Enquete: polenta frita ou batata frita? O time da cidade decide! 🗳️",
        ],
    }
}

/// Hashtag set for a pillar: base tags plus pillar-specific ones,
/// truncated to at most [`MAX_HASHTAGS`].
pub fn hashtags_for(pillar: Pillar) -> Vec<String> {
    let specific: &[&str] = match pillar {
        Pillar::Product => &["#PolentaFrita", "#BatataFrita"],
        Pillar::SocialProof => &["#ClienteSatisfeito", "#SaborQueFazHistoria"],
        Pillar::Institutional => &["#NossaHistoria", "#FeitoComCarinho"],
        Pillar::LocalEngagement => &["#ChoppBrahma", "#HappyHour"],
    };

    BASE_HASHTAGS
        .iter()
        .chain(specific.iter())
        .take(MAX_HASHTAGS)
        .map(|tag| (*tag).to_string())
        .collect()
}

/// The fixed tip catalog the weekly tip rotation draws from.
pub const TIPS: [&str; 8] = [
    "Marcar localização: Jet Chicken - Londrina - PR",
    "Usar 3–5 hashtags locais",
    "Postar Reels 11h–13h ou 19h",
    "Interaja com perfis locais após postar",
    "Responda comentários na primeira hora",
    "Use enquetes nos stories para engajar",
    "Reposte conteúdo de clientes que marcarem a loja",
    "Varie os pilares ao longo da semana",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PILLARS;

    #[test]
    fn every_pillar_has_five_templates() {
        for pillar in PILLARS {
            let templates = caption_templates(pillar);
            assert_eq!(templates.len(), 5);
            assert!(templates.iter().all(|t| !t.is_empty()));
        }
    }

    #[test]
    fn hashtag_sets_are_bounded_and_deterministic() {
        for pillar in PILLARS {
            let tags = hashtags_for(pillar);
            assert!(!tags.is_empty());
            assert!(tags.len() <= MAX_HASHTAGS);
            assert_eq!(tags, hashtags_for(pillar));
            assert!(tags.iter().all(|t| t.starts_with('#')));
        }
    }

    #[test]
    fn tip_catalog_has_eight_distinct_entries() {
        let mut tips: Vec<_> = TIPS.to_vec();
        tips.sort_unstable();
        tips.dedup();
        assert_eq!(tips.len(), 8);
    }
}
