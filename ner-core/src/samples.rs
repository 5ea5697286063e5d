//! Textos de exemplo que pré-preenchem a página.

use crate::language::Language;

const SAMPLE_PT: &str = "O ministro da Economia, Paulo Guedes, participou de cinco encontros em seu \
primeiro dia de agenda nas Reuniões Anuais do Fundo Monetário Internacional e dos Conselhos de \
Governadores do Grupo Banco Mundial (IMF World Bank Annual Meetings), nesta terça-feira (11/10), \
em Washington, Estados Unidos.";

const SAMPLE_EN: &str = "Brazil's Economy Minister Paulo Guedes attended five meetings on the first \
day of the Annual Meetings of the International Monetary Fund and the Boards of Governors of the \
World Bank Group on Tuesday (10/11) in Washington, United States.";

/// Texto de exemplo do idioma.
pub fn sample_text(language: Language) -> &'static str {
    match language {
        Language::Pt => SAMPLE_PT,
        Language::En => SAMPLE_EN,
    }
}

/// Pares `(idioma, exemplo)` na ordem de [`Language::ALL`].
pub fn samples() -> impl Iterator<Item = (Language, &'static str)> {
    Language::ALL.into_iter().map(|lang| (lang, sample_text(lang)))
}
