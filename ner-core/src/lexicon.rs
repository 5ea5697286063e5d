//! # Léxicos por Idioma
//!
//! Conhecimento explícito embutido nos modelos: listas de entidades conhecidas
//! (gazetteers), títulos que antecedem nomes de pessoas, sufixos de empresas,
//! palavras funcionais e palavras de contexto que sinalizam cada categoria.
//!
//! As entradas de entidades podem ter várias palavras ("Fundo Monetário
//! Internacional"). O motor de regras casa as frases inteiras; o extrator de
//! features usa as palavras isoladas.

use crate::language::Language;

/// Léxico de um idioma. Todas as listas são estáticas.
#[derive(Debug, Clone, Copy)]
pub struct Lexicon {
    pub persons: &'static [&'static str],
    pub locations: &'static [&'static str],
    pub organizations: &'static [&'static str],
    pub misc: &'static [&'static str],
    /// Palavras que antecedem nomes de pessoas ("ministro", "Mr.")
    pub titles: &'static [&'static str],
    /// Sufixos que fecham nomes de empresas ("S.A.", "Inc.")
    pub org_suffixes: &'static [&'static str],
    /// Palavras que nunca são entidades por si só
    pub stopwords: &'static [&'static str],
    /// Palavra anterior que sugere um local ("em", "in")
    pub location_cues: &'static [&'static str],
    /// Palavra anterior que sugere uma organização ("banco", "university")
    pub organization_cues: &'static [&'static str],
    /// Palavra anterior que sugere miscelânea ("copa", "operation")
    pub misc_cues: &'static [&'static str],
    /// Palavras minúsculas que podem ligar partes de um nome ("da", "of")
    pub connectors: &'static [&'static str],
}

impl Lexicon {
    /// Verifica se o léxico tem o mínimo para construir um modelo.
    pub fn validate(&self) -> Result<(), String> {
        let required = [
            ("persons", self.persons),
            ("locations", self.locations),
            ("organizations", self.organizations),
            ("stopwords", self.stopwords),
        ];
        for (name, entries) in required {
            if entries.is_empty() {
                return Err(format!("lista '{name}' vazia"));
            }
            if let Some(blank) = entries.iter().find(|e| e.trim().is_empty()) {
                return Err(format!("entrada em branco na lista '{name}': {blank:?}"));
            }
        }
        Ok(())
    }
}

/// Léxico embutido do idioma
pub fn lexicon(language: Language) -> &'static Lexicon {
    match language {
        Language::Pt => &PORTUGUESE,
        Language::En => &ENGLISH,
    }
}

pub static PORTUGUESE: Lexicon = Lexicon {
    persons: &[
        "Paulo Guedes", "Luiz Inácio Lula da Silva", "Lula", "Jair Bolsonaro", "Dilma Rousseff",
        "Michel Temer", "Fernando Henrique Cardoso", "Fernando Haddad", "Geraldo Alckmin",
        "Getúlio Vargas", "Juscelino Kubitschek", "Dom Pedro", "Princesa Isabel", "Tiradentes",
        "Zumbi dos Palmares", "Henrique Meirelles", "Guido Mantega", "Roberto Campos Neto",
        "Gabriel Galípolo", "Simone Tebet", "Marina Silva", "Sergio Moro", "Ciro Gomes",
        "Ayrton Senna", "Pelé", "Ronaldo", "Ronaldinho", "Zico", "Garrincha", "Neymar",
        "Vinícius Júnior", "Marta", "Gisele Bündchen", "Xuxa", "Ivete Sangalo", "Anitta",
        "Caetano Veloso", "Gilberto Gil", "Chico Buarque", "Machado de Assis",
        "Carlos Drummond de Andrade", "Clarice Lispector", "Tarsila do Amaral",
        "Oswald de Andrade", "Mário de Andrade", "Oswaldo Cruz", "Margareth Dalcolmo",
        "Kristalina Georgieva", "Joe Biden", "Donald Trump", "Emmanuel Macron",
        "Paulo", "João", "Maria", "José", "Ana", "Pedro", "Carlos", "Luís", "Luiz",
        "Fernanda", "Juliana", "Rafael", "Marcos", "Francisco", "Antônio", "Silva",
        "Santos", "Oliveira", "Souza", "Pereira", "Costa", "Rodrigues", "Almeida",
    ],
    locations: &[
        "Brasil", "Brasília", "São Paulo", "Rio de Janeiro", "Belo Horizonte", "Salvador",
        "Fortaleza", "Manaus", "Curitiba", "Recife", "Porto Alegre", "Belém", "Goiânia",
        "Florianópolis", "Maceió", "Natal", "Teresina", "Cuiabá", "Vitória", "São Luís",
        "Minas Gerais", "Bahia", "Pernambuco", "Paraná", "Amazonas", "Pará",
        "Rio Grande do Sul", "Santa Catarina", "Amazônia", "Pantanal", "Cerrado",
        "Nordeste", "Sudeste", "Centro-Oeste", "Ipiranga", "Tietê", "Xingu",
        "Washington", "Nova York", "Estados Unidos", "EUA", "Argentina", "Chile",
        "Colômbia", "Peru", "Venezuela", "Uruguai", "Paraguai", "Bolívia", "México",
        "Portugal", "Lisboa", "Espanha", "França", "Paris", "Alemanha", "Berlim",
        "Itália", "Roma", "Inglaterra", "Londres", "Reino Unido", "China", "Pequim",
        "Japão", "Tóquio", "Rússia", "Índia", "África", "Europa", "Ásia",
        "América Latina", "América do Sul",
    ],
    organizations: &[
        "Fundo Monetário Internacional", "FMI", "Banco Mundial", "Grupo Banco Mundial",
        "Ministério da Economia", "Economia", "Banco Central", "Banco do Brasil",
        "Caixa Econômica Federal", "BNDES", "Receita Federal", "Congresso Nacional",
        "Senado Federal", "Câmara dos Deputados", "Supremo Tribunal Federal", "STF",
        "Tribunal Superior Eleitoral", "TSE", "Conselhos de Governadores",
        "Petrobras", "Vale", "Embraer", "Nubank", "Itaú", "Bradesco", "Santander",
        "IBGE", "INPE", "Fiocruz", "Instituto Butantan", "Anvisa", "Sistema Único de Saúde",
        "ONU", "Nações Unidas", "OMS", "OCDE", "Mercosul", "BRICS", "FIFA", "CBF",
        "Flamengo", "Palmeiras", "Corinthians", "Grêmio", "Santos", "Fluminense",
        "USP", "Unicamp", "UFRJ", "Globo", "Folha de S.Paulo", "Estadão",
    ],
    misc: &[
        "Reuniões Anuais", "IMF World Bank Annual Meetings", "Copa do Mundo",
        "Copa América", "Jogos Olímpicos", "Olimpíadas", "Libertadores", "Carnaval",
        "Covid-19", "Dengue", "Zika", "PIB", "Selic", "IPCA", "Real", "Plano Real",
        "Constituição", "Lei Áurea", "Lei Maria da Penha", "Operação Lava Jato",
        "Independência do Brasil", "Inconfidência Mineira", "Semana de Arte Moderna",
        "Modernismo",
    ],
    titles: &[
        "presidente", "ex-presidente", "ministro", "ministra", "senador", "senadora",
        "deputado", "deputada", "governador", "governadora", "prefeito", "prefeita",
        "secretário", "secretária", "diretor", "diretora", "diretora-gerente",
        "general", "dr.", "dra.", "sr.", "sra.", "prof.", "profa.", "dom", "princesa",
        "rei", "rainha", "papa", "padre", "jogador", "jogadora", "técnico", "cantor",
        "cantora", "ator", "atriz", "escritor", "escritora", "pesquisadora", "pesquisador",
    ],
    org_suffixes: &["S.A.", "S/A", "Ltda", "Ltda.", "EIRELI", "ME", "Inc.", "Corp."],
    stopwords: &[
        "o", "a", "os", "as", "um", "uma", "uns", "umas", "de", "do", "da", "dos", "das",
        "em", "no", "na", "nos", "nas", "num", "numa", "por", "pelo", "pela", "pelos",
        "pelas", "para", "pra", "com", "sem", "sob", "sobre", "entre", "e", "ou", "mas",
        "que", "se", "ao", "aos", "à", "às", "este", "esta", "isto", "esse", "essa",
        "isso", "aquele", "aquela", "nesta", "neste", "nessa", "nesse", "seu", "sua",
        "seus", "suas", "ele", "ela", "eles", "elas", "eu", "nós", "você", "não", "sim",
        "já", "também", "muito", "mais", "menos", "como", "quando", "onde", "segundo",
        "após", "durante", "ontem", "hoje", "amanhã",
    ],
    location_cues: &[
        "em", "no", "na", "para", "cidade", "estado", "país", "capital", "região",
        "município", "rio", "estádio", "aeroporto",
    ],
    organization_cues: &[
        "ministério", "instituto", "tribunal", "empresa", "banco", "universidade",
        "clube", "partido", "fundação", "agência", "grupo", "startup",
    ],
    misc_cues: &["copa", "campeonato", "lei", "operação", "plano", "taxa", "vírus"],
    connectors: &["de", "da", "do", "das", "dos", "e"],
};

pub static ENGLISH: Lexicon = Lexicon {
    persons: &[
        "Paulo Guedes", "Joe Biden", "Barack Obama", "Donald Trump", "Kamala Harris",
        "Hillary Clinton", "Bill Clinton", "George Washington", "Abraham Lincoln",
        "Janet Yellen", "Jerome Powell", "Kristalina Georgieva", "Christine Lagarde",
        "Ajay Banga", "David Malpass", "Elon Musk", "Bill Gates", "Steve Jobs",
        "Jeff Bezos", "Mark Zuckerberg", "Tim Cook", "Warren Buffett", "Rishi Sunak",
        "Boris Johnson", "Emmanuel Macron", "Angela Merkel", "Lula", "Jair Bolsonaro",
        "Taylor Swift", "Lionel Messi", "Serena Williams", "Albert Einstein",
        "Isaac Newton", "Marie Curie", "William Shakespeare",
        "Paulo", "John", "Mary", "James", "Robert", "Michael", "David", "Sarah",
        "Jennifer", "Elizabeth", "Thomas", "Richard", "Smith", "Johnson", "Williams",
        "Brown", "Jones", "Miller", "Davis", "Wilson", "Taylor", "Anderson",
    ],
    locations: &[
        "Washington", "Washington D.C.", "United States", "United States of America",
        "USA", "America", "New York", "Los Angeles", "Chicago", "San Francisco",
        "Boston", "Texas", "California", "Florida", "Canada", "Toronto", "Mexico",
        "Brazil", "Brasília", "São Paulo", "Rio de Janeiro", "Argentina", "Chile",
        "Colombia", "Peru", "United Kingdom", "UK", "England", "London", "Scotland",
        "Ireland", "France", "Paris", "Germany", "Berlin", "Italy", "Rome", "Spain",
        "Madrid", "Portugal", "Lisbon", "Russia", "Moscow", "China", "Beijing",
        "Japan", "Tokyo", "India", "Africa", "Europe", "Asia", "Latin America",
        "South America", "Middle East", "Amazon",
    ],
    organizations: &[
        "International Monetary Fund", "IMF", "World Bank", "World Bank Group",
        "Federal Reserve", "Fed", "Treasury", "White House", "Congress", "Senate",
        "Supreme Court", "Pentagon", "United Nations", "UN", "NATO", "WHO", "OECD",
        "European Union", "EU", "European Central Bank", "Ministry of Economy",
        "Boards of Governors", "Google", "Apple", "Microsoft", "Amazon.com", "Meta",
        "Tesla", "IBM", "Intel", "Goldman Sachs", "JPMorgan", "Petrobras", "Embraer",
        "Harvard University", "Harvard", "MIT", "Stanford", "Oxford", "BBC", "CNN",
        "Reuters", "The New York Times", "FIFA", "NASA", "FBI",
    ],
    misc: &[
        "Annual Meetings", "IMF World Bank Annual Meetings", "World Cup", "Olympics",
        "Olympic Games", "Super Bowl", "Covid-19", "COVID-19", "GDP", "Brexit",
        "Christmas", "Thanksgiving", "Constitution", "Bill of Rights", "Brazilian",
        "American", "British", "Chinese", "European", "Democrats", "Republicans",
        "English", "Portuguese",
    ],
    titles: &[
        "president", "vice-president", "minister", "secretary", "senator", "governor",
        "mayor", "chairman", "chairwoman", "director", "ceo", "general", "king",
        "queen", "prince", "princess", "pope", "mr.", "mrs.", "ms.", "dr.", "prof.",
        "sir", "lord", "lady", "judge", "justice", "player", "coach", "actor",
        "actress", "singer", "writer", "managing",
    ],
    org_suffixes: &["Inc.", "Inc", "Corp.", "Corp", "Ltd.", "Ltd", "LLC", "PLC", "Co."],
    stopwords: &[
        "the", "a", "an", "of", "in", "on", "at", "to", "for", "from", "by", "with",
        "without", "and", "or", "but", "as", "is", "are", "was", "were", "be", "been",
        "this", "that", "these", "those", "his", "her", "their", "its", "our", "my",
        "he", "she", "they", "we", "i", "you", "it", "not", "also", "after", "before",
        "during", "when", "where", "while", "today", "yesterday", "tomorrow",
        "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday",
        "january", "february", "march", "april", "may", "june", "july", "august",
        "september", "october", "november", "december", "'s",
    ],
    location_cues: &["in", "at", "near", "city", "state", "country", "capital", "region"],
    organization_cues: &["bank", "university", "company", "ministry", "institute", "agency", "party"],
    misc_cues: &["cup", "championship", "law", "operation", "act"],
    connectors: &["of", "the", "and", "de", "da", "van", "von"],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lexicons_are_valid() {
        for lang in Language::ALL {
            assert!(lexicon(lang).validate().is_ok(), "léxico inválido: {lang}");
        }
    }

    #[test]
    fn test_empty_list_is_rejected() {
        let broken = Lexicon {
            persons: &[],
            ..PORTUGUESE
        };
        assert_eq!(broken.validate(), Err("lista 'persons' vazia".to_string()));
    }
}
