#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Ping,
    LanguagesList,
    LanguageSet,
    GlossaryLoad,
    GlossaryDiscover,
    GlossaryInfo,
    GlossaryLookup,
    TermsFind,
    MatchField,
    TextOpen,
    Unknown,
}

impl From<&str> for Command {
    fn from(s: &str) -> Self {
        match s {
            "ping" => Command::Ping,
            "languages.list" => Command::LanguagesList,
            "language.set" => Command::LanguageSet,
            "glossary.load" => Command::GlossaryLoad,
            "glossary.discover" => Command::GlossaryDiscover,
            "glossary.info" => Command::GlossaryInfo,
            "glossary.lookup" => Command::GlossaryLookup,
            "terms.find" => Command::TermsFind,
            "match.field" => Command::MatchField,
            "text.open" => Command::TextOpen,
            _ => Command::Unknown,
        }
    }
}
