/// How a text is cut into the entries that get compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum TokenMode {
    #[default]
    Lines,
    Words,
    Chars,
}

impl TokenMode {
    pub fn split(&self, content: &str) -> Vec<String> {
        match self {
            TokenMode::Lines => content.lines().map(str::to_string).collect(),
            TokenMode::Words => content.split_whitespace().map(str::to_string).collect(),
            TokenMode::Chars => content.chars().map(String::from).collect(),
        }
    }
}
