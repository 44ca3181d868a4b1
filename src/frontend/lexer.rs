use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum Token {
    #[token("print")]
    Print,

    #[token("=")]
    Eq,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    #[token("%")]
    Percent,

    #[token("&")]
    Amp,

    #[token("|")]
    Bar,

    #[token("^")]
    Caret,

    #[token("<<")]
    LtLt,

    #[token(">>")]
    GtGt,

    #[token("~")]
    Tilde,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token(";")]
    Semicolon,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    #[regex(r"[0-9]+")]
    Number,

    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
}

impl Token {
    /// Token type name as it appears in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Token::Print => "PRINT",
            Token::Eq => "EQ",
            Token::Plus => "PLUS",
            Token::Minus => "MINUS",
            Token::Star => "STAR",
            Token::Slash => "SLASH",
            Token::Percent => "PERCENT",
            Token::Amp => "AMP",
            Token::Bar => "BAR",
            Token::Caret => "CARET",
            Token::LtLt => "LTLT",
            Token::GtGt => "GTGT",
            Token::Tilde => "TILDE",
            Token::LParen => "LPAREN",
            Token::RParen => "RPAREN",
            Token::Semicolon => "SEMICOLON",
            Token::Ident => "IDENT",
            Token::Number => "NUMBER",
            Token::Comment => "COMMENT",
        }
    }
}

/// Name reported for input that matches no token.
pub const ILLEGAL: &str = "ILLEGAL";

/// Name reported for the end-of-input marker.
pub const EOF: &str = "EOF";
