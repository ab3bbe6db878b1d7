use super::token::{CSSToken, HashType};

/// "U+FFFD REPLACEMENT CHARACTER"
const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

/// [§ 4.3 Tokenizer Algorithms](https://www.w3.org/TR/css-syntax-3/#tokenizer-algorithms)
///
/// Streaming CSS tokenizer. Tokens are pulled one at a time (it is an
/// [`Iterator`]); CSS Syntax's `<EOF-token>` is the end of iteration.
#[derive(Debug, Clone)]
pub struct CSSTokenizer {
    /// The input code points
    input: Vec<char>,
    /// Index of the next input code point
    position: usize,
}

impl CSSTokenizer {
    /// Create a tokenizer over `input`.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// Tokenize all of `input`.
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<CSSToken> {
        Self::new(input).collect()
    }

    /// [§ 4.3.1 Consume a token](https://www.w3.org/TR/css-syntax-3/#consume-token)
    ///
    /// Returns `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Option<CSSToken> {
        // "Consume comments."
        self.skip_comments();

        // "Consume the next input code point."
        let c = self.bump()?;

        let token = match c {
            // "Consume as much whitespace as possible. Return a <whitespace-token>."
            c if is_whitespace(c) => {
                self.skip_whitespace();
                CSSToken::Whitespace
            }

            // "U+0022 QUOTATION MARK (")" / "U+0027 APOSTROPHE (')"
            '"' | '\'' => self.consume_string(c),

            '#' => self.consume_hash(),

            // "U+002B PLUS SIGN (+)", "U+002D HYPHEN-MINUS (-)", "U+002E FULL STOP (.)"
            //
            // Each of these starts a number when followed by digits; a hyphen can
            // also start an ident sequence (`-moz-foo`, `--custom`).
            '+' | '-' | '.' => {
                self.reconsume();
                if self.starts_number() {
                    self.consume_numeric()
                } else if c == '-' && self.starts_ident() {
                    self.consume_ident_like()
                } else {
                    self.position += 1;
                    CSSToken::Delim(c)
                }
            }

            '@' => {
                // "If the next 3 input code points would start an ident sequence,
                // consume an ident sequence, create an <at-keyword-token>..."
                if self.starts_ident() {
                    CSSToken::AtKeyword(self.consume_name())
                } else {
                    CSSToken::Delim('@')
                }
            }

            // "U+005C REVERSE SOLIDUS (\)"
            '\\' => {
                if is_valid_escape(Some('\\'), self.peek_at(0)) {
                    self.reconsume();
                    self.consume_ident_like()
                } else {
                    // "This is a parse error."
                    CSSToken::Delim('\\')
                }
            }

            '(' => CSSToken::LeftParen,
            ')' => CSSToken::RightParen,
            '[' => CSSToken::LeftBracket,
            ']' => CSSToken::RightBracket,
            '{' => CSSToken::LeftBrace,
            '}' => CSSToken::RightBrace,
            ',' => CSSToken::Comma,
            ':' => CSSToken::Colon,
            ';' => CSSToken::Semicolon,

            // "digit"
            c if c.is_ascii_digit() => {
                self.reconsume();
                self.consume_numeric()
            }

            // "ident-start code point"
            c if is_ident_start(c) => {
                self.reconsume();
                self.consume_ident_like()
            }

            // "anything else"
            c => CSSToken::Delim(c),
        };

        Some(token)
    }

    /// [§ 4.3.2 Consume comments](https://www.w3.org/TR/css-syntax-3/#consume-comment)
    ///
    /// An unterminated comment runs to the end of the input.
    fn skip_comments(&mut self) {
        while self.peek_at(0) == Some('/') && self.peek_at(1) == Some('*') {
            self.position += 2;
            while self.position < self.input.len() {
                if self.peek_at(0) == Some('*') && self.peek_at(1) == Some('/') {
                    self.position += 2;
                    break;
                }
                self.position += 1;
            }
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek_at(0).is_some_and(is_whitespace) {
            self.position += 1;
        }
    }

    /// [§ 4.3.4 Consume a string token](https://www.w3.org/TR/css-syntax-3/#consume-string-token)
    fn consume_string(&mut self, ending_code_point: char) -> CSSToken {
        let mut value = String::new();

        loop {
            match self.bump() {
                // "ending code point" / "EOF" (a parse error, but the string stands)
                None => return CSSToken::String(value),
                Some(c) if c == ending_code_point => return CSSToken::String(value),

                // "newline" - "Reconsume the current input code point, create a
                // <bad-string-token>, and return it."
                Some('\n') => {
                    self.reconsume();
                    return CSSToken::BadString;
                }

                Some('\\') => match self.peek_at(0) {
                    // "If the next input code point is EOF, do nothing."
                    None => {}
                    // "Otherwise, if the next input code point is a newline, consume it."
                    Some('\n') => self.position += 1,
                    Some(_) => value.push(self.consume_escape()),
                },

                Some(c) => value.push(c),
            }
        }
    }

    /// The `#` branch of [§ 4.3.1](https://www.w3.org/TR/css-syntax-3/#consume-token).
    fn consume_hash(&mut self) -> CSSToken {
        let next = self.peek_at(0);
        if !(next.is_some_and(is_ident_char) || is_valid_escape(next, self.peek_at(1))) {
            return CSSToken::Delim('#');
        }

        // "If the next 3 input code points would start an ident sequence, set
        // the <hash-token>'s type flag to 'id'."
        let hash_type = if self.starts_ident() {
            HashType::Id
        } else {
            HashType::Unrestricted
        };
        CSSToken::Hash {
            value: self.consume_name(),
            hash_type,
        }
    }

    /// [§ 4.3.3 Consume a numeric token](https://www.w3.org/TR/css-syntax-3/#consume-numeric-token)
    fn consume_numeric(&mut self) -> CSSToken {
        let (value, int_value) = self.consume_number();

        if self.starts_ident() {
            CSSToken::Dimension {
                value,
                int_value,
                unit: self.consume_name(),
            }
        } else if self.peek_at(0) == Some('%') {
            self.position += 1;
            CSSToken::Percentage { value, int_value }
        } else {
            CSSToken::Number { value, int_value }
        }
    }

    /// [§ 4.3.12 Consume a number](https://www.w3.org/TR/css-syntax-3/#consume-number)
    ///
    /// Returns the value and, when the type flag is "integer", the integer value.
    fn consume_number(&mut self) -> (f64, Option<i64>) {
        let mut repr = String::new();
        let mut is_integer = true;

        if let Some(sign @ ('+' | '-')) = self.peek_at(0) {
            repr.push(sign);
            self.position += 1;
        }
        self.consume_digits(&mut repr);

        // "If the next 2 input code points are U+002E FULL STOP (.) followed by a digit..."
        if self.peek_at(0) == Some('.') && self.peek_at(1).is_some_and(|c| c.is_ascii_digit()) {
            repr.push('.');
            self.position += 1;
            self.consume_digits(&mut repr);
            is_integer = false;
        }

        // "If the next 2 or 3 input code points are U+0045 (E) or U+0065 (e),
        // optionally followed by U+002D (-) or U+002B (+), followed by a digit..."
        if let Some(e @ ('e' | 'E')) = self.peek_at(0) {
            let signed = matches!(self.peek_at(1), Some('+' | '-'));
            let digit_offset = if signed { 2 } else { 1 };
            if self.peek_at(digit_offset).is_some_and(|c| c.is_ascii_digit()) {
                repr.push(e);
                self.position += 1;
                if signed {
                    if let Some(sign) = self.bump() {
                        repr.push(sign);
                    }
                }
                self.consume_digits(&mut repr);
                is_integer = false;
            }
        }

        // Out-of-range values saturate to the largest finite magnitude.
        let value = repr.parse::<f64>().unwrap_or(0.0).clamp(f64::MIN, f64::MAX);
        let int_value = if is_integer { repr.parse().ok() } else { None };
        (value, int_value)
    }

    fn consume_digits(&mut self, repr: &mut String) {
        while let Some(c) = self.peek_at(0).filter(char::is_ascii_digit) {
            repr.push(c);
            self.position += 1;
        }
    }

    /// [§ 4.3.6 Consume an ident-like token](https://www.w3.org/TR/css-syntax-3/#consume-ident-like-token)
    fn consume_ident_like(&mut self) -> CSSToken {
        let name = self.consume_name();

        if self.peek_at(0) != Some('(') {
            return CSSToken::Ident(name);
        }
        self.position += 1;

        // "If string's value is an ASCII case-insensitive match for 'url'... and
        // the next non-whitespace code point is not a quote, consume a url token."
        // A quoted url("...") stays a function whose argument is a string.
        if name.eq_ignore_ascii_case("url") {
            let mut offset = 0;
            while self.peek_at(offset).is_some_and(is_whitespace) {
                offset += 1;
            }
            if !matches!(self.peek_at(offset), Some('"' | '\'')) {
                return self.consume_url();
            }
        }

        CSSToken::Function(name)
    }

    /// [§ 4.3.7 Consume a url token](https://www.w3.org/TR/css-syntax-3/#consume-url-token)
    fn consume_url(&mut self) -> CSSToken {
        let mut value = String::new();
        self.skip_whitespace();

        loop {
            match self.bump() {
                // "U+0029 RIGHT PARENTHESIS ())" / "EOF"
                Some(')') | None => return CSSToken::Url(value),

                Some(c) if is_whitespace(c) => {
                    self.skip_whitespace();
                    return match self.peek_at(0) {
                        Some(')') => {
                            self.position += 1;
                            CSSToken::Url(value)
                        }
                        None => CSSToken::Url(value),
                        Some(_) => self.consume_bad_url_remnants(),
                    };
                }

                Some('"' | '\'' | '(') => return self.consume_bad_url_remnants(),
                Some(c) if is_non_printable(c) => return self.consume_bad_url_remnants(),

                Some('\\') => {
                    if is_valid_escape(Some('\\'), self.peek_at(0)) {
                        value.push(self.consume_escape());
                    } else {
                        return self.consume_bad_url_remnants();
                    }
                }

                Some(c) => value.push(c),
            }
        }
    }

    /// [§ 4.3.14 Consume the remnants of a bad url](https://www.w3.org/TR/css-syntax-3/#consume-remnants-of-bad-url)
    fn consume_bad_url_remnants(&mut self) -> CSSToken {
        loop {
            match self.bump() {
                Some(')') | None => return CSSToken::BadUrl,
                Some('\\') if is_valid_escape(Some('\\'), self.peek_at(0)) => {
                    let _ = self.consume_escape();
                }
                Some(_) => {}
            }
        }
    }

    /// [§ 4.3.11 Consume an ident sequence](https://www.w3.org/TR/css-syntax-3/#consume-name)
    fn consume_name(&mut self) -> String {
        let mut name = String::new();
        loop {
            match self.peek_at(0) {
                Some(c) if is_ident_char(c) => {
                    name.push(c);
                    self.position += 1;
                }
                Some('\\') if is_valid_escape(Some('\\'), self.peek_at(1)) => {
                    self.position += 1;
                    name.push(self.consume_escape());
                }
                _ => return name,
            }
        }
    }

    /// [§ 4.3.13 Consume an escaped code point](https://www.w3.org/TR/css-syntax-3/#consume-escaped-code-point)
    ///
    /// Called with the reverse solidus already consumed.
    fn consume_escape(&mut self) -> char {
        let Some(c) = self.bump() else {
            // "EOF" - "This is a parse error. Return U+FFFD REPLACEMENT CHARACTER."
            return REPLACEMENT_CHARACTER;
        };
        let Some(first_digit) = c.to_digit(16) else {
            return c;
        };

        // "Consume as many hex digits as possible, but no more than 5."
        let mut code_point = first_digit;
        for _ in 0..5 {
            match self.peek_at(0).and_then(|c| c.to_digit(16)) {
                Some(digit) => {
                    code_point = code_point * 16 + digit;
                    self.position += 1;
                }
                None => break,
            }
        }
        // "If the next input code point is whitespace, consume it as well."
        if self.peek_at(0).is_some_and(is_whitespace) {
            self.position += 1;
        }

        // "If this number is zero, or is for a surrogate, or is greater than the
        // maximum allowed code point, return U+FFFD REPLACEMENT CHARACTER."
        match char::from_u32(code_point) {
            Some(c) if code_point != 0 => c,
            _ => REPLACEMENT_CHARACTER,
        }
    }

    /// [§ 4.3.9](https://www.w3.org/TR/css-syntax-3/#would-start-an-identifier)
    /// applied to the next three input code points.
    fn starts_ident(&self) -> bool {
        would_start_ident(self.peek_at(0), self.peek_at(1), self.peek_at(2))
    }

    /// [§ 4.3.10](https://www.w3.org/TR/css-syntax-3/#starts-with-a-number)
    /// applied to the next three input code points.
    fn starts_number(&self) -> bool {
        would_start_number(self.peek_at(0), self.peek_at(1), self.peek_at(2))
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek_at(0)?;
        self.position += 1;
        Some(c)
    }

    /// "Reconsume the current input code point."
    fn reconsume(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }
}

impl Iterator for CSSTokenizer {
    type Item = CSSToken;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// [§ 4.2 Definitions - whitespace](https://www.w3.org/TR/css-syntax-3/#whitespace)
///
/// Input preprocessing is skipped, so CR and FF are accepted here directly.
fn is_whitespace(c: char) -> bool {
    matches!(c, '\n' | '\t' | ' ' | '\r' | '\x0C')
}

/// [§ 4.2 Definitions - ident-start code point](https://www.w3.org/TR/css-syntax-3/#ident-start-code-point)
///
/// "A letter, a non-ASCII code point, or U+005F LOW LINE (_)."
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
}

/// [§ 4.2 Definitions - ident code point](https://www.w3.org/TR/css-syntax-3/#ident-code-point)
///
/// "An ident-start code point, a digit, or U+002D HYPHEN-MINUS (-)."
fn is_ident_char(c: char) -> bool {
    is_ident_start(c) || c.is_ascii_digit() || c == '-'
}

/// [§ 4.2 Definitions - non-printable code point](https://www.w3.org/TR/css-syntax-3/#non-printable-code-point)
fn is_non_printable(c: char) -> bool {
    matches!(c, '\0'..='\x08' | '\x0B' | '\x0E'..='\x1F' | '\x7F')
}

/// [§ 4.3.8 Check if two code points are a valid escape](https://www.w3.org/TR/css-syntax-3/#starts-with-a-valid-escape)
fn is_valid_escape(first: Option<char>, second: Option<char>) -> bool {
    first == Some('\\') && second.is_some_and(|c| c != '\n')
}

/// [§ 4.3.9 Check if three code points would start an ident sequence](https://www.w3.org/TR/css-syntax-3/#would-start-an-identifier)
fn would_start_ident(first: Option<char>, second: Option<char>, third: Option<char>) -> bool {
    match first {
        Some('-') => {
            second.is_some_and(|c| is_ident_start(c) || c == '-') || is_valid_escape(second, third)
        }
        Some('\\') => is_valid_escape(first, second),
        Some(c) => is_ident_start(c),
        None => false,
    }
}

/// [§ 4.3.10 Check if three code points would start a number](https://www.w3.org/TR/css-syntax-3/#starts-with-a-number)
fn would_start_number(first: Option<char>, second: Option<char>, third: Option<char>) -> bool {
    match first {
        Some('+' | '-') => {
            second.is_some_and(|c| c.is_ascii_digit())
                || (second == Some('.') && third.is_some_and(|c| c.is_ascii_digit()))
        }
        Some('.') => second.is_some_and(|c| c.is_ascii_digit()),
        Some(c) => c.is_ascii_digit(),
        None => false,
    }
}
