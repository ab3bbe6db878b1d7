//! CSS Parser per [§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing).
//!
//! Only the entry points a style engine needs below the stylesheet level:
//! "parse a list of component values" (property values) and "parse a list
//! of declarations" (`style` attributes, CLI input).

use crate::tokenizer::{CSSToken, CSSTokenizer};

/// How many blocks and functions may nest inside one another. Anything deeper
/// is skipped and replaced by [`ComponentValue::TooDeep`].
pub const MAX_NESTING_DEPTH: usize = 64;

/// [§ 5.4.4 Consume a declaration](https://www.w3.org/TR/css-syntax-3/#consume-declaration)
///
/// A CSS declaration (e.g., `color: red`).
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    /// The property name, as written.
    pub name: String,
    /// The property value as component values, without surrounding whitespace.
    pub value: Vec<ComponentValue>,
    /// Whether the declaration has `!important`.
    pub important: bool,
}

/// [§ 5.4.7 Consume a component value](https://www.w3.org/TR/css-syntax-3/#consume-component-value)
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentValue {
    /// A preserved token.
    Token(CSSToken),
    /// A function with its arguments.
    Function {
        /// The function name.
        name: String,
        /// The function arguments.
        value: Vec<ComponentValue>,
    },
    /// A simple block.
    Block {
        /// The opening token character: `(`, `[` or `{`.
        token: char,
        /// The block contents.
        value: Vec<ComponentValue>,
    },
    /// A block or function opened at [`MAX_NESTING_DEPTH`]. Its contents were
    /// skipped, up to the matching close or the end of input.
    TooDeep,
}

impl ComponentValue {
    /// Returns true if this is a whitespace token.
    #[must_use]
    pub const fn is_whitespace(&self) -> bool {
        matches!(self, Self::Token(CSSToken::Whitespace))
    }

    /// [§ 9 Serialization](https://www.w3.org/TR/css-syntax-3/#serialization)
    ///
    /// Append the CSS text of this component value to `dest`.
    pub fn to_css(&self, dest: &mut String) {
        match self {
            Self::Token(token) => token.to_css(dest),
            Self::Function { name, value } => {
                dest.push_str(name);
                dest.push('(');
                serialize_list(value, dest);
                dest.push(')');
            }
            Self::Block { token, value } => {
                dest.push(*token);
                serialize_list(value, dest);
                dest.push(mirror(*token));
            }
            Self::TooDeep => {}
        }
    }
}

/// Serialize a list of component values back to back.
pub fn serialize_list(values: &[ComponentValue], dest: &mut String) {
    for value in values {
        value.to_css(dest);
    }
}

/// The token that closes a block or function opened by `token`.
fn ending_token_for(token: &CSSToken) -> Option<CSSToken> {
    match token {
        CSSToken::LeftBrace => Some(CSSToken::RightBrace),
        CSSToken::LeftBracket => Some(CSSToken::RightBracket),
        CSSToken::LeftParen | CSSToken::Function(_) => Some(CSSToken::RightParen),
        _ => None,
    }
}

/// The closing character of a simple block.
const fn mirror(open: char) -> char {
    match open {
        '(' => ')',
        '[' => ']',
        _ => '}',
    }
}

/// Parser over a token list produced by [`CSSTokenizer`].
pub struct CSSParser {
    tokens: Vec<CSSToken>,
    position: usize,
    /// Blocks and functions currently open.
    depth: usize,
}

impl CSSParser {
    /// Create a new parser from a list of tokens.
    #[must_use]
    pub const fn new(tokens: Vec<CSSToken>) -> Self {
        Self {
            tokens,
            position: 0,
            depth: 0,
        }
    }

    /// Tokenize `input` and create a parser over the result.
    #[must_use]
    pub fn from_css(input: &str) -> Self {
        Self::new(CSSTokenizer::tokenize(input))
    }

    /// [§ 5.3.10 Parse a list of component values](https://www.w3.org/TR/css-syntax-3/#parse-list-of-component-values)
    ///
    /// "Repeatedly consume a component value from input until an
    /// `<EOF-token>` is returned, appending the returned values (except the
    /// final `<EOF-token>`) into a list. Return the list."
    pub fn parse_component_values(&mut self) -> Vec<ComponentValue> {
        let mut values = Vec::new();
        while let Some(value) = self.consume_component_value() {
            values.push(value);
        }
        values
    }

    /// [§ 5.3.8 Parse a list of declarations](https://www.w3.org/TR/css-syntax-3/#parse-list-of-declarations)
    ///
    /// Invalid declarations are skipped up to the next semicolon.
    pub fn parse_declaration_list(&mut self) -> Vec<Declaration> {
        let mut declarations = Vec::new();

        loop {
            match self.peek() {
                // "<EOF-token>" - "Return the list of declarations."
                None => return declarations,

                // "<whitespace-token>" or "<semicolon-token>" - "Do nothing."
                Some(CSSToken::Whitespace | CSSToken::Semicolon) => self.position += 1,

                // "<ident-token>" - "Initialize a temporary list initially filled with
                // the current input token. As long as the next input token is anything
                // other than a <semicolon-token> or <EOF-token>, consume a component
                // value and append it to the temporary list. Consume a declaration from
                // the temporary list."
                Some(CSSToken::Ident(_)) => {
                    let list = self.consume_until_semicolon();
                    if let Some(declaration) = consume_declaration(list) {
                        declarations.push(declaration);
                    }
                }

                // "anything else" - "This is a parse error... consume a component
                // value and throw away the returned value." At-rules have no meaning
                // inside a style declaration list, so they are thrown away too.
                Some(_) => {
                    let _ = self.consume_until_semicolon();
                }
            }
        }
    }

    /// Consume component values up to (not including) the next top-level
    /// `<semicolon-token>` or the end of input.
    fn consume_until_semicolon(&mut self) -> Vec<ComponentValue> {
        let mut list = Vec::new();
        while !matches!(self.peek(), None | Some(CSSToken::Semicolon)) {
            if let Some(value) = self.consume_component_value() {
                list.push(value);
            }
        }
        list
    }

    /// [§ 5.4.7 Consume a component value](https://www.w3.org/TR/css-syntax-3/#consume-component-value)
    fn consume_component_value(&mut self) -> Option<ComponentValue> {
        let token = self.tokens.get(self.position)?.clone();
        self.position += 1;

        let too_deep = self.depth >= MAX_NESTING_DEPTH;
        if let Some(ending_token) = ending_token_for(&token).filter(|_| too_deep) {
            self.skip_block_contents(ending_token);
            return Some(ComponentValue::TooDeep);
        }

        let value = match token {
            // "If the current input token is a <{-token>, <[-token>, or <(-token>,
            // consume a simple block and return it."
            CSSToken::LeftBrace => self.consume_simple_block('{', &CSSToken::RightBrace),
            CSSToken::LeftBracket => self.consume_simple_block('[', &CSSToken::RightBracket),
            CSSToken::LeftParen => self.consume_simple_block('(', &CSSToken::RightParen),

            // "Otherwise, if the current input token is a <function-token>, consume a
            // function and return it."
            CSSToken::Function(name) => ComponentValue::Function {
                name,
                value: self.consume_block_contents(&CSSToken::RightParen),
            },

            // "Otherwise, return the current input token."
            token => ComponentValue::Token(token),
        };
        Some(value)
    }

    /// [§ 5.4.8 Consume a simple block](https://www.w3.org/TR/css-syntax-3/#consume-simple-block)
    fn consume_simple_block(&mut self, token: char, ending_token: &CSSToken) -> ComponentValue {
        ComponentValue::Block {
            token,
            value: self.consume_block_contents(ending_token),
        }
    }

    /// Consume component values until `ending_token` (consumed) or EOF
    /// ("This is a parse error. Return the block.").
    fn consume_block_contents(&mut self, ending_token: &CSSToken) -> Vec<ComponentValue> {
        let mut value = Vec::new();
        self.depth += 1;
        while let Some(token) = self.peek() {
            if token == ending_token {
                self.position += 1;
                break;
            }
            if let Some(v) = self.consume_component_value() {
                value.push(v);
            }
        }
        self.depth -= 1;
        value
    }

    /// Skip the rest of a block opened past [`MAX_NESTING_DEPTH`], up to and
    /// including `ending_token`. Iterative, so input depth does not matter.
    fn skip_block_contents(&mut self, ending_token: CSSToken) {
        let mut expected = vec![ending_token];
        while let Some(token) = self.tokens.get(self.position) {
            self.position += 1;
            if expected.last() == Some(token) {
                let _ = expected.pop();
                if expected.is_empty() {
                    return;
                }
            } else if let Some(ending_token) = ending_token_for(token) {
                expected.push(ending_token);
            }
        }
    }

    fn peek(&self) -> Option<&CSSToken> {
        self.tokens.get(self.position)
    }
}

/// [§ 5.4.6 Consume a declaration](https://www.w3.org/TR/css-syntax-3/#consume-declaration)
///
/// `list` starts with the `<ident-token>` naming the property.
fn consume_declaration(list: Vec<ComponentValue>) -> Option<Declaration> {
    let mut list = list.into_iter().peekable();

    let Some(ComponentValue::Token(CSSToken::Ident(name))) = list.next() else {
        return None;
    };

    // "While the next input token is a <whitespace-token>, consume the next input token."
    while list.next_if(ComponentValue::is_whitespace).is_some() {}

    // "If the next input token is anything other than a <colon-token>, this is a
    // parse error. Return nothing."
    if list.next() != Some(ComponentValue::Token(CSSToken::Colon)) {
        return None;
    }

    let mut value: Vec<ComponentValue> = list.collect();
    let important = strip_important(&mut value);
    trim_whitespace(&mut value);

    Some(Declaration {
        name,
        value,
        important,
    })
}

/// [§ 6.4.2 Important declarations](https://www.w3.org/TR/css-cascade-4/#importance)
///
/// "A declaration is important if ... the last two (non-whitespace,
/// non-comment) tokens in its value are a `<delim-token>` with the value "!"
/// followed by an `<ident-token>` with a value that is an ASCII
/// case-insensitive match for "important"."
///
/// Removes the annotation from `value` and reports whether it was present.
fn strip_important(value: &mut Vec<ComponentValue>) -> bool {
    trim_whitespace(value);

    let Some(ComponentValue::Token(CSSToken::Ident(last))) = value.last() else {
        return false;
    };
    if !last.eq_ignore_ascii_case("important") {
        return false;
    }

    let mut bang = value.len() - 1;
    while bang > 0 && value[bang - 1].is_whitespace() {
        bang -= 1;
    }
    if bang == 0 || value[bang - 1] != ComponentValue::Token(CSSToken::Delim('!')) {
        return false;
    }

    value.truncate(bang - 1);
    true
}

/// Remove leading and trailing whitespace tokens.
pub(crate) fn trim_whitespace(value: &mut Vec<ComponentValue>) {
    while value.last().is_some_and(ComponentValue::is_whitespace) {
        let _ = value.pop();
    }
    let leading = value.iter().take_while(|v| v.is_whitespace()).count();
    let _ = value.drain(..leading);
}
