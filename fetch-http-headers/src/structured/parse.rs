use super::{
    BareItem, Decimal, Dictionary, InnerList, Item, List, ListMember, Parameters, StructuredField,
    StructuredFieldKind,
};
use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use fetch_error::{ErrorContext, ErrorExt, OpaqueError};

// padding is optional when parsing, required when serializing
const BASE64_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

pub(super) fn parse(input: &str, kind: StructuredFieldKind) -> Result<StructuredField, OpaqueError> {
    let mut parser = Parser::new(input);
    parser.discard_sp();
    let field = match kind {
        StructuredFieldKind::Item => parser.parse_item().map(StructuredField::Item),
        StructuredFieldKind::List => parser.parse_list().map(StructuredField::List),
        StructuredFieldKind::Dictionary => {
            parser.parse_dictionary().map(StructuredField::Dictionary)
        }
    }
    .with_context(|| format!("parse structured field {kind}"))?;
    parser.discard_sp();
    if parser.is_empty() {
        Ok(field)
    } else {
        Err(OpaqueError::from_display("trailing characters after structured field")
            .context(format!("parse structured field {kind}")))
    }
}

fn error(msg: &'static str) -> OpaqueError {
    OpaqueError::from_display(msg)
}

struct Parser<'a> {
    input: &'a [u8],
    position: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input: input.as_bytes(),
            position: 0,
        }
    }

    fn is_empty(&self) -> bool {
        self.position >= self.input.len()
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.position).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.position += 1;
        Some(b)
    }

    fn consume(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    fn discard_sp(&mut self) {
        while self.consume(b' ') {}
    }

    fn discard_ows(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t')) {
            self.position += 1;
        }
    }

    fn parse_list(&mut self) -> Result<List, OpaqueError> {
        let mut members = List::new();
        while !self.is_empty() {
            members.push(self.parse_item_or_inner_list()?);
            self.discard_ows();
            if self.is_empty() {
                return Ok(members);
            }
            if !self.consume(b',') {
                return Err(error("expected ',' between list members"));
            }
            self.discard_ows();
            if self.is_empty() {
                return Err(error("trailing ',' after last list member"));
            }
        }
        Ok(members)
    }

    fn parse_item_or_inner_list(&mut self) -> Result<ListMember, OpaqueError> {
        if self.peek() == Some(b'(') {
            self.parse_inner_list().map(ListMember::InnerList)
        } else {
            self.parse_item().map(ListMember::Item)
        }
    }

    fn parse_inner_list(&mut self) -> Result<InnerList, OpaqueError> {
        if !self.consume(b'(') {
            return Err(error("expected '(' to open inner list"));
        }
        let mut items = Vec::new();
        while !self.is_empty() {
            self.discard_sp();
            if self.consume(b')') {
                let params = self.parse_parameters()?;
                return Ok(InnerList { items, params });
            }
            items.push(self.parse_item()?);
            if !matches!(self.peek(), Some(b' ' | b')')) {
                return Err(error("expected ' ' or ')' after inner list item"));
            }
        }
        Err(error("unterminated inner list"))
    }

    fn parse_dictionary(&mut self) -> Result<Dictionary, OpaqueError> {
        let mut dictionary = Dictionary::new();
        while !self.is_empty() {
            let key = self.parse_key()?;
            let member = if self.consume(b'=') {
                self.parse_item_or_inner_list()?
            } else {
                ListMember::Item(Item {
                    bare_item: BareItem::Boolean(true),
                    params: self.parse_parameters()?,
                })
            };
            dictionary.insert(key, member);
            self.discard_ows();
            if self.is_empty() {
                return Ok(dictionary);
            }
            if !self.consume(b',') {
                return Err(error("expected ',' between dictionary members"));
            }
            self.discard_ows();
            if self.is_empty() {
                return Err(error("trailing ',' after last dictionary member"));
            }
        }
        Ok(dictionary)
    }

    fn parse_item(&mut self) -> Result<Item, OpaqueError> {
        let bare_item = self.parse_bare_item()?;
        let params = self.parse_parameters()?;
        Ok(Item { bare_item, params })
    }

    fn parse_bare_item(&mut self) -> Result<BareItem, OpaqueError> {
        match self.peek() {
            Some(b'-' | b'0'..=b'9') => self.parse_number(),
            Some(b'"') => self.parse_string().map(BareItem::String),
            Some(b'*' | b'a'..=b'z' | b'A'..=b'Z') => self.parse_token().map(BareItem::Token),
            Some(b':') => self.parse_byte_sequence().map(BareItem::ByteSequence),
            Some(b'?') => self.parse_boolean().map(BareItem::Boolean),
            Some(_) => Err(error("unexpected character at start of bare item")),
            None => Err(error("missing bare item")),
        }
    }

    fn parse_parameters(&mut self) -> Result<Parameters, OpaqueError> {
        let mut params = Parameters::new();
        while self.consume(b';') {
            self.discard_sp();
            let key = self.parse_key()?;
            let value = if self.consume(b'=') {
                self.parse_bare_item()?
            } else {
                BareItem::Boolean(true)
            };
            params.insert(key, value);
        }
        Ok(params)
    }

    fn parse_key(&mut self) -> Result<String, OpaqueError> {
        if !matches!(self.peek(), Some(b'*' | b'a'..=b'z')) {
            return Err(error("key must start with a lowercase letter or '*'"));
        }
        let mut key = String::new();
        while let Some(b) = self.peek() {
            if !is_key_char(b) {
                break;
            }
            key.push(char::from(b));
            self.position += 1;
        }
        Ok(key)
    }

    fn parse_number(&mut self) -> Result<BareItem, OpaqueError> {
        let negative = self.consume(b'-');
        if !matches!(self.peek(), Some(b'0'..=b'9')) {
            return Err(error("expected digit in number"));
        }

        let mut integer_digits = String::new();
        let mut fraction_digits: Option<String> = None;
        while let Some(b) = self.peek() {
            match (b, fraction_digits.as_mut()) {
                (b'0'..=b'9', None) => integer_digits.push(char::from(b)),
                (b'0'..=b'9', Some(fraction)) => fraction.push(char::from(b)),
                (b'.', None) => {
                    if integer_digits.len() > 12 {
                        return Err(error("decimal has more than 12 integer digits"));
                    }
                    fraction_digits = Some(String::new());
                }
                _ => break,
            }
            self.position += 1;
            let len = integer_digits.len() + fraction_digits.as_ref().map_or(0, |f| f.len() + 1);
            match fraction_digits {
                None if len > 15 => return Err(error("integer has more than 15 digits")),
                Some(_) if len > 16 => return Err(error("decimal has more than 16 characters")),
                _ => (),
            }
        }

        let integer = integer_digits
            .parse::<i64>()
            .context("parse integer component")?;
        let sign = if negative { -1 } else { 1 };

        let Some(fraction) = fraction_digits else {
            return Ok(BareItem::Integer(sign * integer));
        };
        if fraction.is_empty() {
            return Err(error("decimal ends with '.'"));
        }
        if fraction.len() > 3 {
            return Err(error("decimal has more than 3 fractional digits"));
        }
        let scale = match fraction.len() {
            1 => 100,
            2 => 10,
            _ => 1,
        };
        let fraction = fraction
            .parse::<i64>()
            .context("parse fractional component")?;
        Ok(BareItem::Decimal(Decimal::from_thousandths(
            sign * (integer * 1000 + fraction * scale),
        )))
    }

    fn parse_string(&mut self) -> Result<String, OpaqueError> {
        if !self.consume(b'"') {
            return Err(error("expected '\"' to open string"));
        }
        let mut output = String::new();
        loop {
            match self.bump() {
                None => return Err(error("unterminated string")),
                Some(b'\\') => match self.bump() {
                    Some(c @ (b'"' | b'\\')) => output.push(char::from(c)),
                    Some(_) => return Err(error("invalid escape in string")),
                    None => return Err(error("unterminated escape in string")),
                },
                Some(b'"') => return Ok(output),
                Some(c @ 0x20..=0x7e) => output.push(char::from(c)),
                Some(_) => return Err(error("invalid character in string")),
            }
        }
    }

    fn parse_token(&mut self) -> Result<String, OpaqueError> {
        if !matches!(self.peek(), Some(b'*' | b'a'..=b'z' | b'A'..=b'Z')) {
            return Err(error("token must start with a letter or '*'"));
        }
        let mut output = String::new();
        while let Some(b) = self.peek() {
            if !is_token_byte(b) {
                break;
            }
            output.push(char::from(b));
            self.position += 1;
        }
        Ok(output)
    }

    fn parse_byte_sequence(&mut self) -> Result<Vec<u8>, OpaqueError> {
        if !self.consume(b':') {
            return Err(error("expected ':' to open byte sequence"));
        }
        let rest = self.input.get(self.position..).unwrap_or_default();
        let Some(len) = rest.iter().position(|b| *b == b':') else {
            return Err(error("unterminated byte sequence"));
        };
        let encoded = &rest[..len];
        if !encoded
            .iter()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'/' | b'='))
        {
            return Err(error("invalid character in byte sequence"));
        }
        self.position += len + 1;
        BASE64_LENIENT
            .decode(encoded)
            .context("decode base64 byte sequence")
    }

    fn parse_boolean(&mut self) -> Result<bool, OpaqueError> {
        if !self.consume(b'?') {
            return Err(error("expected '?' to open boolean"));
        }
        match self.bump() {
            Some(b'1') => Ok(true),
            Some(b'0') => Ok(false),
            _ => Err(error("boolean must be ?0 or ?1")),
        }
    }
}

pub(super) fn is_key_char(b: u8) -> bool {
    matches!(b, b'a'..=b'z' | b'0'..=b'9' | b'_' | b'-' | b'.' | b'*')
}

pub(super) fn is_token_byte(b: u8) -> bool {
    crate::validate::is_token_char(char::from(b)) || matches!(b, b':' | b'/')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_item_field(input: &str) -> Result<Item, OpaqueError> {
        match parse(input, StructuredFieldKind::Item)? {
            StructuredField::Item(item) => Ok(item),
            other => panic!("unexpected field: {other:?}"),
        }
    }

    fn bare(input: &str) -> Option<BareItem> {
        parse_item_field(input).ok().map(|item| item.bare_item)
    }

    #[test]
    fn bare_items() {
        for (input, expected) in [
            ("42", Some(BareItem::Integer(42))),
            ("-42", Some(BareItem::Integer(-42))),
            ("  0  ", Some(BareItem::Integer(0))),
            ("999999999999999", Some(BareItem::Integer(999_999_999_999_999))),
            ("-999999999999999", Some(BareItem::Integer(-999_999_999_999_999))),
            ("9999999999999999", None),
            ("4.5", Some(BareItem::Decimal(Decimal::from_thousandths(4500)))),
            ("-0.025", Some(BareItem::Decimal(Decimal::from_thousandths(-25)))),
            (
                "999999999999.999",
                Some(BareItem::Decimal(Decimal::from_thousandths(
                    999_999_999_999_999,
                ))),
            ),
            ("1234567890123.1", None),
            ("1.2345", None),
            ("1.", None),
            ("-", None),
            ("- 1", None),
            (r#""hello world""#, Some(BareItem::String("hello world".to_owned()))),
            (r#""a\"b\\c""#, Some(BareItem::String(r#"a"b\c"#.to_owned()))),
            (r#""a\b""#, None),
            (r#""unterminated"#, None),
            ("\"tab\tinside\"", None),
            ("foo123/456", Some(BareItem::Token("foo123/456".to_owned()))),
            ("*foo:bar", Some(BareItem::Token("*foo:bar".to_owned()))),
            ("Text/HTML", Some(BareItem::Token("Text/HTML".to_owned()))),
            (
                ":cHJldGVuZCB0aGlzIGlzIGJpbmFyeSBjb250ZW50Lg==:",
                Some(BareItem::ByteSequence(
                    b"pretend this is binary content.".to_vec(),
                )),
            ),
            (":aGk:", Some(BareItem::ByteSequence(b"hi".to_vec()))),
            ("::", Some(BareItem::ByteSequence(Vec::new()))),
            (":aGk", None),
            (":a*k:", None),
            ("?1", Some(BareItem::Boolean(true))),
            ("?0", Some(BareItem::Boolean(false))),
            ("?2", None),
            ("?", None),
            ("", None),
            ("   ", None),
            ("@", None),
            ("1 2", None),
            ("\u{e9}", None),
        ] {
            assert_eq!(bare(input), expected, "input: {input:?}");
        }
    }

    #[test]
    fn item_parameters() {
        let item = parse_item_field("text/html;q=1.0;level;charset=\"utf-8\"").unwrap();
        assert_eq!(item.bare_item, BareItem::Token("text/html".to_owned()));
        let params: Vec<_> = item.params.iter().collect();
        assert_eq!(
            params,
            [
                (&"q".to_owned(), &BareItem::Decimal(Decimal::from_thousandths(1000))),
                (&"level".to_owned(), &BareItem::Boolean(true)),
                (&"charset".to_owned(), &BareItem::String("utf-8".to_owned())),
            ]
        );

        // duplicate keys keep their first position, last value wins
        let item = parse_item_field("1;a=1;b=2;a=3").unwrap();
        assert_eq!(
            item.params.into_iter().collect::<Vec<_>>(),
            [
                ("a".to_owned(), BareItem::Integer(3)),
                ("b".to_owned(), BareItem::Integer(2)),
            ]
        );

        assert!(parse_item_field("1;A=1").is_err());
        assert!(parse_item_field("1;=1").is_err());
        assert!(parse_item_field("1; a=1").is_ok());
    }

    #[test]
    fn lists() {
        let StructuredField::List(list) =
            parse("sugar, tea,\trum", StructuredFieldKind::List).unwrap()
        else {
            panic!("expected list");
        };
        assert_eq!(
            list,
            vec![
                ListMember::Item(Item::new(BareItem::Token("sugar".to_owned()))),
                ListMember::Item(Item::new(BareItem::Token("tea".to_owned()))),
                ListMember::Item(Item::new(BareItem::Token("rum".to_owned()))),
            ]
        );

        let StructuredField::List(list) =
            parse(r#"("foo" "bar");lvl=5, ()"#, StructuredFieldKind::List).unwrap()
        else {
            panic!("expected list");
        };
        assert_eq!(
            list,
            vec![
                ListMember::InnerList(InnerList {
                    items: vec![
                        Item::new(BareItem::String("foo".to_owned())),
                        Item::new(BareItem::String("bar".to_owned())),
                    ],
                    params: Parameters::from([("lvl".to_owned(), BareItem::Integer(5))]),
                }),
                ListMember::InnerList(InnerList::default()),
            ]
        );

        for input in ["a,", "a,,b", "a b", "(1 2", "(1,2)", "(1)x"] {
            assert!(
                parse(input, StructuredFieldKind::List).is_err(),
                "input: {input:?}"
            );
        }

        let StructuredField::List(list) = parse("", StructuredFieldKind::List).unwrap() else {
            panic!("expected list");
        };
        assert!(list.is_empty());
    }

    #[test]
    fn dictionaries() {
        let StructuredField::Dictionary(dictionary) =
            parse("a=?0, b, c;foo=bar, d=(1 2)", StructuredFieldKind::Dictionary).unwrap()
        else {
            panic!("expected dictionary");
        };
        let keys: Vec<_> = dictionary.keys().map(String::as_str).collect();
        assert_eq!(keys, ["a", "b", "c", "d"]);
        assert_eq!(
            dictionary["a"],
            ListMember::Item(Item::new(BareItem::Boolean(false)))
        );
        assert_eq!(
            dictionary["b"],
            ListMember::Item(Item::new(BareItem::Boolean(true)))
        );
        assert_eq!(
            dictionary["c"],
            ListMember::Item(
                Item::new(BareItem::Boolean(true))
                    .with_param("foo", BareItem::Token("bar".to_owned()))
            )
        );
        assert_eq!(
            dictionary["d"],
            ListMember::InnerList(InnerList::new(vec![
                Item::new(BareItem::Integer(1)),
                Item::new(BareItem::Integer(2)),
            ]))
        );

        for input in ["a=1,", "A=1", "a=1 b=2", "a=", "1=a"] {
            assert!(
                parse(input, StructuredFieldKind::Dictionary).is_err(),
                "input: {input:?}"
            );
        }
    }

    #[test]
    fn error_carries_kind_context() {
        let err = parse("a,", StructuredFieldKind::List).unwrap_err();
        assert_eq!(
            err.to_string(),
            "parse structured field list: trailing ',' after last list member"
        );

        let err = parse("1 2", StructuredFieldKind::Item).unwrap_err();
        assert_eq!(
            err.to_string(),
            "parse structured field item: trailing characters after structured field"
        );
    }
}
