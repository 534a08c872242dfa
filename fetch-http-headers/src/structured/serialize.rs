use super::{
    BareItem, Decimal, Dictionary, InnerList, Item, List, ListMember, Parameters, StructuredField,
    parse::{is_key_char, is_token_byte},
};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use fetch_error::{ErrorExt, OpaqueError};

const MAX_INTEGER: i64 = 999_999_999_999_999;
const MAX_DECIMAL_INTEGER_COMPONENT: u64 = 999_999_999_999;

pub(super) fn serialize(field: &StructuredField) -> Result<String, OpaqueError> {
    let mut output = String::new();
    match field {
        StructuredField::Item(item) => write_item(&mut output, item),
        StructuredField::List(list) => write_list(&mut output, list),
        StructuredField::Dictionary(dictionary) => write_dictionary(&mut output, dictionary),
    }
    .map_err(|err| err.context(format!("serialize structured field {}", field.kind())))?;
    Ok(output)
}

fn error(msg: &'static str) -> OpaqueError {
    OpaqueError::from_display(msg)
}

fn write_list(output: &mut String, list: &List) -> Result<(), OpaqueError> {
    if list.is_empty() {
        return Err(error("empty list is not serialized"));
    }
    for (index, member) in list.iter().enumerate() {
        if index > 0 {
            output.push_str(", ");
        }
        write_member(output, member)?;
    }
    Ok(())
}

fn write_dictionary(output: &mut String, dictionary: &Dictionary) -> Result<(), OpaqueError> {
    if dictionary.is_empty() {
        return Err(error("empty dictionary is not serialized"));
    }
    for (index, (key, member)) in dictionary.iter().enumerate() {
        if index > 0 {
            output.push_str(", ");
        }
        write_key(output, key)?;
        match member {
            ListMember::Item(Item {
                bare_item: BareItem::Boolean(true),
                params,
            }) => write_parameters(output, params)?,
            member => {
                output.push('=');
                write_member(output, member)?;
            }
        }
    }
    Ok(())
}

fn write_member(output: &mut String, member: &ListMember) -> Result<(), OpaqueError> {
    match member {
        ListMember::Item(item) => write_item(output, item),
        ListMember::InnerList(inner_list) => write_inner_list(output, inner_list),
    }
}

fn write_inner_list(output: &mut String, inner_list: &InnerList) -> Result<(), OpaqueError> {
    output.push('(');
    for (index, item) in inner_list.items.iter().enumerate() {
        if index > 0 {
            output.push(' ');
        }
        write_item(output, item)?;
    }
    output.push(')');
    write_parameters(output, &inner_list.params)
}

fn write_item(output: &mut String, item: &Item) -> Result<(), OpaqueError> {
    write_bare_item(output, &item.bare_item)?;
    write_parameters(output, &item.params)
}

fn write_parameters(output: &mut String, params: &Parameters) -> Result<(), OpaqueError> {
    for (key, value) in params {
        output.push(';');
        write_key(output, key)?;
        if *value != BareItem::Boolean(true) {
            output.push('=');
            write_bare_item(output, value)?;
        }
    }
    Ok(())
}

fn write_key(output: &mut String, key: &str) -> Result<(), OpaqueError> {
    let bytes = key.as_bytes();
    if !matches!(bytes.first(), Some(b'*' | b'a'..=b'z')) {
        return Err(error("key must start with a lowercase letter or '*'"));
    }
    if !bytes.iter().copied().all(is_key_char) {
        return Err(error("key contains an invalid character"));
    }
    output.push_str(key);
    Ok(())
}

fn write_bare_item(output: &mut String, bare_item: &BareItem) -> Result<(), OpaqueError> {
    match bare_item {
        BareItem::Integer(integer) => {
            if !(-MAX_INTEGER..=MAX_INTEGER).contains(integer) {
                return Err(error("integer out of range"));
            }
            output.push_str(&integer.to_string());
        }
        BareItem::Decimal(decimal) => write_decimal(output, *decimal)?,
        BareItem::String(s) => {
            if !s.bytes().all(|b| (0x20..=0x7e).contains(&b)) {
                return Err(error("string contains a non-printable or non-ASCII character"));
            }
            output.push('"');
            for c in s.chars() {
                if matches!(c, '"' | '\\') {
                    output.push('\\');
                }
                output.push(c);
            }
            output.push('"');
        }
        BareItem::Token(token) => {
            let bytes = token.as_bytes();
            if !matches!(bytes.first(), Some(b'*' | b'a'..=b'z' | b'A'..=b'Z')) {
                return Err(error("token must start with a letter or '*'"));
            }
            if !bytes.iter().copied().all(is_token_byte) {
                return Err(error("token contains an invalid character"));
            }
            output.push_str(token);
        }
        BareItem::ByteSequence(bytes) => {
            output.push(':');
            STANDARD.encode_string(bytes, output);
            output.push(':');
        }
        BareItem::Boolean(value) => output.push_str(if *value { "?1" } else { "?0" }),
    }
    Ok(())
}

fn write_decimal(output: &mut String, decimal: Decimal) -> Result<(), OpaqueError> {
    if decimal.integer_component() > MAX_DECIMAL_INTEGER_COMPONENT {
        return Err(error("decimal integer component out of range"));
    }
    output.push_str(&decimal.to_string());
    Ok(())
}
