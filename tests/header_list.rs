use fetch::http::headers::{
    HeaderList,
    structured::{BareItem, Decimal, Item, ListMember, StructuredField, StructuredFieldKind},
    util::{collect_http_quoted_string, collect_http_quoted_string_value},
};
use quickcheck::{Arbitrary, Gen, TestResult, quickcheck};

#[derive(Clone, Debug)]
struct Name(String);

impl Arbitrary for Name {
    fn arbitrary(g: &mut Gen) -> Self {
        let alphabet: Vec<char> = ('a'..='z')
            .chain('A'..='Z')
            .chain('0'..='9')
            .chain("!#$%&'*+-.^_`|~".chars())
            .collect();
        let len = usize::arbitrary(g) % 24 + 1;
        Self(
            (0..len)
                .filter_map(|_| g.choose(&alphabet).copied())
                .collect(),
        )
    }
}

#[derive(Clone, Debug)]
struct Value(String);

impl Arbitrary for Value {
    fn arbitrary(g: &mut Gen) -> Self {
        let alphabet: Vec<char> = ('\x21'..='\x7e')
            .chain(['\t', ' '])
            .chain('\u{80}'..='\u{ff}')
            .collect();
        let len = usize::arbitrary(g) % 48 + 1;
        Self(
            (0..len)
                .filter_map(|_| g.choose(&alphabet).copied())
                .collect(),
        )
    }
}

quickcheck! {
    fn append_twice_joins_values(name: Name, first: Value, second: Value) -> bool {
        let mut list = HeaderList::new();
        list.append(&name.0, first.0.as_str());
        let once = list.get(&name.0.to_ascii_uppercase()) == Some(first.0.clone());
        list.append(&name.0, second.0.as_str());
        once && list.get(&name.0) == Some(format!("{}, {}", first.0, second.0))
    }

    fn set_always_replaces(history: Vec<(Name, Value)>, name: Name, value: Value) -> bool {
        let mut list: HeaderList = history.into_iter().map(|(n, v)| (n.0, v.0)).collect();
        list.set(&name.0, value.0.as_str());
        list.get(&name.0) == Some(value.0)
            && list.get_all(&name.0).map(|values| values.len()) == Some(1)
    }

    fn sorted_lowercase_names_idempotent(names: Vec<Name>) -> TestResult {
        if names.is_empty() {
            return TestResult::discard();
        }
        let list: HeaderList = names.iter().map(|name| (name.0.as_str(), "v")).collect();
        let sorted = list.sorted_lowercase_names();
        let again: HeaderList = sorted.iter().rev().map(|name| (name.as_str(), "v")).collect();

        TestResult::from_bool(
            sorted.windows(2).all(|pair| pair[0] < pair[1])
                && sorted.iter().all(|name| *name == name.to_ascii_lowercase())
                && again.sorted_lowercase_names() == sorted
                && list.sorted_lowercase_names() == sorted,
        )
    }

    fn sort_and_combine_matches_get(entries: Vec<(Name, Value)>) -> bool {
        let list: HeaderList = entries.into_iter().map(|(n, v)| (n.0, v.0)).collect();
        let combined = list.sort_and_combine();
        combined.len() == list.len()
            && combined
                .iter()
                .all(|(name, value)| list.get(name).as_ref() == Some(value))
    }
}

#[test]
fn combine_and_append_diverge() {
    let mut list = HeaderList::new();
    list.append("Accept", "text/html");
    list.append("Accept", "*/*");
    assert_eq!(list.get_all("accept").map(|values| values.len()), Some(2));

    let mut combined = HeaderList::new();
    combined.append("Accept", "text/html");
    combined.combine("Accept", "*/*");
    assert_eq!(combined.get_all("accept").map(|values| values.len()), Some(1));

    assert_eq!(list.get("accept"), combined.get("accept"));
    assert_ne!(list, combined);
}

#[test]
fn quoted_string_round_trip() {
    let input = "\"Hello \\\\ World\\\"\"";

    let mut position = 0;
    assert_eq!(
        collect_http_quoted_string_value(input, &mut position).as_deref(),
        Some("Hello \\ World\"")
    );
    assert_eq!(position, input.len());

    let mut position = 0;
    assert_eq!(collect_http_quoted_string(input, &mut position), Some(input));
    assert_eq!(position, input.len());
}

#[test]
fn quoted_string_lone_backslash() {
    let input = "\"\\";
    let mut position = 0;
    assert_eq!(
        collect_http_quoted_string_value(input, &mut position).as_deref(),
        Some("\\")
    );
    assert_eq!(position, 2);
}

#[test]
fn decode_split_trailing_empty_value() {
    for entries in [
        &[("A", "nosniff, ")][..],
        &[("A", "nosniff"), ("B", "sniff"), ("A", "")],
    ] {
        let list: HeaderList = entries.iter().copied().collect();
        assert_eq!(
            list.get_decode_split("a").unwrap(),
            ["nosniff", ""],
            "entries: {entries:?}"
        );
    }
}

#[test]
fn decode_split_unterminated_quote() {
    for entries in [
        &[("A", "text/html;\", x/x")][..],
        &[("A", "text/html;\""), ("A", "x/x")],
    ] {
        let list: HeaderList = entries.iter().copied().collect();
        assert_eq!(
            list.get_decode_split("a").unwrap(),
            ["text/html;\", x/x"],
            "entries: {entries:?}"
        );
        assert_eq!(list.get_decode_split("b"), None);
    }
}

#[test]
fn structured_field_header() {
    let mut list = HeaderList::new();
    list.append("Priority", "u=1, i");

    let Some(StructuredField::Dictionary(dictionary)) =
        list.get_structured_field("priority", StructuredFieldKind::Dictionary)
    else {
        panic!("expected a dictionary");
    };
    assert_eq!(
        dictionary.get("u"),
        Some(&ListMember::Item(Item::new(1_i64)))
    );
    assert_eq!(dictionary.get("i"), Some(&ListMember::Item(Item::new(true))));

    list.set_structured_field(
        "x-ratio",
        &StructuredField::Item(Item::new(Decimal::from_thousandths(2500))),
    )
    .unwrap();
    assert_eq!(list.get("x-ratio").as_deref(), Some("2.5"));

    list.append("x-ratio", "oops");
    assert_eq!(
        list.get_structured_field("x-ratio", StructuredFieldKind::Item),
        None
    );
    assert!(
        list.get_structured_field("x-ratio", StructuredFieldKind::List)
            .is_some_and(|field| match field {
                StructuredField::List(members) => members.len() == 2
                    && members[1] == ListMember::Item(Item::new(BareItem::Token("oops".to_owned()))),
                _ => false,
            })
    );
}
