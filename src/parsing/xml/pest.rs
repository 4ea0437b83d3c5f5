use {
    crate::{
        parsing::PestParser,
        syntax_tree::xml::{Document, Element},
    },
    indexmap::IndexMap,
};

mod internal {
    #[derive(pest_derive::Parser)]
    #[grammar = "parsing/xml/grammar.pest"]
    pub struct Parser;
}

/// Decode the predefined entities and numeric character references of an attribute value
///
/// References that cannot be decoded are kept as they are.
pub fn unescape(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find('&') {
        result.push_str(&rest[..start]);
        rest = &rest[start..];

        let decoded = rest.find(';').and_then(|end| {
            let reference = &rest[1..end];
            let character = match reference {
                "lt" => Some('<'),
                "gt" => Some('>'),
                "amp" => Some('&'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                _ => reference
                    .strip_prefix("#x")
                    .or_else(|| reference.strip_prefix("#X"))
                    .map(|hex| u32::from_str_radix(hex, 16))
                    .or_else(|| reference.strip_prefix('#').map(str::parse))
                    .and_then(Result::ok)
                    .and_then(char::from_u32),
            };
            character.map(|c| (c, end))
        });

        match decoded {
            Some((character, end)) => {
                result.push(character);
                rest = &rest[end + 1..];
            }
            None => {
                result.push('&');
                rest = &rest[1..];
            }
        }
    }

    result.push_str(rest);
    result
}

pub struct ElementParser;

impl ElementParser {
    fn translate_attribute(
        pair: pest::iterators::Pair<'_, internal::Rule>,
    ) -> (String, String) {
        let mut pairs = pair.into_inner();

        let name = match pairs.next() {
            Some(pair) if pair.as_rule() == internal::Rule::name => pair.as_str().to_string(),
            Some(pair) => Self::report_unexpected_pair(pair),
            None => Self::report_missing_pair(),
        };

        let value = match pairs.next() {
            Some(pair) if pair.as_rule() == internal::Rule::value => {
                match pair.into_inner().next() {
                    Some(pair)
                        if matches!(
                            pair.as_rule(),
                            internal::Rule::double_quoted | internal::Rule::single_quoted
                        ) =>
                    {
                        unescape(pair.as_str())
                    }
                    Some(pair) => Self::report_unexpected_pair(pair),
                    None => Self::report_missing_pair(),
                }
            }
            Some(pair) => Self::report_unexpected_pair(pair),
            None => Self::report_missing_pair(),
        };

        if let Some(pair) = pairs.next() {
            Self::report_unexpected_pair(pair)
        }

        (name, value)
    }
}

impl PestParser for ElementParser {
    type Node = Element;

    type InternalParser = internal::Parser;
    type Rule = internal::Rule;
    const RULE: internal::Rule = internal::Rule::element;

    fn translate_pair(pair: pest::iterators::Pair<'_, Self::Rule>) -> Self::Node {
        if pair.as_rule() != internal::Rule::element {
            Self::report_unexpected_pair(pair)
        }

        let mut pairs = pair.into_inner();

        let name = match pairs.next() {
            Some(pair) if pair.as_rule() == internal::Rule::name => pair.as_str().to_string(),
            Some(pair) => Self::report_unexpected_pair(pair),
            None => Self::report_missing_pair(),
        };

        let mut attributes = IndexMap::new();
        let mut children = Vec::new();

        for pair in pairs {
            match pair.as_rule() {
                internal::Rule::attribute => {
                    let (key, value) = Self::translate_attribute(pair);
                    attributes.insert(key, value);
                }
                internal::Rule::element => children.push(Self::translate_pair(pair)),
                internal::Rule::text | internal::Rule::cdata | internal::Rule::declaration => (),
                _ => Self::report_unexpected_pair(pair),
            }
        }

        Element {
            name,
            attributes,
            children,
        }
    }
}

pub struct DocumentParser;

impl PestParser for DocumentParser {
    type Node = Document;

    type InternalParser = internal::Parser;
    type Rule = internal::Rule;
    const RULE: internal::Rule = internal::Rule::document;

    fn translate_pair(pair: pest::iterators::Pair<'_, Self::Rule>) -> Self::Node {
        match pair.as_rule() {
            internal::Rule::document => {
                let mut root = None;

                for pair in pair.into_inner() {
                    match pair.as_rule() {
                        internal::Rule::declaration
                        | internal::Rule::doctype
                        | internal::Rule::EOI => (),
                        internal::Rule::element if root.is_none() => {
                            root = Some(ElementParser::translate_pair(pair))
                        }
                        _ => Self::report_unexpected_pair(pair),
                    }
                }

                Document {
                    root: root.unwrap_or_else(|| Self::report_missing_pair()),
                }
            }
            _ => Self::report_unexpected_pair(pair),
        }
    }
}
