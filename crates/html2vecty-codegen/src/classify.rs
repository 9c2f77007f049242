//! Attribute classification.
//!
//! Rules are tried in a fixed order and the first match wins:
//!
//! 1. `style` is parsed into declarations
//! 2. `class` is split on single spaces
//! 3. `data-*` becomes a data attribute
//! 4. boolean properties (`autofocus`, `checked`)
//! 5. string properties (`for`, `href`, `id`, `placeholder`, `src`, `value`)
//! 6. `type` with a known input type value
//! 7. anything else is a generic attribute

use html2vecty_core::{Attribute, ClassifiedAttribute, StyleError};
use html2vecty_parser::parse_declarations;

use crate::tables::{bool_property, input_type_constant, string_property};

/// Prefix of custom data attributes.
pub const DATA_PREFIX: &str = "data-";

/// Classify one attribute.
///
/// Only a malformed `style` value can fail.
pub fn classify(attribute: &Attribute) -> Result<ClassifiedAttribute, StyleError> {
    let Attribute { name, value } = attribute;

    if name == "style" {
        return parse_declarations(value).map(ClassifiedAttribute::Style);
    }

    if name == "class" {
        // a naive split: "a  b" keeps the empty class between the spaces
        return Ok(ClassifiedAttribute::ClassList(
            value.split(' ').map(str::to_string).collect(),
        ));
    }

    if let Some(key) = name.strip_prefix(DATA_PREFIX) {
        return Ok(ClassifiedAttribute::Data {
            key: key.to_string(),
            value: value.clone(),
        });
    }

    if let Some(prop) = bool_property(name) {
        return Ok(ClassifiedAttribute::BoolProp {
            name: prop.to_string(),
            value: value == "true",
        });
    }

    if let Some(prop) = string_property(name) {
        return Ok(ClassifiedAttribute::StringProp {
            name: prop.to_string(),
            value: value.clone(),
        });
    }

    if name == "type" {
        if let Some(constant) = input_type_constant(value) {
            return Ok(ClassifiedAttribute::EnumProp {
                name: "Type".to_string(),
                constant: constant.to_string(),
            });
        }
    }

    Ok(ClassifiedAttribute::Generic {
        name: name.clone(),
        value: value.clone(),
    })
}

/// Classify a tag's attributes in order, stopping at the first error.
pub fn classify_all(attributes: &[Attribute]) -> Result<Vec<ClassifiedAttribute>, StyleError> {
    attributes.iter().map(classify).collect()
}
