//! Go source emission for translated documents.

use html2vecty_core::{ClassifiedAttribute, CodeNode, Document, ElementNode, EmitError, Package};

use crate::go::{Code, GoFile};
use crate::options::TranslateOptions;

/// Render a document as a Go source file.
///
/// No roots produce a bare package clause, one root a single `var`, and
/// several roots a `[]*vecty.HTML` slice in document order.
pub fn emit(doc: &Document, options: &TranslateOptions) -> Result<String, EmitError> {
    build_file(doc, options).render()
}

/// Assemble the Go file for a document without rendering it.
pub fn build_file(doc: &Document, options: &TranslateOptions) -> GoFile {
    let mut file = GoFile::new(options.package_name.as_str());
    file.import_names(
        options
            .import_aliases
            .iter()
            .map(|(path, alias)| (path.clone(), alias.clone())),
    );

    match doc.roots.as_slice() {
        [] => {}
        [root] => file.var(options.single_root_name.as_str(), node_code(root)),
        roots => file.var(
            options.multi_root_name.as_str(),
            Code::qual(Package::Vecty, "HTML")
                .pointer()
                .slice()
                .values(roots.iter().map(node_code).collect()),
        ),
    }

    file
}

/// The expression constructing one node.
pub fn node_code(node: &CodeNode) -> Code {
    match node {
        CodeNode::Text(text) => Code::qual(Package::Vecty, "Text").call(vec![Code::string(text)]),
        CodeNode::Element(element) => element_code(element),
    }
}

fn element_code(element: &ElementNode) -> Code {
    let mut args = Vec::with_capacity(element.children.len() + 2);

    if let Some(tag) = &element.tag_literal {
        args.push(Code::string(tag));
    }
    if !element.markup.is_empty() {
        let markup = element.markup.iter().flat_map(markup_code).collect();
        args.push(Code::qual(Package::Vecty, "Markup").call_multiline(markup));
    }
    args.extend(element.children.iter().map(node_code));

    Code::Qual(element.constructor.clone()).call_multiline(args)
}

/// Markup arguments for one attribute. Styles expand to one call per declaration.
fn markup_code(attribute: &ClassifiedAttribute) -> Vec<Code> {
    match attribute {
        ClassifiedAttribute::Style(declarations) => declarations
            .iter()
            .map(|decl| {
                Code::qual(Package::Vecty, "Style").call(vec![
                    Code::string(decl.property.as_str()),
                    Code::string(decl.forwarded_value()),
                ])
            })
            .collect(),
        ClassifiedAttribute::ClassList(classes) => vec![Code::qual(Package::Vecty, "Class")
            .call(classes.iter().map(|c| Code::string(c.as_str())).collect())],
        ClassifiedAttribute::Data { key, value } => vec![Code::qual(Package::Vecty, "Data")
            .call(vec![Code::string(key.as_str()), Code::string(value.as_str())])],
        ClassifiedAttribute::BoolProp { name, value } => {
            vec![Code::qual(Package::Prop, name.as_str()).call(vec![Code::bool(*value)])]
        }
        ClassifiedAttribute::StringProp { name, value } => {
            vec![Code::qual(Package::Prop, name.as_str()).call(vec![Code::string(value.as_str())])]
        }
        ClassifiedAttribute::EnumProp { name, constant } => {
            vec![Code::qual(Package::Prop, name.as_str())
                .call(vec![Code::qual(Package::Prop, constant.as_str())])]
        }
        ClassifiedAttribute::Generic { name, value } => {
            vec![Code::qual(Package::Vecty, "Attribute")
                .call(vec![Code::string(name.as_str()), Code::string(value.as_str())])]
        }
    }
}
