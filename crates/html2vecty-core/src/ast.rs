//! Call-expression tree types produced from markup.

use smallvec::SmallVec;

/// A Go package the generated code may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Package {
    Vecty,
    Elem,
    Prop,
    Event,
    Style,
}

impl Package {
    pub const ALL: [Package; 5] = [
        Package::Vecty,
        Package::Elem,
        Package::Prop,
        Package::Event,
        Package::Style,
    ];

    /// Full import path of the package.
    pub fn import_path(self) -> &'static str {
        match self {
            Package::Vecty => "github.com/gopherjs/vecty",
            Package::Elem => "github.com/gopherjs/vecty/elem",
            Package::Prop => "github.com/gopherjs/vecty/prop",
            Package::Event => "github.com/gopherjs/vecty/event",
            Package::Style => "github.com/gopherjs/vecty/style",
        }
    }

    /// The package's declared name (last path segment).
    pub fn default_alias(self) -> &'static str {
        match self {
            Package::Vecty => "vecty",
            Package::Elem => "elem",
            Package::Prop => "prop",
            Package::Event => "event",
            Package::Style => "style",
        }
    }
}

/// A package-qualified Go identifier such as `elem.Div`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QualifiedName {
    pub package: Package,
    pub name: String,
}

impl QualifiedName {
    pub fn new(package: Package, name: impl Into<String>) -> Self {
        Self {
            package,
            name: name.into(),
        }
    }
}

/// One declaration of an inline `style` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleDeclaration {
    pub property: String,
    pub value: String,
    pub important: bool,
}

impl StyleDeclaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>, important: bool) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            important,
        }
    }

    /// The value passed to the generated style call.
    ///
    /// Importance is folded into the value as a literal `!important` suffix.
    pub fn forwarded_value(&self) -> String {
        if self.important {
            format!("{}!important", self.value)
        } else {
            self.value.clone()
        }
    }
}

/// The outcome of classifying one markup attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClassifiedAttribute {
    /// `style="..."`, one entry per declaration.
    Style(Vec<StyleDeclaration>),
    /// `class="..."` split on single spaces. Empty entries are kept.
    ClassList(SmallVec<[String; 4]>),
    /// `data-key="value"` with the prefix stripped from the key.
    Data { key: String, value: String },
    /// A boolean property such as `Checked`.
    BoolProp { name: String, value: bool },
    /// A string property such as `Href`.
    StringProp { name: String, value: String },
    /// A property taking a named constant, such as `Type(TypeCheckbox)`.
    EnumProp { name: String, constant: String },
    /// Anything else, passed through as a plain attribute.
    Generic { name: String, value: String },
}

/// A markup element translated to a constructor call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementNode {
    /// Constructor being invoked (`elem.Div`, `vecty.Tag`, ...).
    pub constructor: QualifiedName,
    /// Literal tag name, present only for tags with no dedicated constructor.
    pub tag_literal: Option<String>,
    /// Classified attributes in source order.
    pub markup: Vec<ClassifiedAttribute>,
    /// Child nodes in document order.
    pub children: Vec<CodeNode>,
}

/// A node of the call-expression tree.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CodeNode {
    Element(ElementNode),
    /// Trimmed, non-empty text content.
    Text(String),
}

impl CodeNode {
    /// Depth of element nesting below and including this node.
    ///
    /// Text nodes contribute no depth.
    pub fn element_depth(&self) -> usize {
        match self {
            CodeNode::Text(_) => 0,
            CodeNode::Element(element) => {
                1 + element
                    .children
                    .iter()
                    .map(CodeNode::element_depth)
                    .max()
                    .unwrap_or(0)
            }
        }
    }

    pub fn as_element(&self) -> Option<&ElementNode> {
        match self {
            CodeNode::Element(element) => Some(element),
            CodeNode::Text(_) => None,
        }
    }
}

/// The translated document: every top-level node in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    pub roots: Vec<CodeNode>,
}

impl Document {
    pub fn new(roots: Vec<CodeNode>) -> Self {
        Self { roots }
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}
