//! Static lookup tables for tag and attribute translation.
//!
//! Every table is sorted by key so lookups can binary search.

/// Known tag names and their `elem` constructors.
pub static ELEMENT_CONSTRUCTORS: &[(&str, &str)] = &[
    ("a", "Anchor"),
    ("abbr", "Abbreviation"),
    ("address", "Address"),
    ("area", "Area"),
    ("article", "Article"),
    ("aside", "Aside"),
    ("audio", "Audio"),
    ("b", "Bold"),
    ("base", "Base"),
    ("bdi", "BidirectionalIsolation"),
    ("bdo", "BidirectionalOverride"),
    ("blockquote", "BlockQuote"),
    ("body", "Body"),
    ("br", "Break"),
    ("button", "Button"),
    ("canvas", "Canvas"),
    ("caption", "Caption"),
    ("cite", "Citation"),
    ("code", "Code"),
    ("col", "Column"),
    ("colgroup", "ColumnGroup"),
    ("data", "Data"),
    ("datalist", "DataList"),
    ("dd", "Description"),
    ("del", "DeletedText"),
    ("details", "Details"),
    ("dfn", "Definition"),
    ("dialog", "Dialog"),
    ("div", "Div"),
    ("dl", "DescriptionList"),
    ("dt", "DefinitionTerm"),
    ("em", "Emphasis"),
    ("embed", "Embed"),
    ("fieldset", "FieldSet"),
    ("figcaption", "FigureCaption"),
    ("figure", "Figure"),
    ("footer", "Footer"),
    ("form", "Form"),
    ("h1", "Heading1"),
    ("h2", "Heading2"),
    ("h3", "Heading3"),
    ("h4", "Heading4"),
    ("h5", "Heading5"),
    ("h6", "Heading6"),
    ("header", "Header"),
    ("hgroup", "HeadingsGroup"),
    ("hr", "HorizontalRule"),
    ("i", "Italic"),
    ("iframe", "InlineFrame"),
    ("img", "Image"),
    ("input", "Input"),
    ("ins", "InsertedText"),
    ("kbd", "KeyboardInput"),
    ("label", "Label"),
    ("legend", "Legend"),
    ("li", "ListItem"),
    ("link", "Link"),
    ("main", "Main"),
    ("map", "Map"),
    ("mark", "Mark"),
    ("meta", "Meta"),
    ("meter", "Meter"),
    ("nav", "Navigation"),
    ("noscript", "NoScript"),
    ("object", "Object"),
    ("ol", "OrderedList"),
    ("optgroup", "OptionsGroup"),
    ("option", "Option"),
    ("output", "Output"),
    ("p", "Paragraph"),
    ("param", "Parameter"),
    ("picture", "Picture"),
    ("pre", "Preformatted"),
    ("progress", "Progress"),
    ("q", "Quote"),
    ("rp", "RubyParenthesis"),
    ("rt", "RubyText"),
    ("rtc", "RubyTextContainer"),
    ("ruby", "Ruby"),
    ("s", "Strikethrough"),
    ("samp", "Sample"),
    ("script", "Script"),
    ("section", "Section"),
    ("select", "Select"),
    ("slot", "Slot"),
    ("small", "Small"),
    ("source", "Source"),
    ("span", "Span"),
    ("strong", "Strong"),
    ("style", "Style"),
    ("sub", "Subscript"),
    ("summary", "Summary"),
    ("sup", "Superscript"),
    ("table", "Table"),
    ("tbody", "TableBody"),
    ("td", "TableData"),
    ("template", "Template"),
    ("textarea", "TextArea"),
    ("tfoot", "TableFoot"),
    ("th", "TableHeader"),
    ("thead", "TableHead"),
    ("time", "Time"),
    ("title", "Title"),
    ("tr", "TableRow"),
    ("track", "Track"),
    ("u", "Underline"),
    ("ul", "UnorderedList"),
    ("var", "Variable"),
    ("video", "Video"),
    ("wbr", "WordBreakOpportunity"),
];

/// `type` attribute values with a dedicated `prop` constant.
pub static INPUT_TYPE_CONSTANTS: &[(&str, &str)] = &[
    ("button", "TypeButton"),
    ("checkbox", "TypeCheckbox"),
    ("color", "TypeColor"),
    ("date", "TypeDate"),
    ("datetime", "TypeDatetime"),
    ("datetime-local", "TypeDatetimeLocal"),
    ("email", "TypeEmail"),
    ("file", "TypeFile"),
    ("hidden", "TypeHidden"),
    ("image", "TypeImage"),
    ("max", "TypeMax"),
    ("min", "TypeMin"),
    ("month", "TypeMonth"),
    ("number", "TypeNumber"),
    ("password", "TypePassword"),
    ("radio", "TypeRadio"),
    ("range", "TypeRange"),
    ("reset", "TypeReset"),
    ("search", "TypeSearch"),
    ("step", "TypeStep"),
    ("submit", "TypeSubmit"),
    ("tel", "TypeTel"),
    ("text", "TypeText"),
    ("time", "TypeTime"),
    ("url", "TypeUrl"),
    ("value", "TypeValue"),
    ("week", "TypeWeek"),
];

/// Attributes mapped to boolean `prop` functions.
pub static BOOL_PROPERTIES: &[(&str, &str)] = &[
    ("autofocus", "Autofocus"),
    ("checked", "Checked"),
];

/// Attributes mapped to string `prop` functions.
pub static STRING_PROPERTIES: &[(&str, &str)] = &[
    ("for", "For"),
    ("href", "Href"),
    ("id", "ID"),
    ("placeholder", "Placeholder"),
    ("src", "Src"),
    ("value", "Value"),
];

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .binary_search_by(|(k, _)| (*k).cmp(key))
        .ok()
        .map(|i| table[i].1)
}

/// `elem` constructor for a tag name, if there is one.
pub fn element_constructor(tag: &str) -> Option<&'static str> {
    lookup(ELEMENT_CONSTRUCTORS, tag)
}

/// `prop` constant for an `<input type>` value.
pub fn input_type_constant(value: &str) -> Option<&'static str> {
    lookup(INPUT_TYPE_CONSTANTS, value)
}

pub fn bool_property(attribute: &str) -> Option<&'static str> {
    lookup(BOOL_PROPERTIES, attribute)
}

pub fn string_property(attribute: &str) -> Option<&'static str> {
    lookup(STRING_PROPERTIES, attribute)
}
