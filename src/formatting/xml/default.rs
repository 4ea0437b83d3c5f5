use {
    crate::syntax_tree::{
        xml::{Document, Element},
        Node,
    },
    std::fmt::{self, Display, Formatter},
};

pub struct Format<'a, N: Node>(pub &'a N);

fn escape(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            c => result.push(c),
        }
    }
    result
}

impl Display for Format<'_, Element> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = &self.0.name;

        write!(f, "<{name}")?;
        for (key, value) in &self.0.attributes {
            write!(f, " {key}=\"{}\"", escape(value))?;
        }

        if self.0.children.is_empty() {
            write!(f, "/>")
        } else {
            write!(f, ">")?;
            for child in &self.0.children {
                Format(child).fmt(f)?;
            }
            write!(f, "</{name}>")
        }
    }
}

impl Display for Format<'_, Document> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", Format(&self.0.root))
    }
}
