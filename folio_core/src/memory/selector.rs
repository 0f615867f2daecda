//! The CSS selector subset understood by [`super::MemoryDocument`].
//!
//! Supported: type selectors, `*`, `.class`, `#id`, `[attr]`, `[attr="v"]`,
//! `[attr^="v"]`, compound selectors, the descendant combinator and
//! comma-separated lists. That covers every selector in `PageConfig`.

/// What a selector needs to know about an element.
pub(crate) trait Subject: Sized {
    fn tag(&self) -> &str;
    fn attribute(&self, name: &str) -> Option<&str>;
    fn parent(&self) -> Option<Self>;

    fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .is_some_and(|list| list.split_whitespace().any(|c| c == class))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum AttrOp {
    Exists,
    Equals(String),
    Prefix(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AttrMatch {
    name: String,
    op: AttrOp,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    ids: Vec<String>,
    classes: Vec<String>,
    attrs: Vec<AttrMatch>,
}

impl Compound {
    fn is_empty(&self) -> bool {
        self.tag.is_none() && self.ids.is_empty() && self.classes.is_empty() && self.attrs.is_empty()
    }

    fn matches<S: Subject>(&self, subject: &S) -> bool {
        if let Some(tag) = &self.tag {
            if tag != "*" && !tag.eq_ignore_ascii_case(subject.tag()) {
                return false;
            }
        }
        if !self.ids.iter().all(|id| subject.attribute("id") == Some(id.as_str())) {
            return false;
        }
        if !self.classes.iter().all(|class| subject.has_class(class)) {
            return false;
        }
        self.attrs.iter().all(|attr| {
            let value = subject.attribute(&attr.name);
            match &attr.op {
                AttrOp::Exists => value.is_some(),
                AttrOp::Equals(expected) => value == Some(expected.as_str()),
                AttrOp::Prefix(prefix) => value.is_some_and(|v| v.starts_with(prefix.as_str())),
            }
        })
    }
}

/// Compounds joined by descendant combinators, leftmost first.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Complex(Vec<Compound>);

impl Complex {
    fn matches<S: Subject>(&self, subject: &S) -> bool {
        let Some((last, ancestors)) = self.0.split_last() else {
            return false;
        };
        if !last.matches(subject) {
            return false;
        }
        // Descendant-only chains can be matched greedily right to left.
        let mut remaining = ancestors.iter().rev().peekable();
        let mut current = subject.parent();
        while let Some(compound) = remaining.peek() {
            let Some(node) = current else {
                return false;
            };
            if compound.matches(&node) {
                remaining.next();
            }
            current = node.parent();
        }
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SelectorList(Vec<Complex>);

impl SelectorList {
    /// `None` when the selector uses syntax outside the supported subset.
    pub(crate) fn parse(input: &str) -> Option<Self> {
        let list = input
            .split(',')
            .map(parse_complex)
            .collect::<Option<Vec<_>>>()?;
        if list.is_empty() {
            return None;
        }
        Some(Self(list))
    }

    pub(crate) fn matches<S: Subject>(&self, subject: &S) -> bool {
        self.0.iter().any(|complex| complex.matches(subject))
    }
}

fn is_ident_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '-' || ch == '_'
}

fn read_ident(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<String> {
    let mut ident = String::new();
    while let Some(&ch) = chars.peek() {
        if !is_ident_char(ch) {
            break;
        }
        ident.push(ch);
        chars.next();
    }
    (!ident.is_empty()).then_some(ident)
}

fn parse_complex(input: &str) -> Option<Complex> {
    let mut compounds = Vec::new();
    let mut current = Compound::default();
    let mut chars = input.trim().chars().peekable();

    while let Some(&ch) = chars.peek() {
        match ch {
            c if c.is_whitespace() => {
                chars.next();
                if !current.is_empty() {
                    compounds.push(std::mem::take(&mut current));
                }
            }
            '.' => {
                chars.next();
                current.classes.push(read_ident(&mut chars)?);
            }
            '#' => {
                chars.next();
                current.ids.push(read_ident(&mut chars)?);
            }
            '[' => {
                chars.next();
                let mut body = String::new();
                loop {
                    match chars.next()? {
                        ']' => break,
                        c => body.push(c),
                    }
                }
                current.attrs.push(parse_attr(&body)?);
            }
            '*' => {
                chars.next();
                if current.tag.is_some() {
                    return None;
                }
                current.tag = Some("*".into());
            }
            c if is_ident_char(c) => {
                if current.tag.is_some() || !current.is_empty() {
                    return None;
                }
                current.tag = Some(read_ident(&mut chars)?.to_ascii_lowercase());
            }
            _ => return None,
        }
    }
    if !current.is_empty() {
        compounds.push(current);
    }
    if compounds.is_empty() {
        return None;
    }
    Some(Complex(compounds))
}

fn parse_attr(body: &str) -> Option<AttrMatch> {
    let unquote = |value: &str| {
        let value = value.trim();
        let stripped = value
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')));
        stripped.unwrap_or(value).to_string()
    };

    if let Some((name, value)) = body.split_once("^=") {
        return Some(AttrMatch {
            name: name.trim().to_string(),
            op: AttrOp::Prefix(unquote(value)),
        });
    }
    if let Some((name, value)) = body.split_once('=') {
        return Some(AttrMatch {
            name: name.trim().to_string(),
            op: AttrOp::Equals(unquote(value)),
        });
    }
    let name = body.trim();
    if name.is_empty() || !name.chars().all(is_ident_char) {
        return None;
    }
    Some(AttrMatch {
        name: name.to_string(),
        op: AttrOp::Exists,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Fake<'a> {
        chain: &'a [(&'a str, &'a [(&'a str, &'a str)])],
        depth: usize,
    }

    impl Subject for Fake<'_> {
        fn tag(&self) -> &str {
            self.chain[self.depth].0
        }

        fn attribute(&self, name: &str) -> Option<&str> {
            self.chain[self.depth]
                .1
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| *value)
        }

        fn parent(&self) -> Option<Self> {
            (self.depth > 0).then(|| Fake {
                chain: self.chain,
                depth: self.depth - 1,
            })
        }
    }

    const NAV_LINK: &[(&str, &[(&str, &str)])] = &[
        ("html", &[]),
        ("body", &[]),
        ("ul", &[("class", "nav-menu active")]),
        ("li", &[]),
        ("a", &[("href", "#about"), ("class", "nav-link")]),
    ];

    fn leaf(chain: &'static [(&'static str, &'static [(&'static str, &'static str)])]) -> Fake<'static> {
        Fake {
            chain,
            depth: chain.len() - 1,
        }
    }

    fn matches(selector: &str) -> bool {
        SelectorList::parse(selector)
            .unwrap_or_else(|| panic!("unsupported selector {selector}"))
            .matches(&leaf(NAV_LINK))
    }

    #[test]
    fn matches_page_selectors() {
        assert!(matches(".nav-menu a"));
        assert!(matches("a[href^=\"#\"]"));
        assert!(matches("a[href='#about']"));
        assert!(matches("p, h1, li, span, a"));
        assert!(matches("ul.nav-menu.active li a.nav-link"));
        assert!(matches("*"));
        assert!(!matches("section[id]"));
        assert!(!matches(".nav-menu a[href^=\"http\"]"));
        assert!(!matches(".top-nav a"));
    }

    #[test]
    fn tag_match_is_case_insensitive() {
        assert!(matches("A"));
    }

    #[test]
    fn rejects_unsupported_syntax() {
        assert!(SelectorList::parse("ul > li").is_none());
        assert!(SelectorList::parse("a:hover").is_none());
        assert!(SelectorList::parse("").is_none());
        assert!(SelectorList::parse("a,").is_none());
    }
}
