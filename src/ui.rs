//! Button primitive and utility-class merging.
//!
//! Class strings are Tailwind tokens treated as opaque text, except for the
//! conflict rule in [`merge_tw`]: when two classes share a variant chain and
//! a utility stem, the later one wins. Stems strip a trailing scale or
//! numeric value, so `py-3` and `py-2` collide while `text-center` and
//! `text-white` do not.
use std::fmt::Write;

const SHINY: &str = "py-3 px-4 font-medium text-center text-white active:shadow-none rounded-lg shadow bg-slate-800 md:bg-[linear-gradient(179.23deg,_#1E293B_0.66%,_rgba(30,_41,_59,_0)_255.99%)] hover:bg-slate-700 duration-150";

const DEFAULT: &str = "py-3 px-4 rounded-lg duration-150 font-medium text-center text-sm text-white bg-indigo-500";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    Shiny,
    #[default]
    Default,
}

impl ButtonVariant {
    pub fn preset(self) -> &'static str {
        match self {
            ButtonVariant::Shiny => SHINY,
            ButtonVariant::Default => DEFAULT,
        }
    }
}

pub struct Button<'a> {
    variant: ButtonVariant,
    class: &'a str,
    attrs: Vec<(&'a str, &'a str)>,
    label: &'a str,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            variant: ButtonVariant::default(),
            class: "",
            attrs: Vec::new(),
            label,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn class(mut self, class: &'a str) -> Self {
        self.class = class;
        self
    }

    /// Forwarded unchanged onto the rendered element.
    pub fn attr(mut self, name: &'a str, value: &'a str) -> Self {
        self.attrs.push((name, value));
        self
    }

    /// The preset block for the variant merged with caller classes,
    /// caller classes winning conflicts.
    pub fn class_list(&self) -> String {
        merge_tw(&format!("{} {}", self.variant.preset(), self.class))
    }

    pub fn render(&self) -> String {
        let mut html = String::from("<button");

        for (name, value) in &self.attrs {
            let _ = write!(html, " {name}=\"{}\"", escape(value));
        }

        let _ = write!(
            html,
            " class=\"{}\">{}</button>",
            escape(&self.class_list()),
            escape(self.label)
        );

        html
    }
}

/// Merges a whitespace-separated class string, dropping earlier classes
/// that conflict with later ones.
pub fn merge_tw(classes: &str) -> String {
    let mut seen: Vec<String> = Vec::new();
    let mut kept: Vec<&str> = Vec::new();

    for class in classes.split_whitespace().rev() {
        let key = conflict_key(class);

        if seen.contains(&key) {
            continue;
        }

        seen.push(key);
        kept.push(class);
    }

    kept.reverse();
    kept.join(" ")
}

fn conflict_key(class: &str) -> String {
    let (variants, utility) = match class.rfind(':') {
        Some(idx) => (&class[..=idx], &class[idx + 1..]),
        None => ("", class),
    };

    format!("{variants}{}", stem(utility))
}

/// `py-3` -> `py`, `rounded-lg` -> `rounded`, `text-white` -> `text-white`.
fn stem(utility: &str) -> &str {
    match utility.rfind('-') {
        Some(idx) if is_value(&utility[idx + 1..]) => &utility[..idx],
        _ => utility,
    }
}

fn is_value(segment: &str) -> bool {
    const SCALES: &[&str] = &[
        "xs", "sm", "md", "lg", "xl", "2xl", "3xl", "px", "full", "auto", "none", "screen",
    ];

    !segment.is_empty()
        && (segment.starts_with('[')
            || SCALES.contains(&segment)
            || segment
                .chars()
                .all(|c| c.is_ascii_digit() || c == '.' || c == '%' || c == '/'))
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }

    escaped
}
