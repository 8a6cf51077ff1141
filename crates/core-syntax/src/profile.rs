//! Language profiles and the built-in registry.
//!
//! A profile is static data: the registry is a `&'static` slice and selection
//! hands out `&'static LanguageProfile` references, so rows and documents can
//! hold a profile without lifetimes leaking into their types.

use crate::highlight::Highlight;

bitflags::bitflags! {
    /// Optional classification passes enabled for a profile.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct HighlightFlags: u8 {
        const NUMBERS = 0b0000_0001;
        const STRINGS = 0b0000_0010;
    }
}

/// Which keyword color a keyword receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordClass {
    /// Control flow and declarations.
    Primary,
    /// Type names.
    Secondary,
}

impl From<KeywordClass> for Highlight {
    fn from(class: KeywordClass) -> Self {
        match class {
            KeywordClass::Primary => Highlight::KeywordPrimary,
            KeywordClass::Secondary => Highlight::KeywordSecondary,
        }
    }
}

/// A keyword paired with its class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keyword {
    pub text: &'static str,
    pub class: KeywordClass,
}

impl Keyword {
    pub const fn primary(text: &'static str) -> Self {
        Self {
            text,
            class: KeywordClass::Primary,
        }
    }

    pub const fn secondary(text: &'static str) -> Self {
        Self {
            text,
            class: KeywordClass::Secondary,
        }
    }
}

/// Immutable description of how rows of one file type are classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageProfile {
    /// Display name shown in the status bar.
    pub name: &'static str,
    /// Entries starting with `.` match the file extension exactly; any other
    /// entry matches as a substring of the file name.
    pub matchers: &'static [&'static str],
    pub keywords: &'static [Keyword],
    /// Empty disables comment highlighting.
    pub single_line_comment: &'static str,
    pub flags: HighlightFlags,
}

impl LanguageProfile {
    pub fn highlights_numbers(&self) -> bool {
        self.flags.contains(HighlightFlags::NUMBERS)
    }

    pub fn highlights_strings(&self) -> bool {
        self.flags.contains(HighlightFlags::STRINGS)
    }

    fn matches(&self, file_name: &str) -> bool {
        let extension = file_name.rfind('.').map(|idx| &file_name[idx..]);
        self.matchers.iter().any(|m| {
            if m.starts_with('.') {
                extension == Some(*m)
            } else {
                file_name.contains(m)
            }
        })
    }
}

const ALL_FLAGS: HighlightFlags = HighlightFlags::NUMBERS.union(HighlightFlags::STRINGS);

const C_KEYWORDS: &[Keyword] = &[
    Keyword::primary("switch"),
    Keyword::primary("if"),
    Keyword::primary("while"),
    Keyword::primary("for"),
    Keyword::primary("break"),
    Keyword::primary("continue"),
    Keyword::primary("return"),
    Keyword::primary("else"),
    Keyword::primary("struct"),
    Keyword::primary("union"),
    Keyword::primary("typedef"),
    Keyword::primary("static"),
    Keyword::primary("enum"),
    Keyword::primary("class"),
    Keyword::primary("case"),
    Keyword::primary("default"),
    Keyword::primary("sizeof"),
    Keyword::primary("const"),
    Keyword::secondary("int"),
    Keyword::secondary("long"),
    Keyword::secondary("double"),
    Keyword::secondary("float"),
    Keyword::secondary("char"),
    Keyword::secondary("unsigned"),
    Keyword::secondary("signed"),
    Keyword::secondary("void"),
];

const RUST_KEYWORDS: &[Keyword] = &[
    Keyword::primary("fn"),
    Keyword::primary("let"),
    Keyword::primary("mut"),
    Keyword::primary("if"),
    Keyword::primary("else"),
    Keyword::primary("match"),
    Keyword::primary("loop"),
    Keyword::primary("while"),
    Keyword::primary("for"),
    Keyword::primary("in"),
    Keyword::primary("break"),
    Keyword::primary("continue"),
    Keyword::primary("return"),
    Keyword::primary("struct"),
    Keyword::primary("enum"),
    Keyword::primary("impl"),
    Keyword::primary("trait"),
    Keyword::primary("pub"),
    Keyword::primary("use"),
    Keyword::primary("mod"),
    Keyword::primary("const"),
    Keyword::primary("static"),
    Keyword::primary("self"),
    Keyword::primary("where"),
    Keyword::secondary("bool"),
    Keyword::secondary("char"),
    Keyword::secondary("str"),
    Keyword::secondary("u8"),
    Keyword::secondary("u16"),
    Keyword::secondary("u32"),
    Keyword::secondary("u64"),
    Keyword::secondary("usize"),
    Keyword::secondary("i8"),
    Keyword::secondary("i16"),
    Keyword::secondary("i32"),
    Keyword::secondary("i64"),
    Keyword::secondary("isize"),
    Keyword::secondary("f32"),
    Keyword::secondary("f64"),
    Keyword::secondary("String"),
    Keyword::secondary("Vec"),
    Keyword::secondary("Option"),
    Keyword::secondary("Result"),
    Keyword::secondary("Self"),
];

const PYTHON_KEYWORDS: &[Keyword] = &[
    Keyword::primary("def"),
    Keyword::primary("class"),
    Keyword::primary("if"),
    Keyword::primary("elif"),
    Keyword::primary("else"),
    Keyword::primary("for"),
    Keyword::primary("while"),
    Keyword::primary("in"),
    Keyword::primary("return"),
    Keyword::primary("import"),
    Keyword::primary("from"),
    Keyword::primary("as"),
    Keyword::primary("with"),
    Keyword::primary("try"),
    Keyword::primary("except"),
    Keyword::primary("finally"),
    Keyword::primary("raise"),
    Keyword::primary("pass"),
    Keyword::primary("lambda"),
    Keyword::primary("yield"),
    Keyword::secondary("int"),
    Keyword::secondary("float"),
    Keyword::secondary("str"),
    Keyword::secondary("bool"),
    Keyword::secondary("list"),
    Keyword::secondary("dict"),
    Keyword::secondary("None"),
    Keyword::secondary("True"),
    Keyword::secondary("False"),
];

/// Built-in registry, searched in order; the first matching profile wins.
pub static PROFILES: &[LanguageProfile] = &[
    LanguageProfile {
        name: "c",
        matchers: &[".c", ".h", ".cpp"],
        keywords: C_KEYWORDS,
        single_line_comment: "//",
        flags: ALL_FLAGS,
    },
    LanguageProfile {
        name: "rust",
        matchers: &[".rs"],
        keywords: RUST_KEYWORDS,
        single_line_comment: "//",
        flags: ALL_FLAGS,
    },
    LanguageProfile {
        name: "python",
        matchers: &[".py"],
        keywords: PYTHON_KEYWORDS,
        single_line_comment: "#",
        flags: ALL_FLAGS,
    },
];

/// Pick the profile for `file_name`, or `None` when no registry entry matches.
pub fn select_profile(file_name: &str) -> Option<&'static LanguageProfile> {
    let found = PROFILES.iter().find(|p| p.matches(file_name));
    tracing::debug!(
        target: "syntax",
        profile = found.map(|p| p.name),
        "profile_selected"
    );
    found
}
