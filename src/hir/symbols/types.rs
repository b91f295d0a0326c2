//! Public type definitions for symbol extraction.
//!
//! Contains the symbol record (`Symbol`), its closed kind classification
//! (`SymbolKind`) and the modifiers a declaration can carry.

use std::fmt;
use std::sync::Arc;

use crate::base::Span;
use crate::hir::diagnostics::Diagnostic;

/// Access modifier written on a declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Visibility {
    Public,
    Private,
}

impl Visibility {
    /// Parse a visibility keyword (case-insensitive).
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        if keyword.eq_ignore_ascii_case("public") {
            Some(Self::Public)
        } else if keyword.eq_ignore_ascii_case("private") {
            Some(Self::Private)
        } else {
            None
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Public => "Public",
            Self::Private => "Private",
        }
    }
}

/// Property accessor kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Accessor {
    Let,
    Set,
    Get,
}

impl Accessor {
    /// Parse an accessor keyword (case-insensitive).
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_lowercase().as_str() {
            "let" => Some(Self::Let),
            "set" => Some(Self::Set),
            "get" => Some(Self::Get),
            _ => None,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Let => "Let",
            Self::Set => "Set",
            Self::Get => "Get",
        }
    }
}

impl fmt::Display for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// The kind of a symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SymbolKind {
    Class,
    /// `Function` or `Sub`
    Method,
    /// `Property Let/Set/Get`
    Property,
    /// `Public x` / `Private x` at class level
    Field,
    /// `Dim` entries and parameters
    Variable,
    Constant,
}

impl SymbolKind {
    /// Get a display string for this kind (capitalized for UI display).
    pub fn display(&self) -> &'static str {
        match self {
            Self::Class => "Class",
            Self::Method => "Method",
            Self::Property => "Property",
            Self::Field => "Field",
            Self::Variable => "Variable",
            Self::Constant => "Constant",
        }
    }

    /// Whether names of this kind render with their parameter list.
    pub fn renders_parameters(&self) -> bool {
        matches!(self, Self::Method | Self::Property)
    }

    /// Whether this kind spans a block that can contain other symbols.
    pub fn is_block(&self) -> bool {
        matches!(self, Self::Class | Self::Method | Self::Property)
    }

    /// Convert to LSP symbol kind number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            Self::Class => 5,     // Class
            Self::Method => 6,    // Method
            Self::Property => 7,  // Property
            Self::Field => 8,     // Field
            Self::Variable => 13, // Variable
            Self::Constant => 14, // Constant
        }
    }
}

/// A symbol extracted from script source.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Symbol {
    /// What kind of symbol this is
    pub kind: SymbolKind,
    /// The bare identifier
    pub name: Arc<str>,
    /// Access modifier, if one was written
    pub visibility: Option<Visibility>,
    /// Accessor kind for properties
    pub declared_type: Option<Accessor>,
    /// Whether the method/property is marked `Default`
    pub is_default: bool,
    /// Raw text between the parentheses of a method/property header
    pub parameter_text: Arc<str>,
    /// Whole construct for blocks, the statement for simple declarations
    pub declared_range: Span,
    /// Just the identifier
    pub name_range: Span,
    /// Name of the nearest enclosing construct, absent at file scope
    pub parent_name: Option<Arc<str>>,
}

impl Symbol {
    /// Create a symbol whose declared and name ranges coincide.
    pub fn new(kind: SymbolKind, name: impl Into<Arc<str>>, range: Span) -> Self {
        Self {
            kind,
            name: name.into(),
            visibility: None,
            declared_type: None,
            is_default: false,
            parameter_text: Arc::from(""),
            declared_range: range,
            name_range: range,
            parent_name: None,
        }
    }

    /// Name as shown in outlines: `name (args)` for methods and
    /// properties, the bare name otherwise.
    pub fn rendered_name(&self) -> String {
        if self.kind.renders_parameters() {
            format!("{} ({})", self.name, self.parameter_text)
        } else {
            self.name.to_string()
        }
    }

    /// Signature line for methods and properties, e.g. `Public Get Name(i)`.
    pub fn signature(&self) -> Option<String> {
        if !self.kind.renders_parameters() {
            return None;
        }
        let mut signature = String::new();
        for part in [
            self.visibility.map(|v| v.keyword()),
            self.declared_type.map(|a| a.keyword()),
        ]
        .into_iter()
        .flatten()
        {
            signature.push_str(part);
            signature.push(' ');
        }
        signature.push_str(&self.name);
        signature.push('(');
        signature.push_str(&self.parameter_text);
        signature.push(')');
        Some(signature)
    }
}

/// Result of symbol extraction for one document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtractionResult {
    /// Extracted symbols, sorted by declared start position.
    pub symbols: Vec<Symbol>,
    /// Structural problems found along the way.
    pub diagnostics: Vec<Diagnostic>,
}
