//! Declaration model handed over by the front end.
//!
//! Only the lexical shape of a declaration is modeled: its identifier, the
//! location of that identifier, and the few attributes the rules inspect.

use crate::types::Location;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// Kind of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclKind {
    /// Class / interface declaration.
    Type,
    /// Property declaration.
    Property,
    /// Method declaration.
    Method,
}

impl std::fmt::Display for DeclKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Type => write!(f, "type"),
            Self::Property => write!(f, "property"),
            Self::Method => write!(f, "method"),
        }
    }
}

/// A declaration discovered by the external traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Declaration {
    /// Class / interface declaration.
    Type(TypeDecl),
    /// Property declaration.
    Property(PropertyDecl),
    /// Method declaration.
    Method(MethodDecl),
}

impl Declaration {
    /// Returns the kind of this declaration.
    #[must_use]
    pub fn kind(&self) -> DeclKind {
        match self {
            Self::Type(_) => DeclKind::Type,
            Self::Property(_) => DeclKind::Property,
            Self::Method(_) => DeclKind::Method,
        }
    }

    /// Returns the declaration's identifier text.
    ///
    /// For methods this is the joined selector, e.g. `setValue:forKey:`.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Type(decl) => decl.name.clone(),
            Self::Property(decl) => decl.name.clone(),
            Self::Method(decl) => decl.selector_name(),
        }
    }

    /// Returns the location of the declaration's identifier.
    #[must_use]
    pub fn location(&self) -> &Location {
        match self {
            Self::Type(decl) => &decl.location,
            Self::Property(decl) => &decl.location,
            Self::Method(decl) => &decl.location,
        }
    }

    /// Returns the path of the file the declaration lives in.
    #[must_use]
    pub fn origin_file(&self) -> &Path {
        &self.location().file
    }
}

/// A class or interface declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDecl {
    /// Type name.
    pub name: String,
    /// Location of the type name.
    pub location: Location,
}

impl TypeDecl {
    /// Creates a new type declaration.
    #[must_use]
    pub fn new(name: impl Into<String>, location: Location) -> Self {
        Self {
            name: name.into(),
            location,
        }
    }
}

/// A declared property attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum PropertyAttribute {
    Atomic,
    Nonatomic,
    Copy,
    Strong,
    Weak,
    Assign,
    Retain,
    UnsafeUnretained,
    Readonly,
    Readwrite,
    Nullable,
    Nonnull,
    NullResettable,
    Class,
}

/// Set of attributes declared on a property.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyAttributes(BTreeSet<PropertyAttribute>);

impl PropertyAttributes {
    /// Creates an empty attribute set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `attr` was declared.
    #[must_use]
    pub fn contains(&self, attr: PropertyAttribute) -> bool {
        self.0.contains(&attr)
    }

    /// Adds an attribute.
    pub fn insert(&mut self, attr: PropertyAttribute) {
        self.0.insert(attr);
    }

    /// Returns true if no attributes were declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<PropertyAttribute> for PropertyAttributes {
    fn from_iter<I: IntoIterator<Item = PropertyAttribute>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A property declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDecl {
    /// Property name.
    pub name: String,
    /// Location of the property name.
    pub location: Location,
    /// Textual type signature, e.g. `NSString *`. `None` if unresolved.
    #[serde(default, rename = "type")]
    pub declared_type: Option<String>,
    /// Declared attributes.
    #[serde(default)]
    pub attributes: PropertyAttributes,
}

impl PropertyDecl {
    /// Creates a property without a resolved type or attributes.
    #[must_use]
    pub fn new(name: impl Into<String>, location: Location) -> Self {
        Self {
            name: name.into(),
            location,
            declared_type: None,
            attributes: PropertyAttributes::new(),
        }
    }

    /// Sets the declared type.
    #[must_use]
    pub fn with_type(mut self, declared_type: impl Into<String>) -> Self {
        self.declared_type = Some(declared_type.into());
        self
    }

    /// Adds a declared attribute.
    #[must_use]
    pub fn with_attribute(mut self, attr: PropertyAttribute) -> Self {
        self.attributes.insert(attr);
        self
    }

    /// Returns true if the front end resolved the property's type.
    #[must_use]
    pub fn has_explicit_type(&self) -> bool {
        self.declared_type.is_some()
    }
}

/// A named, located identifier inside a method declaration.
///
/// Used both for selector fragments and for parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedPart {
    /// Identifier text. May be empty (e.g. an unnamed parameter).
    pub name: String,
    /// Location of the identifier.
    pub location: Location,
}

impl NamedPart {
    /// Creates a new named part.
    #[must_use]
    pub fn new(name: impl Into<String>, location: Location) -> Self {
        Self {
            name: name.into(),
            location,
        }
    }
}

/// A method declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDecl {
    /// Location of the method declaration.
    pub location: Location,
    /// Selector fragments, in source order.
    pub selector: Vec<NamedPart>,
    /// Parameters, in source order.
    #[serde(default)]
    pub parameters: Vec<NamedPart>,
}

impl MethodDecl {
    /// Creates a method with no selector fragments or parameters.
    #[must_use]
    pub fn new(location: Location) -> Self {
        Self {
            location,
            selector: Vec::new(),
            parameters: Vec::new(),
        }
    }

    /// Appends a selector fragment.
    #[must_use]
    pub fn with_selector_part(mut self, name: impl Into<String>, location: Location) -> Self {
        self.selector.push(NamedPart::new(name, location));
        self
    }

    /// Appends a parameter.
    #[must_use]
    pub fn with_parameter(mut self, name: impl Into<String>, location: Location) -> Self {
        self.parameters.push(NamedPart::new(name, location));
        self
    }

    /// Joins the selector fragments into the full selector name.
    ///
    /// A unary selector (one fragment, no parameters) has no trailing colon.
    #[must_use]
    pub fn selector_name(&self) -> String {
        if self.parameters.is_empty() && self.selector.len() == 1 {
            return self.selector[0].name.clone();
        }
        self.selector
            .iter()
            .map(|part| format!("{}:", part.name))
            .collect()
    }
}
