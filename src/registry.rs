//! Function registry — name → callable descriptor.
//!
//! Descriptors are registered explicitly rather than discovered at runtime:
//! each entry states its parameter types, whether the last parameter is
//! variadic, and its return types. A registry can be built in code, loaded
//! from a JSON manifest, or taken from the built-in [`Registry::standard`] set.

use crate::error::ManifestError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

/// A parameter or return type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// Accepts anything; rendered as `any`.
    Any,
    Named(String),
}

impl TypeRef {
    /// Parse a type name, mapping `any` to [`TypeRef::Any`].
    pub fn parse(name: &str) -> Self {
        match name.trim() {
            "any" => TypeRef::Any,
            other => TypeRef::Named(other.to_string()),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Any => f.write_str("any"),
            TypeRef::Named(name) => f.write_str(name),
        }
    }
}

impl From<&str> for TypeRef {
    fn from(name: &str) -> Self {
        TypeRef::parse(name)
    }
}

/// Shape of a callable: ordered parameters, variadic marker, ordered returns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FuncDescriptor {
    pub params: Vec<TypeRef>,
    /// Last parameter accepts any number of values
    pub variadic: bool,
    pub returns: Vec<TypeRef>,
}

impl FuncDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(mut self, ty: impl Into<TypeRef>) -> Self {
        self.params.push(ty.into());
        self
    }

    /// Mark the last parameter as variadic.
    pub fn variadic(mut self) -> Self {
        self.variadic = true;
        self
    }

    pub fn returns(mut self, ty: impl Into<TypeRef>) -> Self {
        self.returns.push(ty.into());
        self
    }
}

/// A value bound to a name in the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding {
    Func(FuncDescriptor),
    /// A non-callable value; only its type name is known.
    Value { type_name: String },
}

impl Binding {
    /// Short description of what kind of value this is, for diagnostics.
    pub fn kind(&self) -> &str {
        match self {
            Binding::Func(_) => "func",
            Binding::Value { type_name } => type_name,
        }
    }
}

/// Read-only mapping from function name to binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    entries: BTreeMap<String, Binding>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a function descriptor, replacing any previous binding.
    pub fn register(&mut self, name: impl Into<String>, desc: FuncDescriptor) -> &mut Self {
        self.entries.insert(name.into(), Binding::Func(desc));
        self
    }

    /// Register a non-callable value.
    pub fn register_value(
        &mut self,
        name: impl Into<String>,
        type_name: impl Into<String>,
    ) -> &mut Self {
        self.entries.insert(
            name.into(),
            Binding::Value {
                type_name: type_name.into(),
            },
        );
        self
    }

    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load a registry from a JSON manifest file.
    pub fn load_manifest(path: &Path) -> Result<Self, ManifestError> {
        let content = fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_manifest_str(&content)
    }

    /// Parse a JSON manifest of the form
    /// `{ "Add": { "params": ["int", "int"], "returns": ["int"] } }`.
    pub fn from_manifest_str(json: &str) -> Result<Self, ManifestError> {
        let manifest: BTreeMap<String, ManifestEntry> = serde_json::from_str(json)?;
        let mut registry = Registry::new();
        for (name, entry) in manifest {
            let binding = entry.into_binding(&name)?;
            registry.entries.insert(name, binding);
        }
        Ok(registry)
    }

    /// Built-in template helper functions.
    pub fn standard() -> Self {
        let mut r = Registry::new();
        let s = FuncDescriptor::new;

        // strings
        r.register("lower", s().param("any").returns("string"));
        r.register("upper", s().param("any").returns("string"));
        r.register("trim", s().param("any").returns("string"));
        r.register("replace", s().param("any").param("string").param("string").param("int").returns("string"));
        r.register("split", s().param("any").param("string").returns("[]string"));
        r.register("join", s().param("any").param("string").returns("string"));
        r.register("contains", s().param("any").param("any").returns("bool"));
        r.register("hasPrefix", s().param("any").param("string").returns("bool"));
        r.register("hasSuffix", s().param("any").param("string").returns("bool"));
        r.register("concat", s().param("any").variadic().returns("string"));
        r.register("sprintf", s().param("string").param("any").variadic().returns("string"));

        // collections
        r.register("len", s().param("any").returns("int"));
        r.register("first", s().param("any").returns("any"));
        r.register("last", s().param("any").returns("any"));
        r.register("uniq", s().param("any").returns("[]any"));
        r.register("sort", s().param("any").param("string").variadic().returns("[]any"));
        r.register("get", s().param("any").param("any").param("any").variadic().returns("any"));

        // math
        r.register("add", s().param("any").param("any").returns("float64"));
        r.register("subtract", s().param("any").param("any").returns("float64"));
        r.register("multiply", s().param("any").param("any").returns("float64"));
        r.register("divide", s().param("any").param("any").returns("float64").returns("error"));
        r.register("sum", s().param("any").variadic().returns("float64"));

        // types
        r.register("asInt", s().param("any").returns("int64").returns("error"));
        r.register("asBool", s().param("any").returns("bool"));
        r.register("isEmpty", s().param("any").returns("bool"));
        r.register("now", s().returns("Time"));

        r
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestEntry {
    #[serde(default)]
    params: Vec<String>,
    #[serde(default)]
    variadic: bool,
    #[serde(default)]
    returns: Vec<String>,
    value: Option<String>,
}

impl ManifestEntry {
    fn into_binding(self, name: &str) -> Result<Binding, ManifestError> {
        let invalid = |reason: &str| ManifestError::Invalid {
            name: name.to_string(),
            reason: reason.to_string(),
        };

        if let Some(type_name) = self.value {
            if !self.params.is_empty() || !self.returns.is_empty() || self.variadic {
                return Err(invalid("\"value\" cannot be combined with a function shape"));
            }
            return Ok(Binding::Value { type_name });
        }

        if self.variadic && self.params.is_empty() {
            return Err(invalid("variadic function needs at least one parameter"));
        }
        if self.params.iter().chain(&self.returns).any(|t| t.trim().is_empty()) {
            return Err(invalid("empty type name"));
        }

        Ok(Binding::Func(FuncDescriptor {
            params: self.params.iter().map(|t| TypeRef::parse(t)).collect(),
            variadic: self.variadic,
            returns: self.returns.iter().map(|t| TypeRef::parse(t)).collect(),
        }))
    }
}
