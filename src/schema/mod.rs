//! Resource schema declarations
//!
//! Every resource type declares a static attribute table. The table drives
//! validation, request building, state reconciliation and the `schema`
//! command output, so resources never look fields up by hand.

mod validate;

pub use validate::validate;

/// Duration strings accepted by the API (`30s`, `15m`, `24h`, `30d`)
pub const DURATION_PATTERN: &str = r"^\d+[smhd]$";

/// Primitive type of an attribute
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttrType {
    String,
    Int,
    Float,
    Bool,
    StringList,
    StringMap,
    /// Optional nested object, stored as a list holding at most one map
    Block(&'static [Attribute]),
    /// Unordered collection of nested objects
    BlockList(&'static [Attribute]),
}

impl AttrType {
    /// Short name used in schema output and validation messages
    pub fn label(&self) -> &'static str {
        match self {
            AttrType::String => "string",
            AttrType::Int => "int",
            AttrType::Float => "float",
            AttrType::Bool => "bool",
            AttrType::StringList => "list(string)",
            AttrType::StringMap => "map(string)",
            AttrType::Block(_) => "block",
            AttrType::BlockList(_) => "set(block)",
        }
    }
}

/// Who owns the attribute value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Operator must set it
    Required,
    /// Operator may set it
    Optional,
    /// Server sets it; operator must not
    Computed,
    /// Operator may set it; server fills it otherwise
    OptionalComputed,
}

impl Mode {
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Required => "required",
            Mode::Optional => "optional",
            Mode::Computed => "computed",
            Mode::OptionalComputed => "optional+computed",
        }
    }
}

/// Value constraint checked before any network call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Validation {
    None,
    /// String must match the regex; `hint` is shown on failure
    Pattern {
        regex: &'static str,
        hint: &'static str,
    },
    /// String must be one of the listed values
    OneOf(&'static [&'static str]),
}

/// Single attribute declaration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attribute {
    pub name: &'static str,
    pub ty: AttrType,
    pub mode: Mode,
    /// Write-only: sent to the API, never read back into state
    pub sensitive: bool,
    /// Changing the value replaces the entity
    pub force_new: bool,
    pub validation: Validation,
    pub description: &'static str,
}

impl Attribute {
    const fn new(name: &'static str, ty: AttrType) -> Self {
        Self {
            name,
            ty,
            mode: Mode::Optional,
            sensitive: false,
            force_new: false,
            validation: Validation::None,
            description: "",
        }
    }

    pub const fn string(name: &'static str) -> Self {
        Self::new(name, AttrType::String)
    }

    pub const fn int(name: &'static str) -> Self {
        Self::new(name, AttrType::Int)
    }

    pub const fn float(name: &'static str) -> Self {
        Self::new(name, AttrType::Float)
    }

    pub const fn bool(name: &'static str) -> Self {
        Self::new(name, AttrType::Bool)
    }

    pub const fn string_list(name: &'static str) -> Self {
        Self::new(name, AttrType::StringList)
    }

    pub const fn string_map(name: &'static str) -> Self {
        Self::new(name, AttrType::StringMap)
    }

    pub const fn block(name: &'static str, fields: &'static [Attribute]) -> Self {
        Self::new(name, AttrType::Block(fields))
    }

    pub const fn block_list(name: &'static str, fields: &'static [Attribute]) -> Self {
        Self::new(name, AttrType::BlockList(fields))
    }

    pub const fn required(self) -> Self {
        Self {
            mode: Mode::Required,
            ..self
        }
    }

    pub const fn computed(self) -> Self {
        Self {
            mode: Mode::Computed,
            ..self
        }
    }

    pub const fn optional_computed(self) -> Self {
        Self {
            mode: Mode::OptionalComputed,
            ..self
        }
    }

    pub const fn sensitive(self) -> Self {
        Self {
            sensitive: true,
            ..self
        }
    }

    pub const fn force_new(self) -> Self {
        Self {
            force_new: true,
            ..self
        }
    }

    pub const fn pattern(self, regex: &'static str, hint: &'static str) -> Self {
        Self {
            validation: Validation::Pattern { regex, hint },
            ..self
        }
    }

    pub const fn duration(self) -> Self {
        self.pattern(DURATION_PATTERN, "a duration such as 30s, 15m, 24h or 30d")
    }

    pub const fn one_of(self, values: &'static [&'static str]) -> Self {
        Self {
            validation: Validation::OneOf(values),
            ..self
        }
    }

    pub const fn describe(self, description: &'static str) -> Self {
        Self {
            description,
            ..self
        }
    }

    /// Whether the operator may declare a value for this attribute
    pub fn is_settable(&self) -> bool {
        self.mode != Mode::Computed
    }
}

/// Attribute table of one resource type
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub resource_type: &'static str,
    pub description: &'static str,
    pub attributes: &'static [Attribute],
}

impl Schema {
    /// Look up an attribute by name
    pub fn attribute(&self, name: &str) -> Option<&'static Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Attributes the operator may declare
    pub fn settable(&self) -> impl Iterator<Item = &'static Attribute> {
        self.attributes.iter().filter(|a| a.is_settable())
    }

    /// Attributes that must never be read back from the API
    pub fn sensitive(&self) -> impl Iterator<Item = &'static Attribute> {
        self.attributes.iter().filter(|a| a.sensitive)
    }

    /// Attributes whose change forces replacement
    pub fn force_new(&self) -> impl Iterator<Item = &'static Attribute> {
        self.attributes.iter().filter(|a| a.force_new)
    }
}
