use serde::Serialize;

/// Value kinds understood by the downstream option-parsing library.
///
/// `Flag` is never written by the user; the scanner assigns it to every
/// declaration that has flags but no type token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ArgType {
    #[serde(rename = "int")]
    Int,
    #[serde(rename = "long")]
    Long,
    #[serde(rename = "uint")]
    UInt,
    #[serde(rename = "ulong")]
    ULong,
    #[serde(rename = "float")]
    Float,
    #[serde(rename = "double")]
    Double,
    #[serde(rename = "string")]
    Str,
    #[serde(rename = "hex")]
    Hex,
    #[serde(rename = "flag")]
    Flag,
}

impl ArgType {
    /// Every type a user may name in a declaration, in table order.
    pub const USER_TYPES: [ArgType; 8] = [
        ArgType::Int,
        ArgType::Long,
        ArgType::UInt,
        ArgType::ULong,
        ArgType::Float,
        ArgType::Double,
        ArgType::Str,
        ArgType::Hex,
    ];

    /// Looks up a user-supplied type token. The flag pseudo-type is not
    /// reachable by name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::USER_TYPES.into_iter().find(|t| t.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            ArgType::Int => "int",
            ArgType::Long => "long",
            ArgType::UInt => "uint",
            ArgType::ULong => "ulong",
            ArgType::Float => "float",
            ArgType::Double => "double",
            ArgType::Str => "string",
            ArgType::Hex => "hex",
            ArgType::Flag => "flag",
        }
    }

    /// Symbolic tag used in registration-table rows.
    pub fn tag(self) -> &'static str {
        match self {
            ArgType::Int | ArgType::Flag => "ARGTYPE_INT",
            ArgType::Long => "ARGTYPE_LONG",
            ArgType::UInt => "ARGTYPE_UINT",
            ArgType::ULong => "ARGTYPE_ULONG",
            ArgType::Float => "ARGTYPE_FLOAT",
            ArgType::Double => "ARGTYPE_DOUBLE",
            ArgType::Str => "ARGTYPE_STRING",
            ArgType::Hex => "ARGTYPE_HEX",
        }
    }

    /// Storage type as written in the variable declaration. Pointer types
    /// keep the `*` attached so `char *name` renders without a gap.
    pub fn storage_type(self) -> &'static str {
        match self {
            ArgType::Int | ArgType::Flag => "int",
            ArgType::Long | ArgType::Hex => "long",
            ArgType::UInt => "unsigned",
            ArgType::ULong => "unsigned long",
            ArgType::Float => "float",
            ArgType::Double => "double",
            ArgType::Str => "char *",
        }
    }

    pub fn default_value(self) -> &'static str {
        match self {
            ArgType::Int | ArgType::Long | ArgType::Hex | ArgType::Flag => "0",
            ArgType::UInt | ArgType::ULong => "0u",
            ArgType::Float => "0.0f",
            ArgType::Double => "0.0",
            ArgType::Str => "NULL",
        }
    }

    /// Prefix of generated variable names. Types sharing a storage type
    /// share a stem (and therefore a naming sequence), except flags, which
    /// get their own so they never shadow an `int` option.
    pub fn stem(self) -> &'static str {
        match self {
            ArgType::Int => "int",
            ArgType::Long | ArgType::Hex => "long",
            ArgType::UInt => "unsigned",
            ArgType::ULong => "ulong",
            ArgType::Float => "float",
            ArgType::Double => "double",
            ArgType::Str => "char",
            ArgType::Flag => "flag",
        }
    }
}

impl std::fmt::Display for ArgType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
