use std::fmt;
use std::ops::BitOr;

use convert_case::{Case, Casing};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::error::Result;

/// One output category a generation call can request.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum OutputKind {
    Properties,
    Fields,
    Enums,
    Constants,
}

impl OutputKind {
    const fn bit(self) -> u8 {
        match self {
            OutputKind::Properties => 1,
            OutputKind::Fields => 1 << 1,
            OutputKind::Enums => 1 << 2,
            OutputKind::Constants => 1 << 3,
        }
    }
}

/// A combinable set of [`OutputKind`] tags. Any subset is representable; the
/// empty selection yields empty output for every module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutputSelection(u8);

impl OutputSelection {
    pub const EMPTY: OutputSelection = OutputSelection(0);

    pub fn of(kinds: &[OutputKind]) -> Self {
        kinds.iter().fold(Self::EMPTY, |acc, kind| acc.with(*kind))
    }

    #[must_use]
    pub fn with(self, kind: OutputKind) -> Self {
        OutputSelection(self.0 | kind.bit())
    }

    pub fn contains(self, kind: OutputKind) -> bool {
        self.0 & kind.bit() != 0
    }

    /// True when the selection holds `kind` and nothing else.
    pub fn is_exactly(self, kind: OutputKind) -> bool {
        self.0 == kind.bit()
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl Default for OutputSelection {
    /// The default generation call requests properties plus enums.
    fn default() -> Self {
        OutputSelection::of(&[OutputKind::Properties, OutputKind::Enums])
    }
}

impl From<OutputKind> for OutputSelection {
    fn from(kind: OutputKind) -> Self {
        OutputSelection(kind.bit())
    }
}

impl BitOr for OutputSelection {
    type Output = OutputSelection;

    fn bitor(self, rhs: Self) -> Self {
        OutputSelection(self.0 | rhs.0)
    }
}

impl BitOr<OutputKind> for OutputSelection {
    type Output = OutputSelection;

    fn bitor(self, rhs: OutputKind) -> Self {
        self.with(rhs)
    }
}

impl BitOr for OutputKind {
    type Output = OutputSelection;

    fn bitor(self, rhs: OutputKind) -> OutputSelection {
        OutputSelection::from(self).with(rhs)
    }
}

impl fmt::Display for OutputSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        let mut first = true;
        for kind in OutputKind::iter() {
            if self.contains(kind) {
                if !first {
                    write!(f, " | ")?;
                }
                write!(f, "{}", kind)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Value representation used by the enum emitter.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum EnumMode {
    #[default]
    Number,
    String,
}

/// Case strategy applied to declared type identifiers before sorting and
/// emission.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum NameCase {
    #[default]
    Preserve,
    Pascal,
    Camel,
}

impl NameCase {
    pub fn apply(self, name: &str) -> String {
        match self {
            NameCase::Preserve => name.to_string(),
            NameCase::Pascal => name.to_case(Case::Pascal),
            NameCase::Camel => name.to_case(Case::Camel),
        }
    }
}

/// Configuration for generation passes. Set before calling
/// [`crate::Generator::generate`]; immutable for the duration of a call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Value representation once the const-object encoding is active.
    #[serde(default)]
    pub enum_mode: EnumMode,
    /// Emit enums as `const ... as const` objects with a derived union type
    /// alias instead of delegating to the classic enum construct.
    #[serde(default)]
    pub enum_as_const_assertion: bool,
    /// Case strategy for declared type identifiers.
    #[serde(default)]
    pub type_name_case: NameCase,
    /// Fixed-width indentation unit, nested once per block depth.
    #[serde(default = "default_indent")]
    pub indent: String,
}

fn default_indent() -> String {
    "\t".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            enum_mode: EnumMode::default(),
            enum_as_const_assertion: false,
            type_name_case: NameCase::default(),
            indent: default_indent(),
        }
    }
}

impl GeneratorConfig {
    /// Loads configuration from a TOML document, e.g.
    ///
    /// ```toml
    /// enum_mode = "string"
    /// enum_as_const_assertion = true
    /// type_name_case = "pascal"
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }
}
