//! Which parameters carry the binding-expression marker.
use bindpath_syntax::{Argument, SourceUnit};
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// The marker attribute recognised when none is configured.
pub const DEFAULT_MARKER: &str = "BindingExpression";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterInfo {
    pub name: String,
    pub is_binding: bool,
}

/// The parameter list of a declared function, as far as the checker cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub name: String,
    pub params: Vec<ParameterInfo>,
}

/// Answers marker questions about call targets.
pub trait MarkerLookup: Send + Sync {
    /// The signature declared for `callee`, if any.
    fn signature(&self, callee: &str) -> Option<&Signature>;

    fn is_binding_parameter(&self, signature: &Signature, index: usize) -> bool {
        signature
            .params
            .get(index)
            .is_some_and(|param| param.is_binding)
    }

    fn has_binding_parameters(&self, signature: &Signature) -> bool {
        (0..signature.params.len()).any(|index| self.is_binding_parameter(signature, index))
    }

    /// The parameter `arg` binds to: by name when the argument is named,
    /// by `position` otherwise.
    fn bound_parameter(
        &self,
        signature: &Signature,
        arg: &Argument,
        position: usize,
    ) -> Option<usize> {
        match &arg.name {
            Some(name) => signature.params.iter().position(|param| &param.name == name),
            None => (position < signature.params.len()).then_some(position),
        }
    }
}

/// Signatures collected from the `fn` declarations of source units.
#[derive(Debug, Clone)]
pub struct DeclarationIndex {
    marker: String,
    signatures: HashMap<String, Signature>,
}

impl Default for DeclarationIndex {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER)
    }
}

impl DeclarationIndex {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            signatures: HashMap::new(),
        }
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// `[Marker]` and `[MarkerAttribute]` name the same attribute.
    pub fn is_marker(&self, attribute: &str) -> bool {
        attribute == self.marker
            || attribute
                .strip_suffix("Attribute")
                .is_some_and(|stem| stem == self.marker)
    }

    /// Records every function declared at the top level of `unit`. The first
    /// declaration of a name wins.
    pub fn add_unit(&mut self, unit: &SourceUnit) {
        for decl in unit.functions() {
            let signature = Signature {
                name: decl.name.clone(),
                params: decl
                    .params
                    .iter()
                    .map(|param| ParameterInfo {
                        name: param.name.clone(),
                        is_binding: param.attributes.iter().any(|a| self.is_marker(a)),
                    })
                    .collect(),
            };
            match self.signatures.entry(decl.name.clone()) {
                Entry::Occupied(_) => {
                    log::warn!(
                        "'{}' is declared more than once; keeping the first declaration",
                        decl.name
                    );
                }
                Entry::Vacant(slot) => {
                    log::debug!(
                        "declared '{}' with {} marked parameter(s)",
                        decl.name,
                        signature.params.iter().filter(|p| p.is_binding).count()
                    );
                    slot.insert(signature);
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }
}

impl MarkerLookup for DeclarationIndex {
    fn signature(&self, callee: &str) -> Option<&Signature> {
        self.signatures.get(callee)
    }
}
