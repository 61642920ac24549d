use serde::Serialize;

use crate::{
    signature::{KernelSignature, ParameterQualifier, ParameterSignature},
    type_map::map_type,
};

/// How an argument is marshalled at the native call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Qualifier {
    /// Set by device-memory handle.
    Global,
    /// Only an allocation size is set; no payload.
    Local,
    /// Set as an explicit `(size, address)` byte blob.
    ByValue,
}

impl From<Option<ParameterQualifier>> for Qualifier {
    fn from(qualifier: Option<ParameterQualifier>) -> Self {
        match qualifier {
            Some(ParameterQualifier::Global | ParameterQualifier::Constant) => {
                Qualifier::Global
            },
            Some(ParameterQualifier::Local) => Qualifier::Local,
            Some(
                ParameterQualifier::Private
                | ParameterQualifier::ReadOnly
                | ParameterQualifier::WriteOnly
                | ParameterQualifier::ReadWrite,
            )
            | None => Qualifier::ByValue,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArgumentDescriptor {
    /// Native binding index; equal to the declaration position.
    pub index: u32,
    pub identifier: String,
    pub dialect_type: String,
    pub vector_width: u8,
    pub qualifier: Qualifier,
    pub is_pointer: bool,
    pub mapped_host_type: String,
}

impl ArgumentDescriptor {
    pub fn from_parameter(
        index: u32,
        parameter: &ParameterSignature,
    ) -> Self {
        Self {
            index,
            identifier: parameter.name.clone(),
            dialect_type: parameter.data_type.clone(),
            vector_width: parameter.vector_width,
            qualifier: parameter.qualifier.into(),
            is_pointer: parameter.is_pointer,
            mapped_host_type: map_type(
                &parameter.data_type,
                parameter.vector_width,
            )
            .into_owned(),
        }
    }

    /// Name of the generated parameter. Local arguments carry a length.
    pub fn parameter_name(&self) -> String {
        match self.qualifier {
            Qualifier::Local => format!("{}_length", self.identifier),
            Qualifier::Global | Qualifier::ByValue => self.identifier.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KernelDescriptor {
    pub name: String,
    pub line: usize,
    pub arguments: Vec<ArgumentDescriptor>,
}

impl KernelDescriptor {
    pub fn from_signature(signature: &KernelSignature) -> Self {
        let arguments = signature
            .parameters
            .iter()
            .zip(0u32..)
            .map(|(parameter, index)| {
                ArgumentDescriptor::from_parameter(index, parameter)
            })
            .collect();

        Self {
            name: signature.name.clone(),
            line: signature.line,
            arguments,
        }
    }
}
