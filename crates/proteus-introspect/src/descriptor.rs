//! Descriptor value types standing in for runtime reflection.
//!
//! A [`TypeDescriptor`] describes one registered type: its parent, the
//! capabilities it implements, and the methods *declared at its own level*.
//! Methods inherited from an ancestor are not repeated; the
//! [`MethodEnumerator`](crate::MethodEnumerator) walks the parent chain when
//! the full invocable surface of a type is needed.
//!
//! All descriptors are immutable value data: no identity beyond equality of
//! their fields, no mutation after [`build`](TypeDescriptorBuilder::build).
//! They serialize with serde so descriptor tables can be generated ahead of
//! time by a codegen step and loaded at startup.
//!
//! # Example
//!
//! ```rust
//! use proteus_introspect::{MethodDescriptor, ParameterDescriptor, TypeDescriptor, TypeName};
//!
//! let entity = TypeDescriptor::builder("CartEntity")
//!     .parent("EntityBase")
//!     .method(
//!         MethodDescriptor::builder("add_item")
//!             .parameter(ParameterDescriptor::new("AddItem"))
//!             .build(),
//!     )
//!     .build();
//!
//! assert_eq!(entity.name(), &TypeName::from("CartEntity"));
//! assert_eq!(entity.methods().len(), 1);
//! ```

use crate::marker::Marker;
use crate::well_known;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A cheap, clonable handle referencing a type in the registry.
///
/// Type names are plain strings; equality of names is equality of types.
/// The framework's fixed comparison anchors live in [`crate::well_known`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeName(String);

impl TypeName {
    /// Creates a type name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for TypeName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl AsRef<str> for TypeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for TypeName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TypeName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Visibility of a declared method.
///
/// The default enumeration strategy reports only [`Public`](Self::Public)
/// methods; alternate strategies may include the rest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Publicly invocable.
    #[default]
    Public,
    /// Internal to the declaring type.
    Private,
}

impl Visibility {
    /// Returns `true` for [`Visibility::Public`].
    #[must_use]
    pub const fn is_public(self) -> bool {
        matches!(self, Self::Public)
    }
}

/// One formal parameter of a handler method.
///
/// Carries the declared type, the 0-based position index (stable, used to
/// align the binding plan with call-site argument order), and the markers
/// attached at discovery time.
///
/// The position index is stamped when the parameter is attached to a method
/// via [`MethodDescriptorBuilder::parameter`]; parameters are always read
/// through their owning [`MethodDescriptor`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    declared_type: TypeName,
    index: usize,
    markers: Vec<Marker>,
}

impl ParameterDescriptor {
    /// Creates a parameter with the given declared type and no markers.
    #[must_use]
    pub fn new(declared_type: impl Into<TypeName>) -> Self {
        Self {
            declared_type: declared_type.into(),
            index: 0,
            markers: Vec::new(),
        }
    }

    /// Attaches a marker to this parameter.
    #[must_use]
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }

    /// Returns the declared type.
    #[must_use]
    pub fn declared_type(&self) -> &TypeName {
        &self.declared_type
    }

    /// Returns the 0-based position of this parameter in its method.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the markers attached to this parameter.
    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Returns `true` if the given marker is attached.
    #[must_use]
    pub fn has_marker(&self, marker: &Marker) -> bool {
        self.markers.contains(marker)
    }

    pub(crate) fn at_index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }
}

/// One publicly discoverable method of a registered type.
///
/// Immutable once built. The declaring type is stamped when the method is
/// attached to a [`TypeDescriptor`]; until then it defaults to the universal
/// root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    name: String,
    declaring_type: TypeName,
    visibility: Visibility,
    parameters: Vec<ParameterDescriptor>,
    markers: Vec<Marker>,
}

impl MethodDescriptor {
    /// Creates a new method builder.
    ///
    /// # Example
    ///
    /// ```rust
    /// use proteus_introspect::{Marker, MethodDescriptor, ParameterDescriptor, well_known};
    ///
    /// let method = MethodDescriptor::builder("place_order")
    ///     .parameter(ParameterDescriptor::new("CommandContext"))
    ///     .parameter(ParameterDescriptor::new(well_known::STRING).with_marker(Marker::EntityId))
    ///     .parameter(ParameterDescriptor::new("OrderRequest"))
    ///     .build();
    ///
    /// assert_eq!(method.arity(), 3);
    /// assert_eq!(method.parameters()[1].index(), 1);
    /// ```
    #[must_use]
    pub fn builder(name: impl Into<String>) -> MethodDescriptorBuilder {
        MethodDescriptorBuilder {
            name: name.into(),
            visibility: Visibility::Public,
            parameters: Vec::new(),
            markers: Vec::new(),
        }
    }

    /// Returns the method name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the type this method is declared on.
    #[must_use]
    pub fn declaring_type(&self) -> &TypeName {
        &self.declaring_type
    }

    /// Returns the method visibility.
    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Returns the formal parameters in declaration order.
    #[must_use]
    pub fn parameters(&self) -> &[ParameterDescriptor] {
        &self.parameters
    }

    /// Returns the number of formal parameters.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    /// Returns the method-level markers.
    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Returns `true` if the given method-level marker is attached.
    #[must_use]
    pub fn has_marker(&self, marker: &Marker) -> bool {
        self.markers.contains(marker)
    }

    /// Returns the signature key identifying an override across a chain:
    /// the method name together with the declared parameter types.
    #[must_use]
    pub fn signature(&self) -> (&str, Vec<&TypeName>) {
        (
            &self.name,
            self.parameters.iter().map(ParameterDescriptor::declared_type).collect(),
        )
    }

    pub(crate) fn declared_in(mut self, declaring_type: TypeName) -> Self {
        self.declaring_type = declaring_type;
        self
    }
}

/// Builder for [`MethodDescriptor`].
#[derive(Debug)]
pub struct MethodDescriptorBuilder {
    name: String,
    visibility: Visibility,
    parameters: Vec<ParameterDescriptor>,
    markers: Vec<Marker>,
}

impl MethodDescriptorBuilder {
    /// Sets the method visibility (defaults to public).
    #[must_use]
    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Appends a formal parameter, stamping its position index.
    #[must_use]
    pub fn parameter(mut self, parameter: ParameterDescriptor) -> Self {
        let index = self.parameters.len();
        self.parameters.push(parameter.at_index(index));
        self
    }

    /// Attaches a method-level marker.
    #[must_use]
    pub fn marker(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }

    /// Builds the method descriptor.
    #[must_use]
    pub fn build(self) -> MethodDescriptor {
        MethodDescriptor {
            name: self.name,
            declaring_type: TypeName::from(well_known::ROOT),
            visibility: self.visibility,
            parameters: self.parameters,
            markers: self.markers,
        }
    }
}

/// A registered type: name, optional parent, implemented capabilities, and
/// the methods declared at this level only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    name: TypeName,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    parent: Option<TypeName>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    capabilities: Vec<TypeName>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    methods: Vec<MethodDescriptor>,
}

impl TypeDescriptor {
    /// Creates a new type builder.
    #[must_use]
    pub fn builder(name: impl Into<TypeName>) -> TypeDescriptorBuilder {
        TypeDescriptorBuilder {
            name: name.into(),
            parent: None,
            capabilities: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Returns the type name.
    #[must_use]
    pub fn name(&self) -> &TypeName {
        &self.name
    }

    /// Returns the declared parent type, if any.
    #[must_use]
    pub fn parent(&self) -> Option<&TypeName> {
        self.parent.as_ref()
    }

    /// Returns the capabilities this type implements.
    #[must_use]
    pub fn capabilities(&self) -> &[TypeName] {
        &self.capabilities
    }

    /// Returns the methods declared at this level only.
    #[must_use]
    pub fn methods(&self) -> &[MethodDescriptor] {
        &self.methods
    }

    /// Looks up a declared method by name.
    #[must_use]
    pub fn method(&self, name: &str) -> Option<&MethodDescriptor> {
        self.methods.iter().find(|m| m.name() == name)
    }
}

/// Builder for [`TypeDescriptor`].
#[derive(Debug)]
pub struct TypeDescriptorBuilder {
    name: TypeName,
    parent: Option<TypeName>,
    capabilities: Vec<TypeName>,
    methods: Vec<MethodDescriptor>,
}

impl TypeDescriptorBuilder {
    /// Sets the parent type.
    #[must_use]
    pub fn parent(mut self, parent: impl Into<TypeName>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Adds an implemented capability.
    #[must_use]
    pub fn capability(mut self, capability: impl Into<TypeName>) -> Self {
        self.capabilities.push(capability.into());
        self
    }

    /// Adds a method declared at this level, stamping its declaring type.
    #[must_use]
    pub fn method(mut self, method: MethodDescriptor) -> Self {
        let method = method.declared_in(self.name.clone());
        self.methods.push(method);
        self
    }

    /// Builds the type descriptor.
    #[must_use]
    pub fn build(self) -> TypeDescriptor {
        TypeDescriptor {
            name: self.name,
            parent: self.parent,
            capabilities: self.capabilities,
            methods: self.methods,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_name_display_and_eq() {
        let name = TypeName::new("OrderEntity");
        assert_eq!(name.to_string(), "OrderEntity");
        assert_eq!(name, "OrderEntity");
        assert_eq!(name.as_str(), "OrderEntity");
    }

    #[test]
    fn test_parameter_indices_follow_declaration_order() {
        let method = MethodDescriptor::builder("handle")
            .parameter(ParameterDescriptor::new("A"))
            .parameter(ParameterDescriptor::new("B"))
            .parameter(ParameterDescriptor::new("C"))
            .build();

        let indices: Vec<usize> = method.parameters().iter().map(ParameterDescriptor::index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_parameter_markers() {
        let param = ParameterDescriptor::new(well_known::STRING).with_marker(Marker::EntityId);
        assert!(param.has_marker(&Marker::EntityId));
        assert!(!param.has_marker(&Marker::Custom("other".to_string())));
    }

    #[test]
    fn test_declaring_type_stamped_on_registration() {
        let ty = TypeDescriptor::builder("CartEntity")
            .method(MethodDescriptor::builder("add_item").build())
            .build();

        assert_eq!(ty.method("add_item").unwrap().declaring_type(), &TypeName::from("CartEntity"));
    }

    #[test]
    fn test_method_lookup_by_name() {
        let ty = TypeDescriptor::builder("CartEntity")
            .method(MethodDescriptor::builder("add_item").build())
            .method(MethodDescriptor::builder("checkout").build())
            .build();

        assert!(ty.method("checkout").is_some());
        assert!(ty.method("missing").is_none());
    }

    #[test]
    fn test_signature_distinguishes_overloads() {
        let a = MethodDescriptor::builder("handle")
            .parameter(ParameterDescriptor::new("A"))
            .build();
        let b = MethodDescriptor::builder("handle")
            .parameter(ParameterDescriptor::new("B"))
            .build();

        assert_ne!(a.signature(), b.signature());
    }

    #[test]
    fn test_visibility_default_public() {
        let method = MethodDescriptor::builder("handle").build();
        assert!(method.visibility().is_public());

        let private = MethodDescriptor::builder("internal")
            .visibility(Visibility::Private)
            .build();
        assert!(!private.visibility().is_public());
    }

    #[test]
    fn test_descriptor_equality_is_value_equality() {
        let build = || {
            MethodDescriptor::builder("handle")
                .parameter(ParameterDescriptor::new("Payload"))
                .build()
        };
        assert_eq!(build(), build());
    }
}
