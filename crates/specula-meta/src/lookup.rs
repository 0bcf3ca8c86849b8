//! Member lookup over the inheritance chain
//!
//! Lookups search the type's own declarations first and then each ancestor
//! upward. The first type in the chain that declares a matching member
//! wins, so a member redeclared on a descendant shadows the ancestor's.
//! Members found on an ancestor keep that ancestor as their declaring type.

use crate::member::{ConstructorInfo, FieldInfo, MemberInfo, MethodInfo, PropertyInfo};
use crate::ty::{TypeInfo, TypeRef};

/// Iterator over a type and its ancestors, most derived first
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    next: Option<&'a TypeInfo>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a TypeInfo;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.base();
        Some(current)
    }
}

impl TypeInfo {
    /// Iterate over this type and its ancestors, starting with `self`
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors { next: Some(self) }
    }

    /// Get the inheritance chain from this type up to the root
    pub fn hierarchy(&self) -> Vec<&TypeRef> {
        self.ancestors().map(|ty| &ty.type_ref).collect()
    }

    /// Check if this type is `other` or derives from it
    pub fn is_subclass_of(&self, other: &TypeRef) -> bool {
        self.ancestors().any(|ty| &ty.type_ref == other)
    }

    // ========================================================================
    // Declared members (no inheritance)
    // ========================================================================

    /// Get a field declared by this type
    pub fn declared_field(&self, name: &str) -> Option<&FieldInfo> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Get a property declared by this type
    pub fn declared_property(&self, name: &str) -> Option<&PropertyInfo> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Get the methods with the given name declared by this type
    pub fn declared_methods<'a, 'n>(&'a self, name: &'n str) -> impl Iterator<Item = &'a MethodInfo> + use<'a, 'n> {
        self.methods.iter().filter(move |m| m.name == name)
    }

    /// Get a field or property declared by this type, fields first
    pub fn declared_data_member(&self, name: &str) -> Option<MemberInfo> {
        if let Some(field) = self.declared_field(name) {
            return Some(MemberInfo::Field(field.clone()));
        }
        self.declared_property(name)
            .map(|p| MemberInfo::Property(p.clone()))
    }

    // ========================================================================
    // Inherited lookup
    // ========================================================================

    /// Get a field by name, searching ancestors
    pub fn get_field(&self, name: &str) -> Option<&FieldInfo> {
        self.ancestors().find_map(|ty| ty.declared_field(name))
    }

    /// Get a property by name, searching ancestors
    pub fn get_property(&self, name: &str) -> Option<&PropertyInfo> {
        self.ancestors().find_map(|ty| ty.declared_property(name))
    }

    /// Get the nearest field or property with the given name
    ///
    /// At each level of the chain a field takes precedence over a property
    /// of the same name.
    pub fn get_data_member(&self, name: &str) -> Option<MemberInfo> {
        self.ancestors().find_map(|ty| ty.declared_data_member(name))
    }

    /// Get every method with the given name, nearest declarations first
    pub fn get_methods<'a>(&'a self, name: &'a str) -> Vec<&'a MethodInfo> {
        self.ancestors()
            .flat_map(|ty| ty.declared_methods(name))
            .collect()
    }

    /// Get the nearest method with the given name, arity and binding
    pub fn find_method(&self, name: &str, arity: usize, is_static: bool) -> Option<&MethodInfo> {
        self.ancestors().find_map(|ty| {
            ty.declared_methods(name)
                .find(|m| m.arity() == arity && m.is_static == is_static)
        })
    }

    /// Constructors of this type; constructors are never inherited
    pub fn constructors(&self) -> &[ConstructorInfo] {
        &self.constructors
    }

    /// Check if this type or an ancestor declares a method with the name
    pub fn has_method(&self, name: &str) -> bool {
        self.ancestors()
            .any(|ty| ty.declared_methods(name).next().is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{
        ConstructorDefinition, FieldDefinition, MethodDefinition, PropertyDefinition, TypeBuilder,
    };

    fn animal() -> TypeInfo {
        TypeBuilder::class("Animal")
            .assembly("zoo")
            .field(FieldDefinition::new("name", TypeRef::of::<String>()))
            .field(FieldDefinition::new("legs", TypeRef::of::<u32>()))
            .method(MethodDefinition::new("speak").returns(TypeRef::of::<String>()))
            .method(
                MethodDefinition::new("create")
                    .as_static()
                    .param("name", TypeRef::of::<String>())
                    .returns(TypeRef::new("zoo", "Animal")),
            )
            .constructor(ConstructorDefinition::new().param("name", TypeRef::of::<String>()))
            .build()
    }

    fn dog() -> TypeInfo {
        TypeBuilder::class("Dog")
            .assembly("zoo")
            .base_info(animal())
            .property(PropertyDefinition::new("legs", TypeRef::of::<u32>()).read_only())
            .method(
                MethodDefinition::new("speak")
                    .param("loud", TypeRef::of::<bool>())
                    .returns(TypeRef::of::<String>()),
            )
            .build()
    }

    fn labrador() -> TypeInfo {
        TypeBuilder::class("Labrador")
            .assembly("zoo")
            .base_info(dog())
            .build()
    }

    #[test]
    fn test_hierarchy() {
        let lab = labrador();
        let hierarchy = lab.hierarchy();
        let names: Vec<_> = hierarchy.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Labrador", "Dog", "Animal"]);
        assert!(lab.is_subclass_of(&TypeRef::new("zoo", "Animal")));
        assert!(lab.is_subclass_of(&TypeRef::new("zoo", "Labrador")));
        assert!(!animal().is_subclass_of(&TypeRef::new("zoo", "Dog")));
    }

    #[test]
    fn test_inherited_field_keeps_declaring_type() {
        let lab = labrador();
        let field = lab.get_field("name").unwrap();
        assert_eq!(field.declaring_type, TypeRef::new("zoo", "Animal"));
        assert!(lab.declared_field("name").is_none());
    }

    #[test]
    fn test_nearest_declaration_shadows() {
        let lab = labrador();
        // `legs` is a field on Animal but redeclared as a property on Dog
        let member = lab.get_data_member("legs").unwrap();
        assert_eq!(member.kind(), crate::MemberKind::Property);
        assert_eq!(member.declaring_type(), &TypeRef::new("zoo", "Dog"));
        // the field lookup still reaches the ancestor's field
        assert_eq!(
            lab.get_field("legs").unwrap().declaring_type,
            TypeRef::new("zoo", "Animal")
        );
    }

    #[test]
    fn test_methods_nearest_first() {
        let lab = labrador();
        let speaks = lab.get_methods("speak");
        assert_eq!(speaks.len(), 2);
        assert_eq!(speaks[0].declaring_type.name, "Dog");
        assert_eq!(speaks[1].declaring_type.name, "Animal");
        assert!(lab.has_method("speak"));
        assert!(!lab.has_method("fetch"));
    }

    #[test]
    fn test_find_method_by_arity_and_binding() {
        let lab = labrador();

        let loud = lab.find_method("speak", 1, false).unwrap();
        assert_eq!(loud.declaring_type.name, "Dog");
        let quiet = lab.find_method("speak", 0, false).unwrap();
        assert_eq!(quiet.declaring_type.name, "Animal");

        assert!(lab.find_method("create", 1, true).is_some());
        assert!(lab.find_method("create", 1, false).is_none());
        assert!(lab.find_method("speak", 2, false).is_none());
    }

    #[test]
    fn test_constructors_not_inherited() {
        assert_eq!(animal().constructors().len(), 1);
        assert!(labrador().constructors().is_empty());
    }
}
