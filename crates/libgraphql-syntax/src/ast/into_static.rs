use std::borrow::Cow;

use crate::ast::*;

/// Converts a borrowed AST node into one that owns all of its strings.
pub(crate) trait IntoStatic {
    type Static;

    fn into_static(self) -> Self::Static;
}

impl IntoStatic for Cow<'_, str> {
    type Static = Cow<'static, str>;

    fn into_static(self) -> Cow<'static, str> {
        Cow::Owned(self.into_owned())
    }
}

impl<T: IntoStatic> IntoStatic for Vec<T> {
    type Static = Vec<T::Static>;

    fn into_static(self) -> Vec<T::Static> {
        self.into_iter().map(IntoStatic::into_static).collect()
    }
}

impl<T: IntoStatic> IntoStatic for Option<T> {
    type Static = Option<T::Static>;

    fn into_static(self) -> Option<T::Static> {
        self.map(IntoStatic::into_static)
    }
}

/// Implements [`IntoStatic`] for a struct with a `'src` lifetime. Fields in
/// the first group hold borrowed data and are converted; fields after
/// `keep` carry no lifetime and are moved over unchanged.
macro_rules! impl_into_static_for_struct {
    ($node:ident { $($converted:ident),* $(,)? } keep { $($kept:ident),* $(,)? }) => {
        impl IntoStatic for $node<'_> {
            type Static = $node<'static>;

            fn into_static(self) -> $node<'static> {
                $node {
                    $($converted: self.$converted.into_static(),)*
                    $($kept: self.$kept,)*
                }
            }
        }
    };
}

/// Implements [`IntoStatic`] for an enum whose variants each wrap a single
/// node that implements it.
macro_rules! impl_into_static_for_enum {
    ($node:ident { $($variant:ident),* $(,)? }) => {
        impl IntoStatic for $node<'_> {
            type Static = $node<'static>;

            fn into_static(self) -> $node<'static> {
                match self {
                    $($node::$variant(inner) => $node::$variant(inner.into_static()),)*
                }
            }
        }
    };
}

// Document

impl IntoStatic for Document<'_> {
    type Static = Document<'static>;

    fn into_static(self) -> Document<'static> {
        Document {
            definitions: self.definitions.into_static(),
            comments: self.comments.into_static(),
            span: self.span,
            arena: self.arena.into_static(),
        }
    }
}

impl IntoStatic for AstArena<'_> {
    type Static = AstArena<'static>;

    fn into_static(self) -> AstArena<'static> {
        AstArena {
            values: self.values.into_static(),
            type_annotations: self.type_annotations.into_static(),
            selection_sets: self.selection_sets.into_static(),
        }
    }
}

impl_into_static_for_enum!(Definition {
    DirectiveDefinition,
    FragmentDefinition,
    OperationDefinition,
    SchemaDefinition,
    SchemaExtension,
    TypeDefinition,
    TypeExtension,
});

// Shared nodes

impl_into_static_for_struct!(Name { value } keep { span });
impl_into_static_for_struct!(Comment { value } keep { span });
impl_into_static_for_struct!(
    FieldDefinition { description, name, arguments, directives }
    keep { span, field_type }
);
impl_into_static_for_struct!(
    InputValueDefinition { description, name, directives }
    keep { span, value_type, default_value }
);
impl_into_static_for_struct!(
    EnumValueDefinition { description, name, directives } keep { span }
);
impl_into_static_for_struct!(DirectiveAnnotation { name, arguments } keep { span });
impl_into_static_for_struct!(Argument { name } keep { span, value });
impl_into_static_for_struct!(TypeCondition { named_type } keep { span });

// Values

impl IntoStatic for Value<'_> {
    type Static = Value<'static>;

    fn into_static(self) -> Value<'static> {
        match self {
            Value::Boolean(v) => Value::Boolean(v),
            Value::Enum(v) => Value::Enum(v.into_static()),
            Value::Float(v) => Value::Float(v.into_static()),
            Value::Int(v) => Value::Int(v.into_static()),
            Value::List(v) => Value::List(v),
            Value::Null(v) => Value::Null(v),
            Value::Object(v) => Value::Object(v.into_static()),
            Value::String(v) => Value::String(v.into_static()),
            Value::Variable(v) => Value::Variable(v.into_static()),
        }
    }
}

impl_into_static_for_struct!(IntValue { raw } keep { span });
impl_into_static_for_struct!(FloatValue { raw } keep { span });
impl_into_static_for_struct!(StringValue { value } keep { is_block, span });
impl_into_static_for_struct!(EnumValue { value } keep { span });
impl_into_static_for_struct!(VariableValue { name } keep { span });
impl_into_static_for_struct!(ObjectValue { fields } keep { span });
impl_into_static_for_struct!(ObjectField { name } keep { value, span });

// Type annotations

impl IntoStatic for TypeAnnotation<'_> {
    type Static = TypeAnnotation<'static>;

    fn into_static(self) -> TypeAnnotation<'static> {
        match self {
            TypeAnnotation::Named(t) => TypeAnnotation::Named(t.into_static()),
            TypeAnnotation::List(t) => TypeAnnotation::List(t),
            TypeAnnotation::NonNull(t) => TypeAnnotation::NonNull(t),
        }
    }
}

impl_into_static_for_struct!(NamedTypeAnnotation { name } keep { span });

// Executable definitions

impl_into_static_for_struct!(
    OperationDefinition { name, variable_definitions, directives }
    keep { span, operation_kind, selection_set, is_shorthand }
);
impl_into_static_for_struct!(
    VariableDefinition { variable, directives }
    keep { span, var_type, default_value }
);
impl_into_static_for_struct!(
    FragmentDefinition { name, type_condition, directives }
    keep { span, selection_set }
);
impl_into_static_for_struct!(SelectionSet { selections } keep { span });
impl_into_static_for_enum!(Selection { Field, FragmentSpread, InlineFragment });
impl_into_static_for_struct!(
    Field { alias, name, arguments, directives } keep { span, selection_set }
);
impl_into_static_for_struct!(FragmentSpread { name, directives } keep { span });
impl_into_static_for_struct!(
    InlineFragment { type_condition, directives } keep { span, selection_set }
);

// Type system definitions

impl_into_static_for_struct!(
    SchemaDefinition { description, directives, root_operation_types } keep { span }
);
impl_into_static_for_struct!(
    RootOperationTypeDefinition { named_type } keep { span, operation_kind }
);
impl_into_static_for_enum!(TypeDefinition {
    Enum,
    InputObject,
    Interface,
    Object,
    Scalar,
    Union,
});
impl_into_static_for_struct!(
    ScalarTypeDefinition { description, name, directives } keep { span }
);
impl_into_static_for_struct!(
    ObjectTypeDefinition { description, name, implements, directives, fields }
    keep { span }
);
impl_into_static_for_struct!(
    InterfaceTypeDefinition { description, name, implements, directives, fields }
    keep { span }
);
impl_into_static_for_struct!(
    UnionTypeDefinition { description, name, directives, members } keep { span }
);
impl_into_static_for_struct!(
    EnumTypeDefinition { description, name, directives, values } keep { span }
);
impl_into_static_for_struct!(
    InputObjectTypeDefinition { description, name, directives, fields } keep { span }
);
impl_into_static_for_struct!(
    DirectiveDefinition { description, name, arguments }
    keep { span, repeatable, locations }
);

// Type system extensions

impl_into_static_for_struct!(
    SchemaExtension { directives, root_operation_types } keep { span }
);
impl_into_static_for_enum!(TypeExtension {
    Enum,
    InputObject,
    Interface,
    Object,
    Scalar,
    Union,
});
impl_into_static_for_struct!(ScalarTypeExtension { name, directives } keep { span });
impl_into_static_for_struct!(
    ObjectTypeExtension { name, implements, directives, fields } keep { span }
);
impl_into_static_for_struct!(
    InterfaceTypeExtension { name, implements, directives, fields } keep { span }
);
impl_into_static_for_struct!(
    UnionTypeExtension { name, directives, members } keep { span }
);
impl_into_static_for_struct!(
    EnumTypeExtension { name, directives, values } keep { span }
);
impl_into_static_for_struct!(
    InputObjectTypeExtension { name, directives, fields } keep { span }
);
