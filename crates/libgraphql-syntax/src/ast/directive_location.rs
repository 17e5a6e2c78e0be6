use crate::ast::ast_node::impl_ast_node_via_span_field;
use crate::GraphQLSourceSpan;

/// A directive location with its own span, as listed after `on` in a
/// directive definition.
///
/// See
/// [Directive Locations](https://spec.graphql.org/October2021/#DirectiveLocations)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveLocation {
    pub kind: DirectiveLocationKind,
    pub span: GraphQLSourceSpan,
}

/// The kind of location where a directive may be applied.
///
/// The first eight variants are executable locations; the rest are
/// type-system locations.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DirectiveLocationKind {
    // Executable
    Query,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    VariableDefinition,

    // Type system
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
}

/// Canonical spelling of each location, in declaration order.
static DIRECTIVE_LOCATION_NAMES: [(&str, DirectiveLocationKind); 19] = [
    ("QUERY", DirectiveLocationKind::Query),
    ("MUTATION", DirectiveLocationKind::Mutation),
    ("SUBSCRIPTION", DirectiveLocationKind::Subscription),
    ("FIELD", DirectiveLocationKind::Field),
    ("FRAGMENT_DEFINITION", DirectiveLocationKind::FragmentDefinition),
    ("FRAGMENT_SPREAD", DirectiveLocationKind::FragmentSpread),
    ("INLINE_FRAGMENT", DirectiveLocationKind::InlineFragment),
    ("VARIABLE_DEFINITION", DirectiveLocationKind::VariableDefinition),
    ("SCHEMA", DirectiveLocationKind::Schema),
    ("SCALAR", DirectiveLocationKind::Scalar),
    ("OBJECT", DirectiveLocationKind::Object),
    ("FIELD_DEFINITION", DirectiveLocationKind::FieldDefinition),
    ("ARGUMENT_DEFINITION", DirectiveLocationKind::ArgumentDefinition),
    ("INTERFACE", DirectiveLocationKind::Interface),
    ("UNION", DirectiveLocationKind::Union),
    ("ENUM", DirectiveLocationKind::Enum),
    ("ENUM_VALUE", DirectiveLocationKind::EnumValue),
    ("INPUT_OBJECT", DirectiveLocationKind::InputObject),
    ("INPUT_FIELD_DEFINITION", DirectiveLocationKind::InputFieldDefinition),
];

impl DirectiveLocationKind {
    /// Every location, executable ones first.
    pub fn all() -> impl Iterator<Item = DirectiveLocationKind> {
        DIRECTIVE_LOCATION_NAMES.iter().map(|(_, kind)| *kind)
    }

    /// Every canonical location name (`QUERY`, `FIELD_DEFINITION`, ...).
    pub fn all_names() -> impl Iterator<Item = &'static str> {
        DIRECTIVE_LOCATION_NAMES.iter().map(|(name, _)| *name)
    }

    /// Looks up a location by its canonical name. The match is exact and
    /// case-sensitive: `"FIELD"` is a location, `"field"` is not.
    pub fn from_name(name: &str) -> Option<Self> {
        DIRECTIVE_LOCATION_NAMES
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, kind)| *kind)
    }

    /// The canonical name of this location.
    pub fn name(&self) -> &'static str {
        match self {
            DirectiveLocationKind::Query => "QUERY",
            DirectiveLocationKind::Mutation => "MUTATION",
            DirectiveLocationKind::Subscription => "SUBSCRIPTION",
            DirectiveLocationKind::Field => "FIELD",
            DirectiveLocationKind::FragmentDefinition => "FRAGMENT_DEFINITION",
            DirectiveLocationKind::FragmentSpread => "FRAGMENT_SPREAD",
            DirectiveLocationKind::InlineFragment => "INLINE_FRAGMENT",
            DirectiveLocationKind::VariableDefinition => "VARIABLE_DEFINITION",
            DirectiveLocationKind::Schema => "SCHEMA",
            DirectiveLocationKind::Scalar => "SCALAR",
            DirectiveLocationKind::Object => "OBJECT",
            DirectiveLocationKind::FieldDefinition => "FIELD_DEFINITION",
            DirectiveLocationKind::ArgumentDefinition => "ARGUMENT_DEFINITION",
            DirectiveLocationKind::Interface => "INTERFACE",
            DirectiveLocationKind::Union => "UNION",
            DirectiveLocationKind::Enum => "ENUM",
            DirectiveLocationKind::EnumValue => "ENUM_VALUE",
            DirectiveLocationKind::InputObject => "INPUT_OBJECT",
            DirectiveLocationKind::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
        }
    }

    /// Human-readable description of this location.
    pub fn description(&self) -> &'static str {
        match self {
            DirectiveLocationKind::Query => "Location adjacent to a query operation.",
            DirectiveLocationKind::Mutation => "Location adjacent to a mutation operation.",
            DirectiveLocationKind::Subscription => {
                "Location adjacent to a subscription operation."
            },
            DirectiveLocationKind::Field => "Location adjacent to a field.",
            DirectiveLocationKind::FragmentDefinition => {
                "Location adjacent to a fragment definition."
            },
            DirectiveLocationKind::FragmentSpread => "Location adjacent to a fragment spread.",
            DirectiveLocationKind::InlineFragment => "Location adjacent to an inline fragment.",
            DirectiveLocationKind::VariableDefinition => {
                "Location adjacent to a variable definition."
            },
            DirectiveLocationKind::Schema => "Location adjacent to a schema definition.",
            DirectiveLocationKind::Scalar => "Location adjacent to a scalar definition.",
            DirectiveLocationKind::Object => "Location adjacent to an object type definition.",
            DirectiveLocationKind::FieldDefinition => "Location adjacent to a field definition.",
            DirectiveLocationKind::ArgumentDefinition => {
                "Location adjacent to an argument definition."
            },
            DirectiveLocationKind::Interface => "Location adjacent to an interface definition.",
            DirectiveLocationKind::Union => "Location adjacent to a union definition.",
            DirectiveLocationKind::Enum => "Location adjacent to an enum definition",
            DirectiveLocationKind::EnumValue => "Location adjacent to an enum value definition",
            DirectiveLocationKind::InputObject => {
                "Location adjacent to an input object type definition."
            },
            DirectiveLocationKind::InputFieldDefinition => {
                "Location adjacent to an input object field definition."
            },
        }
    }

    pub fn is_executable(&self) -> bool {
        matches!(
            self,
            DirectiveLocationKind::Query
                | DirectiveLocationKind::Mutation
                | DirectiveLocationKind::Subscription
                | DirectiveLocationKind::Field
                | DirectiveLocationKind::FragmentDefinition
                | DirectiveLocationKind::FragmentSpread
                | DirectiveLocationKind::InlineFragment
                | DirectiveLocationKind::VariableDefinition
        )
    }

    pub fn is_type_system(&self) -> bool {
        !self.is_executable()
    }
}

impl std::fmt::Display for DirectiveLocationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl_ast_node_via_span_field!(DirectiveLocation);
