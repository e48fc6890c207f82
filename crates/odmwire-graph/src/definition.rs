use crate::value::ParamValue;
use serde::Serialize;

///
/// Visibility
///
/// Services default to private; the compiler marks root-level entry points
/// public explicitly.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub enum Visibility {
    Public,
    #[default]
    Private,
}

impl Visibility {
    #[must_use]
    pub const fn is_public(self) -> bool {
        matches!(self, Self::Public)
    }
}

///
/// ServiceArg
///
/// One constructor or method-call argument: an embedded literal or a
/// reference to another id in the same graph.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum ServiceArg {
    Value(ParamValue),
    Ref(String),
}

impl ServiceArg {
    /// Build a reference argument from anything id-like.
    #[must_use]
    pub fn reference(id: impl Into<String>) -> Self {
        Self::Ref(id.into())
    }

    #[must_use]
    pub fn as_ref_id(&self) -> Option<&str> {
        match self {
            Self::Ref(id) => Some(id),
            Self::Value(_) => None,
        }
    }
}

impl From<ParamValue> for ServiceArg {
    fn from(value: ParamValue) -> Self {
        Self::Value(value)
    }
}

///
/// MethodCall
///
/// Post-construction call recorded on a definition, applied by the registry
/// consumer in order.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct MethodCall {
    pub method: String,
    pub args: Vec<ServiceArg>,
}

impl MethodCall {
    #[must_use]
    pub fn new(method: impl Into<String>, args: Vec<ServiceArg>) -> Self {
        Self {
            method: method.into(),
            args,
        }
    }
}

///
/// ServiceDefinition
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ServiceDefinition {
    pub id: String,
    pub constructor: String,
    pub args: Vec<ServiceArg>,
    pub calls: Vec<MethodCall>,
    pub visibility: Visibility,
    pub tags: Vec<String>,
}

impl ServiceDefinition {
    /// Start a private definition with no arguments.
    #[must_use]
    pub fn new(id: impl Into<String>, constructor: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            constructor: constructor.into(),
            args: Vec::new(),
            calls: Vec::new(),
            visibility: Visibility::Private,
            tags: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_arg(mut self, arg: ServiceArg) -> Self {
        self.args.push(arg);
        self
    }

    #[must_use]
    pub fn with_args(mut self, args: impl IntoIterator<Item = ServiceArg>) -> Self {
        self.args.extend(args);
        self
    }

    /// Append a post-construction call; used while a definition is still
    /// being assembled, before it is handed to the graph.
    pub fn push_call(&mut self, call: MethodCall) {
        self.calls.push(call);
    }

    #[must_use]
    pub fn public(mut self) -> Self {
        self.visibility = Visibility::Public;
        self
    }

    #[must_use]
    pub fn tagged(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    #[must_use]
    pub const fn is_public(&self) -> bool {
        self.visibility.is_public()
    }

    /// Iterate every argument, constructor and method-call alike.
    pub fn all_args(&self) -> impl Iterator<Item = &ServiceArg> {
        self.args
            .iter()
            .chain(self.calls.iter().flat_map(|call| call.args.iter()))
    }
}
