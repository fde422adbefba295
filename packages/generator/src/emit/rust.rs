//! Rust source emitter.
//!
//! Produces a struct that owns the root instance, drives the runtime
//! initialization state machine and exposes one getter per accessor.
//! Items are assembled as token streams and formatted with `prettyplease`.

use std::collections::HashMap;
use std::sync::LazyLock;

use convert_case::{Case, Casing};
use proc_macro2::{Ident, Span, TokenStream};
use quote::{format_ident, quote};
use regex::Regex;

use crate::config::RUNTIME_CRATE;
use crate::error::{GeneratorError, Result};
use crate::types::{AccessorSpec, GenerationSpec, TypeDescriptor};

/// Logical names usable as accessors: an ASCII identifier.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static IDENTIFIER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid regex"));

/// Rust keywords that can be used as raw identifiers.
const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut",
    "pub", "ref", "return", "static", "struct", "trait", "true", "type", "unsafe", "use",
    "where", "while", "abstract", "become", "box", "do", "final", "gen", "macro", "override",
    "priv", "try", "typeof", "unsized", "virtual", "yield",
];

/// Keywords that cannot be raw identifiers.
const RESERVED: &[&str] = &["self", "Self", "super", "crate", "_"];

/// Methods every generated type defines, including trait methods.
const GENERATED_METHODS: &[&str] = &[
    "new",
    "with_post_initialize",
    "root",
    "root_mut",
    "initialize_component",
    "is_initialized",
    "connect",
];

/// Settings for the Rust emitter.
#[derive(Debug, Clone)]
pub struct RustOptions {
    /// Module path that toolkit types are imported from.
    pub types_module: String,

    /// Crate path of the runtime support library.
    pub runtime_crate: String,
}

impl Default for RustOptions {
    fn default() -> Self {
        Self {
            types_module: "crate::ui".to_string(),
            runtime_crate: RUNTIME_CRATE.to_string(),
        }
    }
}

/// Convert a logical name to a `snake_case` method name.
///
/// # Examples
/// ```
/// use xamlnames_generator::emit::to_snake_case;
///
/// assert_eq!(to_snake_case("OkButton"), "ok_button");
/// assert_eq!(to_snake_case("HTTPServer"), "http_server");
/// ```
pub fn to_snake_case(name: &str) -> String {
    name.to_case(Case::Snake)
}

/// Method identifier for an accessor, raw when it is a keyword.
fn method_ident(accessor: &AccessorSpec) -> Result<Ident> {
    let invalid = || GeneratorError::InvalidIdentifier {
        name: accessor.name.clone(),
        position: accessor.position.clone(),
    };

    if !IDENTIFIER_PATTERN.is_match(&accessor.name) {
        return Err(invalid());
    }

    let name = to_snake_case(&accessor.name);
    if !IDENTIFIER_PATTERN.is_match(&name)
        || RESERVED.contains(&name.as_str())
        || GENERATED_METHODS.contains(&name.as_str())
    {
        return Err(invalid());
    }
    if KEYWORDS.contains(&name.as_str()) {
        return Ok(Ident::new_raw(&name, Span::call_site()));
    }
    Ok(format_ident!("{}", name))
}

/// Identifier for the last segment of a dotted type name.
fn type_ident(full_name: &str, short_name: &str) -> Result<Ident> {
    if !IDENTIFIER_PATTERN.is_match(short_name)
        || RESERVED.contains(&short_name)
        || KEYWORDS.contains(&short_name)
    {
        return Err(GeneratorError::InvalidTypeName(full_name.to_string()));
    }
    Ok(format_ident!("{}", short_name))
}

fn parse_path(path: &str) -> Result<syn::Path> {
    syn::parse_str::<syn::Path>(path).map_err(|e| GeneratorError::InvalidRustPath {
        path: path.to_string(),
        message: e.to_string(),
    })
}

fn element_type(ty: &TypeDescriptor, types_module: &syn::Path) -> Result<TokenStream> {
    let ident = type_ident(ty.full_name(), ty.short_name())?;
    Ok(quote! { #types_module::#ident })
}

/// Every concrete type is emitted as `types_module::ShortName`, so two
/// namespaces sharing a short name cannot both be referenced.
fn check_short_names(spec: &GenerationSpec) -> Result<()> {
    let mut seen: HashMap<&str, &str> = HashMap::new();
    let types = std::iter::once(&spec.base_type)
        .chain(spec.accessors.iter().map(|a| &a.resolved_type))
        .filter(|ty| !ty.is_object());

    for ty in types {
        match seen.get(ty.short_name()) {
            Some(&first) if first != ty.full_name() => {
                return Err(GeneratorError::AmbiguousTypeName {
                    short_name: ty.short_name().to_string(),
                    first: first.to_string(),
                    second: ty.full_name().to_string(),
                });
            }
            Some(_) => {}
            None => {
                seen.insert(ty.short_name(), ty.full_name());
            }
        }
    }
    Ok(())
}

fn generate_getter(
    method: &Ident,
    accessor: &AccessorSpec,
    types_module: &syn::Path,
) -> Result<TokenStream> {
    let doc = format!(" `{}` declared at {}.", accessor.name, accessor.position);
    let name = accessor.name.as_str();

    if accessor.resolved_type.is_object() {
        return Ok(quote! {
            #[doc = #doc]
            pub fn #method(&mut self) -> Result<Object, AccessError> {
                self.initialize_component();
                locate_object(self.names.get_or_build(&self.root), #name)
            }
        });
    }

    let target = element_type(&accessor.resolved_type, types_module)?;
    Ok(quote! {
        #[doc = #doc]
        pub fn #method(&mut self) -> Result<Arc<#target>, AccessError> {
            self.initialize_component();
            locate_as(self.names.get_or_build(&self.root), #name)
        }
    })
}

/// Generate Rust source for a spec.
///
/// # Errors
/// - `InvalidIdentifier` when an accessor name is not an identifier, or maps
///   to a reserved word or a generated method.
/// - `NameCollision` when two accessor names map to the same method.
/// - `UnresolvedRootType` when the root has no concrete type.
/// - `AmbiguousTypeName` when two referenced types share a short name.
/// - `InvalidRustPath` when a path in `options` does not parse.
pub fn generate_rust(spec: &GenerationSpec, options: &RustOptions) -> Result<String> {
    if spec.base_type.is_object() {
        return Err(GeneratorError::UnresolvedRootType {
            file: spec.source.clone(),
            type_name: spec.type_name.clone(),
        });
    }
    check_short_names(spec)?;

    let mut methods: Vec<(Ident, &AccessorSpec)> = Vec::with_capacity(spec.accessors.len());
    let mut seen: HashMap<String, &AccessorSpec> = HashMap::new();
    for accessor in &spec.accessors {
        let method = method_ident(accessor)?;
        if let Some(first) = seen.insert(method.to_string(), accessor) {
            return Err(GeneratorError::NameCollision {
                name: to_snake_case(&accessor.name),
                first: first.position.clone(),
                second: accessor.position.clone(),
            });
        }
        methods.push((method, accessor));
    }

    let runtime = parse_path(&options.runtime_crate)?;
    let types_module = parse_path(&options.types_module)?;
    let ty = type_ident(&spec.type_name, spec.short_type_name())?;
    let root = element_type(&spec.base_type, &types_module)?;
    let has_index = spec.contract.name_index && !methods.is_empty();

    let imports = if has_index {
        quote! {
            use std::sync::Arc;

            #[allow(unused_imports)]
            use #runtime::{
                locate_as, locate_object, AccessError, ComponentConnector, InitState,
                LazyNameIndex, Object, Realize,
            };
        }
    } else {
        quote! {
            use #runtime::{ComponentConnector, InitState, Object, Realize};
        }
    };
    let names_field = has_index.then(|| quote! { names: LazyNameIndex, });
    let names_init = has_index.then(|| quote! { names: LazyNameIndex::new(), });
    let getters = if has_index {
        methods
            .iter()
            .map(|(method, accessor)| generate_getter(method, accessor, &types_module))
            .collect::<Result<Vec<_>>>()?
    } else {
        Vec::new()
    };

    let struct_doc = format!(" Component generated from `{}`.", spec.source);
    let resource_uri = spec.contract.resource_uri.as_str();

    let tokens = quote! {
        #imports

        #[doc = #struct_doc]
        pub struct #ty {
            root: #root,
            init_state: InitState,
            post_initialize: Option<fn(&mut #ty)>,
            #names_field
        }

        impl #ty {
            pub const RESOURCE_URI: &str = #resource_uri;

            pub fn new(root: #root) -> Self {
                Self {
                    root,
                    init_state: InitState::default(),
                    post_initialize: None,
                    #names_init
                }
            }

            pub fn with_post_initialize(root: #root, hook: fn(&mut #ty)) -> Self {
                let mut component = Self::new(root);
                component.post_initialize = Some(hook);
                component
            }

            pub fn root(&self) -> &#root {
                &self.root
            }

            pub fn root_mut(&mut self) -> &mut #root {
                &mut self.root
            }

            pub fn is_initialized(&self) -> bool {
                self.init_state.is_initialized()
            }

            /// Realize the object graph from markup. Runs once; later calls return immediately.
            pub fn initialize_component(&mut self) {
                if !self.init_state.begin() {
                    return;
                }
                self.root.realize(Self::RESOURCE_URI);
                if let Some(hook) = self.post_initialize {
                    hook(self);
                }
            }

            #(#getters)*
        }

        impl ComponentConnector for #ty {
            fn connect(&mut self, _connection_id: i32, _target: Object) {}
        }
    };

    let syn_file = syn::parse_file(&tokens.to_string())?;
    Ok(format!(
        "// Generated by xamlnames from {}. Do not edit.\n\n{}",
        spec.source,
        prettyplease::unparse(&syn_file)
    ))
}
