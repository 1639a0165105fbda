// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Schema macro implementation.
//!
//! This module contains all code generation logic for `#[rowbind::schema]`.
//! It discovers the declarations of the annotated module, extracts one model
//! per entity and delegates code generation to specialized submodules.
//!
//! # Architecture
//!
//! ```text
//! entity.rs (orchestrator)
//! │
//! ├── parse/          → Module discovery (SchemaModule, EntityDef, FieldDef, LocatorDef)
//! ├── model/          → Normalized Entity, supertype chain, locator, value types
//! ├── diagnostics.rs  → Schema error sink
//! ├── context.rs      → Shared generated names
//! ├── protocol.rs     → Builder state table
//! │
//! ├── collection.rs   → Collection type and entry points
//! ├── binding.rs      → Row binding
//! ├── builder.rs      → Typestate query builder
//! ├── list.rs         → Result list
//! │
//! └── rewrite.rs      → Marker stripping, inherited field injection
//! ```
//!
//! # Failure Isolation
//!
//! | Problem | Effect |
//! |---------|--------|
//! | schema error (e.g. duplicate column) | reported, entity generated without the capability |
//! | structural error (e.g. bad locator) | reported, entity skipped |
//! | malformed macro arguments | reported, module left unchanged |
//!
//! Every problem is emitted as `compile_error!` inside the rewritten module,
//! so the rest of the module still compiles and one run shows all errors.

mod binding;
mod builder;
mod collection;
mod context;
mod diagnostics;
mod list;
mod model;
mod parse;
mod protocol;
mod rewrite;
#[cfg(test)]
mod test_support;

use std::collections::HashMap;

use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::{Item, ItemMod};

use self::{
    context::Context,
    diagnostics::Diagnostics,
    model::{Entity, Hierarchy},
    parse::{EntityDef, SchemaArgs, SchemaModule}
};

/// Main entry point for the schema macro.
pub fn expand(args: TokenStream, input: TokenStream) -> TokenStream {
    let args = match SchemaArgs::parse(args) {
        Ok(args) => args,
        Err(err) => {
            let mut out = err.write_errors();
            out.extend(input);
            return out;
        }
    };

    match syn::parse2::<ItemMod>(input) {
        Ok(module) => expand_module(&args, module),
        Err(err) => err.to_compile_error()
    }
}

/// Rewrite one schema module.
pub fn expand_module(args: &SchemaArgs, mut module: ItemMod) -> TokenStream {
    let Some((_, items)) = &mut module.content else {
        return syn::Error::new_spanned(
            &module,
            "#[rowbind::schema] must be applied to an inline module: `mod name { ... }`"
        )
        .to_compile_error();
    };

    let mut schema = SchemaModule::collect(items);
    let mut diagnostics = Diagnostics::new();
    diagnostics.extend(schema.take_errors());

    let mut generated = Vec::new();
    let mut inherited = HashMap::new();

    for decl in schema.entities() {
        let hierarchy = match Hierarchy::resolve(decl, &schema) {
            Ok(hierarchy) => hierarchy,
            Err(err) => {
                diagnostics.report(err);
                continue;
            }
        };

        let fields = hierarchy.inherited_fields();
        if !fields.is_empty() {
            inherited.insert(decl.name_str(), fields);
        }

        match generate(args, &schema, decl, &hierarchy, &mut diagnostics) {
            Ok(tokens) => generated.push(Item::Verbatim(tokens)),
            Err(err) => diagnostics.report(err)
        }
    }

    rewrite::apply(items, &inherited);
    items.extend(generated);
    if !diagnostics.is_empty() {
        items.push(Item::Verbatim(diagnostics.into_tokens()));
    }

    module.into_token_stream()
}

fn generate(
    args: &SchemaArgs,
    schema: &SchemaModule,
    decl: &EntityDef,
    hierarchy: &Hierarchy<'_>,
    diagnostics: &mut Diagnostics
) -> darling::Result<TokenStream> {
    let entity = Entity::extract(hierarchy, schema.locators_for(&decl.ident), diagnostics)?;
    let ctx = Context::new(&entity, &args.krate);
    Ok(collection::generate(&ctx, diagnostics))
}
