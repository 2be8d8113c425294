//! `tsconfig.dev.json` generator.

use kiln_core::{FileRules, GeneratedFile};
use serde::Serialize;

use super::{MARKER, to_json};

/// Compiler settings for tests and editors; jsii owns `tsconfig.json`.
pub struct TsConfigDev;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TsConfig {
    compiler_options: CompilerOptions,
    include: [&'static str; 2],
    exclude: [&'static str; 1],
    #[serde(rename = "//")]
    marker: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CompilerOptions {
    always_strict: bool,
    declaration: bool,
    es_module_interop: bool,
    experimental_decorators: bool,
    inline_source_map: bool,
    inline_sources: bool,
    lib: [&'static str; 1],
    module: &'static str,
    no_emit_on_error: bool,
    no_fallthrough_cases_in_switch: bool,
    no_implicit_any: bool,
    no_implicit_returns: bool,
    no_implicit_this: bool,
    no_unused_locals: bool,
    no_unused_parameters: bool,
    resolve_json_module: bool,
    strict: bool,
    strict_null_checks: bool,
    strict_property_initialization: bool,
    strip_internal: bool,
    target: &'static str,
}

impl GeneratedFile for TsConfigDev {
    fn path(&self) -> &str {
        "tsconfig.dev.json"
    }

    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    fn render(&self) -> eyre::Result<String> {
        to_json(&TsConfig {
            compiler_options: CompilerOptions {
                always_strict: true,
                declaration: true,
                es_module_interop: true,
                experimental_decorators: true,
                inline_source_map: true,
                inline_sources: true,
                lib: ["es2020"],
                module: "CommonJS",
                no_emit_on_error: false,
                no_fallthrough_cases_in_switch: true,
                no_implicit_any: true,
                no_implicit_returns: true,
                no_implicit_this: true,
                no_unused_locals: true,
                no_unused_parameters: true,
                resolve_json_module: true,
                strict: true,
                strict_null_checks: true,
                strict_property_initialization: true,
                strip_internal: true,
                target: "ES2020",
            },
            include: ["src/**/*.ts", "test/**/*.ts"],
            exclude: ["node_modules"],
            marker: MARKER,
        })
    }
}
