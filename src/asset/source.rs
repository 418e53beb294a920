//! Module source returned to the host in place of the asset.
//!
//! Two shapes only:
//!
//! ```text
//! export default <expr>;
//! export default { light: <expr>, dark: <expr> };
//! ```
//!
//! (`module.exports =` instead of `export default` when `es_module` is off.)
//! Expressions are inserted verbatim; they may be arbitrary code supplied
//! by a computed `public_path`.

/// Module export statement prefix.
#[inline]
pub const fn export_form(es_module: bool) -> &'static str {
    if es_module {
        "export default"
    } else {
        "module.exports ="
    }
}

/// Render the module source for a primary and optional alternate expression.
pub fn module_source(es_module: bool, primary: &str, alternate: Option<&str>) -> String {
    let export = export_form(es_module);
    match alternate {
        None => format!("{export} {primary};"),
        Some(dark) => format!("{export} {{ light: {primary}, dark: {dark} }};"),
    }
}
