//! Starter files written by `ssp init`.
//!
//! Templates are rendered from [`ParseOptions::default`], so the values they document are
//! the values the parser uses. Every setting is commented out: a fresh file changes
//! nothing until it is edited.

use searchstring::ParseOptions;

use crate::discovery::ConfigScope;

/// Returns the template for a `.ssp.toml` in a project directory.
pub fn local_template() -> String {
    render(ConfigScope::Local)
}

/// Returns the template for `~/.ssp.toml`.
pub fn global_template() -> String {
    render(ConfigScope::Global)
}

/// Renders the template for `scope` with the parser defaults filled in.
fn render(scope: ConfigScope) -> String {
    let defaults = ParseOptions::default();

    let header = match scope {
        ConfigScope::Local => "\
# ssp configuration for this directory tree.
#
# Settings here take precedence over parent directories and ~/.ssp.toml.

# Stop looking for configuration in parent directories and ~/.ssp.toml.
# root = false
",
        ConfigScope::Global => "\
# Global ssp configuration (~/.ssp.toml).
#
# Applies everywhere unless a .ssp.toml closer to the working directory overrides it.
",
    };

    format!(
        "{header}
# [parser]
# Terms shorter than this many characters are skipped.
# min_length = {min_length}

# Bucket for terms without +, -, AND, OR or NOT: \"or\" (optional) or \"and\" (required).
# default_symbol = \"{default_symbol}\"

# Fail on the first syntax problem instead of reporting it as a warning.
# throw_on_error = {throw_on_error}
",
        min_length = defaults.min_length(),
        default_symbol = defaults.default_symbol().as_str(),
        throw_on_error = defaults.throw_on_error(),
    )
}
