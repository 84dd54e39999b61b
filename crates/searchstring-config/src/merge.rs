//! Layering configuration files into one set of parser options.

use std::path::Path;

use searchstring::{ArgumentError, DefaultSymbol, ParseOptions};

use crate::{
    Config, ConfigError,
    parse::{ParsedConfig, RawParserSettings},
};

/// Layers `configs` over [`ParseOptions::default`].
///
/// Configs are given highest precedence first (closest to the working directory), global
/// last. For each setting the first file that defines it wins. Every value is validated,
/// including values a closer file overrides.
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    let options = configs
        .iter()
        .rev()
        .try_fold(ParseOptions::default(), |options, parsed| {
            match &parsed.config.parser {
                Some(section) => apply_parser_section(options, section, &parsed.source.path),
                None => Ok(options),
            }
        })?;

    Ok(Config {
        options,
        sources: configs.iter().map(|c| c.source.clone()).collect(),
    })
}

/// Overlays one `[parser]` section onto `options`.
fn apply_parser_section(
    mut options: ParseOptions,
    section: &RawParserSettings,
    path: &Path,
) -> Result<ParseOptions, ConfigError> {
    let invalid = |key: &'static str, source: ArgumentError| ConfigError::InvalidSetting {
        path: path.to_path_buf(),
        key,
        source,
    };

    if let Some(min_length) = &section.min_length {
        options = min_length
            .apply(options)
            .map_err(|e| invalid("min_length", e))?;
    }
    if let Some(symbol) = &section.default_symbol {
        let symbol = symbol
            .parse::<DefaultSymbol>()
            .map_err(|e| invalid("default_symbol", e))?;
        options = options.with_default_symbol(symbol);
    }
    if let Some(throw_on_error) = section.throw_on_error {
        options = options.with_throw_on_error(throw_on_error);
    }

    Ok(options)
}
