//! The full rule catalog, in its fixed evaluation order.

use crate::{
    ClassNaming, CommentLength, CommentPresence, DocstringFormat, FunctionNaming, LineLength,
    MissingDocstring, MultiImport, NestedLoop, ShortDocstring, SingleLetterName,
};
use snark_lint_core::{Config, RuleCatalog};

/// Builds the catalog of every built-in rule with default parameters.
///
/// Registration order is load-bearing: findings on the same line keep
/// the order their rules were registered in, so reordering this list
/// reorders reports.
#[must_use]
pub fn default_catalog() -> RuleCatalog {
    catalog_with(&Config::default())
}

/// Builds the full catalog with parameters taken from `config`.
///
/// Unknown rule names and unknown parameter keys are ignored; there is
/// no way to leave a rule out.
#[must_use]
pub fn catalog_with(config: &Config) -> RuleCatalog {
    let mut catalog = RuleCatalog::new();

    catalog.register(FunctionNaming::new());
    catalog.register(ClassNaming::new());
    catalog.register(MissingDocstring::new());

    let mut short = ShortDocstring::new();
    if let Some(min) = param(config, crate::docstrings::SHORT_NAME, "min_length") {
        short = short.min_length(min);
    }
    catalog.register(short);

    catalog.register(DocstringFormat::new());

    let exempt = config
        .rule_options(crate::single_letter::NAME)
        .map(|options| options.get_str_array("exempt"))
        .unwrap_or_default();
    catalog.register(SingleLetterName::new().exempt(exempt));

    catalog.register(MultiImport::new());
    catalog.register(NestedLoop::new());
    catalog.register(CommentPresence::new());

    let mut comment_length = CommentLength::new();
    if let Some(max) = param(config, crate::comments::LENGTH_NAME, "max_length") {
        comment_length = comment_length.max_length(max);
    }
    catalog.register(comment_length);

    let mut line_length = LineLength::new();
    if let Some(limit) = param(config, crate::line_length::NAME, "code_limit") {
        line_length = line_length.code_limit(limit);
    }
    if let Some(limit) = param(config, crate::line_length::NAME, "comment_limit") {
        line_length = line_length.comment_limit(limit);
    }
    catalog.register_text(line_length);

    catalog
}

fn param(config: &Config, rule: &str, key: &str) -> Option<usize> {
    config.rule_options(rule).and_then(|options| options.get(key))
}
